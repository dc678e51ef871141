//! Degree-sequence checks.
//!
//! `is_graphical` decides whether a sequence of non-negative integers is the
//! degree sequence of some simple undirected graph, using the linear-time form
//! of the Erdős–Gallai criterion (Király, "Recognizing graphic degree
//! sequences and generating all realizations", EGRES TR-2011-11).

use cn_core::AreaCode;

use crate::error::{GraphError, GraphResult, InvalidGraphReason};

/// True iff some simple graph has exactly this degree sequence.
///
/// The input may be in any order.
pub fn is_graphical(degrees: &[usize]) -> bool {
    let mut sorted = degrees.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    is_graphical_sorted(&sorted)
}

/// Same as [`is_graphical`] for a sequence already sorted in descending order.
pub fn is_graphical_sorted(sorted: &[usize]) -> bool {
    debug_assert!(sorted.windows(2).all(|pair| pair[0] >= pair[1]));
    let total: usize = sorted.iter().sum();
    if total % 2 != 0 {
        return false;
    }
    erdos_gallai_linear(sorted)
}

/// Linear Erdős–Gallai certificate over a descending, even-sum sequence.
///
/// For each prefix length `k`, `b` is the prefix sum, `w` bounds the indices
/// whose degree still exceeds `k`, `s` is the sum of the degrees beyond `w`
/// and `c` equals `k * (w - 1)`, so `c + s` is the right-hand side of the
/// k-th inequality. Once `w == k` every later inequality holds.
fn erdos_gallai_linear(d: &[usize]) -> bool {
    let n = d.len();
    if n == 0 {
        return true;
    }

    let mut w = n;
    let mut b = 0_usize;
    let mut c = 0_usize;
    let mut s = 0_usize;

    for k in 1..=n {
        b += d[k - 1];
        c += w - 1;
        while w > k && d[w - 1] <= k {
            s += d[w - 1];
            c -= k;
            w -= 1;
        }
        if b > c + s {
            return false;
        }
        if w == k {
            return true;
        }
    }
    false
}

/// Bound and parity checks shared by the edge-counting queries.
///
/// Every degree must be below `order` (the vertex count) and the sum must be
/// even. Returns the degree sum.
pub fn check_degrees<I>(degrees: I, order: usize) -> GraphResult<usize>
where
    I: IntoIterator<Item = (AreaCode, usize)>,
{
    let mut sum = 0_usize;
    for (area_code, degree) in degrees {
        if degree >= order {
            return Err(GraphError::invalid_graph(
                InvalidGraphReason::DegreeExceedsOrder {
                    area_code,
                    degree,
                    order,
                },
            ));
        }
        sum += degree;
    }
    if sum % 2 != 0 {
        return Err(GraphError::invalid_graph(InvalidGraphReason::OddDegreeSum {
            sum,
        }));
    }
    Ok(sum)
}
