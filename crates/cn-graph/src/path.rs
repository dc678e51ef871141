//! Shortest trajectories between stations.

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

use cn_core::AreaCode;

use crate::network::Network;
use crate::station::Station;
use crate::vertex::VertexRef;

/// Ordered stops of a route, endpoints included.
///
/// Owned and restartable: iterate it as many times as needed and resolve the
/// stations against the network that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trajectory {
    stops: Vec<AreaCode>,
}

impl Trajectory {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn area_codes(&self) -> &[AreaCode] {
        &self.stops
    }

    /// Number of stations on the route.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Number of links traversed.
    pub fn hops(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = AreaCode> + '_ {
        self.stops.iter().copied()
    }

    /// Resolve the stops to stations of `network`.
    pub fn stations<'a>(&'a self, network: &'a Network) -> impl Iterator<Item = &'a Station> + 'a {
        self.stops.iter().filter_map(move |&code| network.station(code))
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = AreaCode;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, AreaCode>>;

    fn into_iter(self) -> Self::IntoIter {
        self.stops.iter().copied()
    }
}

/// Breadth-first search from `from` to `to`.
///
/// Neighbors are expanded in ascending area-code order, so among several
/// shortest routes the result is always the same one. Returns an empty
/// trajectory when either endpoint is missing or `to` is unreachable.
pub(crate) fn shortest_path(
    vertices: &BTreeMap<AreaCode, VertexRef>,
    from: AreaCode,
    to: AreaCode,
) -> Trajectory {
    if !vertices.contains_key(&from) || !vertices.contains_key(&to) {
        return Trajectory::empty();
    }

    let mut parents: HashMap<AreaCode, AreaCode> = HashMap::new();
    let mut visited: HashSet<AreaCode> = HashSet::new();
    let mut queue: VecDeque<AreaCode> = VecDeque::new();
    visited.insert(from);
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        if current == to {
            return reconstruct(&parents, from, to);
        }
        let Some(vertex) = vertices.get(&current) else {
            continue;
        };
        for neighbor in vertex.neighbors() {
            if visited.insert(neighbor) {
                parents.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }

    Trajectory::empty()
}

fn reconstruct(parents: &HashMap<AreaCode, AreaCode>, from: AreaCode, to: AreaCode) -> Trajectory {
    let mut stops = vec![to];
    let mut current = to;
    while current != from {
        match parents.get(&current) {
            Some(&parent) => {
                stops.push(parent);
                current = parent;
            }
            None => return Trajectory::empty(),
        }
    }
    stops.reverse();
    Trajectory { stops }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertex::Placeholder;

    /// Map of placeholders wired with the given undirected edges; enough for BFS.
    fn wired(edges: &[(u32, u32)]) -> BTreeMap<AreaCode, VertexRef> {
        let mut vertices = BTreeMap::new();
        for &(a, b) in edges {
            let (a, b) = (AreaCode::from_u32(a), AreaCode::from_u32(b));
            vertices
                .entry(a)
                .or_insert_with(|| VertexRef::Unresolved(Placeholder::new(a)))
                .attach(b);
            vertices
                .entry(b)
                .or_insert_with(|| VertexRef::Unresolved(Placeholder::new(b)))
                .attach(a);
        }
        vertices
    }

    fn codes(trajectory: &Trajectory) -> Vec<u32> {
        trajectory.iter().map(AreaCode::get).collect()
    }

    #[test]
    fn finds_fewest_hops() {
        // 1-2-3-4 and a shortcut 1-5-4
        let vertices = wired(&[(1, 2), (2, 3), (3, 4), (1, 5), (5, 4)]);
        let path = shortest_path(&vertices, AreaCode::from_u32(1), AreaCode::from_u32(4));
        assert_eq!(codes(&path), vec![1, 5, 4]);
        assert_eq!(path.hops(), 2);
    }

    #[test]
    fn ties_go_to_the_lowest_label() {
        // Square 1-2-4, 1-3-4: both two hops
        let vertices = wired(&[(1, 3), (3, 4), (1, 2), (2, 4)]);
        let path = shortest_path(&vertices, AreaCode::from_u32(1), AreaCode::from_u32(4));
        assert_eq!(codes(&path), vec![1, 2, 4]);
    }

    #[test]
    fn unreachable_target_is_empty() {
        let vertices = wired(&[(1, 2), (3, 4)]);
        let path = shortest_path(&vertices, AreaCode::from_u32(1), AreaCode::from_u32(4));
        assert!(path.is_empty());
        assert_eq!(path.hops(), 0);
    }

    #[test]
    fn missing_endpoint_is_empty() {
        let vertices = wired(&[(1, 2)]);
        let path = shortest_path(&vertices, AreaCode::from_u32(1), AreaCode::from_u32(9));
        assert!(path.is_empty());
    }

    #[test]
    fn same_endpoint_is_single_stop() {
        let vertices = wired(&[(1, 2)]);
        let path = shortest_path(&vertices, AreaCode::from_u32(2), AreaCode::from_u32(2));
        assert_eq!(codes(&path), vec![2]);
        assert_eq!(path.hops(), 0);
    }

    #[test]
    fn trajectory_is_restartable() {
        let vertices = wired(&[(1, 2), (2, 3)]);
        let path = shortest_path(&vertices, AreaCode::from_u32(3), AreaCode::from_u32(1));
        let first: Vec<AreaCode> = (&path).into_iter().collect();
        let second: Vec<AreaCode> = path.iter().collect();
        assert_eq!(first, second);
        assert_eq!(path.area_codes(), first.as_slice());
        assert_eq!(path.len(), 3);
    }
}
