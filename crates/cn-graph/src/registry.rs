//! Area code uniqueness registry.

use std::collections::BTreeSet;

use cn_core::AreaCode;

use crate::error::{GraphError, GraphResult};

/// Set of area codes already claimed by constructed stations.
///
/// Owned by whoever constructs stations (usually a `Network`), so its
/// lifetime is tied to that owner rather than to the process.
#[derive(Debug, Default, Clone)]
pub struct AreaCodeRegistry {
    taken: BTreeSet<AreaCode>,
}

impl AreaCodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a code, failing if another station already holds it.
    pub fn claim(&mut self, area_code: AreaCode) -> GraphResult<()> {
        if self.taken.insert(area_code) {
            Ok(())
        } else {
            Err(GraphError::DuplicateAreaCode { area_code })
        }
    }

    /// Record a code as taken without failing if it already is.
    pub(crate) fn record(&mut self, area_code: AreaCode) {
        self.taken.insert(area_code);
    }

    pub fn is_taken(&self, area_code: AreaCode) -> bool {
        self.taken.contains(&area_code)
    }
}
