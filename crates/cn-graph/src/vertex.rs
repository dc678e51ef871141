//! Vertex slots: registered stations and unresolved placeholders.

use std::collections::BTreeSet;

use cn_core::{AreaCode, Labeled};

use crate::station::Station;

/// A label that edges point at but that no station has claimed yet.
///
/// `pending` holds the labels of the stations that reference it; they become
/// the neighbors of the station that eventually resolves the slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub(crate) area_code: AreaCode,
    pub(crate) pending: BTreeSet<AreaCode>,
}

impl Placeholder {
    pub(crate) fn new(area_code: AreaCode) -> Self {
        Self {
            area_code,
            pending: BTreeSet::new(),
        }
    }
}

impl Labeled for Placeholder {
    fn area_code(&self) -> AreaCode {
        self.area_code
    }
}

/// One slot of the network's label map.
#[derive(Debug, Clone)]
pub enum VertexRef {
    Resolved(Station),
    Unresolved(Placeholder),
}

impl VertexRef {
    pub fn is_resolved(&self) -> bool {
        matches!(self, VertexRef::Resolved(_))
    }

    pub fn as_station(&self) -> Option<&Station> {
        match self {
            VertexRef::Resolved(station) => Some(station),
            VertexRef::Unresolved(_) => None,
        }
    }

    pub fn as_station_mut(&mut self) -> Option<&mut Station> {
        match self {
            VertexRef::Resolved(station) => Some(station),
            VertexRef::Unresolved(_) => None,
        }
    }

    /// Adjacent labels in ascending order; for a placeholder these are the
    /// stations that reference it.
    pub fn neighbors(&self) -> impl Iterator<Item = AreaCode> + '_ {
        self.adjacency().iter().copied()
    }

    fn adjacency(&self) -> &BTreeSet<AreaCode> {
        match self {
            VertexRef::Resolved(station) => station.neighbor_set(),
            VertexRef::Unresolved(placeholder) => &placeholder.pending,
        }
    }

    /// Record `other` as adjacent to this slot; returns whether it was new.
    pub(crate) fn attach(&mut self, other: AreaCode) -> bool {
        match self {
            VertexRef::Resolved(station) => station.insert_neighbor(other),
            VertexRef::Unresolved(placeholder) => placeholder.pending.insert(other),
        }
    }

    pub(crate) fn sees(&self, other: AreaCode) -> bool {
        self.adjacency().contains(&other)
    }
}

impl Labeled for VertexRef {
    fn area_code(&self) -> AreaCode {
        match self {
            VertexRef::Resolved(station) => station.area_code(),
            VertexRef::Unresolved(placeholder) => placeholder.area_code,
        }
    }
}
