//! Stations: the vertices of the network.

use core::hash::{Hash, Hasher};
use std::collections::BTreeSet;

use cn_core::{AreaCode, Labeled};

use crate::client::Client;
use crate::error::{GraphError, GraphResult};
use crate::registry::AreaCodeRegistry;

/// Result of linking two stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Link {
    /// Neither direction existed; both were inserted.
    Added,
    /// Exactly one direction existed; the other was completed.
    Repaired,
    /// The edge was already symmetric.
    Existing,
}

impl Link {
    pub(crate) fn from_insertions(forward: bool, backward: bool) -> Self {
        match (forward, backward) {
            (true, true) => Link::Added,
            (false, false) => Link::Existing,
            _ => Link::Repaired,
        }
    }

    /// Whether the call changed any adjacency.
    pub fn changed(self) -> bool {
        self != Link::Existing
    }
}

/// A station in the network.
///
/// Identity is the area code alone: two stations with the same code are equal
/// and hash identically regardless of name, clients or neighbors. Neighbors
/// are stored by label, never by reference.
#[derive(Debug, Clone)]
pub struct Station {
    area_code: AreaCode,
    name: String,
    clients: BTreeSet<Client>,
    neighbors: BTreeSet<AreaCode>,
}

impl Station {
    /// Create a station, claiming its area code in `registry`.
    ///
    /// The code is only claimed once the client set has been accepted, so a
    /// rejected construction leaves the registry untouched.
    pub fn new(
        name: impl Into<String>,
        area_code: AreaCode,
        clients: impl IntoIterator<Item = Client>,
        registry: &mut AreaCodeRegistry,
    ) -> GraphResult<Self> {
        let clients: BTreeSet<Client> = clients.into_iter().collect();
        if clients.is_empty() {
            return Err(GraphError::EmptyClientSet { area_code });
        }
        registry.claim(area_code)?;
        Ok(Self {
            area_code,
            name: name.into(),
            clients,
            neighbors: BTreeSet::new(),
        })
    }

    pub fn area_code(&self) -> AreaCode {
        self.area_code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Clients in ascending phone order.
    pub fn clients(&self) -> &BTreeSet<Client> {
        &self.clients
    }

    /// Returns false if an equal client was already attached.
    pub fn add_client(&mut self, client: Client) -> bool {
        self.clients.insert(client)
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Neighbor labels in ascending order.
    pub fn neighbors(&self) -> impl Iterator<Item = AreaCode> + '_ {
        self.neighbors.iter().copied()
    }

    /// Label lookup in this station's own neighbor set. Never repairs.
    pub fn is_adjacent_to(&self, other: impl Labeled) -> bool {
        self.neighbors.contains(&other.area_code())
    }

    pub(crate) fn neighbor_set(&self) -> &BTreeSet<AreaCode> {
        &self.neighbors
    }

    pub(crate) fn insert_neighbor(&mut self, area_code: AreaCode) -> bool {
        self.neighbors.insert(area_code)
    }

    /// Establish a symmetric edge between two stations.
    ///
    /// A one-sided edge is completed rather than rejected.
    pub fn link(a: &mut Station, b: &mut Station) -> GraphResult<Link> {
        if a.area_code == b.area_code {
            return Err(GraphError::SelfLoop {
                area_code: a.area_code,
            });
        }
        let forward = a.insert_neighbor(b.area_code);
        let backward = b.insert_neighbor(a.area_code);
        Ok(Link::from_insertions(forward, backward))
    }

    /// Adjacency test that heals a one-sided edge.
    ///
    /// Returns true if either direction is present, after making sure both are.
    pub fn check_adjacent(a: &mut Station, b: &mut Station) -> bool {
        if a.area_code == b.area_code {
            return false;
        }
        let a_sees_b = a.neighbors.contains(&b.area_code);
        let b_sees_a = b.neighbors.contains(&a.area_code);
        if !(a_sees_b || b_sees_a) {
            return false;
        }
        a.insert_neighbor(b.area_code);
        b.insert_neighbor(a.area_code);
        true
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.area_code == other.area_code
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.area_code.hash(state);
    }
}

impl Labeled for Station {
    fn area_code(&self) -> AreaCode {
        self.area_code
    }
}
