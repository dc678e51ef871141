//! The network: a label-keyed map of vertex slots plus graph-level operations.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

use cn_core::{AreaCode, Labeled};

use crate::client::Client;
use crate::degree;
use crate::error::{GraphError, GraphResult, InvalidGraphReason, label};
use crate::path::{self, Trajectory};
use crate::registry::AreaCodeRegistry;
use crate::station::{Link, Station};
use crate::vertex::{Placeholder, VertexRef};

/// Labeled, undirected, simple graph of stations.
///
/// Every key equals the area code of the slot stored under it. Adjacency is
/// kept symmetric: one-sided edges are completed whenever they are noticed
/// (on link, on adjacency queries and during consolidation).
///
/// Edges may point at labels that have no station yet (see
/// [`Network::add_edge_deferred`]). Consolidation absorbs those labels as
/// placeholders, and every degree-dependent query refuses to run until a real
/// station has resolved each placeholder.
#[derive(Debug, Default, Clone)]
pub struct Network {
    vertices: BTreeMap<AreaCode, VertexRef>,
    registry: AreaCodeRegistry,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Area codes claimed through this network.
    pub fn registry(&self) -> &AreaCodeRegistry {
        &self.registry
    }

    /// Construct a station against this network's registry.
    ///
    /// The station still has to be registered with [`Network::add_vertex`].
    pub fn new_station(
        &mut self,
        name: impl Into<String>,
        area_code: AreaCode,
        clients: impl IntoIterator<Item = Client>,
    ) -> GraphResult<Station> {
        Station::new(name, area_code, clients, &mut self.registry)
    }

    /// Register `station` under `label`.
    ///
    /// Returns `true` when the map changed: a new vertex was inserted, or a
    /// placeholder was resolved (the station inherits the placeholder's
    /// neighbors). A label that already holds a station is the same vertex by
    /// identity; the stored station is kept as is and `false` is returned.
    pub fn add_vertex(&mut self, label: impl Labeled, station: Station) -> GraphResult<bool> {
        let label = label.area_code();
        if label != station.area_code() {
            return Err(GraphError::LabelMismatch {
                label,
                area_code: station.area_code(),
            });
        }

        match self.vertices.entry(label) {
            Entry::Vacant(slot) => {
                self.registry.record(label);
                slot.insert(VertexRef::Resolved(station));
                Ok(true)
            }
            Entry::Occupied(mut slot) => {
                let pending = match slot.get_mut() {
                    VertexRef::Resolved(_) => return Ok(false),
                    VertexRef::Unresolved(placeholder) => std::mem::take(&mut placeholder.pending),
                };
                let mut station = station;
                for neighbor in pending {
                    station.insert_neighbor(neighbor);
                }
                self.registry.record(label);
                slot.insert(VertexRef::Resolved(station));
                Ok(true)
            }
        }
    }

    /// Link two registered stations.
    pub fn add_edge(&mut self, a: impl Labeled, b: impl Labeled) -> GraphResult<Link> {
        let (a, b) = (a.area_code(), b.area_code());
        if a == b {
            return Err(GraphError::SelfLoop { area_code: a });
        }
        self.require_station(a)?;
        self.require_station(b)?;
        match self.pair_mut(a, b) {
            Some((VertexRef::Resolved(first), VertexRef::Resolved(second))) => {
                Station::link(first, second)
            }
            _ => Err(GraphError::unregistered(a)),
        }
    }

    /// Link a registered station to a label that may not be registered yet.
    ///
    /// If `to` has no slot, the edge is recorded on `from` only; the next
    /// consolidation turns `to` into a placeholder. If `to` is already a
    /// placeholder, it remembers `from` directly.
    pub fn add_edge_deferred(&mut self, from: impl Labeled, to: impl Labeled) -> GraphResult<Link> {
        let (from, to) = (from.area_code(), to.area_code());
        if from == to {
            return Err(GraphError::SelfLoop { area_code: from });
        }
        self.require_station(from)?;

        match self.vertices.get(&to) {
            Some(VertexRef::Resolved(_)) => self.add_edge(from, to),
            Some(VertexRef::Unresolved(_)) => Ok(self.attach_both(from, to)),
            None => {
                let forward = self
                    .vertices
                    .get_mut(&from)
                    .is_some_and(|vertex| vertex.attach(to));
                Ok(Link::from_insertions(forward, forward))
            }
        }
    }

    /// Link two labels, opening placeholder slots for any that are unknown.
    pub(crate) fn link_open(&mut self, a: AreaCode, b: AreaCode) -> GraphResult<Link> {
        if a == b {
            return Err(GraphError::SelfLoop { area_code: a });
        }
        for code in [a, b] {
            self.vertices
                .entry(code)
                .or_insert_with(|| VertexRef::Unresolved(Placeholder::new(code)));
        }
        Ok(self.attach_both(a, b))
    }

    fn attach_both(&mut self, a: AreaCode, b: AreaCode) -> Link {
        match self.pair_mut(a, b) {
            Some((first, second)) => {
                let forward = first.attach(b);
                let backward = second.attach(a);
                Link::from_insertions(forward, backward)
            }
            None => Link::Existing,
        }
    }

    fn require_station(&self, area_code: AreaCode) -> GraphResult<()> {
        match self.vertices.get(&area_code) {
            Some(VertexRef::Resolved(_)) => Ok(()),
            Some(VertexRef::Unresolved(_)) => Err(GraphError::UnresolvedVertex { area_code }),
            None => Err(GraphError::unregistered(area_code)),
        }
    }

    /// Mutable access to two distinct slots, returned in argument order.
    fn pair_mut(&mut self, a: AreaCode, b: AreaCode) -> Option<(&mut VertexRef, &mut VertexRef)> {
        if a == b {
            return None;
        }
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        let mut range = self.vertices.range_mut(low..=high);
        let (&low_code, low_vertex) = range.next()?;
        let (&high_code, high_vertex) = range.next_back()?;
        if low_code != low || high_code != high {
            return None;
        }
        if a < b {
            Some((low_vertex, high_vertex))
        } else {
            Some((high_vertex, low_vertex))
        }
    }

    /// Slot stored under `label`, placeholder or station.
    pub fn vertex(&self, label: impl Labeled) -> Option<&VertexRef> {
        self.vertices.get(&label.area_code())
    }

    /// Registered station under `label`.
    pub fn station(&self, label: impl Labeled) -> Option<&Station> {
        self.vertex(label).and_then(VertexRef::as_station)
    }

    pub fn station_mut(&mut self, label: impl Labeled) -> Option<&mut Station> {
        self.vertices
            .get_mut(&label.area_code())
            .and_then(VertexRef::as_station_mut)
    }

    /// Lookup by raw integer label; negative labels are rejected.
    pub fn get_vertex(&self, raw: i64) -> GraphResult<Option<&Station>> {
        let code = label(raw)?;
        Ok(self.station(code))
    }

    /// True iff a station with this station's label is registered.
    pub fn contains(&self, station: &Station) -> bool {
        self.station(station.area_code())
            .is_some_and(|stored| stored == station)
    }

    /// Adjacency by label, healing a one-sided edge between two stations.
    ///
    /// False when either label is missing or still a placeholder.
    pub fn are_adjacent(&mut self, a: impl Labeled, b: impl Labeled) -> bool {
        match self.pair_mut(a.area_code(), b.area_code()) {
            Some((VertexRef::Resolved(first), VertexRef::Resolved(second))) => {
                Station::check_adjacent(first, second)
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Registered stations in ascending area-code order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> + '_ {
        self.vertices.values().filter_map(VertexRef::as_station)
    }

    /// Labels of placeholders still waiting for a station.
    pub fn unresolved(&self) -> impl Iterator<Item = AreaCode> + '_ {
        self.vertices
            .iter()
            .filter(|(_, vertex)| !vertex.is_resolved())
            .map(|(&code, _)| code)
    }

    /// Consolidate the map and return the vertex count.
    ///
    /// Breadth-first discovery from every registered station. Labels reached
    /// through an edge but missing from the map are absorbed as placeholders,
    /// and one-sided edges are completed. The count includes placeholders.
    pub fn vertices_size(&mut self) -> usize {
        if self.vertices.is_empty() {
            return 0;
        }

        let mut queue: VecDeque<AreaCode> = self.vertices.keys().copied().collect();
        let mut seen: BTreeSet<AreaCode> = queue.iter().copied().collect();
        let mut discovered: BTreeMap<AreaCode, BTreeSet<AreaCode>> = BTreeMap::new();
        let mut missing_back_edges: Vec<(AreaCode, AreaCode)> = Vec::new();

        while let Some(current) = queue.pop_front() {
            let neighbors: Vec<AreaCode> = match self.vertices.get(&current) {
                Some(vertex) => vertex.neighbors().collect(),
                None => continue,
            };
            for neighbor in neighbors {
                match self.vertices.get(&neighbor) {
                    None => {
                        discovered.entry(neighbor).or_default().insert(current);
                    }
                    Some(vertex) if !vertex.sees(current) => {
                        missing_back_edges.push((neighbor, current));
                    }
                    Some(_) => {}
                }
                if seen.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        for (at, back_to) in missing_back_edges {
            if let Some(vertex) = self.vertices.get_mut(&at) {
                vertex.attach(back_to);
            }
        }
        for (area_code, pending) in discovered {
            self.vertices.insert(
                area_code,
                VertexRef::Unresolved(Placeholder { area_code, pending }),
            );
        }

        self.vertices.len()
    }

    /// Consolidate and require that every slot holds a real station.
    ///
    /// Returns the vertex count, or `UnresolvedVertex` naming the lowest
    /// placeholder label.
    pub fn finalize(&mut self) -> GraphResult<usize> {
        let order = self.vertices_size();
        match self.unresolved().next() {
            Some(area_code) => Err(GraphError::UnresolvedVertex { area_code }),
            None => Ok(order),
        }
    }

    /// Sum of all degrees after consolidation.
    pub fn degree_sum(&mut self) -> GraphResult<usize> {
        let order = self.finalize()?;
        degree::check_degrees(self.degrees(), order)
    }

    /// Edge count after consolidation (handshake lemma).
    pub fn edges_size(&mut self) -> GraphResult<usize> {
        Ok(self.degree_sum()? / 2)
    }

    /// Edge count without consolidation, certified by the degree sequence.
    ///
    /// Trusts the map to be complete. Cheaper than [`Network::edges_size`]
    /// but does not absorb undeclared vertices, so use it on networks that
    /// are already known to be consistent.
    pub fn quick_edges_size(&self) -> GraphResult<usize> {
        if let Some(area_code) = self.unresolved().next() {
            return Err(GraphError::UnresolvedVertex { area_code });
        }
        let order = self.vertices.len();
        let sum = degree::check_degrees(self.degrees(), order)?;

        let mut sequence: Vec<usize> = self.degrees().map(|(_, degree)| degree).collect();
        sequence.sort_unstable_by(|a, b| b.cmp(a));
        if !degree::is_graphical_sorted(&sequence) {
            return Err(GraphError::invalid_graph(InvalidGraphReason::NotGraphical));
        }
        Ok(sum / 2)
    }

    fn degrees(&self) -> impl Iterator<Item = (AreaCode, usize)> + '_ {
        self.stations()
            .map(|station| (station.area_code(), station.degree()))
    }

    /// Shortest route between two stations, endpoints included.
    ///
    /// Empty when the network is empty, either label has no station, or no
    /// route exists. The network is validated first, so an inconsistent graph
    /// is reported as an error rather than routed through.
    pub fn trajectory(&mut self, from: impl Labeled, to: impl Labeled) -> GraphResult<Trajectory> {
        let (from, to) = (from.area_code(), to.area_code());
        if self.station(from).is_none() || self.station(to).is_none() {
            return Ok(Trajectory::empty());
        }
        self.edges_size()?;
        Ok(path::shortest_path(&self.vertices, from, to))
    }

    /// Every client of the network, ascending by phone number.
    ///
    /// Consolidates first. Clients sharing a phone number keep station order.
    pub fn clients_by_phone(&mut self) -> Vec<Client> {
        self.vertices_size();
        let mut clients: Vec<Client> = self
            .stations()
            .flat_map(|station| station.clients().iter().cloned())
            .collect();
        clients.sort_by_key(Client::phone);
        clients
    }

    /// Every client grouped by station: stations ascending by area code,
    /// clients ascending by phone within each station.
    pub fn clients_by_station(&self) -> Vec<Client> {
        self.stations()
            .flat_map(|station| station.clients().iter().cloned())
            .collect()
    }
}
