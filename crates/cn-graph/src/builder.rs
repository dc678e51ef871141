//! Incremental network builder.

use cn_core::{AreaCode, PhoneNumber};

use crate::client::Client;
use crate::error::GraphResult;
use crate::network::Network;

/// Builder for constructing a network in two phases.
///
/// Stations and links can be added in any order: a link to a label that has
/// no station yet opens a placeholder slot. `build()` then requires every
/// placeholder to have been filled and the degree sequence to be graphical.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    network: Network,
    links: usize,
}

impl NetworkBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station with its clients and return its area code.
    ///
    /// Clients are given as `(name, phone)` pairs and inherit the station's
    /// area code.
    pub fn add_station<N, I>(
        &mut self,
        name: impl Into<String>,
        area_code: AreaCode,
        clients: I,
    ) -> GraphResult<AreaCode>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, PhoneNumber)>,
    {
        let clients = clients
            .into_iter()
            .map(|(client_name, phone)| Client::new(client_name, phone, area_code));
        let station = self.network.new_station(name, area_code, clients)?;
        self.network.add_vertex(area_code, station)?;
        Ok(area_code)
    }

    /// Link two labels; either may still be undeclared.
    pub fn add_link(&mut self, a: AreaCode, b: AreaCode) -> GraphResult<()> {
        if self.network.link_open(a, b)?.changed() {
            self.links += 1;
        }
        Ok(())
    }

    /// Number of distinct links recorded so far.
    pub fn link_count(&self) -> usize {
        self.links
    }

    /// Number of slots so far, placeholders included.
    pub fn vertex_count(&self) -> usize {
        self.network.len()
    }

    /// Finish the build: fill check, then degree-sequence certification.
    pub fn build(self) -> GraphResult<Network> {
        let mut network = self.network;
        network.finalize()?;
        network.quick_edges_size()?;
        Ok(network)
    }
}
