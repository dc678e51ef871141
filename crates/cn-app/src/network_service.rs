//! Network loading and introspection.

use std::path::Path;

use cn_core::AreaCode;
use cn_graph::{GraphError, Network, Station};
use cn_project::NetworkDescription;
use tracing::debug;

use crate::error::{AppError, AppResult};

/// A network together with the description it was built from.
#[derive(Debug, Clone)]
pub struct LoadedNetwork {
    pub description: NetworkDescription,
    pub network: Network,
}

impl LoadedNetwork {
    pub fn name(&self) -> &str {
        &self.description.name
    }
}

/// Whole-network figures for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkSummary {
    pub station_count: usize,
    pub client_count: usize,
    /// Edge count, present only when the network is consistent.
    pub edge_count: Option<usize>,
    /// Why the network failed certification, if it did.
    pub problem: Option<GraphError>,
}

impl NetworkSummary {
    pub fn is_consistent(&self) -> bool {
        self.problem.is_none()
    }
}

/// Summary of a station for listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationSummary {
    pub area_code: AreaCode,
    pub name: String,
    pub client_count: usize,
    pub degree: usize,
}

/// Load a description (YAML or JSON) and build the network from it.
pub fn load_network(path: &Path) -> AppResult<LoadedNetwork> {
    let wrap = |source| AppError::Load {
        path: path.to_path_buf(),
        source,
    };
    let description = cn_project::load(path).map_err(wrap)?;
    let network = cn_project::build_network(&description).map_err(wrap)?;
    debug!(
        name = %description.name,
        stations = network.len(),
        "network loaded"
    );
    Ok(LoadedNetwork {
        description,
        network,
    })
}

/// Count stations, clients and edges. Consolidates the network.
pub fn summarize(network: &mut Network) -> NetworkSummary {
    let (edge_count, problem) = match network.edges_size() {
        Ok(edges) => (Some(edges), None),
        Err(err) => (None, Some(err)),
    };
    NetworkSummary {
        station_count: network.stations().count(),
        client_count: network.stations().map(|s| s.clients().len()).sum(),
        edge_count,
        problem,
    }
}

/// List all stations with summaries, ascending by area code.
pub fn list_stations(network: &Network) -> Vec<StationSummary> {
    network
        .stations()
        .map(|station| StationSummary {
            area_code: station.area_code(),
            name: station.name().to_string(),
            client_count: station.clients().len(),
            degree: station.degree(),
        })
        .collect()
}

/// Get a specific station by area code.
pub fn get_station(network: &Network, area_code: AreaCode) -> AppResult<&Station> {
    network
        .station(area_code)
        .ok_or(AppError::StationNotFound(area_code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cn_core::PhoneNumber;
    use cn_graph::NetworkBuilder;

    fn code(raw: u32) -> AreaCode {
        AreaCode::from_u32(raw)
    }

    fn sample() -> Network {
        let mut builder = NetworkBuilder::new();
        builder
            .add_station(
                "A",
                code(10),
                [("ana", PhoneNumber::from_u64(1)), ("abel", PhoneNumber::from_u64(2))],
            )
            .unwrap();
        builder
            .add_station("B", code(20), [("bea", PhoneNumber::from_u64(3))])
            .unwrap();
        builder.add_link(code(10), code(20)).unwrap();
        builder.build().unwrap()
    }

    #[test]
    fn summary_counts() {
        let mut network = sample();
        let summary = summarize(&mut network);
        assert_eq!(summary.station_count, 2);
        assert_eq!(summary.client_count, 3);
        assert_eq!(summary.edge_count, Some(1));
        assert!(summary.is_consistent());
    }

    #[test]
    fn summary_reports_unresolved_vertex() {
        let mut network = sample();
        network.add_edge_deferred(code(20), code(30)).unwrap();
        let summary = summarize(&mut network);
        assert_eq!(summary.edge_count, None);
        assert_eq!(
            summary.problem,
            Some(GraphError::UnresolvedVertex { area_code: code(30) })
        );
    }

    #[test]
    fn station_listing_and_lookup() {
        let network = sample();
        let listed = list_stations(&network);
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].area_code, code(10));
        assert_eq!(listed[0].client_count, 2);
        assert_eq!(listed[1].degree, 1);

        assert_eq!(get_station(&network, code(20)).unwrap().name(), "B");
        assert!(matches!(
            get_station(&network, code(99)),
            Err(AppError::StationNotFound(c)) if c == code(99)
        ));
    }
}
