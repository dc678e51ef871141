//! cn-project: network description file format, validation and loading.

pub mod schema;
pub mod validate;

use std::path::Path;

use cn_core::PhoneNumber;
use cn_graph::error::label;
use cn_graph::{GraphError, Network, NetworkBuilder};
use tracing::{debug, info};

pub use schema::*;
pub use validate::{ValidationError, validate_description};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Malformed network: {0}")]
    Malformed(#[from] GraphError),

    #[error("Unsupported file format: '{extension}' (expected yaml, yml or json)")]
    UnsupportedFormat { extension: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> ProjectResult<NetworkDescription> {
    debug!(path = %path.display(), "reading YAML description");
    let content = std::fs::read_to_string(path)?;
    let description: NetworkDescription = serde_yaml::from_str(&content)?;
    validate_description(&description)?;
    Ok(description)
}

pub fn load_json(path: &Path) -> ProjectResult<NetworkDescription> {
    debug!(path = %path.display(), "reading JSON description");
    let content = std::fs::read_to_string(path)?;
    let description: NetworkDescription = serde_json::from_str(&content)?;
    validate_description(&description)?;
    Ok(description)
}

/// Load a description, choosing the format from the file extension.
pub fn load(path: &Path) -> ProjectResult<NetworkDescription> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    match extension.as_str() {
        "yaml" | "yml" => load_yaml(path),
        "json" => load_json(path),
        _ => Err(ProjectError::UnsupportedFormat { extension }),
    }
}

/// Build and certify a network from a validated description.
pub fn build_network(description: &NetworkDescription) -> ProjectResult<Network> {
    validate_description(description)?;

    let mut builder = NetworkBuilder::new();
    for station in &description.stations {
        let area_code = label(station.code)?;
        let mut clients = Vec::with_capacity(station.clients.len());
        for client in &station.clients {
            let phone = PhoneNumber::new(client.phone).map_err(|_| {
                ValidationError::InvalidValue {
                    field: format!("client '{}' phone", client.name),
                    value: client.phone.to_string(),
                    reason: "must be non-negative".to_string(),
                }
            })?;
            clients.push((client.name.as_str(), phone));
        }
        builder.add_station(station.name.as_str(), area_code, clients)?;
    }
    for link in &description.links {
        builder.add_link(label(link.station_a)?, label(link.station_b)?)?;
    }

    let network = builder.build()?;
    info!(
        name = %description.name,
        stations = network.len(),
        links = description.links.len(),
        "network built"
    );
    Ok(network)
}
