//! Shared application service layer for callnet.
//!
//! Centralizes the operations the CLI offers on a loaded network: loading
//! and summarizing, call placement, and publicity listings.

pub mod call_service;
pub mod error;
pub mod network_service;
pub mod publicity_service;

// Re-export key types for convenience
pub use call_service::{CallMode, CallPlan, Endpoint, parse_endpoint, place_call};
pub use error::{AppError, AppResult};
pub use network_service::{
    LoadedNetwork, NetworkSummary, StationSummary, get_station, list_stations, load_network,
    summarize,
};
pub use publicity_service::PublicityOrder;
