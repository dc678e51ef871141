//! cn-graph: graph/model layer for callnet.
//!
//! Provides:
//! - Stations, clients and the label-keyed `Network` container
//! - Consolidation of edges that point at undeclared stations
//! - Linear-time degree-sequence certification (Erdős–Gallai)
//! - Shortest trajectories by breadth-first search
//! - A two-phase `NetworkBuilder`
//!
//! # Example
//!
//! ```
//! use cn_core::{AreaCode, PhoneNumber};
//! use cn_graph::NetworkBuilder;
//!
//! let (a, b, c) = (AreaCode::from_u32(10), AreaCode::from_u32(20), AreaCode::from_u32(30));
//! let mut builder = NetworkBuilder::new();
//! builder.add_station("A", a, [("ana", PhoneNumber::from_u64(111))]).unwrap();
//! builder.add_station("B", b, [("bea", PhoneNumber::from_u64(222))]).unwrap();
//! builder.add_station("C", c, [("cid", PhoneNumber::from_u64(333))]).unwrap();
//! builder.add_link(a, b).unwrap();
//! builder.add_link(b, c).unwrap();
//! let mut network = builder.build().unwrap();
//!
//! assert_eq!(network.edges_size().unwrap(), 2);
//! let route = network.trajectory(a, c).unwrap();
//! assert_eq!(route.area_codes(), &[a, b, c]);
//! ```

pub mod builder;
pub mod client;
pub mod degree;
pub mod error;
pub mod network;
pub mod path;
pub mod registry;
pub mod station;
pub mod vertex;

// Re-exports for ergonomics
pub use builder::NetworkBuilder;
pub use client::Client;
pub use degree::{is_graphical, is_graphical_sorted};
pub use error::{GraphError, GraphResult, InvalidGraphReason};
pub use network::Network;
pub use path::Trajectory;
pub use registry::AreaCodeRegistry;
pub use station::{Link, Station};
pub use vertex::{Placeholder, VertexRef};
