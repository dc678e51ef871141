//! Graph-specific error types.

use cn_core::AreaCode;
use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Graph construction, mutation and validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A label is negative or does not name a registered station.
    #[error("Invalid label {label}: {reason}")]
    InvalidLabel { label: i64, reason: &'static str },

    /// A station was registered under a key other than its own area code.
    #[error("Label {label} does not match the station's area code {area_code}")]
    LabelMismatch { label: AreaCode, area_code: AreaCode },

    /// Both endpoints of an edge are the same station.
    #[error("Station {area_code} cannot be linked to itself")]
    SelfLoop { area_code: AreaCode },

    /// The area code is already claimed in the registry.
    #[error("Area code {area_code} is already taken")]
    DuplicateAreaCode { area_code: AreaCode },

    /// A station was constructed without clients.
    #[error("Station {area_code} must have at least one client")]
    EmptyClientSet { area_code: AreaCode },

    /// The degree sequence cannot belong to a simple graph.
    #[error("Invalid graph: {reason}")]
    InvalidGraph { reason: InvalidGraphReason },

    /// An edge references a label that was never registered with a station.
    #[error("Vertex {area_code} is referenced by an edge but has no registered station")]
    UnresolvedVertex { area_code: AreaCode },
}

/// Why a degree sequence was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidGraphReason {
    #[error("station {area_code} has degree {degree} but the graph only has {order} vertices")]
    DegreeExceedsOrder {
        area_code: AreaCode,
        degree: usize,
        order: usize,
    },

    #[error("degree sum {sum} is odd")]
    OddDegreeSum { sum: usize },

    #[error("degree sequence is not graphical")]
    NotGraphical,
}

impl GraphError {
    pub(crate) fn invalid_graph(reason: InvalidGraphReason) -> Self {
        GraphError::InvalidGraph { reason }
    }

    pub(crate) fn unregistered(area_code: AreaCode) -> Self {
        GraphError::InvalidLabel {
            label: i64::from(area_code.get()),
            reason: "no station is registered under this label",
        }
    }
}

/// Validate a raw integer label.
pub fn label(raw: i64) -> GraphResult<AreaCode> {
    AreaCode::new(raw).map_err(|_| GraphError::InvalidLabel {
        label: raw,
        reason: "labels must be non-negative",
    })
}
