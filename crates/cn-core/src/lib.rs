//! cn-core: stable foundation for callnet.
//!
//! Contains:
//! - ids (area codes, phone numbers, the `Labeled` trait)
//! - error (shared error types)

pub mod error;
pub mod ids;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use ids::*;
