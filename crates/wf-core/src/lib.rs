//! wf-core: shared foundation for wayfinder.
//!
//! Contains:
//! - numeric (Real + float validation helpers)
//! - cost (validated, totally ordered edge weight)
//! - error (shared error types)

pub mod cost;
pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use cost::Cost;
pub use error::{WfError, WfResult};
pub use numeric::*;
