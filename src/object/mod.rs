//! Object module containing the data that flows through the pipeline.
//!
//! - [`descriptor`] - [`ObjectDescriptor`], one listed object and its local path mapping
//! - [`summary`] - [`Summary`] and [`Status`], the per-object fetch outcome

pub mod descriptor;
pub mod summary;

pub use descriptor::ObjectDescriptor;
pub use summary::{Status, Summary};
