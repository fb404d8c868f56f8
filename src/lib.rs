//! bucket-dl mirrors every object of an S3-compatible bucket to local disk.
//!
//! The bucket is listed page by page until the listing is complete, then a
//! fixed pool of workers downloads the objects concurrently. Any failure
//! stops the whole run.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use bucket_dl::{lister::list_all, FetcherBuilder, S3Config, S3Store, Error};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let store = Arc::new(S3Store::new(S3Config::new("access", "secret")).await?);
//! let objects = list_all(store.as_ref(), "my-bucket").await?;
//!
//! let fetcher = FetcherBuilder::new()
//!     .directory(PathBuf::from("output"))
//!     .concurrency(4)
//!     .build();
//! fetcher.fetch_all(store, "my-bucket", &objects).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`lister`] - Paginated enumeration of a bucket
//! - [`fetcher`] - The `Fetcher` worker pool and its `FetcherBuilder`
//! - [`object`] - Object descriptors and per-object summaries
//! - [`store`] - The `RemoteStore` trait and its S3 implementation
//! - [`progress`] - Progress bar styling and display management
//! - [`error`] - Centralized error handling with the `Error` enum

pub mod error;
pub mod fetcher;
pub mod lister;
pub mod object;
pub mod progress;
pub mod store;

pub use error::{Error, Result};
pub use fetcher::{Fetcher, FetcherBuilder};
pub use object::{ObjectDescriptor, Status, Summary};
pub use progress::{ProgressBarOpts, StyleOptions};
pub use store::{ListPage, RemoteStore, S3Config, S3Store};
