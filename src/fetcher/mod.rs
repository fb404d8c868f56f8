//! Fetcher module: the concurrent download pool, its builder and configuration.
//!
//! - `fetcher` - [`Fetcher`], which drains a closed work queue with a fixed set of workers
//! - `builder` - [`FetcherBuilder`] for configuration
//! - `config` - [`FetcherConfig`] and the completion callback type
//!
//! # Examples
//!
//! ```rust
//! use bucket_dl::fetcher::FetcherBuilder;
//! use std::path::PathBuf;
//!
//! let fetcher = FetcherBuilder::hidden()
//!     .directory(PathBuf::from("./mirror"))
//!     .concurrency(4)
//!     .skip_existing(true)
//!     .build();
//! assert!(fetcher.skip_existing());
//! ```

pub mod builder;
pub mod config;
pub mod fetcher;
mod worker;

pub use builder::FetcherBuilder;
pub use config::{FetchCallback, FetcherConfig, DEFAULT_CONCURRENCY};
pub use fetcher::Fetcher;
