//! Builder pattern implementation for creating Fetcher instances.
//!
//! # Examples
//!
//! ```rust
//! use bucket_dl::fetcher::FetcherBuilder;
//! use bucket_dl::object::Status;
//! use std::path::PathBuf;
//!
//! let fetcher = FetcherBuilder::new()
//!     .directory(PathBuf::from("./mirror"))
//!     .concurrency(8)
//!     .skip_existing(true)
//!     .on_complete(|summary| {
//!         if let Status::Skipped(reason) = summary.status() {
//!             println!("Skipping {} ({})", summary.object().key, reason);
//!         }
//!     })
//!     .build();
//! ```

use super::{config::FetcherConfig, fetcher::Fetcher};
use crate::object::Summary;
use crate::StyleOptions;

use std::{path::PathBuf, sync::Arc};

/// A builder used to create a [`Fetcher`].
///
/// ```rust
/// # fn main()  {
/// use bucket_dl::fetcher::FetcherBuilder;
///
/// let f = FetcherBuilder::new().concurrency(2).directory("out".into()).build();
/// # }
/// ```
#[derive(Default)]
pub struct FetcherBuilder {
    config: FetcherConfig,
}

impl FetcherBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        FetcherBuilder::default()
    }

    /// Convenience function to hide the progress bars.
    pub fn hidden() -> Self {
        FetcherBuilder::default().style_options(StyleOptions::hidden())
    }

    /// Sets the directory where to store the objects.
    pub fn directory(mut self, directory: PathBuf) -> Self {
        self.config.directory = directory;
        self
    }

    /// Set the number of workers.
    ///
    /// `0` is rejected when fetching starts.
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.config.concurrency = concurrency;
        self
    }

    /// Skip objects whose local file already exists.
    ///
    /// Only existence is checked: a truncated file left by an earlier run
    /// counts as present.
    pub fn skip_existing(mut self, skip_existing: bool) -> Self {
        self.config.skip_existing = skip_existing;
        self
    }

    /// Set the fetcher style options.
    pub fn style_options(mut self, style_options: StyleOptions) -> Self {
        self.config.style_options = style_options;
        self
    }

    /// Set callback for when each object completes.
    ///
    /// The callback runs on the worker that handled the object, as soon as it
    /// is done, for successes, skips and the failure that ends the run.
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Summary) + Send + Sync + 'static,
    {
        self.config.on_complete = Some(Arc::new(Box::new(callback)));
        self
    }

    /// Create the [`Fetcher`] with the specified options.
    pub fn build(self) -> Fetcher {
        Fetcher::new(self.config)
    }
}
