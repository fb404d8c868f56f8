//! Configuration structures and defaults for the fetcher.
//!
//! # Examples
//!
//! ```rust
//! use bucket_dl::fetcher::FetchCallback;
//! use bucket_dl::object::{Status, Summary};
//!
//! let callback: FetchCallback = Box::new(|summary: &Summary| match summary.status() {
//!     Status::Success => println!("✓ {}", summary.object().key),
//!     Status::Skipped(reason) => println!("- {} ({})", summary.object().key, reason),
//!     Status::Fail(msg) => println!("✗ {} - {}", summary.object().key, msg),
//!     Status::NotStarted => {}
//! });
//! ```

use crate::object::Summary;
use crate::StyleOptions;

use std::env::current_dir;
use std::path::PathBuf;
use std::sync::Arc;

/// Callback type for object completion events
pub type FetchCallback = Box<dyn Fn(&Summary) + Send + Sync>;

/// Default number of workers.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Configuration structure for the fetcher
#[derive(Clone)]
pub struct FetcherConfig {
    /// Directory where to store the fetched objects.
    pub directory: PathBuf,
    /// Number of workers pulling objects off the queue.
    pub concurrency: usize,
    /// Leave objects alone whose local path already exists.
    pub skip_existing: bool,
    /// Fetcher style options.
    pub style_options: StyleOptions,
    /// Callback for when each object completes.
    pub on_complete: Option<Arc<FetchCallback>>,
}

impl std::fmt::Debug for FetcherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetcherConfig")
            .field("directory", &self.directory)
            .field("concurrency", &self.concurrency)
            .field("skip_existing", &self.skip_existing)
            .field("style_options", &self.style_options)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            directory: current_dir().unwrap_or_default(),
            concurrency: DEFAULT_CONCURRENCY,
            skip_existing: false,
            style_options: StyleOptions::default(),
            on_complete: None,
        }
    }
}

impl FetcherConfig {
    /// Report `summary` to the completion callback, if any.
    pub(crate) fn notify(&self, summary: &Summary) {
        if let Some(ref callback) = self.on_complete {
            callback(summary);
        }
    }
}
