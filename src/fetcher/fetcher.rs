//! Core fetcher implementation: the bounded worker pool.
//!
//! [`Fetcher::fetch_all`] loads every object into a closed queue, spawns a
//! fixed number of workers that drain it, and waits for all of them. The
//! first error stops the whole run.
//!
//! # Examples
//!
//! ```rust,no_run
//! use bucket_dl::fetcher::FetcherBuilder;
//! use bucket_dl::store::{S3Config, S3Store};
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), bucket_dl::Error> {
//! let store = S3Store::new(S3Config::new("key", "secret")).await?;
//! let fetcher = FetcherBuilder::new()
//!     .directory(PathBuf::from("./mirror"))
//!     .concurrency(4)
//!     .build();
//!
//! let summaries = fetcher.fetch_bucket(Arc::new(store), "my-bucket").await?;
//! println!("Handled {} objects", summaries.len());
//! # Ok(())
//! # }
//! ```

use super::config::FetcherConfig;
use super::worker::{self, WorkerContext};
use crate::error::{Error, Result};
use crate::lister::list_all;
use crate::object::{ObjectDescriptor, Summary};
use crate::progress::ProgressDisplay;
use crate::store::RemoteStore;

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, Instrument};

/// Represents the fetch controller.
///
/// A fetcher can be created via its builder:
///
/// ```rust
/// # fn main()  {
/// use bucket_dl::fetcher::FetcherBuilder;
///
/// let f = FetcherBuilder::new().build();
/// # }
/// ```
#[derive(Clone)]
pub struct Fetcher {
    config: FetcherConfig,
}

impl fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fetcher")
            .field("config", &self.config)
            .finish()
    }
}

impl Fetcher {
    /// Creates a new Fetcher with the given configuration.
    pub(crate) fn new(config: FetcherConfig) -> Self {
        Self { config }
    }

    /// Gets the directory where objects will be stored.
    pub fn directory(&self) -> &PathBuf {
        &self.config.directory
    }

    /// Gets the number of workers.
    pub fn concurrency(&self) -> usize {
        self.config.concurrency
    }

    /// Gets whether existing files are skipped.
    pub fn skip_existing(&self) -> bool {
        self.config.skip_existing
    }

    /// List `bucket` completely, then fetch every object.
    pub async fn fetch_bucket(
        &self,
        store: Arc<dyn RemoteStore>,
        bucket: &str,
    ) -> Result<Vec<Summary>> {
        let objects = list_all(store.as_ref(), bucket).await?;
        self.fetch_all(store, bucket, &objects).await
    }

    /// Fetch every object in `objects` from `bucket`.
    ///
    /// Returns one [`Summary`] per object, in completion order. On the first
    /// failure the remaining workers are aborted and that error is returned;
    /// files already written stay on disk. Objects that never left the queue
    /// reach the completion callback as
    /// [`Status::NotStarted`](crate::Status::NotStarted).
    ///
    /// Keys that map to the same local file are rejected up front with
    /// [`Error::InvalidKey`].
    pub async fn fetch_all(
        &self,
        store: Arc<dyn RemoteStore>,
        bucket: &str,
        objects: &[ObjectDescriptor],
    ) -> Result<Vec<Summary>> {
        if objects.is_empty() {
            debug!("Nothing to fetch");
            return Ok(Vec::new());
        }
        if self.config.concurrency == 0 {
            return Err(Error::Config(
                "concurrency must be at least 1".to_string(),
            ));
        }

        check_distinct_paths(&self.config.directory, objects)?;

        // The queue is full and closed before any worker starts.
        let (tx, queue) = async_channel::bounded(objects.len());
        for object in objects {
            tx.try_send(object.clone())
                .map_err(|_| Error::Internal(format!("could not queue {}", object.key)))?;
        }
        tx.close();

        let progress = Arc::new(ProgressDisplay::new(
            self.config.style_options.clone(),
            objects.len(),
        ));
        let ctx = WorkerContext {
            store,
            bucket: Arc::from(bucket),
            config: Arc::new(self.config.clone()),
            progress: progress.clone(),
        };

        let workers = self.config.concurrency.min(objects.len());
        debug!("Starting {} workers for {} objects", workers, objects.len());
        let mut tasks = JoinSet::new();
        for id in 0..workers {
            tasks.spawn(
                worker::fetch_objects(ctx.clone(), queue.clone())
                    .instrument(tracing::debug_span!("fetch-worker", id)),
            );
        }

        let mut summaries = Vec::with_capacity(objects.len());
        while let Some(joined) = tasks.join_next().await {
            let outcome = joined
                .map_err(|e| Error::Internal(format!("fetch worker stopped: {}", e)))
                .and_then(|result| result);

            match outcome {
                Ok(mut done) => summaries.append(&mut done),
                Err(err) => {
                    worker::abandon_queue(&queue, &ctx.config);
                    tasks.abort_all();
                    progress.abandon();
                    return Err(err);
                }
            }
        }

        progress.finish();
        Ok(summaries)
    }
}

/// Reject objects whose keys land on the same local file, such as `a.txt`
/// and `/a.txt`. Invalid keys are left for the workers to report.
fn check_distinct_paths(directory: &Path, objects: &[ObjectDescriptor]) -> Result<()> {
    let mut seen: HashMap<PathBuf, &str> = HashMap::with_capacity(objects.len());
    for object in objects.iter().filter(|o| !o.is_directory_marker()) {
        let Ok(path) = object.local_path(directory) else {
            continue;
        };
        if let Some(previous) = seen.insert(path, &object.key) {
            return Err(Error::InvalidKey(format!(
                "\"{}\" and \"{}\" map to the same local file",
                previous, object.key
            )));
        }
    }
    Ok(())
}
