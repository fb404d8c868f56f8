//! Fetch workers: the queue loop and the download of a single object.
//!
//! Every worker owns a clone of the queue receiver. A worker that fails
//! closes and drains the queue before returning, so objects still waiting
//! are reported as [`Status::NotStarted`] and never fetched.

use super::config::FetcherConfig;
use crate::error::{Error, Result};
use crate::object::{ObjectDescriptor, Status, Summary};
use crate::progress::{ProgressDisplay, ProgressWriter};
use crate::store::RemoteStore;

use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;
use tokio::{fs, io::AsyncWriteExt};
use tracing::{debug, info, trace};

/// State shared by every worker of one fetch run.
#[derive(Clone)]
pub(super) struct WorkerContext {
    pub(super) store: Arc<dyn RemoteStore>,
    pub(super) bucket: Arc<str>,
    pub(super) config: Arc<FetcherConfig>,
    pub(super) progress: Arc<ProgressDisplay>,
}

/// Worker loop: take objects off `queue` until it is closed and drained.
///
/// On the first error the queue is closed and emptied, so no worker
/// dequeues anything new, and the error is returned.
pub(super) async fn fetch_objects(
    ctx: WorkerContext,
    queue: async_channel::Receiver<ObjectDescriptor>,
) -> Result<Vec<Summary>> {
    let mut summaries = Vec::new();

    while let Ok(object) = queue.recv().await {
        trace!(key = %object.key, "worker recv'd object");

        match fetch_object(&ctx, &object).await {
            Ok(summary) => {
                ctx.config.notify(&summary);
                ctx.progress.increment_main();
                summaries.push(summary);
            }
            Err(err) => {
                ctx.config.notify(&Summary::new(object, 0).fail(&err));
                abandon_queue(&queue, &ctx.config);
                return Err(err);
            }
        }
    }

    trace!("queue closed, worker finished");
    Ok(summaries)
}

/// Close `queue` and discard what is left in it, reporting each discarded
/// object as not started.
///
/// Closing alone still lets receivers drain buffered items.
pub(super) fn abandon_queue(
    queue: &async_channel::Receiver<ObjectDescriptor>,
    config: &FetcherConfig,
) {
    queue.close();
    let mut discarded = 0usize;
    while let Ok(object) = queue.try_recv() {
        config.notify(&Summary::new(object, 0));
        discarded += 1;
    }
    if discarded > 0 {
        debug!("Abandoned {} queued objects", discarded);
    }
}

/// Fetch a single object to its local path.
async fn fetch_object(ctx: &WorkerContext, object: &ObjectDescriptor) -> Result<Summary> {
    let path = object.local_path(&ctx.config.directory)?;

    if object.is_directory_marker() {
        debug!("Creating directory {:?} for marker {}", path, object.key);
        fs::create_dir_all(&path)
            .await
            .map_err(|e| Error::local_file(&path, e))?;
        return Ok(Summary::new(object.clone(), 0).skip("directory marker"));
    }

    if ctx.config.skip_existing && exists(&path).await {
        info!("Skipping {}", object.key);
        return Ok(Summary::new(object.clone(), 0).skip("file already exists"));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::local_file(parent, e))?;
    }

    debug!("Creating destination file {:?}", path);
    let file = fs::File::create(&path)
        .await
        .map_err(|e| Error::local_file(&path, e))?;

    let mut writer = ProgressWriter::new(file, ctx.progress.create_child_progress(object));
    let result = ctx
        .store
        .download(&ctx.bucket, &object.key, &mut writer)
        .await;
    let write_error = writer.take_error();
    let (mut file, pb) = writer.into_parts();
    ctx.progress.finish_child(pb);

    // A destination failure wins over whatever the store made of it.
    if let Some(e) = write_error {
        return Err(Error::local_file(&path, e));
    }
    let written = result?;
    file.flush()
        .await
        .map_err(|e| Error::local_file(&path, e))?;

    info!("Downloaded {}", object.key);
    Ok(Summary::new(object.clone(), written).with_status(Status::Success))
}

/// Anything at `path` counts, unless it is definitely absent.
async fn exists(path: &Path) -> bool {
    match fs::metadata(path).await {
        Ok(_) => true,
        Err(e) => e.kind() != ErrorKind::NotFound,
    }
}
