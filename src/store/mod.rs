//! Remote store module: the two operations the pipeline needs from a bucket.
//!
//! The lister and the fetch pool never talk to S3 directly. They go through
//! the [`RemoteStore`] trait, which exposes one page of the bucket listing
//! and a streaming download of a single object.
//!
//! - [`config`] - [`S3Config`], connection settings and their validation
//! - [`s3`] - [`S3Store`], the `aws-sdk-s3` backed implementation
//!
//! # Examples
//!
//! ```rust,no_run
//! use bucket_dl::store::{S3Config, S3Store};
//!
//! # async fn example() -> Result<(), bucket_dl::Error> {
//! let config = S3Config::new("my-access-key", "my-secret-key")
//!     .with_endpoint("http://localhost:9000")
//!     .with_region("us-east-1");
//! let store = S3Store::new(config).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod s3;

pub use config::S3Config;
pub use s3::S3Store;

use crate::error::Result;
use crate::object::ObjectDescriptor;

use futures::future::BoxFuture;
use tokio::io::AsyncWrite;

/// One page of a bucket listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPage {
    /// Objects returned in this page, in listing order.
    pub objects: Vec<ObjectDescriptor>,
    /// Whether more pages follow.
    pub truncated: bool,
    /// Cursor to request the next page with.
    pub next_continuation_token: Option<String>,
}

/// Destination the object bytes are streamed into.
pub type Destination<'a> = &'a mut (dyn AsyncWrite + Unpin + Send);

/// The remote operations consumed by the lister and the fetch pool.
pub trait RemoteStore: Send + Sync {
    /// Fetch one page of `bucket`, resuming after `continuation_token`.
    ///
    /// Fails with [`Error::RemoteList`](crate::Error::RemoteList).
    fn list_page<'a>(
        &'a self,
        bucket: &'a str,
        continuation_token: Option<&'a str>,
    ) -> BoxFuture<'a, Result<ListPage>>;

    /// Stream the object `key` into `destination`, returning the bytes written.
    ///
    /// Fails with [`Error::RemoteDownload`](crate::Error::RemoteDownload).
    fn download<'a>(
        &'a self,
        bucket: &'a str,
        key: &'a str,
        destination: Destination<'a>,
    ) -> BoxFuture<'a, Result<u64>>;
}
