//! `aws-sdk-s3` backed [`RemoteStore`].
//!
//! Listing maps to `ListObjectsV2` with a continuation token, downloading to
//! `GetObject` with the response body streamed chunk by chunk into the
//! destination. Retries configured inside the SDK still apply; this crate
//! adds none of its own.

use super::{config::S3Config, Destination, ListPage, RemoteStore};
use crate::error::{Error, Result};
use crate::object::ObjectDescriptor;

use aws_config::BehaviorVersion;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::Client;
use futures::future::{BoxFuture, FutureExt};
use tokio::io::AsyncWriteExt;
use tracing::trace;

/// Name reported by the static credentials provider.
const CREDENTIALS_PROVIDER: &str = "bucket-dl";

/// Remote store talking to an S3-compatible service.
#[derive(Clone, Debug)]
pub struct S3Store {
    client: Client,
}

impl S3Store {
    /// Validate `config` and build the underlying SDK client.
    ///
    /// No request is sent; connection problems surface on the first listing.
    pub async fn new(config: S3Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_client(create_s3_client(&config).await))
    }

    /// Wrap an already configured SDK client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    async fn list_page_inner(
        &self,
        bucket: &str,
        continuation_token: Option<&str>,
    ) -> Result<ListPage> {
        let response = self
            .client
            .list_objects_v2()
            .bucket(bucket)
            .set_continuation_token(continuation_token.map(String::from))
            .send()
            .await
            .map_err(|e| Error::remote_list(bucket, e))?;

        let objects = response
            .contents()
            .iter()
            .filter_map(|object| {
                let size = object.size().and_then(|s| u64::try_from(s).ok());
                object
                    .key()
                    .map(|key| ObjectDescriptor::new(key).with_size(size))
            })
            .collect();

        Ok(ListPage {
            objects,
            truncated: response.is_truncated().unwrap_or(false),
            next_continuation_token: response.next_continuation_token().map(String::from),
        })
    }

    async fn download_inner(
        &self,
        bucket: &str,
        key: &str,
        destination: Destination<'_>,
    ) -> Result<u64> {
        let mut response = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| Error::remote_download(key, e))?;

        let mut written = 0u64;
        while let Some(chunk) = response
            .body
            .try_next()
            .await
            .map_err(|e| Error::remote_download(key, e))?
        {
            destination
                .write_all(&chunk)
                .await
                .map_err(|e| Error::remote_download(key, e))?;
            written += chunk.len() as u64;
            trace!(key, written, "chunk written");
        }

        Ok(written)
    }
}

impl RemoteStore for S3Store {
    fn list_page<'a>(
        &'a self,
        bucket: &'a str,
        continuation_token: Option<&'a str>,
    ) -> BoxFuture<'a, Result<ListPage>> {
        self.list_page_inner(bucket, continuation_token).boxed()
    }

    fn download<'a>(
        &'a self,
        bucket: &'a str,
        key: &'a str,
        destination: Destination<'a>,
    ) -> BoxFuture<'a, Result<u64>> {
        self.download_inner(bucket, key, destination).boxed()
    }
}

/// Creates an S3 client with static credentials.
///
/// The client uses the endpoint and region from `config`. Addressing is
/// always path-style, as S3-compatible providers such as B2 expect.
pub async fn create_s3_client(config: &S3Config) -> Client {
    let credentials = Credentials::new(
        &config.access_key,
        &config.secret_key,
        None,
        None,
        CREDENTIALS_PROVIDER,
    );

    let shared_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .credentials_provider(credentials)
        .load()
        .await;

    let s3_config = aws_sdk_s3::config::Builder::from(&shared_config)
        .endpoint_url(&config.endpoint)
        .force_path_style(true)
        .build();

    Client::from_conf(s3_config)
}
