#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use bucket_dl::store::Destination;
use bucket_dl::{Error, FetcherBuilder, ListPage, ObjectDescriptor, RemoteStore, Result};
use futures::future::{BoxFuture, FutureExt};
use rand::Rng;
use tempfile::TempDir;
use tokio::io::AsyncWriteExt;

// Common test constants
pub const TEST_BUCKET: &str = "test-bucket";

/// In-memory [`RemoteStore`] recording every call made to it.
///
/// Pages are served by continuation token: the first page answers `None`,
/// page `i` answers `Some("T{i}")`. Object bodies default to the key bytes.
#[derive(Default)]
pub struct MockStore {
    pages: Vec<(Option<String>, ListPage)>,
    bodies: HashMap<String, Vec<u8>>,
    failing_downloads: HashSet<String>,
    failing_list: bool,
    chunk_size: Option<usize>,
    list_calls: Mutex<Vec<Option<String>>>,
    download_calls: Mutex<Vec<String>>,
}

impl MockStore {
    /// A store whose listing returns `pages`, chained by tokens.
    pub fn with_pages(pages: Vec<Vec<&str>>) -> Self {
        let count = pages.len();
        let mut store = MockStore::default();
        for (i, keys) in pages.into_iter().enumerate() {
            let request_token = (i > 0).then(|| page_token(i));
            let last = i + 1 == count;
            for key in &keys {
                store.bodies.insert(key.to_string(), key.as_bytes().to_vec());
            }
            let page = ListPage {
                objects: keys.iter().map(|k| ObjectDescriptor::new(*k)).collect(),
                truncated: !last,
                next_continuation_token: (!last).then(|| page_token(i + 1)),
            };
            store.pages.push((request_token, page));
        }
        store
    }

    /// A store with a single listing page holding `keys`.
    pub fn with_objects(keys: &[&str]) -> Self {
        Self::with_pages(vec![keys.to_vec()])
    }

    /// Serve only `page`, for the first request.
    pub fn with_raw_page(mut self, page: ListPage) -> Self {
        self.pages = vec![(None, page)];
        self
    }

    /// Serve `body` for `key`.
    pub fn with_body(mut self, key: &str, body: &[u8]) -> Self {
        self.bodies.insert(key.to_string(), body.to_vec());
        self
    }

    /// Make downloads of `key` fail.
    pub fn failing_download(mut self, key: &str) -> Self {
        self.failing_downloads.insert(key.to_string());
        self
    }

    /// Write bodies in chunks of `size` bytes, like a streamed response.
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = Some(size);
        self
    }

    /// Make every listing call fail.
    pub fn failing_list(mut self) -> Self {
        self.failing_list = true;
        self
    }

    /// Tokens the listing was called with, in call order.
    pub fn list_calls(&self) -> Vec<Option<String>> {
        self.list_calls.lock().unwrap().clone()
    }

    /// Keys downloaded, in call order.
    pub fn download_calls(&self) -> Vec<String> {
        self.download_calls.lock().unwrap().clone()
    }

    /// Number of download calls per key.
    pub fn download_counts(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for key in self.download_calls() {
            *counts.entry(key).or_insert(0) += 1;
        }
        counts
    }
}

pub fn page_token(i: usize) -> String {
    format!("T{}", i)
}

impl RemoteStore for MockStore {
    fn list_page<'a>(
        &'a self,
        bucket: &'a str,
        continuation_token: Option<&'a str>,
    ) -> BoxFuture<'a, Result<ListPage>> {
        async move {
            self.list_calls
                .lock()
                .unwrap()
                .push(continuation_token.map(String::from));

            if self.failing_list {
                return Err(Error::remote_list(bucket, "simulated listing failure"));
            }

            self.pages
                .iter()
                .find(|(token, _)| token.as_deref() == continuation_token)
                .map(|(_, page)| page.clone())
                .ok_or_else(|| Error::remote_list(bucket, "unknown continuation token"))
        }
        .boxed()
    }

    fn download<'a>(
        &'a self,
        _bucket: &'a str,
        key: &'a str,
        destination: Destination<'a>,
    ) -> BoxFuture<'a, Result<u64>> {
        async move {
            self.download_calls.lock().unwrap().push(key.to_string());

            // Let other workers run in between to shuffle completion order.
            let yields = rand::rng().random_range(0..4);
            for _ in 0..yields {
                tokio::task::yield_now().await;
            }

            if self.failing_downloads.contains(key) {
                return Err(Error::remote_download(key, "simulated download failure"));
            }

            let body = self
                .bodies
                .get(key)
                .ok_or_else(|| Error::remote_download(key, "NoSuchKey"))?;
            let chunk_size = self.chunk_size.unwrap_or(body.len()).max(1);
            for chunk in body.chunks(chunk_size) {
                destination
                    .write_all(chunk)
                    .await
                    .map_err(|e| Error::remote_download(key, e))?;
            }
            Ok(body.len() as u64)
        }
        .boxed()
    }
}

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates a temporary file with the given content
pub fn create_temp_file(dir: &Path, filename: &str, content: &[u8]) -> PathBuf {
    let file_path = dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(&file_path, content).expect("Failed to write temporary file");
    file_path
}

/// Keys `obj-000` .. `obj-{count-1}`.
pub fn create_test_keys(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("obj-{:03}", i)).collect()
}

/// A fetcher writing into `dir` without progress bars.
pub fn create_test_fetcher_builder(dir: &Path) -> FetcherBuilder {
    FetcherBuilder::hidden().directory(dir.to_path_buf())
}

/// Asserts that a file holds exactly `expected`
pub fn assert_file_content(path: &Path, expected: &[u8]) {
    let content = fs::read(path).unwrap_or_else(|_| panic!("File should exist at path: {:?}", path));
    assert_eq!(content, expected, "Content mismatch at path: {:?}", path);
}

/// Keys of the given descriptors.
pub fn keys(objects: &[ObjectDescriptor]) -> Vec<&str> {
    objects.iter().map(|o| o.key.as_str()).collect()
}
