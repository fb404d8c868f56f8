//! Fetch summary functionality.
//!
//! This module contains the [`Summary`] struct and [`Status`] enum reporting
//! what happened to each object handed to the fetch pool.
//!
//! # Examples
//!
//! ```rust
//! use bucket_dl::object::{ObjectDescriptor, Status, Summary};
//!
//! let summary = Summary::new(ObjectDescriptor::new("a.txt"), 1024).with_status(Status::Success);
//!
//! match summary.status() {
//!     Status::Success => println!("Downloaded {} bytes", summary.size()),
//!     Status::Skipped(reason) => println!("Skipped: {}", reason),
//!     Status::Fail(msg) => println!("Failed: {}", msg),
//!     Status::NotStarted => println!("Abandoned"),
//! }
//! ```

use super::descriptor::ObjectDescriptor;

/// Fetch status enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Status {
    /// Fetch failed with error message
    Fail(String),
    /// Left in the queue when another object failed
    NotStarted,
    /// Fetch was skipped with reason
    Skipped(String),
    /// Object written to disk
    Success,
}

/// Represents an [`ObjectDescriptor`] summary.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Fetched object.
    object: ObjectDescriptor,
    /// Bytes written to disk.
    size: u64,
    /// Status.
    status: Status,
}

impl Summary {
    /// Create a new [`Summary`] for `object`.
    pub fn new(object: ObjectDescriptor, size: u64) -> Self {
        Self {
            object,
            size,
            status: Status::NotStarted,
        }
    }

    /// Attach a status to the [`Summary`].
    pub fn with_status(self, status: Status) -> Self {
        Self { status, ..self }
    }

    /// Get the number of bytes written.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Get a reference to the summary's object.
    pub fn object(&self) -> &ObjectDescriptor {
        &self.object
    }

    /// Get a reference to the summary's status.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Mark the summary as failed with a message.
    pub fn fail(self, msg: impl std::fmt::Display) -> Self {
        Self {
            status: Status::Fail(msg.to_string()),
            ..self
        }
    }

    /// Mark the summary as skipped with a message.
    pub fn skip(self, msg: impl std::fmt::Display) -> Self {
        Self {
            status: Status::Skipped(msg.to_string()),
            ..self
        }
    }

    /// Whether the object ended up downloaded.
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_object() -> ObjectDescriptor {
        ObjectDescriptor::new("clips/test.mp4")
    }

    #[test]
    fn test_summary_creation() {
        let summary = Summary::new(create_test_object(), 1024);

        assert_eq!(summary.size(), 1024);
        assert_eq!(summary.object().key, "clips/test.mp4");
        assert_eq!(summary.status(), &Status::NotStarted);
        assert!(!summary.is_success());
    }

    #[test]
    fn test_summary_with_status() {
        let summary = Summary::new(create_test_object(), 1024).with_status(Status::Success);
        assert!(summary.is_success());
    }

    #[test]
    fn test_summary_fail() {
        let summary = Summary::new(create_test_object(), 0).fail("Network error");

        match summary.status() {
            Status::Fail(msg) => assert_eq!(msg, "Network error"),
            _ => panic!("Expected Fail status"),
        }
    }

    #[test]
    fn test_summary_skip() {
        let summary = Summary::new(create_test_object(), 0).skip("File already exists");

        match summary.status() {
            Status::Skipped(msg) => assert_eq!(msg, "File already exists"),
            _ => panic!("Expected Skipped status"),
        }
    }
}
