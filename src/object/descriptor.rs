//! Remote object descriptors.
//!
//! An [`ObjectDescriptor`] identifies one object of a bucket by its key. The
//! key is path-like (`videos/2024/clip.mp4`) and is mapped below the output
//! directory with [`ObjectDescriptor::local_path`].
//!
//! # Examples
//!
//! ```rust
//! use bucket_dl::object::ObjectDescriptor;
//! use std::path::Path;
//!
//! let object = ObjectDescriptor::new("b/c.txt").with_size(Some(42));
//! let path = object.local_path(Path::new("/out"))?;
//! assert_eq!(path, Path::new("/out/b/c.txt"));
//! # Ok::<(), bucket_dl::Error>(())
//! ```

use crate::error::{Error, Result};

use std::path::{Component, Path, PathBuf};

/// Represents an object listed in the remote bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectDescriptor {
    /// Key of the object inside the bucket.
    pub key: String,
    /// Size in bytes, when the listing reported it.
    pub size: Option<u64>,
}

impl ObjectDescriptor {
    /// Creates a new [`ObjectDescriptor`] with an unknown size.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            size: None,
        }
    }

    /// Attach the listed size.
    pub fn with_size(self, size: Option<u64>) -> Self {
        Self { size, ..self }
    }

    /// Whether the key is a "folder" placeholder such as `photos/`.
    pub fn is_directory_marker(&self) -> bool {
        self.key.ends_with('/')
    }

    /// Compute where this object is stored below `root`.
    ///
    /// Leading separators are ignored. Keys that would climb out of `root`
    /// or that are empty are rejected with [`Error::InvalidKey`].
    pub fn local_path(&self, root: &Path) -> Result<PathBuf> {
        let relative = Path::new(self.key.trim_start_matches('/'));
        let mut path = root.to_path_buf();
        let mut depth = 0usize;

        for component in relative.components() {
            match component {
                Component::Normal(part) => {
                    path.push(part);
                    depth += 1;
                }
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(Error::InvalidKey(format!(
                        "\"{}\" escapes the output directory",
                        self.key
                    )));
                }
            }
        }

        if depth == 0 {
            return Err(Error::InvalidKey(format!(
                "\"{}\" does not name a file",
                self.key
            )));
        }

        Ok(path)
    }
}

impl From<&str> for ObjectDescriptor {
    fn from(key: &str) -> Self {
        ObjectDescriptor::new(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_path_nested_key() {
        let object = ObjectDescriptor::new("b/c.txt");
        assert_eq!(
            object.local_path(Path::new("/out")).unwrap(),
            PathBuf::from("/out/b/c.txt")
        );
    }

    #[test]
    fn test_local_path_strips_leading_slash() {
        let object = ObjectDescriptor::new("/a.txt");
        assert_eq!(
            object.local_path(Path::new("/out")).unwrap(),
            PathBuf::from("/out/a.txt")
        );
    }

    #[test]
    fn test_local_path_ignores_current_dir() {
        let object = ObjectDescriptor::new("./x/./y.bin");
        assert_eq!(
            object.local_path(Path::new("out")).unwrap(),
            PathBuf::from("out/x/y.bin")
        );
    }

    #[test]
    fn test_local_path_rejects_parent_dir() {
        let object = ObjectDescriptor::new("../etc/passwd");
        assert!(matches!(
            object.local_path(Path::new("/out")),
            Err(Error::InvalidKey(_))
        ));
    }

    #[test]
    fn test_local_path_rejects_empty_key() {
        for key in ["", "/", "./"] {
            let object = ObjectDescriptor::new(key);
            assert!(
                matches!(object.local_path(Path::new("/out")), Err(Error::InvalidKey(_))),
                "key {:?} should be rejected",
                key
            );
        }
    }

    #[test]
    fn test_directory_marker() {
        assert!(ObjectDescriptor::new("photos/").is_directory_marker());
        assert!(!ObjectDescriptor::new("photos/a.jpg").is_directory_marker());
    }

    #[test]
    fn test_with_size() {
        let object = ObjectDescriptor::from("a.txt").with_size(Some(7));
        assert_eq!(object.key, "a.txt");
        assert_eq!(object.size, Some(7));
    }
}
