//! Scanner module for directory traversal and file reading.
//!
//! This module provides functionality for:
//! - Parallel directory walking using jwalk
//! - Single-shot file content loading
//! - Weak byte-sum fingerprinting
//!
//! # Architecture
//!
//! The scanner is divided into submodules:
//! - [`walker`]: Directory traversal and file discovery
//! - [`fingerprint`]: Content reading and the byte-sum fingerprint
//!
//! # Example
//!
//! ```no_run
//! use dupesieve::scanner::{read_record, Walker, WalkerConfig};
//! use std::path::Path;
//!
//! // Walk the directory, then load each file once
//! let walker = Walker::new(Path::new("."), WalkerConfig::default());
//! for path in walker.collect_files()? {
//!     let record = read_record(&path)?;
//!     println!("{}: fingerprint {}", record.path.display(), record.fingerprint());
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod fingerprint;
pub mod walker;

use std::path::PathBuf;

// Re-export main types
pub use fingerprint::{fingerprint_bytes, read_record, Fingerprint, FINGERPRINT_MODULUS};
pub use walker::Walker;

/// A discovered file with its complete content in memory.
///
/// The content is read exactly once per file and owned by the record, so
/// both fingerprinting and exact comparison work off the same bytes with
/// no risk of the file changing between the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path to the file
    pub path: PathBuf,
    /// Full file content
    pub content: Vec<u8>,
}

impl FileRecord {
    /// Create a new record from a path and its content.
    #[must_use]
    pub fn new(path: PathBuf, content: Vec<u8>) -> Self {
        Self { path, content }
    }

    /// Compute the weak fingerprint of this record's content.
    #[must_use]
    pub fn fingerprint(&self) -> Fingerprint {
        fingerprint_bytes(&self.content)
    }

    /// Content length in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

/// Configuration for directory walking.
///
/// Controls symlink handling and hidden-file visibility. There are no
/// size or pattern filters: grouping is only correct when every file in
/// the tree participates.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Follow symbolic links during traversal.
    /// Warning: May cause infinite loops with symlink cycles.
    pub follow_symlinks: bool,

    /// Skip hidden files and directories (names starting with `.`).
    pub skip_hidden: bool,
}

impl WalkerConfig {
    /// Create a new configuration from CLI arguments.
    ///
    /// # Arguments
    ///
    /// * `follow_symlinks` - Whether to follow symbolic links
    /// * `skip_hidden` - Whether to skip hidden files
    #[must_use]
    pub fn new(follow_symlinks: bool, skip_hidden: bool) -> Self {
        Self {
            follow_symlinks,
            skip_hidden,
        }
    }
}

/// Errors that can occur during directory scanning.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// Permission was denied when accessing a file or directory.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// The specified path was not found.
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// The specified path is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// An I/O error occurred while accessing a file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while reading file content.
#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    /// The specified file was not found.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Permission was denied when reading the file.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// An I/O error occurred while reading the file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
