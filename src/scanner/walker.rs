//! Directory walker implementation using jwalk for parallel traversal.
//!
//! # Overview
//!
//! This module provides the [`Walker`] struct for enumerating every regular
//! file beneath a root directory. It uses [`jwalk`] for parallel directory
//! walking and returns the discovered paths in a deterministic sorted order
//! so downstream grouping and reporting are reproducible run to run.
//!
//! Unlike a filtering scanner, this walker deliberately excludes nothing:
//! empty files, hidden files, and zero-interest files all participate in
//! duplicate grouping unless configured otherwise. Directories themselves
//! are never yielded, only the files inside them.
//!
//! # Example
//!
//! ```no_run
//! use dupesieve::scanner::{Walker, WalkerConfig};
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("/home/user/Downloads"), WalkerConfig::default());
//! let files = walker.collect_files()?;
//! for path in &files {
//!     println!("{}", path.display());
//! }
//! # Ok::<(), dupesieve::scanner::ScanError>(())
//! ```

use std::path::{Path, PathBuf};

use jwalk::WalkDir;

use super::{ScanError, WalkerConfig};

/// Directory walker for parallel file discovery.
///
/// Uses jwalk for efficient parallel traversal of directory trees.
/// Collects every regular file under the root; any traversal failure is
/// treated as fatal rather than skipped, so a result always reflects the
/// complete tree.
#[derive(Debug)]
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
    /// Walker configuration
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given path.
    ///
    /// # Arguments
    ///
    /// * `path` - Root directory to scan
    /// * `config` - Walker configuration options
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dupesieve::scanner::{Walker, WalkerConfig};
    /// use std::path::Path;
    ///
    /// let walker = Walker::new(Path::new("."), WalkerConfig::default());
    /// ```
    #[must_use]
    pub fn new(path: &Path, config: WalkerConfig) -> Self {
        Self {
            root: path.to_path_buf(),
            config,
        }
    }

    /// Enumerate all regular files under the root, sorted by path.
    ///
    /// Traversal is recursive and complete: every file in every
    /// subdirectory is included, regardless of size or content. The
    /// returned list is sorted lexicographically so output is stable
    /// across runs and platforms.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::NotFound`] if the root does not exist,
    /// [`ScanError::NotADirectory`] if it is not a directory, and
    /// [`ScanError::PermissionDenied`] or [`ScanError::Io`] if any entry
    /// in the tree cannot be visited. A partially readable tree is an
    /// error, not a partial result.
    pub fn collect_files(&self) -> Result<Vec<PathBuf>, ScanError> {
        if !self.root.exists() {
            return Err(ScanError::NotFound(self.root.clone()));
        }
        if !self.root.is_dir() {
            return Err(ScanError::NotADirectory(self.root.clone()));
        }

        log::debug!("Starting walk of {}", self.root.display());

        let walk = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .skip_hidden(self.config.skip_hidden)
            .process_read_dir(|_depth, _path, _state, children| {
                children.sort_by(|a, b| match (a, b) {
                    (Ok(a), Ok(b)) => a.file_name.cmp(&b.file_name),
                    (Ok(_), Err(_)) => std::cmp::Ordering::Less,
                    (Err(_), Ok(_)) => std::cmp::Ordering::Greater,
                    (Err(_), Err(_)) => std::cmp::Ordering::Equal,
                });
            });

        let mut files = Vec::new();
        for entry in walk {
            let entry = entry.map_err(|e| handle_jwalk_error(&self.root, &e))?;
            if entry.file_type().is_file() {
                files.push(entry.path());
            }
        }

        // jwalk's parallel readers can interleave sibling directories, so
        // the per-directory sort above is not enough on its own.
        files.sort();

        log::debug!("Walk complete: {} files found", files.len());
        Ok(files)
    }
}

/// Convert a jwalk error into a `ScanError`.
fn handle_jwalk_error(root: &Path, error: &jwalk::Error) -> ScanError {
    let path = error
        .path()
        .map_or_else(|| root.to_path_buf(), std::borrow::ToOwned::to_owned);

    log::warn!("Walker error for {}: {}", path.display(), error);
    ScanError::Io {
        path,
        source: std::io::Error::other(error.to_string()),
    }
}
