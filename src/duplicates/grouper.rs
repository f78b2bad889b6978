//! Grouping pipeline orchestration.
//!
//! # Overview
//!
//! This module runs the complete duplicate grouping pipeline:
//! 1. **Walk** - Enumerate every file under the target directory
//! 2. **Read** - Load each file's content once, in parallel
//! 3. **Partition** - Bucket by fingerprint and split buckets into
//!    content clusters (see [`crate::duplicates::groups`])
//!
//! # Example
//!
//! ```no_run
//! use dupesieve::duplicates::{Grouper, GrouperConfig};
//! use std::path::Path;
//!
//! let config = GrouperConfig::default().with_io_threads(4);
//! let grouper = Grouper::new(config);
//!
//! let (groups, summary) = grouper.group_tree(Path::new("/some/path"))?;
//!
//! println!("Found {} duplicate groups", summary.duplicate_groups);
//! println!("Reclaimable space: {}", summary.reclaimable_display());
//! # Ok::<(), dupesieve::duplicates::GrouperError>(())
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use bytesize::ByteSize;
use rayon::prelude::*;

use super::{group_records, DuplicateGroup, GroupingStats};
use crate::progress::ProgressCallback;
use crate::scanner::{read_record, FileRecord, ReadError, ScanError, Walker, WalkerConfig};

/// Configuration for the grouper.
///
/// Controls I/O parallelism, traversal behavior, and progress reporting.
#[derive(Clone)]
pub struct GrouperConfig {
    /// Number of I/O threads for parallel file reading.
    /// Default is 4 to prevent disk thrashing.
    pub io_threads: usize,
    /// Walker configuration for directory traversal.
    pub walker_config: WalkerConfig,
    /// Optional progress callback for reporting.
    pub progress_callback: Option<Arc<dyn ProgressCallback>>,
}

impl std::fmt::Debug for GrouperConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrouperConfig")
            .field("io_threads", &self.io_threads)
            .field("walker_config", &self.walker_config)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<callback>"),
            )
            .finish()
    }
}

impl Default for GrouperConfig {
    fn default() -> Self {
        Self {
            io_threads: 4,
            walker_config: WalkerConfig::default(),
            progress_callback: None,
        }
    }
}

impl GrouperConfig {
    /// Create a new configuration with custom I/O thread count.
    #[must_use]
    pub fn with_io_threads(mut self, threads: usize) -> Self {
        self.io_threads = threads.max(1);
        self
    }

    /// Set the walker configuration.
    #[must_use]
    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = config;
        self
    }

    /// Set the progress callback.
    #[must_use]
    pub fn with_progress_callback(mut self, callback: Arc<dyn ProgressCallback>) -> Self {
        self.progress_callback = Some(callback);
        self
    }
}

/// Summary statistics from a grouping run.
///
/// Provides comprehensive metrics about the run including file counts,
/// bucket collisions, and potential space savings.
#[derive(Debug, Clone, Default)]
pub struct GroupSummary {
    /// Total number of files processed
    pub total_files: usize,
    /// Total size of all files in bytes
    pub total_size: u64,
    /// Number of distinct fingerprint values observed
    pub buckets: usize,
    /// Number of buckets where distinct contents collided
    pub collision_buckets: usize,
    /// Number of confirmed duplicate groups
    pub duplicate_groups: usize,
    /// Number of duplicate files (excluding one original per group)
    pub duplicate_files: usize,
    /// Total space that can be reclaimed by keeping one copy per group
    pub reclaimable_space: u64,
    /// Duration of the entire run
    pub scan_duration: Duration,
}

impl GroupSummary {
    /// Calculate the percentage of space that is wasted by duplicates.
    #[must_use]
    pub fn wasted_percentage(&self) -> f64 {
        if self.total_size == 0 {
            0.0
        } else {
            (self.reclaimable_space as f64 / self.total_size as f64) * 100.0
        }
    }

    /// Format reclaimable space as human-readable string.
    #[must_use]
    pub fn reclaimable_display(&self) -> String {
        ByteSize::b(self.reclaimable_space).to_string()
    }

    /// Format total size as human-readable string.
    #[must_use]
    pub fn total_size_display(&self) -> String {
        ByteSize::b(self.total_size).to_string()
    }

    fn absorb_stats(&mut self, stats: &GroupingStats) {
        self.total_files = stats.total_files;
        self.total_size = stats.total_size;
        self.buckets = stats.buckets;
        self.collision_buckets = stats.collision_buckets;
        self.duplicate_groups = stats.duplicate_groups;
        self.duplicate_files = stats.duplicate_files;
        self.reclaimable_space = stats.wasted_space;
    }
}

/// Errors that can occur during grouping.
#[derive(thiserror::Error, Debug)]
pub enum GrouperError {
    /// A traversal error occurred.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// A file could not be read.
    #[error(transparent)]
    Read(#[from] ReadError),
}

/// Grouper that orchestrates the duplicate grouping pipeline.
///
/// The `Grouper` runs the complete pipeline:
/// 1. **Walk** - Enumerate all files under the target directory
/// 2. **Read** - Load every file's content once, in parallel
/// 3. **Partition** - Group byte-identical files, never trusting the
///    fingerprint alone
///
/// # Example
///
/// ```no_run
/// use dupesieve::duplicates::Grouper;
/// use std::path::Path;
///
/// let grouper = Grouper::with_defaults();
/// match grouper.group_tree(Path::new(".")) {
///     Ok((groups, summary)) => {
///         println!("Found {} duplicate groups", groups.len());
///         println!("Can reclaim {} bytes", summary.reclaimable_space);
///     }
///     Err(e) => eprintln!("Grouping failed: {}", e),
/// }
/// ```
pub struct Grouper {
    config: GrouperConfig,
}

impl Grouper {
    /// Create a new grouper with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the grouper
    #[must_use]
    pub fn new(config: GrouperConfig) -> Self {
        Self { config }
    }

    /// Create a new grouper with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(GrouperConfig::default())
    }

    /// Group all duplicate files under the given directory.
    ///
    /// Walks the tree, reads every file, and returns the confirmed
    /// duplicate groups along with summary statistics.
    ///
    /// # Arguments
    ///
    /// * `path` - Root directory to group
    ///
    /// # Returns
    ///
    /// A tuple of:
    /// - `Vec<DuplicateGroup>` - Confirmed duplicate groups
    /// - `GroupSummary` - Statistics about the run
    ///
    /// # Errors
    ///
    /// Returns `GrouperError` if the path does not exist, is not a
    /// directory, or any file in the tree cannot be visited or read.
    pub fn group_tree(
        &self,
        path: &Path,
    ) -> Result<(Vec<DuplicateGroup>, GroupSummary), GrouperError> {
        let start_time = std::time::Instant::now();

        log::info!("Starting duplicate grouping of {}", path.display());

        if let Some(ref callback) = self.config.progress_callback {
            callback.on_phase_start("walking", 0);
            callback.on_message(&format!("Walking {}", path.display()));
        }

        let walker = Walker::new(path, self.config.walker_config.clone());
        let files = walker.collect_files()?;

        if let Some(ref callback) = self.config.progress_callback {
            callback.on_phase_end("walking");
        }

        log::info!("Found {} files under {}", files.len(), path.display());

        let (groups, mut summary) = self.group_paths(files)?;
        summary.scan_duration = start_time.elapsed();

        log::info!(
            "Grouping complete: {} duplicate groups, {} duplicate files, {} reclaimable",
            summary.duplicate_groups,
            summary.duplicate_files,
            summary.reclaimable_display()
        );

        Ok((groups, summary))
    }

    /// Group duplicates from a pre-collected list of paths.
    ///
    /// Use this method when you already have a list of files from another
    /// source. Files are read in parallel, but membership in the returned
    /// groups does not depend on read completion order: each group's paths
    /// appear in the order they were given.
    ///
    /// # Arguments
    ///
    /// * `paths` - Paths of the files to group
    ///
    /// # Returns
    ///
    /// A tuple of:
    /// - `Vec<DuplicateGroup>` - Confirmed duplicate groups
    /// - `GroupSummary` - Statistics about the run
    ///
    /// # Errors
    ///
    /// Returns `GrouperError::Read` for the first path (in input order)
    /// that cannot be read.
    pub fn group_paths(
        &self,
        paths: Vec<PathBuf>,
    ) -> Result<(Vec<DuplicateGroup>, GroupSummary), GrouperError> {
        let start_time = std::time::Instant::now();
        let mut summary = GroupSummary::default();

        if paths.is_empty() {
            log::debug!("No files to group");
            summary.scan_duration = start_time.elapsed();
            return Ok((Vec::new(), summary));
        }

        if let Some(ref callback) = self.config.progress_callback {
            callback.on_phase_start("reading", paths.len());
        }

        log::info!("Reading {} files", paths.len());

        // Build a custom thread pool with limited parallelism for I/O
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.io_threads)
            .build()
            .unwrap_or_else(|_| {
                log::warn!(
                    "Failed to create custom thread pool, using global pool with {} threads",
                    rayon::current_num_threads()
                );
                rayon::ThreadPoolBuilder::new().build().unwrap()
            });

        // Read contents in parallel with limited I/O parallelism. The
        // collected results stay in input order, so the first error we
        // surface is the first failing path as given.
        let results: Vec<Result<FileRecord, ReadError>> = pool.install(|| {
            paths
                .into_par_iter()
                .enumerate()
                .map(|(idx, path)| {
                    if let Some(ref callback) = self.config.progress_callback {
                        callback.on_progress(idx + 1, path.to_string_lossy().as_ref());
                    }

                    let result = read_record(&path);
                    if let (Ok(record), Some(callback)) =
                        (&result, self.config.progress_callback.as_ref())
                    {
                        callback.on_item_completed(record.size());
                    }
                    result
                })
                .collect()
        });

        if let Some(ref callback) = self.config.progress_callback {
            callback.on_phase_end("reading");
        }

        let mut records = Vec::with_capacity(results.len());
        for result in results {
            records.push(result?);
        }

        if let Some(ref callback) = self.config.progress_callback {
            callback.on_phase_start("grouping", records.len());
        }

        let (groups, stats) = group_records(records);

        if let Some(ref callback) = self.config.progress_callback {
            callback.on_phase_end("grouping");
        }

        summary.absorb_stats(&stats);
        summary.scan_duration = start_time.elapsed();

        Ok((groups, summary))
    }
}
