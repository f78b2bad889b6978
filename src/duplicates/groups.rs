//! Fingerprint buckets, content clusters, and duplicate groups.
//!
//! # Overview
//!
//! This module provides the structures behind the two-stage grouping model:
//! files are first bucketed by their weak fingerprint, then each bucket is
//! partitioned into clusters of byte-identical content. Only clusters with
//! two or more members surface as [`DuplicateGroup`]s.
//!
//! ## Collision handling
//!
//! The fingerprint has 100 possible values, so unrelated files land in the
//! same bucket routinely. A [`Bucket`] never assumes its members are equal:
//! every insertion compares full content against existing clusters, and a
//! mismatch simply starts a new cluster in the same bucket. Files that
//! collide without matching never appear in any group.
//!
//! # Example
//!
//! ```
//! use dupesieve::scanner::FileRecord;
//! use dupesieve::duplicates::group_records;
//! use std::path::PathBuf;
//!
//! let records = vec![
//!     FileRecord::new(PathBuf::from("/a"), b"foo".to_vec()),
//!     FileRecord::new(PathBuf::from("/b"), b"foo".to_vec()),
//!     FileRecord::new(PathBuf::from("/c"), b"bar".to_vec()),
//! ];
//!
//! let (groups, stats) = group_records(records);
//!
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].paths.len(), 2);
//! assert_eq!(stats.total_files, 3);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::scanner::{FileRecord, Fingerprint};

/// A run of byte-identical files within one fingerprint bucket.
///
/// The first file to arrive donates its content as the cluster's
/// representative; every later candidate is compared against that
/// content in full before joining.
#[derive(Debug, Clone)]
pub struct ContentCluster {
    /// Representative content, owned by the cluster
    pub content: Vec<u8>,
    /// Paths of all files whose content equals the representative
    pub paths: Vec<PathBuf>,
}

impl ContentCluster {
    /// Create a cluster seeded with a single file.
    #[must_use]
    pub fn new(record: FileRecord) -> Self {
        Self {
            content: record.content,
            paths: vec![record.path],
        }
    }

    /// Check whether candidate content is byte-for-byte identical to
    /// this cluster's representative.
    ///
    /// Slice equality short-circuits on length, so clusters of
    /// different sizes are rejected without touching the bytes.
    #[must_use]
    pub fn matches(&self, content: &[u8]) -> bool {
        self.content == content
    }

    /// Add a path whose content has already been verified equal.
    pub fn add(&mut self, path: PathBuf) {
        self.paths.push(path);
    }

    /// Number of files in this cluster.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Check if this cluster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Check if this cluster holds confirmed duplicates (2+ files).
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        self.paths.len() > 1
    }

    /// Representative content length in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

/// All files sharing one fingerprint value, split into content clusters.
#[derive(Debug, Clone, Default)]
pub struct Bucket {
    /// Clusters of byte-identical files, in first-seen order
    pub clusters: Vec<ContentCluster>,
}

impl Bucket {
    /// Create an empty bucket.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, comparing content against existing clusters.
    ///
    /// The record joins the first cluster whose representative content
    /// matches exactly; if none matches, it seeds a new cluster. Cluster
    /// membership is therefore independent of arrival order, only the
    /// ordering of paths within a cluster reflects it.
    pub fn insert(&mut self, record: FileRecord) {
        for cluster in &mut self.clusters {
            if cluster.matches(&record.content) {
                cluster.add(record.path);
                return;
            }
        }
        self.clusters.push(ContentCluster::new(record));
    }

    /// Total number of files across all clusters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clusters.iter().map(ContentCluster::len).sum()
    }

    /// Check if this bucket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Check if distinct contents collided into this bucket.
    #[must_use]
    pub fn has_collisions(&self) -> bool {
        self.clusters.len() > 1
    }
}

/// Confirmed duplicate group of files.
///
/// Every path in the group refers to byte-identical content; the
/// fingerprint is retained for reporting only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateGroup {
    /// Weak fingerprint shared by the group (and possibly by others)
    pub fingerprint: Fingerprint,
    /// Content size in bytes, shared by all files in the group
    pub size: u64,
    /// Paths of the byte-identical files
    pub paths: Vec<PathBuf>,
}

impl DuplicateGroup {
    /// Create a new duplicate group.
    ///
    /// # Arguments
    ///
    /// * `fingerprint` - Weak fingerprint of the shared content
    /// * `size` - Content size in bytes
    /// * `paths` - Paths of the byte-identical files
    #[must_use]
    pub fn new(fingerprint: Fingerprint, size: u64, paths: Vec<PathBuf>) -> Self {
        Self {
            fingerprint,
            size,
            paths,
        }
    }

    /// Number of files in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Check if this group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Total size of all files in this group.
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.size * self.paths.len() as u64
    }

    /// Total wasted space (all copies minus one).
    #[must_use]
    pub fn wasted_space(&self) -> u64 {
        if self.paths.len() > 1 {
            self.size * (self.paths.len() as u64 - 1)
        } else {
            0
        }
    }

    /// Number of duplicate copies (total - 1 original).
    #[must_use]
    pub fn duplicate_count(&self) -> usize {
        self.paths.len().saturating_sub(1)
    }

    /// Every unordered pair of paths in this group.
    ///
    /// A group of n files expands to n*(n-1)/2 pairs, preserving the
    /// group's path order within each pair.
    #[must_use]
    pub fn pairs(&self) -> Vec<(PathBuf, PathBuf)> {
        let mut out = Vec::new();
        for i in 0..self.paths.len() {
            for j in (i + 1)..self.paths.len() {
                out.push((self.paths[i].clone(), self.paths[j].clone()));
            }
        }
        out
    }
}

/// Statistics from the grouping pass.
///
/// Captures how the fingerprint distributed the input and how often
/// distinct contents collided into a shared bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupingStats {
    /// Total number of files processed
    pub total_files: usize,
    /// Total size of all files in bytes
    pub total_size: u64,
    /// Number of distinct fingerprint values observed
    pub buckets: usize,
    /// Number of buckets holding more than one content cluster
    pub collision_buckets: usize,
    /// Number of content clusters across all buckets
    pub clusters: usize,
    /// Number of groups with 2+ byte-identical files
    pub duplicate_groups: usize,
    /// Number of duplicate files (excluding one original per group)
    pub duplicate_files: usize,
    /// Bytes recoverable by keeping one copy per group
    pub wasted_space: u64,
}

impl GroupingStats {
    /// Percentage of buckets where distinct contents collided.
    #[must_use]
    pub fn collision_rate(&self) -> f64 {
        if self.buckets == 0 {
            0.0
        } else {
            (self.collision_buckets as f64 / self.buckets as f64) * 100.0
        }
    }

    /// Percentage of files confirmed as duplicates.
    #[must_use]
    pub fn duplicate_rate(&self) -> f64 {
        if self.total_files == 0 {
            0.0
        } else {
            (self.duplicate_files as f64 / self.total_files as f64) * 100.0
        }
    }

    /// Number of files whose content matched no other file.
    ///
    /// Files in groups amount to one original per group plus the
    /// duplicates; everything else is unique.
    #[must_use]
    pub fn unique_files(&self) -> usize {
        self.total_files
            .saturating_sub(self.duplicate_files + self.duplicate_groups)
    }
}

/// Partition records into duplicate groups by fingerprint and content.
///
/// Each record is routed to the bucket for its fingerprint and compared
/// against that bucket's clusters byte for byte. Clusters with two or
/// more members become [`DuplicateGroup`]s; singleton clusters (unique
/// content, collided or not) are dropped.
///
/// Groups are returned sorted by their first path, so output is stable
/// regardless of input order beyond cluster-internal path order.
///
/// # Arguments
///
/// * `records` - Iterator of file records to partition
///
/// # Returns
///
/// A tuple of:
/// - `Vec<DuplicateGroup>` - Groups of byte-identical files (2+ members)
/// - `GroupingStats` - Statistics about the partition
///
/// # Performance
///
/// - Comparisons only happen inside a bucket, never across buckets
/// - Length mismatch rejects a cluster without reading its bytes
///
/// # Example
///
/// ```
/// use dupesieve::scanner::FileRecord;
/// use dupesieve::duplicates::group_records;
/// use std::path::PathBuf;
///
/// // [24] and [124] share fingerprint 24 but differ in content
/// let records = vec![
///     FileRecord::new(PathBuf::from("/x"), vec![24]),
///     FileRecord::new(PathBuf::from("/y"), vec![124]),
/// ];
///
/// let (groups, stats) = group_records(records);
///
/// assert!(groups.is_empty());
/// assert_eq!(stats.collision_buckets, 1);
/// ```
#[must_use]
pub fn group_records(
    records: impl IntoIterator<Item = FileRecord>,
) -> (Vec<DuplicateGroup>, GroupingStats) {
    let mut buckets: HashMap<Fingerprint, Bucket> = HashMap::new();
    let mut stats = GroupingStats::default();

    for record in records {
        stats.total_files += 1;
        stats.total_size += record.size();

        let fingerprint = record.fingerprint();
        log::trace!(
            "Bucketing {} under fingerprint {}",
            record.path.display(),
            fingerprint
        );
        buckets.entry(fingerprint).or_default().insert(record);
    }

    stats.buckets = buckets.len();

    let mut groups = Vec::new();
    for (fingerprint, bucket) in buckets {
        if bucket.has_collisions() {
            stats.collision_buckets += 1;
            log::debug!(
                "Fingerprint {} collided: {} distinct contents among {} files",
                fingerprint,
                bucket.clusters.len(),
                bucket.len()
            );
        }

        for cluster in bucket.clusters {
            stats.clusters += 1;
            if cluster.has_duplicates() {
                stats.duplicate_groups += 1;
                stats.duplicate_files += cluster.len() - 1;
                let group = DuplicateGroup::new(fingerprint, cluster.size(), cluster.paths);
                stats.wasted_space += group.wasted_space();
                groups.push(group);
            }
        }
    }

    // Bucket iteration order is nondeterministic; pin the output order
    // to the lexicographically first member of each group.
    groups.sort_by(|a, b| a.paths.first().cmp(&b.paths.first()));

    log::info!(
        "Grouping complete: {} files, {} duplicate groups ({:.1}% of buckets collided)",
        stats.total_files,
        stats.duplicate_groups,
        stats.collision_rate()
    );

    (groups, stats)
}
