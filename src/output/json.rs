//! Machine-readable JSON output.
//!
//! The document has two top-level keys: `duplicates`, an array of groups
//! (weak fingerprint, per-file size, file paths), and `summary`, the run
//! statistics plus the exit code the process will return. Paths are
//! canonicalized where possible so scripts receive absolute paths.
//!
//! ```json
//! {
//!   "duplicates": [
//!     { "fingerprint": 24, "size": 1024, "files": ["/a/one.txt", "/a/two.txt"] }
//!   ],
//!   "summary": {
//!     "total_files": 100,
//!     "total_size": 1048576,
//!     "buckets": 40,
//!     "collision_buckets": 2,
//!     "duplicate_groups": 5,
//!     "duplicate_files": 10,
//!     "reclaimable_space": 51200,
//!     "scan_duration_ms": 1234,
//!     "exit_code": 0,
//!     "exit_code_name": "DS000"
//!   }
//! }
//! ```

use std::io::Write;

use serde::Serialize;

use crate::duplicates::{DuplicateGroup, GroupSummary};
use crate::error::ExitCode;
use crate::scanner::Fingerprint;

/// One duplicate group as it appears in the `duplicates` array.
#[derive(Debug, Clone, Serialize)]
pub struct JsonDuplicateGroup {
    /// Weak fingerprint shared by the group, in `[0, 100)`
    pub fingerprint: Fingerprint,
    /// Size of the shared content in bytes
    pub size: u64,
    /// Paths of the byte-identical files, absolute where resolvable
    pub files: Vec<String>,
}

impl From<&DuplicateGroup> for JsonDuplicateGroup {
    fn from(group: &DuplicateGroup) -> Self {
        Self {
            fingerprint: group.fingerprint,
            size: group.size,
            files: group.paths.iter().map(|p| absolute_or_lossy(p)).collect(),
        }
    }
}

impl JsonDuplicateGroup {
    /// Convert a [`DuplicateGroup`] into its JSON form.
    #[must_use]
    pub fn from_duplicate_group(group: &DuplicateGroup) -> Self {
        group.into()
    }
}

/// The `summary` object: run statistics plus exit-code fields.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSummary {
    /// Files read during the run
    pub total_files: usize,
    /// Combined size of all files read, in bytes
    pub total_size: u64,
    /// Distinct fingerprint values observed
    pub buckets: usize,
    /// Buckets where differing contents shared a fingerprint
    pub collision_buckets: usize,
    /// Groups of two or more byte-identical files
    pub duplicate_groups: usize,
    /// Redundant copies across all groups (one original each is excluded)
    pub duplicate_files: usize,
    /// Bytes freed by keeping a single copy per group
    pub reclaimable_space: u64,
    /// Wall-clock duration of the run in milliseconds
    pub scan_duration_ms: u64,
    /// Numeric exit code for this run
    pub exit_code: i32,
    /// Stable code name, e.g. `"DS000"`
    pub exit_code_name: String,
}

impl JsonSummary {
    /// Build the summary object from run statistics and the exit code.
    #[must_use]
    pub fn from_group_summary(summary: &GroupSummary, exit_code: ExitCode) -> Self {
        Self {
            total_files: summary.total_files,
            total_size: summary.total_size,
            buckets: summary.buckets,
            collision_buckets: summary.collision_buckets,
            duplicate_groups: summary.duplicate_groups,
            duplicate_files: summary.duplicate_files,
            reclaimable_space: summary.reclaimable_space,
            scan_duration_ms: summary.scan_duration.as_millis() as u64,
            exit_code: exit_code.as_i32(),
            exit_code_name: exit_code.code_prefix().to_string(),
        }
    }
}

/// The complete JSON document.
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    /// All confirmed duplicate groups
    pub duplicates: Vec<JsonDuplicateGroup>,
    /// Run statistics and exit code
    pub summary: JsonSummary,
}

impl JsonOutput {
    /// Assemble the document from scan results.
    #[must_use]
    pub fn new(groups: &[DuplicateGroup], summary: &GroupSummary, exit_code: ExitCode) -> Self {
        Self {
            duplicates: groups.iter().map(JsonDuplicateGroup::from).collect(),
            summary: JsonSummary::from_group_summary(summary, exit_code),
        }
    }

    /// Serialize compactly, one line.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json` error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize with indentation for human inspection.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json` error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write the document plus a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns [`JsonOutputError`] if serialization or the write fails.
    pub fn write_to<W: Write>(&self, writer: &mut W, pretty: bool) -> Result<(), JsonOutputError> {
        let json = if pretty {
            self.to_json_pretty()?
        } else {
            self.to_json()?
        };
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

// Canonicalization fails for paths that vanished mid-run; fall back to
// the path as scanned rather than dropping the entry.
fn absolute_or_lossy(path: &std::path::Path) -> String {
    path.canonicalize()
        .unwrap_or_else(|_| path.to_path_buf())
        .to_string_lossy()
        .into_owned()
}

/// Errors from JSON output generation.
#[derive(thiserror::Error, Debug)]
pub enum JsonOutputError {
    /// Serialization failed.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The underlying writer failed.
    #[error("I/O error during JSON generation: {0}")]
    Io(#[from] std::io::Error),
}
