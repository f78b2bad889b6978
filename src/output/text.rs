//! Human-readable text output for duplicate scan results.
//!
//! Prints each duplicate group with its fingerprint, per-file size and
//! member paths, followed by a summary block. Colors come from `yansi`
//! and respect the global enable/disable state, so `--no-color` and the
//! `NO_COLOR` environment variable turn them off process-wide.
//!
//! # Example
//!
//! ```no_run
//! use dupesieve::duplicates::Grouper;
//! use dupesieve::output::text::TextOutput;
//! use std::path::Path;
//!
//! let grouper = Grouper::with_defaults();
//! let (groups, summary) = grouper.group_tree(Path::new(".")).unwrap();
//!
//! let output = TextOutput::new(&groups, &summary);
//! output.write_to(std::io::stdout()).unwrap();
//! ```

use std::io;

use bytesize::ByteSize;
use thiserror::Error;
use yansi::Paint;

use crate::duplicates::{DuplicateGroup, GroupSummary};

/// Errors that can occur during text output generation.
#[derive(Debug, Error)]
pub enum TextOutputError {
    /// I/O error during writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Text output formatter.
pub struct TextOutput<'a> {
    groups: &'a [DuplicateGroup],
    summary: &'a GroupSummary,
}

impl<'a> TextOutput<'a> {
    /// Create a new text output formatter.
    #[must_use]
    pub fn new(groups: &'a [DuplicateGroup], summary: &'a GroupSummary) -> Self {
        Self { groups, summary }
    }

    /// Write the text output to the given writer.
    ///
    /// # Arguments
    ///
    /// * `writer` - The writer to output to
    ///
    /// # Errors
    ///
    /// Returns `TextOutputError` if writing fails.
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> Result<(), TextOutputError> {
        if self.groups.is_empty() {
            writeln!(writer, "{}", "No duplicate files found.".green())?;
        } else {
            for (idx, group) in self.groups.iter().enumerate() {
                let heading = format!("Group {}", idx + 1);
                writeln!(
                    writer,
                    "{} (fingerprint {}, {} each):",
                    heading.cyan().bold(),
                    group.fingerprint,
                    ByteSize::b(group.size)
                )?;
                for path in &group.paths {
                    writeln!(writer, "  {}", path.display())?;
                }
                writeln!(writer)?;
            }
        }

        writeln!(writer, "{}", "Summary".bold())?;
        writeln!(writer, "  Files scanned:      {}", self.summary.total_files)?;
        writeln!(
            writer,
            "  Total size:         {}",
            self.summary.total_size_display()
        )?;
        writeln!(writer, "  Fingerprint buckets: {}", self.summary.buckets)?;
        writeln!(
            writer,
            "  Collision buckets:   {}",
            self.summary.collision_buckets
        )?;
        writeln!(
            writer,
            "  Duplicate groups:   {}",
            self.summary.duplicate_groups
        )?;
        writeln!(
            writer,
            "  Duplicate files:    {}",
            self.summary.duplicate_files
        )?;
        writeln!(
            writer,
            "  Reclaimable space:  {} ({:.1}%)",
            self.summary.reclaimable_display().yellow(),
            self.summary.wasted_percentage()
        )?;
        writeln!(
            writer,
            "  Scan time:          {:.2}s",
            self.summary.scan_duration.as_secs_f64()
        )?;

        Ok(())
    }

    /// Generate text output as a string.
    ///
    /// # Errors
    ///
    /// Returns `TextOutputError` if writing fails.
    pub fn to_string(&self) -> Result<String, TextOutputError> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).to_string())
    }
}
