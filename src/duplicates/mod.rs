//! Duplicate detection module.
//!
//! This module provides functionality for:
//! - Fingerprint bucketing of file contents
//! - Exact content comparison within buckets
//! - Duplicate group management and summary statistics

pub mod grouper;
pub mod groups;

pub use grouper::{Grouper, GrouperConfig, GrouperError, GroupSummary};
pub use groups::{group_records, Bucket, ContentCluster, DuplicateGroup, GroupingStats};
