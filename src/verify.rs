//! Expected-results verification harness.
//!
//! # Overview
//!
//! This module checks the duplicate groups produced by a scan against an
//! expected-results fixture. The fixture lists one group per line, with
//! paths relative to the scan root separated by colons:
//!
//! ```text
//! favourites/galleon:vehicles/boats/galleon
//! animals/dogs/dog-1:animals/dogs/dog-2:animals/dogs/dog-3
//! ```
//!
//! Both sides are normalized to a sorted list of unordered path pairs
//! before comparison, so neither group order nor in-group path order
//! affects the outcome. A group of n files expands to n*(n-1)/2 pairs,
//! which also makes partial matches diagnosable pair by pair.

use std::fs;
use std::path::{Path, PathBuf};

use crate::duplicates::DuplicateGroup;

/// Errors from the verification harness.
#[derive(thiserror::Error, Debug)]
pub enum VerifyError {
    /// The fixture file could not be read.
    #[error("Cannot read fixture {path}: {source}")]
    Fixture {
        /// Path of the fixture file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of comparing actual groups against a fixture.
///
/// `matched` is the overall verdict; the `missing` and `unexpected`
/// lists explain a mismatch pair by pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyOutcome {
    /// Whether the normalized pair lists were identical
    pub matched: bool,
    /// Number of pairs the fixture expects
    pub expected_pairs: usize,
    /// Number of pairs the scan produced
    pub actual_pairs: usize,
    /// Pairs the fixture expects that the scan did not produce
    pub missing: Vec<(String, String)>,
    /// Pairs the scan produced that the fixture does not expect
    pub unexpected: Vec<(String, String)>,
}

/// Parse fixture text into expected groups.
///
/// Each line is one group: paths separated by `:`, empty segments
/// skipped, repeated paths within a line collapsed (first occurrence
/// wins). Lines with no paths are dropped.
#[must_use]
pub fn parse_fixture(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .map(|line| {
            let mut group: Vec<String> = Vec::new();
            for token in line.trim().split(':') {
                if !token.is_empty() && !group.iter().any(|t| t == token) {
                    group.push(token.to_string());
                }
            }
            group
        })
        .filter(|group| !group.is_empty())
        .collect()
}

/// Load and parse a fixture file.
///
/// # Errors
///
/// Returns [`VerifyError::Fixture`] if the file cannot be read.
pub fn load_fixture(path: &Path) -> Result<Vec<Vec<String>>, VerifyError> {
    let text = fs::read_to_string(path).map_err(|source| VerifyError::Fixture {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_fixture(&text))
}

/// Reduce a scanned path to its fixture token.
///
/// Strips a leading `./` and then the scan-root prefix, and uses `/`
/// separators regardless of platform so tokens compare equal to fixture
/// entries.
#[must_use]
pub fn normalize_path(path: &Path, root: &Path) -> String {
    let path_str = path.to_string_lossy().replace('\\', "/");
    let root_str = root.to_string_lossy().replace('\\', "/");

    let path_str = strip_prefix(&path_str, "./");
    let root_prefix = format!("{}/", root_str.trim_end_matches('/'));
    let root_prefix = strip_prefix(&root_prefix, "./");

    strip_prefix(path_str, root_prefix).to_string()
}

fn strip_prefix<'a>(s: &'a str, prefix: &str) -> &'a str {
    s.strip_prefix(prefix).unwrap_or(s)
}

/// Expand a group into its unordered pairwise combinations.
///
/// Each pair is sorted internally, so `(a, b)` and `(b, a)` collapse to
/// the same entry no matter how the group was ordered.
fn pairwise(group: &[String]) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for i in 0..group.len() {
        for j in (i + 1)..group.len() {
            let (a, b) = (&group[i], &group[j]);
            if a <= b {
                pairs.push((a.clone(), b.clone()));
            } else {
                pairs.push((b.clone(), a.clone()));
            }
        }
    }
    pairs
}

/// Normalize expected fixture groups into a sorted pair list.
#[must_use]
pub fn normalize_expected(groups: &[Vec<String>]) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = groups.iter().flat_map(|g| pairwise(g)).collect();
    pairs.sort();
    pairs
}

/// Normalize scanned duplicate groups into a sorted pair list.
#[must_use]
pub fn normalize_groups(groups: &[DuplicateGroup], root: &Path) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = groups
        .iter()
        .flat_map(|group| {
            let tokens: Vec<String> = group
                .paths
                .iter()
                .map(|p| normalize_path(p, root))
                .collect();
            pairwise(&tokens)
        })
        .collect();
    pairs.sort();
    pairs
}

/// Compare two normalized pair lists.
///
/// `matched` requires the lists to be identical as sequences. The diff
/// lists hold whatever appears on one side only.
#[must_use]
pub fn compare_pairs(
    expected: Vec<(String, String)>,
    actual: Vec<(String, String)>,
) -> VerifyOutcome {
    let missing: Vec<(String, String)> = expected
        .iter()
        .filter(|pair| actual.binary_search(pair).is_err())
        .cloned()
        .collect();
    let unexpected: Vec<(String, String)> = actual
        .iter()
        .filter(|pair| expected.binary_search(pair).is_err())
        .cloned()
        .collect();

    VerifyOutcome {
        matched: expected == actual,
        expected_pairs: expected.len(),
        actual_pairs: actual.len(),
        missing,
        unexpected,
    }
}

/// Check scanned duplicate groups against an expected-results fixture.
///
/// # Arguments
///
/// * `groups` - Duplicate groups produced by a scan of `root`
/// * `root` - The scan root; fixture paths are relative to it
/// * `fixture` - Path of the expected-results file
///
/// # Errors
///
/// Returns [`VerifyError::Fixture`] if the fixture cannot be read.
pub fn verify_groups(
    groups: &[DuplicateGroup],
    root: &Path,
    fixture: &Path,
) -> Result<VerifyOutcome, VerifyError> {
    let expected_groups = load_fixture(fixture)?;
    let expected = normalize_expected(&expected_groups);
    let actual = normalize_groups(groups, root);

    log::debug!(
        "Verify: {} expected pairs, {} actual pairs",
        expected.len(),
        actual.len()
    );

    let outcome = compare_pairs(expected, actual);

    if outcome.matched {
        log::info!("Verification passed: {} pairs matched", outcome.actual_pairs);
    } else {
        log::warn!(
            "Verification failed: {} missing, {} unexpected",
            outcome.missing.len(),
            outcome.unexpected.len()
        );
    }

    Ok(outcome)
}
