//! Weak content fingerprinting and single-shot file reading.
//!
//! # Overview
//!
//! The fingerprint used throughout this crate is the sum of all byte values
//! modulo 100, a deliberately weak signature with only 100 possible values.
//! It exists to narrow comparison candidates cheaply; it is never proof of
//! equality. Any two files whose byte sums differ by a multiple of 100
//! collide, and the grouping layer is built to stay correct under exactly
//! that collision rate.
//!
//! Do not swap this for a cryptographic hash: the crate's correctness
//! guarantees are exercised by the collisions this function produces, and
//! exact byte comparison is the only equality authority.
//!
//! # Example
//!
//! ```
//! use dupesieve::scanner::fingerprint_bytes;
//!
//! // "foo" = 102 + 111 + 111 = 324, so the fingerprint is 24
//! assert_eq!(fingerprint_bytes(b"foo"), 24);
//! assert_eq!(fingerprint_bytes(b""), 0);
//! ```

use std::fs;
use std::path::Path;

use super::{FileRecord, ReadError};

/// Number of distinct fingerprint values.
pub const FINGERPRINT_MODULUS: u64 = 100;

/// A weak content fingerprint in `[0, 100)`.
///
/// Fingerprint equality narrows the candidate set; only byte-for-byte
/// content comparison establishes that two files are duplicates.
pub type Fingerprint = u8;

/// Compute the fingerprint of a byte slice.
///
/// Sums every byte value and reduces modulo [`FINGERPRINT_MODULUS`].
/// Deterministic and pure. The running sum is reduced as it accumulates,
/// so inputs of any length are handled without overflow.
///
/// # Example
///
/// ```
/// use dupesieve::scanner::fingerprint_bytes;
///
/// // Distinct contents frequently share a fingerprint:
/// assert_eq!(fingerprint_bytes(&[24]), fingerprint_bytes(&[124]));
/// ```
#[must_use]
pub fn fingerprint_bytes(bytes: &[u8]) -> Fingerprint {
    let sum = bytes
        .iter()
        .fold(0u64, |acc, &b| (acc + u64::from(b)) % FINGERPRINT_MODULUS);
    sum as Fingerprint
}

/// Read a file's full content once, producing a [`FileRecord`].
///
/// The content is owned by the record; nothing is re-read later in the
/// pipeline. An unreadable path is an error that callers treat as a
/// fatal input problem, not a recoverable data condition.
///
/// # Errors
///
/// Returns [`ReadError::NotFound`], [`ReadError::PermissionDenied`], or
/// [`ReadError::Io`] depending on the underlying failure.
pub fn read_record(path: &Path) -> Result<FileRecord, ReadError> {
    use std::io::ErrorKind;

    match fs::read(path) {
        Ok(content) => {
            log::trace!("Read {} ({} bytes)", path.display(), content.len());
            Ok(FileRecord::new(path.to_path_buf(), content))
        }
        Err(e) => match e.kind() {
            ErrorKind::NotFound => {
                log::warn!("File not found: {}", path.display());
                Err(ReadError::NotFound(path.to_path_buf()))
            }
            ErrorKind::PermissionDenied => {
                log::warn!("Permission denied: {}", path.display());
                Err(ReadError::PermissionDenied(path.to_path_buf()))
            }
            _ => {
                log::warn!("I/O error for {}: {}", path.display(), e);
                Err(ReadError::Io {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        },
    }
}
