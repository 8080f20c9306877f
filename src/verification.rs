//! Package verification code.
//!
//! The code is a digest over digests: every non-excluded file
//! contributes its SHA-1 checksum as a lowercase hex string, the
//! strings are sorted lexicographically, concatenated with no
//! separator, and the SHA-1 of that concatenation is the code. Sorting
//! makes the result independent of collection order, so two runs over
//! the same content always agree no matter how the filesystem
//! enumerated it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

use crate::checksum::ChecksumAlgorithm;
use crate::model::FileRecord;
use crate::{TesseraError, TesseraResult};

/// A computed package verification code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode {
    /// Lowercase SHA-1 hex over the sorted per-file digests.
    pub value: String,
    /// Stable names that were skipped, in sorted order.
    pub excluded_file_names: Vec<String>,
}

/// Compute the verification code over `files`, skipping any whose
/// stable name appears in `excluded`.
///
/// Every non-excluded record must carry a SHA-1 checksum; a record
/// without one means the run was configured without the digest the
/// code is defined over, which is a configuration error.
pub fn compute_verification_code<'a, I>(
    files: I,
    excluded: &BTreeSet<String>,
) -> TesseraResult<VerificationCode>
where
    I: IntoIterator<Item = &'a FileRecord>,
{
    let mut digests = Vec::new();
    let mut excluded_names = Vec::new();
    for record in files {
        if excluded.contains(&record.name) {
            excluded_names.push(record.name.clone());
            continue;
        }
        let sha1 = record.checksum(ChecksumAlgorithm::Sha1).ok_or_else(|| {
            TesseraError::Configuration(format!(
                "no SHA-1 checksum recorded for {}",
                record.name
            ))
        })?;
        digests.push(sha1.to_string());
    }
    digests.sort();

    let mut hasher = Sha1::new();
    for digest in &digests {
        hasher.update(digest.as_bytes());
    }
    excluded_names.sort();
    Ok(VerificationCode {
        value: hex::encode(hasher.finalize()),
        excluded_file_names: excluded_names,
    })
}
