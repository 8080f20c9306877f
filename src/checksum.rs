//! Checksum engine.
//!
//! Digests file content under one or more algorithms in a single pass
//! over the bytes and renders every digest in the same convention:
//! lowercase hex, no separators. Digests are pure functions of the
//! input bytes, which is what lets the package verification code be
//! computed from them deterministically.

use std::fmt;
use std::fs;
use std::path::Path;

use md5::Md5;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

use crate::{TesseraError, TesseraResult};

/// Supported digest algorithms.
///
/// SHA-1 is mandatory for any collection run because the package
/// verification code is defined over SHA-1 digests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChecksumAlgorithm {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Md5,
}

impl ChecksumAlgorithm {
    /// Parse a configuration token such as `"SHA1"` or `"sha-256"`.
    pub fn from_token(token: &str) -> TesseraResult<Self> {
        match token.trim().to_ascii_uppercase().as_str() {
            "SHA1" | "SHA-1" => Ok(ChecksumAlgorithm::Sha1),
            "SHA224" | "SHA-224" => Ok(ChecksumAlgorithm::Sha224),
            "SHA256" | "SHA-256" => Ok(ChecksumAlgorithm::Sha256),
            "SHA384" | "SHA-384" => Ok(ChecksumAlgorithm::Sha384),
            "SHA512" | "SHA-512" => Ok(ChecksumAlgorithm::Sha512),
            "MD5" => Ok(ChecksumAlgorithm::Md5),
            other => Err(TesseraError::Configuration(format!(
                "unknown checksum algorithm: {other}"
            ))),
        }
    }

    /// Canonical algorithm name used in manifests.
    pub fn name(&self) -> &'static str {
        match self {
            ChecksumAlgorithm::Sha1 => "SHA-1",
            ChecksumAlgorithm::Sha224 => "SHA-224",
            ChecksumAlgorithm::Sha256 => "SHA-256",
            ChecksumAlgorithm::Sha384 => "SHA-384",
            ChecksumAlgorithm::Sha512 => "SHA-512",
            ChecksumAlgorithm::Md5 => "MD5",
        }
    }
}

impl fmt::Display for ChecksumAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Render bytes as lowercase hex with no separators.
pub fn hex_digest(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Digest `bytes` under every requested algorithm.
///
/// The order of the result follows the order of `algorithms`. An empty
/// request yields an empty result.
pub fn checksum(bytes: &[u8], algorithms: &[ChecksumAlgorithm]) -> Vec<(ChecksumAlgorithm, String)> {
    algorithms
        .iter()
        .map(|algorithm| (*algorithm, digest_one(*algorithm, bytes)))
        .collect()
}

/// Read a file once and digest its content under every requested
/// algorithm.
pub fn checksum_file(
    path: &Path,
    algorithms: &[ChecksumAlgorithm],
) -> TesseraResult<Vec<(ChecksumAlgorithm, String)>> {
    let bytes = fs::read(path)?;
    Ok(checksum(&bytes, algorithms))
}

fn digest_one(algorithm: ChecksumAlgorithm, bytes: &[u8]) -> String {
    match algorithm {
        ChecksumAlgorithm::Sha1 => hex::encode(Sha1::digest(bytes)),
        ChecksumAlgorithm::Sha224 => hex::encode(Sha224::digest(bytes)),
        ChecksumAlgorithm::Sha256 => hex::encode(Sha256::digest(bytes)),
        ChecksumAlgorithm::Sha384 => hex::encode(Sha384::digest(bytes)),
        ChecksumAlgorithm::Sha512 => hex::encode(Sha512::digest(bytes)),
        ChecksumAlgorithm::Md5 => hex::encode(Md5::digest(bytes)),
    }
}
