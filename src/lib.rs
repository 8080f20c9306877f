//! # tessera: SPDX File Collection & Verification Engine
//!
//! Builds the verifiable file-level core of a Software Bill of Materials:
//! walks declared file trees, checksums every collected file, extracts
//! embedded `SPDX-License-Identifier:` expressions from file contents, and
//! derives a deterministic package verification code from the complete
//! checksum set.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        FileCollector                         │
//! │  ┌──────────┐   ┌────────────┐   ┌──────────┐   ┌─────────┐  │
//! │  │ FileSet  │ → │ Path       │ → │ Checksum │ → │ License │  │
//! │  │ globs    │   │ Normalizer │   │ Engine   │   │ Scanner │  │
//! │  └──────────┘   └────────────┘   └──────────┘   └────┬────┘  │
//! │                                                      │       │
//! │  ┌───────────────────────────────────────────────────▼────┐  │
//! │  │  FileRecords + SnippetRecords + LicenseRegistry        │  │
//! │  │       → package VerificationCode (sort, SHA-1)         │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Capabilities
//!
//! - **License Expression Parsing**: recursive-descent AND/OR grammar with
//!   `LicenseRef-*` support, strict rejection of malformed input
//! - **Embedded Tag Scanning**: every `SPDX-License-Identifier:` occurrence
//!   in arbitrary text, multi-line parenthesized expressions included
//! - **File Collection**: include/exclude glob file sets, per-path metadata
//!   overrides, extension-based classification, snippet extraction
//! - **Checksum Engine**: SHA-1/SHA-2 family and MD5, uniform lowercase hex
//! - **Verification Codes**: order-invariant package digest over the
//!   collected file checksums minus a declared exclusion set
//! - **Deterministic IDs**: seed-keyed counters for reproducible element
//!   identifiers across repeated runs

pub mod checksum;
pub mod collector;
pub mod idgen;
pub mod license;
pub mod model;
pub mod paths;
pub mod verification;

// Re-exports for convenience
pub use checksum::ChecksumAlgorithm;
pub use collector::{
    CollectRequest, CollectorConfig, FileCollector, FileMetadata, FileSet, FileType, SnippetSpec,
};
pub use idgen::IdGenerator;
pub use license::{
    extract_expressions, parse_expression, ExtractedLicenseInfo, LicenseExpression,
    LicenseRegistry, UnknownRefPolicy,
};
pub use model::{FileRecord, Relationship, SnippetRecord};
pub use verification::{compute_verification_code, VerificationCode};

use thiserror::Error;

/// The two ways an embedded license expression can be malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unbalanced parentheses in license expression: {0}")]
    UnbalancedParens(String),

    #[error("Invalid license expression: {0}")]
    InvalidExpression(String),
}

#[derive(Error, Debug)]
pub enum TesseraError {
    #[error("Path is outside the declared tree root: {0}")]
    PathOutsideRoot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("License parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Collection failed for {file}: {source}")]
    Collection {
        file: String,
        source: Box<TesseraError>,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl TesseraError {
    /// Attach the stable name of the file under collection when the
    /// failure surfaced.
    pub(crate) fn in_file(self, stable_name: &str) -> Self {
        TesseraError::Collection {
            file: stable_name.to_string(),
            source: Box::new(self),
        }
    }
}

pub type TesseraResult<T> = Result<T, TesseraError>;
