//! Collected manifest records.
//!
//! The records a collection run hands back to its caller: one
//! [`FileRecord`] per collected file, one [`SnippetRecord`] per
//! configured snippet on a source file, and the [`Relationship`] tying
//! each file to its owning package. Records are plain serializable data
//! and immutable once the run completes; the caller embeds them in
//! whatever document model it serializes.

use serde::{Deserialize, Serialize};

use crate::checksum::ChecksumAlgorithm;
use crate::collector::FileType;
use crate::license::LicenseExpression;

/// An opaque link from a collected file to another element, typically
/// the package the collection run belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// Caller-supplied tag such as `"GENERATES"`. Not interpreted.
    pub relationship_type: String,
    /// Reference to the related element, typically a package.
    pub related_element: String,
}

/// One collected file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    /// Stable dot-relative name, unique within a collection run.
    pub name: String,
    /// Digests in requested-algorithm order.
    pub checksums: Vec<(ChecksumAlgorithm, String)>,
    pub concluded_license: LicenseExpression,
    /// Expressions found in the file's own content, or the resolved
    /// default declared license when none were found.
    pub license_info_from_files: Vec<LicenseExpression>,
    pub copyright_text: String,
    pub comment: Option<String>,
    pub license_comment: Option<String>,
    pub notice_text: Option<String>,
    pub contributors: Vec<String>,
    pub file_types: Vec<FileType>,
    pub relationship: Relationship,
    /// IDs of the snippets extracted from this file.
    pub snippet_ids: Vec<String>,
}

impl FileRecord {
    /// Digest for one algorithm, when it was requested for the run.
    pub fn checksum(&self, algorithm: ChecksumAlgorithm) -> Option<&str> {
        self.checksums
            .iter()
            .find(|(candidate, _)| *candidate == algorithm)
            .map(|(_, digest)| digest.as_str())
    }

    pub fn is_source(&self) -> bool {
        self.file_types.contains(&FileType::Source)
    }
}

/// A sub-range of a file carrying its own license metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnippetRecord {
    pub id: String,
    pub name: Option<String>,
    /// Stable name of the owning file. A lookup key, not a borrow.
    pub file_name: String,
    /// 1-based byte offsets, end exclusive.
    pub byte_range: (u64, u64),
    /// 1-based line numbers, end exclusive.
    pub line_range: Option<(u64, u64)>,
    pub concluded_license: LicenseExpression,
    pub declared_license: LicenseExpression,
    pub copyright_text: String,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_lookup_by_algorithm() {
        let record = FileRecord {
            name: "./src/main.c".to_string(),
            checksums: vec![
                (ChecksumAlgorithm::Sha1, "aa".to_string()),
                (ChecksumAlgorithm::Sha256, "bb".to_string()),
            ],
            concluded_license: LicenseExpression::NoAssertion,
            license_info_from_files: vec![LicenseExpression::NoAssertion],
            copyright_text: "NOASSERTION".to_string(),
            comment: None,
            license_comment: None,
            notice_text: None,
            contributors: Vec::new(),
            file_types: vec![FileType::Source],
            relationship: Relationship {
                relationship_type: "GENERATES".to_string(),
                related_element: "SPDXRef-Package".to_string(),
            },
            snippet_ids: Vec::new(),
        };
        assert_eq!(record.checksum(ChecksumAlgorithm::Sha1), Some("aa"));
        assert_eq!(record.checksum(ChecksumAlgorithm::Sha256), Some("bb"));
        assert_eq!(record.checksum(ChecksumAlgorithm::Md5), None);
        assert!(record.is_source());
    }

    #[test]
    fn records_serialize_for_downstream_builders() {
        let record = SnippetRecord {
            id: "SPDXRef-abc-0".to_string(),
            name: Some("snippet".to_string()),
            file_name: "./src/main.c".to_string(),
            byte_range: (12, 5234),
            line_range: Some((88, 99)),
            concluded_license: LicenseExpression::License("Apache-2.0".to_string()),
            declared_license: LicenseExpression::NoAssertion,
            copyright_text: "Copyright (c) example".to_string(),
            comment: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: SnippetRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.byte_range, (12, 5234));
        assert_eq!(back.id, record.id);
    }
}
