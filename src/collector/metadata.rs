//! Per-file metadata defaults and overrides.
//!
//! Collaborators hand the collector one default [`FileMetadata`] plus a
//! map of per-path overrides keyed by stable name. Resolution walks
//! from most to least specific: an exact file entry wins over the
//! nearest ancestor directory entry, which wins over the default.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{TesseraError, TesseraResult};

static RANGE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+):(\d+)$").unwrap());

/// Metadata applied to collected files.
///
/// License fields hold expression source strings; empty or absent
/// fields fall back to `NOASSERTION` at collection time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileMetadata {
    pub comment: Option<String>,
    pub copyright_text: Option<String>,
    pub license_comment: Option<String>,
    pub notice_text: Option<String>,
    pub contributors: Vec<String>,
    pub concluded_license: Option<String>,
    pub declared_license: Option<String>,
    pub snippets: Vec<SnippetSpec>,
}

/// Configured snippet metadata for a file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnippetSpec {
    pub name: Option<String>,
    pub comment: Option<String>,
    pub concluded_license: Option<String>,
    /// License information declared in the snippet itself.
    pub declared_license: Option<String>,
    pub license_comment: Option<String>,
    pub copyright_text: Option<String>,
    /// Required `start:end` byte offsets, 1-based, end exclusive.
    pub byte_range: String,
    /// Optional `start:end` line numbers, 1-based, end exclusive.
    pub line_range: Option<String>,
}

/// Overrides keyed by stable name: exact file names or directory
/// prefixes, both in `./`-relative form.
pub type PathOverrides = BTreeMap<String, FileMetadata>;

/// Parse a `start:end` range string.
pub fn parse_range(range: &str) -> TesseraResult<(u64, u64)> {
    let trimmed = range.trim();
    let captures = RANGE_PATTERN.captures(trimmed).ok_or_else(|| {
        TesseraError::Configuration(format!("invalid range, expected start:end, found: {range}"))
    })?;
    let start: u64 = captures[1]
        .parse()
        .map_err(|_| TesseraError::Configuration(format!("range start out of bounds: {range}")))?;
    let end: u64 = captures[2]
        .parse()
        .map_err(|_| TesseraError::Configuration(format!("range end out of bounds: {range}")))?;
    Ok((start, end))
}

/// Resolve the metadata applicable to `stable_name`.
pub fn resolve_metadata<'a>(
    overrides: &'a PathOverrides,
    default: &'a FileMetadata,
    stable_name: &str,
) -> &'a FileMetadata {
    if let Some(info) = overrides.get(stable_name) {
        return info;
    }
    let mut prefix = stable_name;
    while let Some(index) = prefix.rfind('/') {
        prefix = &prefix[..index];
        if let Some(info) = overrides.get(prefix) {
            return info;
        }
    }
    default
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_comment(comment: &str) -> FileMetadata {
        FileMetadata {
            comment: Some(comment.to_string()),
            ..FileMetadata::default()
        }
    }

    #[test]
    fn exact_match_beats_directory_match() {
        let mut overrides = PathOverrides::new();
        overrides.insert("./dirA".to_string(), with_comment("directory"));
        overrides.insert("./dirA/file.c".to_string(), with_comment("exact"));
        let default = with_comment("default");

        let resolved = resolve_metadata(&overrides, &default, "./dirA/file.c");
        assert_eq!(resolved.comment.as_deref(), Some("exact"));
    }

    #[test]
    fn directory_match_applies_to_descendants() {
        let mut overrides = PathOverrides::new();
        overrides.insert("./dirA".to_string(), with_comment("directory"));
        let default = with_comment("default");

        let resolved = resolve_metadata(&overrides, &default, "./dirA/nested/deep.c");
        assert_eq!(resolved.comment.as_deref(), Some("directory"));
    }

    #[test]
    fn unmatched_paths_fall_back_to_default() {
        let mut overrides = PathOverrides::new();
        overrides.insert("./dirA".to_string(), with_comment("directory"));
        let default = with_comment("default");

        let resolved = resolve_metadata(&overrides, &default, "./dirB/file.c");
        assert_eq!(resolved.comment.as_deref(), Some("default"));
    }

    #[test]
    fn nearest_ancestor_wins() {
        let mut overrides = PathOverrides::new();
        overrides.insert("./a".to_string(), with_comment("outer"));
        overrides.insert("./a/b".to_string(), with_comment("inner"));
        let default = with_comment("default");

        let resolved = resolve_metadata(&overrides, &default, "./a/b/c/file.c");
        assert_eq!(resolved.comment.as_deref(), Some("inner"));
    }

    #[test]
    fn ranges_parse_and_reject() {
        assert_eq!(parse_range("12:5234").unwrap(), (12, 5234));
        assert_eq!(parse_range(" 88:99 ").unwrap(), (88, 99));
        assert!(parse_range("12-5234").is_err());
        assert!(parse_range("12:").is_err());
        assert!(parse_range("twelve:13").is_err());
        assert!(parse_range("").is_err());
    }
}
