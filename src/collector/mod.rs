//! File collection pipeline.
//!
//! One [`FileCollector`] drives a whole collection run: it expands each
//! declared file set, normalizes every matched path into a stable
//! manifest name, checksums the content, scans source files for
//! embedded license tags, and assembles the resulting records. The run
//! is sequential by design: the ID generator and the extracted-license
//! registry are shared mutable state, and record order must not depend
//! on filesystem enumeration quirks.
//!
//! Collection is fail-fast. The first checksum, parse, or policy
//! failure aborts the run with a `Collection` error naming the file;
//! a manifest built from partially collected files is worse than none.

pub mod classify;
pub mod fileset;
pub mod metadata;

pub use classify::{classify_extension, extension_of, FileType};
pub use fileset::{FileSet, MatchedFile};
pub use metadata::{parse_range, resolve_metadata, FileMetadata, PathOverrides, SnippetSpec};

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::checksum::{self, ChecksumAlgorithm};
use crate::idgen::IdGenerator;
use crate::license::{
    extract_expressions, parse_expression, valid_license_ref, LicenseExpression, LicenseRegistry,
    UnknownRefPolicy, MAXIMUM_SOURCE_FILE_LENGTH,
};
use crate::model::{FileRecord, Relationship, SnippetRecord};
use crate::paths;
use crate::verification::{compute_verification_code, VerificationCode};
use crate::{ParseError, TesseraError, TesseraResult};

/// Settings for a collection run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectorConfig {
    /// Digests computed per file. SHA-1 is appended when missing
    /// because the package verification code is defined over it.
    pub checksum_algorithms: Vec<ChecksumAlgorithm>,
    /// What to do with `LicenseRef-*` identifiers that have no
    /// registry entry when scanned out of file content.
    pub unknown_license_refs: UnknownRefPolicy,
    /// Source files at or beyond this many bytes are not scanned for
    /// license tags.
    pub max_parse_len: u64,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        CollectorConfig {
            checksum_algorithms: vec![ChecksumAlgorithm::Sha1, ChecksumAlgorithm::Sha256],
            unknown_license_refs: UnknownRefPolicy::default(),
            max_parse_len: MAXIMUM_SOURCE_FILE_LENGTH,
        }
    }
}

/// Inputs for one collection run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectRequest {
    pub file_sets: Vec<FileSet>,
    /// Tree root that stable names are computed against for file sets
    /// without an output prefix.
    pub project_root: PathBuf,
    /// Metadata applied where no override matches.
    pub defaults: FileMetadata,
    /// Per-path metadata overrides keyed by stable name.
    pub overrides: PathOverrides,
    /// Reference to the package every collected file belongs to.
    pub package_ref: String,
    /// Relationship tag attached to every file record, e.g.
    /// `"GENERATES"`. Opaque to the collector.
    pub relationship_type: String,
}

/// Collects files, snippets, and license information for one package.
#[derive(Debug)]
pub struct FileCollector {
    config: CollectorConfig,
    ids: IdGenerator,
    registry: LicenseRegistry,
    files: BTreeMap<String, FileRecord>,
    snippets: Vec<SnippetRecord>,
    licenses_from_files: BTreeSet<LicenseExpression>,
}

impl FileCollector {
    pub fn new(config: CollectorConfig) -> Self {
        Self::with_state(config, IdGenerator::new(), LicenseRegistry::new())
    }

    /// Run with caller-provided generator and registry state, so the
    /// caller can pre-register extracted licenses and keep minting IDs
    /// after collection.
    pub fn with_state(
        mut config: CollectorConfig,
        ids: IdGenerator,
        registry: LicenseRegistry,
    ) -> Self {
        if !config
            .checksum_algorithms
            .contains(&ChecksumAlgorithm::Sha1)
        {
            config
                .checksum_algorithms
                .insert(0, ChecksumAlgorithm::Sha1);
        }
        FileCollector {
            config,
            ids,
            registry,
            files: BTreeMap::new(),
            snippets: Vec::new(),
            licenses_from_files: BTreeSet::new(),
        }
    }

    /// Collect every file set in the request.
    ///
    /// Fails on the first error; no record remains for the file that
    /// failed. Repeated calls accumulate into the same result set, and
    /// a second file resolving to an already-collected stable name is
    /// a configuration error rather than a silent deduplication.
    pub fn collect(&mut self, request: &CollectRequest) -> TesseraResult<()> {
        let root = request.project_root.to_string_lossy();
        tracing::debug!(
            "collecting {} file sets under {}",
            request.file_sets.len(),
            request.project_root.display()
        );
        for file_set in &request.file_sets {
            for matched in file_set.expand()? {
                let stable_name = match &file_set.output_prefix {
                    Some(prefix) => paths::stable_name(&format!(
                        "{}/{}",
                        prefix.trim_end_matches('/'),
                        matched.relative
                    )),
                    None => paths::normalize(&matched.path.to_string_lossy(), &root)?,
                };
                if self.files.contains_key(&stable_name) {
                    return Err(TesseraError::Configuration(format!(
                        "duplicate collection target: {stable_name}"
                    )));
                }
                let info = resolve_metadata(&request.overrides, &request.defaults, &stable_name);
                self.collect_file(&matched.path, stable_name, info, request)?;
            }
        }
        tracing::debug!(
            "collected {} files and {} snippets",
            self.files.len(),
            self.snippets.len()
        );
        Ok(())
    }

    fn collect_file(
        &mut self,
        path: &Path,
        stable_name: String,
        info: &FileMetadata,
        request: &CollectRequest,
    ) -> TesseraResult<()> {
        let (record, snippet_records) = self
            .build_record(path, &stable_name, info, request)
            .map_err(|e| e.in_file(&stable_name))?;
        for expression in &record.license_info_from_files {
            self.licenses_from_files.insert(expression.clone());
        }
        self.snippets.extend(snippet_records);
        self.files.insert(stable_name, record);
        Ok(())
    }

    fn build_record(
        &mut self,
        path: &Path,
        stable_name: &str,
        info: &FileMetadata,
        request: &CollectRequest,
    ) -> TesseraResult<(FileRecord, Vec<SnippetRecord>)> {
        let bytes = fs::read(path)?;
        let checksums = checksum::checksum(&bytes, &self.config.checksum_algorithms);

        let file_name = stable_name.rsplit('/').next().unwrap_or(stable_name);
        let file_types = classify::file_types_for(file_name);
        let source = classify::is_source(&file_types);

        let expressions = if source && (bytes.len() as u64) < self.config.max_parse_len {
            extract_expressions(&String::from_utf8_lossy(&bytes))?
        } else {
            Vec::new()
        };
        for expression in &expressions {
            self.admit_refs(expression)?;
        }

        let (concluded, from_files, license_comment) = match expressions.len() {
            0 => {
                let concluded = self.metadata_license(info.concluded_license.as_deref())?;
                let declared = self.metadata_license(info.declared_license.as_deref())?;
                (concluded, vec![declared], info.license_comment.clone())
            }
            // The pair convention: the first tag is the declared
            // license; a second tag, when it is the only other one,
            // is the concluded license.
            n => {
                let concluded = if n == 2 {
                    expressions[1].clone()
                } else {
                    expressions[0].clone()
                };
                let from_files = vec![expressions[0].clone()];
                let rendered: Vec<String> =
                    expressions.iter().map(|e| e.to_string()).collect();
                let mut comment = info.license_comment.clone().unwrap_or_default();
                if !comment.is_empty() {
                    comment.push_str(";  ");
                }
                comment.push_str("This file contains SPDX-License-Identifiers for ");
                comment.push_str(&rendered.join(", "));
                (concluded, from_files, Some(comment))
            }
        };

        let mut snippet_records = Vec::new();
        if source {
            for spec in &info.snippets {
                snippet_records.push(self.build_snippet(spec, stable_name)?);
            }
        }

        let record = FileRecord {
            name: stable_name.to_string(),
            checksums,
            concluded_license: concluded,
            license_info_from_files: from_files,
            copyright_text: info
                .copyright_text
                .clone()
                .unwrap_or_else(|| "NOASSERTION".to_string()),
            comment: info.comment.clone(),
            license_comment,
            notice_text: info.notice_text.clone(),
            contributors: info.contributors.clone(),
            file_types,
            relationship: Relationship {
                relationship_type: request.relationship_type.clone(),
                related_element: request.package_ref.clone(),
            },
            snippet_ids: snippet_records.iter().map(|s| s.id.clone()).collect(),
        };
        Ok((record, snippet_records))
    }

    fn build_snippet(
        &mut self,
        spec: &SnippetSpec,
        file_name: &str,
    ) -> TesseraResult<SnippetRecord> {
        let seed = format!("{file_name}/{}", spec.name.as_deref().unwrap_or("snippet"));
        let id = self.ids.generate(&seed);
        let byte_range = parse_range(&spec.byte_range)?;
        let line_range = spec.line_range.as_deref().map(parse_range).transpose()?;
        let concluded = self.metadata_license(spec.concluded_license.as_deref())?;
        let declared = self.metadata_license(spec.declared_license.as_deref())?;

        let mut comment = spec.comment.clone().unwrap_or_default();
        if let Some(license_comment) = spec.license_comment.as_deref() {
            if !license_comment.trim().is_empty() {
                comment.push_str("; License: ");
                comment.push_str(license_comment);
            }
        }

        Ok(SnippetRecord {
            id,
            name: spec.name.clone(),
            file_name: file_name.to_string(),
            byte_range,
            line_range,
            concluded_license: concluded,
            declared_license: declared,
            copyright_text: spec
                .copyright_text
                .clone()
                .unwrap_or_else(|| "NOASSERTION".to_string()),
            comment: if comment.is_empty() { None } else { Some(comment) },
        })
    }

    /// Parse a configured license expression string. Absent or blank
    /// values mean no assertion.
    fn metadata_license(&mut self, source: Option<&str>) -> TesseraResult<LicenseExpression> {
        let Some(source) = source.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(LicenseExpression::NoAssertion);
        };
        let expression = parse_expression(source)?;
        self.admit_refs(&expression)?;
        Ok(expression)
    }

    /// Apply the unknown-reference policy to every `LicenseRef-*` in
    /// the expression.
    fn admit_refs(&mut self, expression: &LicenseExpression) -> TesseraResult<()> {
        for license_ref in expression.license_refs() {
            if self.registry.contains(license_ref) {
                continue;
            }
            if !valid_license_ref(license_ref) {
                return Err(ParseError::InvalidExpression(format!(
                    "malformed license reference: {license_ref}"
                ))
                .into());
            }
            match self.config.unknown_license_refs {
                UnknownRefPolicy::ImplicitRegister => {
                    self.registry.register_implicit(license_ref)
                }
                UnknownRefPolicy::Reject => {
                    return Err(ParseError::InvalidExpression(format!(
                        "unregistered license reference: {license_ref}"
                    ))
                    .into());
                }
            }
        }
        Ok(())
    }

    // ─── Results ────────────────────────────────────────────────────

    /// Collected files in stable-name order.
    pub fn files(&self) -> impl Iterator<Item = &FileRecord> {
        self.files.values()
    }

    pub fn file(&self, stable_name: &str) -> Option<&FileRecord> {
        self.files.get(stable_name)
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn snippets(&self) -> &[SnippetRecord] {
        &self.snippets
    }

    /// Distinct licenses seen across collected file contents.
    pub fn license_info_from_files(&self) -> impl Iterator<Item = &LicenseExpression> {
        self.licenses_from_files.iter()
    }

    pub fn registry(&self) -> &LicenseRegistry {
        &self.registry
    }

    /// ID source shared with the caller for entities it registers in
    /// its own model.
    pub fn ids_mut(&mut self) -> &mut IdGenerator {
        &mut self.ids
    }

    /// Package verification code over every collected file. When the
    /// manifest's own output file was collected, pass its stable name
    /// so it is dropped from the computation and recorded as excluded.
    pub fn verification_code(
        &self,
        manifest_name: Option<&str>,
    ) -> TesseraResult<VerificationCode> {
        let mut excluded = BTreeSet::new();
        if let Some(name) = manifest_name {
            if self.files.contains_key(name) {
                excluded.insert(name.to_string());
            }
        }
        compute_verification_code(self.files.values(), &excluded)
    }

    /// Tear the run down into its collected pieces.
    pub fn into_parts(
        self,
    ) -> (
        Vec<FileRecord>,
        Vec<SnippetRecord>,
        LicenseRegistry,
        IdGenerator,
    ) {
        (
            self.files.into_values().collect(),
            self.snippets,
            self.registry,
            self.ids,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn request_for(dir: &TempDir) -> CollectRequest {
        CollectRequest {
            file_sets: vec![FileSet::new(dir.path())],
            project_root: dir.path().to_path_buf(),
            defaults: FileMetadata {
                concluded_license: Some("Apache-2.0".to_string()),
                declared_license: Some("APSL-1.1".to_string()),
                copyright_text: Some("Copyright (c) example".to_string()),
                ..FileMetadata::default()
            },
            overrides: PathOverrides::new(),
            package_ref: "SPDXRef-Package".to_string(),
            relationship_type: "GENERATES".to_string(),
        }
    }

    #[test]
    fn untagged_source_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("plain.c"), "int main() { return 0; }").unwrap();
        let request = request_for(&dir);
        let mut collector = FileCollector::new(CollectorConfig::default());
        collector.collect(&request).unwrap();

        let record = collector.file("./plain.c").unwrap();
        assert_eq!(record.concluded_license.to_string(), "Apache-2.0");
        assert_eq!(record.license_info_from_files.len(), 1);
        assert_eq!(record.license_info_from_files[0].to_string(), "APSL-1.1");
        assert!(record.license_comment.is_none());
        assert_eq!(record.relationship.relationship_type, "GENERATES");
        assert_eq!(record.relationship.related_element, "SPDXRef-Package");
    }

    #[test]
    fn single_tag_is_declared_and_concluded() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("tagged.c"),
            "// SPDX-License-Identifier: MIT\nint main() {}\n",
        )
        .unwrap();
        let mut collector = FileCollector::new(CollectorConfig::default());
        collector.collect(&request_for(&dir)).unwrap();

        let record = collector.file("./tagged.c").unwrap();
        assert_eq!(record.concluded_license.to_string(), "MIT");
        assert_eq!(record.license_info_from_files[0].to_string(), "MIT");
        let comment = record.license_comment.as_deref().unwrap();
        assert!(comment.contains("This file contains SPDX-License-Identifiers for MIT"));
    }

    #[test]
    fn two_tags_form_a_declared_concluded_pair() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("pair.c"),
            "/**\n  *SPDX-License-Identifier: MIT\n  *\n  *SPDX-License-Identifier: Apache-2.0\n**/\n",
        )
        .unwrap();
        let mut collector = FileCollector::new(CollectorConfig::default());
        collector.collect(&request_for(&dir)).unwrap();

        let record = collector.file("./pair.c").unwrap();
        assert_eq!(record.license_info_from_files[0].to_string(), "MIT");
        assert_eq!(record.concluded_license.to_string(), "Apache-2.0");
        let comment = record.license_comment.as_deref().unwrap();
        assert!(comment.contains("MIT, Apache-2.0"));
    }

    #[test]
    fn extra_tags_beyond_two_are_ignored_for_record_fields() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("many.c"),
            "// SPDX-License-Identifier: MIT\n// SPDX-License-Identifier: Apache-2.0\n// SPDX-License-Identifier: BSD-2-Clause\n",
        )
        .unwrap();
        let mut collector = FileCollector::new(CollectorConfig::default());
        collector.collect(&request_for(&dir)).unwrap();

        let record = collector.file("./many.c").unwrap();
        assert_eq!(record.concluded_license.to_string(), "MIT");
        assert_eq!(record.license_info_from_files[0].to_string(), "MIT");
        let comment = record.license_comment.as_deref().unwrap();
        assert!(comment.contains("MIT, Apache-2.0, BSD-2-Clause"));
    }

    #[test]
    fn non_source_files_are_never_scanned() {
        let dir = TempDir::new().unwrap();
        // The tag inside the .zip is malformed, but non-source files
        // are not scanned at all.
        fs::write(
            dir.path().join("archive.zip"),
            "SPDX-License-Identifier: NOT ( VALID\n",
        )
        .unwrap();
        let mut collector = FileCollector::new(CollectorConfig::default());
        collector.collect(&request_for(&dir)).unwrap();

        let record = collector.file("./archive.zip").unwrap();
        assert_eq!(record.concluded_license.to_string(), "Apache-2.0");
        assert_eq!(record.file_types, vec![FileType::Archive]);
    }

    #[test]
    fn oversized_source_is_not_scanned() {
        let dir = TempDir::new().unwrap();
        let mut content = String::from("// SPDX-License-Identifier: MIT\n");
        content.push_str(&"x".repeat(64));
        fs::write(dir.path().join("big.c"), &content).unwrap();

        let config = CollectorConfig {
            max_parse_len: 16,
            ..CollectorConfig::default()
        };
        let mut collector = FileCollector::new(config);
        collector.collect(&request_for(&dir)).unwrap();

        let record = collector.file("./big.c").unwrap();
        assert_eq!(record.concluded_license.to_string(), "Apache-2.0");
    }

    #[test]
    fn malformed_tag_aborts_with_the_file_named() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("broken.c"),
            "// SPDX-License-Identifier: ((MIT\n",
        )
        .unwrap();
        let mut collector = FileCollector::new(CollectorConfig::default());
        let err = collector.collect(&request_for(&dir)).unwrap_err();
        match err {
            TesseraError::Collection { file, source } => {
                assert_eq!(file, "./broken.c");
                assert!(matches!(
                    *source,
                    TesseraError::Parse(ParseError::UnbalancedParens(_))
                ));
            }
            other => panic!("expected collection error, got {other:?}"),
        }
        assert_eq!(collector.file_count(), 0);
    }

    #[test]
    fn snippets_attach_only_to_source_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("code.c"), "int x;\n").unwrap();
        fs::write(dir.path().join("blob.bin"), [0u8, 1, 2]).unwrap();

        let mut request = request_for(&dir);
        request.defaults.snippets = vec![SnippetSpec {
            name: Some("embedded".to_string()),
            concluded_license: Some("BSD-2-Clause".to_string()),
            declared_license: Some("BSD-2-Clause".to_string()),
            byte_range: "12:5234".to_string(),
            line_range: Some("88:99".to_string()),
            ..SnippetSpec::default()
        }];
        let mut collector = FileCollector::new(CollectorConfig::default());
        collector.collect(&request).unwrap();

        assert_eq!(collector.snippets().len(), 1);
        let snippet = &collector.snippets()[0];
        assert_eq!(snippet.file_name, "./code.c");
        assert_eq!(snippet.byte_range, (12, 5234));
        assert_eq!(snippet.line_range, Some((88, 99)));
        assert!(snippet.id.starts_with("SPDXRef-"));
        assert_eq!(
            collector.file("./code.c").unwrap().snippet_ids,
            vec![snippet.id.clone()]
        );
        assert!(collector.file("./blob.bin").unwrap().snippet_ids.is_empty());
    }

    #[test]
    fn malformed_snippet_range_is_a_configuration_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("code.c"), "int x;\n").unwrap();
        let mut request = request_for(&dir);
        request.defaults.snippets = vec![SnippetSpec {
            byte_range: "12-5234".to_string(),
            ..SnippetSpec::default()
        }];
        let mut collector = FileCollector::new(CollectorConfig::default());
        let err = collector.collect(&request).unwrap_err();
        match err {
            TesseraError::Collection { source, .. } => {
                assert!(matches!(*source, TesseraError::Configuration(_)));
            }
            other => panic!("expected collection error, got {other:?}"),
        }
    }

    #[test]
    fn scanned_license_refs_register_implicitly() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("ref.c"),
            "// SPDX-License-Identifier: LicenseRef-mine\n",
        )
        .unwrap();
        let mut collector = FileCollector::new(CollectorConfig::default());
        collector.collect(&request_for(&dir)).unwrap();
        assert!(collector.registry().contains("LicenseRef-mine"));
        assert_eq!(
            collector.registry().get("LicenseRef-mine").unwrap().extracted_text,
            ""
        );
    }

    #[test]
    fn reject_policy_fails_on_unregistered_refs() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("ref.c"),
            "// SPDX-License-Identifier: LicenseRef-mine\n",
        )
        .unwrap();
        let config = CollectorConfig {
            unknown_license_refs: UnknownRefPolicy::Reject,
            ..CollectorConfig::default()
        };
        let mut collector = FileCollector::new(config);
        let err = collector.collect(&request_for(&dir)).unwrap_err();
        match err {
            TesseraError::Collection { file, source } => {
                assert_eq!(file, "./ref.c");
                assert!(matches!(
                    *source,
                    TesseraError::Parse(ParseError::InvalidExpression(_))
                ));
            }
            other => panic!("expected collection error, got {other:?}"),
        }
    }

    #[test]
    fn preregistered_refs_satisfy_reject_policy() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("ref.c"),
            "// SPDX-License-Identifier: LicenseRef-mine\n",
        )
        .unwrap();
        let config = CollectorConfig {
            unknown_license_refs: UnknownRefPolicy::Reject,
            ..CollectorConfig::default()
        };
        let mut registry = LicenseRegistry::new();
        registry
            .register(crate::license::ExtractedLicenseInfo::new(
                "LicenseRef-mine",
                "my license text",
            ))
            .unwrap();
        let mut collector = FileCollector::with_state(config, IdGenerator::new(), registry);
        collector.collect(&request_for(&dir)).unwrap();
        assert_eq!(
            collector.registry().get("LicenseRef-mine").unwrap().extracted_text,
            "my license text"
        );
    }

    #[test]
    fn duplicate_targets_are_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("once.c"), "int x;\n").unwrap();
        let mut request = request_for(&dir);
        request.file_sets.push(FileSet::new(dir.path()));
        let mut collector = FileCollector::new(CollectorConfig::default());
        let err = collector.collect(&request).unwrap_err();
        assert!(matches!(err, TesseraError::Configuration(_)));
    }

    #[test]
    fn output_prefix_renames_without_touching_the_root() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/lib.c"), "int x;\n").unwrap();

        let mut request = request_for(&dir);
        request.file_sets = vec![FileSet {
            directory: dir.path().join("sub"),
            output_prefix: Some("generated/".to_string()),
            includes: Vec::new(),
            excludes: Vec::new(),
        }];
        let mut collector = FileCollector::new(CollectorConfig::default());
        collector.collect(&request).unwrap();
        assert!(collector.file("./generated/lib.c").is_some());
    }

    #[test]
    fn file_set_outside_the_root_without_prefix_fails() {
        let project = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        fs::write(elsewhere.path().join("stray.c"), "int x;\n").unwrap();

        let mut request = request_for(&project);
        request.file_sets = vec![FileSet::new(elsewhere.path())];
        let mut collector = FileCollector::new(CollectorConfig::default());
        let err = collector.collect(&request).unwrap_err();
        assert!(matches!(err, TesseraError::PathOutsideRoot(_)));
    }

    #[test]
    fn sha1_is_always_computed() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("data.txt"), "content").unwrap();
        let config = CollectorConfig {
            checksum_algorithms: vec![ChecksumAlgorithm::Sha256],
            ..CollectorConfig::default()
        };
        let mut collector = FileCollector::new(config);
        collector.collect(&request_for(&dir)).unwrap();
        let record = collector.file("./data.txt").unwrap();
        assert!(record.checksum(ChecksumAlgorithm::Sha1).is_some());
        assert!(record.checksum(ChecksumAlgorithm::Sha256).is_some());
    }
}
