//! File set expansion.
//!
//! A file set declares a root directory plus include and exclude glob
//! patterns, and optionally a prefix under which its files appear in
//! the manifest. Expansion walks the directory once in sorted order, so
//! repeated runs over the same tree enumerate files identically.

use std::path::PathBuf;

use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::{TesseraError, TesseraResult};

/// One declared file tree to collect.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileSet {
    /// Root directory the patterns are evaluated against.
    pub directory: PathBuf,
    /// Manifest prefix for matched files. When absent, files are named
    /// relative to the whole project root instead.
    pub output_prefix: Option<String>,
    /// Include globs, relative to `directory`. Empty includes
    /// everything.
    pub includes: Vec<String>,
    /// Exclude globs, relative to `directory`.
    pub excludes: Vec<String>,
}

/// A file matched by a file set: its on-disk path and its
/// slash-normalized path relative to the file set root.
#[derive(Debug, Clone)]
pub struct MatchedFile {
    pub path: PathBuf,
    pub relative: String,
}

impl FileSet {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        FileSet {
            directory: directory.into(),
            output_prefix: None,
            includes: Vec::new(),
            excludes: Vec::new(),
        }
    }

    /// Walk the root and collect every regular file passing the
    /// include and exclude patterns, in sorted path order.
    pub fn expand(&self) -> TesseraResult<Vec<MatchedFile>> {
        let include = compile_globset(&self.includes)?;
        let exclude = compile_globset(&self.excludes)?;

        let mut matched = Vec::new();
        for entry in WalkDir::new(&self.directory).sort_by_file_name() {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(&self.directory) else {
                continue;
            };
            let relative = relative.to_string_lossy().replace('\\', "/");
            if relative.is_empty() {
                continue;
            }
            if (include.is_empty() || include.is_match(&relative)) && !exclude.is_match(&relative)
            {
                matched.push(MatchedFile {
                    path: entry.into_path(),
                    relative,
                });
            }
        }
        tracing::debug!(
            "file set {}: {} files matched",
            self.directory.display(),
            matched.len()
        );
        Ok(matched)
    }
}

fn compile_globset(patterns: &[String]) -> TesseraResult<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| {
            TesseraError::Configuration(format!("invalid glob pattern {pattern}: {e}"))
        })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| TesseraError::Configuration(format!("failed to build glob set: {e}")))
}
