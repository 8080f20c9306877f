//! License expression model and extracted-license registry.
//!
//! The expression tree is a closed sum type: simple identifiers, the
//! `NOASSERTION` / `NONE` sentinels, and AND/OR sets. Sets carry at
//! least two members (a single-member set collapses to the member at
//! parse time) and compare order-insensitively, so `MIT AND Apache-2.0`
//! equals `Apache-2.0 AND MIT`. Rendering an expression with `Display`
//! and parsing the result yields a structurally equal tree.
//!
//! `LicenseRef-*` identifiers point at extracted license texts that are
//! not on the SPDX list; those live in a run-scoped [`LicenseRegistry`].

pub mod expression;
pub mod scanner;

pub use expression::parse_expression;
pub use scanner::{extract_expressions, MAXIMUM_SOURCE_FILE_LENGTH};

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{TesseraError, TesseraResult};

/// Identifier prefix marking an extracted (non-listed) license.
pub const LICENSE_REF_PREFIX: &str = "LicenseRef-";

static LICENSE_REF_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^LicenseRef-[A-Za-z0-9.-]+$").unwrap());

// ─── Expression Tree ────────────────────────────────────────────────

/// A parsed boolean license expression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LicenseExpression {
    /// A single identifier: a listed SPDX license ID or `LicenseRef-*`.
    License(String),
    /// No assertion is made about licensing.
    NoAssertion,
    /// There is affirmatively no license.
    None,
    /// All members apply (AND). Always two or more members.
    Conjunctive(Vec<LicenseExpression>),
    /// Any one member may be chosen (OR). Always two or more members.
    Disjunctive(Vec<LicenseExpression>),
}

impl LicenseExpression {
    /// All simple identifiers appearing anywhere in the expression, in
    /// source order.
    pub fn licenses(&self) -> Vec<&str> {
        match self {
            LicenseExpression::License(id) => vec![id.as_str()],
            LicenseExpression::NoAssertion | LicenseExpression::None => Vec::new(),
            LicenseExpression::Conjunctive(members) | LicenseExpression::Disjunctive(members) => {
                members.iter().flat_map(|member| member.licenses()).collect()
            }
        }
    }

    /// All `LicenseRef-*` identifiers appearing in the expression.
    pub fn license_refs(&self) -> Vec<&str> {
        self.licenses()
            .into_iter()
            .filter(|id| is_license_ref(id))
            .collect()
    }

    /// Canonical key: member order is irrelevant for set equality, so
    /// members are sorted before rendering.
    fn canonical(&self) -> String {
        match self {
            LicenseExpression::License(id) => id.clone(),
            LicenseExpression::NoAssertion => "NOASSERTION".to_string(),
            LicenseExpression::None => "NONE".to_string(),
            LicenseExpression::Conjunctive(members) => {
                format!("AND({})", canonical_members(members))
            }
            LicenseExpression::Disjunctive(members) => {
                format!("OR({})", canonical_members(members))
            }
        }
    }
}

fn canonical_members(members: &[LicenseExpression]) -> String {
    let mut keys: Vec<String> = members.iter().map(|member| member.canonical()).collect();
    keys.sort();
    keys.join(",")
}

impl PartialEq for LicenseExpression {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for LicenseExpression {}

impl std::hash::Hash for LicenseExpression {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl PartialOrd for LicenseExpression {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LicenseExpression {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.canonical().cmp(&other.canonical())
    }
}

impl fmt::Display for LicenseExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LicenseExpression::License(id) => f.write_str(id),
            LicenseExpression::NoAssertion => f.write_str("NOASSERTION"),
            LicenseExpression::None => f.write_str("NONE"),
            LicenseExpression::Conjunctive(members) => write_set(f, members, " AND "),
            LicenseExpression::Disjunctive(members) => write_set(f, members, " OR "),
        }
    }
}

fn write_set(
    f: &mut fmt::Formatter<'_>,
    members: &[LicenseExpression],
    separator: &str,
) -> fmt::Result {
    for (index, member) in members.iter().enumerate() {
        if index > 0 {
            f.write_str(separator)?;
        }
        match member {
            LicenseExpression::Conjunctive(_) | LicenseExpression::Disjunctive(_) => {
                write!(f, "({member})")?
            }
            _ => write!(f, "{member}")?,
        }
    }
    Ok(())
}

/// Whether an identifier names an extracted license.
pub fn is_license_ref(id: &str) -> bool {
    id.starts_with(LICENSE_REF_PREFIX)
}

/// Whether an identifier is a well-formed `LicenseRef-<idstring>`.
pub fn valid_license_ref(id: &str) -> bool {
    LICENSE_REF_SHAPE.is_match(id)
}

// ─── Extracted License Registry ─────────────────────────────────────

/// Policy for `LicenseRef-*` identifiers scanned out of file content
/// without a matching registry entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnknownRefPolicy {
    /// Treat the identifier as a forward reference and register it
    /// with empty extracted text.
    #[default]
    ImplicitRegister,
    /// Reject the expression.
    Reject,
}

/// An extracted license text referenced by a `LicenseRef-*` identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedLicenseInfo {
    pub license_ref: String,
    pub extracted_text: String,
    pub name: Option<String>,
    pub comment: Option<String>,
    pub cross_references: Vec<String>,
}

impl ExtractedLicenseInfo {
    pub fn new(license_ref: impl Into<String>, extracted_text: impl Into<String>) -> Self {
        ExtractedLicenseInfo {
            license_ref: license_ref.into(),
            extracted_text: extracted_text.into(),
            name: None,
            comment: None,
            cross_references: Vec::new(),
        }
    }
}

/// Run-scoped store of extracted licenses, keyed by their reference ID.
#[derive(Debug, Default)]
pub struct LicenseRegistry {
    entries: BTreeMap<String, ExtractedLicenseInfo>,
}

impl LicenseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register explicitly configured extracted license text.
    ///
    /// The reference must be well-formed and unused; both violations
    /// are configuration mistakes.
    pub fn register(&mut self, info: ExtractedLicenseInfo) -> TesseraResult<()> {
        if !valid_license_ref(&info.license_ref) {
            return Err(TesseraError::Configuration(format!(
                "malformed extracted license reference: {}",
                info.license_ref
            )));
        }
        if self.entries.contains_key(&info.license_ref) {
            return Err(TesseraError::Configuration(format!(
                "duplicate extracted license reference: {}",
                info.license_ref
            )));
        }
        self.entries.insert(info.license_ref.clone(), info);
        Ok(())
    }

    /// Record a forward reference first seen in scanned text. The entry
    /// carries empty text until the caller fills it in. Idempotent.
    pub fn register_implicit(&mut self, license_ref: &str) {
        self.entries
            .entry(license_ref.to_string())
            .or_insert_with(|| ExtractedLicenseInfo::new(license_ref, ""));
    }

    pub fn contains(&self, license_ref: &str) -> bool {
        self.entries.contains_key(license_ref)
    }

    pub fn get(&self, license_ref: &str) -> Option<&ExtractedLicenseInfo> {
        self.entries.get(license_ref)
    }

    /// Entries in reference-ID order.
    pub fn iter(&self) -> impl Iterator<Item = &ExtractedLicenseInfo> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
