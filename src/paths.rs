//! Stable manifest path names.
//!
//! Every collected file is identified by a dot-relative, forward-slash
//! path that is identical no matter which operating system produced it.
//! Normalization is pure string manipulation and never consults the
//! filesystem, so Windows-style inputs normalize the same way on every
//! host.

use crate::{TesseraError, TesseraResult};

/// Strip `tree_root` from `raw_path` and render the remainder as a
/// stable name (`./`-prefixed, forward slashes only).
///
/// Fails when `raw_path` does not lie strictly under `tree_root`; the
/// root itself has no stable name.
pub fn normalize(raw_path: &str, tree_root: &str) -> TesseraResult<String> {
    let path = raw_path.replace('\\', "/");
    let root = tree_root.replace('\\', "/");
    let root = root.trim_end_matches('/');

    let rest = match path.strip_prefix(root) {
        Some(rest) => rest,
        None => return Err(TesseraError::PathOutsideRoot(path)),
    };
    // "/home/ab" is not under "/home/a"; the remainder must begin at a
    // component boundary.
    if !root.is_empty() && !rest.starts_with('/') {
        return Err(TesseraError::PathOutsideRoot(path));
    }
    let rest = rest.trim_start_matches('/');
    if rest.is_empty() {
        return Err(TesseraError::PathOutsideRoot(path));
    }
    Ok(format!("./{rest}"))
}

/// Render an already-relative path as a stable name.
///
/// Accepts either separator convention and an optional existing `./`
/// prefix, so repeated normalization is idempotent.
pub fn stable_name(relative_path: &str) -> String {
    let path = relative_path.replace('\\', "/");
    let path = path.trim_start_matches("./");
    format!("./{path}")
}
