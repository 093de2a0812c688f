//! Authorization boundary between callers and the filesystem.
//!
//! Every caller-supplied path is checked against the configured allowed roots
//! before anything touches disk. Comparison happens on a canonical string form:
//! absolute, `/`-separated, lexically normalized and lowercased, so that
//! `S:\Export Logistics\2025` and `s:/export logistics/2025` are the same path,
//! and `\\server\share` network paths compare like local ones.

use std::path::{Path, PathBuf};

use crate::error::{DocFinderError, Result};

/// Checks that paths lie under one of a fixed set of allowed roots.
#[derive(Debug, Clone)]
pub struct PathGuard {
    roots: Vec<String>,
}

impl PathGuard {
    /// Build a guard from the configured roots. Roots that cannot be put into
    /// canonical form are dropped and allow nothing.
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let roots = roots
            .into_iter()
            .filter_map(|root| canonical_form(root.as_ref()))
            .collect();
        Self { roots }
    }

    /// True iff `path` is equal to or a descendant of some allowed root.
    /// Malformed input yields `false`.
    #[must_use]
    pub fn is_allowed(&self, path: &Path) -> bool {
        let Some(candidate) = canonical_form(path) else {
            return false;
        };
        self.roots.iter().any(|root| is_within(&candidate, root))
    }

    /// Authorize a caller-supplied path and confirm it exists.
    ///
    /// # Errors
    /// Returns `NotAllowed` when the path is outside every allowed root, and
    /// `NotFound` when it is allowed but does not exist. Authorization is
    /// checked first so nothing outside the roots is ever probed.
    pub fn authorize(&self, path: &Path) -> Result<PathBuf> {
        if !self.is_allowed(path) {
            return Err(DocFinderError::NotAllowed {
                path: path.to_path_buf(),
            });
        }
        if !path.exists() {
            return Err(DocFinderError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(path.to_path_buf())
    }

    #[must_use]
    pub fn has_roots(&self) -> bool {
        !self.roots.is_empty()
    }
}

/// Canonical comparison form of a path, or `None` if the path is malformed.
#[must_use]
pub fn canonical_form(path: &Path) -> Option<String> {
    let raw = path.to_str()?.trim();
    if raw.is_empty() || raw.contains('\0') {
        return None;
    }

    let resolved = resolve_existing_prefix(Path::new(raw))
        .map_or_else(|| raw.to_string(), |p| p.to_string_lossy().into_owned());
    let mut unified = resolved.replace('\\', "/");

    // Relative input is anchored at the working directory.
    if split_prefix(&unified).is_none() {
        let cwd = dunce::canonicalize(".").ok()?;
        unified = cwd.join(raw).to_str()?.replace('\\', "/");
    }

    let (prefix, rest) = split_prefix(&unified)?;
    Some(join_normalized(prefix, rest))
}

/// Resolve the longest existing ancestor of `path`, links included, and
/// re-attach the missing components below it. A path that does not exist yet
/// then compares like its existing parent does.
fn resolve_existing_prefix(path: &Path) -> Option<PathBuf> {
    let mut missing = Vec::new();
    let mut current = path;
    loop {
        if let Ok(resolved) = dunce::canonicalize(current) {
            return Some(
                missing
                    .iter()
                    .rev()
                    .fold(resolved, |acc, name| acc.join(name)),
            );
        }
        missing.push(current.file_name()?);
        current = current.parent().filter(|p| !p.as_os_str().is_empty())?;
    }
}

/// Split an already `/`-separated path into its root prefix and remainder.
/// Recognizes network shares (`//`), drive letters (`c:/`) and POSIX roots.
fn split_prefix(path: &str) -> Option<(String, &str)> {
    if let Some(rest) = path.strip_prefix("//") {
        return Some(("//".to_string(), rest));
    }

    let bytes = path.as_bytes();
    if bytes.len() >= 2
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && (bytes.len() == 2 || bytes[2] == b'/')
    {
        let drive = path[..2].to_ascii_lowercase();
        return Some((format!("{drive}/"), path.get(3..).unwrap_or("")));
    }

    path.strip_prefix('/').map(|rest| ("/".to_string(), rest))
}

fn join_normalized(prefix: String, rest: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in rest.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    let mut out = prefix;
    out.push_str(&segments.join("/"));
    out.to_lowercase()
}

fn is_within(candidate: &str, root: &str) -> bool {
    if candidate == root {
        return true;
    }
    candidate
        .strip_prefix(root)
        .is_some_and(|rest| root.ends_with('/') || rest.starts_with('/'))
}

#[cfg(test)]
#[path = "guard_tests.rs"]
mod tests;
