//! Single-directory listing with an explicit outcome.
//!
//! A directory either yields its entries or a reason it was skipped. Callers
//! branch on the outcome instead of catching I/O errors, so an unreadable
//! folder on the share costs only its own subtree.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntryKind {
    Folder,
    File,
}

/// An immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NotFound,
    NotADirectory,
    PermissionDenied,
    Unreadable(String),
}

impl SkipReason {
    /// The directory exists but could not be opened.
    #[must_use]
    pub const fn is_unreadable(&self) -> bool {
        matches!(self, Self::PermissionDenied | Self::Unreadable(_))
    }

    fn from_io(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Unreadable(err.to_string()),
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "directory does not exist"),
            Self::NotADirectory => write!(f, "not a directory"),
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::Unreadable(detail) => write!(f, "unreadable: {detail}"),
        }
    }
}

/// Outcome of listing one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirListing {
    Entries(Vec<ListedEntry>),
    Skipped(SkipReason),
}

/// List the immediate children of `dir`, sorted by file name.
///
/// Symbolic links are not followed: a link to a directory is left out, a
/// link to anything else is listed as a file. A child whose metadata cannot
/// be read is dropped without affecting its siblings.
#[must_use]
pub fn list_dir(dir: &Path) -> DirListing {
    match std::fs::metadata(dir) {
        Err(err) => return DirListing::Skipped(SkipReason::from_io(&err)),
        Ok(meta) if !meta.is_dir() => return DirListing::Skipped(SkipReason::NotADirectory),
        Ok(_) => {}
    }

    let mut entries = Vec::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    for item in walker {
        match item {
            Ok(entry) => entries.extend(classify(entry)),
            Err(err) if err.depth() == 0 => {
                let reason = err
                    .io_error()
                    .map_or_else(|| SkipReason::Unreadable(err.to_string()), SkipReason::from_io);
                return DirListing::Skipped(reason);
            }
            Err(err) => {
                tracing::debug!(error = %err, "dropping unreadable directory entry");
            }
        }
    }

    DirListing::Entries(entries)
}

fn classify(entry: walkdir::DirEntry) -> Option<ListedEntry> {
    let file_type = entry.file_type();
    let kind = if file_type.is_dir() {
        EntryKind::Folder
    } else if file_type.is_symlink() && entry.path().is_dir() {
        return None;
    } else {
        EntryKind::File
    };

    Some(ListedEntry {
        name: entry.file_name().to_string_lossy().into_owned(),
        path: entry.into_path(),
        kind,
    })
}

#[cfg(test)]
#[path = "listing_tests.rs"]
mod tests;
