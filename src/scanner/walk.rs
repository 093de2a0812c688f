//! Depth-unbounded traversal of the effective roots.
//!
//! [`TreeWalk`] is a lazy iterator over an explicit stack of pending
//! directories, so deep trees never grow the call stack and a consumer can
//! stop early. Constructing a new walk over the same roots restarts it.

use std::collections::VecDeque;
use std::path::PathBuf;

use super::filter::SearchFilter;
use super::listing::{DirListing, EntryKind, SkipReason, list_dir};
use super::predicate::{file_matches, folder_matches};
use super::types::{MatchRecord, sort_records};

/// One step of a traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkEvent {
    /// A directory that was opened successfully.
    Folder(PathBuf),
    File(PathBuf),
    /// A directory that could not be opened; its subtree is not visited.
    Skipped { path: PathBuf, reason: SkipReason },
}

/// Pre-order traversal: each directory is reported, then its files, then its
/// subdirectories in name order.
#[derive(Debug)]
pub struct TreeWalk {
    stack: Vec<PathBuf>,
    pending: VecDeque<WalkEvent>,
}

impl TreeWalk {
    pub fn new<I>(roots: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut stack: Vec<PathBuf> = roots.into_iter().collect();
        stack.reverse();
        Self {
            stack,
            pending: VecDeque::new(),
        }
    }

    fn expand(&mut self, dir: PathBuf) {
        match list_dir(&dir) {
            DirListing::Skipped(reason) => {
                self.pending.push_back(WalkEvent::Skipped { path: dir, reason });
            }
            DirListing::Entries(entries) => {
                self.pending.push_back(WalkEvent::Folder(dir));
                let mut subdirs = Vec::new();
                for entry in entries {
                    match entry.kind {
                        EntryKind::Folder => subdirs.push(entry.path),
                        EntryKind::File => self.pending.push_back(WalkEvent::File(entry.path)),
                    }
                }
                self.stack.extend(subdirs.into_iter().rev());
            }
        }
    }
}

impl Iterator for TreeWalk {
    type Item = WalkEvent;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Some(event);
            }
            let dir = self.stack.pop()?;
            self.expand(dir);
        }
    }
}

/// Walk every effective root and collect the entries matching `filter`,
/// in result order.
#[must_use]
pub fn walk(effective_roots: &[PathBuf], filter: &SearchFilter) -> Vec<MatchRecord> {
    let mut matches: Vec<MatchRecord> = TreeWalk::new(effective_roots.iter().cloned())
        .filter_map(|event| match_event(&event, filter))
        .collect();
    sort_records(&mut matches);

    tracing::debug!(
        roots = effective_roots.len(),
        matches = matches.len(),
        "walk complete"
    );
    matches
}

/// Apply the file or folder predicate to a single walk event.
#[must_use]
pub fn match_event(event: &WalkEvent, filter: &SearchFilter) -> Option<MatchRecord> {
    match event {
        WalkEvent::Folder(path) => {
            let record = MatchRecord::new(EntryKind::Folder, path);
            folder_matches(&record.name, &record.full_path, filter).then_some(record)
        }
        WalkEvent::File(path) => {
            let record = MatchRecord::new(EntryKind::File, path);
            file_matches(&record.name, &record.full_path, filter).then_some(record)
        }
        WalkEvent::Skipped { path, reason } => {
            tracing::debug!(path = %path.display(), %reason, "skipping directory");
            None
        }
    }
}

#[cfg(test)]
#[path = "walk_tests.rs"]
mod tests;
