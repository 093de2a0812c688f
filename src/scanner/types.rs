use std::path::Path;

use super::listing::EntryKind;

/// A file or folder that satisfied a search filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub kind: EntryKind,
    pub name: String,
    pub parent_folder: String,
    pub full_path: String,
}

impl MatchRecord {
    #[must_use]
    pub fn new(kind: EntryKind, path: &Path) -> Self {
        let full_path = path.to_string_lossy().into_owned();
        let name = path
            .file_name()
            .map_or_else(|| full_path.clone(), |n| n.to_string_lossy().into_owned());
        let parent_folder = path
            .parent()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            kind,
            name,
            parent_folder,
            full_path,
        }
    }

    #[must_use]
    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }
}

/// Sort into result order: folders before files, then by name ignoring case.
/// The full path breaks remaining ties so the order is total.
pub fn sort_records(records: &mut [MatchRecord]) {
    records.sort_by_cached_key(|r| (r.kind, r.name.to_lowercase(), r.full_path.to_lowercase()));
}

/// Sort by name only, ignoring case.
pub fn sort_by_name(records: &mut [MatchRecord]) {
    records.sort_by_cached_key(|r| (r.name.to_lowercase(), r.full_path.to_lowercase()));
}
