//! The query engine primitives: filters, predicates, scope resolution and
//! traversal.

mod filter;
mod listing;
mod page;
mod predicate;
mod scope;
mod types;
mod walk;

pub use filter::{Month, SearchFilter};
pub use listing::{DirListing, EntryKind, ListedEntry, SkipReason, list_dir};
pub use page::{Page, PageRequest, paginate};
pub use predicate::{
    contains_ci, directory_segments, file_matches, file_matches_in_subtree, folder_matches,
    path_segments,
};
pub use scope::{effective_roots, effective_roots_for};
pub use types::{MatchRecord, sort_by_name, sort_records};
pub use walk::{TreeWalk, WalkEvent, match_event, walk};
