//! Subject kinds, sort policies and the [`Subjects`] collection.

mod kind;
mod sort;
mod subjects;

pub use kind::{SUBJECTS_ALL, SubjectKind, resolve_selection};
pub use sort::SortBy;
pub use subjects::Subjects;
