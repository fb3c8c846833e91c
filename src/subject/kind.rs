//! Subject kinds and subject selection.

use clap::ValueEnum;

use crate::error::{Error, Result};

/// A kind of exported entity, or `all` of them on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum SubjectKind {
    All,
    Artists,
    Albums,
    Tracks,
    Playlists,
}

/// Every concrete kind, in export order.
pub const SUBJECTS_ALL: [SubjectKind; 4] = [
    SubjectKind::Artists,
    SubjectKind::Albums,
    SubjectKind::Tracks,
    SubjectKind::Playlists,
];

impl SubjectKind {
    /// Plural key used in exported files.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Artists => "artists",
            Self::Albums => "albums",
            Self::Tracks => "tracks",
            Self::Playlists => "playlists",
        }
    }

    /// Noun inflected for `n` items, e.g. "track" or "tracks".
    pub fn noun(self, n: usize) -> &'static str {
        let plural = self.label();
        if n == 1 && self != Self::All {
            &plural[..plural.len() - 1]
        } else {
            plural
        }
    }

    /// Count with a correctly inflected noun, e.g. "1 track" or "3 tracks".
    pub fn count(self, n: usize) -> String {
        format!("{n} {}", self.noun(n))
    }
}

impl std::fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Expand a command-line selection into concrete kinds.
///
/// `all` cannot be combined with other kinds. An empty selection means all.
pub fn resolve_selection(selected: &[SubjectKind]) -> Result<Vec<SubjectKind>> {
    if selected.contains(&SubjectKind::All) {
        if selected.len() > 1 {
            return Err(Error::config(format!(
                "other subjects could not be specified if {} provided",
                SubjectKind::All
            )));
        }
        return Ok(SUBJECTS_ALL.to_vec());
    }
    if selected.is_empty() {
        return Ok(SUBJECTS_ALL.to_vec());
    }
    Ok(SUBJECTS_ALL
        .into_iter()
        .filter(|kind| selected.contains(kind))
        .collect())
}
