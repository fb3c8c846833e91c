//! Export sort policies.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::model::NaturalOrder;

/// How each subject kind is ordered in the exported file.
///
/// [`SortBy::Oldest`] keeps fetch order and [`SortBy::Latest`] reverses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    /// Reverse of fetch order
    Latest,
    /// Fetch order, unchanged
    #[default]
    Oldest,
    /// Ascending natural order
    #[value(name = "lexical")]
    #[serde(rename = "lexical")]
    LexicalAsc,
    /// Descending natural order
    #[value(name = "lexical-desc")]
    #[serde(rename = "lexical-desc")]
    LexicalDesc,
}

impl SortBy {
    /// Order borrowed items according to this policy. Sorting is stable.
    pub fn apply<'a, T: NaturalOrder>(self, items: &'a [T]) -> Vec<&'a T> {
        let mut ordered: Vec<&T> = items.iter().collect();
        match self {
            Self::Oldest => {}
            Self::Latest => ordered.reverse(),
            Self::LexicalAsc => ordered.sort_by(|a, b| a.natural_cmp(b)),
            Self::LexicalDesc => ordered.sort_by(|a, b| b.natural_cmp(a)),
        }
        ordered
    }
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Latest => "latest",
            Self::Oldest => "oldest",
            Self::LexicalAsc => "lexical",
            Self::LexicalDesc => "lexical-desc",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Artist, MustOpt, Track};

    fn track(artist: &str, title: &str, id: &str) -> Track {
        Track::new(title, vec![Artist::new(artist, artist)], MustOpt::empty(), id)
    }

    fn ids(tracks: Vec<&Track>) -> Vec<&str> {
        tracks.iter().map(|t| t.id.as_str()).collect()
    }

    fn sample() -> Vec<Track> {
        vec![track("b", "x", "A"), track("a", "y", "B"), track("a", "z", "C")]
    }

    #[test]
    fn test_lexical_artists_dominate_title() {
        let tracks = sample();
        assert_eq!(ids(SortBy::LexicalAsc.apply(&tracks)), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_lexical_desc() {
        let tracks = sample();
        assert_eq!(ids(SortBy::LexicalDesc.apply(&tracks)), vec!["A", "C", "B"]);
    }

    #[test]
    fn test_latest_reverses_fetch_order() {
        let tracks = sample();
        assert_eq!(ids(SortBy::Latest.apply(&tracks)), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_oldest_keeps_fetch_order() {
        let tracks = sample();
        assert_eq!(ids(SortBy::Oldest.apply(&tracks)), vec!["A", "B", "C"]);
        assert_eq!(SortBy::default(), SortBy::Oldest);
    }

    #[test]
    fn test_serde_names() {
        let parsed: SortBy = serde_json::from_str("\"lexical-desc\"").unwrap();
        assert_eq!(parsed, SortBy::LexicalDesc);
        assert_eq!(SortBy::LexicalAsc.to_string(), "lexical");
    }
}
