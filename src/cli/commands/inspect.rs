//! Inspect command.

use std::path::Path;

use crate::subject::Subjects;

/// Print per-kind counts of an existing export
pub fn cmd_inspect(path: &Path) -> anyhow::Result<()> {
    let subjects = Subjects::load(path)?;

    println!("{:?}:", path);
    if subjects.is_empty() {
        println!("  (empty)");
        return Ok(());
    }
    for (kind, n) in subjects.counts() {
        println!("  {:<10} {}", kind.label(), n);
    }

    let albumless = subjects
        .tracks()
        .iter()
        .chain(subjects.playlists().iter().flat_map(|p| p.tracks.iter()))
        .filter(|t| !t.album.valid())
        .count();
    if albumless > 0 {
        println!("  {} without album", albumless);
    }
    let covers = subjects
        .playlists()
        .iter()
        .filter(|p| p.cover.valid())
        .count();
    if covers > 0 {
        println!("  {} with cover", covers);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportFormat;
    use crate::model::{Artist, MustOpt, Track};
    use crate::subject::SortBy;

    #[test]
    fn test_inspect_written_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("likes.yml");
        let mut subjects = Subjects::new();
        subjects.set_tracks(vec![Track::new(
            "Demo",
            vec![Artist::new("Me", "1")],
            MustOpt::empty(),
            "5",
        )]);
        subjects.dump(&path, ExportFormat::Yaml, SortBy::Oldest).unwrap();

        cmd_inspect(&path).unwrap();
    }

    #[test]
    fn test_inspect_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(cmd_inspect(&dir.path().join("missing.json")).is_err());
    }
}
