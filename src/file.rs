// src/file.rs

use std::{fs, path::Path};

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::records::matches::MatchSummary;
use crate::records::points::PointRecord;

/// Write one match's points as compact JSON (no whitespace between tokens).
/// Creates or truncates `path`; the parent directory must exist.
pub fn write_points(path: &Path, points: &[PointRecord]) -> Result<()> {
    let bytes = serde_json::to_vec(points).map_err(|e| Error::json(path, e))?;
    fs::write(path, bytes).map_err(|e| Error::io(path, e))
}

/// Write the match index as 2-space indented JSON.
pub fn write_index(path: &Path, matches: &[MatchSummary]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let bytes = serde_json::to_vec_pretty(matches).map_err(|e| Error::json(path, e))?;
    fs::write(path, bytes).map_err(|e| Error::io(path, e))
}

pub fn read_points(path: &Path) -> Result<Vec<PointRecord>> {
    read_json(path)
}

pub fn read_index(path: &Path) -> Result<Vec<MatchSummary>> {
    read_json(path)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| Error::json(path, e))
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::RawRow;
    use crate::records::points::transform_points;

    fn sample_points() -> Vec<PointRecord> {
        let rows: Vec<RawRow> = vec![
            [("Pt", "1"), ("Pts", "0-0"), ("Svr", "1"), ("isAce", "TRUE")].into_iter().collect(),
            [("Pt", "2"), ("Pts", "15-0"), ("Svr", "1")].into_iter().collect(),
            [("Pt", "3"), ("Pts", "0-40"), ("Svr", "2"), ("TB?", "1")].into_iter().collect(),
        ];
        transform_points(&rows)
    }

    fn summary(id: &str, point_count: usize) -> MatchSummary {
        MatchSummary {
            id: s!(id),
            tournament: s!("US Open"),
            date: s!("20230828"),
            round: s!("R64"),
            player1: s!("Jürgen"),
            player2: s!("B"),
            surface: s!("Hard"),
            point_count,
        }
    }

    #[test]
    fn points_round_trip_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("M1.json");
        let points = sample_points();

        write_points(&path, &points).unwrap();
        assert_eq!(read_points(&path).unwrap(), points);
    }

    #[test]
    fn points_file_is_compact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("M1.json");
        write_points(&path, &sample_points()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with(r#"[{"pt":1,"set1":0"#));
        assert!(!text.contains(' '));
        assert!(!text.contains('\n'));
    }

    #[test]
    fn index_is_two_space_indented() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/matches.json");
        write_index(&path, &[summary("M1", 3)]).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n  {\n    \"id\": \"M1\",\n    \"tournament\": \"US Open\","));
        assert!(text.contains("\n    \"pointCount\": 3\n  }\n]"));
        assert_eq!(read_index(&path).unwrap(), vec![summary("M1", 3)]);
    }

    #[test]
    fn empty_index_is_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matches.json");
        write_index(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn rewrite_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("M1.json");
        write_points(&path, &sample_points()).unwrap();
        write_points(&path, &sample_points()[..1]).unwrap();
        assert_eq!(read_points(&path).unwrap().len(), 1);
    }

    #[test]
    fn ensure_directory_rejects_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("taken");
        fs::write(&file, "x").unwrap();
        assert!(matches!(ensure_directory(&file), Err(Error::NotADirectory(_))));

        let fresh = dir.path().join("a/b/c");
        ensure_directory(&fresh).unwrap();
        assert!(fresh.is_dir());
    }
}
