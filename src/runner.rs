// src/runner.rs
use std::collections::HashMap;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::{
    config::options::PipelineConfig,
    csv::RawRow,
    error::Result,
    fetch::{fetch_rows, fetch_rows_where, Source},
    file::{ensure_directory, write_index, write_points},
    progress::Progress,
    records::{
        matches::{select_matches, MatchSummary},
        points::transform_points,
    },
};

/// Summary of what was produced.
#[derive(Clone, Debug, Default)]
pub struct RunSummary {
    /// Index entries, in match-file order.
    pub matches: Vec<MatchSummary>,
    /// Point files, in the order they were written.
    pub files_written: Vec<PathBuf>,
    pub index_path: PathBuf,
    pub points_dir: PathBuf,
}

/// Run the whole pipeline once: fetch, filter, transform, write.
///
/// Strictly sequential. Any error aborts the run; files written before the
/// failure stay where they are.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    config: &PipelineConfig,
    source: &dyn Source,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let points_dir = config.points_dir();
    ensure_directory(&points_dir)?;

    macro_rules! say {
        ($($arg:tt)*) => {
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!($($arg)*));
            }
        };
    }

    /* ---------------- Matches ---------------- */

    say!("Downloading {}...", config.matches_url);
    let matches_raw = fetch_rows(source, &config.matches_url)?;
    say!("Downloaded {} matches", matches_raw.len());

    let selection = select_matches(&matches_raw, &config.slams, &config.min_year);
    say!(
        "Found {} Grand Slam matches from {}+",
        selection.matches.len(),
        config.min_year
    );
    if let Some(p) = progress.as_deref_mut() {
        p.begin(selection.matches.len());
    }

    /* ---------------- Points ---------------- */

    say!("Downloading {}...", config.points_url);
    let mut seen = 0usize;
    let points_raw = fetch_rows_where(source, &config.points_url, |row| {
        seen += 1;
        selection.ids.contains(row.get_or("match_id", ""))
    })?;
    say!("Downloaded {seen} points");

    let by_match = group_points(&points_raw, |id| selection.ids.contains(id));
    debug!(
        "{} of {} qualifying matches have charted points",
        by_match.len(),
        selection.ids.len()
    );

    /* ---------------- Transform + write ---------------- */

    let mut summary = RunSummary {
        matches: Vec::with_capacity(by_match.len()),
        files_written: Vec::with_capacity(by_match.len()),
        index_path: config.index_path(),
        points_dir,
    };

    for slam_match in selection.matches {
        let Some(raw_points) = by_match.get(slam_match.id.as_str()) else {
            debug!("Match {}: no points, skipped", slam_match.id);
            continue;
        };

        let points = transform_points(raw_points.iter().copied());
        if points.is_empty() {
            continue;
        }

        let path = config.point_file(&slam_match.id);
        write_points(&path, &points)?;

        let entry = slam_match.into_summary(points.len());
        if let Some(p) = progress.as_deref_mut() {
            p.match_saved(&entry);
        }
        summary.files_written.push(path);
        summary.matches.push(entry);
    }

    write_index(&summary.index_path, &summary.matches)?;
    info!(
        "Wrote {} matches to {}",
        summary.matches.len(),
        summary.index_path.display()
    );

    if let Some(p) = progress.as_deref_mut() {
        p.finish(&summary);
    }
    Ok(summary)
}

/// Bucket point rows by `match_id`, keeping only ids `wanted` accepts.
/// Rows keep their source order inside each bucket.
pub fn group_points<'a>(
    rows: &'a [RawRow],
    wanted: impl Fn(&str) -> bool,
) -> HashMap<&'a str, Vec<&'a RawRow>> {
    let mut by_match: HashMap<&str, Vec<&RawRow>> = HashMap::new();
    for row in rows {
        let id = row.get_or("match_id", "");
        if wanted(id) {
            by_match.entry(id).or_default().push(row);
        }
    }
    by_match
}
