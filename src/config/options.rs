// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

/// Everything one pipeline run needs to know, fixed before the run starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineConfig {
    pub matches_url: String,
    pub points_url: String,
    /// Canonical slam names, matched as case-insensitive substrings in list order.
    pub slams: Vec<String>,
    /// Lowest admitted year, compared lexically against the date's first four chars.
    pub min_year: String,
    /// Root of the output tree (`matches.json` + `points/`).
    pub out_dir: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            matches_url: s!(MATCHES_URL),
            points_url: s!(POINTS_URL),
            slams: GRAND_SLAMS.iter().map(|&name| s!(name)).collect(),
            min_year: s!(MIN_YEAR),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl PipelineConfig {
    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    pub fn with_urls(mut self, matches_url: impl Into<String>, points_url: impl Into<String>) -> Self {
        self.matches_url = matches_url.into();
        self.points_url = points_url.into();
        self
    }

    pub fn points_dir(&self) -> PathBuf {
        self.out_dir.join(POINTS_SUBDIR)
    }

    pub fn index_path(&self) -> PathBuf {
        self.out_dir.join(INDEX_FILE)
    }

    /// `<out>/points/<match_id>.json`. The id is used as-is.
    pub fn point_file(&self, match_id: &str) -> PathBuf {
        point_file_in(&self.points_dir(), match_id)
    }
}

pub fn point_file_in(dir: &Path, match_id: &str) -> PathBuf {
    dir.join(format!("{match_id}.json"))
}
