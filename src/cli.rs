// src/cli.rs
use std::path::PathBuf;

use clap::Parser;

use crate::{
    config::options::PipelineConfig,
    error::Result,
    fetch::HttpSource,
    progress::Progress,
    runner::{self, RunSummary},
    records::matches::MatchSummary,
};

/// Fetch Grand Slam point-by-point data and write it as JSON.
///
/// With no arguments, downloads the Match Charting Project CSVs and writes
/// `public/data/matches.json` plus `public/data/points/<match_id>.json`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output directory (receives matches.json and points/)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Match metadata CSV
    #[arg(long)]
    pub matches_url: Option<String>,

    /// Point-by-point CSV
    #[arg(long)]
    pub points_url: Option<String>,

    /// Earliest year to keep (YYYY)
    #[arg(long, value_parser = parse_year)]
    pub min_year: Option<String>,

    /// Debug diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Layer the flags over the built-in defaults.
    pub fn config(&self) -> PipelineConfig {
        let mut cfg = PipelineConfig::default();
        if let Some(out) = &self.out {
            cfg.out_dir = out.clone();
        }
        if let Some(url) = &self.matches_url {
            cfg.matches_url = url.clone();
        }
        if let Some(url) = &self.points_url {
            cfg.points_url = url.clone();
        }
        if let Some(year) = &self.min_year {
            cfg.min_year = year.clone();
        }
        cfg
    }
}

fn parse_year(s: &str) -> std::result::Result<String, String> {
    if s.len() == 4 && s.chars().all(|c| c.is_ascii_digit()) {
        Ok(s!(s))
    } else {
        Err(format!("expected a four-digit year, got {s:?}"))
    }
}

/// Prints progress lines to stdout.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn match_saved(&mut self, m: &MatchSummary) {
        println!("  Saved {} points for {} vs {}", m.point_count, m.player1, m.player2);
    }

    fn finish(&mut self, summary: &RunSummary) {
        println!();
        println!(
            "✓ Saved {} matches to {}",
            summary.matches.len(),
            summary.index_path.display()
        );
        println!("✓ Saved point files to {}/", summary.points_dir.display());
    }
}

pub fn run(cli: &Cli) -> Result<RunSummary> {
    crate::log::init(cli.verbose);
    let config = cli.config();
    let source = HttpSource::new()?;
    let mut console = ConsoleProgress;
    runner::run(&config, &source, Some(&mut console))
}
