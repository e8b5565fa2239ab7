// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod records;

pub mod csv;
pub mod error;
pub mod fetch;
pub mod file;
pub mod log;
pub mod progress;
pub mod runner;

pub use config::options::PipelineConfig;
pub use error::{Error, Result};
pub use runner::{run, RunSummary};
