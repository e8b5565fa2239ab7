// src/records/mod.rs
//! # Record shaping module
//!
//! This module hosts the **dataset-specific shaping rules**: which rows of the
//! Match Charting Project CSVs matter and what they turn into.
//!
//! ## What lives here
//! - **Pure row logic** over [`RawRow`](crate::csv::RawRow) values; no I/O.
//! - **Selection** of Grand Slam matches from the match metadata file
//!   (`matches`), including slam-name normalization and the year floor.
//! - **Conversion** of raw point rows into typed [`PointRecord`](points::PointRecord)s,
//!   with silent defaults for unparseable fields and the derived break-point flag
//!   (`points`).
//!
//! ## What does **not** live here
//! - **Downloading** (`fetch`), **writing** (`file`) and **ordering the stages**
//!   (`runner`).
//!
//! ## Conventions & invariants
//! - Source row order is preserved everywhere; nothing is re-sorted.
//! - Match ids are opaque strings, compared verbatim.
//! - Field conversions never fail; a bad value becomes its documented default.
pub mod matches;
pub mod points;
