// src/records/points.rs
use serde::{Deserialize, Serialize};

use crate::csv::RawRow;

/// One element of `points/<match_id>.json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointRecord {
    pub pt: i64,
    pub set1: i64,
    pub set2: i64,
    pub gm1: i64,
    pub gm2: i64,
    /// Game score as charted, server first (e.g. "30-40").
    pub pts: String,
    pub svr: i64,
    pub pt_winner: i64,
    pub is_ace: bool,
    pub is_unret: bool,
    pub is_rally_winner: bool,
    pub is_forced: bool,
    pub is_unforced: bool,
    pub is_double: bool,
    pub rally_count: i64,
    pub is_svr_winner: bool,
    pub tb: bool,
    pub is_break_pt: bool,
}

/// A converted value plus whether it came from the data or from a fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field<T> {
    Parsed(T),
    Defaulted(T),
}

impl<T> Field<T> {
    pub fn value(self) -> T {
        match self {
            Field::Parsed(v) | Field::Defaulted(v) => v,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Field::Defaulted(_))
    }
}

/// Integer conversion.
/// Absent column → `Defaulted(absent)`; present but unparseable → `Defaulted(0)`.
pub fn int_field(raw: Option<&str>, absent: i64) -> Field<i64> {
    match raw {
        None => Field::Defaulted(absent),
        Some(s) => match s.trim().parse::<i64>() {
            Ok(v) => Field::Parsed(v),
            Err(_) => Field::Defaulted(0),
        },
    }
}

/// "TRUE" in any case is true; everything else, including absence, is false.
pub fn bool_field(raw: Option<&str>) -> bool {
    raw.is_some_and(|s| s.to_uppercase() == "TRUE")
}

/// "1" is true. An absent column reads as `absent`.
pub fn flag_field(raw: Option<&str>, absent: &str) -> bool {
    raw.unwrap_or(absent) == "1"
}

/// Break point: the returner is one point from taking the game.
///
/// `pts` is "server-returner". Exactly one '-' is required; 30-40, 15-40 and
/// 0-40 qualify, as does any score with the returner on "AD".
pub fn is_break_point(pts: &str) -> bool {
    let mut parts = pts.split('-');
    let (Some(svr_pts), Some(ret_pts), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    matches!((svr_pts, ret_pts), ("30", "40") | ("15", "40") | ("0", "40")) || ret_pts == "AD"
}

/// Convert one raw point row.
pub fn transform_point(row: &RawRow) -> PointRecord {
    let int = |col: &str| int_field(row.get(col), 0).value();
    let pts = s!(row.get_or("Pts", ""));

    PointRecord {
        pt: int("Pt"),
        set1: int("Set1"),
        set2: int("Set2"),
        gm1: int("Gm1"),
        gm2: int("Gm2"),
        svr: int_field(row.get("Svr"), 1).value(),
        pt_winner: int("PtWinner"),
        is_ace: bool_field(row.get("isAce")),
        is_unret: bool_field(row.get("isUnret")),
        is_rally_winner: bool_field(row.get("isRallyWinner")),
        is_forced: bool_field(row.get("isForced")),
        is_unforced: bool_field(row.get("isUnforced")),
        is_double: bool_field(row.get("isDouble")),
        rally_count: int("rallyCount"),
        is_svr_winner: flag_field(row.get("isSvrWinner"), "1"),
        tb: flag_field(row.get("TB?"), "0"),
        is_break_pt: is_break_point(&pts),
        pts,
    }
}

/// Convert a match's raw point rows, keeping their order.
pub fn transform_points<'a, I>(rows: I) -> Vec<PointRecord>
where
    I: IntoIterator<Item = &'a RawRow>,
{
    rows.into_iter().map(transform_point).collect()
}
