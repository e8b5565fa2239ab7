// src/records/matches.rs
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::csv::RawRow;

/// A match that passed the slam + year filter; no point count yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlamMatch {
    pub id: String,
    pub tournament: String,
    pub date: String,
    pub round: String,
    pub player1: String,
    pub player2: String,
    pub surface: String,
}

/// One entry of `matches.json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub id: String,
    pub tournament: String,
    pub date: String,
    pub round: String,
    pub player1: String,
    pub player2: String,
    pub surface: String,
    pub point_count: usize,
}

impl SlamMatch {
    pub fn into_summary(self, point_count: usize) -> MatchSummary {
        MatchSummary {
            id: self.id,
            tournament: self.tournament,
            date: self.date,
            round: self.round,
            player1: self.player1,
            player2: self.player2,
            surface: self.surface,
            point_count,
        }
    }
}

/// Output of the match filter.
#[derive(Clone, Debug, Default)]
pub struct Selection {
    /// Ids of qualifying matches, for point-row filtering.
    pub ids: HashSet<String>,
    /// Qualifying matches in source row order.
    pub matches: Vec<SlamMatch>,
}

/// True iff `tourney_name` contains one of `slams` (case-insensitive).
pub fn is_grand_slam<S: AsRef<str>>(tourney_name: &str, slams: &[S]) -> bool {
    if tourney_name.is_empty() {
        return false;
    }
    let lc = tourney_name.to_lowercase();
    slams.iter().any(|gs| lc.contains(&gs.as_ref().to_lowercase()))
}

/// First slam (in list order) contained in `tourney_name`, else the name unchanged.
pub fn slam_name<S: AsRef<str>>(tourney_name: &str, slams: &[S]) -> String {
    let lc = tourney_name.to_lowercase();
    slams
        .iter()
        .map(|gs| gs.as_ref())
        .find(|gs| lc.contains(&gs.to_lowercase()))
        .unwrap_or(tourney_name)
        .to_string()
}

/// Year floor: the first four characters of `date` must sort at or after `min_year`.
/// Empty dates never pass.
pub fn admits_year(date: &str, min_year: &str) -> bool {
    if date.is_empty() {
        return false;
    }
    let cut = date.char_indices().nth(4).map_or(date.len(), |(i, _)| i);
    &date[..cut] >= min_year
}

/// Pick the Grand Slam matches played in or after `min_year`.
pub fn select_matches<S: AsRef<str>>(rows: &[RawRow], slams: &[S], min_year: &str) -> Selection {
    let mut out = Selection::default();

    for row in rows {
        let tourney = row.get_or("Tournament", "");
        let date = row.get_or("Date", "");
        if !(is_grand_slam(tourney, slams) && admits_year(date, min_year)) {
            continue;
        }

        let id = s!(row.get_or("match_id", ""));
        out.ids.insert(id.clone());
        out.matches.push(SlamMatch {
            id,
            tournament: slam_name(tourney, slams),
            date: s!(date),
            round: s!(row.get_or("Round", "")),
            player1: s!(row.get_or("Player 1", "")),
            player2: s!(row.get_or("Player 2", "")),
            surface: s!(row.get_or("Surface", "")),
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::consts::GRAND_SLAMS;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs.iter().copied().collect()
    }

    #[test]
    fn grand_slam_any_case() {
        for name in [
            "2021 Wimbledon",
            "2022 australian open",
            "ROLAND GARROS 2020",
            "2023 Us OpEn",
            "Wimbledon",
        ] {
            assert!(is_grand_slam(name, &GRAND_SLAMS), "{name}");
        }
    }

    #[test]
    fn non_slams_and_empty_are_rejected() {
        for name in ["", "2021 Miami Masters", "Open 13", "US Masters", "Roland"] {
            assert!(!is_grand_slam(name, &GRAND_SLAMS), "{name}");
        }
    }

    #[test]
    fn slam_name_normalizes_in_list_order() {
        assert_eq!(slam_name("2021 wimbledon", &GRAND_SLAMS), "Wimbledon");
        assert_eq!(slam_name("2020 Roland Garros", &GRAND_SLAMS), "Roland Garros");
        // Both present: list order decides.
        assert_eq!(slam_name("US Open / Australian Open", &GRAND_SLAMS), "Australian Open");
        assert_eq!(slam_name("Davis Cup", &GRAND_SLAMS), "Davis Cup");
    }

    #[test]
    fn year_floor_is_lexical_on_first_four_chars() {
        assert!(!admits_year("2019-12-01", "2020"));
        assert!(admits_year("2020-01-01", "2020"));
        assert!(admits_year("2021-06-15", "2020"));
        assert!(admits_year("20210628", "2020"));
        assert!(!admits_year("", "2020"));
        assert!(!admits_year("202", "2020"));
        assert!(admits_year("9999", "2020"));
    }

    #[test]
    fn select_keeps_recent_slams_in_order() {
        let rows = vec![
            row(&[("match_id", "A"), ("Tournament", "2019 Wimbledon"), ("Date", "20190701")]),
            row(&[
                ("match_id", "M1"),
                ("Tournament", "2021 Wimbledon"),
                ("Date", "20210628"),
                ("Round", "R128"),
                ("Player 1", "A"),
                ("Player 2", "B"),
                ("Surface", "Grass"),
            ]),
            row(&[("match_id", "C"), ("Tournament", "2022 Miami Masters"), ("Date", "20220320")]),
            row(&[("match_id", "D"), ("Tournament", "2020 us open"), ("Date", "")]),
            row(&[("match_id", "M2"), ("Tournament", "2022 Australian Open"), ("Date", "20220117")]),
        ];

        let sel = select_matches(&rows, &GRAND_SLAMS, "2020");
        let ids: Vec<&str> = sel.matches.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["M1", "M2"]);
        assert_eq!(sel.ids.len(), 2);
        assert!(sel.ids.contains("M1") && sel.ids.contains("M2"));

        let m1 = &sel.matches[0];
        assert_eq!(m1.tournament, "Wimbledon");
        assert_eq!(m1.date, "20210628");
        assert_eq!(m1.round, "R128");
        assert_eq!((m1.player1.as_str(), m1.player2.as_str()), ("A", "B"));
        assert_eq!(m1.surface, "Grass");

        // Missing columns fall back to "".
        assert_eq!(sel.matches[1].round, "");
        assert_eq!(sel.matches[1].surface, "");
    }

    #[test]
    fn summary_serializes_camel_case_in_field_order() {
        let m = SlamMatch {
            id: s!("M1"),
            tournament: s!("Wimbledon"),
            date: s!("20210628"),
            round: s!("F"),
            player1: s!("A"),
            player2: s!("B"),
            surface: s!("Grass"),
        };
        let json = serde_json::to_string(&m.into_summary(3)).unwrap();
        assert_eq!(
            json,
            r#"{"id":"M1","tournament":"Wimbledon","date":"20210628","round":"F","player1":"A","player2":"B","surface":"Grass","pointCount":3}"#
        );
    }
}
