// src/config/consts.rs

// Net config
pub const MATCHES_URL: &str = "https://raw.githubusercontent.com/JeffSackmann/tennis_MatchChartingProject/master/charting-m-matches.csv";
pub const POINTS_URL: &str = "https://raw.githubusercontent.com/JeffSackmann/tennis_MatchChartingProject/master/charting-m-points-2020s.csv";
pub const USER_AGENT: &str = concat!("slam_fetch/", env!("CARGO_PKG_VERSION"));

// Filter
// Order matters: the first substring hit names the slam.
pub const GRAND_SLAMS: [&str; 4] = ["Australian Open", "Roland Garros", "Wimbledon", "US Open"];
pub const MIN_YEAR: &str = "2020";

// Export
pub const DEFAULT_OUT_DIR: &str = "public/data";
pub const POINTS_SUBDIR: &str = "points";
pub const INDEX_FILE: &str = "matches.json";
