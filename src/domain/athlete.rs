use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Athlete {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub sport: String,
    pub total_medals: i64,
    pub gold: i64,
    pub silver: i64,
    pub bronze: i64,
    pub photo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteDetail {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub birth_date: String,
    pub sport: String,
    pub height: i32,
    pub weight: i32,
    pub total_medals: i64,
    pub gold: i64,
    pub silver: i64,
    pub bronze: i64,
    pub olympics: Vec<OlympicsAppearance>,
    pub records: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OlympicsAppearance {
    pub year: i32,
    pub city: String,
    pub medals: MedalBreakdown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedalBreakdown {
    pub gold: i64,
    pub silver: i64,
    pub bronze: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Legend {
    pub name: String,
    pub country: String,
    pub sport: String,
    pub medals: i64,
    pub fact: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AthleteFilter {
    pub country: Option<String>,
    pub sport: Option<String>,
    pub limit: Option<usize>,
}

impl AthleteFilter {
    pub const DEFAULT_LIMIT: usize = 50;
}
