use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStats {
    pub total_medals: i64,
    pub total_athletes: i64,
    pub total_countries: i64,
    pub total_events: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FranceStats {
    pub total_medals: i64,
    pub gold: i64,
    pub silver: i64,
    pub bronze: i64,
    pub best_year: YearSummary,
    pub worst_year: YearSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearSummary {
    pub year: i32,
    pub medals: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearMedals {
    pub year: i32,
    pub gold: i64,
    pub silver: i64,
    pub bronze: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopSport {
    pub sport: String,
    pub medals: i64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostCountry {
    pub country: String,
    pub count: i64,
    pub cities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricEvent {
    pub id: i64,
    pub year: i32,
    pub title: String,
    pub description: String,
    pub verified: bool,
}
