use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountrySummary {
    pub code: String,
    pub name: String,
    pub flag: String,
    pub participations: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryDetail {
    pub code: String,
    pub name: String,
    pub flag: String,
    pub total_medals: i64,
    pub gold: i64,
    pub silver: i64,
    pub bronze: i64,
    pub first_participation: i32,
    pub hostings: Vec<Hosting>,
    pub top_sports: Vec<SportMedals>,
    pub best_olympics: BestOlympics,
    pub medals_by_year: Vec<YearTotal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hosting {
    pub year: i32,
    pub city: String,
    pub season: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SportMedals {
    pub sport: String,
    pub medals: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestOlympics {
    pub year: i32,
    pub medals: i64,
    pub city: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearTotal {
    pub year: i32,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryComparison {
    pub countries: Vec<String>,
    pub data: Vec<ComparisonEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonEntry {
    pub country: String,
    pub total_medals: i64,
    pub gold_rate: f64,
    pub avg_medals_per_olympics: i64,
}
