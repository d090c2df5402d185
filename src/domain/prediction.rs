use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paris2024Predictions {
    pub france: FrancePrediction,
    pub top25: Vec<RankedPrediction>,
    pub last_updated: String,
    pub model_metrics: ModelMetrics,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrancePrediction {
    pub gold: i64,
    pub silver: i64,
    pub bronze: i64,
    pub total: i64,
    pub confidence: f64,
    pub model: String,
    pub rank: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedPrediction {
    pub rank: i32,
    pub country: String,
    pub gold: i64,
    pub silver: i64,
    pub bronze: i64,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub accuracy: f64,
    pub rmse: f64,
    pub mae: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AthletePrediction {
    pub name: String,
    pub sport: String,
    pub country: String,
    pub predicted_medal: String,
    pub probability: f64,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clustering {
    pub optimal_k: i32,
    pub silhouette_score: f64,
    pub clusters: Vec<Cluster>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub id: i32,
    pub name: String,
    pub countries: Vec<String>,
    pub avg_medals: i64,
    pub characteristics: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub model_type: String,
    pub accuracy: f64,
    pub rmse: f64,
    pub train_time: String,
    pub selected: bool,
}
