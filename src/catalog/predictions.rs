use crate::catalog::PredictionCatalog;
use crate::domain::prediction::{
    AthletePrediction, Cluster, Clustering, FrancePrediction, ModelInfo, ModelMetrics,
    Paris2024Predictions, RankedPrediction,
};
use anyhow::Result;

// Frozen output of the last offline training run. Kept constant so repeated
// reads of the same endpoint stay byte-identical.
const LAST_TRAINED_AT: &str = "2024-05-15T08:30:00Z";

pub struct StaticPredictions {
    paris2024: Paris2024Predictions,
    athletes: Vec<AthletePrediction>,
    clustering: Clustering,
    models: Vec<ModelInfo>,
}

fn ranked(rank: i32, country: &str, gold: i64, silver: i64, bronze: i64) -> RankedPrediction {
    RankedPrediction {
        rank,
        country: country.to_string(),
        gold,
        silver,
        bronze,
        total: gold + silver + bronze,
    }
}

fn athlete_prediction(
    name: &str,
    sport: &str,
    medal: &str,
    probability: f64,
    category: &str,
) -> AthletePrediction {
    AthletePrediction {
        name: name.to_string(),
        sport: sport.to_string(),
        country: "France".to_string(),
        predicted_medal: medal.to_string(),
        probability,
        category: category.to_string(),
    }
}

fn cluster(id: i32, name: &str, countries: &[&str], avg_medals: i64, notes: &str) -> Cluster {
    Cluster {
        id,
        name: name.to_string(),
        countries: countries.iter().map(ToString::to_string).collect(),
        avg_medals,
        characteristics: notes.to_string(),
    }
}

fn model(
    name: &str,
    model_type: &str,
    accuracy: f64,
    rmse: f64,
    train_time: &str,
    selected: bool,
) -> ModelInfo {
    ModelInfo {
        name: name.to_string(),
        model_type: model_type.to_string(),
        accuracy,
        rmse,
        train_time: train_time.to_string(),
        selected,
    }
}

impl StaticPredictions {
    pub fn new() -> Self {
        Self {
            paris2024: Paris2024Predictions {
                france: FrancePrediction {
                    gold: 28,
                    silver: 26,
                    bronze: 22,
                    total: 76,
                    confidence: 0.85,
                    model: "Random Forest".to_string(),
                    rank: 8,
                },
                top25: vec![
                    ranked(1, "USA", 113, 91, 71),
                    ranked(2, "China", 88, 70, 61),
                    ranked(3, "Japan", 58, 41, 37),
                    ranked(4, "Great Britain", 50, 45, 43),
                    ranked(5, "ROC", 47, 52, 50),
                    ranked(6, "Australia", 46, 38, 38),
                    ranked(7, "Germany", 37, 36, 38),
                    ranked(8, "France", 28, 26, 22),
                ],
                last_updated: LAST_TRAINED_AT.to_string(),
                model_metrics: ModelMetrics {
                    accuracy: 0.87,
                    rmse: 2.3,
                    mae: 1.8,
                },
            },
            athletes: vec![
                athlete_prediction("Teddy Riner", "Judo", "Gold", 0.92, "Heavyweight"),
                athlete_prediction(
                    "Léon Marchand",
                    "Swimming",
                    "Gold",
                    0.88,
                    "400m Individual Medley",
                ),
                athlete_prediction("Clarisse Agbegnenou", "Judo", "Gold", 0.85, "-63kg"),
                athlete_prediction("Félix Lebrun", "Table Tennis", "Bronze", 0.61, "Singles"),
                athlete_prediction(
                    "Pauline Ferrand-Prévot",
                    "Cycling",
                    "Silver",
                    0.57,
                    "Mountain Bike",
                ),
            ],
            clustering: Clustering {
                optimal_k: 5,
                silhouette_score: 0.73,
                clusters: vec![
                    cluster(
                        1,
                        "Super Powers",
                        &["USA", "China", "Russia", "Germany", "Great Britain"],
                        250,
                        "Historic dominance, deep talent pools",
                    ),
                    cluster(
                        2,
                        "Strong Performers",
                        &["France", "Japan", "Australia", "Italy", "Netherlands"],
                        85,
                        "Consistent output, strong sport specialisation",
                    ),
                    cluster(
                        3,
                        "Emerging Nations",
                        &["Brazil", "South Korea", "Spain", "Kenya", "Jamaica"],
                        45,
                        "Recent growth, focused sporting niches",
                    ),
                    cluster(
                        4,
                        "Moderate Performers",
                        &["Canada", "Poland", "Sweden", "Switzerland", "Norway"],
                        30,
                        "Stable results, winter-sports focus",
                    ),
                    cluster(
                        5,
                        "Occasional Medalists",
                        &["Ireland", "Portugal", "Chile", "Morocco", "Estonia"],
                        8,
                        "Irregular participation",
                    ),
                ],
            },
            models: vec![
                model("Random Forest", "Machine Learning", 0.87, 2.3, "45s", true),
                model("Decision Tree", "Machine Learning", 0.82, 3.1, "12s", false),
                model("SVM", "Machine Learning", 0.84, 2.8, "120s", false),
                model("CNN", "Deep Learning", 0.89, 2.0, "5m 30s", false),
                model("LSTM", "Deep Learning", 0.86, 2.4, "8m 15s", false),
            ],
        }
    }
}

impl Default for StaticPredictions {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl PredictionCatalog for StaticPredictions {
    async fn paris2024(&self) -> Result<Paris2024Predictions> {
        Ok(self.paris2024.clone())
    }

    async fn athletes(&self) -> Result<Vec<AthletePrediction>> {
        Ok(self.athletes.clone())
    }

    async fn clustering(&self) -> Result<Clustering> {
        Ok(self.clustering.clone())
    }

    async fn models(&self) -> Result<Vec<ModelInfo>> {
        Ok(self.models.clone())
    }
}
