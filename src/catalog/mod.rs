use crate::domain::athlete::{Athlete, AthleteDetail, AthleteFilter, Legend};
use crate::domain::country::{CountryComparison, CountryDetail, CountrySummary};
use crate::domain::prediction::{AthletePrediction, Clustering, ModelInfo, Paris2024Predictions};
use crate::domain::stats::{
    FranceStats, HistoricEvent, HostCountry, OverviewStats, TopSport, YearMedals,
};
use anyhow::Result;

pub mod athletes;
pub mod countries;
pub mod predictions;
pub mod stats;

#[async_trait::async_trait]
pub trait StatsCatalog: Send + Sync {
    async fn overview(&self) -> Result<OverviewStats>;
    async fn france(&self) -> Result<FranceStats>;
    async fn medals_by_year(&self, country: Option<&str>) -> Result<Vec<YearMedals>>;
    async fn top_sports(&self) -> Result<Vec<TopSport>>;
    async fn host_countries(&self) -> Result<Vec<HostCountry>>;
    async fn historic_events(&self) -> Result<Vec<HistoricEvent>>;
}

#[async_trait::async_trait]
pub trait CountryCatalog: Send + Sync {
    async fn list(&self) -> Result<Vec<CountrySummary>>;
    async fn detail(&self, code: &str) -> Result<Option<CountryDetail>>;
    async fn compare(&self, codes: &[String]) -> Result<CountryComparison>;
}

#[async_trait::async_trait]
pub trait AthleteCatalog: Send + Sync {
    async fn list(&self, filter: &AthleteFilter) -> Result<Vec<Athlete>>;
    async fn legends(&self) -> Result<Vec<Legend>>;
    async fn detail(&self, id: i64) -> Result<Option<AthleteDetail>>;
}

#[async_trait::async_trait]
pub trait PredictionCatalog: Send + Sync {
    async fn paris2024(&self) -> Result<Paris2024Predictions>;
    async fn athletes(&self) -> Result<Vec<AthletePrediction>>;
    async fn clustering(&self) -> Result<Clustering>;
    async fn models(&self) -> Result<Vec<ModelInfo>>;
}
