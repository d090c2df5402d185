use crate::domain::athlete::{Athlete, AthleteDetail, AthleteFilter, Legend};
use crate::domain::country::{CountryComparison, CountryDetail, CountrySummary};
use crate::domain::prediction::{AthletePrediction, Clustering, ModelInfo, Paris2024Predictions};
use crate::domain::stats::{
    FranceStats, HistoricEvent, HostCountry, OverviewStats, TopSport, YearMedals,
};
use anyhow::Result;
use serde::de::DeserializeOwned;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// One method per backend capability; failures are logged and re-raised
// untouched.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// `base_url` includes the `/api` prefix, e.g. `http://localhost:5000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn overview_stats(&self) -> Result<OverviewStats> {
        self.get_json("/stats/overview", &[]).await
    }

    pub async fn france_stats(&self) -> Result<FranceStats> {
        self.get_json("/stats/france", &[]).await
    }

    pub async fn medals_by_year(&self, country: Option<&str>) -> Result<Vec<YearMedals>> {
        let mut query = Vec::new();
        if let Some(country) = country {
            query.push(("country", country.to_string()));
        }
        self.get_json("/stats/medals-by-year", &query).await
    }

    pub async fn top_sports(&self) -> Result<Vec<TopSport>> {
        self.get_json("/stats/top-sports", &[]).await
    }

    pub async fn host_countries(&self) -> Result<Vec<HostCountry>> {
        self.get_json("/stats/host-countries", &[]).await
    }

    pub async fn historic_events(&self) -> Result<Vec<HistoricEvent>> {
        self.get_json("/stats/historic-events", &[]).await
    }

    pub async fn paris2024_predictions(&self) -> Result<Paris2024Predictions> {
        self.get_json("/predictions/paris2024", &[]).await
    }

    pub async fn athlete_predictions(&self) -> Result<Vec<AthletePrediction>> {
        self.get_json("/predictions/athletes", &[]).await
    }

    pub async fn clustering(&self) -> Result<Clustering> {
        self.get_json("/predictions/clustering", &[]).await
    }

    pub async fn models_comparison(&self) -> Result<Vec<ModelInfo>> {
        self.get_json("/predictions/models", &[]).await
    }

    pub async fn all_countries(&self) -> Result<Vec<CountrySummary>> {
        self.get_json("/countries", &[]).await
    }

    pub async fn country_details(&self, code: &str) -> Result<CountryDetail> {
        self.get_json(&format!("/countries/{code}"), &[]).await
    }

    pub async fn compare_countries(&self, codes: &[&str]) -> Result<CountryComparison> {
        self.get_json("/countries/compare", &[("countries", codes.join(","))])
            .await
    }

    pub async fn athletes(&self, filter: &AthleteFilter) -> Result<Vec<Athlete>> {
        let mut query = Vec::new();
        if let Some(country) = &filter.country {
            query.push(("country", country.clone()));
        }
        if let Some(sport) = &filter.sport {
            query.push(("sport", sport.clone()));
        }
        if let Some(limit) = filter.limit {
            query.push(("limit", limit.to_string()));
        }
        self.get_json("/athletes", &query).await
    }

    pub async fn legends(&self) -> Result<Vec<Legend>> {
        self.get_json("/athletes/legends", &[]).await
    }

    pub async fn athlete_details(&self, id: i64) -> Result<AthleteDetail> {
        self.get_json(&format!("/athletes/{id}"), &[]).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let sent = self
            .http
            .get(&url)
            .query(query)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .and_then(|r| r.error_for_status());

        let response = match sent {
            Ok(r) => r,
            Err(e) => {
                tracing::error!("api error: GET {url}: {e}");
                return Err(e.into());
            }
        };

        match response.json::<T>().await {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!("api error: GET {url}: {e}");
                Err(e.into())
            }
        }
    }
}
