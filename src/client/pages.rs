use crate::client::api::ApiClient;
use crate::domain::athlete::{Athlete, AthleteFilter, Legend};
use crate::domain::prediction::{AthletePrediction, Clustering, ModelInfo, Paris2024Predictions};
use crate::domain::stats::{
    FranceStats, HistoricEvent, HostCountry, OverviewStats, TopSport, YearMedals,
};
use anyhow::Result;

// Each page fires its whole batch concurrently and joins on all of it. A
// single failed call fails the page load; there is no partial rendering.

pub struct HomePage {
    pub overview: OverviewStats,
}

pub struct StatisticsPage {
    pub medals_by_year: Vec<YearMedals>,
    pub top_sports: Vec<TopSport>,
    pub host_countries: Vec<HostCountry>,
    pub historic_events: Vec<HistoricEvent>,
}

pub struct FrancePage {
    pub stats: FranceStats,
    pub medals_by_year: Vec<YearMedals>,
}

pub struct AthletesPage {
    pub athletes: Vec<Athlete>,
    pub legends: Vec<Legend>,
}

pub struct PredictionsPage {
    pub paris2024: Paris2024Predictions,
    pub athletes: Vec<AthletePrediction>,
    pub clustering: Clustering,
    pub models: Vec<ModelInfo>,
}

pub async fn load_home(api: &ApiClient) -> Result<HomePage> {
    let overview = api.overview_stats().await?;
    Ok(HomePage { overview })
}

pub async fn load_statistics(api: &ApiClient) -> Result<StatisticsPage> {
    let (medals_by_year, top_sports, host_countries, historic_events) = tokio::try_join!(
        api.medals_by_year(Some("FRA")),
        api.top_sports(),
        api.host_countries(),
        api.historic_events(),
    )?;

    Ok(StatisticsPage {
        medals_by_year,
        top_sports,
        host_countries,
        historic_events,
    })
}

pub async fn load_france(api: &ApiClient) -> Result<FrancePage> {
    let (stats, medals_by_year) =
        tokio::try_join!(api.france_stats(), api.medals_by_year(Some("FRA")))?;

    Ok(FrancePage {
        stats,
        medals_by_year,
    })
}

pub async fn load_athletes(api: &ApiClient) -> Result<AthletesPage> {
    let filter = AthleteFilter::default();
    let (athletes, legends) = tokio::try_join!(api.athletes(&filter), api.legends())?;

    Ok(AthletesPage { athletes, legends })
}

pub async fn load_predictions(api: &ApiClient) -> Result<PredictionsPage> {
    let (paris2024, athletes, clustering, models) = tokio::try_join!(
        api.paris2024_predictions(),
        api.athlete_predictions(),
        api.clustering(),
        api.models_comparison(),
    )?;

    Ok(PredictionsPage {
        paris2024,
        athletes,
        clustering,
        models,
    })
}
