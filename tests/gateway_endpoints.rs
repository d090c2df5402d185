use olympics_gateway::catalog::athletes::StaticAthletes;
use olympics_gateway::catalog::countries::StaticCountries;
use olympics_gateway::catalog::predictions::StaticPredictions;
use olympics_gateway::catalog::stats::StaticStats;
use olympics_gateway::client::api::ApiClient;
use olympics_gateway::config::{AppConfig, DatabaseConfig};
use olympics_gateway::domain::athlete::AthleteFilter;
use olympics_gateway::http::router::build_router;
use olympics_gateway::ml::client::MlClient;
use olympics_gateway::{storage, AppState};
use std::sync::Arc;

fn test_config(ml_api_url: &str) -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        environment: "test".to_string(),
        db: DatabaseConfig {
            kind: "mysql".to_string(),
            host: "localhost".to_string(),
            port: 3306,
            user: "olympics".to_string(),
            password: String::new(),
            name: "olympics".to_string(),
        },
        ml_api_url: ml_api_url.to_string(),
    }
}

async fn spawn_gateway() -> String {
    let cfg = test_config("http://127.0.0.1:1");
    let state = AppState {
        stats: Arc::new(StaticStats::new()),
        countries: Arc::new(StaticCountries::new()),
        athletes: Arc::new(StaticAthletes::new()),
        predictions: Arc::new(StaticPredictions::new()),
        ml: MlClient::new(cfg.ml_api_url.clone()),
        storage: storage::connect(&cfg.db).unwrap(),
        config: cfg,
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, build_router(state)).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn overview_returns_global_totals() {
    let base = spawn_gateway().await;
    let api = ApiClient::new(format!("{base}/api"));

    let overview = api.overview_stats().await.unwrap();
    assert_eq!(overview.total_countries, 206);
    assert!(overview.total_medals > 0);
}

#[tokio::test]
async fn unknown_query_params_are_ignored() {
    let base = spawn_gateway().await;

    let plain = reqwest::get(format!("{base}/api/athletes?country=USA"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    let extra = reqwest::get(format!(
        "{base}/api/athletes?country=USA&frobnicate=1&debug=true"
    ))
    .await
    .unwrap()
    .text()
    .await
    .unwrap();

    assert_eq!(plain, extra);
}

#[tokio::test]
async fn repeated_gets_are_byte_identical() {
    let base = spawn_gateway().await;

    for path in [
        "/api/stats/overview",
        "/api/countries/FRA",
        "/api/predictions/paris2024",
        "/api/athletes?limit=5",
    ] {
        let first = reqwest::get(format!("{base}{path}"))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        let second = reqwest::get(format!("{base}{path}"))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(first, second, "{path} changed between reads");
    }
}

#[tokio::test]
async fn france_detail_medal_counts_are_consistent() {
    let base = spawn_gateway().await;
    let api = ApiClient::new(format!("{base}/api"));

    let france = api.country_details("FRA").await.unwrap();
    assert_eq!(france.gold + france.silver + france.bronze, france.total_medals);
    assert_eq!(france.total_medals, 840);
}

#[tokio::test]
async fn country_lookup_is_case_insensitive() {
    let base = spawn_gateway().await;
    let api = ApiClient::new(format!("{base}/api"));

    let detail = api.country_details("fra").await.unwrap();
    assert_eq!(detail.code, "FRA");
}

#[tokio::test]
async fn unknown_country_returns_404_naming_the_code() {
    let base = spawn_gateway().await;

    let resp = reqwest::get(format!("{base}/api/countries/XYZ")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "country not found");
    assert!(body["message"].as_str().unwrap().contains("XYZ"));
}

#[tokio::test]
async fn paris2024_prediction_is_internally_consistent() {
    let base = spawn_gateway().await;
    let api = ApiClient::new(format!("{base}/api"));

    let predictions = api.paris2024_predictions().await.unwrap();
    let france = &predictions.france;
    assert_eq!(france.gold + france.silver + france.bronze, france.total);
    assert_eq!(france.total, 76);
    assert_eq!(predictions.top25[0].rank, 1);
}

#[tokio::test]
async fn athlete_filters_and_limit_apply() {
    let base = spawn_gateway().await;
    let api = ApiClient::new(format!("{base}/api"));

    let all = api.athletes(&AthleteFilter::default()).await.unwrap();
    assert!(all.len() >= 10);

    let limited = api
        .athletes(&AthleteFilter {
            limit: Some(3),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(limited.len(), 3);

    let usa_swimmers = api
        .athletes(&AthleteFilter {
            country: Some("USA".to_string()),
            sport: Some("Swimming".to_string()),
            limit: None,
        })
        .await
        .unwrap();
    assert!(!usa_swimmers.is_empty());
    assert!(usa_swimmers
        .iter()
        .all(|a| a.country == "USA" && a.sport == "Swimming"));
}

#[tokio::test]
async fn medals_by_year_filters_by_country() {
    let base = spawn_gateway().await;
    let api = ApiClient::new(format!("{base}/api"));

    let france = api.medals_by_year(Some("FRA")).await.unwrap();
    let global = api.medals_by_year(None).await.unwrap();

    let year_1900 = france.iter().find(|y| y.year == 1900).unwrap();
    assert_eq!(year_1900.gold + year_1900.silver + year_1900.bronze, 101);
    assert_ne!(
        serde_json::to_string(&france).unwrap(),
        serde_json::to_string(&global).unwrap()
    );
}

#[tokio::test]
async fn compare_keeps_only_requested_codes() {
    let base = spawn_gateway().await;
    let api = ApiClient::new(format!("{base}/api"));

    let comparison = api.compare_countries(&["FRA", "USA"]).await.unwrap();
    assert_eq!(comparison.countries, vec!["FRA", "USA"]);
    assert_eq!(comparison.data.len(), 2);

    let everything = api.compare_countries(&[]).await.unwrap();
    assert_eq!(everything.data.len(), 3);
}

#[tokio::test]
async fn unmatched_routes_return_the_404_envelope() {
    let base = spawn_gateway().await;

    let resp = reqwest::get(format!("{base}/api/nope")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "route not found");
}

#[tokio::test]
async fn index_describes_the_api() {
    let base = spawn_gateway().await;

    let body: serde_json::Value = reqwest::get(format!("{base}/"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["message"], "Olympics Analytics API");
    assert_eq!(body["endpoints"]["stats"], "/api/stats");
}

#[tokio::test]
async fn liveness_always_answers() {
    let base = spawn_gateway().await;

    let resp = reqwest::get(format!("{base}/ops/liveness")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}
