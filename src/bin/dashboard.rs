use anyhow::Result;
use olympics_gateway::client::api::ApiClient;
use olympics_gateway::client::pages;
use olympics_gateway::client::view;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let base = std::env::var("GATEWAY_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());
    let api = ApiClient::new(format!("{base}/api"));

    let home = pages::load_home(&api).await?;
    tracing::info!(
        "overview: {} medals, {} athletes, {} countries, {} events",
        home.overview.total_medals,
        home.overview.total_athletes,
        home.overview.total_countries,
        home.overview.total_events
    );

    let statistics = pages::load_statistics(&api).await?;
    tracing::info!(
        "statistics: {} years of medal data, {} top sports, {} hosts, {} historic events",
        statistics.medals_by_year.len(),
        statistics.top_sports.len(),
        statistics.host_countries.len(),
        statistics.historic_events.len()
    );

    let france = pages::load_france(&api).await?;
    tracing::info!(
        "france: {} medals all-time, best year {} ({} medals)",
        france.stats.total_medals,
        france.stats.best_year.year,
        france.stats.best_year.medals
    );

    let athletes = pages::load_athletes(&api).await?;
    let first_page = view::visible(&athletes.athletes, false, view::LONG_WINDOW);
    tracing::info!(
        "athletes: showing {} of {}, {} legends",
        first_page.len(),
        athletes.athletes.len(),
        athletes.legends.len()
    );

    let predictions = pages::load_predictions(&api).await?;
    tracing::info!(
        "paris 2024: France predicted {} medals (rank {}), {} in table, {} models",
        predictions.paris2024.france.total,
        predictions.paris2024.france.rank,
        predictions.paris2024.top25.len(),
        predictions.models.len()
    );

    Ok(())
}
