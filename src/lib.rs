use std::sync::Arc;

pub mod catalog;
pub mod client {
    pub mod api;
    pub mod pages;
    pub mod view;
}
pub mod config;
pub mod domain {
    pub mod athlete;
    pub mod country;
    pub mod prediction;
    pub mod stats;
}
pub mod http {
    pub mod error;
    pub mod handlers {
        pub mod athletes;
        pub mod countries;
        pub mod ml;
        pub mod ops;
        pub mod predictions;
        pub mod stats;
    }
    pub mod middleware {
        pub mod request_log;
    }
    pub mod router;
}
pub mod ml {
    pub mod client;
}
pub mod storage;

#[derive(Clone)]
pub struct AppState {
    pub config: config::AppConfig,
    pub stats: Arc<dyn catalog::StatsCatalog>,
    pub countries: Arc<dyn catalog::CountryCatalog>,
    pub athletes: Arc<dyn catalog::AthleteCatalog>,
    pub predictions: Arc<dyn catalog::PredictionCatalog>,
    pub ml: ml::client::MlClient,
    pub storage: Arc<dyn storage::StorageBackend>,
}
