use serde_json::Value;
use std::time::Duration;

const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);
const PREDICT_TIMEOUT: Duration = Duration::from_secs(10);
const RETRAIN_TIMEOUT: Duration = Duration::from_secs(60);

// Every call normalizes into the upstream JSON body, a status the upstream
// itself returned, or an unreachable transport failure; handlers map each
// case to a distinct response.
#[derive(Clone)]
pub struct MlClient {
    pub base_url: String,
    pub client: reqwest::Client,
}

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("upstream responded with status {code}")]
    Status { code: u16, body: Value },
    #[error("upstream unreachable: {0}")]
    Unreachable(String),
}

pub type UpstreamResult = Result<Value, UpstreamError>;

impl MlClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub async fn health(&self) -> UpstreamResult {
        self.get("/api/ml/health", HEALTH_TIMEOUT).await
    }

    pub async fn predict_paris2024(&self) -> UpstreamResult {
        self.get("/api/ml/predict/paris2024", PREDICT_TIMEOUT).await
    }

    pub async fn predict_country(&self, name: &str) -> UpstreamResult {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| UpstreamError::Unreachable(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| UpstreamError::Unreachable("invalid ml api base url".to_string()))?
            .pop_if_empty()
            .extend(["api", "ml", "predict", "country", name]);

        let resp = self.client.get(url).timeout(HEALTH_TIMEOUT).send().await;
        normalize(resp).await
    }

    pub async fn models_info(&self) -> UpstreamResult {
        self.get("/api/ml/models/info", HEALTH_TIMEOUT).await
    }

    pub async fn retrain(&self, body: Value) -> UpstreamResult {
        let resp = self
            .client
            .post(format!("{}/api/ml/retrain", self.base_url))
            .json(&body)
            .timeout(RETRAIN_TIMEOUT)
            .send()
            .await;
        normalize(resp).await
    }

    async fn get(&self, path: &str, timeout: Duration) -> UpstreamResult {
        let resp = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .timeout(timeout)
            .send()
            .await;
        normalize(resp).await
    }
}

async fn normalize(resp: Result<reqwest::Response, reqwest::Error>) -> UpstreamResult {
    match resp {
        Ok(r) if r.status().is_success() => r
            .json::<Value>()
            .await
            .map_err(|e| UpstreamError::Unreachable(e.to_string())),
        Ok(r) => {
            let code = r.status().as_u16();
            let body = r.json::<Value>().await.unwrap_or_default();
            Err(UpstreamError::Status { code, body })
        }
        Err(e) => Err(UpstreamError::Unreachable(e.to_string())),
    }
}
