use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use smart_traffic_core::{
    AppConfig, ModelsResponse, PredictionInput, PredictionRequest, PredictionResponse,
};

/// The two backend endpoints the UI depends on.
#[async_trait]
pub trait BackendClient {
    async fn models(&self) -> Result<ModelsResponse>;
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse>;
}

pub struct HttpBackend {
    client: reqwest::Client,
    config: AppConfig,
}

impl HttpBackend {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl BackendClient for HttpBackend {
    async fn models(&self) -> Result<ModelsResponse> {
        let url = self.config.api_url("models");
        log::debug!("GET {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {url}"))?
            .error_for_status()
            .with_context(|| format!("GET {url}"))?;
        response
            .json::<ModelsResponse>()
            .await
            .with_context(|| format!("decoding {url}"))
    }

    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse> {
        let url = self.config.api_url("predict");
        log::debug!("POST {url}");
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .with_context(|| format!("POST {url}"))?
            .error_for_status()
            .with_context(|| format!("POST {url}"))?;
        response
            .json::<PredictionResponse>()
            .await
            .with_context(|| format!("decoding {url}"))
    }
}

/// Weekday morning rush hour from Whitefield to MG Road.
pub fn rush_hour_sample(config: &AppConfig) -> Result<PredictionRequest> {
    let input = PredictionInput {
        origin: "Whitefield".to_string(),
        destination: "MG Road".to_string(),
        hour: 8,
        day_of_week: 1,
        ..PredictionInput::default()
    };
    Ok(input.to_request(config)?)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResult {
    pub check: String,
    pub passed: bool,
    pub detail: String,
}

impl ProbeResult {
    fn pass(check: &str, detail: impl Into<String>) -> Self {
        Self {
            check: check.to_string(),
            passed: true,
            detail: detail.into(),
        }
    }

    fn fail(check: &str, detail: impl Into<String>) -> Self {
        Self {
            check: check.to_string(),
            passed: false,
            detail: detail.into(),
        }
    }
}

fn check_models(response: Result<ModelsResponse>) -> ProbeResult {
    const CHECK: &str = "models";
    let models = match response.and_then(|body| Ok(body.into_models()?)) {
        Ok(models) => models,
        Err(err) => return ProbeResult::fail(CHECK, format!("{err:#}")),
    };
    if models.is_empty() {
        return ProbeResult::fail(CHECK, "no models reported");
    }
    if let Some(model) = models
        .iter()
        .find(|m| !(0.0..=100.0).contains(&m.accuracy))
    {
        return ProbeResult::fail(
            CHECK,
            format!("{} accuracy {} is outside 0-100", model.name, model.accuracy),
        );
    }
    let names: Vec<&str> = models.iter().map(|m| m.name.as_str()).collect();
    ProbeResult::pass(CHECK, format!("{} models: {}", models.len(), names.join(", ")))
}

fn check_prediction(response: Result<PredictionResponse>) -> ProbeResult {
    const CHECK: &str = "predict";
    let prediction = match response.and_then(|body| Ok(body.into_prediction()?)) {
        Ok(prediction) => prediction,
        Err(err) => return ProbeResult::fail(CHECK, format!("{err:#}")),
    };
    if prediction.predicted_traffic < 0.0 {
        return ProbeResult::fail(
            CHECK,
            format!("negative traffic {}", prediction.predicted_traffic),
        );
    }
    if !(0.0..=100.0).contains(&prediction.route_score) {
        return ProbeResult::fail(
            CHECK,
            format!("route score {} is outside 0-100", prediction.route_score),
        );
    }
    if prediction.traffic_level.traffic_level().is_none() {
        log::warn!(
            "unrecognised traffic level label {:?}",
            prediction.traffic_level.level
        );
    }
    ProbeResult::pass(
        CHECK,
        format!(
            "{} vehicles/h, score {}, {}",
            prediction.traffic_value(),
            prediction.score_text(),
            prediction.traffic_level.text()
        ),
    )
}

/// Run every contract check; a failed request is a failed check, not an error.
pub async fn run_probe<C: BackendClient + Sync>(
    client: &C,
    config: &AppConfig,
) -> Result<Vec<ProbeResult>> {
    let request = rush_hour_sample(config)?;
    let models = check_models(client.models().await);
    let prediction = check_prediction(client.predict(&request).await);
    Ok(vec![models, prediction])
}

#[cfg(test)]
mod tests {
    use super::*;
    use smart_traffic_core::{LevelBadge, ModelMetrics};

    struct MockBackend {
        models: ModelsResponse,
        prediction: Option<PredictionResponse>,
    }

    #[async_trait]
    impl BackendClient for MockBackend {
        async fn models(&self) -> Result<ModelsResponse> {
            Ok(self.models.clone())
        }

        async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse> {
            assert_eq!(request.rush_hour, 1);
            self.prediction
                .clone()
                .ok_or_else(|| anyhow::anyhow!("connection refused"))
        }
    }

    fn healthy_models() -> ModelsResponse {
        ModelsResponse {
            success: true,
            models: vec![ModelMetrics {
                name: "Random Forest".to_string(),
                mae: 41.2,
                rmse: 58.9,
                r2: 0.91,
                accuracy: 91.0,
            }],
            error: None,
        }
    }

    fn healthy_prediction() -> PredictionResponse {
        PredictionResponse {
            success: true,
            predicted_traffic: Some(812.6),
            route_score: Some(64.0),
            traffic_level: Some(LevelBadge {
                level: "Heavy".to_string(),
                icon: String::new(),
                color: "#dc3545".to_string(),
            }),
            recommendations: vec!["Leave 20 minutes earlier".to_string()],
            error: None,
        }
    }

    #[test]
    fn sample_is_a_weekday_rush_hour() {
        let request = rush_hour_sample(&AppConfig::default_config()).unwrap();
        assert_eq!(request.hour, 8);
        assert_eq!(request.is_weekend, 0);
        assert_eq!(request.rush_hour, 1);
        assert_eq!(request.humidity, 60);
    }

    #[test]
    fn healthy_backend_passes_both_checks() {
        let backend = MockBackend {
            models: healthy_models(),
            prediction: Some(healthy_prediction()),
        };
        let results =
            tokio_test::block_on(run_probe(&backend, &AppConfig::default_config())).unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.passed), "{results:?}");
        assert!(results[1].detail.starts_with("812 vehicles/h"));
    }

    #[test]
    fn backend_failures_become_failed_checks() {
        let mut models = healthy_models();
        models.success = false;
        models.error = Some("models not trained".to_string());
        let backend = MockBackend {
            models,
            prediction: None,
        };
        let results =
            tokio_test::block_on(run_probe(&backend, &AppConfig::default_config())).unwrap();
        assert!(!results[0].passed);
        assert_eq!(results[0].detail, "models not trained");
        assert!(!results[1].passed);
        assert!(results[1].detail.contains("connection refused"));
    }

    #[test]
    fn out_of_range_score_fails() {
        let mut prediction = healthy_prediction();
        prediction.route_score = Some(140.0);
        let result = check_prediction(Ok(prediction));
        assert!(!result.passed);
        assert!(result.detail.contains("outside 0-100"));
    }
}
