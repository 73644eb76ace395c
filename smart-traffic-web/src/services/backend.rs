use serde::de::DeserializeOwned;
use smart_traffic_core::{
    ApiError, AppConfig, ModelMetrics, ModelsResponse, Prediction, PredictionRequest,
    PredictionResponse,
};
use wasm_bindgen::JsValue;
use web_sys::Response;

use crate::dom;

fn network(err: &JsValue) -> ApiError {
    ApiError::Network(dom::js_error_message(err))
}

#[allow(clippy::future_not_send)]
async fn decode<T: DeserializeOwned>(response: &Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    let value = dom::response_json(response)
        .await
        .map_err(|err| network(&err))?;
    serde_wasm_bindgen::from_value(value).map_err(|err| ApiError::Decode(err.to_string()))
}

/// POST the prediction form to the backend.
///
/// # Errors
/// Returns [`ApiError::Status`] for non-2xx replies, [`ApiError::Backend`]
/// when the backend reports failure, and network/decode errors otherwise.
#[allow(clippy::future_not_send)]
pub async fn predict(cfg: &AppConfig, request: &PredictionRequest) -> Result<Prediction, ApiError> {
    let body = serde_json::to_string(request)?;
    let response = dom::post_json(&cfg.api_url("predict"), &body)
        .await
        .map_err(|err| network(&err))?;
    decode::<PredictionResponse>(&response)
        .await?
        .into_prediction()
}

/// Fetch evaluation metrics for the trained models.
///
/// # Errors
/// Same failure modes as [`predict`].
#[allow(clippy::future_not_send)]
pub async fn models(cfg: &AppConfig) -> Result<Vec<ModelMetrics>, ApiError> {
    let response = dom::fetch_response(&cfg.api_url("models"))
        .await
        .map_err(|err| network(&err))?;
    decode::<ModelsResponse>(&response).await?.into_models()
}
