//! Read-only reports exposed by the detection server.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::http_error_message;
use crate::config::METRICS_UNAVAILABLE_MESSAGE;
use crate::{AppError, AppResult, GpuStatus};

/// Fetch the compute device report.
pub async fn fetch_gpu_status(endpoint: &str) -> AppResult<GpuStatus> {
    get_json(endpoint).await
}

/// Fetch the model metrics document.
///
/// The server answers 404 (or an `error` field) while no metrics have
/// been produced yet.
pub async fn fetch_metrics(endpoint: &str) -> AppResult<Value> {
    let metrics = match get_json::<Value>(endpoint).await {
        Err(AppError::HttpStatus(404)) => {
            return Err(AppError::Server(METRICS_UNAVAILABLE_MESSAGE.to_string()))
        }
        other => other?,
    };

    match metrics.get("error").and_then(Value::as_str) {
        Some(error) => Err(AppError::Server(error.to_string())),
        None => Ok(metrics),
    }
}

async fn get_json<T: DeserializeOwned>(endpoint: &str) -> AppResult<T> {
    let response = Request::get(endpoint)
        .send()
        .await
        .map_err(|e| AppError::Network(http_error_message(e)))?;

    if !response.ok() {
        return Err(AppError::HttpStatus(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| AppError::Parse(http_error_message(e)))
}

/// Flatten a metrics document into `(key, display value)` rows.
///
/// Nested objects use dotted keys. Fractions in `[0, 1]` are shown as
/// percentages; integers and other scalars verbatim.
pub fn flatten_metrics(metrics: &Value) -> Vec<(String, String)> {
    let mut rows = Vec::new();
    flatten_into(&mut rows, String::new(), metrics);
    rows
}

fn flatten_into(rows: &mut Vec<(String, String)>, key: String, value: &Value) {
    match value {
        Value::Object(map) => {
            for (name, child) in map {
                let child_key = if key.is_empty() {
                    name.clone()
                } else {
                    format!("{}.{}", key, name)
                };
                flatten_into(rows, child_key, child);
            }
        }
        other => rows.push((key, display_scalar(other))),
    }
}

fn display_scalar(value: &Value) -> String {
    match value {
        Value::Null => "--".to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) if (0.0..=1.0).contains(&f) => format!("{:.1}%", f * 100.0),
            Some(f) => format!("{:.4}", f),
            None => n.to_string(),
        },
        Value::Array(items) => items
            .iter()
            .map(display_scalar)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
