//! HTTP service uploading media to the detection endpoint.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use super::{http_error_message, js_error_message};
use crate::config::UPLOAD_FIELD;
use crate::{AppError, AppResult, DetectionResult};

/// Upload a file for analysis.
///
/// Sends one multipart `POST` with the file under [`UPLOAD_FIELD`]. A non-2xx
/// status fails without reading the body; a 2xx body is returned as parsed,
/// including an in-band `error` field.
pub async fn detect(file: &File, endpoint: &str) -> AppResult<DetectionResult> {
    let form_data = FormData::new().map_err(|e| AppError::Request(js_error_message(&e)))?;

    form_data
        .append_with_blob(UPLOAD_FIELD, file)
        .map_err(|e| AppError::Request(js_error_message(&e)))?;

    let request = Request::post(endpoint)
        .body(form_data)
        .map_err(|e| AppError::Request(http_error_message(e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(http_error_message(e)))?;

    if !response.ok() {
        return Err(AppError::HttpStatus(response.status()));
    }

    response
        .json::<DetectionResult>()
        .await
        .map_err(|e| AppError::Parse(http_error_message(e)))
}
