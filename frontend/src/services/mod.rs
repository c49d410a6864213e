//! Detection server services.
//!
//! This module provides services for talking to the detection server:
//!
//! # Services
//!
//! - [`detect`] - Media upload to the `/detect` endpoint
//! - [`status`] - GPU status and model metrics reports

pub mod detect;
pub mod status;

pub use detect::*;
pub use status::*;

use wasm_bindgen::JsValue;

/// Extract the `message` of a thrown JS error, or its string form.
///
/// Returns an empty string when the value carries neither, so the caller's
/// error falls back to the generic message.
pub(crate) fn js_error_message(value: &JsValue) -> String {
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_default()
}

/// Message of a `gloo-net` failure.
///
/// A thrown JS error is reduced to its `message` (`Failed to fetch`), not its
/// `String(err)` form (`TypeError: Failed to fetch`).
pub(crate) fn http_error_message(error: gloo_net::Error) -> String {
    match error {
        gloo_net::Error::JsError(js) => js.message,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message_keeps_gloo_text() {
        let error = gloo_net::Error::GlooError("Body already consumed".to_string());
        assert_eq!(http_error_message(error), "Body already consumed");
    }

    #[test]
    fn test_http_error_message_keeps_parse_text() {
        let parse = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let expected = parse.to_string();
        assert_eq!(
            http_error_message(gloo_net::Error::SerdeError(parse)),
            expected
        );
    }

    #[test]
    fn test_empty_message_falls_back_in_error_block() {
        let error = crate::AppError::Network(String::new());
        assert_eq!(error.to_string(), "An error occurred during analysis");
    }
}
