//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Upload Types** - The file the user picked
//! - **API Types** - Detection server response structures
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::config::{BAD_STATUS_MESSAGE, FALLBACK_ERROR_MESSAGE, FILE_TOO_LARGE_MESSAGE};

// =============================================================================
// Upload Types
// =============================================================================

/// Name and size of the file currently chosen for analysis.
///
/// The browser `File` handle itself stays in the component; this is the
/// part the panel logic reasons about.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    /// File name as reported by the browser
    pub name: String,
    /// Size in bytes
    pub size: f64,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: f64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Size in megabytes (bytes / 1024 / 1024).
    pub fn size_mb(&self) -> f64 {
        self.size / 1024.0 / 1024.0
    }
}

impl From<&web_sys::File> for SelectedFile {
    fn from(file: &web_sys::File) -> Self {
        Self::new(file.name(), file.size())
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Response body of `POST /detect`.
///
/// Every field is optional on the wire: an in-band failure only carries
/// `error`, and the remaining fields then take their defaults. An explicit
/// `null` counts as missing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionResult {
    /// Set when the server rejected or failed to analyze the upload
    pub error: Option<String>,
    /// Verdict of the detector
    #[serde(deserialize_with = "null_as_default")]
    pub is_deepfake: bool,
    /// Human readable verdict
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    /// Fraction in [0, 1]
    #[serde(deserialize_with = "null_as_default")]
    pub confidence: f64,
    /// Annotated image produced by the detector
    pub result_path: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl DetectionResult {
    /// In-band error message, ignoring an empty string.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }

    /// Annotated image path, ignoring an empty string.
    pub fn image_path(&self) -> Option<&str> {
        self.result_path.as_deref().filter(|p| !p.is_empty())
    }
}

/// Response body of `GET /api/gpu-status`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GpuStatus {
    pub gpu_available: bool,
    /// Torch device string, e.g. `cuda` or `cpu`
    pub device: String,
    #[serde(default)]
    pub memory_used: Option<String>,
    #[serde(default)]
    pub memory_total: Option<String>,
}

impl GpuStatus {
    /// Short badge text, e.g. `cuda · 1.2GB / 8.0GB`.
    pub fn label(&self) -> String {
        match (&self.memory_used, &self.memory_total) {
            (Some(used), Some(total)) if self.gpu_available => {
                format!("{} · {} / {}", self.device, used, total)
            }
            _ => self.device.clone(),
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// `Display` yields the exact text shown to the user in the error block.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AppError {
    /// File is over the upload size limit.
    #[error("{}", FILE_TOO_LARGE_MESSAGE)]
    FileTooLarge,
    /// Server answered with a non-2xx status; the body is not inspected.
    #[error("{}", BAD_STATUS_MESSAGE)]
    HttpStatus(u16),
    /// The request never produced a response.
    #[error("{}", or_fallback(.0))]
    Network(String),
    /// Response body was not the expected JSON.
    #[error("{}", or_fallback(.0))]
    Parse(String),
    /// Request could not be built.
    #[error("{}", or_fallback(.0))]
    Request(String),
    /// Server reported a failure in the response body.
    #[error("{}", or_fallback(.0))]
    Server(String),
}

fn or_fallback(message: &str) -> &str {
    if message.is_empty() {
        FALLBACK_ERROR_MESSAGE
    } else {
        message
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
