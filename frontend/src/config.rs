//! Application configuration.
//!
//! Centralized configuration for the detector frontend. The page is served
//! by the detection server itself, so every endpoint is a same-origin path.

/// Detection endpoint.
///
/// Receives the upload as multipart field [`UPLOAD_FIELD`].
pub const DETECT_ENDPOINT: &str = "/detect";

/// Multipart field name carrying the uploaded file.
pub const UPLOAD_FIELD: &str = "file";

/// Compute device report of the detection server.
pub const GPU_STATUS_ENDPOINT: &str = "/api/gpu-status";

/// Model evaluation metrics.
pub const METRICS_ENDPOINT: &str = "/api/metrics";

/// Client-side route of the metrics dashboard.
///
/// Must not collide with a detection server route (it serves its own
/// `/dashboard` template).
pub const DASHBOARD_ROUTE: &str = "/metrics";

/// Application name, shown in the header and the document title.
pub const APP_NAME: &str = "Deepfake Detector";

/// Maximum file size for upload (in megabytes).
pub const MAX_FILE_SIZE_MB: f64 = 50.0;

/// File picker hint. The server decides what it actually accepts.
pub const ACCEPTED_EXTENSIONS: &str = ".png,.jpg,.jpeg,.mp4";

/// Delay between two GPU status refreshes (in milliseconds).
pub const GPU_STATUS_POLL_MS: u32 = 30_000;

/// Shown when a file is over [`MAX_FILE_SIZE_MB`].
pub const FILE_TOO_LARGE_MESSAGE: &str = "File size exceeds 50MB limit";

/// Shown for any non-2xx response from the detection endpoint.
pub const BAD_STATUS_MESSAGE: &str = "Network response was not ok";

/// Shown when a failure carries no message of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred during analysis";

/// Shown when the metrics endpoint has nothing to report.
pub const METRICS_UNAVAILABLE_MESSAGE: &str = "Metrics not available";
