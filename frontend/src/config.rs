//! Application configuration.
//!
//! Centralized configuration for the reviewer frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Review service base URL.
///
/// The Agentic Code Reviewer API server.
pub const BACKEND_URL: &str = "http://localhost:8000";

/// Single/multi-file review endpoint (first selected file is reviewed).
pub const REVIEW_ENDPOINT: &str = "/api/review";

/// Combined review endpoint (all selected files in one report).
pub const REVIEW_MULTI_ENDPOINT: &str = "/api/review-multi";

/// ZIP archive review endpoint.
pub const REVIEW_ZIP_ENDPOINT: &str = "/api/review-zip";

/// Latest PDF report download endpoint.
///
/// Linked from the result card; fetched by the browser, never by this app.
pub const DOWNLOAD_LATEST_ENDPOINT: &str = "/api/download-latest";

/// Multipart field name for source file uploads.
pub const FILES_FIELD: &str = "files";

/// Multipart field name for ZIP archive uploads.
pub const ZIP_FIELD: &str = "zip_file";

/// Application name shown in the header.
pub const APP_NAME: &str = "Agentic Code Reviewer";
