//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **API Types** - Review service response structures
//! - **Report Types** - Classified review data for display
//! - **UI State** - The single page-level state machine
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// API Response Types
// =============================================================================

/// Response from a review endpoint.
///
/// The service returns at most one of `previews` (per-file summaries) or
/// `llm_summary` (one combined summary); both may also be absent. Extra
/// fields the service adds over time are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewResponse {
    /// Server-issued report identifier
    pub report_id: String,
    /// Filenames processed, in the order the service handled them
    pub files: Vec<String>,
    /// Per-file AI previews, keyed by filename
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previews: Option<BTreeMap<String, FilePreview>>,
    /// Combined AI summary covering all files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llm_summary: Option<String>,
}

/// Per-file preview entry inside [`ReviewResponse::previews`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilePreview {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llm_summary: Option<String>,
}

// =============================================================================
// Report Types
// =============================================================================

/// AI summary attached to a report, decided once when the response is parsed.
#[derive(Clone, Debug, PartialEq)]
pub enum Summary {
    /// One summary per reviewed file
    PerFile(Vec<FileSummary>),
    /// One combined summary for the whole submission
    Single(String),
    /// The service returned no summary at all
    None,
}

/// A single per-file summary entry.
#[derive(Clone, Debug, PartialEq)]
pub struct FileSummary {
    /// Filename as reported by the service
    pub filename: String,
    /// Summary text; `None` renders as the "No summary" fallback
    pub summary: Option<String>,
}

/// A completed review, ready for display.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewReport {
    /// Server-issued report identifier
    pub report_id: String,
    /// Filenames processed
    pub files: Vec<String>,
    /// Classified summary payload
    pub summary: Summary,
}

impl ReviewReport {
    /// Comma-joined file list for the "Files processed" line.
    pub fn files_line(&self) -> String {
        self.files.join(", ")
    }
}

impl From<ReviewResponse> for ReviewReport {
    fn from(response: ReviewResponse) -> Self {
        // A present-but-empty previews object still selects per-file mode;
        // the two summary fields are never combined.
        let summary = match (response.previews, response.llm_summary) {
            (Some(previews), _) => Summary::PerFile(
                previews
                    .into_iter()
                    .map(|(filename, preview)| FileSummary {
                        filename,
                        summary: preview.llm_summary,
                    })
                    .collect(),
            ),
            (None, Some(text)) => Summary::Single(text),
            (None, None) => Summary::None,
        };

        ReviewReport {
            report_id: response.report_id,
            files: response.files,
            summary,
        }
    }
}

// =============================================================================
// UI State
// =============================================================================

/// Page-level state for the review flow.
///
/// The results area is a pure function of this value: every transition
/// replaces it wholesale, nothing is patched in place.
#[derive(Clone, Debug, PartialEq)]
pub enum UiState {
    /// Nothing submitted yet
    Idle,
    /// A submission is in flight
    Loading,
    /// The last submission produced a report
    Success(ReviewReport),
    /// The last submission failed
    Error(AppError),
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// The service answered with a non-2xx status; payload is the raw body
    Server(String),
    /// The request never completed (network failure)
    Network(String),
    /// The response body was not valid report JSON
    Decode(String),
    /// The multipart body could not be built
    Upload(String),
}

impl AppError {
    /// Raw text shown on the error card.
    pub fn message(&self) -> &str {
        match self {
            AppError::Server(msg)
            | AppError::Network(msg)
            | AppError::Decode(msg)
            | AppError::Upload(msg) => msg,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Server(msg) => write!(f, "Server error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Decode(msg) => write!(f, "Decode error: {}", msg),
            AppError::Upload(msg) => write!(f, "Upload error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn preview(summary: Option<&str>) -> FilePreview {
        FilePreview {
            llm_summary: summary.map(str::to_string),
        }
    }

    #[test]
    fn per_file_previews_classify_as_per_file() {
        let mut previews = BTreeMap::new();
        previews.insert("a.py".to_string(), preview(Some("ok")));

        let report = ReviewReport::from(ReviewResponse {
            report_id: "r1".to_string(),
            files: vec!["a.py".to_string()],
            previews: Some(previews),
            llm_summary: None,
        });

        assert_eq!(report.report_id, "r1");
        assert_eq!(report.files_line(), "a.py");
        assert_eq!(
            report.summary,
            Summary::PerFile(vec![FileSummary {
                filename: "a.py".to_string(),
                summary: Some("ok".to_string()),
            }])
        );
    }

    #[test]
    fn missing_per_file_summary_is_kept_as_none() {
        let mut previews = BTreeMap::new();
        previews.insert("a.py".to_string(), preview(None));

        let report = ReviewReport::from(ReviewResponse {
            report_id: "r2".to_string(),
            files: vec!["a.py".to_string()],
            previews: Some(previews),
            llm_summary: None,
        });

        match report.summary {
            Summary::PerFile(entries) => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].filename, "a.py");
                assert_eq!(entries[0].summary, None);
            }
            other => panic!("expected per-file summary, got {:?}", other),
        }
    }

    #[test]
    fn combined_summary_classifies_as_single() {
        let report = ReviewReport::from(ReviewResponse {
            report_id: "r3".to_string(),
            files: vec!["a.py".to_string(), "b.py".to_string()],
            previews: None,
            llm_summary: Some("combined ok".to_string()),
        });

        assert_eq!(report.files_line(), "a.py, b.py");
        assert_eq!(report.summary, Summary::Single("combined ok".to_string()));
    }

    #[test]
    fn empty_previews_object_still_wins_over_combined_summary() {
        let report = ReviewReport::from(ReviewResponse {
            report_id: "r4".to_string(),
            files: vec![],
            previews: Some(BTreeMap::new()),
            llm_summary: Some("ignored".to_string()),
        });

        assert_eq!(report.summary, Summary::PerFile(vec![]));
    }

    #[test]
    fn absent_summaries_classify_as_none() {
        let report = ReviewReport::from(ReviewResponse {
            report_id: "r5".to_string(),
            files: vec!["a.py".to_string()],
            previews: None,
            llm_summary: None,
        });

        assert_eq!(report.summary, Summary::None);
    }

    #[test]
    fn per_file_entries_come_out_in_filename_order() {
        let mut previews = BTreeMap::new();
        previews.insert("b.py".to_string(), preview(Some("second")));
        previews.insert("a.py".to_string(), preview(Some("first")));

        let report = ReviewReport::from(ReviewResponse {
            report_id: "r6".to_string(),
            files: vec!["b.py".to_string(), "a.py".to_string()],
            previews: Some(previews),
            llm_summary: None,
        });

        match report.summary {
            Summary::PerFile(entries) => {
                let names: Vec<&str> =
                    entries.iter().map(|e| e.filename.as_str()).collect();
                assert_eq!(names, vec!["a.py", "b.py"]);
            }
            other => panic!("expected per-file summary, got {:?}", other),
        }
    }

    #[test]
    fn error_card_text_is_the_raw_message() {
        let err = AppError::Server("internal error".to_string());
        assert_eq!(err.message(), "internal error");
        assert_eq!(err.to_string(), "Server error: internal error");

        let err = AppError::Network("Failed to fetch".to_string());
        assert_eq!(err.message(), "Failed to fetch");
    }

    #[test]
    fn equal_reports_are_equal_render_inputs() {
        let make = || {
            ReviewReport::from(ReviewResponse {
                report_id: "r1".to_string(),
                files: vec!["a.py".to_string()],
                previews: None,
                llm_summary: Some("ok".to_string()),
            })
        };
        assert_eq!(make(), make());
        assert_eq!(UiState::Success(make()), UiState::Success(make()));
    }
}
