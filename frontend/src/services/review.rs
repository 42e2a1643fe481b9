//! HTTP service for submitting files to the review API.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::types::{AppError, AppResult, ReviewReport, ReviewResponse};

/// Submit files to a review endpoint as one multipart POST.
///
/// Every file is attached under `field_name`, matching what the endpoint
/// expects (`files` for source uploads, `zip_file` for archives). The caller
/// guarantees `files` is non-empty.
///
/// A 2xx answer is parsed as [`ReviewResponse`] and classified into a
/// [`ReviewReport`]; anything else becomes an [`AppError`] carrying the text
/// to show on the error card.
pub async fn submit_review(
    endpoint: &str,
    field_name: &str,
    files: Vec<File>,
    backend_url: &str,
) -> AppResult<ReviewReport> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Upload(format!("Failed to create FormData: {:?}", e)))?;

    for file in &files {
        form_data
            .append_with_blob(field_name, file)
            .map_err(|e| AppError::Upload(format!("Failed to append file: {:?}", e)))?;
    }

    let url = format!("{}{}", backend_url, endpoint);
    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| AppError::Upload(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if !response.ok() {
        // The card shows the body verbatim; the status only goes to the console.
        log::warn!("Review request to {} failed with status {}", url, response.status());
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AppError::Server(error_text));
    }

    let parsed = response
        .json::<ReviewResponse>()
        .await
        .map_err(|e| AppError::Decode(format!("Failed to parse response: {}", e)))?;

    Ok(ReviewReport::from(parsed))
}

#[cfg(test)]
mod tests {
    use crate::types::{ReviewReport, ReviewResponse, Summary};

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "report_id": "r1",
            "files": ["a.py"],
            "previews": {
                "a.py": { "llm_summary": "ok" }
            }
        }"#;

        let response: ReviewResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.report_id, "r1");
        assert_eq!(response.files, vec!["a.py"]);

        let previews = response.previews.as_ref().unwrap();
        assert_eq!(
            previews["a.py"].llm_summary.as_deref(),
            Some("ok")
        );
        assert!(response.llm_summary.is_none());
    }

    #[test]
    fn test_combined_summary_deserialization() {
        let json = r#"{
            "report_id": "r3",
            "files": ["a.py", "b.py"],
            "llm_summary": "combined ok"
        }"#;

        let response: ReviewResponse = serde_json::from_str(json).unwrap();
        assert!(response.previews.is_none());
        assert_eq!(response.llm_summary.as_deref(), Some("combined ok"));

        let report = ReviewReport::from(response);
        assert_eq!(report.summary, Summary::Single("combined ok".to_string()));
    }

    #[test]
    fn test_summaryless_response_deserialization() {
        let json = r#"{
            "report_id": "r5",
            "files": ["a.py"]
        }"#;

        let response: ReviewResponse = serde_json::from_str(json).unwrap();
        let report = ReviewReport::from(response);
        assert_eq!(report.summary, Summary::None);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        // The service also returns bookkeeping fields the card never shows.
        let json = r#"{
            "status": "success",
            "report_id": "r1",
            "files": ["a.py"],
            "pdf_report": "/tmp/report_r1.pdf",
            "llm_summary": "ok"
        }"#;

        let response: ReviewResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.report_id, "r1");
    }

    #[test]
    fn test_missing_required_fields_fail_to_parse() {
        let missing_report_id = r#"{ "files": ["a.py"] }"#;
        assert!(serde_json::from_str::<ReviewResponse>(missing_report_id).is_err());

        let missing_files = r#"{ "report_id": "r1" }"#;
        assert!(serde_json::from_str::<ReviewResponse>(missing_files).is_err());
    }
}
