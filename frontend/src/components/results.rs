//! Results area.
//!
//! Renders the current [`UiState`] into the results container. The whole
//! container content is swapped on every state change; the same state always
//! produces the same markup.

use leptos::*;

use crate::types::{AppError, FileSummary, ReviewReport, Summary, UiState};
use crate::{BACKEND_URL, DOWNLOAD_LATEST_ENDPOINT};

/// Fallback text for a file preview without a summary.
const NO_SUMMARY: &str = "No summary";

#[component]
pub fn ResultsSection(state: ReadSignal<UiState>) -> impl IntoView {
    view! {
        <div class="results" id="results">
            {move || match state.get() {
                UiState::Idle => ().into_view(),
                UiState::Loading => view! {
                    <div class="loading">"⏳ Analyzing your code... Please wait."</div>
                }
                .into_view(),
                UiState::Success(report) => view! { <ResultCard report=report/> }.into_view(),
                UiState::Error(err) => error_card(&err).into_view(),
            }}
        </div>
    }
}

/// Success card for a completed review.
#[component]
fn ResultCard(report: ReviewReport) -> impl IntoView {
    let download_url = format!("{}{}", BACKEND_URL, DOWNLOAD_LATEST_ENDPOINT);

    view! {
        <div class="result-card">
            <h3>"✅ Analysis complete"</h3>
            <p><strong>"Report ID: "</strong>{report.report_id.clone()}</p>
            <p><strong>"Files processed: "</strong>{report.files_line()}</p>
            <div class="button-row">
                <a class="btn-primary" href=download_url target="_blank">
                    "📥 Download Latest PDF"
                </a>
            </div>
            {summary_section(&report.summary)}
        </div>
    }
}

/// The "AI Review Preview" block, or nothing when the report has no summary.
fn summary_section(summary: &Summary) -> View {
    let body = match summary {
        Summary::PerFile(entries) => entries.iter().map(file_preview).collect_view(),
        Summary::Single(text) => view! { <pre>{text.clone()}</pre> }.into_view(),
        Summary::None => return ().into_view(),
    };

    view! {
        <h4>"🧠 AI Review Preview:"</h4>
        <div class="ai-review">{body}</div>
    }
    .into_view()
}

fn file_preview(entry: &FileSummary) -> View {
    let text = entry
        .summary
        .clone()
        .unwrap_or_else(|| NO_SUMMARY.to_string());

    view! {
        <div class="file-review">
            <h5>"📄 " {entry.filename.clone()}</h5>
            <pre>{text}</pre>
        </div>
    }
    .into_view()
}

/// Error card. Server bodies are shown verbatim; everything else shows the
/// failure message.
fn error_card(err: &AppError) -> impl IntoView {
    let prefix = match err {
        AppError::Server(_) => "❌ Error: ",
        _ => "🚨 ",
    };

    view! {
        <div class="error">{prefix}{err.message().to_string()}</div>
    }
}
