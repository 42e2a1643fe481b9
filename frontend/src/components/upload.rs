//! File selection and review trigger buttons.
//!
//! Reads the file inputs at click time, validates the selection, and drives
//! the shared submission pipeline.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

use crate::services::submit_review;
use crate::types::UiState;
use crate::{
    BACKEND_URL, FILES_FIELD, REVIEW_ENDPOINT, REVIEW_MULTI_ENDPOINT, REVIEW_ZIP_ENDPOINT,
    ZIP_FIELD,
};

/// Files currently selected in the input with the given id.
fn selected_files(input_id: &str) -> Vec<File> {
    let mut selected = Vec::new();

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(element) = document.get_element_by_id(input_id) {
            if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
                if let Some(files) = input.files() {
                    for i in 0..files.length() {
                        if let Some(file) = files.get(i) {
                            selected.push(file);
                        }
                    }
                }
            }
        }
    }

    selected
}

/// Blocking notice for an empty selection. No state transition happens.
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[component]
pub fn UploadSection(set_state: WriteSignal<UiState>) -> impl IntoView {
    // Submissions are numbered so a superseded request can never clobber the
    // result of a newer one. Last submitted wins, not last resolved.
    let generation = store_value(0u64);

    let start_review =
        move |endpoint: &'static str, field_name: &'static str, files: Vec<File>| {
            let this_gen = generation.with_value(|g| g + 1);
            generation.set_value(this_gen);

            log::info!("📤 Submitting {} file(s) to {}", files.len(), endpoint);
            set_state.set(UiState::Loading);

            spawn_local(async move {
                let outcome = submit_review(endpoint, field_name, files, BACKEND_URL).await;

                if generation.get_value() != this_gen {
                    log::debug!("Dropping result of superseded submission #{}", this_gen);
                    return;
                }

                match outcome {
                    Ok(report) => {
                        log::info!("✅ Review complete: report {}", report.report_id);
                        set_state.set(UiState::Success(report));
                    }
                    Err(err) => {
                        log::error!("❌ Review failed: {}", err);
                        set_state.set(UiState::Error(err));
                    }
                }
            });
        };

    let on_review = move |_| {
        let files = selected_files("fileInput");
        if files.is_empty() {
            alert("Please select a file first.");
            return;
        }
        start_review(REVIEW_ENDPOINT, FILES_FIELD, files);
    };

    let on_review_combined = move |_| {
        let files = selected_files("fileInput");
        if files.is_empty() {
            alert("Please select files first.");
            return;
        }
        start_review(REVIEW_MULTI_ENDPOINT, FILES_FIELD, files);
    };

    let on_review_zip = move |_| {
        let files = selected_files("zipInput");
        if files.is_empty() {
            alert("Please choose a ZIP file.");
            return;
        }
        start_review(REVIEW_ZIP_ENDPOINT, ZIP_FIELD, files);
    };

    view! {
        <div class="upload-section" id="uploadZone">
            <div class="upload-icon">"📤"</div>
            <div class="upload-text">"Upload source files for an AI review"</div>

            <div class="upload-row">
                <input type="file" id="fileInput" multiple=true/>
                <button class="btn btn-primary" id="reviewBtn" on:click=on_review>
                    "🔍 Review File"
                </button>
                <button class="btn btn-secondary" id="reviewCombineBtn" on:click=on_review_combined>
                    "🧩 Combined Review"
                </button>
            </div>

            <div class="upload-row">
                <input type="file" id="zipInput" accept=".zip"/>
                <button class="btn btn-secondary" id="reviewZipBtn" on:click=on_review_zip>
                    "🗜️ Review ZIP Project"
                </button>
            </div>

            <div class="upload-hint">
                "Supported: .py, .js, .java, .cpp, .c, .ts or a whole project as ZIP"
            </div>
        </div>
    }
}
