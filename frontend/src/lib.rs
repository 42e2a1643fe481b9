//! Agentic Code Reviewer - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading source files to the review API
//! and rendering the returned AI report.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (title bar)                                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (file inputs, three review triggers)     │
//! │  └── ResultsSection (loading / result card / error card)    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (ReviewResponse, ReviewReport, UiState, ...)
//! - [`components`] - UI components (Header, Upload, Results, etc.)
//! - [`services`] - Backend communication (review submission)

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // API
    ReviewResponse, FilePreview,
    // Report
    ReviewReport, Summary, FileSummary,
    // UI state
    UiState,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Agentic Code Reviewer - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // The single page-level state: everything below the upload controls is a
    // function of this value.
    let (ui_state, set_ui_state) = create_signal(UiState::Idle);

    view! {
        <Header/>

        <div class="container">
            <Hero/>
            <UploadSection set_state=set_ui_state/>
            <ResultsSection state=ui_state/>
        </div>

        <Footer/>
    }
}
