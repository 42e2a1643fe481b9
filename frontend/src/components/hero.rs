//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Agentic Code Reviewer"</h1>
            <p class="subtitle">
                "Upload source files, or a whole project as a ZIP archive. "
                "The AI reviews your code and prepares a downloadable PDF report."
            </p>
        </div>
    }
}
