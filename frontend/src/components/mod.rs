//! UI Components for the reviewer application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Title bar
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - File selection and the three review triggers
//! - [`ResultsSection`] - Loading / success / error rendering

mod footer;
mod header;
mod hero;
mod results;
mod upload;

pub use footer::*;
pub use header::*;
pub use hero::*;
pub use results::*;
pub use upload::*;
