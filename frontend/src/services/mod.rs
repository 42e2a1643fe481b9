//! Backend communication services.
//!
//! # Services
//!
//! - [`review`] - multipart file submission to the review API
//!
//! The review API is a separate server; everything here goes over HTTP.

pub mod review;

pub use review::*;
