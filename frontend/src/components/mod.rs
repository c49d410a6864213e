//! UI Components for the detector application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with GPU status badge
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadPanel`] - Media upload with drag & drop and submission
//! - [`ResultsPanel`] - Detection verdict, confidence meter and image
//! - [`ErrorBlock`] - Shared error rendering
//! - [`Dashboard`] - Model metrics

mod dashboard;
mod footer;
mod header;
mod hero;
mod results;
mod upload;

pub use dashboard::*;
pub use footer::*;
pub use header::*;
pub use hero::*;
pub use results::*;
pub use upload::*;
