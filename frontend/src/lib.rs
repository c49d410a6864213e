//! Deepfake Detector - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading images and videos to the
//! detection server and displaying its verdict.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (navigation, GPU status)                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  /            DetectPage                                     │
//! │               ├── Hero (title, description)                  │
//! │               └── UploadPanel                                │
//! │                   └── ResultsPanel                           │
//! │  /metrics     Dashboard (model metrics)                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (DetectionResult, AppError, etc.)
//! - [`panel`] - Upload panel state machine
//! - [`components`] - UI components (Header, UploadPanel, Dashboard, etc.)
//! - [`services`] - Detection server communication

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod panel;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Upload
    SelectedFile,
    // API
    DetectionResult, GpuStatus,
    // Errors
    AppError, AppResult,
};

// Panel
pub use panel::{PanelPhase, PanelState, ResultView, Verdict};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install the panic hook and logger, then mount [`App`] on `<body>`.
pub fn mount() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Deepfake Detector - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <Header/>
            <main class="container mx-auto px-4 py-8 max-w-2xl">
                <Routes>
                    <Route path="/" view=DetectPage/>
                    <Route path=DASHBOARD_ROUTE view=Dashboard/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

#[component]
fn DetectPage() -> impl IntoView {
    view! {
        <Hero/>
        <UploadPanel/>
    }
}
