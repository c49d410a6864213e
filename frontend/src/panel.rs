//! Upload panel state machine.
//!
//! Everything the upload panel shows is a projection of [`PanelState`].
//! The Leptos component forwards DOM events into the transition methods
//! below and renders the result, so the whole flow can be exercised
//! without a browser.
//!
//! ```text
//!            valid file                submit
//!   Empty ─────────────▶ FileSelected ───────▶ Submitting
//!     ▲                      │   ▲                 │
//!     │        remove        │   │ valid file      │ response settles
//!     └──────────────────────┘   │                 ▼
//!     ▲                          └──────────── Resulted
//!     │              remove                        │ submit again
//!     └────────────────────────────────────────────┤
//!                                                  ▼
//!                                              Submitting
//! ```

use crate::config::MAX_FILE_SIZE_MB;
use crate::{AppError, AppResult, DetectionResult, SelectedFile};

// =============================================================================
// Rendered results
// =============================================================================

/// Verdict of a successful analysis, selecting the status block theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Manipulated media: warning theme.
    Deepfake,
    /// Authentic media: affirmative theme.
    Authentic,
}

impl Verdict {
    pub fn from_flag(is_deepfake: bool) -> Self {
        if is_deepfake {
            Verdict::Deepfake
        } else {
            Verdict::Authentic
        }
    }

    /// Get CSS classes for the status block.
    pub fn theme_class(&self) -> &'static str {
        match self {
            Verdict::Deepfake => "bg-red-100 text-red-800",
            Verdict::Authentic => "bg-green-100 text-green-800",
        }
    }

    /// Get Font Awesome classes for the status icon.
    pub fn icon_class(&self) -> &'static str {
        match self {
            Verdict::Deepfake => "fas fa-exclamation-triangle mr-2",
            Verdict::Authentic => "fas fa-check-circle mr-2",
        }
    }
}

/// Content of the results area.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultView {
    /// Single error block.
    Error(String),
    /// Status, confidence meter and optional annotated image, in that order.
    Detection {
        verdict: Verdict,
        message: String,
        /// Percentage with one decimal, e.g. `87.3%`. Also the meter width.
        confidence: String,
        image: Option<String>,
    },
}

impl ResultView {
    /// An in-band `error` wins over every other field.
    pub fn from_result(result: &DetectionResult) -> Self {
        if let Some(error) = result.error_message() {
            return ResultView::Error(AppError::Server(error.to_string()).to_string());
        }

        ResultView::Detection {
            verdict: Verdict::from_flag(result.is_deepfake),
            message: result.message.clone(),
            confidence: format_confidence(result.confidence),
            image: result.image_path().map(str::to_string),
        }
    }

    pub fn from_error(error: &AppError) -> Self {
        ResultView::Error(error.to_string())
    }
}

/// Format a 0..1 fraction as a percentage with exactly one decimal.
///
/// Exact ties round away from zero, the way `Number.prototype.toFixed`
/// does; `{:.1}` alone would round them to even.
pub fn format_confidence(confidence: f64) -> String {
    let percent = confidence * 100.0;

    // A binary value sits exactly on `x.x5` only when it is an odd number of quarters
    let quarters = percent * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return format!("{:.1}%", percent + percent.signum() * 0.05);
    }

    format!("{:.1}%", percent)
}

// =============================================================================
// Panel state
// =============================================================================

/// Coarse state of the panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelPhase {
    #[default]
    Empty,
    FileSelected,
    Submitting,
    Resulted,
}

/// Complete state of the upload panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PanelState {
    pub phase: PanelPhase,
    /// Last accepted file
    pub selected: Option<SelectedFile>,
    pub submit_enabled: bool,
    pub loading: bool,
    pub results_visible: bool,
    pub results: Option<ResultView>,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the "file selected" indicator is shown.
    pub fn file_info_visible(&self) -> bool {
        self.selected.is_some()
    }

    /// Name displayed in the file indicator.
    pub fn file_name(&self) -> Option<&str> {
        self.selected.as_ref().map(|f| f.name.as_str())
    }

    /// Validate and accept a newly chosen file.
    ///
    /// An oversized file leaves the selection and phase alone, disables
    /// submission and shows the size error.
    pub fn choose_file(&mut self, file: SelectedFile) -> AppResult<()> {
        if file.size_mb() > MAX_FILE_SIZE_MB {
            let error = AppError::FileTooLarge;
            self.submit_enabled = false;
            self.show_error(&error);
            return Err(error);
        }

        self.selected = Some(file);
        self.submit_enabled = true;
        if self.phase != PanelPhase::Submitting {
            self.phase = PanelPhase::FileSelected;
        }
        Ok(())
    }

    /// Drop the selection and hide everything it produced.
    pub fn remove(&mut self) {
        self.selected = None;
        self.submit_enabled = false;
        self.results_visible = false;
        if self.phase != PanelPhase::Submitting {
            self.phase = PanelPhase::Empty;
        }
    }

    /// Enter the loading state. Returns the file to upload, or `None` when
    /// there is nothing to submit.
    ///
    /// A request already in flight does not block a new one.
    pub fn begin_submit(&mut self) -> Option<SelectedFile> {
        if !self.submit_enabled {
            return None;
        }
        let file = self.selected.clone()?;

        self.loading = true;
        self.results_visible = false;
        self.phase = PanelPhase::Submitting;
        Some(file)
    }

    /// Render the settled request and leave the loading state.
    pub fn finish(&mut self, outcome: AppResult<DetectionResult>) {
        match outcome {
            Ok(result) => self.render(ResultView::from_result(&result)),
            Err(error) => self.show_error(&error),
        }
        self.loading = false;
        self.phase = PanelPhase::Resulted;
    }

    /// Replace the results area with a single error block.
    pub fn show_error(&mut self, error: &AppError) {
        self.render(ResultView::from_error(error));
    }

    fn render(&mut self, view: ResultView) {
        self.results = Some(view);
        self.results_visible = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MB: f64 = 1024.0 * 1024.0;

    fn photo() -> SelectedFile {
        SelectedFile::new("portrait.jpg", 2.5 * MB)
    }

    fn selected() -> PanelState {
        let mut panel = PanelState::new();
        panel.choose_file(photo()).unwrap();
        panel
    }

    #[test]
    fn test_initial_state() {
        let panel = PanelState::new();
        assert_eq!(panel.phase, PanelPhase::Empty);
        assert!(!panel.submit_enabled);
        assert!(!panel.results_visible);
        assert!(!panel.file_info_visible());
    }

    #[test]
    fn test_accepts_file_under_limit() {
        let panel = selected();
        assert_eq!(panel.phase, PanelPhase::FileSelected);
        assert!(panel.submit_enabled);
        assert!(panel.file_info_visible());
        assert_eq!(panel.file_name(), Some("portrait.jpg"));
    }

    #[test]
    fn test_exactly_fifty_megabytes_is_accepted() {
        let mut panel = PanelState::new();
        assert!(panel.choose_file(SelectedFile::new("edge.mp4", 50.0 * MB)).is_ok());
        assert!(panel.submit_enabled);
    }

    #[test]
    fn test_rejects_file_over_limit() {
        let mut panel = PanelState::new();
        let err = panel
            .choose_file(SelectedFile::new("huge.mp4", 50.0 * MB + 1.0))
            .unwrap_err();

        assert_eq!(err, AppError::FileTooLarge);
        assert_eq!(panel.phase, PanelPhase::Empty);
        assert!(!panel.submit_enabled);
        assert!(!panel.file_info_visible());
        assert!(panel.results_visible);
        assert_eq!(
            panel.results,
            Some(ResultView::Error("File size exceeds 50MB limit".into()))
        );
    }

    #[test]
    fn test_oversized_file_keeps_previous_selection_display() {
        let mut panel = selected();
        let _ = panel.choose_file(SelectedFile::new("huge.mp4", 80.0 * MB));

        assert_eq!(panel.phase, PanelPhase::FileSelected);
        assert_eq!(panel.file_name(), Some("portrait.jpg"));
        assert!(!panel.submit_enabled);
        assert_eq!(panel.begin_submit(), None);
    }

    #[test]
    fn test_remove_resets_from_any_state() {
        let mut from_selected = selected();
        from_selected.remove();

        let mut from_result = selected();
        from_result.begin_submit();
        from_result.finish(Ok(DetectionResult::default()));
        from_result.remove();

        let mut from_error = PanelState::new();
        let _ = from_error.choose_file(SelectedFile::new("huge.mp4", 99.0 * MB));
        from_error.remove();

        for panel in [from_selected, from_result, from_error] {
            assert_eq!(panel.phase, PanelPhase::Empty);
            assert!(panel.selected.is_none());
            assert!(!panel.file_info_visible());
            assert!(!panel.submit_enabled);
            assert!(!panel.results_visible);
        }
    }

    #[test]
    fn test_submit_without_file_is_noop() {
        let mut panel = PanelState::new();
        assert_eq!(panel.begin_submit(), None);
        assert_eq!(panel, PanelState::new());
    }

    #[test]
    fn test_submit_shows_loading_and_hides_results() {
        let mut panel = selected();
        panel.show_error(&AppError::HttpStatus(502));
        assert!(panel.results_visible);

        assert_eq!(panel.begin_submit(), Some(photo()));
        assert_eq!(panel.phase, PanelPhase::Submitting);
        assert!(panel.loading);
        assert!(!panel.results_visible);
    }

    #[test]
    fn test_finish_renders_and_stops_loading() {
        let mut panel = selected();
        panel.begin_submit();
        panel.finish(Err(AppError::Network(String::new())));

        assert_eq!(panel.phase, PanelPhase::Resulted);
        assert!(!panel.loading);
        assert!(panel.results_visible);
        assert_eq!(
            panel.results,
            Some(ResultView::Error("An error occurred during analysis".into()))
        );
    }

    #[test]
    fn test_bad_status_message() {
        let mut panel = selected();
        panel.begin_submit();
        panel.finish(Err(AppError::HttpStatus(500)));
        assert_eq!(
            panel.results,
            Some(ResultView::Error("Network response was not ok".into()))
        );
    }

    #[test]
    fn test_resubmit_replaces_previous_result() {
        let mut panel = selected();
        panel.begin_submit();
        panel.finish(Err(AppError::HttpStatus(500)));

        assert!(panel.begin_submit().is_some());
        panel.finish(Ok(DetectionResult {
            is_deepfake: false,
            message: "Authentic media".into(),
            confidence: 0.1,
            ..Default::default()
        }));

        assert!(matches!(
            panel.results,
            Some(ResultView::Detection { verdict: Verdict::Authentic, .. })
        ));
    }

    #[test]
    fn test_overlapping_submissions_are_not_blocked() {
        let mut panel = selected();
        assert!(panel.begin_submit().is_some());
        assert!(panel.begin_submit().is_some());

        panel.finish(Err(AppError::HttpStatus(503)));
        assert!(!panel.loading);
    }

    #[test]
    fn test_deepfake_view() {
        let result: DetectionResult = serde_json::from_str(
            r#"{"is_deepfake": true, "message": "Fake detected", "confidence": 0.873}"#,
        )
        .unwrap();

        assert_eq!(
            ResultView::from_result(&result),
            ResultView::Detection {
                verdict: Verdict::Deepfake,
                message: "Fake detected".into(),
                confidence: "87.3%".into(),
                image: None,
            }
        );
    }

    #[test]
    fn test_authentic_view_with_image() {
        let result: DetectionResult = serde_json::from_str(
            r#"{"is_deepfake": false, "message": "Looks real", "confidence": 0.42,
                "result_path": "/static/out.png"}"#,
        )
        .unwrap();

        assert_eq!(
            ResultView::from_result(&result),
            ResultView::Detection {
                verdict: Verdict::Authentic,
                message: "Looks real".into(),
                confidence: "42.0%".into(),
                image: Some("/static/out.png".into()),
            }
        );
    }

    #[test]
    fn test_error_field_hides_everything_else() {
        let result: DetectionResult = serde_json::from_str(
            r#"{"error": "unsupported format", "is_deepfake": true, "message": "Fake",
                "confidence": 0.99, "result_path": "/static/out.png"}"#,
        )
        .unwrap();

        assert_eq!(
            ResultView::from_result(&result),
            ResultView::Error("unsupported format".into())
        );
    }

    #[test]
    fn test_format_confidence() {
        assert_eq!(format_confidence(0.873), "87.3%");
        assert_eq!(format_confidence(0.42), "42.0%");
        assert_eq!(format_confidence(1.0), "100.0%");
        assert_eq!(format_confidence(0.0), "0.0%");
    }

    #[test]
    fn test_format_confidence_rounds_ties_up() {
        // 56.25 and 6.25 are exact; half-to-even would give 56.2 and 6.2
        assert_eq!(format_confidence(0.5625), "56.3%");
        assert_eq!(format_confidence(0.0625), "6.3%");
        assert_eq!(format_confidence(0.1875), "18.8%");
        // 12.5 is exact but already has one decimal
        assert_eq!(format_confidence(0.125), "12.5%");
    }

    #[test]
    fn test_verdict_styles() {
        assert_eq!(Verdict::Deepfake.theme_class(), "bg-red-100 text-red-800");
        assert_eq!(Verdict::Authentic.theme_class(), "bg-green-100 text-green-800");
        assert!(Verdict::Deepfake.icon_class().contains("fa-exclamation-triangle"));
        assert!(Verdict::Authentic.icon_class().contains("fa-check-circle"));
    }
}
