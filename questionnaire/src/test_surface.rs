//! Test surface for driving surveys without a user interface.
//!
//! `RecordingSurface` keeps the latest state of every surface element, so tests can
//! assert on what a user would currently see.
//!
//! # Example
//!
//! ```rust
//! use questionnaire::{
//!     QuestionDefinition, QuestionKind, RecordingSurface, Screen, SurveyController,
//!     SurveyDefinition,
//! };
//!
//! let survey = SurveyDefinition::new(
//!     "Test",
//!     vec![QuestionDefinition::new(1, "Name?", QuestionKind::text(""))],
//! );
//! let mut controller = SurveyController::new(survey, RecordingSurface::default());
//! controller.start();
//!
//! let surface = controller.surface();
//! assert_eq!(surface.screen, Some(Screen::Survey));
//! assert_eq!(surface.mounted.as_ref().unwrap().prompt, "Name?");
//! assert!(surface.nav.submit);
//! ```

use crate::{NavState, QuestionView, RenderSurface, ResultLine, Screen};

/// A surface that records what it was told to show.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    /// The visible screen, `None` before the first call.
    pub screen: Option<Screen>,

    /// The last mounted question.
    pub mounted: Option<QuestionView>,

    /// How many times a question was mounted.
    pub mount_count: usize,

    /// The progress indicator, in percent.
    pub progress: f64,

    /// Visibility of the navigation controls.
    pub nav: NavState,

    /// Every blocking message, oldest first.
    pub alerts: Vec<String>,

    /// The results summary.
    pub results: Vec<ResultLine>,
}

impl RecordingSurface {
    /// Create a new empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent blocking message.
    pub fn last_alert(&self) -> Option<&str> {
        self.alerts.last().map(String::as_str)
    }
}

impl RenderSurface for RecordingSurface {
    fn show_screen(&mut self, screen: Screen) {
        self.screen = Some(screen);
    }

    fn mount(&mut self, view: &QuestionView) {
        self.mounted = Some(view.clone());
        self.mount_count += 1;
    }

    fn set_progress(&mut self, percent: f64) {
        self.progress = percent;
    }

    fn set_nav_state(&mut self, nav: NavState) {
        self.nav = nav;
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn show_results(&mut self, lines: &[ResultLine]) {
        self.results = lines.to_vec();
    }
}
