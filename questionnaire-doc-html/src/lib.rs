//! # questionnaire-doc-html
//!
//! HTML surface for questionnaire.
//!
//! [`HtmlSurface`] implements `RenderSurface` and renders the page a browser would show at any
//! point of a survey: the welcome screen, the current question with progress bar and
//! navigation buttons, or the results summary.
//!
//! ## Example
//!
//! ```rust
//! use questionnaire::{
//!     InputEvent, QuestionDefinition, QuestionKind, SurveyController, SurveyDefinition,
//! };
//! use questionnaire_doc_html::{HtmlOptions, HtmlSurface};
//!
//! let survey = SurveyDefinition::new(
//!     "Lunch",
//!     vec![QuestionDefinition::new(1, "Soup?", QuestionKind::multiple_choice(["Yes", "No"]))],
//! );
//! let surface = HtmlSurface::for_survey(&survey, HtmlOptions::new());
//! let mut controller = SurveyController::new(survey, surface);
//!
//! controller.start();
//! controller.capture(InputEvent::Choose("Yes".into())).unwrap();
//!
//! let html = controller.surface().to_html();
//! assert!(html.contains("class=\"survey-option selected\""));
//! ```

mod generator;
mod surface;

pub use generator::{
    HtmlOptions, escape_html, is_class_char, render_question_html, render_results_html,
};
pub use surface::{HtmlError, HtmlSurface, question_page, welcome_page};
