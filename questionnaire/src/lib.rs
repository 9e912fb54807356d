//! # questionnaire
//!
//! Step through a questionnaire one question at a time. Presentation-agnostic.
//!
//! A [`SurveyController`] owns one survey session: the position in an ordered list of
//! [`QuestionDefinition`]s and the [`ResponseStore`] of answers given so far. It renders
//! each question into a [`QuestionView`] and hands it to a [`RenderSurface`], which is
//! whatever actually shows things to the user (a browser page, a terminal, a test recorder).
//!
//! ## Usage
//!
//! ```rust
//! use questionnaire::{
//!     InputEvent, QuestionDefinition, QuestionKind, RecordingSurface, SurveyController,
//!     SurveyDefinition, ValidationError,
//! };
//!
//! let survey = SurveyDefinition::new(
//!     "Feedback",
//!     vec![
//!         QuestionDefinition::new(1, "Q1", QuestionKind::multiple_choice(["A", "B"])).required(),
//!         QuestionDefinition::new(2, "Q2", QuestionKind::text("")),
//!     ],
//! );
//!
//! let mut controller = SurveyController::new(survey, RecordingSurface::default());
//! controller.start();
//! assert!(matches!(controller.next(), Err(ValidationError::MissingAnswer { .. })));
//!
//! controller.capture(InputEvent::Choose("A".into())).unwrap();
//! controller.next().unwrap();
//! controller.submit().unwrap();
//!
//! let results = &controller.surface().results;
//! assert_eq!(results[0].answer, "A");
//! assert_eq!(results[1].answer, "No answer provided");
//! ```
//!
//! ## Surfaces
//!
//! Surfaces are separate crates that implement `RenderSurface`:
//! - `questionnaire-doc-html` - the survey as an HTML page
//! - `questionnaire-wizard-ratatui` - a keyboard-driven terminal wizard

// Re-export all types from questionnaire-types
pub use questionnaire_types::*;

mod capture;
pub use capture::{CaptureError, InputEvent, apply};

pub mod config;
pub use config::ConfigError;

mod controller;
pub use controller::SurveyController;

mod render;
pub use render::render_question;

mod results;
pub use results::{NO_ANSWER, summarize};

mod session;
pub use session::{Phase, SurveySession};

mod validate;
pub use validate::validate;

// Test surface for driving surveys without a user interface
mod test_surface;
pub use test_surface::RecordingSurface;
