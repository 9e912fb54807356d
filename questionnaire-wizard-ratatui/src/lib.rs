//! # questionnaire-wizard-ratatui
//!
//! Keyboard-driven terminal wizard for questionnaire, built on ratatui.
//!
//! ```rust,no_run
//! use questionnaire::{QuestionDefinition, QuestionKind, SurveyDefinition};
//! use questionnaire_wizard_ratatui::RatatuiWizard;
//!
//! let survey = SurveyDefinition::new(
//!     "Lunch",
//!     vec![QuestionDefinition::new(1, "Soup?", QuestionKind::multiple_choice(["Yes", "No"]))],
//! );
//!
//! let results = RatatuiWizard::new().with_title("Lunch order").run(survey)?;
//! for line in results {
//!     println!("{}: {}", line.prompt, line.answer);
//! }
//! # Ok::<(), questionnaire_wizard_ratatui::RatatuiError>(())
//! ```

mod backend;
mod surface;

pub use backend::{RatatuiError, RatatuiWizard, Theme, draw};
pub use surface::{Flow, TerminalSurface, handle_key};
