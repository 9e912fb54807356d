//! Core types for the questionnaire crate.
//!
//! This crate provides the foundational types for defining and presenting questionnaires:
//! - `SurveyDefinition` - The top-level survey structure
//! - `QuestionDefinition` and `QuestionKind` - Individual questions and their types
//! - `ResponseStore`, `ResponseKey` and `Answer` - Collected answers and their keys
//! - `QuestionView` - The render tree produced for one question
//! - `RenderSurface` - The presentation surface a controller drives

mod response_key;
pub use response_key::{FOLLOW_UP_SUFFIX, ResponseKey};

mod answer;
pub use answer::Answer;

mod responses;
pub use responses::{ResponseError, ResponseStore};

mod question;
pub use question::{
    ChoiceQuestion, EMOJI_SCALE, EmojiChoice, QuestionDefinition, QuestionKind, RatingQuestion,
    RatingStyle, TextQuestion,
};

mod survey_definition;
pub use survey_definition::SurveyDefinition;

mod view;
pub use view::{FollowUpView, OptionView, QuestionView, SliderView, TextFieldView, ViewBody};

mod error;
pub use error::ValidationError;

mod surface;
pub use surface::{NavState, RenderSurface, ResultLine, Screen, progress_percent};
