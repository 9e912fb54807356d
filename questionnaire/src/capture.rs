use crate::{
    EMOJI_SCALE, QuestionDefinition, QuestionKind, RatingStyle, ResponseError, ResponseStore,
};

/// A user interaction with the controls of the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// An exclusive option was chosen (multiple-choice, emoji rating).
    Choose(String),
    /// A checkbox option was toggled.
    Toggle { value: String, checked: bool },
    /// The slider moved; carries the raw control value.
    Slide(String),
    /// The text field changed; carries its full content.
    Type(String),
    /// The follow-up field changed; carries its full content.
    FollowUp(String),
}

impl InputEvent {
    fn name(&self) -> &'static str {
        match self {
            Self::Choose(_) => "choose",
            Self::Toggle { .. } => "toggle",
            Self::Slide(_) => "slide",
            Self::Type(_) => "type",
            Self::FollowUp(_) => "follow-up",
        }
    }
}

/// Error type for input that cannot be applied to the current question.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaptureError {
    /// No question is on screen.
    #[error("No question is active")]
    Inactive,

    /// The event belongs to a different kind of control.
    #[error("A {event} event does not apply to {kind} question {question_id}")]
    KindMismatch {
        question_id: u32,
        kind: &'static str,
        event: &'static str,
    },

    /// The value is not one of the question's options.
    #[error("'{value}' is not an option of question {question_id}")]
    UnknownOption { question_id: u32, value: String },

    /// The slider reported something that is not an integer.
    #[error("Slider value '{0}' is not an integer")]
    NotANumber(String),

    /// The follow-up field is not shown for the current answer.
    #[error("Question {0} has no follow-up for its current answer")]
    FollowUpHidden(u32),

    #[error(transparent)]
    Response(#[from] ResponseError),
}

/// Write the effect of `event` on `question` into `responses`.
///
/// On error nothing is written.
pub fn apply(
    question: &QuestionDefinition,
    responses: &mut ResponseStore,
    event: InputEvent,
) -> Result<(), CaptureError> {
    let question_id = question.id;
    let mismatch = |event: &InputEvent| CaptureError::KindMismatch {
        question_id,
        kind: question.kind.type_name(),
        event: event.name(),
    };

    match (&question.kind, event) {
        (QuestionKind::MultipleChoice(choice), InputEvent::Choose(value)) => {
            if !choice.contains(&value) {
                return Err(CaptureError::UnknownOption { question_id, value });
            }
            responses.insert(question.key(), value);
        }
        (QuestionKind::Rating(rating), InputEvent::Choose(value))
            if rating.style == RatingStyle::Emoji =>
        {
            if !EMOJI_SCALE.iter().any(|emoji| emoji.value == value) {
                return Err(CaptureError::UnknownOption { question_id, value });
            }
            responses.insert(question.key(), value);
        }
        (QuestionKind::Checkbox(choice), InputEvent::Toggle { value, checked }) => {
            if !choice.contains(&value) {
                return Err(CaptureError::UnknownOption { question_id, value });
            }
            let selections = responses.selections_mut(question.key())?;
            if checked {
                selections.push(value);
            } else {
                selections.retain(|selected| *selected != value);
            }
        }
        (QuestionKind::Rating(rating), InputEvent::Slide(raw))
            if rating.style == RatingStyle::Slider =>
        {
            let value = raw
                .trim()
                .parse::<i64>()
                .map_err(|_| CaptureError::NotANumber(raw.clone()))?;
            responses.insert(question.key(), rating.clamp(value));
        }
        (QuestionKind::Text(_), InputEvent::Type(text)) => {
            responses.insert(question.key(), text);
        }
        (QuestionKind::MultipleChoice(_), InputEvent::FollowUp(text)) => {
            let revealed = responses
                .get_text(&question.key())
                .is_ok_and(|answer| question.follow_up_for(answer).is_some());
            if !revealed {
                return Err(CaptureError::FollowUpHidden(question_id));
            }
            responses.insert(question.follow_up_key(), text);
        }
        (_, event) => return Err(mismatch(&event)),
    }

    Ok(())
}
