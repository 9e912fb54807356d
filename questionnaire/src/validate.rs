use crate::{Answer, QuestionDefinition, QuestionKind, ResponseStore, ValidationError};

/// Check whether `question` may be left.
///
/// Optional questions always pass. A required question fails with `MissingAnswer` when
/// nothing is stored for it, or only an empty string or a zero rating. A required checkbox
/// additionally fails with `EmptySelection` when every option is toggled off. Follow-up
/// answers are never checked.
pub fn validate(
    question: &QuestionDefinition,
    responses: &ResponseStore,
) -> Result<(), ValidationError> {
    if !question.required {
        return Ok(());
    }

    let question_id = question.id;
    let Some(answer) = responses.get(&question.key()) else {
        return Err(ValidationError::MissingAnswer { question_id });
    };
    if answer.is_blank() {
        return Err(ValidationError::MissingAnswer { question_id });
    }

    if let QuestionKind::Checkbox(_) = question.kind
        && matches!(answer, Answer::Selections(list) if list.is_empty())
    {
        return Err(ValidationError::EmptySelection { question_id });
    }

    Ok(())
}
