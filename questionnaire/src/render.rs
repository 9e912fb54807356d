use crate::{
    Answer, ChoiceQuestion, EMOJI_SCALE, FollowUpView, OptionView, QuestionDefinition,
    QuestionKind, QuestionView, RatingQuestion, RatingStyle, ResponseStore, SliderView,
    TextFieldView, ViewBody,
};

/// Build the render tree of `question` from the answers stored so far.
///
/// Previously given answers are reflected (chosen options selected, fields pre-filled),
/// which is what makes back-navigation show earlier input.
pub fn render_question(question: &QuestionDefinition, responses: &ResponseStore) -> QuestionView {
    let stored = responses.get(&question.key());

    let body = match &question.kind {
        QuestionKind::MultipleChoice(choice) => {
            let chosen = stored.and_then(Answer::as_text);
            ViewBody::Choices(exclusive_options(choice, chosen))
        }
        QuestionKind::Checkbox(choice) => {
            let checked = stored.and_then(Answer::as_selections).unwrap_or(&[]);
            ViewBody::Toggles(
                choice
                    .options
                    .iter()
                    .map(|option| OptionView {
                        value: option.clone(),
                        label: option.clone(),
                        selected: checked.contains(option),
                    })
                    .collect(),
            )
        }
        QuestionKind::Rating(rating) => render_rating(rating, stored),
        QuestionKind::Text(text) => ViewBody::TextField(TextFieldView {
            key: question.key(),
            placeholder: text.placeholder.clone(),
            value: stored
                .and_then(Answer::as_text)
                .unwrap_or_default()
                .to_string(),
        }),
        QuestionKind::Unknown => {
            tracing::warn!(question_id = question.id, "unknown question type renders no options");
            ViewBody::Empty
        }
    };

    QuestionView {
        question_id: question.id,
        prompt: question.prompt.clone(),
        required: question.required,
        body,
        follow_up: render_follow_up(question, stored, responses),
    }
}

fn exclusive_options(choice: &ChoiceQuestion, chosen: Option<&str>) -> Vec<OptionView> {
    choice
        .options
        .iter()
        .map(|option| OptionView {
            value: option.clone(),
            label: option.clone(),
            selected: chosen == Some(option.as_str()),
        })
        .collect()
}

fn render_rating(rating: &RatingQuestion, stored: Option<&Answer>) -> ViewBody {
    match rating.style {
        RatingStyle::Slider => ViewBody::Slider(SliderView {
            min: rating.min,
            max: rating.max,
            value: stored.and_then(Answer::as_number).unwrap_or(rating.min),
            low_label: rating.labels.0.clone(),
            high_label: rating.labels.1.clone(),
        }),
        RatingStyle::Emoji => {
            let chosen = stored.and_then(Answer::as_text);
            ViewBody::Emoji(
                EMOJI_SCALE
                    .iter()
                    .map(|emoji| OptionView {
                        value: emoji.value.to_string(),
                        label: emoji.glyph.to_string(),
                        selected: chosen == Some(emoji.value),
                    })
                    .collect(),
            )
        }
    }
}

fn render_follow_up(
    question: &QuestionDefinition,
    stored: Option<&Answer>,
    responses: &ResponseStore,
) -> Option<FollowUpView> {
    let QuestionKind::MultipleChoice(_) = question.kind else {
        return None;
    };
    let prompt = question.follow_up_for(stored?.as_text()?)?;
    let key = question.follow_up_key();

    Some(FollowUpView {
        prompt: prompt.to_string(),
        field: TextFieldView {
            key,
            placeholder: String::new(),
            value: responses.get_text(&key).unwrap_or_default().to_string(),
        },
    })
}
