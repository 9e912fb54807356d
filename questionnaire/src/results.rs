use crate::{ResponseStore, ResultLine, SurveyDefinition};

/// Answer text for questions left unanswered.
pub const NO_ANSWER: &str = "No answer provided";

/// Turn the stored answers into one line per question, in survey order.
///
/// Only answers stored under a question's own id are shown; follow-up answers are left out
/// of the summary. An empty string reads as unanswered, a slider at zero reads as unanswered too, an emptied checkbox as `""`.
pub fn summarize(definition: &SurveyDefinition, responses: &ResponseStore) -> Vec<ResultLine> {
    definition
        .questions()
        .iter()
        .map(|question| {
            let answer = match responses.get(&question.key()) {
                Some(answer) if !answer.is_blank() => answer.to_string(),
                _ => NO_ANSWER.to_string(),
            };
            ResultLine::new(question.prompt.clone(), answer)
        })
        .collect()
}
