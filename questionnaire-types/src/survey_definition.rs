use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::QuestionDefinition;

/// The top-level structure containing all questions and metadata for a survey.
///
/// A survey definition is configuration: it is built once (in code or from a file)
/// and shared read-only by every controller that presents it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyDefinition {
    /// Heading shown on every screen.
    pub title: String,

    /// Optional message shown on the welcome screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub welcome: Option<String>,

    /// Optional message shown on the results screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epilogue: Option<String>,

    /// All questions in presentation order.
    #[serde(default)]
    pub questions: Vec<QuestionDefinition>,
}

impl SurveyDefinition {
    /// Create a new survey definition with the given questions.
    pub fn new(title: impl Into<String>, questions: Vec<QuestionDefinition>) -> Self {
        Self {
            title: title.into(),
            welcome: None,
            epilogue: None,
            questions,
        }
    }

    /// Set the welcome message.
    pub fn with_welcome(mut self, welcome: impl Into<String>) -> Self {
        self.welcome = Some(welcome.into());
        self
    }

    /// Set the epilogue message.
    pub fn with_epilogue(mut self, epilogue: impl Into<String>) -> Self {
        self.epilogue = Some(epilogue.into());
        self
    }

    /// Get the questions.
    pub fn questions(&self) -> &[QuestionDefinition] {
        &self.questions
    }

    /// Get the question at a position.
    pub fn question(&self, index: usize) -> Option<&QuestionDefinition> {
        self.questions.get(index)
    }

    /// The first question id used more than once.
    ///
    /// Answers are keyed by id, so two questions sharing one would share an answer.
    pub fn duplicate_id(&self) -> Option<u32> {
        let mut seen = HashSet::new();
        self.questions
            .iter()
            .map(|question| question.id)
            .find(|id| !seen.insert(*id))
    }

    /// Position of the last question, `None` for an empty survey.
    pub fn last_index(&self) -> Option<usize> {
        self.questions.len().checked_sub(1)
    }

    /// Check if the survey has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuestionKind;

    #[test]
    fn duplicate_id() {
        let question = |id| QuestionDefinition::new(id, "Q", QuestionKind::text(""));
        let unique = SurveyDefinition::new("T", vec![question(1), question(2), question(3)]);
        assert_eq!(unique.duplicate_id(), None);

        let clash = SurveyDefinition::new("T", vec![question(1), question(2), question(1)]);
        assert_eq!(clash.duplicate_id(), Some(1));
    }

    #[test]
    fn last_index() {
        assert_eq!(SurveyDefinition::new("T", Vec::new()).last_index(), None);
        let one = SurveyDefinition::new(
            "T",
            vec![QuestionDefinition::new(1, "Q", QuestionKind::text(""))],
        );
        assert_eq!(one.last_index(), Some(0));
    }
}
