use crate::ResponseStore;

/// Where the controller is in the survey lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// The welcome screen; nothing has been asked yet.
    #[default]
    Welcome,
    /// Showing the question at this position.
    InProgress(usize),
    /// The summary of all answers.
    Results,
}

impl Phase {
    /// The position of the question on screen, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::InProgress(index) => Some(*index),
            Self::Welcome | Self::Results => None,
        }
    }
}

/// The mutable half of a survey: position and answers.
///
/// Lives only as long as its controller; nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct SurveySession {
    pub current_index: usize,
    pub responses: ResponseStore,
}

impl SurveySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the first question with no answers.
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.responses.clear();
    }
}
