/// Why a required question blocks `next` or `submit`.
///
/// The `Display` text is the blocking message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Nothing is stored for the question.
    #[error("Please answer this question before continuing.")]
    MissingAnswer { question_id: u32 },

    /// A checkbox question was touched but every option is toggled off.
    #[error("Please select at least one option.")]
    EmptySelection { question_id: u32 },
}

impl ValidationError {
    /// The id of the question that failed validation.
    pub fn question_id(&self) -> u32 {
        match self {
            Self::MissingAnswer { question_id } | Self::EmptySelection { question_id } => {
                *question_id
            }
        }
    }
}
