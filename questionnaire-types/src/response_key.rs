use std::fmt;

/// Suffix of the derived key a follow-up answer is stored under, e.g. `"3_followup"`.
pub const FOLLOW_UP_SUFFIX: &str = "_followup";

/// Key of an answer in the `ResponseStore`.
///
/// Every question stores its own answer under its id. A question with a follow-up
/// stores the follow-up text under a derived key, rendered as `"{id}_followup"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResponseKey {
    /// The answer to the question itself.
    Question(u32),
    /// The free-text answer to the question's follow-up.
    FollowUp(u32),
}

impl fmt::Display for ResponseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Question(id) => write!(f, "{id}"),
            Self::FollowUp(id) => write!(f, "{id}{FOLLOW_UP_SUFFIX}"),
        }
    }
}
