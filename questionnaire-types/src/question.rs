use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ResponseKey;

/// A single question in a survey.
///
/// Definitions are immutable once loaded; the survey controller only ever reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionDefinition {
    /// Unique positive id of this question within its survey.
    pub id: u32,

    /// The prompt text shown to the user.
    pub prompt: String,

    /// Whether an answer is needed before moving on.
    #[serde(default)]
    pub required: bool,

    /// The kind of question (determines rendering, capture and validation).
    #[serde(flatten)]
    pub kind: QuestionKind,

    /// Option value -> follow-up prompt. Choosing a mapped option reveals one free-text
    /// sub-question, answered under `ResponseKey::FollowUp(id)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up: Option<BTreeMap<String, String>>,
}

impl QuestionDefinition {
    /// Create a new optional question.
    pub fn new(id: u32, prompt: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            required: false,
            kind,
            follow_up: None,
        }
    }

    /// Mark this question as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Reveal a follow-up prompt when `option` is chosen.
    pub fn with_follow_up(mut self, option: impl Into<String>, prompt: impl Into<String>) -> Self {
        self.follow_up
            .get_or_insert_with(BTreeMap::new)
            .insert(option.into(), prompt.into());
        self
    }

    /// The key this question's own answer is stored under.
    pub fn key(&self) -> ResponseKey {
        ResponseKey::Question(self.id)
    }

    /// The key the follow-up answer is stored under.
    pub fn follow_up_key(&self) -> ResponseKey {
        ResponseKey::FollowUp(self.id)
    }

    /// The follow-up prompt triggered by `answer`, if any.
    pub fn follow_up_for(&self, answer: &str) -> Option<&str> {
        self.follow_up
            .as_ref()
            .and_then(|map| map.get(answer))
            .map(String::as_str)
    }

    /// Check if this question reveals a follow-up for any answer.
    pub fn has_follow_up(&self) -> bool {
        self.follow_up.as_ref().is_some_and(|map| !map.is_empty())
    }
}

/// The kind of question, determining input type and answer shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuestionKind {
    /// Pick exactly one option. Answer: `Answer::Text`.
    MultipleChoice(ChoiceQuestion),

    /// Toggle any number of options. Answer: `Answer::Selections`.
    Checkbox(ChoiceQuestion),

    /// Slider or emoji rating. Answer: `Answer::Number` or `Answer::Text`.
    Rating(RatingQuestion),

    /// Single free-text field. Answer: `Answer::Text`.
    Text(TextQuestion),

    /// A type this version does not know. Renders no options and captures nothing.
    #[serde(other)]
    Unknown,
}

impl QuestionKind {
    /// Multiple-choice question over the given options.
    pub fn multiple_choice<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MultipleChoice(ChoiceQuestion::new(options))
    }

    /// Checkbox question over the given options.
    pub fn checkbox<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Checkbox(ChoiceQuestion::new(options))
    }

    /// Slider rating over `[min, max]`.
    pub fn rating(min: i64, max: i64, low: impl Into<String>, high: impl Into<String>) -> Self {
        Self::Rating(RatingQuestion {
            min,
            max,
            labels: (low.into(), high.into()),
            style: RatingStyle::Slider,
        })
    }

    /// Three-way emoji rating.
    pub fn emoji_rating() -> Self {
        Self::Rating(RatingQuestion {
            min: 1,
            max: EMOJI_SCALE.len() as i64,
            labels: (String::new(), String::new()),
            style: RatingStyle::Emoji,
        })
    }

    /// Free-text question.
    pub fn text(placeholder: impl Into<String>) -> Self {
        Self::Text(TextQuestion {
            placeholder: placeholder.into(),
        })
    }

    /// The configured type name, as written in survey files.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::MultipleChoice(_) => "multiple-choice",
            Self::Checkbox(_) => "checkbox",
            Self::Rating(_) => "rating",
            Self::Text(_) => "text",
            Self::Unknown => "unknown",
        }
    }
}

/// Options of a multiple-choice or checkbox question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChoiceQuestion {
    /// The option texts, in display order. Each text is also the stored value.
    pub options: Vec<String>,
}

impl ChoiceQuestion {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if `value` is one of the options.
    pub fn contains(&self, value: &str) -> bool {
        self.options.iter().any(|option| option == value)
    }
}

/// Configuration for a rating question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingQuestion {
    /// Lowest slider value.
    #[serde(default = "default_min")]
    pub min: i64,

    /// Highest slider value.
    #[serde(default = "default_max")]
    pub max: i64,

    /// Labels shown at the low and high end of the slider.
    #[serde(default)]
    pub labels: (String, String),

    /// How the rating is presented.
    #[serde(default)]
    pub style: RatingStyle,
}

impl RatingQuestion {
    /// Clamp a raw value into `[min, max]`.
    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min.min(self.max), self.max.max(self.min))
    }
}

fn default_min() -> i64 {
    1
}

fn default_max() -> i64 {
    5
}

/// Presentation of a rating question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RatingStyle {
    /// Continuous slider with a live numeric readout.
    #[default]
    Slider,

    /// Fixed three-way choice among `EMOJI_SCALE`.
    Emoji,
}

/// One face of the emoji rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiChoice {
    /// The stored answer.
    pub value: &'static str,
    /// What the user sees.
    pub glyph: &'static str,
}

/// The fixed choices of an emoji rating, worst to best.
pub const EMOJI_SCALE: [EmojiChoice; 3] = [
    EmojiChoice {
        value: "unhappy",
        glyph: "😞",
    },
    EmojiChoice {
        value: "neutral",
        glyph: "😐",
    },
    EmojiChoice {
        value: "happy",
        glyph: "😊",
    },
];

/// Configuration for a free-text question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextQuestion {
    /// Hint shown in the empty field.
    #[serde(default)]
    pub placeholder: String,
}
