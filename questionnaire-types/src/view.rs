use crate::ResponseKey;

/// The render tree for one question, derived from its definition and the stored answers.
///
/// Surfaces turn this into markup, widgets or terminal cells. It is rebuilt from scratch
/// after every change, so it never carries state of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionView {
    pub question_id: u32,
    pub prompt: String,
    pub required: bool,
    pub body: ViewBody,
    /// Free-text field revealed beneath a multiple-choice question by its answer.
    pub follow_up: Option<FollowUpView>,
}

impl QuestionView {
    /// Values of the options currently marked selected.
    pub fn selected_values(&self) -> Vec<&str> {
        self.body
            .options()
            .iter()
            .filter(|option| option.selected)
            .map(|option| option.value.as_str())
            .collect()
    }
}

/// The input controls of a question.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewBody {
    /// Mutually exclusive options (multiple-choice).
    Choices(Vec<OptionView>),
    /// Independent toggles (checkbox).
    Toggles(Vec<OptionView>),
    /// Numeric slider (rating).
    Slider(SliderView),
    /// Mutually exclusive faces (emoji rating).
    Emoji(Vec<OptionView>),
    /// Single free-text field (text).
    TextField(TextFieldView),
    /// Nothing to show, for question types this version does not know.
    Empty,
}

impl ViewBody {
    /// The selectable options, empty for sliders and text fields.
    pub fn options(&self) -> &[OptionView] {
        match self {
            Self::Choices(options) | Self::Toggles(options) | Self::Emoji(options) => options,
            Self::Slider(_) | Self::TextField(_) | Self::Empty => &[],
        }
    }
}

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    /// The value stored when this option is chosen.
    pub value: String,
    /// The text shown to the user.
    pub label: String,
    /// Whether this option is chosen (styled "selected").
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderView {
    pub min: i64,
    pub max: i64,
    /// Current value, `min` while unanswered.
    pub value: i64,
    pub low_label: String,
    pub high_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFieldView {
    pub key: ResponseKey,
    pub placeholder: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowUpView {
    pub prompt: String,
    pub field: TextFieldView,
}
