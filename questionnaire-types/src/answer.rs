use std::fmt;

/// A single answer stored in the `ResponseStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Free text, a chosen option, or an emoji rating.
    Text(String),

    /// A slider rating.
    Number(i64),

    /// The toggled options of a checkbox question, in toggle order.
    Selections(Vec<String>),
}

impl Answer {
    /// Try to get this answer as a string reference.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this answer as a number.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get this answer as a list of selections.
    pub fn as_selections(&self) -> Option<&[String]> {
        match self {
            Self::Selections(list) => Some(list),
            _ => None,
        }
    }

    /// An empty string or a slider at zero counts as no answer at all.
    ///
    /// An empty selection list does not: once a checkbox has been touched it is answered,
    /// even if every option was toggled off again.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Number(n) => *n == 0,
            Self::Selections(_) => false,
        }
    }

    /// Get the type name of this answer for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Number(_) => "Number",
            Self::Selections(_) => "Selections",
        }
    }
}

/// Human-readable form: selections are joined with `", "`.
impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Selections(list) => f.write_str(&list.join(", ")),
        }
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<i64> for Answer {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<Vec<String>> for Answer {
    fn from(list: Vec<String>) -> Self {
        Self::Selections(list)
    }
}
