use std::collections::HashMap;

use crate::{Answer, ResponseKey};

/// Error type for response access operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResponseError {
    #[error("Missing response for key: {0}")]
    Missing(ResponseKey),

    #[error("Type mismatch at key '{key}': expected {expected}, got {actual}")]
    TypeMismatch {
        key: ResponseKey,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Answers collected during one survey session.
///
/// Absence of a key means the question is unanswered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseStore {
    values: HashMap<ResponseKey, Answer>,
}

impl ResponseStore {
    /// Create a new empty response store.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Insert (overwrite) the answer at the given key.
    pub fn insert(&mut self, key: ResponseKey, answer: impl Into<Answer>) {
        self.values.insert(key, answer.into());
    }

    /// Get the answer at the given key.
    pub fn get(&self, key: &ResponseKey) -> Option<&Answer> {
        self.values.get(key)
    }

    /// Drop every answer.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Get the number of stored answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // === Convenience accessors ===

    /// Get a text answer at the given key.
    pub fn get_text(&self, key: &ResponseKey) -> Result<&str, ResponseError> {
        match self.get(key) {
            Some(Answer::Text(s)) => Ok(s),
            Some(other) => Err(ResponseError::TypeMismatch {
                key: *key,
                expected: "Text",
                actual: other.type_name(),
            }),
            None => Err(ResponseError::Missing(*key)),
        }
    }

    /// Get a numeric answer at the given key.
    pub fn get_number(&self, key: &ResponseKey) -> Result<i64, ResponseError> {
        match self.get(key) {
            Some(Answer::Number(n)) => Ok(*n),
            Some(other) => Err(ResponseError::TypeMismatch {
                key: *key,
                expected: "Number",
                actual: other.type_name(),
            }),
            None => Err(ResponseError::Missing(*key)),
        }
    }

    /// Get the selections at the given key.
    pub fn get_selections(&self, key: &ResponseKey) -> Result<&[String], ResponseError> {
        match self.get(key) {
            Some(Answer::Selections(list)) => Ok(list),
            Some(other) => Err(ResponseError::TypeMismatch {
                key: *key,
                expected: "Selections",
                actual: other.type_name(),
            }),
            None => Err(ResponseError::Missing(*key)),
        }
    }

    /// Get the selections at the given key for modification.
    ///
    /// An unanswered key is initialised to an empty list first, so after this call the
    /// key is always present.
    pub fn selections_mut(&mut self, key: ResponseKey) -> Result<&mut Vec<String>, ResponseError> {
        match self
            .values
            .entry(key)
            .or_insert_with(|| Answer::Selections(Vec::new()))
        {
            Answer::Selections(list) => Ok(list),
            other => Err(ResponseError::TypeMismatch {
                key,
                expected: "Selections",
                actual: other.type_name(),
            }),
        }
    }
}
