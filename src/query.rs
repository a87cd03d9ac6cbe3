//! Search Query
//!
//! Validated user input for a search submission.

use crate::error::ValidationError;

/// A query accepted by the search form (never empty)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Apply the "required" rule. Whitespace counts as input.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::EmptyQuery);
        }
        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
