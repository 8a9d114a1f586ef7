//! Session domain model.

use serde::{Deserialize, Serialize};

/// One onboarding answer-set.
///
/// Fields are kept raw: `preferences` and `topics` stay comma-joined exactly
/// as typed, and splitting happens only when shapes are generated. Field order
/// is part of the stored JSON format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Free-text time period.
    pub year: String,
    /// Comma-separated creators.
    pub preferences: String,
    /// Comma-separated topics.
    pub topics: String,
}

impl Session {
    /// Creates an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(
        year: impl Into<String>,
        preferences: impl Into<String>,
        topics: impl Into<String>,
    ) -> Self {
        Self {
            year: year.into(),
            preferences: preferences.into(),
            topics: topics.into(),
        }
    }

    /// Whether nothing has been entered yet.
    pub fn is_blank(&self) -> bool {
        self.year.is_empty() && self.preferences.is_empty() && self.topics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_field_order() {
        let session = Session {
            year: "1999".to_string(),
            preferences: "a,b".to_string(),
            topics: "x".to_string(),
        };
        let json = serde_json::to_string(&session).unwrap();
        assert_eq!(json, r#"{"year":"1999","preferences":"a,b","topics":"x"}"#);
    }

    #[test]
    fn test_new_is_blank() {
        assert!(Session::new().is_blank());
    }
}
