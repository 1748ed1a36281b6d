use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Not in an arch-studio workspace. Run 'archstudio init' first.")]
    NotInitialized,

    #[error("Already initialized. Remove .archstudio/ to reinitialize.")]
    AlreadyInitialized,

    #[error("Not logged in. Run 'archstudio login <username>' first.")]
    NotLoggedIn,

    #[error("No {kind} found with id: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Invalid record kind: {0} (expected project, article, service, or testimonial)")]
    UnknownKind(String),

    #[error("Use --force to delete in non-interactive mode")]
    ForceRequired,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to write '{key}': {source}")]
    StorageWrite {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// One or more field-level problems that reject a save before anything
/// is written.
#[derive(Error, Debug)]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

#[derive(Debug)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Ok when no field errors were collected, Err(self) otherwise.
    pub fn into_result(self) -> std::result::Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Default for ValidationError {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed")?;
        for e in &self.fields {
            write!(f, "\n  {}: {}", e.field, e.message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display_lists_fields() {
        let mut v = ValidationError::new();
        v.push("titleEn", "is required");
        v.push("rating", "must be between 1 and 5");
        let msg = v.to_string();
        assert!(msg.contains("Validation failed"));
        assert!(msg.contains("titleEn: is required"));
        assert!(msg.contains("rating: must be between 1 and 5"));
    }

    #[test]
    fn test_empty_validation_is_ok() {
        assert!(ValidationError::new().into_result().is_ok());
    }

    #[test]
    fn test_not_found_names_kind_and_id() {
        let err = StoreError::NotFound {
            kind: "project",
            id: "abc123".to_string(),
        };
        assert_eq!(err.to_string(), "No project found with id: abc123");
    }
}
