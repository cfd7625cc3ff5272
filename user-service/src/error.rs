use crate::models::User;
use crate::validation::ValidationErrors;
use std::io;
use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Not found: user with id {0}")]
    NotFound(u64),

    /// The candidate is handed back so the caller can redisplay it
    #[error("Invalid input: {errors}")]
    Validation {
        candidate: User,
        errors: ValidationErrors,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let mut errors = ValidationErrors::new();
        errors.add("Name", "Required");
        let err = ServiceError::Validation {
            candidate: User::default(),
            errors,
        };
        assert_eq!(err.to_string(), "Invalid input: Name: Required");
    }

    #[test]
    fn test_not_found_display() {
        let err = ServiceError::NotFound(7);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Not found: user with id 7");
    }
}
