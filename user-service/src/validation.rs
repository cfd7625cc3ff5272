// Candidate Validation
// Explicit validation results that travel with the bound candidate

use crate::models::User;
use std::fmt;

/// A single failed rule on one input field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ordered collection of field errors. Empty means the candidate is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Errors recorded against `field`
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.errors.iter().filter(move |e| e.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Check the required-field rules for a user candidate.
pub fn validate(user: &User) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if user.name.trim().is_empty() {
        errors.add("Name", "Required");
    }
    errors
}

/// A bound candidate together with the outcome of validating it.
///
/// Callers inspect `errors` to decide between redisplaying the candidate and
/// committing it. Binding layers may attach their own errors (for example an
/// unparsable id) before the candidate reaches the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bound<T> {
    pub candidate: T,
    pub errors: ValidationErrors,
}

impl Bound<User> {
    /// Bind a candidate and run the user rules against it
    pub fn user(candidate: User) -> Self {
        let errors = validate(&candidate);
        Self { candidate, errors }
    }
}

impl<T> Bound<T> {
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.add(field, message);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Split into the candidate and either `Ok(())` or the collected errors
    pub fn into_parts(self) -> (T, Result<(), ValidationErrors>) {
        if self.errors.is_empty() {
            (self.candidate, Ok(()))
        } else {
            (self.candidate, Err(self.errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_name_is_required() {
        let errors = validate(&User::new(0, "", "john@example.com"));
        assert_eq!(errors.len(), 1);
        let name_errors: Vec<_> = errors.for_field("Name").collect();
        assert_eq!(name_errors[0].message, "Required");
    }

    #[test]
    fn test_whitespace_name_is_required() {
        assert!(!validate(&User::new(0, "   ", "")).is_empty());
    }

    #[test]
    fn test_email_is_optional() {
        assert!(validate(&User::new(1, "John Doe", "")).is_empty());
    }

    #[test]
    fn test_bound_with_external_error_is_invalid() {
        let mut bound = Bound::user(User::new(1, "John Doe", "john@example.com"));
        assert!(bound.is_valid());

        bound.add_error("Name", "Required");
        assert!(!bound.is_valid());

        let (candidate, result) = bound.into_parts();
        assert_eq!(candidate.name, "John Doe");
        assert_eq!(result.unwrap_err().to_string(), "Name: Required");
    }
}
