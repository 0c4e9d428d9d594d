//! Field-level and whole-form validation for the add-user form.
//!
//! Validation is driven by the declarative table in [`rules`]: each dotted field
//! path maps to an ordered list of checks and their messages. All functions are
//! pure and operate on trimmed input.
//!
//! # Example
//!
//! ```rust
//! use userdeck::validation::{validate_field, validate_user_form};
//! use userdeck::domain::UserFormData;
//!
//! assert_eq!(validate_field("email", "john@example.com"), None);
//! assert_eq!(
//!     validate_field("address.zipcode", "1234").as_deref(),
//!     Some("Please enter a valid zipcode")
//! );
//! assert_eq!(validate_field("favourite_colour", "teal"), None);
//!
//! let result = validate_user_form(&UserFormData::default());
//! assert!(!result.is_valid);
//! ```

pub mod rules;

use crate::domain::UserFormData;
use serde::{Deserialize, Serialize};

pub use rules::{rule_for, strip_phone_punctuation, Check, FieldRule, FIELD_RULES};

/// A validation failure attached to one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Dotted field path, e.g. `"address.street"`.
    pub field: String,
    /// Human-readable message shown next to the field.
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Outcome of validating a whole form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// At most one error per field, in field declaration order.
    pub errors: Vec<ValidationError>,
}

/// Validates a single field value.
///
/// Returns the error message for the first failing check, or `None` when the
/// value is valid or the field name is unknown.
#[must_use]
pub fn validate_field(field: &str, value: &str) -> Option<String> {
    let Some(rule) = rule_for(field) else {
        tracing::trace!(field = %field, "no rule for field, accepting");
        return None;
    };
    rule.evaluate(value).map(str::to_string)
}

/// Validates every field of the form.
///
/// Errors follow declaration order: name, username, email, phone, website,
/// address fields, company fields.
#[must_use]
pub fn validate_user_form(data: &UserFormData) -> ValidationResult {
    let errors: Vec<ValidationError> = FIELD_RULES
        .iter()
        .filter_map(|rule| {
            let value = data.field(rule.field).unwrap_or_default();
            rule.evaluate(value)
                .map(|message| ValidationError::new(rule.field, message))
        })
        .collect();

    tracing::debug!(error_count = errors.len(), "form validated");

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Returns the message recorded for `field`, if any.
#[must_use]
pub fn get_field_error<'a>(errors: &'a [ValidationError], field: &str) -> Option<&'a str> {
    errors
        .iter()
        .find(|err| err.field == field)
        .map(|err| err.message.as_str())
}

/// Replaces the error recorded for `field` with `message`, or removes it when `None`.
///
/// Keeps the one-error-per-field invariant of an error list.
pub fn replace_field_error(errors: &mut Vec<ValidationError>, field: &str, message: Option<String>) {
    errors.retain(|err| err.field != field);
    if let Some(message) = message {
        errors.push(ValidationError::new(field, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn valid_form() -> UserFormData {
        let mut form = UserFormData::default();
        form.name = "John Doe".to_string();
        form.username = "johndoe".to_string();
        form.email = "john@example.com".to_string();
        form.phone = "1234567890".to_string();
        form.address.street = "123 Main St".to_string();
        form.address.city = "New York".to_string();
        form.address.zipcode = "10001".to_string();
        form.company.name = "Tech Corp".to_string();
        form
    }

    #[rstest]
    #[case("name", "John Doe")]
    #[case("name", "Mary-Jane")]
    #[case("name", "O'Connor")]
    #[case("name", "  John  ")]
    #[case("username", "john_doe")]
    #[case("username", "abc")]
    #[case("username", "aaaaaaaaaaaaaaaaaaaa")]
    #[case("email", "test@example.com")]
    #[case("email", "user.name@domain.co.uk")]
    #[case("email", "user+tag@example.org")]
    #[case("email", "  test@example.com  ")]
    #[case("phone", "123-456-7890")]
    #[case("phone", "(123) 456-7890")]
    #[case("phone", "123.456.7890")]
    #[case("phone", "+1-555-123-4567")]
    #[case("phone", "123")]
    #[case("website", "")]
    #[case("website", "   ")]
    #[case("website", "https://example.com")]
    #[case("website", "http://www.example.org")]
    #[case("address.street", "123 Main St")]
    #[case("address.city", "New York")]
    #[case("address.zipcode", "10001")]
    #[case("address.zipcode", "10001-1234")]
    #[case("company.name", "Tech Corp")]
    #[case("address.suite", "")]
    #[case("company.catchPhrase", "")]
    #[case("company.bs", "anything at all")]
    fn accepts_valid_values(#[case] field: &str, #[case] value: &str) {
        assert_eq!(validate_field(field, value), None, "{field}={value:?}");
    }

    #[rstest]
    #[case("name", "A", "Name must be at least 2 characters")]
    #[case("name", "", "Name must be at least 2 characters")]
    #[case("name", "   ", "Name must be at least 2 characters")]
    #[case("name", "John123", "Name can only contain letters, spaces, hyphens, and apostrophes")]
    #[case("name", "John@Doe", "Name can only contain letters, spaces, hyphens, and apostrophes")]
    #[case("username", "ab", "Username must be at least 3 characters")]
    #[case("username", "user-name", "Username can only contain letters, numbers, and underscores")]
    #[case("username", "user name", "Username can only contain letters, numbers, and underscores")]
    #[case("email", "invalid-email", "Please enter a valid email address")]
    #[case("email", "test@", "Please enter a valid email address")]
    #[case("email", "@example.com", "Please enter a valid email address")]
    #[case("email", "test@example", "Please enter a valid email address")]
    #[case("email", "", "Please enter a valid email address")]
    #[case("phone", "abc-def-ghij", "Please enter a valid phone number")]
    #[case("phone", "", "Please enter a valid phone number")]
    #[case("phone", "0123456789", "Please enter a valid phone number")]
    #[case("phone", "12345678901234567", "Please enter a valid phone number")]
    #[case("phone", "1\u{0662}\u{0663}\u{0664}", "Please enter a valid phone number")]
    #[case("website", "not-a-url", "Please enter a valid website URL")]
    #[case("website", "ftp://example.com", "Please enter a valid website URL")]
    #[case("website", "example.com", "Please enter a valid website URL")]
    #[case("address.street", "  ", "Street address is required")]
    #[case("address.city", "", "City is required")]
    #[case("address.zipcode", "", "Zipcode is required")]
    #[case("address.zipcode", "1234", "Please enter a valid zipcode")]
    #[case("address.zipcode", "12345-12", "Please enter a valid zipcode")]
    #[case("address.zipcode", "\u{0661}\u{0662}\u{0663}\u{0664}\u{0665}", "Please enter a valid zipcode")]
    #[case("address.zipcode", "12345-\u{0661}\u{0662}\u{0663}\u{0664}", "Please enter a valid zipcode")]
    #[case("company.name", "", "Company name is required")]
    fn rejects_invalid_values(#[case] field: &str, #[case] value: &str, #[case] expected: &str) {
        assert_eq!(validate_field(field, value).as_deref(), Some(expected));
    }

    #[test]
    fn enforces_maximum_lengths() {
        assert_eq!(validate_field("name", &"a".repeat(50)), None);
        assert_eq!(
            validate_field("name", &"a".repeat(51)).as_deref(),
            Some("Name must be less than 50 characters")
        );
        assert_eq!(
            validate_field("username", &"a".repeat(21)).as_deref(),
            Some("Username must be less than 20 characters")
        );
    }

    #[test]
    fn unknown_fields_are_accepted() {
        assert_eq!(validate_field("address.geo.lat", "not a number"), None);
        assert_eq!(validate_field("", ""), None);
    }

    #[test]
    fn phone_allows_sixteen_digits_with_plus() {
        assert_eq!(validate_field("phone", "+1234567890123456"), None);
    }

    #[test]
    fn valid_form_has_no_errors() {
        let result = validate_user_form(&valid_form());
        assert_eq!(result, ValidationResult { is_valid: true, errors: vec![] });
    }

    #[test]
    fn empty_form_reports_every_required_field_in_order() {
        let result = validate_user_form(&UserFormData::default());
        assert!(!result.is_valid);

        let fields: Vec<&str> = result.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "name",
                "username",
                "email",
                "phone",
                "address.street",
                "address.city",
                "address.zipcode",
                "company.name",
            ]
        );
    }

    #[test]
    fn form_errors_never_repeat_a_field() {
        let mut form = valid_form();
        form.name = "1".to_string();
        let result = validate_user_form(&form);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].message, "Name must be at least 2 characters");
    }

    #[test]
    fn get_field_error_finds_message() {
        let errors = vec![
            ValidationError::new("name", "Name is required"),
            ValidationError::new("email", "Invalid email format"),
        ];
        assert_eq!(get_field_error(&errors, "email"), Some("Invalid email format"));
        assert_eq!(get_field_error(&errors, "phone"), None);
    }

    #[test]
    fn replace_field_error_keeps_one_entry_per_field() {
        let mut errors = vec![ValidationError::new("name", "old")];
        replace_field_error(&mut errors, "name", Some("new".to_string()));
        assert_eq!(errors, vec![ValidationError::new("name", "new")]);

        replace_field_error(&mut errors, "name", None);
        assert!(errors.is_empty());
    }
}
