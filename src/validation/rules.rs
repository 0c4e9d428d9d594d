//! Declarative field rule table.
//!
//! Each [`FieldRule`] pairs a dotted field path with an ordered list of
//! [`Check`]s. A value is evaluated check by check and the first failing check
//! supplies the error message; a field with no checks is always valid.

use regex::Regex;
use std::sync::LazyLock;

static NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s\-']+$").expect("valid name regex"));
static USERNAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("valid username regex"));
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("valid phone regex"));
static WEBSITE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://.+").expect("valid website regex"));
static ZIPCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}(-[0-9]{4})?$").expect("valid zipcode regex"));

/// A single constraint applied to a trimmed field value.
#[derive(Debug, Clone, Copy)]
pub enum Check {
    /// Value must not be empty.
    Required(&'static str),
    /// Value must have at least this many characters.
    MinChars(usize, &'static str),
    /// Value must have at most this many characters.
    MaxChars(usize, &'static str),
    /// Value must match the pattern.
    Pattern(&'static LazyLock<Regex>, &'static str),
    /// Value, with phone punctuation removed, must match the pattern.
    PhonePattern(&'static LazyLock<Regex>, &'static str),
    /// Empty values pass; non-empty values must match the pattern.
    OptionalPattern(&'static LazyLock<Regex>, &'static str),
}

impl Check {
    /// Evaluates the check, returning the failure message if it does not hold.
    #[must_use]
    pub fn evaluate(&self, value: &str) -> Option<&'static str> {
        let passes = match self {
            Self::Required(_) => !value.is_empty(),
            Self::MinChars(min, _) => value.chars().count() >= *min,
            Self::MaxChars(max, _) => value.chars().count() <= *max,
            Self::Pattern(re, _) => re.is_match(value),
            Self::PhonePattern(re, _) => re.is_match(&strip_phone_punctuation(value)),
            Self::OptionalPattern(re, _) => value.is_empty() || re.is_match(value),
        };

        if passes {
            None
        } else {
            Some(self.message())
        }
    }

    const fn message(&self) -> &'static str {
        match self {
            Self::Required(msg)
            | Self::MinChars(_, msg)
            | Self::MaxChars(_, msg)
            | Self::Pattern(_, msg)
            | Self::PhonePattern(_, msg)
            | Self::OptionalPattern(_, msg) => msg,
        }
    }
}

/// Removes spaces, hyphens, parentheses and dots from a phone number.
#[must_use]
pub fn strip_phone_punctuation(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, ' ' | '\t' | '\n' | '\r' | '-' | '(' | ')' | '.'))
        .collect()
}

/// Validation rule for one form field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// Dotted field path, e.g. `"address.zipcode"`.
    pub field: &'static str,
    /// Checks evaluated in order; empty means the field is unconstrained.
    pub checks: &'static [Check],
}

impl FieldRule {
    /// Returns the message of the first failing check, if any.
    #[must_use]
    pub fn evaluate(&self, raw: &str) -> Option<&'static str> {
        let value = raw.trim();
        self.checks.iter().find_map(|check| check.evaluate(value))
    }
}

/// All form fields in declaration order.
///
/// Whole-form validation reports errors in this order.
pub static FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        field: "name",
        checks: &[
            Check::MinChars(2, "Name must be at least 2 characters"),
            Check::MaxChars(50, "Name must be less than 50 characters"),
            Check::Pattern(
                &NAME_CHARS,
                "Name can only contain letters, spaces, hyphens, and apostrophes",
            ),
        ],
    },
    FieldRule {
        field: "username",
        checks: &[
            Check::MinChars(3, "Username must be at least 3 characters"),
            Check::MaxChars(20, "Username must be less than 20 characters"),
            Check::Pattern(
                &USERNAME_CHARS,
                "Username can only contain letters, numbers, and underscores",
            ),
        ],
    },
    FieldRule {
        field: "email",
        checks: &[Check::Pattern(&EMAIL, "Please enter a valid email address")],
    },
    FieldRule {
        field: "phone",
        checks: &[Check::PhonePattern(&PHONE, "Please enter a valid phone number")],
    },
    FieldRule {
        field: "website",
        checks: &[Check::OptionalPattern(&WEBSITE, "Please enter a valid website URL")],
    },
    FieldRule {
        field: "address.street",
        checks: &[Check::Required("Street address is required")],
    },
    FieldRule {
        field: "address.suite",
        checks: &[],
    },
    FieldRule {
        field: "address.city",
        checks: &[Check::Required("City is required")],
    },
    FieldRule {
        field: "address.zipcode",
        checks: &[
            Check::Required("Zipcode is required"),
            Check::Pattern(&ZIPCODE, "Please enter a valid zipcode"),
        ],
    },
    FieldRule {
        field: "company.name",
        checks: &[Check::Required("Company name is required")],
    },
    FieldRule {
        field: "company.catchPhrase",
        checks: &[],
    },
    FieldRule {
        field: "company.bs",
        checks: &[],
    },
];

/// Looks up the rule for a dotted field path.
#[must_use]
pub fn rule_for(field: &str) -> Option<&'static FieldRule> {
    FIELD_RULES.iter().find(|rule| rule.field == field)
}
