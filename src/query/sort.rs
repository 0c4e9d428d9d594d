//! Type-aware, stable sorting of user lists.
//!
//! Sorting never mutates its input. Each column exposes a [`SortValue`]; two
//! values of the same shape are compared natively (strings with a locale-style
//! collation, numbers numerically, nested objects by their serialized JSON), and
//! mixed shapes fall back to string comparison.
//!
//! Nested objects (`address`, `company`) compare by serialized structure, not by a
//! meaningful sub-field. The resulting order is deterministic but mostly tracks the
//! first serialized member (`street`, company `name`).

use crate::domain::User;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Sort direction of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Applies the direction to an ascending comparison result.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Sortable user fields.
///
/// A closed set, so a sort configuration can never reference a missing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Id,
    Name,
    Username,
    Email,
    Phone,
    Website,
    Address,
    Company,
}

impl SortKey {
    /// Columns the table offers for sorting unless configured otherwise.
    pub const DEFAULT_SORTABLE: [Self; 3] = [Self::Name, Self::Email, Self::Username];

    /// Returns the field name as it appears in the API payload.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Username => "username",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Website => "website",
            Self::Address => "address",
            Self::Company => "company",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    #[must_use]
    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Computes the configuration after a click on column `key`.
    ///
    /// Clicking the active column flips its direction; any other column starts
    /// ascending.
    ///
    /// # Example
    ///
    /// ```rust
    /// use userdeck::query::{SortConfig, SortDirection, SortKey};
    ///
    /// let first = SortConfig::toggle(None, SortKey::Name);
    /// assert_eq!(first.direction, SortDirection::Asc);
    /// let second = SortConfig::toggle(Some(first), SortKey::Name);
    /// assert_eq!(second.direction, SortDirection::Desc);
    /// let other = SortConfig::toggle(Some(second), SortKey::Email);
    /// assert_eq!(other, SortConfig::new(SortKey::Email, SortDirection::Asc));
    /// ```
    #[must_use]
    pub fn toggle(current: Option<Self>, key: SortKey) -> Self {
        match current {
            Some(config) if config.key == key => Self::new(key, config.direction.flipped()),
            _ => Self::new(key, SortDirection::Asc),
        }
    }

    /// Returns the direction of `key` if it is the active column.
    #[must_use]
    pub fn direction_for(current: Option<Self>, key: SortKey) -> Option<SortDirection> {
        current
            .filter(|config| config.key == key)
            .map(|config| config.direction)
    }
}

/// Returns `true` if `key` appears in the sortable column list.
#[must_use]
pub fn is_sortable(sortable: &[SortKey], key: SortKey) -> bool {
    sortable.contains(&key)
}

/// Shape-tagged value of one column for one user.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Text(String),
    Number(i64),
    /// Canonical JSON of a nested object.
    Object(String),
    Missing,
}

impl SortValue {
    /// Extracts the value of `key` from `user`.
    #[must_use]
    pub fn of(user: &User, key: SortKey) -> Self {
        match key {
            SortKey::Id => Self::Number(user.id),
            SortKey::Name => Self::Text(user.name.clone()),
            SortKey::Username => Self::Text(user.username.clone()),
            SortKey::Email => Self::Text(user.email.clone()),
            SortKey::Phone => Self::Text(user.phone.clone()),
            SortKey::Website => user
                .website
                .clone()
                .map_or(Self::Missing, Self::Text),
            SortKey::Address => Self::object(&user.address),
            SortKey::Company => Self::object(&user.company),
        }
    }

    fn object<T: Serialize>(value: &T) -> Self {
        serde_json::to_string(value).map_or(Self::Missing, Self::Object)
    }

    fn as_coerced_string(&self) -> String {
        match self {
            Self::Text(s) | Self::Object(s) => s.clone(),
            Self::Number(n) => n.to_string(),
            Self::Missing => String::new(),
        }
    }
}

/// Compares two column values in ascending order.
#[must_use]
pub fn compare_values(a: &SortValue, b: &SortValue) -> Ordering {
    match (a, b) {
        (SortValue::Text(a), SortValue::Text(b)) | (SortValue::Object(a), SortValue::Object(b)) => {
            locale_compare(a, b)
        }
        (SortValue::Number(a), SortValue::Number(b)) => a.cmp(b),
        _ => locale_compare(&a.as_coerced_string(), &b.as_coerced_string()),
    }
}

/// Locale-style string collation.
///
/// Three levels, each consulted only when the previous one ties:
/// 1. base letters, case-insensitive with diacritics removed (`É` sorts as `e`)
/// 2. accents, unaccented before accented (`e` before `é`)
/// 3. case, lowercase before uppercase at the first differing position
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded_case(a).cmp(folded_case(b)))
        .then_with(|| {
            a.chars().zip(b.chars()).find(|(x, y)| x != y).map_or_else(
                || a.len().cmp(&b.len()),
                |(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    _ => x.cmp(&y),
                },
            )
        })
}

/// Lowercased canonical decomposition with combining marks kept.
fn folded_case(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd().flat_map(char::to_lowercase)
}

/// [`folded_case`] with combining marks dropped.
fn base_letters(text: &str) -> impl Iterator<Item = char> + '_ {
    folded_case(text).filter(|c| !is_combining_mark(*c))
}

/// Returns a new list ordered by `key` in `direction`.
///
/// The sort is stable: users with equal values keep their input order in both
/// directions.
///
/// # Example
///
/// ```rust
/// use userdeck::query::{sort_users, SortDirection, SortKey};
///
/// let users = vec![];
/// assert!(sort_users(&users, SortKey::Name, SortDirection::Asc).is_empty());
/// ```
#[must_use]
pub fn sort_users(users: &[User], key: SortKey, direction: SortDirection) -> Vec<User> {
    let _span = tracing::debug_span!("sort_users",
        count = users.len(),
        key = %key,
        direction = ?direction
    ).entered();

    let mut keyed: Vec<(SortValue, &User)> = users
        .iter()
        .map(|user| (SortValue::of(user, key), user))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| direction.apply(compare_values(a, b)));

    keyed.into_iter().map(|(_, user)| user.clone()).collect()
}

/// Sorts by `config`, or returns the list unchanged when no sort is active.
#[must_use]
pub fn apply_sort(users: &[User], config: Option<SortConfig>) -> Vec<User> {
    config.map_or_else(
        || users.to_vec(),
        |config| sort_users(users, config.key, config.direction),
    )
}
