//! Add-user form controller.
//!
//! [`UserForm`] holds the values being edited, the per-field error list, the set
//! of touched fields, and the submitting flag. Field-level validation runs on
//! change and on blur (each switchable through [`FormOptions`]); whole-form
//! validation runs on submit. A successful submit synthesizes a [`User`] and
//! prepends it to the store.
//!
//! # Example
//!
//! ```rust
//! use userdeck::app::{UserForm, UserStore};
//!
//! let mut store = UserStore::new();
//! let mut form = UserForm::default();
//! form.open();
//!
//! form.change("name", "J");
//! assert_eq!(form.field_error("name"), Some("Name must be at least 2 characters"));
//!
//! assert!(form.submit(&mut store).is_err());
//! assert!(store.state().users.is_empty());
//! ```

use std::collections::BTreeSet;

use super::{Action, UserStore};
use crate::domain::{User, UserFormData};
use crate::validation::{
    get_field_error, replace_field_error, validate_field, validate_user_form, ValidationError,
};

/// When field-level validation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormOptions {
    pub validate_on_change: bool,
    pub validate_on_blur: bool,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            validate_on_change: true,
            validate_on_blur: true,
        }
    }
}

/// Summary flags for the submit button and error banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormState {
    pub is_valid: bool,
    pub has_errors: bool,
    pub error_count: usize,
    pub is_submitting: bool,
}

/// State of the add-user form.
#[derive(Debug, Clone, Default)]
pub struct UserForm {
    options: FormOptions,
    data: UserFormData,
    errors: Vec<ValidationError>,
    touched: BTreeSet<String>,
    is_submitting: bool,
    is_open: bool,
}

impl UserForm {
    #[must_use]
    pub fn new(options: FormOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Shows the form.
    pub fn open(&mut self) {
        self.is_open = true;
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Current field values.
    #[must_use]
    pub const fn data(&self) -> &UserFormData {
        &self.data
    }

    /// Current errors, at most one per field.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Writes `value` at the dotted path `field`.
    ///
    /// Revalidates the field when `validate_on_change` is set and marks it
    /// touched. Unknown paths are ignored.
    pub fn change(&mut self, field: &str, value: &str) {
        let Some(slot) = self.data.field_mut(field) else {
            tracing::debug!(field = %field, "ignoring change to unknown form field");
            return;
        };
        value.clone_into(slot);

        if self.options.validate_on_change {
            replace_field_error(&mut self.errors, field, validate_field(field, value));
        }
        self.touched.insert(field.to_string());
    }

    /// Marks `field` touched, revalidating its current value when
    /// `validate_on_blur` is set.
    pub fn blur(&mut self, field: &str) {
        if self.options.validate_on_blur {
            let value = self.data.field(field).unwrap_or_default();
            let message = validate_field(field, value);
            replace_field_error(&mut self.errors, field, message);
        }
        self.touched.insert(field.to_string());
    }

    #[must_use]
    pub fn field_error(&self, field: &str) -> Option<&str> {
        get_field_error(&self.errors, field)
    }

    #[must_use]
    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    /// `true` when `field` is touched and currently has an error.
    #[must_use]
    pub fn has_field_error(&self, field: &str) -> bool {
        self.is_touched(field) && self.field_error(field).is_some()
    }

    /// Clears all errors and the touched set.
    pub fn clear_errors(&mut self) {
        self.errors.clear();
        self.touched.clear();
    }

    pub fn clear_field_error(&mut self, field: &str) {
        replace_field_error(&mut self.errors, field, None);
    }

    #[must_use]
    pub fn form_state(&self) -> FormState {
        FormState {
            is_valid: self.errors.is_empty(),
            has_errors: !self.errors.is_empty(),
            error_count: self.errors.len(),
            is_submitting: self.is_submitting,
        }
    }

    /// Validates the whole form and, if valid, adds the new user to `store`.
    ///
    /// On success the synthesized user is prepended to the store, the form is
    /// reset and closed, and the user is returned. On failure the error list is
    /// replaced by the whole-form result and returned; the store is untouched.
    ///
    /// # Errors
    ///
    /// Returns the validation errors, in field declaration order, when any
    /// field is invalid.
    pub fn submit(&mut self, store: &mut UserStore) -> Result<User, Vec<ValidationError>> {
        let _span = tracing::debug_span!("submit_user_form").entered();
        self.is_submitting = true;

        let result = validate_user_form(&self.data);
        self.errors = result.errors;

        let outcome = if result.is_valid {
            let user = std::mem::take(&mut self.data).into_new_user();
            store.dispatch(Action::AddUser(user.clone()));
            self.clear_errors();
            self.is_open = false;
            tracing::info!(user_id = user.id, "user added");
            Ok(user)
        } else {
            tracing::debug!(error_count = self.errors.len(), "form rejected");
            Err(self.errors.clone())
        };

        self.is_submitting = false;
        outcome
    }

    /// Discards values and errors and closes the form.
    pub fn cancel(&mut self) {
        self.data = UserFormData::default();
        self.clear_errors();
        self.is_open = false;
    }
}
