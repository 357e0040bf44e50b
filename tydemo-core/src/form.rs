//! Server-side validation of the demo contact form.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub age: String,
}

/// (field, message) pairs in the order the fields are checked: email, name, age.
/// Empty when the form is valid.
pub type FieldErrors = Vec<(&'static str, String)>;

impl ContactForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(("email", "Email is required".into()));
        } else if !email.contains('@') {
            errors.push(("email", "Please enter a valid email address".into()));
        }

        if self.name.trim().chars().count() < 2 {
            errors.push(("name", "Name must be at least 2 characters".into()));
        }

        let age = self.age.trim();
        if !age.is_empty() {
            // Digits only: `u32::from_str` would also take a leading '+'.
            let parsed = if age.chars().all(|c| c.is_ascii_digit()) {
                age.parse::<u32>().ok()
            } else {
                None
            };
            match parsed {
                Some(n) if (13..=120).contains(&n) => {}
                Some(_) => errors.push(("age", "Age must be between 13 and 120".into())),
                None => errors.push(("age", "Age must be a number".into())),
            }
        }

        errors
    }
}

/// Message for `field`, if it failed.
pub fn error_for<'a>(errors: &'a FieldErrors, field: &str) -> Option<&'a str> {
    errors
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, message)| message.as_str())
}
