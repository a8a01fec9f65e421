//! Typed request validation.
//!
//! A [`Schema`] lists each field together with the [`Rule`]s it must satisfy. Validation
//! collects every failing rule for every field instead of stopping at the first one, and a
//! field that is absent from the request is only checked when it carries [`Rule::Required`].
//!
//! ```ignore
//! Schema::new()
//!     .field("name", [Rule::Required, Rule::String, Rule::Max(100)])
//!     .field("age", [Rule::Integer])
//!     .validate(&input)?;
//! ```

pub mod input;
pub mod query;
pub mod rule;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub use input::Input;
pub use query::Query;
pub use rule::Rule;

use crate::model::api::{ErrorDto, FieldErrors};

/// Per-field validation messages, answered with 400.
#[derive(Error, Debug, Default)]
#[error("Validation failed")]
pub struct ValidationErrors(pub FieldErrors);

impl ValidationErrors {
    /// A single message for a single field.
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.to_string(), vec![message.into()]);

        Self(errors)
    }

    pub fn push(&mut self, field: &str, message: String) {
        self.0.entry(field.to_string()).or_default().push(message);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoResponse for ValidationErrors {
    fn into_response(self) -> Response {
        tracing::debug!(fields = ?self.0.keys().collect::<Vec<_>>(), "{}", self);

        ErrorDto::with_errors(self.to_string(), self.0).respond(StatusCode::BAD_REQUEST)
    }
}

/// Declarative list of fields and the rules applied to each.
#[derive(Debug, Default)]
pub struct Schema {
    fields: Vec<(&'static str, Vec<Rule>)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &'static str, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.fields.push((name, rules.into_iter().collect()));
        self
    }

    /// Runs every rule against `input`.
    ///
    /// # Returns
    /// - `Ok(())`: All present fields satisfy their rules
    /// - `Err(ValidationErrors)`: Every failed rule keyed by field name
    pub fn validate(&self, input: &Input) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        for (field, rules) in &self.fields {
            let value = input.0.get(*field);
            let required = rules.iter().any(|rule| matches!(rule, Rule::Required));

            if value.is_none_or(|value| value.is_null()) && !required {
                continue;
            }

            for rule in rules {
                if let Some(message) = rule.check(field, value) {
                    errors.push(field, message);
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
