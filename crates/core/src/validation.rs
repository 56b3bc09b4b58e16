//! Declarative request validation for note operations.
//!
//! Each operation owns a [`NoteSchema`]: a static list of [`FieldRule`]s
//! evaluated uniformly against the raw JSON body. Evaluation never stops at
//! the first problem; every violation is collected so the caller gets the
//! full list in one response.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::note::{NewNote, NoteChanges};

/// Whether a field must be present in the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
}

/// Normalization applied to a field that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Trim surrounding whitespace, then HTML-escape.
    TrimEscape,
}

impl Transform {
    fn apply(self, raw: &str) -> String {
        match self {
            Self::TrimEscape => sanitize(raw),
        }
    }
}

/// One string field of a request body.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub presence: Presence,
    pub transform: Transform,
}

impl FieldRule {
    const fn required(field: &'static str) -> Self {
        Self { field, presence: Presence::Required, transform: Transform::TrimEscape }
    }

    const fn optional(field: &'static str) -> Self {
        Self { field, presence: Presence::Optional, transform: Transform::TrimEscape }
    }
}

/// Where in the request a violation was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationLocation {
    Body,
    Params,
    Query,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub location: ViolationLocation,
    pub message: String,
}

impl FieldViolation {
    pub fn new(
        field: impl Into<String>,
        location: ViolationLocation,
        message: impl Into<String>,
    ) -> Self {
        Self { field: field.into(), location, message: message.into() }
    }
}

/// Every violation found while validating one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub violations: Vec<FieldViolation>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("validation failed")?;
        for (i, v) in self.violations.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{sep}{}", v.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl ValidationErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn push(&mut self, violation: FieldViolation) {
        self.violations.push(violation);
    }

    /// `Ok(())` when nothing was collected, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl From<FieldViolation> for ValidationErrors {
    fn from(violation: FieldViolation) -> Self {
        Self { violations: vec![violation] }
    }
}

/// Per-operation body schema.
#[derive(Debug, Clone, Copy)]
pub struct NoteSchema {
    rules: &'static [FieldRule],
}

const CREATE_RULES: &[FieldRule] =
    &[FieldRule::required("title"), FieldRule::required("content")];

const UPDATE_RULES: &[FieldRule] =
    &[FieldRule::optional("title"), FieldRule::optional("content")];

impl NoteSchema {
    /// Create: `title` and `content` are required strings.
    pub const CREATE: Self = Self { rules: CREATE_RULES };
    /// Replace and patch: `title` and `content` are optional strings.
    pub const UPDATE: Self = Self { rules: UPDATE_RULES };

    /// Evaluate every rule against `body`.
    ///
    /// Returns one entry per rule, in rule order: `Some(normalized)` when the
    /// field was supplied, `None` when an optional field was absent or null.
    pub fn evaluate(&self, body: &Value) -> Result<Vec<Option<String>>, ValidationErrors> {
        let Some(object) = body.as_object() else {
            return Err(FieldViolation::new(
                "body",
                ViolationLocation::Body,
                "request body must be a JSON object",
            )
            .into());
        };

        let mut errors = ValidationErrors::default();
        let mut values = Vec::with_capacity(self.rules.len());
        for rule in self.rules {
            match object.get(rule.field) {
                None | Some(Value::Null) => {
                    if rule.presence == Presence::Required {
                        errors.push(FieldViolation::new(
                            rule.field,
                            ViolationLocation::Body,
                            format!("{} is required", rule.field),
                        ));
                    }
                    values.push(None);
                },
                Some(Value::String(raw)) => values.push(Some(rule.transform.apply(raw))),
                Some(_) => {
                    errors.push(FieldViolation::new(
                        rule.field,
                        ViolationLocation::Body,
                        format!("{} must be a string", rule.field),
                    ));
                    values.push(None);
                },
            }
        }
        errors.into_result()?;
        Ok(values)
    }

    /// Validate a create body into a [`NewNote`].
    pub fn new_note(body: &Value) -> Result<NewNote, ValidationErrors> {
        let mut values = Self::CREATE.evaluate(body)?.into_iter();
        match (values.next().flatten(), values.next().flatten()) {
            (Some(title), Some(content)) => Ok(NewNote { title, content }),
            // evaluate() already rejected missing required fields
            _ => Err(FieldViolation::new(
                "body",
                ViolationLocation::Body,
                "title and content are required",
            )
            .into()),
        }
    }

    /// Validate a replace/patch body into [`NoteChanges`].
    pub fn note_changes(body: &Value) -> Result<NoteChanges, ValidationErrors> {
        let mut values = Self::UPDATE.evaluate(body)?.into_iter();
        Ok(NoteChanges { title: values.next().flatten(), content: values.next().flatten() })
    }
}

/// Parse a path `id` that must be an integer.
pub fn parse_note_id(raw: &str) -> Result<i64, FieldViolation> {
    raw.parse::<i64>()
        .map_err(|_| FieldViolation::new("id", ViolationLocation::Params, "id must be an integer"))
}

/// Trim surrounding whitespace, then HTML-escape.
#[must_use]
pub fn sanitize(raw: &str) -> String {
    escape_html(raw.trim())
}

/// Replace HTML-significant characters with their entity form.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            '\\' => out.push_str("&#x5C;"),
            '`' => out.push_str("&#96;"),
            other => out.push(other),
        }
    }
    out
}
