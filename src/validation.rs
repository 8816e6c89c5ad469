// Declarative form validation for profile, family-member and event drafts.
// A schema is an ordered list of field rules; every field is evaluated and the
// first failing message per field is collected under the field's name.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::EventCategory;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// A field's current value as seen by the validator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    /// `None` when the input is empty or not a number.
    Number(Option<i64>),
    List(&'a [String]),
    Absent,
}

impl FieldValue<'_> {
    fn is_blank(&self) -> bool {
        match self {
            Self::Text(s) => s.trim().is_empty(),
            Self::Number(n) => n.is_none(),
            Self::List(_) => false,
            Self::Absent => true,
        }
    }
}

/// Anything a schema can be evaluated against.
pub trait Validate {
    fn field(&self, name: &str) -> FieldValue<'_>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text { min_len: usize },
    Number { min: i64 },
    Email,
    /// `YYYY-MM-DD`
    Date,
    Enum(&'static [&'static str]),
    List,
}

pub type CustomRule = fn(&FieldValue<'_>) -> Option<String>;

#[derive(Clone, Copy)]
pub struct FieldRule {
    pub required: bool,
    pub kind: FieldKind,
    pub required_message: &'static str,
    pub invalid_message: &'static str,
    pub custom: Option<CustomRule>,
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("required", &self.required)
            .field("kind", &self.kind)
            .field("custom", &self.custom.is_some())
            .finish()
    }
}

impl FieldRule {
    pub fn required_text(message: &'static str) -> Self {
        Self {
            required: true,
            kind: FieldKind::Text { min_len: 1 },
            required_message: message,
            invalid_message: message,
            custom: None,
        }
    }

    pub fn optional_text() -> Self {
        Self {
            required: false,
            kind: FieldKind::Text { min_len: 0 },
            required_message: "",
            invalid_message: "",
            custom: None,
        }
    }

    pub fn number_at_least(min: i64, message: &'static str) -> Self {
        Self {
            required: true,
            kind: FieldKind::Number { min },
            required_message: message,
            invalid_message: message,
            custom: None,
        }
    }

    pub fn email(message: &'static str) -> Self {
        Self {
            required: true,
            kind: FieldKind::Email,
            required_message: message,
            invalid_message: message,
            custom: None,
        }
    }

    pub fn date(required_message: &'static str, invalid_message: &'static str) -> Self {
        Self {
            required: true,
            kind: FieldKind::Date,
            required_message,
            invalid_message,
            custom: None,
        }
    }

    pub fn one_of(variants: &'static [&'static str], message: &'static str) -> Self {
        Self {
            required: true,
            kind: FieldKind::Enum(variants),
            required_message: message,
            invalid_message: message,
            custom: None,
        }
    }

    pub fn list() -> Self {
        Self {
            required: false,
            kind: FieldKind::List,
            required_message: "",
            invalid_message: "",
            custom: None,
        }
    }

    pub fn with_custom(mut self, rule: CustomRule) -> Self {
        self.custom = Some(rule);
        self
    }

    /// First failing message for this value, if any.
    pub fn check(&self, value: &FieldValue<'_>) -> Option<String> {
        if value.is_blank() {
            return self.required.then(|| self.required_message.to_string());
        }

        let kind_ok = match (self.kind, value) {
            (FieldKind::Text { min_len }, FieldValue::Text(s)) => s.trim().chars().count() >= min_len,
            (FieldKind::Number { min }, FieldValue::Number(Some(n))) => *n >= min,
            (FieldKind::Email, FieldValue::Text(s)) => EMAIL_PATTERN.is_match(s.trim()),
            (FieldKind::Date, FieldValue::Text(s)) => {
                NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").is_ok()
            }
            (FieldKind::Enum(set), FieldValue::Text(s)) => set.contains(s),
            (FieldKind::List, FieldValue::List(_)) => true,
            _ => false,
        };
        if !kind_ok {
            return Some(self.invalid_message.to_string());
        }

        self.custom.and_then(|rule| rule(value))
    }
}

/// Ordered field-name to rule mapping.
#[derive(Debug, Clone)]
pub struct Schema {
    name: &'static str,
    fields: Vec<(&'static str, FieldRule)>,
}

impl Schema {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, name: &'static str, rule: FieldRule) -> Self {
        self.fields.push((name, rule));
        self
    }

    /// Evaluates every field; returns all per-field messages at once.
    pub fn validate(&self, target: &impl Validate) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        for (name, rule) in &self.fields {
            if let Some(message) = rule.check(&target.field(name)) {
                errors.insert(name, message);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            tracing::debug!(
                schema = self.name,
                error_count = errors.len(),
                "Form validation failed"
            );
            Err(errors)
        }
    }
}

/// Field name to message. Displayed next to each input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Editing a field clears its message.
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

// ── Schemas ──────────────────────────────────────────────

pub fn profile_schema() -> Schema {
    Schema::new("profile")
        .field("name", FieldRule::required_text("Name is required"))
        .field("email", FieldRule::email("Invalid email address"))
        .field("gender", FieldRule::required_text("Gender is required"))
        .field("birth_date", FieldRule::required_text("Birth date is required"))
        .field("address", FieldRule::required_text("Address is required"))
        .field("language", FieldRule::required_text("Language is required"))
        .field("description", FieldRule::optional_text())
}

pub fn family_member_schema() -> Schema {
    Schema::new("family_member")
        .field("name", FieldRule::required_text("Name is required"))
        .field("relationship", FieldRule::required_text("Relationship is required"))
        .field("age", FieldRule::number_at_least(0, "Age must be a positive number"))
        .field("gender", FieldRule::required_text("Gender is required"))
        .field("blood_type", FieldRule::optional_text())
        .field("allergies", FieldRule::list())
        .field("medications", FieldRule::list())
        .field("conditions", FieldRule::list())
        .field("address", FieldRule::optional_text())
}

pub fn health_event_schema() -> Schema {
    Schema::new("health_event")
        .field("title", FieldRule::required_text("Title is required"))
        .field("date", FieldRule::date("Date is required", "Invalid date"))
        .field("content", FieldRule::required_text("Content is required"))
        .field(
            "category",
            FieldRule::one_of(EventCategory::variants(), "Invalid category"),
        )
        .field(
            "family_member_id",
            FieldRule::number_at_least(1, "Family member is required"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Minimal form for exercising schemas directly.
    #[derive(Default)]
    struct Form {
        text: HashMap<&'static str, String>,
        numbers: HashMap<&'static str, Option<i64>>,
    }

    impl Form {
        fn text(mut self, name: &'static str, value: &str) -> Self {
            self.text.insert(name, value.to_string());
            self
        }

        fn number(mut self, name: &'static str, value: Option<i64>) -> Self {
            self.numbers.insert(name, value);
            self
        }
    }

    impl Validate for Form {
        fn field(&self, name: &str) -> FieldValue<'_> {
            if let Some(n) = self.numbers.get(name) {
                return FieldValue::Number(*n);
            }
            self.text
                .get(name)
                .map(|s| FieldValue::Text(s))
                .unwrap_or(FieldValue::Absent)
        }
    }

    fn valid_profile() -> Form {
        Form::default()
            .text("name", "Demo User")
            .text("email", "user@example.com")
            .text("gender", "Other")
            .text("birth_date", "1990-01-01")
            .text("address", "1 Main St")
            .text("language", "English")
    }

    #[test]
    fn valid_profile_passes() {
        assert!(profile_schema().validate(&valid_profile()).is_ok());
    }

    #[test]
    fn empty_profile_collects_every_required_message() {
        let errors = profile_schema().validate(&Form::default()).unwrap_err();
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("email"), Some("Invalid email address"));
        assert_eq!(errors.get("language"), Some("Language is required"));
        assert_eq!(errors.get("description"), None);
        assert_eq!(errors.len(), 6);
    }

    #[test]
    fn malformed_email_rejected() {
        let form = valid_profile().text("email", "user@example");
        let errors = profile_schema().validate(&form).unwrap_err();
        assert_eq!(errors.get("email"), Some("Invalid email address"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn whitespace_counts_as_missing() {
        let form = valid_profile().text("name", "   ");
        let errors = profile_schema().validate(&form).unwrap_err();
        assert_eq!(errors.get("name"), Some("Name is required"));
    }

    #[test]
    fn negative_age_rejected() {
        let form = Form::default()
            .text("name", "Child 1")
            .text("relationship", "Child")
            .text("gender", "Female")
            .number("age", Some(-1));
        let errors = family_member_schema().validate(&form).unwrap_err();
        assert_eq!(errors.get("age"), Some("Age must be a positive number"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn event_schema_checks_date_and_category() {
        let form = Form::default()
            .text("title", "Flu Shot")
            .text("date", "2024-02-30")
            .text("content", "Seasonal")
            .text("category", "surgery")
            .number("family_member_id", Some(2));
        let errors = health_event_schema().validate(&form).unwrap_err();
        assert_eq!(errors.get("date"), Some("Invalid date"));
        assert_eq!(errors.get("category"), Some("Invalid category"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn custom_rule_runs_after_kind_check() {
        fn no_digits(value: &FieldValue<'_>) -> Option<String> {
            match value {
                FieldValue::Text(s) if s.chars().any(|c| c.is_ascii_digit()) => {
                    Some("No digits allowed".into())
                }
                _ => None,
            }
        }
        let schema = Schema::new("test")
            .field("name", FieldRule::required_text("Name is required").with_custom(no_digits));
        let errors = schema.validate(&Form::default().text("name", "R2D2")).unwrap_err();
        assert_eq!(errors.get("name"), Some("No digits allowed"));
    }

    #[test]
    fn clear_removes_single_field() {
        let mut errors = profile_schema().validate(&Form::default()).unwrap_err();
        errors.clear("name");
        assert_eq!(errors.get("name"), None);
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn display_joins_fields() {
        let mut errors = ValidationErrors::default();
        errors.insert("age", "bad");
        errors.insert("name", "missing");
        assert_eq!(errors.to_string(), "age: bad; name: missing");
    }

    #[test]
    fn errors_are_the_store_error_source() {
        use std::error::Error;

        let mut errors = ValidationErrors::default();
        errors.insert("title", "Title is required");
        let err = crate::store::StoreError::from(errors);
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("title: Title is required"));
    }
}
