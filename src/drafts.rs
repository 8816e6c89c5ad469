//! Form drafts: editable copies of an event, a family member or the profile.
//!
//! Each keystroke updates the draft by field name. Nothing touches the owning
//! store until the draft validates and is applied in one step.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config;
use crate::models::{
    Attachment, AttachmentKind, EventCategory, FamilyMember, HealthEvent, MemberId, MemberList,
    UserProfile,
};
use crate::validation::{
    family_member_schema, health_event_schema, profile_schema, FieldValue, Validate,
    ValidationErrors,
};

/// Score given to members added through the form (not editable there).
pub const DEFAULT_HEALTH_SCORE: u8 = 100;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DraftError {
    #[error("Unknown field '{field}' on {form} form")]
    UnknownField { form: &'static str, field: String },

    #[error("Invalid number for {field}: {value}")]
    InvalidNumber { field: String, value: String },

    #[error("No item at index {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn remove_at<T>(items: &mut Vec<T>, index: usize) -> Result<T, DraftError> {
    if index < items.len() {
        Ok(items.remove(index))
    } else {
        Err(DraftError::IndexOutOfRange {
            index,
            len: items.len(),
        })
    }
}

// ═══════════════════════════════════════════
// Event draft
// ═══════════════════════════════════════════

/// A file picked in the event form. Only the name is kept; nothing is uploaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingAttachment {
    pub file_name: String,
}

impl PendingAttachment {
    pub fn to_attachment(&self) -> Attachment {
        Attachment {
            kind: AttachmentKind::from_file_name(&self.file_name),
            locator: format!("{}/{}", config::ATTACHMENT_LOCATOR_PREFIX, self.file_name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    /// `YYYY-MM-DD`, as held by the date input.
    pub date: String,
    pub content: String,
    pub category: String,
    pub family_member_id: Option<MemberId>,
    pub attachments: Vec<PendingAttachment>,
}

impl EventDraft {
    /// Blank "Add Event" form dated `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            date: today.format("%Y-%m-%d").to_string(),
            content: String::new(),
            category: EventCategory::Medical.as_str().to_string(),
            family_member_id: Some(config::DEFAULT_FORM_MEMBER_ID),
            attachments: Vec::new(),
        }
    }

    /// "Edit Event" form. Existing attachments stay on the event; the
    /// draft only carries newly picked files.
    pub fn from_event(event: &HealthEvent) -> Self {
        Self {
            title: event.title.clone(),
            date: event.date.format("%Y-%m-%d").to_string(),
            content: event.content.clone(),
            category: event.category.as_str().to_string(),
            family_member_id: Some(event.family_member_id),
            attachments: Vec::new(),
        }
    }

    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), DraftError> {
        match name {
            "title" => self.title = value.to_string(),
            "date" => self.date = value.to_string(),
            "content" => self.content = value.to_string(),
            "category" => self.category = value.to_string(),
            "family_member_id" => {
                self.family_member_id = if value.trim().is_empty() {
                    None
                } else {
                    Some(value.trim().parse().map_err(|_| DraftError::InvalidNumber {
                        field: name.to_string(),
                        value: value.to_string(),
                    })?)
                };
            }
            _ => {
                return Err(DraftError::UnknownField {
                    form: "event",
                    field: name.to_string(),
                })
            }
        }
        Ok(())
    }

    pub fn add_attachment(&mut self, file_name: impl Into<String>) {
        self.attachments.push(PendingAttachment {
            file_name: file_name.into(),
        });
    }

    pub fn remove_attachment(&mut self, index: usize) -> Result<PendingAttachment, DraftError> {
        remove_at(&mut self.attachments, index)
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        health_event_schema().validate(self)
    }

    /// Validates, then parses the typed fields.
    fn parsed(&self) -> Result<(NaiveDate, EventCategory, MemberId), ValidationErrors> {
        self.validate()?;

        let mut errors = ValidationErrors::default();
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| errors.insert("date", "Invalid date"))
            .ok();
        let category = EventCategory::from_str(&self.category)
            .map_err(|_| errors.insert("category", "Invalid category"))
            .ok();
        let member = self.family_member_id;
        if member.is_none() {
            errors.insert("family_member_id", "Family member is required");
        }

        match (date, category, member) {
            (Some(d), Some(c), Some(m)) => Ok((d, c, m)),
            _ => Err(errors),
        }
    }

    /// Builds a new event with a fresh id.
    pub fn into_new_event(self) -> Result<HealthEvent, ValidationErrors> {
        let (date, category, family_member_id) = self.parsed()?;
        Ok(HealthEvent {
            id: Uuid::new_v4().to_string(),
            title: self.title.trim().to_string(),
            date,
            content: self.content,
            category,
            family_member_id,
            attachments: self.attachments.iter().map(PendingAttachment::to_attachment).collect(),
        })
    }

    /// Writes the draft into `event` all at once. On error `event` is untouched.
    pub fn apply_to(&self, event: &mut HealthEvent) -> Result<(), ValidationErrors> {
        let (date, category, family_member_id) = self.parsed()?;
        event.title = self.title.trim().to_string();
        event.date = date;
        event.content = self.content.clone();
        event.category = category;
        event.family_member_id = family_member_id;
        event
            .attachments
            .extend(self.attachments.iter().map(PendingAttachment::to_attachment));
        Ok(())
    }
}

impl Validate for EventDraft {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "title" => FieldValue::Text(&self.title),
            "date" => FieldValue::Text(&self.date),
            "content" => FieldValue::Text(&self.content),
            "category" => FieldValue::Text(&self.category),
            "family_member_id" => FieldValue::Number(self.family_member_id.map(i64::from)),
            _ => FieldValue::Absent,
        }
    }
}

// ═══════════════════════════════════════════
// Family member draft
// ═══════════════════════════════════════════

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDraft {
    pub name: String,
    pub relationship: String,
    pub age: i64,
    pub gender: String,
    pub blood_type: String,
    pub allergies: Vec<String>,
    pub medications: Vec<String>,
    pub conditions: Vec<String>,
    pub address: String,
    #[serde(default)]
    pub errors: ValidationErrors,
}

impl MemberDraft {
    pub fn from_member(member: &FamilyMember) -> Self {
        Self {
            name: member.name.clone(),
            relationship: member.relationship.clone(),
            age: i64::from(member.age),
            gender: member.gender.clone(),
            blood_type: member.blood_type.clone().unwrap_or_default(),
            allergies: member.allergies.clone(),
            medications: member.medications.clone(),
            conditions: member.conditions.clone(),
            address: member.address.clone().unwrap_or_default(),
            errors: ValidationErrors::default(),
        }
    }

    /// Keystroke update. Clears the field's message. A non-numeric age
    /// becomes 0, matching the number input.
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), DraftError> {
        match name {
            "name" => self.name = value.to_string(),
            "relationship" => self.relationship = value.to_string(),
            "age" => self.age = value.trim().parse().unwrap_or(0),
            "gender" => self.gender = value.to_string(),
            "blood_type" => self.blood_type = value.to_string(),
            "address" => self.address = value.to_string(),
            _ => {
                return Err(DraftError::UnknownField {
                    form: "family_member",
                    field: name.to_string(),
                })
            }
        }
        self.errors.clear(name);
        Ok(())
    }

    fn list_mut(&mut self, list: MemberList) -> &mut Vec<String> {
        match list {
            MemberList::Allergies => &mut self.allergies,
            MemberList::Medications => &mut self.medications,
            MemberList::Conditions => &mut self.conditions,
        }
    }

    /// Appends a trimmed item. Blank input is ignored; returns whether it was added.
    pub fn add_item(&mut self, list: MemberList, value: &str) -> bool {
        match non_empty(value) {
            Some(item) => {
                self.list_mut(list).push(item);
                true
            }
            None => false,
        }
    }

    pub fn remove_item(&mut self, list: MemberList, index: usize) -> Result<String, DraftError> {
        remove_at(self.list_mut(list), index)
    }

    /// Validates and records the messages on the draft for display.
    pub fn validate(&mut self) -> Result<(), ValidationErrors> {
        let result = family_member_schema().validate(&*self);
        self.errors = result.clone().err().unwrap_or_default();
        result
    }

    fn checked_age(&self) -> Result<u32, ValidationErrors> {
        u32::try_from(self.age).map_err(|_| {
            let mut errors = ValidationErrors::default();
            errors.insert("age", "Age must be a positive number");
            errors
        })
    }

    pub fn into_member(mut self, id: MemberId) -> Result<FamilyMember, ValidationErrors> {
        self.validate()?;
        let age = self.checked_age()?;
        Ok(FamilyMember {
            id,
            name: self.name.trim().to_string(),
            relationship: self.relationship.trim().to_string(),
            age,
            gender: self.gender.trim().to_string(),
            blood_type: non_empty(&self.blood_type),
            allergies: self.allergies,
            medications: self.medications,
            conditions: self.conditions,
            address: non_empty(&self.address),
            health_score: DEFAULT_HEALTH_SCORE,
        })
    }

    /// Writes the draft into `member`, keeping its id and health score.
    pub fn apply_to(&mut self, member: &mut FamilyMember) -> Result<(), ValidationErrors> {
        self.validate()?;
        let age = self.checked_age()?;
        member.name = self.name.trim().to_string();
        member.relationship = self.relationship.trim().to_string();
        member.age = age;
        member.gender = self.gender.trim().to_string();
        member.blood_type = non_empty(&self.blood_type);
        member.allergies = self.allergies.clone();
        member.medications = self.medications.clone();
        member.conditions = self.conditions.clone();
        member.address = non_empty(&self.address);
        Ok(())
    }
}

impl Validate for MemberDraft {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "name" => FieldValue::Text(&self.name),
            "relationship" => FieldValue::Text(&self.relationship),
            "age" => FieldValue::Number(Some(self.age)),
            "gender" => FieldValue::Text(&self.gender),
            "blood_type" => FieldValue::Text(&self.blood_type),
            "allergies" => FieldValue::List(&self.allergies),
            "medications" => FieldValue::List(&self.medications),
            "conditions" => FieldValue::List(&self.conditions),
            "address" => FieldValue::Text(&self.address),
            _ => FieldValue::Absent,
        }
    }
}

// ═══════════════════════════════════════════
// Profile draft
// ═══════════════════════════════════════════

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub name: String,
    pub email: String,
    pub gender: String,
    pub birth_date: String,
    pub address: String,
    pub language: String,
    pub description: String,
}

impl ProfileDraft {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            gender: profile.gender.clone(),
            birth_date: profile.birth_date.clone(),
            address: profile.address.clone(),
            language: profile.language.clone(),
            description: profile.description.clone().unwrap_or_default(),
        }
    }

    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), DraftError> {
        let slot = match name {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "gender" => &mut self.gender,
            "birth_date" => &mut self.birth_date,
            "address" => &mut self.address,
            "language" => &mut self.language,
            "description" => &mut self.description,
            _ => {
                return Err(DraftError::UnknownField {
                    form: "profile",
                    field: name.to_string(),
                })
            }
        };
        *slot = value.to_string();
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        profile_schema().validate(self)
    }

    /// Writes the draft into `profile`. Id and role are not editable.
    pub fn apply_to(&self, profile: &mut UserProfile) -> Result<(), ValidationErrors> {
        self.validate()?;
        profile.name = self.name.trim().to_string();
        profile.email = self.email.trim().to_string();
        profile.gender = self.gender.trim().to_string();
        profile.birth_date = self.birth_date.trim().to_string();
        profile.address = self.address.trim().to_string();
        profile.language = self.language.trim().to_string();
        profile.description = non_empty(&self.description);
        Ok(())
    }
}

impl Validate for ProfileDraft {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "name" => FieldValue::Text(&self.name),
            "email" => FieldValue::Text(&self.email),
            "gender" => FieldValue::Text(&self.gender),
            "birth_date" => FieldValue::Text(&self.birth_date),
            "address" => FieldValue::Text(&self.address),
            "language" => FieldValue::Text(&self.language),
            "description" => FieldValue::Text(&self.description),
            _ => FieldValue::Absent,
        }
    }
}
