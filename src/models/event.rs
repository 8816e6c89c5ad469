use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::{AttachmentKind, EventCategory};
use super::family::MemberId;

/// A dated health record entry owned by one family member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthEvent {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub content: String,
    pub category: EventCategory,
    pub family_member_id: MemberId,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// Display-only reference to a file. Never checked for existence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub kind: AttachmentKind,
    pub locator: String,
}
