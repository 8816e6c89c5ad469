//! Demo data seeded into a fresh application state.

use chrono::NaiveDate;

use crate::models::{Attachment, AttachmentKind, EventCategory, FamilyMember, HealthEvent, UserProfile};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn mock_events() -> Vec<HealthEvent> {
    vec![
        HealthEvent {
            id: "1".into(),
            title: "Annual Checkup".into(),
            date: ymd(2024, 3, 15),
            content: "Regular health checkup with Dr. Smith. All vitals normal.".into(),
            category: EventCategory::Medical,
            family_member_id: 1,
            attachments: vec![Attachment {
                kind: AttachmentKind::Pdf,
                locator: "/documents/checkup.pdf".into(),
            }],
        },
        HealthEvent {
            id: "2".into(),
            title: "Flu Shot".into(),
            date: ymd(2024, 2, 20),
            content: "Received seasonal flu vaccination at local clinic.".into(),
            category: EventCategory::Medication,
            family_member_id: 2,
            attachments: vec![],
        },
    ]
}

fn member(id: u32, name: &str, relationship: &str, age: u32, gender: &str, health_score: u8) -> FamilyMember {
    FamilyMember {
        id,
        name: name.into(),
        relationship: relationship.into(),
        age,
        gender: gender.into(),
        blood_type: None,
        allergies: vec![],
        medications: vec![],
        conditions: vec![],
        address: None,
        health_score,
    }
}

pub fn mock_family_members() -> Vec<FamilyMember> {
    let mut primary = member(1, "Demo User", "Primary", 35, "Other", 85);
    primary.blood_type = Some("A+".into());
    primary.allergies = vec!["Penicillin".into()];

    let mut spouse = member(2, "Spouse", "Spouse", 33, "Other", 90);
    spouse.medications = vec!["Vitamin D".into()];

    let mut child = member(3, "Child 1", "Child", 8, "Other", 95);
    child.conditions = vec!["Mild asthma".into()];

    vec![primary, spouse, child, member(4, "Child 2", "Child", 5, "Other", 98)]
}

pub fn demo_user() -> UserProfile {
    UserProfile {
        id: "user-1".into(),
        name: "Demo User".into(),
        email: "user@example.com".into(),
        role: "Primary".into(),
        gender: "Other".into(),
        birth_date: "1989-06-01".into(),
        address: "123 Demo Street".into(),
        language: "English".into(),
        description: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_events_reference_fixture_members() {
        let members = mock_family_members();
        for e in mock_events() {
            assert!(members.iter().any(|m| m.id == e.family_member_id));
        }
    }

    #[test]
    fn fixture_member_ids_are_unique() {
        let mut ids: Vec<u32> = mock_family_members().iter().map(|m| m.id).collect();
        ids.dedup();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
