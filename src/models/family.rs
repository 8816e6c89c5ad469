use serde::{Deserialize, Serialize};

/// Family member identifier. Events reference it without integrity checks.
pub type MemberId = u32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyMember {
    pub id: MemberId,
    pub name: String,
    pub relationship: String,
    pub age: u32,
    pub gender: String,
    pub blood_type: Option<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub medications: Vec<String>,
    #[serde(default)]
    pub conditions: Vec<String>,
    pub address: Option<String>,
    /// 0-100, display only.
    pub health_score: u8,
}

/// The three free-form lists edited item by item in the member form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberList {
    Allergies,
    Medications,
    Conditions,
}
