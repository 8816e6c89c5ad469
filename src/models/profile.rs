use serde::{Deserialize, Serialize};

/// The signed-in account holder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub gender: String,
    pub birth_date: String,
    pub address: String,
    pub language: String,
    pub description: Option<String>,
}
