use serde::{Deserialize, Serialize};

use super::family::MemberId;

/// Timeline query as entered in the search box, member select and date inputs.
/// Every field is independently optional; the default query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventQuery {
    pub selected_member: Option<MemberId>,
    pub search_text: String,
    pub date_range: DateRangeFilter,
}

/// Raw date-input text. Bounds are parsed leniently at query time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateRangeFilter {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl EventQuery {
    pub fn for_member(member: MemberId) -> Self {
        Self {
            selected_member: Some(member),
            ..Self::default()
        }
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_date_range(mut self, start: Option<&str>, end: Option<&str>) -> Self {
        self.date_range = DateRangeFilter {
            start: start.map(str::to_owned),
            end: end.map(str::to_owned),
        };
        self
    }
}
