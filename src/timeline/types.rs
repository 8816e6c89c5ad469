use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{HealthEvent, MemberId};

/// Side of the vertical timeline a card is drawn on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Placement {
    Left,
    Right,
}

impl Placement {
    /// Cards alternate by result index, starting on the left.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Left
        } else {
            Self::Right
        }
    }
}

/// One card on the timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub event: HealthEvent,
    pub placement: Placement,
    pub member_name: Option<String>,
    pub color_class: String,
    pub icon_class: String,
}

/// Complete timeline data, single response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineData {
    pub events: Vec<TimelineEntry>,
    pub date_range: DateRange,
    pub event_counts: EventCounts,
    pub members: Vec<MemberSummary>,
    pub is_empty: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub earliest: Option<NaiveDate>,
    pub latest: Option<NaiveDate>,
}

/// Per-category totals over the unfiltered collection (filter badges).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventCounts {
    pub medical: u32,
    pub appointment: u32,
    pub medication: u32,
    pub other: u32,
}

impl EventCounts {
    pub fn total(&self) -> u32 {
        self.medical + self.appointment + self.medication + self.other
    }
}

/// Entry in the member select.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemberSummary {
    pub id: MemberId,
    pub name: String,
    pub event_count: u32,
}
