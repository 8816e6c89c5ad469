use chrono::{DateTime, NaiveDate};

use crate::models::{DateRangeFilter, EventQuery, HealthEvent};

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Effective inclusive bounds after lenient parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateBounds {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateBounds {
    pub fn from_filter(filter: &DateRangeFilter) -> Self {
        Self {
            start: filter.start.as_deref().and_then(parse_date_bound),
            end: filter.end.as_deref().and_then(parse_date_bound),
        }
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |s| s <= date) && self.end.map_or(true, |e| date <= e)
    }
}

/// Parses a date-input value. Accepts `YYYY-MM-DD` or an RFC 3339 timestamp
/// (date part kept). Anything else, including half-typed input, is `None`.
pub fn parse_date_bound(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, DATE_INPUT_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Lower-cased needle, or `None` when the search box is blank.
fn normalized_search(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_lowercase())
    }
}

/// Applies the member, text and date filters (conjunctively) and sorts
/// the survivors by date, most recent first. Equal dates keep source order.
pub fn filter_events<'a>(events: &'a [HealthEvent], query: &EventQuery) -> Vec<&'a HealthEvent> {
    let needle = normalized_search(&query.search_text);
    let bounds = DateBounds::from_filter(&query.date_range);

    if (query.date_range.start.is_some() && bounds.start.is_none())
        || (query.date_range.end.is_some() && bounds.end.is_none())
    {
        tracing::debug!(
            start = ?query.date_range.start,
            end = ?query.date_range.end,
            "Ignoring unparseable date bound"
        );
    }

    let mut result: Vec<&HealthEvent> = events
        .iter()
        .filter(|e| query.selected_member.map_or(true, |m| e.family_member_id == m))
        .filter(|e| {
            needle.as_deref().map_or(true, |n| {
                e.title.to_lowercase().contains(n) || e.content.to_lowercase().contains(n)
            })
        })
        .filter(|e| !bounds.is_active() || bounds.contains(e.date))
        .collect();

    result.sort_by(|a, b| b.date.cmp(&a.date));
    result
}

/// Owned form of [`filter_events`]. Never mutates `events`.
pub fn query(events: &[HealthEvent], query: &EventQuery) -> Vec<HealthEvent> {
    filter_events(events, query).into_iter().cloned().collect()
}
