use std::collections::HashMap;

use crate::models::{EventCategory, EventQuery, FamilyMember, HealthEvent, MemberId};
use super::query::filter_events;
use super::types::*;

/// Computes per-category counts across the whole collection (unfiltered).
pub fn compute_event_counts(events: &[HealthEvent]) -> EventCounts {
    events.iter().fold(EventCounts::default(), |mut counts, e| {
        match e.category {
            EventCategory::Medical => counts.medical += 1,
            EventCategory::Appointment => counts.appointment += 1,
            EventCategory::Medication => counts.medication += 1,
            EventCategory::Other => counts.other += 1,
        }
        counts
    })
}

/// Members with their event counts for the filter dropdown, ordered by id.
pub fn summarize_members(events: &[HealthEvent], members: &[FamilyMember]) -> Vec<MemberSummary> {
    let mut per_member: HashMap<MemberId, u32> = HashMap::new();
    for e in events {
        *per_member.entry(e.family_member_id).or_default() += 1;
    }

    let mut summaries: Vec<MemberSummary> = members
        .iter()
        .map(|m| MemberSummary {
            id: m.id,
            name: m.name.clone(),
            event_count: per_member.get(&m.id).copied().unwrap_or(0),
        })
        .collect();
    summaries.sort_by_key(|s| s.id);
    summaries
}

/// Top-level assembly: filters, sorts and decorates in a single call.
pub fn get_timeline_data(
    events: &[HealthEvent],
    members: &[FamilyMember],
    query: &EventQuery,
) -> TimelineData {
    let names: HashMap<MemberId, &str> = members.iter().map(|m| (m.id, m.name.as_str())).collect();
    let filtered = filter_events(events, query);

    // Sorted newest first, so the last entry is the earliest.
    let date_range = DateRange {
        earliest: filtered.last().map(|e| e.date),
        latest: filtered.first().map(|e| e.date),
    };

    let entries: Vec<TimelineEntry> = filtered
        .into_iter()
        .enumerate()
        .map(|(index, event)| TimelineEntry {
            placement: Placement::for_index(index),
            member_name: names.get(&event.family_member_id).map(|n| n.to_string()),
            color_class: event.category.color_class().to_string(),
            icon_class: event.category.icon_class().to_string(),
            event: event.clone(),
        })
        .collect();

    tracing::debug!(
        total = events.len(),
        shown = entries.len(),
        "Timeline assembled"
    );

    TimelineData {
        is_empty: entries.is_empty(),
        events: entries,
        date_range,
        event_counts: compute_event_counts(events),
        members: summarize_members(events, members),
    }
}
