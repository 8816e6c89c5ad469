//! Timeline commands: query, detail, event form and delete.

use chrono::Local;

use crate::core_state::CoreState;
use crate::drafts::EventDraft;
use crate::models::{EventQuery, HealthEvent};
use crate::timeline::{self, TimelineData};

use super::{into_save_result, SaveResult};

fn require_event_id(event_id: &str) -> Result<(), String> {
    if event_id.trim().is_empty() {
        return Err("Event ID is required".into());
    }
    Ok(())
}

/// Fetches the filtered timeline in a single call.
/// Recomputed from the full collection on every filter change.
pub fn get_timeline_data(query: EventQuery, state: &CoreState) -> Result<TimelineData, String> {
    state.require_session().map_err(|e| e.to_string())?;

    let events = state.read_events().map_err(|e| e.to_string())?;
    let roster = state.read_roster().map_err(|e| e.to_string())?;
    let data = timeline::get_timeline_data(events.all(), roster.members(), &query);

    Ok(data)
}

/// Detail view for one event.
pub fn get_event(event_id: String, state: &CoreState) -> Result<HealthEvent, String> {
    require_event_id(&event_id)?;
    state.require_session().map_err(|e| e.to_string())?;

    let events = state.read_events().map_err(|e| e.to_string())?;
    let event = events.get(&event_id).map_err(|e| e.to_string())?.clone();

    Ok(event)
}

/// Blank "Add Event" form dated today.
pub fn new_event_draft(state: &CoreState) -> Result<EventDraft, String> {
    state.require_session().map_err(|e| e.to_string())?;
    Ok(EventDraft::new(Local::now().date_naive()))
}

/// "Edit Event" form prefilled from the stored event.
pub fn edit_event_draft(event_id: String, state: &CoreState) -> Result<EventDraft, String> {
    let event = get_event(event_id, state)?;
    Ok(EventDraft::from_event(&event))
}

/// Creates (no id) or updates (with id) an event from a submitted form.
pub fn save_event(
    event_id: Option<String>,
    draft: EventDraft,
    state: &CoreState,
) -> Result<SaveResult<String>, String> {
    state.require_session().map_err(|e| e.to_string())?;

    let mut events = state.write_events().map_err(|e| e.to_string())?;
    let result = match event_id {
        Some(id) => {
            require_event_id(&id)?;
            events.update(&id, &draft).map(|()| id)
        }
        None => events.create(draft),
    };

    into_save_result(result)
}

pub fn delete_event(event_id: String, state: &CoreState) -> Result<(), String> {
    require_event_id(&event_id)?;
    state.require_session().map_err(|e| e.to_string())?;

    let mut events = state.write_events().map_err(|e| e.to_string())?;
    events.delete(&event_id).map_err(|e| e.to_string())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::session::login;

    fn logged_in() -> CoreState {
        let state = CoreState::default();
        login(&state).unwrap();
        state
    }

    #[test]
    fn timeline_requires_login() {
        let state = CoreState::default();
        let err = get_timeline_data(EventQuery::default(), &state).unwrap_err();
        assert_eq!(err, "Not authenticated");
    }

    #[test]
    fn timeline_default_query_shows_fixtures() {
        let state = logged_in();
        let data = get_timeline_data(EventQuery::default(), &state).unwrap();
        let ids: Vec<&str> = data.events.iter().map(|e| e.event.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(data.events[1].member_name.as_deref(), Some("Spouse"));
    }

    #[test]
    fn create_then_find_in_timeline() {
        let state = logged_in();
        let mut draft = new_event_draft(&state).unwrap();
        draft.set_field("title", "Dentist visit").unwrap();
        draft.set_field("content", "Routine cleaning").unwrap();
        draft.set_field("category", "appointment").unwrap();
        draft.set_field("date", "2024-04-10").unwrap();

        let result = save_event(None, draft, &state).unwrap();
        let id = result.saved.expect("saved");

        let data = get_timeline_data(EventQuery::default().with_search("dentist"), &state).unwrap();
        assert_eq!(data.events.len(), 1);
        assert_eq!(data.events[0].event.id, id);
        assert_eq!(data.events[0].icon_class, "lucide-calendar");
    }

    #[test]
    fn invalid_form_returns_errors_not_failure() {
        let state = logged_in();
        let draft = new_event_draft(&state).unwrap();
        let result = save_event(None, draft, &state).unwrap();
        assert!(!result.is_saved());
        assert_eq!(result.errors.get("title"), Some("Title is required"));
        assert_eq!(state.read_events().unwrap().len(), 2);
    }

    #[test]
    fn edit_existing_event() {
        let state = logged_in();
        let mut draft = edit_event_draft("2".into(), &state).unwrap();
        draft.set_field("content", "Booster included").unwrap();
        let result = save_event(Some("2".into()), draft, &state).unwrap();
        assert_eq!(result.saved.as_deref(), Some("2"));
        assert_eq!(get_event("2".into(), &state).unwrap().content, "Booster included");
    }

    #[test]
    fn delete_and_missing_ids() {
        let state = logged_in();
        delete_event("1".into(), &state).unwrap();
        assert!(get_event("1".into(), &state).is_err());
        assert_eq!(delete_event(" ".into(), &state).unwrap_err(), "Event ID is required");
    }
}
