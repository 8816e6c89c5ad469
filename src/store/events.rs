use crate::drafts::EventDraft;
use crate::models::HealthEvent;

use super::StoreError;

/// Owning collection for health events, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<HealthEvent>,
}

impl EventStore {
    pub fn new(events: Vec<HealthEvent>) -> Self {
        Self { events }
    }

    pub fn all(&self) -> &[HealthEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: &str) -> Result<&HealthEvent, StoreError> {
        self.events
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| StoreError::not_found("health_event", id))
    }

    /// Validates the draft and appends the new event. Returns its id.
    pub fn create(&mut self, draft: EventDraft) -> Result<String, StoreError> {
        let event = draft.into_new_event()?;
        let id = event.id.clone();
        tracing::info!(event_id = %id, member = event.family_member_id, "Health event created");
        self.events.push(event);
        Ok(id)
    }

    pub fn update(&mut self, id: &str, draft: &EventDraft) -> Result<(), StoreError> {
        let event = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| StoreError::not_found("health_event", id))?;
        draft.apply_to(event)?;
        tracing::info!(event_id = %id, "Health event updated");
        Ok(())
    }

    pub fn delete(&mut self, id: &str) -> Result<HealthEvent, StoreError> {
        let index = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| StoreError::not_found("health_event", id))?;
        tracing::info!(event_id = %id, "Health event deleted");
        Ok(self.events.remove(index))
    }
}
