use std::collections::BTreeSet;

use crate::drafts::MemberDraft;
use crate::models::{FamilyMember, MemberId};

use super::StoreError;

/// Family members plus which detail rows are expanded in the roster table.
#[derive(Debug, Clone, Default)]
pub struct FamilyRoster {
    members: Vec<FamilyMember>,
    expanded: BTreeSet<MemberId>,
}

impl FamilyRoster {
    pub fn new(members: Vec<FamilyMember>) -> Self {
        Self {
            members,
            expanded: BTreeSet::new(),
        }
    }

    pub fn members(&self) -> &[FamilyMember] {
        &self.members
    }

    pub fn get(&self, id: MemberId) -> Result<&FamilyMember, StoreError> {
        self.members
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| StoreError::not_found("family_member", id))
    }

    /// One past the highest id in use.
    fn next_id(&self) -> Result<MemberId, StoreError> {
        self.members
            .iter()
            .map(|m| m.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| StoreError::IdsExhausted {
                entity_type: "family_member".into(),
            })
    }

    /// Validates the draft and adds the member under the next free id.
    pub fn add(&mut self, draft: MemberDraft) -> Result<MemberId, StoreError> {
        let id = self.next_id()?;
        let member = draft.into_member(id)?;
        tracing::info!(member_id = id, "Family member added");
        self.members.push(member);
        Ok(id)
    }

    pub fn update(&mut self, id: MemberId, draft: &mut MemberDraft) -> Result<(), StoreError> {
        let member = self
            .members
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| StoreError::not_found("family_member", id))?;
        draft.apply_to(member)?;
        tracing::info!(member_id = id, "Family member updated");
        Ok(())
    }

    /// Removes the member. Their events are left in place (dangling
    /// references are tolerated by the timeline).
    pub fn remove(&mut self, id: MemberId) -> Result<FamilyMember, StoreError> {
        let index = self
            .members
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| StoreError::not_found("family_member", id))?;
        self.expanded.remove(&id);
        tracing::info!(member_id = id, "Family member removed");
        Ok(self.members.remove(index))
    }

    /// Flips the detail row. Returns the new state.
    pub fn toggle_expanded(&mut self, id: MemberId) -> Result<bool, StoreError> {
        self.get(id)?;
        let now_expanded = if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        };
        Ok(now_expanded)
    }

    pub fn is_expanded(&self, id: MemberId) -> bool {
        self.expanded.contains(&id)
    }
}
