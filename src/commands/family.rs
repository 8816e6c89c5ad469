//! Family roster commands.

use serde::{Deserialize, Serialize};

use crate::core_state::CoreState;
use crate::drafts::MemberDraft;
use crate::models::{FamilyMember, MemberId};

use super::{into_save_result, SaveResult};

/// One row of the roster table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterRow {
    pub member: FamilyMember,
    pub expanded: bool,
}

pub fn list_family_members(state: &CoreState) -> Result<Vec<RosterRow>, String> {
    state.require_session().map_err(|e| e.to_string())?;

    let roster = state.read_roster().map_err(|e| e.to_string())?;
    let rows = roster
        .members()
        .iter()
        .map(|m| RosterRow {
            member: m.clone(),
            expanded: roster.is_expanded(m.id),
        })
        .collect();

    Ok(rows)
}

/// "Edit Family Member" form prefilled from the roster.
pub fn edit_member_draft(member_id: MemberId, state: &CoreState) -> Result<MemberDraft, String> {
    state.require_session().map_err(|e| e.to_string())?;

    let roster = state.read_roster().map_err(|e| e.to_string())?;
    let member = roster.get(member_id).map_err(|e| e.to_string())?;
    Ok(MemberDraft::from_member(member))
}

/// Adds (no id) or updates (with id) a member from a submitted form.
pub fn save_family_member(
    member_id: Option<MemberId>,
    mut draft: MemberDraft,
    state: &CoreState,
) -> Result<SaveResult<MemberId>, String> {
    state.require_session().map_err(|e| e.to_string())?;

    let mut roster = state.write_roster().map_err(|e| e.to_string())?;
    let result = match member_id {
        Some(id) => roster.update(id, &mut draft).map(|()| id),
        None => roster.add(draft),
    };

    into_save_result(result)
}

/// Removes a member. Their events stay on the timeline.
pub fn remove_family_member(member_id: MemberId, state: &CoreState) -> Result<(), String> {
    state.require_session().map_err(|e| e.to_string())?;

    let mut roster = state.write_roster().map_err(|e| e.to_string())?;
    roster.remove(member_id).map_err(|e| e.to_string())?;

    Ok(())
}

/// Expands or collapses a roster row. Returns the new state.
pub fn toggle_member_expanded(member_id: MemberId, state: &CoreState) -> Result<bool, String> {
    state.require_session().map_err(|e| e.to_string())?;

    let mut roster = state.write_roster().map_err(|e| e.to_string())?;
    let expanded = roster.toggle_expanded(member_id).map_err(|e| e.to_string())?;

    Ok(expanded)
}
