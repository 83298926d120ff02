//! Domain operations for team members.
//!
//! Business rules live here: field validation, the email-uniqueness check on
//! create, and the field copy on update. Persistence goes through the injected
//! [`TeamMemberStore`].

use std::sync::Arc;

use validator::Validate;

use crate::db::TeamMemberStore;
use crate::errors::AppError;
use crate::models::{TeamMember, UpdateTeamMemberRequest};

#[derive(Clone)]
pub struct TeamMemberService {
    store: Arc<dyn TeamMemberStore>,
}

impl TeamMemberService {
    pub fn new(store: Arc<dyn TeamMemberStore>) -> Self {
        Self { store }
    }

    /// Validate and persist a new member, rejecting an email that is already taken.
    ///
    /// The lookup and the insert are separate calls; a concurrent create that
    /// slips between them is caught by the store's unique constraint and still
    /// reported as [`AppError::DuplicateEmail`].
    pub async fn create_team_member(&self, candidate: TeamMember) -> Result<TeamMember, AppError> {
        candidate.validate()?;

        if self.store.find_by_email(&candidate.email).await?.is_some() {
            tracing::warn!(email = %candidate.email, "Rejected team member with duplicate email");
            return Err(AppError::DuplicateEmail(candidate.email));
        }

        let created = self.store.insert(&candidate).await?;
        tracing::info!(member_id = %created.member_id, "Team member created");
        Ok(created)
    }

    pub async fn list_team_members(&self) -> Result<Vec<TeamMember>, AppError> {
        self.store.find_all().await
    }

    /// Members whose first and last names both match.
    pub async fn find_team_members_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Vec<TeamMember>, AppError> {
        self.store.find_by_name(first_name, last_name).await
    }

    pub async fn get_team_member(&self, member_id: &str) -> Result<Option<TeamMember>, AppError> {
        self.store.find_by_member_id(member_id).await
    }

    /// Apply `patch` to the member with this id.
    ///
    /// Returns `Ok(None)` when no such member exists; nothing is written then.
    pub async fn update_team_member(
        &self,
        member_id: &str,
        patch: &UpdateTeamMemberRequest,
    ) -> Result<Option<TeamMember>, AppError> {
        patch.validate()?;

        let Some(mut member) = self.store.find_by_member_id(member_id).await? else {
            return Ok(None);
        };

        patch.apply_to(&mut member);
        let updated = self.store.update(&member).await?;
        tracing::info!(member_id = %updated.member_id, "Team member updated");
        Ok(Some(updated))
    }

    /// Delete the member if present. Returns whether a record was removed.
    pub async fn delete_team_member(&self, member_id: &str) -> Result<bool, AppError> {
        if self.store.find_by_member_id(member_id).await?.is_none() {
            tracing::debug!(member_id, "Delete of unknown team member ignored");
            return Ok(false);
        }

        self.store.delete_by_member_id(member_id).await?;
        tracing::info!(member_id, "Team member deleted");
        Ok(true)
    }
}
