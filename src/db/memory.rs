//! In-memory [`TeamMemberStore`] for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::TeamMemberStore;
use crate::errors::AppError;
use crate::models::TeamMember;

/// Vec-backed store that enforces the same unique constraints as the table.
#[derive(Default)]
pub struct InMemoryStore {
    rows: Mutex<Vec<TeamMember>>,
}

impl InMemoryStore {
    pub fn with_members(members: Vec<TeamMember>) -> Self {
        Self {
            rows: Mutex::new(members),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl TeamMemberStore for InMemoryStore {
    async fn insert(&self, member: &TeamMember) -> Result<TeamMember, AppError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|m| m.email == member.email) {
            return Err(AppError::DuplicateEmail(member.email.clone()));
        }
        if rows.iter().any(|m| m.member_id == member.member_id) {
            return Err(AppError::Conflict(format!(
                "Team member {} already exists",
                member.member_id
            )));
        }
        rows.push(member.clone());
        Ok(member.clone())
    }

    async fn find_all(&self) -> Result<Vec<TeamMember>, AppError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_member_id(&self, member_id: &str) -> Result<Option<TeamMember>, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|m| m.member_id == member_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<TeamMember>, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|m| m.email == email).cloned())
    }

    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Vec<TeamMember>, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|m| m.first_name == first_name && m.last_name == last_name)
            .cloned()
            .collect())
    }

    async fn update(&self, member: &TeamMember) -> Result<TeamMember, AppError> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|m| m.email == member.email && m.member_id != member.member_id)
        {
            return Err(AppError::DuplicateEmail(member.email.clone()));
        }
        let slot = rows
            .iter_mut()
            .find(|m| m.member_id == member.member_id)
            .ok_or_else(|| {
                AppError::NotFound(format!("Team member {} not found", member.member_id))
            })?;
        *slot = member.clone();
        Ok(member.clone())
    }

    async fn delete_by_member_id(&self, member_id: &str) -> Result<(), AppError> {
        self.rows.lock().unwrap().retain(|m| m.member_id != member_id);
        Ok(())
    }
}
