//! Storage interface for team member records.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::TeamMember;

/// Keyed persistence for [`TeamMember`] records.
///
/// Each call is atomic at the single-row level of the backing engine. No
/// transaction spans more than one call.
#[async_trait]
pub trait TeamMemberStore: Send + Sync {
    /// Persist a new record.
    ///
    /// A unique-constraint violation on `email` surfaces as
    /// [`AppError::DuplicateEmail`]; one on `member_id` as [`AppError::Conflict`].
    async fn insert(&self, member: &TeamMember) -> Result<TeamMember, AppError>;

    /// All records in insertion order.
    async fn find_all(&self) -> Result<Vec<TeamMember>, AppError>;

    async fn find_by_member_id(&self, member_id: &str) -> Result<Option<TeamMember>, AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<TeamMember>, AppError>;

    /// Every record matching both names, in insertion order. Names are not
    /// unique, so any number of rows may come back.
    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Vec<TeamMember>, AppError>;

    /// Overwrite the stored record with the same `member_id`.
    async fn update(&self, member: &TeamMember) -> Result<TeamMember, AppError>;

    /// Remove the record with this `member_id`. Absent records are not an error.
    async fn delete_by_member_id(&self, member_id: &str) -> Result<(), AppError>;
}
