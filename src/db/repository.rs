//! SQLite-backed record store.
//!
//! Uses prepared statements; the table's unique constraints back the domain invariants.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use super::TeamMemberStore;
use crate::errors::AppError;
use crate::models::TeamMember;

/// Database repository for team member records.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamMemberStore for Repository {
    async fn insert(&self, member: &TeamMember) -> Result<TeamMember, AppError> {
        sqlx::query(
            "INSERT INTO team_member (member_id, first_name, last_name, email) VALUES (?, ?, ?, ?)",
        )
        .bind(&member.member_id)
        .bind(&member.first_name)
        .bind(&member.last_name)
        .bind(&member.email)
        .execute(&self.pool)
        .await
        .map_err(|err| write_error(err, member))?;

        Ok(member.clone())
    }

    async fn find_all(&self) -> Result<Vec<TeamMember>, AppError> {
        let rows = sqlx::query(
            "SELECT member_id, first_name, last_name, email FROM team_member ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(member_from_row).collect())
    }

    async fn find_by_member_id(&self, member_id: &str) -> Result<Option<TeamMember>, AppError> {
        let row = sqlx::query(
            "SELECT member_id, first_name, last_name, email FROM team_member WHERE member_id = ?",
        )
        .bind(member_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(member_from_row))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<TeamMember>, AppError> {
        let row = sqlx::query(
            "SELECT member_id, first_name, last_name, email FROM team_member WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(member_from_row))
    }

    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Vec<TeamMember>, AppError> {
        let rows = sqlx::query(
            "SELECT member_id, first_name, last_name, email FROM team_member \
             WHERE first_name = ? AND last_name = ? ORDER BY id",
        )
        .bind(first_name)
        .bind(last_name)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(member_from_row).collect())
    }

    async fn update(&self, member: &TeamMember) -> Result<TeamMember, AppError> {
        let result = sqlx::query(
            "UPDATE team_member SET first_name = ?, last_name = ?, email = ? WHERE member_id = ?",
        )
        .bind(&member.first_name)
        .bind(&member.last_name)
        .bind(&member.email)
        .bind(&member.member_id)
        .execute(&self.pool)
        .await
        .map_err(|err| write_error(err, member))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Team member {} not found",
                member.member_id
            )));
        }

        Ok(member.clone())
    }

    async fn delete_by_member_id(&self, member_id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM team_member WHERE member_id = ?")
            .bind(member_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

/// Translate unique-constraint failures into domain errors.
fn write_error(err: sqlx::Error, member: &TeamMember) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            if db_err.message().contains("team_member.email") {
                return AppError::DuplicateEmail(member.email.clone());
            }
            return AppError::Conflict(format!(
                "Team member {} already exists",
                member.member_id
            ));
        }
    }
    AppError::from(err)
}

fn member_from_row(row: &sqlx::sqlite::SqliteRow) -> TeamMember {
    TeamMember {
        member_id: row.get("member_id"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        email: row.get("email"),
    }
}
