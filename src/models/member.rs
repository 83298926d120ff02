//! Team member model and its request/query payloads.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A member of the team directory.
///
/// `member_id` is the externally supplied business key. The storage layer keeps
/// its own row key, which is never exposed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    #[validate(custom(function = "not_blank"))]
    pub member_id: String,
    #[validate(custom(function = "not_blank"))]
    pub first_name: String,
    #[validate(custom(function = "not_blank"))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
}

/// Request body for updating an existing team member.
///
/// Omitted fields keep their stored value. A `memberId` sent in the body is
/// ignored; the path parameter identifies the record.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamMemberRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub first_name: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub last_name: Option<String>,
    #[serde(default)]
    #[validate(email)]
    pub email: Option<String>,
}

impl UpdateTeamMemberRequest {
    /// Copy the supplied fields onto `member`. The member id is never touched.
    pub fn apply_to(&self, member: &mut TeamMember) {
        if let Some(first_name) = &self.first_name {
            member.first_name.clone_from(first_name);
        }
        if let Some(last_name) = &self.last_name {
            member.last_name.clone_from(last_name);
        }
        if let Some(email) = &self.email {
            member.email.clone_from(email);
        }
    }
}

/// Query string accepted by `GET /api/team`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTeamMembersQuery {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
