//! Team member API endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::{ApiResult, AppJson};
use crate::errors::AppError;
use crate::models::{ListTeamMembersQuery, TeamMember, UpdateTeamMemberRequest};
use crate::AppState;

/// Body returned by a successful delete.
pub const DELETE_CONFIRMATION: &str = "Team member deleted successfully!";

/// GET /api/team - List all members, or those matching `firstName` and `lastName`.
pub async fn list_team_members(
    State(state): State<AppState>,
    Query(query): Query<ListTeamMembersQuery>,
) -> ApiResult<Json<Vec<TeamMember>>> {
    let members = match (&query.first_name, &query.last_name) {
        (None, None) => state.members.list_team_members().await?,
        (Some(first_name), Some(last_name)) => {
            state
                .members
                .find_team_members_by_name(first_name, last_name)
                .await?
        }
        _ => {
            return Err(AppError::Validation(
                "firstName and lastName must be supplied together".to_string(),
            ))
        }
    };

    Ok(Json(members))
}

/// GET /api/team/{memberId} - Get a single member.
pub async fn get_team_member(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
) -> ApiResult<Json<TeamMember>> {
    state
        .members
        .get_team_member(&member_id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(&member_id))
}

/// POST /api/team - Create a new member.
pub async fn create_team_member(
    State(state): State<AppState>,
    AppJson(candidate): AppJson<TeamMember>,
) -> ApiResult<(StatusCode, Json<TeamMember>)> {
    let created = state.members.create_team_member(candidate).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/team/{memberId} - Update a member's names and email.
pub async fn update_team_member(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
    AppJson(patch): AppJson<UpdateTeamMemberRequest>,
) -> ApiResult<Json<TeamMember>> {
    state
        .members
        .update_team_member(&member_id, &patch)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(&member_id))
}

/// DELETE /api/team/{memberId} - Delete a member. Unknown ids succeed too.
pub async fn delete_team_member(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
) -> ApiResult<&'static str> {
    state.members.delete_team_member(&member_id).await?;
    Ok(DELETE_CONFIRMATION)
}

fn not_found(member_id: &str) -> AppError {
    AppError::NotFound(format!("Team member {} not found", member_id))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::db::memory::InMemoryStore;
    use crate::models::TeamMember;
    use crate::service::TeamMemberService;
    use crate::{create_router, AppState};

    fn router_with(members: Vec<TeamMember>) -> Router {
        let store = Arc::new(InMemoryStore::with_members(members));
        create_router(AppState {
            members: TeamMemberService::new(store),
        })
    }

    fn john() -> TeamMember {
        TeamMember {
            member_id: "TM126".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@domain.com".to_string(),
        }
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_returns_201_with_record() {
        let request = json_request(
            "POST",
            "/api/team",
            json!({
                "memberId": "TM126",
                "firstName": "John",
                "lastName": "Doe",
                "email": "john.doe@domain.com"
            }),
        );

        let (status, body) = send(router_with(vec![]), request).await;

        assert_eq!(status, StatusCode::CREATED);
        let created: TeamMember = serde_json::from_slice(&body).unwrap();
        assert_eq!(created, john());
    }

    #[tokio::test]
    async fn test_create_malformed_email_is_400() {
        let request = json_request(
            "POST",
            "/api/team",
            json!({
                "memberId": "TM1",
                "firstName": "John",
                "lastName": "Doe",
                "email": "john.doe"
            }),
        );

        let (status, body) = send(router_with(vec![]), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_create_duplicate_email_is_409() {
        let request = json_request(
            "POST",
            "/api/team",
            json!({
                "memberId": "TM999",
                "firstName": "Jane",
                "lastName": "Doe",
                "email": "john.doe@domain.com"
            }),
        );

        let (status, body) = send(router_with(vec![john()]), request).await;

        assert_eq!(status, StatusCode::CONFLICT);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"]["code"], "DUPLICATE_EMAIL");
        assert_eq!(body["error"]["details"]["email"], "john.doe@domain.com");
    }

    async fn assert_validation_error(router: Router, request: Request<Body>) {
        let (status, body) = send(router, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_create_missing_email_is_400() {
        let request = json_request(
            "POST",
            "/api/team",
            json!({ "memberId": "TM1", "firstName": "A", "lastName": "B" }),
        );

        assert_validation_error(router_with(vec![]), request).await;
    }

    #[tokio::test]
    async fn test_create_null_first_name_is_400() {
        let request = json_request(
            "POST",
            "/api/team",
            json!({
                "memberId": "TM1",
                "firstName": null,
                "lastName": "B",
                "email": "a@b.com"
            }),
        );

        assert_validation_error(router_with(vec![]), request).await;
    }

    #[tokio::test]
    async fn test_update_with_non_string_email_is_400() {
        let request = json_request("PUT", "/api/team/TM126", json!({ "email": 42 }));

        assert_validation_error(router_with(vec![john()]), request).await;
    }

    #[tokio::test]
    async fn test_create_with_broken_json_is_400() {
        let request = Request::post("/api/team")
            .header("content-type", "application/json")
            .body(Body::from("{\"memberId\": "))
            .unwrap();

        assert_validation_error(router_with(vec![]), request).await;
    }

    #[tokio::test]
    async fn test_get_unknown_member_is_404() {
        let request = Request::get("/api/team/TM404").body(Body::empty()).unwrap();

        let (status, body) = send(router_with(vec![john()]), request).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_update_unknown_member_is_404() {
        let request = json_request(
            "PUT",
            "/api/team/TM404",
            json!({ "firstName": "X", "lastName": "Y", "email": "x@y.com" }),
        );

        let (status, _) = send(router_with(vec![]), request).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_returns_confirmation_text() {
        let request = Request::delete("/api/team/TM126").body(Body::empty()).unwrap();

        let (status, body) = send(router_with(vec![john()]), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, super::DELETE_CONFIRMATION.as_bytes());
    }

    #[tokio::test]
    async fn test_list_with_single_name_param_is_400() {
        let request = Request::get("/api/team?firstName=John")
            .body(Body::empty())
            .unwrap();

        let (status, _) = send(router_with(vec![john()]), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
