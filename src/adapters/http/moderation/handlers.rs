//! HTTP handlers for moderation endpoints.
//!
//! Mutating moderator actions answer with `303 See Other` back to the
//! relevant listing, the way a form-driven moderator UI expects.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect};

use crate::application::handlers::moderation::{
    BanUserCommand, ClearReportCommand, DeletePostCommand, GetBannableUsersQuery,
    ListReportedPostsQuery, MarkFulfilledCommand, ReportPostCommand, UnbanUserCommand,
    UpdateUserRoleCommand,
};
use crate::domain::foundation::{PostId, UserId};
use crate::domain::moderation::Role;

use super::super::error::ApiError;
use super::super::middleware::{RequireSession, RequireStaff};
use super::super::state::AppState;
use super::dto::{PostView, ReportedPostsResponse, UpdateRoleRequest, UserListResponse, UserView};

const MODERATOR_HOME: &str = "/moderator";
const MODERATOR_USERS: &str = "/moderator/users";

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /moderator - Reported posts awaiting review
pub async fn list_reported_posts(
    State(state): State<AppState>,
    RequireStaff(session): RequireStaff,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .reported_posts_handler()
        .handle(ListReportedPostsQuery {
            actor: session.actor(),
        })
        .await?;

    Ok(Json(ReportedPostsResponse {
        posts: result.posts.iter().map(PostView::from).collect(),
    }))
}

/// GET /moderator/users - Accounts a moderator may act on
pub async fn list_bannable_users(
    State(state): State<AppState>,
    RequireStaff(session): RequireStaff,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .bannable_users_handler()
        .handle(GetBannableUsersQuery {
            actor: session.actor(),
        })
        .await?;

    Ok(Json(UserListResponse {
        users: result.users.iter().map(UserView::from).collect(),
    }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Post Commands
// ════════════════════════════════════════════════════════════════════════════════

/// POST /moderator/post/:id/clear-report
pub async fn clear_report(
    State(state): State<AppState>,
    RequireStaff(session): RequireStaff,
    Path(post_id): Path<String>,
) -> Result<Redirect, ApiError> {
    state
        .clear_report_handler()
        .handle(ClearReportCommand {
            actor: session.actor(),
            post_id: PostId::new(post_id)?,
        })
        .await?;
    Ok(Redirect::to(MODERATOR_HOME))
}

/// POST /moderator/post/:id/fulfill
pub async fn mark_fulfilled(
    State(state): State<AppState>,
    RequireStaff(session): RequireStaff,
    Path(post_id): Path<String>,
) -> Result<Redirect, ApiError> {
    state
        .mark_fulfilled_handler()
        .handle(MarkFulfilledCommand {
            actor: session.actor(),
            post_id: PostId::new(post_id)?,
        })
        .await?;
    Ok(Redirect::to(MODERATOR_HOME))
}

/// POST /moderator/post/:id/delete
pub async fn delete_post(
    State(state): State<AppState>,
    RequireStaff(session): RequireStaff,
    Path(post_id): Path<String>,
) -> Result<Redirect, ApiError> {
    state
        .delete_post_handler()
        .handle(DeletePostCommand {
            actor: session.actor(),
            post_id: PostId::new(post_id)?,
        })
        .await?;
    Ok(Redirect::to(MODERATOR_HOME))
}

/// POST /posts/:id/report - Any active account
pub async fn report_post(
    State(state): State<AppState>,
    RequireSession(session): RequireSession,
    Path(post_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .report_post_handler()
        .handle(ReportPostCommand {
            actor: session.actor(),
            post_id: PostId::new(post_id)?,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ════════════════════════════════════════════════════════════════════════════════
// Account Commands
// ════════════════════════════════════════════════════════════════════════════════

/// POST /moderator/users/:id/ban
pub async fn ban_user(
    State(state): State<AppState>,
    RequireStaff(session): RequireStaff,
    Path(user_id): Path<String>,
) -> Result<Redirect, ApiError> {
    state
        .ban_user_handler()
        .handle(BanUserCommand {
            actor: session.actor(),
            target_id: UserId::new(user_id)?,
        })
        .await?;
    Ok(Redirect::to(MODERATOR_USERS))
}

/// POST /moderator/users/:id/unban - Admin only (enforced by policy)
pub async fn unban_user(
    State(state): State<AppState>,
    RequireStaff(session): RequireStaff,
    Path(user_id): Path<String>,
) -> Result<Redirect, ApiError> {
    state
        .unban_user_handler()
        .handle(UnbanUserCommand {
            actor: session.actor(),
            target_id: UserId::new(user_id)?,
        })
        .await?;
    Ok(Redirect::to(MODERATOR_USERS))
}

/// POST /moderator/users/:id/role - Admin only (enforced by policy)
pub async fn update_user_role(
    State(state): State<AppState>,
    RequireStaff(session): RequireStaff,
    Path(user_id): Path<String>,
    Json(request): Json<UpdateRoleRequest>,
) -> Result<Redirect, ApiError> {
    let new_role: Role = request.role.parse()?;
    state
        .update_user_role_handler()
        .handle(UpdateUserRoleCommand {
            actor: session.actor(),
            target_id: UserId::new(user_id)?,
            new_role,
        })
        .await?;
    Ok(Redirect::to(MODERATOR_USERS))
}
