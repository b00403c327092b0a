//! Request and response DTOs for moderation endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::moderation::{Post, PostModerationState, User};

/// A forum account as shown to moderators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserView {
    pub id: String,
    pub username: String,
    pub role: String,
    pub is_banned: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banned_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banned_by: Option<String>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
            role: user.role().to_string(),
            is_banned: user.is_banned(),
            banned_at: user.banned_at().map(|t| t.as_datetime().to_rfc3339()),
            banned_by: user.banned_by().map(|id| id.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserListResponse {
    pub users: Vec<UserView>,
}

/// A post in the moderation queue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostView {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub body: String,
    pub state: PostModerationState,
    pub created_at: String,
}

impl From<&Post> for PostView {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id().to_string(),
            author_id: post.author_id().to_string(),
            title: post.title().to_string(),
            body: post.body().to_string(),
            state: post.moderation_state(),
            created_at: post.created_at().as_datetime().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportedPostsResponse {
    pub posts: Vec<PostView>,
}

/// Request to change an account's role.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRoleRequest {
    pub role: String,
}
