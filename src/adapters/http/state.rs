//! Shared HTTP application state.

use std::sync::Arc;

use crate::adapters::rate_limiter::RateLimitConfig;
use crate::application::handlers::moderation::{
    BanUserHandler, ClearReportHandler, DeletePostHandler, GetBannableUsersHandler,
    ListReportedPostsHandler, MarkFulfilledHandler, ReportPostHandler, UnbanUserHandler,
    UpdateUserRoleHandler,
};
use crate::application::handlers::threads::{GetThreadHandler, SendMessageHandler};
use crate::application::{SessionStateBroker, ThreadAccessGuard};
use crate::ports::{
    PostRepository, RateLimiter, SessionStore, SessionUpdateNotifier, ThreadRepository,
    UserRepository,
};

/// Shared application state containing all dependencies.
///
/// Cloned per request; every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub threads: Arc<dyn ThreadRepository>,
    pub sessions: Arc<dyn SessionStore>,
    pub broker: Arc<SessionStateBroker>,
    pub limiter: Arc<dyn RateLimiter>,
    pub rate_limit: Arc<RateLimitConfig>,
}

impl AppState {
    fn notifier(&self) -> Arc<dyn SessionUpdateNotifier> {
        self.broker.clone()
    }

    // Create handlers on demand from the shared state.

    pub fn ban_user_handler(&self) -> BanUserHandler {
        BanUserHandler::new(self.users.clone(), self.notifier())
    }

    pub fn unban_user_handler(&self) -> UnbanUserHandler {
        UnbanUserHandler::new(self.users.clone(), self.notifier())
    }

    pub fn update_user_role_handler(&self) -> UpdateUserRoleHandler {
        UpdateUserRoleHandler::new(self.users.clone(), self.notifier())
    }

    pub fn bannable_users_handler(&self) -> GetBannableUsersHandler {
        GetBannableUsersHandler::new(self.users.clone())
    }

    pub fn reported_posts_handler(&self) -> ListReportedPostsHandler {
        ListReportedPostsHandler::new(self.posts.clone())
    }

    pub fn report_post_handler(&self) -> ReportPostHandler {
        ReportPostHandler::new(self.posts.clone())
    }

    pub fn clear_report_handler(&self) -> ClearReportHandler {
        ClearReportHandler::new(self.posts.clone())
    }

    pub fn mark_fulfilled_handler(&self) -> MarkFulfilledHandler {
        MarkFulfilledHandler::new(self.posts.clone())
    }

    pub fn delete_post_handler(&self) -> DeletePostHandler {
        DeletePostHandler::new(self.posts.clone())
    }

    fn thread_guard(&self) -> Arc<ThreadAccessGuard> {
        Arc::new(ThreadAccessGuard::new(self.threads.clone()))
    }

    pub fn get_thread_handler(&self) -> GetThreadHandler {
        GetThreadHandler::new(self.thread_guard())
    }

    pub fn send_message_handler(&self) -> SendMessageHandler {
        SendMessageHandler::new(self.thread_guard(), self.threads.clone())
    }
}
