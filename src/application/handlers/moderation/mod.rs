//! Moderation handlers.
//!
//! Every handler evaluates the actor against the policy table before
//! touching a store, then performs exactly one conditional mutation.
//! Account changes are announced to live sessions after the write lands.
//!
//! ## Commands
//! - Ban, unban and role change on accounts
//! - Report, clear report, fulfill and delete on posts
//!
//! ## Queries
//! - Bannable accounts
//! - Reported posts

mod ban_user;
mod clear_report;
mod delete_post;
mod get_bannable_users;
mod list_reported_posts;
mod mark_fulfilled;
mod report_post;
mod unban_user;
mod update_user_role;

#[cfg(test)]
mod test_support;

// Commands
pub use ban_user::{BanUserCommand, BanUserHandler, BanUserResult};
pub use clear_report::{ClearReportCommand, ClearReportHandler, ClearReportResult};
pub use delete_post::{DeletePostCommand, DeletePostHandler};
pub use mark_fulfilled::{MarkFulfilledCommand, MarkFulfilledHandler, MarkFulfilledResult};
pub use report_post::{ReportPostCommand, ReportPostHandler};
pub use unban_user::{UnbanUserCommand, UnbanUserHandler, UnbanUserResult};
pub use update_user_role::{UpdateUserRoleCommand, UpdateUserRoleHandler, UpdateUserRoleResult};

// Queries
pub use get_bannable_users::{
    GetBannableUsersHandler, GetBannableUsersQuery, GetBannableUsersResult,
};
pub use list_reported_posts::{
    ListReportedPostsHandler, ListReportedPostsQuery, ListReportedPostsResult,
};
