//! Shared fixture for the HTTP integration tests.
//!
//! Accounts: alice, bob (user), mia, max (moderator), ada, alan (admin).
//! Each has a session under the token `tok-<name>`. Posts `p1` and `p2`
//! are visible; thread `THREAD_HEX` is between alice and bob.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use tower::ServiceExt;

use forum_moderation::adapters::http::{build_router, AppState};
use forum_moderation::adapters::memory::{
    InMemoryPostRepository, InMemorySessionStore, InMemoryThreadRepository,
    InMemoryUserRepository,
};
use forum_moderation::adapters::rate_limiter::{FixedWindowRateLimiter, RateLimitConfig};
use forum_moderation::application::SessionStateBroker;
use forum_moderation::domain::foundation::{PostId, ThreadId, UserId};
use forum_moderation::domain::moderation::{Post, Role, User};
use forum_moderation::domain::session::{SessionSnapshot, SessionToken};
use forum_moderation::domain::thread::Thread;
use forum_moderation::ports::SessionStore;

pub const THREAD_HEX: &str = "65a1f0c2b3d4e5f60718293a";

pub const ACCOUNTS: [(&str, Role); 6] = [
    ("alice", Role::User),
    ("bob", Role::User),
    ("mia", Role::Moderator),
    ("max", Role::Moderator),
    ("ada", Role::Admin),
    ("alan", Role::Admin),
];

pub struct TestApp {
    pub router: Router,
    pub users: Arc<InMemoryUserRepository>,
    pub posts: Arc<InMemoryPostRepository>,
    pub threads: Arc<InMemoryThreadRepository>,
    pub sessions: Arc<dyn SessionStore>,
    pub broker: Arc<SessionStateBroker>,
}

pub fn uid(id: &str) -> UserId {
    UserId::new(id).unwrap()
}

pub fn token(name: &str) -> SessionToken {
    SessionToken::new(format!("tok-{}", name)).unwrap()
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_rate_limit(RateLimitConfig::default()).await
    }

    pub async fn with_rate_limit(rate_limit: RateLimitConfig) -> Self {
        Self::build(rate_limit, |store| store).await
    }

    /// Lets a test wrap the seeded session store before it is wired in.
    pub async fn with_session_store(
        wrap: impl FnOnce(Arc<dyn SessionStore>) -> Arc<dyn SessionStore>,
    ) -> Self {
        Self::build(RateLimitConfig::default(), wrap).await
    }

    async fn build(
        rate_limit: RateLimitConfig,
        wrap: impl FnOnce(Arc<dyn SessionStore>) -> Arc<dyn SessionStore>,
    ) -> Self {
        let users = Arc::new(InMemoryUserRepository::with_users(
            ACCOUNTS.iter().map(|(name, role)| User::new(uid(name), *name, *role)),
        ));
        let posts = Arc::new(InMemoryPostRepository::with_posts([
            Post::new(PostId::new("p1").unwrap(), uid("alice"), "Hello", "first"),
            Post::new(PostId::new("p2").unwrap(), uid("bob"), "Spam", "buy now"),
        ]));
        let threads = Arc::new(InMemoryThreadRepository::with_threads([Thread::new(
            ThreadId::parse(THREAD_HEX).unwrap(),
            uid("alice"),
            uid("bob"),
        )
        .unwrap()]));
        let seeded: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
        for (name, role) in ACCOUNTS {
            seeded
                .save(&token(name), &SessionSnapshot::new(uid(name), role))
                .await
                .unwrap();
        }
        let sessions = wrap(seeded);
        let broker = Arc::new(SessionStateBroker::new(sessions.clone()));

        let state = AppState {
            users: users.clone(),
            posts: posts.clone(),
            threads: threads.clone(),
            sessions: sessions.clone(),
            broker: broker.clone(),
            limiter: Arc::new(FixedWindowRateLimiter::new()),
            rate_limit: Arc::new(rate_limit),
        };

        Self {
            router: build_router(state, Duration::from_secs(5)),
            users,
            posts,
            threads,
            sessions,
            broker,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str, as_user: Option<&str>) -> Response {
        self.send(request("GET", uri, as_user, Body::empty())).await
    }

    pub async fn post(&self, uri: &str, as_user: &str) -> Response {
        self.send(request("POST", uri, Some(as_user), Body::empty())).await
    }

    pub async fn post_json(&self, uri: &str, as_user: &str, body: serde_json::Value) -> Response {
        let mut req = request("POST", uri, Some(as_user), Body::from(body.to_string()));
        req.headers_mut().insert(
            header::CONTENT_TYPE,
            "application/json".parse().unwrap(),
        );
        self.send(req).await
    }

    pub async fn session_of(&self, name: &str) -> SessionSnapshot {
        self.sessions.load(&token(name)).await.unwrap().unwrap()
    }
}

pub fn request(method: &str, uri: &str, as_user: Option<&str>, body: Body) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(name) = as_user {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer tok-{}", name));
    }
    builder.body(body).unwrap()
}

pub async fn json_body(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn assert_redirect(response: &Response, location: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap().to_str().unwrap(),
        location
    );
}
