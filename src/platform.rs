// SocialPlatform - the caller-facing operation surface
// Owns all mutable state; validates every precondition before mutating.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::error::{PlatformError, PlatformResult};
use crate::infrastructure::{ActivityLog, ContentStore, PlatformStats, UserRegistry};
use crate::models::{Content, ContentId, ContentKind};
use crate::services::query_engine;

/// The in-memory core of the platform: user registry, content store and
/// activity log behind one synchronous operation surface.
///
/// Mutating operations take `&mut self`, so concurrent mutation is
/// unrepresentable without an outer synchronization boundary; read-only
/// queries borrow shared. Every operation either completes or fails before
/// any state change.
#[derive(Debug, Default)]
pub struct SocialPlatform {
    registry: UserRegistry,
    store: ContentStore,
    activity: ActivityLog,
}

impl SocialPlatform {
    pub fn new() -> Self {
        Self {
            registry: UserRegistry::new(),
            store: ContentStore::new(),
            activity: ActivityLog::new(),
        }
    }

    /// Register a new user and initialize their activity history.
    pub fn register(&mut self, username: &str) -> PlatformResult<()> {
        self.registry.register(username)?;
        self.activity.ensure_user(username);
        debug!(username, "registered user");
        Ok(())
    }

    /// Publish a post by `username`. Posts stay active for 30 days.
    pub fn publish_post(
        &mut self,
        username: &str,
        published_on: NaiveDateTime,
        description: &str,
    ) -> PlatformResult<ContentId> {
        self.publish(username, published_on, description, ContentKind::Post)
    }

    /// Publish a story by `username`. Stories stay active for 24 hours.
    pub fn publish_story(
        &mut self,
        username: &str,
        published_on: NaiveDateTime,
        description: &str,
    ) -> PlatformResult<ContentId> {
        self.publish(username, published_on, description, ContentKind::Story)
    }

    fn publish(
        &mut self,
        username: &str,
        published_on: NaiveDateTime,
        description: &str,
        kind: ContentKind,
    ) -> PlatformResult<ContentId> {
        self.require_user(username)?;
        let id = self.store.publish(username, published_on, description, kind);
        self.activity.record(
            username,
            published_on,
            format!("Created a {} with id {}", kind.label(), id),
        );
        debug!(username, id = %id, kind = kind.label(), "published content");
        Ok(id)
    }

    /// Record a like by `username` on the content with `id`. The activity
    /// entry is timestamped at the moment of the call, not the content's
    /// publication time.
    pub fn like(&mut self, username: &str, id: &str) -> PlatformResult<()> {
        self.require_user(username)?;
        self.content_mut(id)?.like(username);
        self.activity.record(
            username,
            now(),
            format!("Liked a content with id {}", id),
        );
        debug!(username, id, "liked content");
        Ok(())
    }

    /// Record a comment by `username` on the content with `id`.
    pub fn comment(&mut self, username: &str, text: &str, id: &str) -> PlatformResult<()> {
        self.require_user(username)?;
        self.content_mut(id)?.add_comment(username, text);
        self.activity.record(
            username,
            now(),
            format!("Commented \"{}\" on a content with id {}", text, id),
        );
        debug!(username, id, "commented on content");
        Ok(())
    }

    /// Look up a single piece of content by id.
    pub fn content(&self, id: &str) -> PlatformResult<&Content> {
        self.store
            .get(id)
            .ok_or_else(|| PlatformError::ContentNotFound(format!("no content with id '{}'", id)))
    }

    /// The `n` most engaging active pieces of content, best first.
    pub fn most_popular_content(&self, n: i32) -> PlatformResult<Vec<&Content>> {
        query_engine::most_popular(&self.store, now(), n)
    }

    /// The `n` most recently published active pieces of content by
    /// `username`, newest first.
    pub fn most_recent_content(&self, username: &str, n: i32) -> PlatformResult<Vec<&Content>> {
        self.require_user(username)?;
        query_engine::most_recent(&self.store, username, now(), n)
    }

    /// The username mentioned most often across all content ever
    /// published.
    pub fn most_popular_user(&self) -> PlatformResult<String> {
        query_engine::most_mentioned_user(&self.store, &self.registry)
    }

    /// All content tagged exactly `tag` (expired content included).
    pub fn find_content_by_tag(&self, tag: &str) -> PlatformResult<Vec<&Content>> {
        query_engine::find_by_tag(&self.store, tag)
    }

    /// The activity history of `username`, most recent action first.
    pub fn activity_log(&self, username: &str) -> PlatformResult<Vec<String>> {
        self.require_user(username)?;
        Ok(self.activity.history(username))
    }

    /// Snapshot of the platform's business counters as of now.
    pub fn stats(&self) -> PlatformStats {
        PlatformStats::collect(&self.registry, &self.store, now())
    }

    /// Registered usernames in lexicographic order.
    pub fn usernames(&self) -> Vec<&str> {
        self.registry.usernames()
    }

    fn require_user(&self, username: &str) -> PlatformResult<()> {
        if username.is_empty() {
            return Err(PlatformError::InvalidArgument(
                "username cannot be empty".to_string(),
            ));
        }
        if !self.registry.exists(username) {
            return Err(PlatformError::UsernameNotFound(format!(
                "no user '{}' is registered",
                username
            )));
        }
        Ok(())
    }

    fn content_mut(&mut self, id: &str) -> PlatformResult<&mut Content> {
        if id.is_empty() {
            return Err(PlatformError::InvalidArgument(
                "content id cannot be empty".to_string(),
            ));
        }
        self.store
            .get_mut(id)
            .ok_or_else(|| PlatformError::ContentNotFound(format!("no content with id '{}'", id)))
    }
}

fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}
