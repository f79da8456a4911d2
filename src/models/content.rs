use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::ContentKind;
use crate::text_scanner;

/// Content ids have the form `"<creator>-<sequence>"`, with the sequence
/// drawn from one counter shared across all creators and both kinds.
pub type ContentId = String;

/// A single comment on a piece of content. Insertion order within the
/// parent is the presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub text: String,
}

/// A published post or story together with its engagement state.
///
/// Instances are owned exclusively by the content store; engagement is
/// only ever recorded through [`Content::like`] and [`Content::add_comment`].
/// The description is immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    id: ContentId,
    creator: String,
    description: String,
    published_at: NaiveDateTime,
    kind: ContentKind,
    likes: Vec<String>,
    comments: Vec<Comment>,
}

impl Content {
    pub fn new(
        id: ContentId,
        creator: String,
        description: String,
        published_at: NaiveDateTime,
        kind: ContentKind,
    ) -> Self {
        Self {
            id,
            creator,
            description,
            published_at,
            kind,
            likes: Vec::new(),
            comments: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn creator(&self) -> &str {
        &self.creator
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn published_at(&self) -> NaiveDateTime {
        self.published_at
    }

    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    pub fn likes(&self) -> &[String] {
        &self.likes
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Record a like. Repeated likes by the same user are kept: likes are
    /// a multiset, and every one of them counts towards the engagement
    /// score.
    pub fn like(&mut self, username: &str) {
        self.likes.push(username.to_string());
    }

    /// Append a comment by `author`.
    pub fn add_comment(&mut self, author: &str, text: &str) {
        self.comments.push(Comment {
            author: author.to_string(),
            text: text.to_string(),
        });
    }

    /// Whether this content is still active at `now`. The boundary is
    /// strict: content exactly at the end of its lifetime is expired.
    pub fn is_active(&self, now: NaiveDateTime) -> bool {
        now.signed_duration_since(self.published_at) < self.kind.lifetime()
    }

    pub fn number_of_likes(&self) -> usize {
        self.likes.len()
    }

    pub fn number_of_comments(&self) -> usize {
        self.comments.len()
    }

    /// Total likes plus comments.
    pub fn engagement_score(&self) -> usize {
        self.likes.len() + self.comments.len()
    }

    /// All `#`-prefixed tokens of the description.
    pub fn tags(&self) -> Vec<String> {
        text_scanner::tags(&self.description)
    }

    /// All `@`-prefixed tokens of the description.
    pub fn mentions(&self) -> Vec<String> {
        text_scanner::mentions(&self.description)
    }
}

// Identity is the id alone: two instances with the same id refer to the
// same piece of content regardless of engagement state.
impl PartialEq for Content {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Content {}

impl std::hash::Hash for Content {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn post(id: &str) -> Content {
        Content::new(
            id.to_string(),
            "ann".to_string(),
            "hi @bob #go".to_string(),
            timestamp(),
            ContentKind::Post,
        )
    }

    #[test]
    fn test_post_expires_after_30_days() {
        let content = post("ann-0");
        let published = timestamp();

        assert!(content.is_active(published));
        assert!(content.is_active(published + Duration::days(30) - Duration::seconds(1)));
        // Exactly at the boundary the content is already expired
        assert!(!content.is_active(published + Duration::days(30)));
    }

    #[test]
    fn test_story_expires_after_24_hours() {
        let content = Content::new(
            "ann-1".to_string(),
            "ann".to_string(),
            "daily #update".to_string(),
            timestamp(),
            ContentKind::Story,
        );
        let published = timestamp();

        assert!(content.is_active(published + Duration::hours(24) - Duration::seconds(1)));
        assert!(!content.is_active(published + Duration::hours(24)));
    }

    #[test]
    fn test_engagement_counts_likes_and_comments() {
        let mut content = post("ann-0");
        content.like("bob");
        content.like("bob");
        content.add_comment("carol", "nice");

        assert_eq!(content.number_of_likes(), 2);
        assert_eq!(content.number_of_comments(), 1);
        assert_eq!(content.engagement_score(), 3);
    }

    #[test]
    fn test_tags_and_mentions_come_from_description() {
        let content = post("ann-0");

        assert_eq!(content.tags(), vec!["#go"]);
        assert_eq!(content.mentions(), vec!["@bob"]);
    }

    #[test]
    fn test_equality_is_by_id() {
        let a = post("ann-0");
        let mut b = post("ann-0");
        b.like("bob");

        assert_eq!(a, b);
        assert_ne!(a, post("ann-1"));
    }
}
