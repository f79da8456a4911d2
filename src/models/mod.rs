// Entity model - posts, stories, comments, and activity entries

pub mod activity;
pub mod content;

pub use activity::ActivityEntry;
pub use content::{Comment, Content, ContentId};

use chrono::Duration;

/// Discriminant for the two content variants. Shared behavior lives on
/// [`Content`]; the kind only carries what differs between the variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ContentKind {
    Post,
    Story,
}

impl ContentKind {
    /// How long content of this kind stays active after publication.
    pub fn lifetime(&self) -> Duration {
        match self {
            ContentKind::Post => Duration::days(30),
            ContentKind::Story => Duration::hours(24),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Post => "post",
            ContentKind::Story => "story",
        }
    }
}
