// Social Core - in-memory content-management engine for a social platform

// Entity model - posts, stories, comments, activity entries
pub mod models;

// Tag and mention extraction from content descriptions
pub mod text_scanner;

// Owned-state components - id generation, users, content, activity, stats
pub mod infrastructure;

// Read-only ranking and search queries
pub mod services;

// Caller-facing operation surface
pub mod platform;

// Common utilities
pub mod config;
pub mod data_seeder;
pub mod error;

// Re-exports for convenience
pub use error::{PlatformError, PlatformResult};
pub use infrastructure::PlatformStats;
pub use models::{Comment, Content, ContentId, ContentKind};
pub use platform::SocialPlatform;
