// Platform statistics - read-only business counters

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::infrastructure::content_store::ContentStore;
use crate::infrastructure::user_registry::UserRegistry;
use crate::models::ContentKind;

/// Snapshot of the platform's business counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformStats {
    pub total_users: usize,
    pub total_posts: usize,
    pub total_stories: usize,
    pub total_likes: usize,
    pub total_comments: usize,
    pub active_content: usize,
}

impl PlatformStats {
    /// Gather counters from the registry and store as of `now`.
    pub fn collect(registry: &UserRegistry, store: &ContentStore, now: NaiveDateTime) -> Self {
        let mut stats = PlatformStats {
            total_users: registry.len(),
            ..Default::default()
        };
        for content in store.iter() {
            match content.kind() {
                ContentKind::Post => stats.total_posts += 1,
                ContentKind::Story => stats.total_stories += 1,
            }
            stats.total_likes += content.number_of_likes();
            stats.total_comments += content.number_of_comments();
            if content.is_active(now) {
                stats.active_content += 1;
            }
        }
        stats
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

    #[test]
    fn test_collect_counts_by_kind_and_engagement() {
        let mut registry = UserRegistry::new();
        registry.register("ann").unwrap();
        registry.register("bob").unwrap();

        let mut store = ContentStore::new();
        let post = store.publish("ann", timestamp(), "a #post", ContentKind::Post);
        store.publish("bob", timestamp() - Duration::days(2), "old", ContentKind::Story);
        store.get_mut(&post).unwrap().like("bob");
        store.get_mut(&post).unwrap().add_comment("bob", "hi");

        let stats = PlatformStats::collect(&registry, &store, timestamp());
        assert_eq!(
            stats,
            PlatformStats {
                total_users: 2,
                total_posts: 1,
                total_stories: 1,
                total_likes: 1,
                total_comments: 1,
                // the two-day-old story has expired
                active_content: 1,
            }
        );
    }
}
