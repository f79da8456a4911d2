// Query Engine - read-only ranking and search over the content store
// Every query takes `now` explicitly so callers (and tests) own the clock.

use std::cmp::Reverse;
use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::error::{PlatformError, PlatformResult};
use crate::infrastructure::content_store::ContentStore;
use crate::infrastructure::user_registry::UserRegistry;
use crate::models::Content;

/// The `n` most engaging pieces of content that are still active at `now`,
/// by descending likes + comments. Ties keep insertion order, so results
/// are deterministic. Fewer than `n` items are returned when fewer exist;
/// a negative `n` is an error.
pub fn most_popular(
    store: &ContentStore,
    now: NaiveDateTime,
    n: i32,
) -> PlatformResult<Vec<&Content>> {
    let n = validate_limit(n)?;
    let mut active: Vec<&Content> = store.iter().filter(|c| c.is_active(now)).collect();
    active.sort_by_key(|c| Reverse(c.engagement_score()));
    active.truncate(n);
    Ok(active)
}

/// The `n` most recently published active pieces of content by `username`,
/// most recent first; publication-time ties keep insertion order. The
/// caller guarantees the user is registered. A user with no content yields
/// an empty result, not an error.
pub fn most_recent<'a>(
    store: &'a ContentStore,
    username: &str,
    now: NaiveDateTime,
    n: i32,
) -> PlatformResult<Vec<&'a Content>> {
    let n = validate_limit(n)?;
    let mut authored: Vec<&Content> = store
        .iter()
        .filter(|c| c.creator() == username && c.is_active(now))
        .collect();
    authored.sort_by_key(|c| Reverse(c.published_at()));
    authored.truncate(n);
    Ok(authored)
}

/// The username mentioned most often across ALL content, expired included:
/// mentions are a historical record, not an active-content metric. Every
/// mentioned name counts whether or not it is registered. Ties go to the
/// lexicographically smallest name. Fails with `NoUsers` when the registry
/// is empty, or when no mention has ever been recorded.
pub fn most_mentioned_user(
    store: &ContentStore,
    registry: &UserRegistry,
) -> PlatformResult<String> {
    if registry.is_empty() {
        return Err(PlatformError::NoUsers(
            "no users are registered on the platform".to_string(),
        ));
    }

    let mut mention_counts: HashMap<String, usize> = HashMap::new();
    for content in store.iter() {
        for mention in content.mentions() {
            let name = mention.trim_start_matches('@');
            // A bare "@" token names nobody
            if !name.is_empty() {
                *mention_counts.entry(name.to_string()).or_default() += 1;
            }
        }
    }

    mention_counts
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
        .map(|(name, _)| name)
        .ok_or_else(|| PlatformError::NoUsers("no mentions have been recorded".to_string()))
}

/// All content whose tag list contains exactly `tag`. Tag search is not
/// expiration-filtered: expired content still matches. The tag must start
/// with `#`.
pub fn find_by_tag<'a>(store: &'a ContentStore, tag: &str) -> PlatformResult<Vec<&'a Content>> {
    if !tag.starts_with('#') {
        return Err(PlatformError::InvalidArgument(format!(
            "tag '{}' must start with '#'",
            tag
        )));
    }
    Ok(store
        .iter()
        .filter(|c| c.tags().iter().any(|t| t == tag))
        .collect())
}

fn validate_limit(n: i32) -> PlatformResult<usize> {
    if n < 0 {
        return Err(PlatformError::InvalidArgument(format!(
            "limit cannot be negative, got {}",
            n
        )));
    }
    Ok(n as usize)
}
