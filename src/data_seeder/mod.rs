// Demo data seeding - random but always-valid platform activity

use chrono::Duration;
use rand::Rng;

use crate::config::SeederConfig;
use crate::error::PlatformResult;
use crate::platform::SocialPlatform;

const NAME_POOL: &[&str] = &[
    "ana", "boris", "carol", "dinko", "elena", "filip", "gergana", "hristo", "iva", "kiril",
    "lora", "martin", "nia", "ognyan", "petya", "rado",
];

const TAG_POOL: &[&str] = &[
    "#rust", "#travel", "#food", "#music", "#code", "#fitness", "#art", "#news",
];

const PHRASE_POOL: &[&str] = &[
    "what a day",
    "just shipped something",
    "morning thoughts",
    "weekend vibes",
    "can't stop listening to this",
    "hot take",
];

const COMMENT_POOL: &[&str] = &["nice", "love it", "same here", "tell me more", "well said"];

/// Populate `platform` with randomized demo users, content and engagement.
/// Every generated operation targets a registered user and an existing id,
/// so seeding only fails if the platform itself misbehaves.
pub fn seed_demo_data(
    platform: &mut SocialPlatform,
    config: &SeederConfig,
) -> PlatformResult<()> {
    let mut rng = rand::rng();
    let now = chrono::Local::now().naive_local();

    let users: Vec<String> = (0..config.user_count)
        .map(|i| {
            let base = NAME_POOL[i % NAME_POOL.len()];
            if i < NAME_POOL.len() {
                base.to_string()
            } else {
                format!("{}{}", base, i)
            }
        })
        .collect();
    for username in &users {
        platform.register(username)?;
    }
    if users.is_empty() {
        return Ok(());
    }

    let mut ids = Vec::with_capacity(config.content_count);
    for _ in 0..config.content_count {
        let creator = &users[rng.random_range(0..users.len())];
        let mentioned = &users[rng.random_range(0..users.len())];
        let description = format!(
            "{} {} @{}",
            PHRASE_POOL[rng.random_range(0..PHRASE_POOL.len())],
            TAG_POOL[rng.random_range(0..TAG_POOL.len())],
            mentioned,
        );
        // Stagger publication into the past so some stories are already
        // expired while posts stay active
        let published_on = now - Duration::hours(rng.random_range(0..48));

        let id = if rng.random_range(0..10) < 7 {
            platform.publish_post(creator, published_on, &description)?
        } else {
            platform.publish_story(creator, published_on, &description)?
        };
        ids.push(id);
    }

    for _ in 0..config.engagement_rounds {
        if ids.is_empty() {
            break;
        }
        let username = &users[rng.random_range(0..users.len())];
        let id = &ids[rng.random_range(0..ids.len())];
        if rng.random_range(0..10) < 6 {
            platform.like(username, id)?;
        } else {
            let text = COMMENT_POOL[rng.random_range(0..COMMENT_POOL.len())];
            platform.comment(username, text, id)?;
        }
    }

    Ok(())
}
