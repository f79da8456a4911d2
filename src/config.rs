use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub seeder: SeederConfig,
}

/// Knobs for the demo data seeder. Domain constants (expiration windows,
/// id format) are part of the platform contract and are not configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeederConfig {
    pub user_count: usize,
    pub content_count: usize,
    pub engagement_rounds: usize,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            seeder: SeederConfig {
                user_count: env::var("SEED_USER_COUNT")
                    .unwrap_or_else(|_| "8".to_string())
                    .parse()
                    .unwrap_or(8),
                content_count: env::var("SEED_CONTENT_COUNT")
                    .unwrap_or_else(|_| "40".to_string())
                    .parse()
                    .unwrap_or(40),
                engagement_rounds: env::var("SEED_ENGAGEMENT_ROUNDS")
                    .unwrap_or_else(|_| "60".to_string())
                    .parse()
                    .unwrap_or(60),
            },
        })
    }
}
