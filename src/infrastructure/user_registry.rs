// User Registry - the gate for every user-scoped operation

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{PlatformError, PlatformResult};

// `-` is reserved as the content id separator, and whitespace, `#` and `@`
// would corrupt tag/mention scanning, so usernames are restricted to a
// safe charset at registration time.
static USERNAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.]+$").expect("username pattern is valid"));

/// Tracks the set of registered usernames. Users are never deleted.
#[derive(Debug, Default)]
pub struct UserRegistry {
    users: HashSet<String>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self {
            users: HashSet::new(),
        }
    }

    /// Register `username`. Fails with `InvalidArgument` on an empty or
    /// malformed name and with `UsernameAlreadyExists` on a duplicate;
    /// the registry is unchanged on failure.
    pub fn register(&mut self, username: &str) -> PlatformResult<()> {
        if username.is_empty() {
            return Err(PlatformError::InvalidArgument(
                "username cannot be empty".to_string(),
            ));
        }
        if !USERNAME_PATTERN.is_match(username) {
            return Err(PlatformError::InvalidArgument(format!(
                "username '{}' contains characters outside [A-Za-z0-9_.]",
                username
            )));
        }
        if !self.users.insert(username.to_string()) {
            return Err(PlatformError::UsernameAlreadyExists(format!(
                "user '{}' is already registered",
                username
            )));
        }
        Ok(())
    }

    pub fn exists(&self, username: &str) -> bool {
        self.users.contains(username)
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Registered usernames in lexicographic order, for deterministic
    /// display.
    pub fn usernames(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.users.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
