// Text Scanner - extracts #tag and @mention tokens from content descriptions

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").expect("whitespace pattern is valid"));

/// Collect every token of `description` whose first character is `prefix`,
/// in order of appearance.
///
/// Runs of two or more whitespace characters are collapsed to a single
/// space before splitting, so tags and mentions separated by multiple
/// spaces are still found. No validation is applied past the prefix check:
/// a bare `"#"` or `"@"` is a token.
pub fn tokens_with_prefix(description: &str, prefix: char) -> Vec<String> {
    let collapsed = WHITESPACE_RUNS.replace_all(description, " ");
    collapsed
        .trim()
        .split(' ')
        .filter(|word| word.starts_with(prefix))
        .map(str::to_string)
        .collect()
}

/// All `#`-prefixed tokens of `description`.
pub fn tags(description: &str) -> Vec<String> {
    tokens_with_prefix(description, '#')
}

/// All `@`-prefixed tokens of `description`.
pub fn mentions(description: &str) -> Vec<String> {
    tokens_with_prefix(description, '@')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_and_mentions_in_order() {
        let description = "hi @bob check #rust and #tokio cc @ann";

        assert_eq!(tags(description), vec!["#rust", "#tokio"]);
        assert_eq!(mentions(description), vec!["@bob", "@ann"]);
    }

    #[test]
    fn test_multiple_spaces_are_collapsed() {
        let description = "  hello   #go    world  @ann  ";

        assert_eq!(tags(description), vec!["#go"]);
        assert_eq!(mentions(description), vec!["@ann"]);
    }

    #[test]
    fn test_prefix_must_start_the_token() {
        // No separating space means no token boundary
        assert!(tags("hello#x").is_empty());
        assert!(mentions("mail@example.com").is_empty());
    }

    #[test]
    fn test_bare_prefix_is_a_token() {
        assert_eq!(tags("a # b"), vec!["#"]);
        assert_eq!(mentions("a @ b"), vec!["@"]);
    }

    #[test]
    fn test_empty_description() {
        assert!(tags("").is_empty());
        assert!(mentions("   ").is_empty());
    }
}
