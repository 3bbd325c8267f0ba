//! Title derivation for new conversations.

use serde::{Deserialize, Serialize};

/// Marker appended to titles truncated by either policy limit.
const ELLIPSIS: char = '\u{2026}';

/// Policy controlling how conversation titles are derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitlePolicy {
    /// Maximum number of leading words kept from the opening message.
    #[serde(default = "default_max_words")]
    pub max_words: usize,
    /// Maximum title length in characters, before the ellipsis marker.
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

fn default_max_words() -> usize {
    6
}

fn default_max_chars() -> usize {
    40
}

impl Default for TitlePolicy {
    fn default() -> Self {
        Self {
            max_words: default_max_words(),
            max_chars: default_max_chars(),
        }
    }
}

/// Derives a short human-readable title from a conversation's opening
/// message.
///
/// Takes the first `policy.max_words` words, trims the result to
/// `policy.max_chars` characters, and appends an ellipsis when anything
/// was cut. Deterministic and side-effect free; callers reject empty
/// input before invoking this.
pub fn derive_title(message: &str, policy: &TitlePolicy) -> String {
    let words: Vec<&str> = message.split_whitespace().collect();
    let mut title = words
        .iter()
        .take(policy.max_words)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    let mut truncated = words.len() > policy.max_words;

    if title.chars().count() > policy.max_chars {
        title = title.chars().take(policy.max_chars).collect();
        title = title.trim_end().to_string();
        truncated = true;
    }

    if truncated {
        title.push(ELLIPSIS);
    }

    title
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_message_is_kept_verbatim() {
        let title = derive_title("hello there", &TitlePolicy::default());
        assert_eq!(title, "hello there");
    }

    #[test]
    fn word_limit_cuts_and_marks() {
        let title = derive_title(
            "hello there how are you today friend",
            &TitlePolicy::default(),
        );
        assert_eq!(title, "hello there how are you today\u{2026}");
    }

    #[test]
    fn char_limit_cuts_and_marks() {
        let policy = TitlePolicy {
            max_words: 6,
            max_chars: 10,
        };
        let title = derive_title("incomprehensibilities abound", &policy);
        assert_eq!(title, "incomprehe\u{2026}");
    }

    #[test]
    fn whitespace_runs_collapse() {
        let title = derive_title("  hello    there  ", &TitlePolicy::default());
        assert_eq!(title, "hello there");
    }

    #[test]
    fn derivation_is_deterministic() {
        let policy = TitlePolicy::default();
        let a = derive_title("plan my trip to the mountains next week", &policy);
        let b = derive_title("plan my trip to the mountains next week", &policy);
        assert_eq!(a, b);
    }
}
