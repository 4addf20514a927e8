//! Pattern detector - finds sequential, repeated, keyboard, date and dictionary patterns.

use std::sync::LazyLock;

use regex::Regex;

use crate::tables::{LEET_CHARS, common_word_hits, contains_keyboard_walk};
use crate::types::PatternProfile;

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(19|20)\d{2}|(\d{1,2}[/-]){2}\d{2,4}").expect("date pattern is valid")
});

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("email pattern is valid")
});

/// Minimum run of identical characters flagged as a repeat.
pub const REPEAT_RUN: usize = 3;

impl PatternProfile {
    /// Scans `password` for every known weak pattern.
    pub fn detect(password: &str) -> Self {
        let chars: Vec<char> = password.chars().collect();
        let lowered = password.to_lowercase();

        Self {
            sequential_chars: sequential_windows(&chars) > 0,
            repeated_chars: longest_run(&chars) >= REPEAT_RUN,
            keyboard_pattern: contains_keyboard_walk(&lowered),
            date_pattern: DATE_PATTERN.is_match(password),
            email_pattern: EMAIL_PATTERN.is_match(password),
            username_pattern: is_username_like(&lowered),
            leet_speak: chars.iter().any(|c| LEET_CHARS.contains(c)),
            dictionary_word: common_word_hits(&lowered) > 0,
        }
    }
}

/// Counts 3-character windows whose code points ascend by exactly one.
///
/// Overlapping windows count separately: `abcd` yields 2.
pub fn sequential_windows(chars: &[char]) -> usize {
    chars
        .windows(3)
        .filter(|w| {
            let (a, b, c) = (w[0] as u32, w[1] as u32, w[2] as u32);
            b == a + 1 && c == b + 1
        })
        .count()
}

/// Length of the longest run of one repeated character.
pub fn longest_run(chars: &[char]) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for i in 0..chars.len() {
        if i > 0 && chars[i] == chars[i - 1] {
            current += 1;
        } else {
            current = 1;
        }
        longest = longest.max(current);
    }
    longest
}

// Whole-string check, not a substring search.
fn is_username_like(lowered: &str) -> bool {
    lowered.chars().count() >= 3
        && lowered
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_sequential_windows_overlap() {
        assert_eq!(sequential_windows(&chars("abcd")), 2);
        assert_eq!(sequential_windows(&chars("abcXYZ123")), 3);
        assert_eq!(sequential_windows(&chars("ab")), 0);
        assert_eq!(sequential_windows(&chars("cba")), 0);
    }

    #[test]
    fn test_longest_run() {
        assert_eq!(longest_run(&chars("")), 0);
        assert_eq!(longest_run(&chars("a")), 1);
        assert_eq!(longest_run(&chars("aabbbbc")), 4);
        assert_eq!(longest_run(&chars("xyzzzzz")), 5);
    }

    #[test]
    fn test_pattern_repetitive_chars() {
        let profile = PatternProfile::detect("aaaaBBBB1111");
        assert!(profile.repeated_chars);
        assert!(!PatternProfile::detect("aabbcc").repeated_chars);
    }

    #[test]
    fn test_pattern_keyboard_walk_case_insensitive() {
        assert!(PatternProfile::detect("MyQWERTYpass").keyboard_pattern);
        assert!(!PatternProfile::detect("RandomPass").keyboard_pattern);
    }

    #[test]
    fn test_pattern_date_like() {
        assert!(PatternProfile::detect("born1987").date_pattern);
        assert!(PatternProfile::detect("x12/05/99").date_pattern);
        assert!(PatternProfile::detect("3-4-2021").date_pattern);
        assert!(!PatternProfile::detect("1850abc").date_pattern);
    }

    #[test]
    fn test_pattern_email_like() {
        assert!(PatternProfile::detect("john.doe@mail.com").email_pattern);
        assert!(!PatternProfile::detect("john@mail").email_pattern);
    }

    #[test]
    fn test_pattern_username_like_is_whole_string() {
        assert!(PatternProfile::detect("JohnDoe99").username_pattern);
        assert!(!PatternProfile::detect("ab").username_pattern);
        assert!(!PatternProfile::detect("john_doe").username_pattern);
    }

    #[test]
    fn test_pattern_leet_speak() {
        assert!(PatternProfile::detect("p@ss").leet_speak);
        assert!(PatternProfile::detect("h3llo").leet_speak);
        assert!(!PatternProfile::detect("hello").leet_speak);
    }

    #[test]
    fn test_pattern_dictionary_word() {
        assert!(PatternProfile::detect("SuperADMIN").dictionary_word);
        assert!(!PatternProfile::detect("Xk9#mQ").dictionary_word);
    }

    #[test]
    fn test_pattern_empty() {
        assert_eq!(PatternProfile::detect(""), PatternProfile::default());
    }
}
