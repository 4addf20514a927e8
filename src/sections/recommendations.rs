//! Recommendations section - actionable advice in a fixed order.

use crate::sections::patterns::{REPEAT_RUN, longest_run};
use crate::types::{CharacterProfile, PatternProfile};

pub const EXCELLENT: &str = "Your password is excellent! Keep it secure.";

/// Builds the recommendation list.
///
/// Falls back to a single positive message when nothing applies.
pub fn recommendations(
    password: &str,
    characters: &CharacterProfile,
    patterns: &PatternProfile,
) -> Vec<String> {
    let chars: Vec<char> = password.chars().collect();
    let length = chars.len();

    let length_advice = if length < 12 {
        Some("Increase password length to at least 12 characters")
    } else if length < 16 {
        Some("Consider using 16 or more characters for stronger protection")
    } else {
        None
    };

    let advice = [
        length_advice,
        (!characters.has_uppercase).then_some("Add uppercase letters"),
        (!characters.has_lowercase).then_some("Add lowercase letters"),
        (!characters.has_digits).then_some("Add numbers"),
        (!characters.has_special).then_some("Add special characters (!@#$%^&*)"),
        patterns
            .keyboard_pattern
            .then_some("Avoid keyboard patterns (qwerty, asdfgh, etc.)"),
        patterns
            .sequential_chars
            .then_some("Avoid sequential characters (abc, 123, etc.)"),
        patterns
            .date_pattern
            .then_some("Avoid using dates in your password"),
        patterns
            .dictionary_word
            .then_some("Avoid common dictionary words"),
        (longest_run(&chars) >= REPEAT_RUN)
            .then_some("Avoid repeating the same character (aaa, 111, etc.)"),
    ];

    let mut recs: Vec<String> = advice.into_iter().flatten().map(String::from).collect();
    if recs.is_empty() {
        recs.push(EXCELLENT.to_string());
    }
    recs
}
