//! Fixed lookup tables
//!
//! Every table here is part of the scoring model: changing an entry changes
//! scores, so the lists are versioned together with the crate.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Alphabet size credited when at least one lowercase letter is present.
pub const LOWERCASE_ALPHABET: u32 = 26;
/// Alphabet size credited when at least one uppercase letter is present.
pub const UPPERCASE_ALPHABET: u32 = 26;
/// Alphabet size credited when at least one digit is present.
pub const DIGIT_ALPHABET: u32 = 10;
/// Alphabet size credited when at least one special character is present.
pub const SPECIAL_ALPHABET: u32 = 32;

/// Characters counted as leet-speak substitutions.
pub const LEET_CHARS: &[char] = &['@', '3', '!', '1', '$', '0'];

// "letmein" and "dragon" appear twice; the set collapses them.
const COMMON_PASSWORD_LIST: &[&str] = &[
    "password", "123456", "qwerty", "abc123", "letmein", "trustno1",
    "dragon", "baseball", "iloveyou", "master", "sunshine", "ashley",
    "bailey", "passw0rd", "123456789", "shadow", "123123", "666666",
    "qazwsx", "michael", "football", "welcome", "jesus", "ninja",
    "mustang", "password123", "admin", "letmein", "monkey", "dragon",
];

/// Known adjacent-key sequences, matched case-insensitively as substrings.
pub const KEYBOARD_PATTERNS: &[&str] = &[
    "qwerty", "asdfgh", "zxcvbn", "qazwsx", "qwertyuiop", "asdfghjkl",
    "zxcvbnm", "qweasd", "1234567890", "abcdef",
];

/// Dictionary words; every hit counts separately towards the dictionary penalty.
pub const COMMON_WORDS: &[&str] = &[
    "password", "admin", "user", "test", "welcome", "dragon", "master",
    "login", "secret", "hello", "love", "monkey", "shadow", "sunshine",
    "football", "baseball", "letmein", "princess",
];

/// Attacker throughput profiles in guesses per second.
pub const ATTACKER_PROFILES: &[(&str, f64)] = &[
    ("online", 1e2),
    ("offline", 1e9),
    ("gpu", 1e10),
    ("specialized", 1e12),
];

/// Named attack scenarios: guesses per second and an optional entropy cap.
pub const ATTACK_SCENARIOS: &[(&str, f64, Option<f64>)] = &[
    ("dictionary_attack", 1e9, Some(20.0)),
    ("brute_force_cpu", 1e9, None),
    ("brute_force_gpu", 1e10, None),
    ("specialized_hardware", 1e12, None),
];

static COMMON_PASSWORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| COMMON_PASSWORD_LIST.iter().copied().collect());

/// Returns the common-password set.
pub fn common_passwords() -> &'static HashSet<&'static str> {
    &COMMON_PASSWORDS
}

/// Checks if a password is exactly one of the common passwords.
///
/// The comparison is case-insensitive.
pub fn is_common_password(password: &str) -> bool {
    COMMON_PASSWORDS.contains(password.to_lowercase().as_str())
}

/// First common password (in table order) contained in `lowered`, if any.
pub fn first_common_password_in(lowered: &str) -> Option<&'static str> {
    COMMON_PASSWORD_LIST
        .iter()
        .copied()
        .find(|common| lowered.contains(common))
}

/// Number of dictionary words contained in `lowered`.
pub fn common_word_hits(lowered: &str) -> usize {
    COMMON_WORDS.iter().filter(|word| lowered.contains(*word)).count()
}

/// Checks if `lowered` contains any keyboard walk of at least three characters.
pub fn contains_keyboard_walk(lowered: &str) -> bool {
    KEYBOARD_PATTERNS
        .iter()
        .filter(|pattern| pattern.len() >= 3)
        .any(|pattern| lowered.contains(pattern))
}
