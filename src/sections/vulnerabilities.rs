//! Vulnerability classifier - maps the earlier stages onto named weakness tags.

use crate::sections::patterns::longest_run;
use crate::tables::is_common_password;
use crate::types::{
    CharacterProfile, EntropyProfile, PatternProfile, Vulnerability, VulnerabilitySet,
};

const MIN_LENGTH: usize = 8;
const RECOMMENDED_LENGTH: usize = 12;
const EXCESSIVE_REPEAT_RUN: usize = 4;
const LOW_ENTROPY_THRESHOLD: f64 = 30.0;

/// Collects vulnerabilities in a fixed check order.
pub fn classify_vulnerabilities(
    password: &str,
    characters: &CharacterProfile,
    patterns: &PatternProfile,
    entropy: &EntropyProfile,
) -> VulnerabilitySet {
    let chars: Vec<char> = password.chars().collect();
    let length = chars.len();

    let checks = [
        (length < MIN_LENGTH, Vulnerability::TooShort),
        (length < RECOMMENDED_LENGTH, Vulnerability::SuboptimalLength),
        (is_common_password(password), Vulnerability::CommonPassword),
        (patterns.keyboard_pattern, Vulnerability::KeyboardPattern),
        (
            longest_run(&chars) >= EXCESSIVE_REPEAT_RUN,
            Vulnerability::ExcessiveRepetition,
        ),
        (patterns.sequential_chars, Vulnerability::SequentialCharacters),
        (
            characters.variety() <= 1,
            Vulnerability::InsufficientCharacterVariety,
        ),
        (
            entropy.effective_entropy < LOW_ENTROPY_THRESHOLD,
            Vulnerability::LowEntropy,
        ),
        (patterns.dictionary_word, Vulnerability::DictionaryWords),
    ];

    checks
        .into_iter()
        .filter(|(triggered, _)| *triggered)
        .map(|(_, vulnerability)| vulnerability)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(password: &str) -> VulnerabilitySet {
        let characters = CharacterProfile::from_password(password);
        let patterns = PatternProfile::detect(password);
        let entropy = EntropyProfile::estimate(password, &characters, &patterns);
        classify_vulnerabilities(password, &characters, &patterns, &entropy)
    }

    #[test]
    fn test_short_password_is_too_short_and_suboptimal() {
        let vulns = classify("Ab1!");
        assert_eq!(
            &vulns.as_slice()[..2],
            &[Vulnerability::TooShort, Vulnerability::SuboptimalLength]
        );
    }

    #[test]
    fn test_common_password_order() {
        let tags: Vec<&str> = classify("password").iter().map(|v| v.as_str()).collect();
        assert_eq!(
            tags,
            [
                "suboptimal_length",
                "common_password",
                "insufficient_character_variety",
                "low_entropy",
                "dictionary_words",
            ]
        );
    }

    #[test]
    fn test_excessive_repetition_needs_four() {
        assert!(!classify("Xk9#aaaQ2$mLp").contains(Vulnerability::ExcessiveRepetition));
        assert!(classify("Xk9#aaaaQ2$mL").contains(Vulnerability::ExcessiveRepetition));
    }

    #[test]
    fn test_keyboard_and_sequential() {
        let vulns = classify("qwerty123");
        assert!(vulns.contains(Vulnerability::KeyboardPattern));
        assert!(vulns.contains(Vulnerability::SequentialCharacters));
    }

    #[test]
    fn test_strong_password_has_no_vulnerabilities() {
        assert!(classify("Xk9#mQ2$vLp7!wRz").is_empty());
    }
}
