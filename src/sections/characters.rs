//! Character classifier - tags uppercase, lowercase, digit and special characters.

use crate::types::CharacterProfile;

impl CharacterProfile {
    /// Classifies every character of `password` into at most one class.
    pub fn from_password(password: &str) -> Self {
        let mut profile = Self::default();
        for c in password.chars() {
            if c.is_ascii_uppercase() {
                profile.uppercase_count += 1;
            } else if c.is_ascii_lowercase() {
                profile.lowercase_count += 1;
            } else if c.is_ascii_digit() {
                profile.digit_count += 1;
            } else if c.is_ascii_punctuation() {
                profile.special_count += 1;
            }
        }
        profile.has_uppercase = profile.uppercase_count > 0;
        profile.has_lowercase = profile.lowercase_count > 0;
        profile.has_digits = profile.digit_count > 0;
        profile.has_special = profile.special_count > 0;
        profile
    }

    /// Number of classes present (0-4).
    pub fn variety(&self) -> usize {
        [
            self.has_uppercase,
            self.has_lowercase,
            self.has_digits,
            self.has_special,
        ]
        .iter()
        .filter(|&&b| b)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_profile_empty() {
        let profile = CharacterProfile::from_password("");
        assert_eq!(profile, CharacterProfile::default());
        assert_eq!(profile.variety(), 0);
    }

    #[test]
    fn test_character_profile_counts() {
        let profile = CharacterProfile::from_password("HasAll123!@#");
        assert!(profile.has_uppercase);
        assert!(profile.has_lowercase);
        assert!(profile.has_digits);
        assert!(profile.has_special);
        assert_eq!(profile.uppercase_count, 2);
        assert_eq!(profile.lowercase_count, 4);
        assert_eq!(profile.digit_count, 3);
        assert_eq!(profile.special_count, 3);
        assert_eq!(profile.variety(), 4);
    }

    #[test]
    fn test_character_profile_missing_uppercase() {
        let profile = CharacterProfile::from_password("lowercase123!");
        assert!(!profile.has_uppercase);
        assert_eq!(profile.variety(), 3);
    }

    #[test]
    fn test_character_profile_ignores_unclassified_characters() {
        // space and non-ASCII letters belong to no class
        let profile = CharacterProfile::from_password("ab cé");
        assert_eq!(profile.lowercase_count, 3);
        assert!(!profile.has_special);
        assert_eq!(profile.variety(), 1);
    }
}
