//! Analysis result types.
//!
//! Every type here is built fresh for one call and never mutated after
//! it is returned.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Which character classes a password uses, and how often.
///
/// Characters outside the four classes are not counted anywhere but still
/// contribute to the password length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CharacterProfile {
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digits: bool,
    pub has_special: bool,
    pub uppercase_count: usize,
    pub lowercase_count: usize,
    pub digit_count: usize,
    pub special_count: usize,
}

/// Weak patterns found in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PatternProfile {
    pub sequential_chars: bool,
    pub repeated_chars: bool,
    pub keyboard_pattern: bool,
    pub date_pattern: bool,
    pub email_pattern: bool,
    pub username_pattern: bool,
    pub leet_speak: bool,
    pub dictionary_word: bool,
}

/// Entropy measures and the penalties subtracted from them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EntropyProfile {
    pub charset_size: u32,
    pub shannon_entropy: f64,
    pub conditional_entropy: f64,
    pub frequency_entropy: f64,
    pub markov_entropy: f64,
    pub pattern_penalty: f64,
    pub dictionary_penalty: f64,
    pub repetition_penalty: f64,
    pub predictability_penalty: f64,
    pub effective_entropy: f64,
    pub estimated_entropy: f64,
}

impl EntropyProfile {
    /// The all-zero profile used for empty input and arithmetic failures.
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// Sum of all four penalties.
    pub fn total_penalty(&self) -> f64 {
        self.pattern_penalty
            + self.dictionary_penalty
            + self.repetition_penalty
            + self.predictability_penalty
    }
}

/// A named weakness category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Vulnerability {
    TooShort,
    SuboptimalLength,
    CommonPassword,
    KeyboardPattern,
    ExcessiveRepetition,
    SequentialCharacters,
    InsufficientCharacterVariety,
    LowEntropy,
    DictionaryWords,
}

impl Vulnerability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TooShort => "too_short",
            Self::SuboptimalLength => "suboptimal_length",
            Self::CommonPassword => "common_password",
            Self::KeyboardPattern => "keyboard_pattern",
            Self::ExcessiveRepetition => "excessive_repetition",
            Self::SequentialCharacters => "sequential_characters",
            Self::InsufficientCharacterVariety => "insufficient_character_variety",
            Self::LowEntropy => "low_entropy",
            Self::DictionaryWords => "dictionary_words",
        }
    }
}

impl fmt::Display for Vulnerability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vulnerabilities in detection order, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VulnerabilitySet(Vec<Vulnerability>);

impl VulnerabilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `vulnerability` unless already present.
    /// Returns `true` if it was added.
    pub fn insert(&mut self, vulnerability: Vulnerability) -> bool {
        if self.contains(vulnerability) {
            return false;
        }
        self.0.push(vulnerability);
        true
    }

    pub fn contains(&self, vulnerability: Vulnerability) -> bool {
        self.0.contains(&vulnerability)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vulnerability> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Vulnerability] {
        &self.0
    }
}

impl FromIterator<Vulnerability> for VulnerabilitySet {
    fn from_iter<I: IntoIterator<Item = Vulnerability>>(iter: I) -> Self {
        let mut set = Self::new();
        for vulnerability in iter {
            set.insert(vulnerability);
        }
        set
    }
}

/// Human-readable strength tier derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum StrengthLabel {
    #[serde(rename = "Very Weak")]
    VeryWeak,
    #[serde(rename = "Weak")]
    Weak,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "Strong")]
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl StrengthLabel {
    /// Maps a 0-100 score to its tier.
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::VeryStrong,
            60..=79 => Self::Strong,
            40..=59 => Self::Moderate,
            20..=39 => Self::Weak,
            _ => Self::VeryWeak,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The full report for one password.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub password_length: usize,
    pub strength_score: u8,
    pub strength_label: StrengthLabel,
    /// Charset-based Shannon entropy, before penalties.
    pub entropy: f64,
    pub effective_entropy: f64,
    pub entropy_details: EntropyProfile,
    pub character_types: CharacterProfile,
    pub patterns: PatternProfile,
    pub vulnerabilities: VulnerabilitySet,
    /// Attacker profile name to formatted crack time.
    pub time_to_crack: BTreeMap<String, String>,
    /// Attack scenario name to formatted resistance.
    pub attack_scenarios: BTreeMap<String, String>,
    pub recommendations: Vec<String>,
}
