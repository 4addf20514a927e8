//! Entropy estimator - four independent entropy measures and the penalties
//! subtracted from the charset-based one.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::sections::patterns::{REPEAT_RUN, longest_run, sequential_windows};
use crate::tables::{
    DIGIT_ALPHABET, LOWERCASE_ALPHABET, SPECIAL_ALPHABET, UPPERCASE_ALPHABET, common_word_hits,
    first_common_password_in, is_common_password,
};
use crate::types::{CharacterProfile, EntropyProfile, PatternProfile};

// Pattern penalty weights.
const REPEAT_PENALTY: f64 = 8.0;
const SEVERE_REPEAT_PENALTY: f64 = 15.0;
const SEVERE_REPEAT_RUN: usize = 5;
const SEQUENTIAL_WINDOW_PENALTY: f64 = 5.0;
const KEYBOARD_PENALTY: f64 = 12.0;
const DATE_PENALTY: f64 = 10.0;

// Dictionary penalty weights.
const EXACT_COMMON_PENALTY: f64 = 50.0;
const CONTAINED_COMMON_PENALTY: f64 = 15.0;
const COMMON_WORD_PENALTY: f64 = 8.0;

const REPETITION_RATIO_THRESHOLD: f64 = 0.5;
const REPETITION_WEIGHT: f64 = 20.0;

/// Class-mix templates: (target fraction, penalty). Tunable heuristics, not
/// security guarantees.
const UPPERCASE_TEMPLATE: (f64, f64) = (0.5, 3.0);
const LOWERCASE_TEMPLATE: (f64, f64) = (0.5, 3.0);
const DIGIT_TEMPLATE: (f64, f64) = (0.3, 2.0);
const SPECIAL_TEMPLATE: (f64, f64) = (0.2, 2.0);
const TEMPLATE_TOLERANCE: f64 = 0.1;

// Blend weights for the estimated entropy.
const SHANNON_WEIGHT: f64 = 0.4;
const CONDITIONAL_WEIGHT: f64 = 0.3;
const FREQUENCY_WEIGHT: f64 = 0.15;
const MARKOV_WEIGHT: f64 = 0.15;

impl EntropyProfile {
    /// Computes every entropy measure and penalty for `password`.
    ///
    /// Falls back to [`EntropyProfile::zeroed`] if any measure comes out
    /// non-finite.
    pub fn estimate(
        password: &str,
        characters: &CharacterProfile,
        patterns: &PatternProfile,
    ) -> Self {
        let chars: Vec<char> = password.chars().collect();
        let lowered = password.to_lowercase();

        let charset_size = charset_size(characters);
        let shannon_entropy = charset_entropy(chars.len(), charset_size);
        let bigrams = chars.windows(2).map(|w| (w[0], w[1]));
        let conditional_entropy = distribution_entropy(counts(bigrams));
        let frequency_entropy = distribution_entropy(counts(chars.iter().copied()));
        let markov_entropy = markov_entropy(&chars);

        let pattern_penalty = pattern_penalty(&chars, patterns);
        let dictionary_penalty = dictionary_penalty(&lowered);
        let repetition_penalty = repetition_penalty(&chars);
        let predictability_penalty = predictability_penalty(characters, chars.len());

        let mut profile = Self {
            charset_size,
            shannon_entropy,
            conditional_entropy,
            frequency_entropy,
            markov_entropy,
            pattern_penalty,
            dictionary_penalty,
            repetition_penalty,
            predictability_penalty,
            effective_entropy: 0.0,
            estimated_entropy: 0.0,
        };
        profile.effective_entropy = (shannon_entropy - profile.total_penalty()).max(0.0);
        profile.estimated_entropy = SHANNON_WEIGHT * shannon_entropy
            + CONDITIONAL_WEIGHT * conditional_entropy
            + FREQUENCY_WEIGHT * frequency_entropy
            + MARKOV_WEIGHT * markov_entropy;

        if !profile.is_finite() {
            #[cfg(feature = "tracing")]
            tracing::warn!("Entropy estimation produced a non-finite value, using zero profile");
            return Self::zeroed();
        }

        profile
    }

    fn is_finite(&self) -> bool {
        [
            self.shannon_entropy,
            self.conditional_entropy,
            self.frequency_entropy,
            self.markov_entropy,
            self.pattern_penalty,
            self.dictionary_penalty,
            self.repetition_penalty,
            self.predictability_penalty,
            self.effective_entropy,
            self.estimated_entropy,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Sum of the fixed alphabet sizes of the classes present.
pub fn charset_size(characters: &CharacterProfile) -> u32 {
    let mut size = 0;
    if characters.has_lowercase {
        size += LOWERCASE_ALPHABET;
    }
    if characters.has_uppercase {
        size += UPPERCASE_ALPHABET;
    }
    if characters.has_digits {
        size += DIGIT_ALPHABET;
    }
    if characters.has_special {
        size += SPECIAL_ALPHABET;
    }
    size
}

/// `length * log2(charset_size)`, or 0 for a charset of at most one symbol.
pub fn charset_entropy(length: usize, charset_size: u32) -> f64 {
    if charset_size <= 1 {
        return 0.0;
    }
    length as f64 * f64::from(charset_size).log2()
}

fn counts<T: Eq + Hash>(items: impl Iterator<Item = T>) -> HashMap<T, usize> {
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

/// Shannon entropy (bits) of an empirical distribution given as counts.
pub fn distribution_entropy<T>(counts: HashMap<T, usize>) -> f64 {
    let total: usize = counts.values().sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            p * (1.0 / p).log2()
        })
        .sum()
}

/// Average next-character entropy over every distinct character that is
/// followed by something. Each current character weighs the same regardless
/// of how often it occurs.
pub fn markov_entropy(chars: &[char]) -> f64 {
    if chars.len() < 2 {
        return 0.0;
    }
    let mut transitions: HashMap<char, HashMap<char, usize>> = HashMap::new();
    for w in chars.windows(2) {
        *transitions.entry(w[0]).or_default().entry(w[1]).or_insert(0) += 1;
    }
    let states = transitions.len();
    if states == 0 {
        return 0.0;
    }
    let total: f64 = transitions.into_values().map(distribution_entropy).sum();
    total / states as f64
}

/// Penalty for repeats, sequential windows, keyboard walks and dates.
pub fn pattern_penalty(chars: &[char], patterns: &PatternProfile) -> f64 {
    let mut penalty = 0.0;

    let run = longest_run(chars);
    if run >= REPEAT_RUN {
        penalty += REPEAT_PENALTY;
    }
    if run >= SEVERE_REPEAT_RUN {
        penalty += SEVERE_REPEAT_PENALTY;
    }

    penalty += sequential_windows(chars) as f64 * SEQUENTIAL_WINDOW_PENALTY;

    if patterns.keyboard_pattern {
        penalty += KEYBOARD_PENALTY;
    }
    if patterns.date_pattern {
        penalty += DATE_PENALTY;
    }
    penalty
}

/// Penalty for common passwords and dictionary words in `lowered`.
pub fn dictionary_penalty(lowered: &str) -> f64 {
    if is_common_password(lowered) {
        return EXACT_COMMON_PENALTY;
    }
    let mut penalty = 0.0;
    if first_common_password_in(lowered).is_some() {
        penalty += CONTAINED_COMMON_PENALTY;
    }
    penalty + common_word_hits(lowered) as f64 * COMMON_WORD_PENALTY
}

/// Penalty for a small set of distinct characters relative to the length.
pub fn repetition_penalty(chars: &[char]) -> f64 {
    if chars.is_empty() {
        return 0.0;
    }
    let unique = chars.iter().collect::<HashSet<_>>().len();
    let ratio = 1.0 - unique as f64 / chars.len() as f64;
    if ratio > REPETITION_RATIO_THRESHOLD {
        ratio * REPETITION_WEIGHT
    } else {
        0.0
    }
}

/// Penalty for class mixes close to commonly templated ratios.
pub fn predictability_penalty(characters: &CharacterProfile, length: usize) -> f64 {
    if length == 0 {
        return 0.0;
    }
    let length = length as f64;
    [
        (characters.uppercase_count, UPPERCASE_TEMPLATE),
        (characters.lowercase_count, LOWERCASE_TEMPLATE),
        (characters.digit_count, DIGIT_TEMPLATE),
        (characters.special_count, SPECIAL_TEMPLATE),
    ]
    .into_iter()
    .filter(|(count, (target, _))| (*count as f64 / length - target).abs() < TEMPLATE_TOLERANCE)
    .map(|(_, (_, penalty))| penalty)
    .sum()
}
