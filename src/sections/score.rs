//! Score section - folds entropy, length, variety and vulnerabilities into 0-100.

use crate::types::{CharacterProfile, EntropyProfile, VulnerabilitySet};

const ENTROPY_TIERS: &[(f64, i64)] = &[(60.0, 40), (50.0, 30), (40.0, 20), (30.0, 10)];
const LENGTH_TIERS: &[(usize, i64)] = &[(16, 30), (12, 25), (10, 15), (8, 10)];
const VULNERABILITY_COST: i64 = 8;

/// Computes the strength score.
///
/// The entropy tier uses the larger of effective and estimated entropy.
/// Returns 0 if either entropy figure is not a finite number.
pub fn strength_score(
    length: usize,
    characters: &CharacterProfile,
    entropy: &EntropyProfile,
    vulnerabilities: &VulnerabilitySet,
) -> u8 {
    let best_entropy = entropy.effective_entropy.max(entropy.estimated_entropy);
    if !best_entropy.is_finite() {
        return 0;
    }

    let mut score: i64 = 0;

    score += ENTROPY_TIERS
        .iter()
        .find(|(threshold, _)| best_entropy >= *threshold)
        .map_or(0, |(_, points)| *points);

    score += LENGTH_TIERS
        .iter()
        .find(|(threshold, _)| length >= *threshold)
        .map_or(0, |(_, points)| *points);

    score += match characters.variety() {
        4 => 20,
        3 => 10,
        _ => 0,
    };

    score -= vulnerabilities.len() as i64 * VULNERABILITY_COST;

    score.clamp(0, 100) as u8
}
