//! Crack-time projection for fixed attacker profiles and attack scenarios.

use std::collections::BTreeMap;

use crate::tables::{ATTACKER_PROFILES, ATTACK_SCENARIOS};

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
/// 365 days, no leap adjustment.
const YEAR: f64 = 31_536_000.0;

/// Formats a duration in seconds.
///
/// ```
/// use pwd_analyzer::format_time;
///
/// assert_eq!(format_time(0.5), "500ms");
/// assert_eq!(format_time(150.0), "2.5m");
/// ```
pub fn format_time(seconds: f64) -> String {
    if seconds.is_nan() || seconds < 0.001 {
        "Less than 1ms".to_string()
    } else if seconds.is_infinite() {
        "Infinite".to_string()
    } else if seconds < 1.0 {
        format!("{:.0}ms", seconds * 1000.0)
    } else if seconds < MINUTE {
        format!("{}s", seconds.trunc() as u64)
    } else if seconds < HOUR {
        format!("{:.1}m", seconds / MINUTE)
    } else if seconds < DAY {
        format!("{:.1}h", seconds / HOUR)
    } else if seconds < YEAR {
        format!("{:.1}d", seconds / DAY)
    } else {
        format!("{:.1}y", seconds / YEAR)
    }
}

/// Expected seconds to find the password: half the keyspace at `guesses_per_second`.
pub fn expected_crack_seconds(effective_entropy: f64, guesses_per_second: f64) -> f64 {
    let attempts = 2f64.powf(effective_entropy) / 2.0;
    attempts / guesses_per_second
}

/// Formatted crack time for every attacker profile.
pub fn crack_times(effective_entropy: f64) -> BTreeMap<String, String> {
    ATTACKER_PROFILES
        .iter()
        .map(|(name, rate)| {
            let seconds = expected_crack_seconds(effective_entropy, *rate);
            (name.to_string(), format_time(seconds))
        })
        .collect()
}

/// Formatted resistance for every attack scenario.
///
/// Scenarios search the full (optionally capped) keyspace.
pub fn attack_scenarios(effective_entropy: f64) -> BTreeMap<String, String> {
    ATTACK_SCENARIOS
        .iter()
        .map(|(name, rate, cap)| {
            let bits = cap.map_or(effective_entropy, |cap| effective_entropy.min(cap));
            let seconds = 2f64.powf(bits) / rate;
            (name.to_string(), format_time(seconds))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_boundaries() {
        assert_eq!(format_time(0.0005), "Less than 1ms");
        assert_eq!(format_time(0.5), "500ms");
        assert_eq!(format_time(45.0), "45s");
        assert_eq!(format_time(59.9), "59s");
        assert_eq!(format_time(150.0), "2.5m");
        assert_eq!(format_time(7_200.0), "2.0h");
        assert_eq!(format_time(90_000.0), "1.0d");
        assert_eq!(format_time(YEAR * 3.0), "3.0y");
    }

    #[test]
    fn test_format_time_degenerate_values() {
        assert_eq!(format_time(f64::NAN), "Less than 1ms");
        assert_eq!(format_time(-1.0), "Less than 1ms");
        assert_eq!(format_time(f64::INFINITY), "Infinite");
    }

    #[test]
    fn test_expected_crack_seconds_halves_keyspace() {
        // 2^10 / 2 = 512 attempts at 100/s
        assert!((expected_crack_seconds(10.0, 100.0) - 5.12).abs() < 1e-9);
    }

    #[test]
    fn test_crack_times_profiles() {
        let times = crack_times(0.0);
        assert_eq!(times.len(), 4);
        // half an attempt at 100/s = 5ms
        assert_eq!(times["online"], "5ms");
        assert_eq!(times["offline"], "Less than 1ms");
        assert!(times.contains_key("gpu"));
        assert!(times.contains_key("specialized"));
    }

    #[test]
    fn test_attack_scenarios_dictionary_is_capped() {
        let scenarios = attack_scenarios(100.0);
        assert_eq!(scenarios.len(), 4);
        // 2^20 / 1e9 ~ 1ms regardless of entropy
        assert_eq!(scenarios["dictionary_attack"], "1ms");
        assert!(scenarios["brute_force_cpu"].ends_with('y'));
        assert!(scenarios["specialized_hardware"].ends_with('y'));
    }

    #[test]
    fn test_projection_exact_strings_at_forty_bits() {
        // 2^40 ~ 1.0995e12
        let scenarios = attack_scenarios(40.0);
        assert_eq!(scenarios["dictionary_attack"], "1ms");
        assert_eq!(scenarios["brute_force_cpu"], "18.3m");
        assert_eq!(scenarios["brute_force_gpu"], "1.8m");
        assert_eq!(scenarios["specialized_hardware"], "1s");

        let times = crack_times(40.0);
        assert_eq!(times["online"], "174.3y");
        assert_eq!(times["offline"], "9.2m");
        assert_eq!(times["gpu"], "54s");
        assert_eq!(times["specialized"], "550ms");
    }
}
