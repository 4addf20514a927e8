//! Password analysis sections
//!
//! Each section covers one stage of the analysis. Stages only read the
//! output of earlier stages.

mod characters;
mod entropy;
mod patterns;
mod projection;
mod recommendations;
mod score;
mod vulnerabilities;

pub use entropy::{
    charset_entropy, charset_size, dictionary_penalty, distribution_entropy, markov_entropy,
    pattern_penalty, predictability_penalty, repetition_penalty,
};
pub use patterns::{longest_run, sequential_windows};
pub use projection::{attack_scenarios, crack_times, expected_crack_seconds, format_time};
pub use recommendations::recommendations;
pub use score::strength_score;
pub use vulnerabilities::classify_vulnerabilities;
