//! Password strength analysis library
//!
//! This library estimates how hard a password is to guess. One call runs
//! five stages in sequence: character classification, pattern detection,
//! entropy estimation, vulnerability classification, and score and
//! crack-time aggregation.
//!
//! Analysis is a pure function of its input: no state is kept between
//! calls, so [`analyze`] can be called from any number of threads.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async analysis with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_ANALYZE_DEBOUNCE_MS`: Delay before [`analyze_tx`] starts
//!   (default: `300`)
//!
//! # Example
//!
//! ```rust
//! use pwd_analyzer::{analyze, StrengthLabel};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let result = analyze(&password);
//!
//! println!("Score: {}", result.strength_score);
//! println!("Strength: {}", result.strength_label);
//! assert!(result.strength_label < StrengthLabel::VeryStrong);
//! ```

mod analyzer;
pub mod sections;
pub mod tables;
mod types;

// Public API
pub use analyzer::{AnalyzeError, analyze, analyze_request};
pub use sections::format_time;
pub use types::{
    AnalysisResult, CharacterProfile, EntropyProfile, PatternProfile, StrengthLabel,
    Vulnerability, VulnerabilitySet,
};

#[cfg(feature = "async")]
pub use analyzer::{analyze_tx, get_debounce_delay};
