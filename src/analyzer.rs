//! Password analyzer - runs the analysis stages in sequence.

use std::collections::BTreeMap;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    attack_scenarios, classify_vulnerabilities, crack_times, recommendations, strength_score,
};
use crate::types::{
    AnalysisResult, CharacterProfile, EntropyProfile, PatternProfile, StrengthLabel,
    Vulnerability, VulnerabilitySet,
};

#[cfg(feature = "async")]
const DEBOUNCE_ENV: &str = "PWD_ANALYZE_DEBOUNCE_MS";
#[cfg(feature = "async")]
const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("Password cannot be empty")]
    EmptyPassword,
    #[error("Invalid debounce delay {0:?}: expected milliseconds")]
    InvalidDebounce(String),
    #[error("Analysis result receiver was dropped")]
    ChannelClosed,
}

/// Analyzes a password and returns the full report.
///
/// Input that is empty after trimming yields a fixed zero-valued result.
/// The password is never logged or retained.
pub fn analyze(password: &SecretString) -> AnalysisResult {
    let pwd = password.expose_secret();
    if pwd.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::debug!("Empty password, returning fixed result");
        return empty_result();
    }

    let length = pwd.chars().count();

    let characters = CharacterProfile::from_password(pwd);
    let patterns = PatternProfile::detect(pwd);
    let entropy = EntropyProfile::estimate(pwd, &characters, &patterns);
    let vulnerabilities = classify_vulnerabilities(pwd, &characters, &patterns, &entropy);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        length,
        charset_size = entropy.charset_size,
        effective_entropy = entropy.effective_entropy,
        vulnerabilities = vulnerabilities.len(),
        "Password stages complete"
    );

    let score = strength_score(length, &characters, &entropy, &vulnerabilities);
    let label = StrengthLabel::from_score(score);

    #[cfg(feature = "tracing")]
    tracing::debug!(score, label = label.as_str(), "Password scored");

    AnalysisResult {
        password_length: length,
        strength_score: score,
        strength_label: label,
        entropy: entropy.shannon_entropy,
        effective_entropy: entropy.effective_entropy,
        entropy_details: entropy,
        character_types: characters,
        patterns,
        vulnerabilities,
        time_to_crack: crack_times(entropy.effective_entropy),
        attack_scenarios: attack_scenarios(entropy.effective_entropy),
        recommendations: recommendations(pwd, &characters, &patterns),
    }
}

/// Request-boundary entry point: rejects an empty password as a client
/// error, otherwise delegates to [`analyze`].
pub fn analyze_request(password: &SecretString) -> Result<AnalysisResult, AnalyzeError> {
    if password.expose_secret().is_empty() {
        return Err(AnalyzeError::EmptyPassword);
    }
    Ok(analyze(password))
}

fn empty_result() -> AnalysisResult {
    let mut vulnerabilities = VulnerabilitySet::new();
    vulnerabilities.insert(Vulnerability::TooShort);

    AnalysisResult {
        password_length: 0,
        strength_score: 0,
        strength_label: StrengthLabel::VeryWeak,
        entropy: 0.0,
        effective_entropy: 0.0,
        entropy_details: EntropyProfile::zeroed(),
        character_types: CharacterProfile::default(),
        patterns: PatternProfile::default(),
        vulnerabilities,
        time_to_crack: BTreeMap::from([("time".to_string(), "Less than 1 second".to_string())]),
        attack_scenarios: BTreeMap::new(),
        recommendations: vec!["Password cannot be empty".to_string()],
    }
}

/// Returns the debounce delay used by [`analyze_tx`].
///
/// Read from `PWD_ANALYZE_DEBOUNCE_MS`, default 300 ms.
#[cfg(feature = "async")]
pub fn get_debounce_delay() -> Result<Duration, AnalyzeError> {
    match std::env::var(DEBOUNCE_ENV) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| AnalyzeError::InvalidDebounce(raw)),
        Err(_) => Ok(Duration::from_millis(DEFAULT_DEBOUNCE_MS)),
    }
}

/// Async version that waits out the debounce delay and sends the result via channel.
///
/// Nothing is sent if `token` is cancelled before the delay elapses, so a UI
/// can cancel stale requests while the user is still typing.
#[cfg(feature = "async")]
pub async fn analyze_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<AnalysisResult>,
) -> Result<(), AnalyzeError> {
    let delay = get_debounce_delay()?;

    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    tokio::time::sleep(delay).await;
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("Analysis cancelled before start");
        return Ok(());
    }

    let result = analyze(password);
    tx.send(result).await.map_err(|_e| {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password analysis result: {}", _e);
        AnalyzeError::ChannelClosed
    })
}
