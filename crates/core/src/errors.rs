use thiserror::Error;

/// Unified error type for the varntix-core library.
///
/// The calculation core (frequency resolution, interest math, schedules,
/// chart mapping) is total and never produces one of these. Errors come
/// from strategy validation and the strategy catalog plumbing.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Investment validation ───────────────────────────────────────
    #[error("Invalid investment amount: {0}")]
    InvalidAmount(f64),

    #[error("Amount {amount} is below the strategy minimum of {minimum}")]
    BelowMinimum { amount: f64, minimum: f64 },

    #[error("Amount {amount} exceeds the strategy cap of {cap}")]
    AboveCap { amount: f64, cap: f64 },

    #[error("Validation failed: {0}")]
    ValidationError(String),

    // ── Strategy catalog ────────────────────────────────────────────
    #[error("Strategy not found: {0}")]
    StrategyNotFound(String),

    #[error("No strategy provider registered")]
    NoProvider,

    #[error("API error ({provider}): {message}")]
    Api {
        provider: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest errors carry the full URL; auth tokens may ride in the query.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
