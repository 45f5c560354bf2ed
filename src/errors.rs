use thiserror::Error;

/// Error type for the surfaces around the ledger: configuration files and
/// parsing of user-supplied amounts and dates. Ledger operations never fail.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid date `{input}`, expected format `{format}`")]
    InvalidDate { input: String, format: String },
    #[error("Configuration error: {0}")]
    Config(String),
}
