use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    /// A balance string from the aggregation service is not an integer.
    #[error("invalid balance for token {token}: {value:?}")]
    InvalidBalance { token: String, value: String },

    #[error("configuration error: {0}")]
    Config(String),
}
