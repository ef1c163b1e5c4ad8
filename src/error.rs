use thiserror::Error;

#[derive(Error, Debug)]
pub enum Erc721Error {
    #[error("value does not fit in a single field element: {reason}")]
    FeltOverflow { reason: String },

    #[error("malformed hex data: {reason}")]
    MalformedHex { reason: String },

    #[error("token id out of range: {reason}")]
    TokenIdOutOfRange { reason: String },

    #[error("invalid call parameters: {reason}")]
    InvalidCall { reason: String },

    #[error("transaction submission failed: {reason}")]
    SubmissionFailed { reason: String },

    #[error("timeout waiting for transaction confirmation")]
    ConfirmationTimeout,

    #[error("transaction {transaction_hash} rejected on chain")]
    Rejected { transaction_hash: String },

    #[error("provider error: {0}")]
    Provider(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Erc721Error>;
