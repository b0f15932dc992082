/// Represents a result type for operations in the Clickstream core.
///
/// This `Result` type is a standard Rust `Result` type where the error variant is defined by the
/// clickstream-specific [`Error`] enum.
pub type Result<T> = std::result::Result<T, Error>;

/// Enum representing possible errors that can occur in the Clickstream core.
///
/// Note that the gating operations themselves ([`crate::HealthEventConfig::is_eligible`] and
/// friends) are total functions: malformed input evaluates to `false` instead of signaling an
/// error. `Error` only shows up at the configuration boundary.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Health-event configuration failed to deserialize.
    #[error("invalid health event configuration")]
    InvalidHealthConfig(#[source] serde_json::Error),
}
