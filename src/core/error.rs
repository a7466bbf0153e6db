/// Crate-wide Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for gateway interactions
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The requested payment method name matches none of the known variants
    #[error("Unknown payment method '{0}'. See the documentation for the available payment methods.")]
    UnknownPaymentMethod(String),

    /// JSON-mode checksum verification failed on a successful gateway response.
    /// Either the credentials are wrong or the response was tampered with;
    /// the transaction must not be trusted.
    #[error("Response is not valid, wrong encryption. Please check your credentials.")]
    InvalidResponseSignature,

    /// The gateway itself rejected the request; carries the gateway's own
    /// return message verbatim
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

// Helper functions for common error scenarios
impl Error {
    pub fn gateway(msg: impl Into<String>) -> Self {
        Error::Gateway(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration(msg.into())
    }
}
