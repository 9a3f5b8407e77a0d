/*!
 * Error types for the redraft application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when working with provider APIs
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error related to rate limiting
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur while building or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No API key in the config and none in the environment
    #[error("Missing API key: {0}")]
    MissingApiKey(String),

    /// Endpoint URL failed to parse
    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint {
        /// The offending URL
        url: String,
        /// Why it was rejected
        reason: String
    },

    /// Token budget must be strictly positive
    #[error("Invalid token budget: {0} (must be > 0)")]
    InvalidTokenBudget(usize),

    /// Provider identifier not recognized
    #[error("Unknown provider type: {0}")]
    UnknownProvider(String),
}

/// Errors that can occur while counting tokens or splitting text
#[derive(Error, Debug)]
pub enum SplitError {
    /// The BPE encoder for the configured encoding could not be built
    #[error("Failed to initialize token encoder '{encoding}': {reason}")]
    EncoderInit {
        /// Encoding name
        encoding: String,
        /// Underlying failure
        reason: String
    },

    /// Splitting produced chunks that do not cover the input
    #[error("Split coverage check failed: {0}")]
    CoverageCheckFailed(String),
}

/// Errors that can occur during translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the provider API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from token counting or text splitting
    #[error("Split error: {0}")]
    Split(#[from] SplitError),

    /// Error from configuration (default provider construction)
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from configuration
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
