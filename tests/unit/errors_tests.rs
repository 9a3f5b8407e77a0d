/*!
 * Tests for error type conversions and formatting
 */

use redraft::errors::{AppError, ConfigError, ProviderError, SplitError, TranslationError};

/// Test provider error display formatting
#[test]
fn test_providerError_display_shouldIncludeDetails() {
    let error = ProviderError::ApiError {
        status_code: 429,
        message: "too many requests".to_string(),
    };

    let message = error.to_string();
    assert!(message.contains("429"));
    assert!(message.contains("too many requests"));
}

/// Test that provider errors convert into translation errors
#[test]
fn test_translationError_fromProviderError_shouldWrap() {
    let provider_error = ProviderError::ConnectionError("connection refused".to_string());
    let translation_error: TranslationError = provider_error.into();

    assert!(matches!(
        translation_error,
        TranslationError::Provider(ProviderError::ConnectionError(_))
    ));
    assert!(translation_error.to_string().contains("connection refused"));
}

/// Test that split errors convert into translation errors
#[test]
fn test_translationError_fromSplitError_shouldWrap() {
    let split_error = SplitError::CoverageCheckFailed("missing bytes".to_string());
    let translation_error: TranslationError = split_error.into();

    assert!(matches!(translation_error, TranslationError::Split(_)));
}

/// Test that config errors convert into app errors
#[test]
fn test_appError_fromConfigError_shouldWrap() {
    let config_error = ConfigError::MissingApiKey("OPENAI_API_KEY is not set".to_string());
    let app_error: AppError = config_error.into();

    assert!(matches!(app_error, AppError::Config(_)));
    assert!(app_error.to_string().contains("OPENAI_API_KEY"));
}

/// Test io error conversion into the app error file variant
#[test]
fn test_appError_fromIoError_shouldBecomeFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let app_error: AppError = io_error.into();

    assert!(matches!(app_error, AppError::File(_)));
}
