/*!
 * Tests for application configuration handling
 */

use redraft::app_config::{Config, TranslationProvider};
use redraft::errors::ConfigError;

use crate::common;

/// Test that the default configuration is valid and complete
#[test]
fn test_defaultConfig_shouldContainBothProviders() {
    let config = Config::default();

    assert!(config.validate().is_ok());
    assert_eq!(config.translation.available_providers.len(), 2);
    assert!(config.translation.active_provider_config().is_some());
}

/// Test JSON round trip through a config file
#[test]
fn test_configFile_shouldRoundTrip() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir_path = temp_dir.path().to_path_buf();

    let mut config = Config::default();
    config.source_language = "de".to_string();
    config.target_language = "ja".to_string();
    config.country = "Japan".to_string();
    config.token_budget = 500;

    let json = serde_json::to_string_pretty(&config).unwrap();
    let config_path = common::create_test_file(&dir_path, "conf.json", &json).unwrap();

    let loaded: Config =
        serde_json::from_reader(std::fs::File::open(&config_path).unwrap()).unwrap();

    assert_eq!(loaded.source_language, "de");
    assert_eq!(loaded.target_language, "ja");
    assert_eq!(loaded.country, "Japan");
    assert_eq!(loaded.token_budget, 500);
    assert!(loaded.validate().is_ok());
}

/// Test that missing optional fields fall back to defaults
#[test]
fn test_configParse_withMinimalJson_shouldUseDefaults() {
    let json = r#"{
        "source_language": "en",
        "target_language": "pt",
        "translation": {}
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.token_budget, 1000);
    assert_eq!(config.country, "");
    assert_eq!(config.translation.provider, TranslationProvider::OpenAI);
}

/// Test provider selection parsing from config JSON
#[test]
fn test_configParse_withOllamaProvider_shouldSelectOllama() {
    let json = r#"{
        "source_language": "en",
        "target_language": "pt",
        "translation": { "provider": "ollama" }
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.translation.provider, TranslationProvider::Ollama);
}

/// Test validation failure for a zero token budget
#[test]
fn test_validate_withZeroBudget_shouldReturnInvalidTokenBudget() {
    let config = Config {
        token_budget: 0,
        ..Config::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidTokenBudget(0))
    ));
}
