/*!
 * Tests for language code resolution
 */

use redraft::language_utils::resolve_language_name;

/// Test ISO 639-1 code resolution
#[test]
fn test_resolveLanguageName_withPart1Codes_shouldReturnNames() {
    assert_eq!(resolve_language_name("en"), "English");
    assert_eq!(resolve_language_name("fr"), "French");
    assert_eq!(resolve_language_name("es"), "Spanish");
    assert_eq!(resolve_language_name("ja"), "Japanese");
}

/// Test ISO 639-3 code resolution
#[test]
fn test_resolveLanguageName_withPart3Codes_shouldReturnNames() {
    assert_eq!(resolve_language_name("eng"), "English");
    assert_eq!(resolve_language_name("deu"), "German");
}

/// Test that full names resolve to themselves
#[test]
fn test_resolveLanguageName_withFullNames_shouldPassThrough() {
    assert_eq!(resolve_language_name("English"), "English");
    assert_eq!(resolve_language_name("French"), "French");
}

/// Test that casing and whitespace are tolerated
#[test]
fn test_resolveLanguageName_withMessyInput_shouldNormalize() {
    assert_eq!(resolve_language_name(" EN "), "English");
    assert_eq!(resolve_language_name("FR"), "French");
}

/// Test that unrecognized input passes through verbatim
#[test]
fn test_resolveLanguageName_withUnknownInput_shouldPassThrough() {
    assert_eq!(resolve_language_name("Klingon"), "Klingon");
    assert_eq!(resolve_language_name("xx"), "xx");
}
