use isolang::Language;

/// Language utilities for ISO language code handling
///
/// This module resolves ISO 639-1 (2-letter) and ISO 639-3 (3-letter)
/// language codes to English language names. Prompt text reads better with
/// "English"/"French" than "en"/"fr", and models follow it more reliably.

/// Resolve a language identifier to its English name.
///
/// Accepts ISO 639-1 codes ("en"), ISO 639-3 codes ("eng") and full names
/// ("English"). Inputs that are not recognized pass through verbatim, so
/// uncommon language names still reach the prompt untouched.
pub fn resolve_language_name(input: &str) -> String {
    let trimmed = input.trim();
    let normalized = trimmed.to_lowercase();

    if normalized.len() == 2 {
        if let Some(lang) = Language::from_639_1(&normalized) {
            return lang.to_name().to_string();
        }
    }
    if normalized.len() == 3 {
        if let Some(lang) = Language::from_639_3(&normalized) {
            return lang.to_name().to_string();
        }
    }
    if let Some(lang) = Language::from_name(trimmed) {
        return lang.to_name().to_string();
    }

    trimmed.to_string()
}
