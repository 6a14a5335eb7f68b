//! Languages accepted by the Google Translate speech endpoint.

use tracing::warn;

/// (code, name) pairs in the casing the endpoint expects.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("am", "Amharic"),
    ("ar", "Arabic"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("bs", "Bosnian"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("cy", "Welsh"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("eu", "Basque"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("fr-CA", "French (Canada)"),
    ("gl", "Galician"),
    ("gu", "Gujarati"),
    ("ha", "Hausa"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("id", "Indonesian"),
    ("is", "Icelandic"),
    ("it", "Italian"),
    ("iw", "Hebrew"),
    ("ja", "Japanese"),
    ("jw", "Javanese"),
    ("km", "Khmer"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("la", "Latin"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("ml", "Malayalam"),
    ("mr", "Marathi"),
    ("ms", "Malay"),
    ("my", "Myanmar (Burmese)"),
    ("ne", "Nepali"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pa", "Punjabi (Gurmukhi)"),
    ("pl", "Polish"),
    ("pt", "Portuguese (Brazil)"),
    ("pt-PT", "Portuguese (Portugal)"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("si", "Sinhala"),
    ("sk", "Slovak"),
    ("sq", "Albanian"),
    ("sr", "Serbian"),
    ("su", "Sundanese"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tl", "Filipino"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("vi", "Vietnamese"),
    ("yue", "Cantonese"),
    ("zh", "Chinese (Mandarin)"),
    ("zh-CN", "Chinese (Simplified)"),
    ("zh-TW", "Chinese (Mandarin/Taiwan)"),
];

/// Resolve a user-supplied language code to the canonical code the endpoint expects.
///
/// Matching is case-insensitive and `_` is read as `-`, so `pt_BR` is
/// `pt-BR`. Regional English, Spanish, French and Portuguese variants that the
/// endpoint no longer distinguishes fall back to their base language with a
/// warning. Returns `None` for anything else.
pub fn resolve_language(code: &str) -> Option<&'static str> {
    let code = code.trim().replace('_', "-");
    if code.is_empty() {
        return None;
    }

    if let Some((canonical, _)) = SUPPORTED_LANGUAGES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(&code))
    {
        return Some(canonical);
    }

    let lower = code.to_ascii_lowercase();
    let fallback = match lower.split_once('-') {
        Some(("en", _)) => Some("en"),
        Some(("es", _)) => Some("es"),
        Some(("fr", _)) => Some("fr"),
        Some(("pt", "br")) => Some("pt"),
        _ => None,
    };

    if let Some(base) = fallback {
        warn!(
            requested = %code,
            using = %base,
            "Regional language variant is not distinguished upstream, falling back to base language"
        );
    }
    fallback
}

/// Human-readable name of a supported language code.
pub fn language_name(code: &str) -> Option<&'static str> {
    let canonical = resolve_language(code)?;
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(known, _)| *known == canonical)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_exact_and_case_insensitive() {
        assert_eq!(resolve_language("en"), Some("en"));
        assert_eq!(resolve_language("EN"), Some("en"));
        assert_eq!(resolve_language("zh-cn"), Some("zh-CN"));
        assert_eq!(resolve_language("pt-pt"), Some("pt-PT"));
    }

    #[test]
    fn test_resolve_regional_fallback() {
        assert_eq!(resolve_language("en-US"), Some("en"));
        assert_eq!(resolve_language("en-gb"), Some("en"));
        assert_eq!(resolve_language("es-MX"), Some("es"));
        assert_eq!(resolve_language("pt-BR"), Some("pt"));
        // fr-CA is a real variant, not a fallback
        assert_eq!(resolve_language("fr-ca"), Some("fr-CA"));
    }

    #[test]
    fn test_resolve_underscore_separator() {
        assert_eq!(resolve_language("pt_BR"), Some("pt"));
        assert_eq!(resolve_language("zh_CN"), Some("zh-CN"));
        assert_eq!(resolve_language("en_us"), Some("en"));
        assert_eq!(language_name("zh_tw"), Some("Chinese (Mandarin/Taiwan)"));
    }

    #[test]
    fn test_resolve_unsupported() {
        assert_eq!(resolve_language(""), None);
        assert_eq!(resolve_language("xx"), None);
        assert_eq!(resolve_language("klingon"), None);
        assert_eq!(resolve_language("de-AT"), None);
    }

    #[test]
    fn test_language_name() {
        assert_eq!(language_name("en"), Some("English"));
        assert_eq!(language_name("ZH-tw"), Some("Chinese (Mandarin/Taiwan)"));
        assert_eq!(language_name("xx"), None);
    }
}
