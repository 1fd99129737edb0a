//! Locale probe order for speech recognition

/// Locales probed in order until one matches
///
/// Order is meaningful: the loop stops at the first match, so the
/// regional Indian locales our users overwhelmingly speak come before
/// the global ones. Keep additions at the end unless measured traffic
/// says otherwise.
pub const DEFAULT_LOCALES: &[&str] = &[
    "hi-IN",
    "en-IN",
    "bn-IN",
    "ta-IN",
    "te-IN",
    "mr-IN",
    "gu-IN",
    "kn-IN",
    "ml-IN",
    "pa-IN",
    "ur-IN",
    "or-IN",
    "as-IN",
    "en-US",
    "en-GB",
    "es-ES",
    "fr-FR",
    "de-DE",
    "it-IT",
    "pt-BR",
    "ru-RU",
    "ja-JP",
    "ko-KR",
    "zh-CN",
    "ar-SA",
];

/// Language portion of a BCP 47 locale ("hi-IN" -> "hi")
pub fn primary_subtag(locale: &str) -> &str {
    match locale.find(['-', '_']) {
        Some(idx) => &locale[..idx],
        None => locale,
    }
}
