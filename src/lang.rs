use std::fmt;

use clap::ValueEnum;
use serde::Serialize;
use tracing::debug;
use whatlang::{Detector, Lang};

/// Language codes with a dedicated tokenization policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    Ko,
    Ja,
    Zh,
    En,
}

impl LanguageCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ko => "ko",
            Self::Ja => "ja",
            Self::Zh => "zh",
            Self::En => "en",
        }
    }

    pub fn is_cjk(self) -> bool {
        !matches!(self, Self::En)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four feed locales offered to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    #[default]
    Korean,
    Japanese,
    Chinese,
    English,
}

impl Locale {
    /// Feed `hl` parameter.
    pub fn lang(self) -> &'static str {
        match self {
            Self::Korean => "ko",
            Self::Japanese => "ja",
            Self::Chinese => "zh-CN",
            Self::English => "en",
        }
    }

    /// Feed `gl` parameter.
    pub fn region(self) -> &'static str {
        match self {
            Self::Korean => "KR",
            Self::Japanese => "JP",
            Self::Chinese => "CN",
            Self::English => "US",
        }
    }

    pub fn language(self) -> LanguageCode {
        match self {
            Self::Korean => LanguageCode::Ko,
            Self::Japanese => LanguageCode::Ja,
            Self::Chinese => LanguageCode::Zh,
            Self::English => LanguageCode::En,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("no features in text")]
    NoFeatures,

    #[error("unsupported language detected: {0}")]
    Unsupported(String),
}

/// Best-guess language of a snippet.
/// Implemented by `WhatlangDetector` for production; fixed detectors are used in tests.
pub trait LanguageDetector {
    fn detect(&self, text: &str) -> Result<LanguageCode, DetectionError>;
}

/// Detection with the `en` fallback applied on any failure.
pub fn detect_or_default(detector: &impl LanguageDetector, text: &str) -> LanguageCode {
    detector.detect(text).unwrap_or_else(|e| {
        debug!(error = %e, "language detection failed, defaulting to en");
        LanguageCode::En
    })
}

/// Script-and-trigram detector restricted to the supported languages.
pub struct WhatlangDetector {
    inner: Detector,
}

impl WhatlangDetector {
    pub fn new() -> Self {
        Self {
            inner: Detector::with_allowlist(vec![Lang::Kor, Lang::Jpn, Lang::Cmn, Lang::Eng]),
        }
    }
}

impl Default for WhatlangDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Result<LanguageCode, DetectionError> {
        if !text.chars().any(char::is_alphabetic) {
            return Err(DetectionError::NoFeatures);
        }
        let info = self.inner.detect(text).ok_or(DetectionError::NoFeatures)?;
        match info.lang() {
            Lang::Kor => Ok(LanguageCode::Ko),
            Lang::Jpn => Ok(LanguageCode::Ja),
            Lang::Cmn => Ok(LanguageCode::Zh),
            Lang::Eng => Ok(LanguageCode::En),
            other => Err(DetectionError::Unsupported(other.code().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_parameters() {
        assert_eq!((Locale::Korean.lang(), Locale::Korean.region()), ("ko", "KR"));
        assert_eq!((Locale::Japanese.lang(), Locale::Japanese.region()), ("ja", "JP"));
        assert_eq!((Locale::Chinese.lang(), Locale::Chinese.region()), ("zh-CN", "CN"));
        assert_eq!((Locale::English.lang(), Locale::English.region()), ("en", "US"));
    }

    #[test]
    fn detects_hangul() {
        let d = WhatlangDetector::new();
        assert_eq!(d.detect("대통령이 오늘 기자회견을 열었다").unwrap(), LanguageCode::Ko);
    }

    #[test]
    fn detects_kana() {
        let d = WhatlangDetector::new();
        assert_eq!(d.detect("東京で新しいカフェがオープンしました").unwrap(), LanguageCode::Ja);
    }

    #[test]
    fn detects_latin_as_english() {
        let d = WhatlangDetector::new();
        assert_eq!(d.detect("Cats are said to be cute").unwrap(), LanguageCode::En);
    }

    #[test]
    fn empty_text_fails_detection() {
        let d = WhatlangDetector::new();
        assert!(matches!(d.detect(""), Err(DetectionError::NoFeatures)));
        assert!(matches!(d.detect("123 456"), Err(DetectionError::NoFeatures)));
    }

    #[test]
    fn fallback_is_english() {
        let d = WhatlangDetector::new();
        assert_eq!(detect_or_default(&d, "   "), LanguageCode::En);
    }
}
