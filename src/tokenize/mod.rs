//! Language-keyed tokenization: per-language word extraction, stopword
//! filtering, and normalization.

mod chinese;
mod english;
mod japanese;
mod korean;
#[cfg(any(feature = "japanese", feature = "korean-morph"))]
mod morph;
mod script;
pub mod stopwords;

pub use korean::KoreanBackend;

use chinese::ChineseTokenizer;
use japanese::JapaneseTokenizer;
use korean::KoreanTokenizer;

use crate::lang::LanguageCode;

/// Lazily produced tokens for one snippet.
pub type Tokens<'a> = Box<dyn Iterator<Item = String> + 'a>;

#[derive(Debug, thiserror::Error)]
pub enum TokenizeError {
    #[error("morphological analyzer failed: {0}")]
    Analyzer(String),

    #[cfg_attr(feature = "korean-morph", allow(dead_code))]
    #[error("{backend} tokenizer unavailable: rebuild with the `{feature}` feature")]
    BackendUnavailable {
        backend: &'static str,
        feature: &'static str,
    },
}

/// Tokenization policy selected for a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tokenizer {
    Korean,
    Japanese,
    Chinese,
    English,
}

impl Tokenizer {
    pub fn for_language(lang: LanguageCode) -> Self {
        match lang {
            LanguageCode::Ko => Self::Korean,
            LanguageCode::Ja => Self::Japanese,
            LanguageCode::Zh => Self::Chinese,
            LanguageCode::En => Self::English,
        }
    }
}

/// Owns the per-language backends. Dictionaries are loaded once at
/// construction and shared by every call.
pub struct TokenizerSet {
    korean: KoreanTokenizer,
    japanese: JapaneseTokenizer,
    chinese: ChineseTokenizer,
}

impl TokenizerSet {
    pub fn new(korean_backend: KoreanBackend) -> Result<Self, TokenizeError> {
        Ok(Self {
            korean: KoreanTokenizer::new(korean_backend)?,
            japanese: JapaneseTokenizer::new()?,
            chinese: ChineseTokenizer::new(),
        })
    }

    /// Normalized tokens of `text` under the policy for `lang`:
    /// stopwords removed, lowercased, trimmed, empty tokens dropped.
    pub fn tokenize<'a>(
        &'a self,
        text: &'a str,
        lang: LanguageCode,
    ) -> Result<Tokens<'a>, TokenizeError> {
        let raw = match Tokenizer::for_language(lang) {
            Tokenizer::Korean => self.korean.tokenize(text)?,
            Tokenizer::Japanese => self.japanese.tokenize(text)?,
            Tokenizer::Chinese => self.chinese.tokenize(text),
            Tokenizer::English => english::tokenize(text),
        };
        Ok(Box::new(raw.filter_map(normalize)))
    }
}

fn normalize(token: String) -> Option<String> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
