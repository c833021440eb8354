use clap::ValueEnum;

use super::script::{is_hangul_syllable, runs};
use super::{TokenizeError, Tokens};
use crate::lang::LanguageCode;
use crate::tokenize::stopwords::is_stopword;

/// Strategy for splitting Korean text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum KoreanBackend {
    /// Runs of Hangul syllables. Particles stay fused to their stems.
    #[default]
    Syllable,
    /// ko-dic morphological analysis keeping nouns and adjectives.
    Morphological,
}

pub(super) enum KoreanTokenizer {
    Syllable,
    #[cfg(feature = "korean-morph")]
    Morphological(super::morph::Analyzer),
}

impl KoreanTokenizer {
    pub fn new(backend: KoreanBackend) -> Result<Self, TokenizeError> {
        match backend {
            KoreanBackend::Syllable => Ok(Self::Syllable),
            #[cfg(feature = "korean-morph")]
            KoreanBackend::Morphological => Ok(Self::Morphological(super::morph::Analyzer::new(
                lindera::DictionaryKind::KoDic,
            )?)),
            #[cfg(not(feature = "korean-morph"))]
            KoreanBackend::Morphological => Err(TokenizeError::BackendUnavailable {
                backend: "morphological Korean",
                feature: "korean-morph",
            }),
        }
    }

    pub fn tokenize<'a>(&'a self, text: &'a str) -> Result<Tokens<'a>, TokenizeError> {
        match self {
            Self::Syllable => Ok(Box::new(
                runs(text, is_hangul_syllable)
                    .filter(|w| !is_stopword(LanguageCode::Ko, w))
                    .map(str::to_string),
            )),
            #[cfg(feature = "korean-morph")]
            Self::Morphological(analyzer) => {
                let kept = analyzer
                    .analyze(text)?
                    .into_iter()
                    .filter(|m| is_korean_content_pos(&m.pos))
                    .map(|m| m.surface)
                    .filter(|w| !is_stopword(LanguageCode::Ko, w));
                Ok(Box::new(kept))
            }
        }
    }
}

/// ko-dic nouns (`NN*`) and adjectives (`VA`).
#[cfg_attr(not(feature = "korean-morph"), allow(dead_code))]
fn is_korean_content_pos(pos: &str) -> bool {
    pos.starts_with("NN") || pos.starts_with("VA")
}
