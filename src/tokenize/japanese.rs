use super::{TokenizeError, Tokens};
use crate::lang::LanguageCode;
use crate::tokenize::stopwords::is_stopword;

const NOUN: &str = "名詞";
const ADJECTIVE: &str = "形容詞";

/// IPADIC morphological analysis keeping nouns and adjectives.
#[cfg(feature = "japanese")]
pub(super) struct JapaneseTokenizer {
    analyzer: super::morph::Analyzer,
}

#[cfg(feature = "japanese")]
impl JapaneseTokenizer {
    pub fn new() -> Result<Self, TokenizeError> {
        let analyzer = super::morph::Analyzer::new(lindera::DictionaryKind::IPADIC)?;
        Ok(Self { analyzer })
    }

    pub fn tokenize<'a>(&'a self, text: &'a str) -> Result<Tokens<'a>, TokenizeError> {
        let kept = self
            .analyzer
            .analyze(text)?
            .into_iter()
            .filter(|m| is_content_pos(&m.pos))
            .map(|m| m.surface)
            .filter(|w| !is_stopword(LanguageCode::Ja, w));
        Ok(Box::new(kept))
    }
}

/// Without a dictionary, approximates content words as runs of Katakana
/// and ideographs.
#[cfg(not(feature = "japanese"))]
pub(super) struct JapaneseTokenizer;

#[cfg(not(feature = "japanese"))]
impl JapaneseTokenizer {
    pub fn new() -> Result<Self, TokenizeError> {
        tracing::warn!("built without the `japanese` feature, using script-run Japanese tokenizer");
        Ok(Self)
    }

    pub fn tokenize<'a>(&'a self, text: &'a str) -> Result<Tokens<'a>, TokenizeError> {
        use super::script::{is_ideograph, is_katakana, runs};

        Ok(Box::new(
            runs(text, |c| is_katakana(c) || is_ideograph(c))
                .filter(|w| !is_stopword(LanguageCode::Ja, w))
                .map(str::to_string),
        ))
    }
}

#[cfg_attr(not(feature = "japanese"), allow(dead_code))]
fn is_content_pos(pos: &str) -> bool {
    pos.starts_with(NOUN) || pos.starts_with(ADJECTIVE)
}
