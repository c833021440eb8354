use lindera::{DictionaryConfig, DictionaryKind, Mode, Tokenizer, TokenizerConfig};

use super::TokenizeError;

/// A surface form and its top-level part-of-speech tag.
pub(super) struct Morpheme {
    pub surface: String,
    pub pos: String,
}

/// Dictionary-backed morphological analyzer. Loading the dictionary is
/// expensive, so one instance is built per process.
pub(super) struct Analyzer {
    inner: Tokenizer,
}

impl Analyzer {
    pub fn new(kind: DictionaryKind) -> Result<Self, TokenizeError> {
        let config = TokenizerConfig {
            dictionary: DictionaryConfig {
                kind: Some(kind),
                path: None,
            },
            user_dictionary: None,
            mode: Mode::Normal,
        };
        let inner =
            Tokenizer::from_config(config).map_err(|e| TokenizeError::Analyzer(e.to_string()))?;
        Ok(Self { inner })
    }

    pub fn analyze(&self, text: &str) -> Result<Vec<Morpheme>, TokenizeError> {
        let mut tokens = self
            .inner
            .tokenize(text)
            .map_err(|e| TokenizeError::Analyzer(e.to_string()))?;

        Ok(tokens
            .iter_mut()
            .map(|token| {
                let pos = token
                    .get_details()
                    .and_then(|details| details.first().map(|p| p.to_string()))
                    .unwrap_or_default();
                Morpheme {
                    surface: token.text.to_string(),
                    pos,
                }
            })
            .collect())
    }
}
