use jieba_rs::Jieba;

use super::Tokens;
use crate::lang::LanguageCode;
use crate::tokenize::stopwords::is_stopword;

/// jieba segmentation with HMM for unknown words. Single characters are
/// treated as noise.
pub(super) struct ChineseTokenizer {
    jieba: Jieba,
}

impl ChineseTokenizer {
    pub fn new() -> Self {
        Self {
            jieba: Jieba::new(),
        }
    }

    pub fn tokenize<'a>(&'a self, text: &'a str) -> Tokens<'a> {
        Box::new(
            self.jieba
                .cut(text, true)
                .into_iter()
                .filter(|w| w.chars().count() > 1)
                .filter(|w| !is_stopword(LanguageCode::Zh, w))
                .map(str::to_string),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_single_character_tokens() {
        let tokenizer = ChineseTokenizer::new();
        let tokens: Vec<String> = tokenizer.tokenize("我们在北京的大学学习中文").collect();
        assert!(!tokens.is_empty());
        assert!(tokens.iter().all(|t| t.chars().count() > 1), "got: {tokens:?}");
    }

    #[test]
    fn drops_multi_character_stopwords() {
        let tokenizer = ChineseTokenizer::new();
        let tokens: Vec<String> = tokenizer.tokenize("一个经济问题").collect();
        assert!(!tokens.iter().any(|t| t == "一个"), "got: {tokens:?}");
    }

    #[test]
    fn segments_known_words() {
        let tokenizer = ChineseTokenizer::new();
        let tokens: Vec<String> = tokenizer.tokenize("北京大学").collect();
        assert!(tokens.iter().any(|t| t == "北京大学"), "got: {tokens:?}");
    }
}
