use unicode_segmentation::UnicodeSegmentation;

use super::Tokens;
use crate::lang::LanguageCode;
use crate::tokenize::stopwords::is_stopword;

/// Unicode word boundaries, alphabetic words only. Stopwords are matched
/// case-insensitively.
pub(super) fn tokenize(text: &str) -> Tokens<'_> {
    Box::new(
        text.unicode_words()
            .filter(|w| w.chars().all(char::is_alphabetic))
            .filter(|w| !is_stopword(LanguageCode::En, &w.to_lowercase()))
            .map(str::to_string),
    )
}
