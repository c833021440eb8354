use std::collections::HashSet;
use std::sync::LazyLock;

use crate::lang::LanguageCode;

type Stopwords = LazyLock<HashSet<&'static str>>;

static KOREAN: Stopwords = LazyLock::new(|| {
    HashSet::from([
        "것", "수", "등", "들", "및", "에서", "하다", "까지", "부터", "그리고", "그러나", "때문",
        "이것", "저것", "그것",
    ])
});

static JAPANESE: Stopwords = LazyLock::new(|| {
    HashSet::from([
        "こと", "これ", "それ", "ため", "よう", "もの", "さん", "して", "いる", "ある", "なる",
        "また", "そして", "しかし",
    ])
});

static CHINESE: Stopwords = LazyLock::new(|| {
    HashSet::from([
        "的", "了", "在", "是", "我", "有", "和", "就", "不", "人", "都", "一个", "上", "也", "很",
        "到", "说", "要", "去", "你",
    ])
});

// Standard English list plus headline filler words ("said", "one", "like", "also").
static ENGLISH: Stopwords = LazyLock::new(|| {
    HashSet::from([
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
        "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
        "herself", "it", "its", "itself", "they", "them", "their", "theirs", "themselves",
        "what", "which", "who", "whom", "this", "that", "these", "those", "am", "is", "are",
        "was", "were", "be", "been", "being", "have", "has", "had", "having", "do", "does",
        "did", "doing", "a", "an", "the", "and", "but", "if", "or", "because", "as", "until",
        "while", "of", "at", "by", "for", "with", "about", "against", "between", "into",
        "through", "during", "before", "after", "above", "below", "to", "from", "up", "down",
        "in", "out", "on", "off", "over", "under", "again", "further", "then", "once", "here",
        "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
        "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so",
        "than", "too", "very", "s", "t", "can", "will", "just", "don", "should", "now",
        "said", "one", "like", "also",
    ])
});

/// The stopword set for a language. Sets are built once, on first use.
pub fn for_language(lang: LanguageCode) -> &'static HashSet<&'static str> {
    match lang {
        LanguageCode::Ko => &*KOREAN,
        LanguageCode::Ja => &*JAPANESE,
        LanguageCode::Zh => &*CHINESE,
        LanguageCode::En => &*ENGLISH,
    }
}

pub fn is_stopword(lang: LanguageCode, word: &str) -> bool {
    for_language(lang).contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_includes_custom_additions() {
        for word in ["said", "one", "like", "also", "the"] {
            assert!(is_stopword(LanguageCode::En, word), "{word}");
        }
        assert!(!is_stopword(LanguageCode::En, "cats"));
    }

    #[test]
    fn english_lookup_is_exact_case() {
        assert!(!is_stopword(LanguageCode::En, "The"));
    }

    #[test]
    fn each_language_has_its_own_set() {
        assert!(is_stopword(LanguageCode::Ko, "그리고"));
        assert!(is_stopword(LanguageCode::Ja, "こと"));
        assert!(is_stopword(LanguageCode::Zh, "一个"));
        assert!(!is_stopword(LanguageCode::En, "그리고"));
    }

    #[test]
    fn sets_are_shared() {
        let a = for_language(LanguageCode::Zh) as *const _;
        let b = for_language(LanguageCode::Zh) as *const _;
        assert_eq!(a, b);
    }
}
