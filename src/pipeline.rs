use std::collections::{BTreeMap, HashMap};

use serde::{Serialize, Serializer};
use tracing::{debug, info};

use crate::feed::{FeedError, FeedFetcher, FeedRequest};
use crate::lang::{LanguageCode, LanguageDetector, detect_or_default};
use crate::tokenize::{TokenizeError, TokenizerSet};

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("{0}")]
    Feed(#[from] FeedError),

    #[error("{0}")]
    Tokenize(#[from] TokenizeError),
}

/// Word counts accumulated over one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn add(&mut self, token: String) {
        *self.counts.entry(token).or_default() += 1;
    }

    pub fn extend(&mut self, tokens: impl IntoIterator<Item = String>) -> usize {
        let mut added = 0;
        for token in tokens {
            self.add(token);
            added += 1;
        }
        added
    }

    #[cfg(test)]
    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    #[cfg(test)]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Entries by descending count, ties broken alphabetically.
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> =
            self.counts.iter().map(|(w, c)| (w.as_str(), *c)).collect();
        entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

#[derive(Serialize)]
struct WordCount<'a> {
    word: &'a str,
    count: usize,
}

impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(
            self.ranked()
                .into_iter()
                .map(|(word, count)| WordCount { word, count }),
        )
    }
}

pub struct PipelineRequest<'a> {
    pub query: &'a str,
    pub site: Option<&'a str>,
    pub lang: &'a str,
    pub region: &'a str,
}

#[derive(Debug, Serialize)]
pub struct PipelineReport {
    pub query: String,
    pub snippets: usize,
    pub total_tokens: usize,
    /// Snippets per detected language.
    pub languages: BTreeMap<LanguageCode, usize>,
    pub frequencies: FrequencyTable,
}

impl PipelineReport {
    /// True when no snippet produced a surviving token: the "no results" case.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

pub async fn run(
    fetcher: &impl FeedFetcher,
    detector: &impl LanguageDetector,
    tokenizers: &TokenizerSet,
    req: &PipelineRequest<'_>,
) -> Result<PipelineReport, PipelineError> {
    let feed_request = FeedRequest {
        query: req.query.to_string(),
        site: req.site.map(str::to_string),
        lang: req.lang.to_string(),
        region: req.region.to_string(),
    };
    let snippets = fetcher.fetch(&feed_request).await?;

    let mut frequencies = FrequencyTable::default();
    let mut languages = BTreeMap::new();
    let mut total_tokens = 0;

    for snippet in &snippets {
        let lang = detect_or_default(detector, snippet);
        *languages.entry(lang).or_insert(0) += 1;

        let added = frequencies.extend(tokenizers.tokenize(snippet, lang)?);
        total_tokens += added;
        debug!(%lang, tokens = added, "snippet tokenized");
    }

    info!(
        snippets = snippets.len(),
        tokens = total_tokens,
        words = frequencies.len(),
        "pipeline complete"
    );

    Ok(PipelineReport {
        query: req.query.to_string(),
        snippets: snippets.len(),
        total_tokens,
        languages,
        frequencies,
    })
}

pub fn format_report(report: &PipelineReport, top: usize) -> String {
    if report.is_empty() {
        return "No words found in the news. Try another query.\n".to_string();
    }

    let mut output = format!(
        "Extracted words from {} news items.\n\n",
        report.snippets
    );

    let ranked = report.frequencies.ranked();
    let width = ranked
        .iter()
        .take(top)
        .map(|(w, _)| w.chars().count())
        .max()
        .unwrap_or(0);
    for (i, (word, count)) in ranked.iter().take(top).enumerate() {
        output.push_str(&format!("{:>3}. {word:<width$}  {count}\n", i + 1));
    }

    if ranked.len() > top {
        output.push_str(&format!("     ... {} more\n", ranked.len() - top));
    }

    output
}
