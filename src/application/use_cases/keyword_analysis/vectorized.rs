use std::collections::HashMap;

use super::tokenizer::{tokenize, whitespace_word_count};
use crate::domain::analysis_config::AnalyzerConfig;
use crate::domain::error::AnalysisError;
use crate::domain::keyword::{AdvancedStats, AnalysisResult, KeywordStat};

/// Bag-of-words vocabulary limited to the most frequent tokens.
///
/// Entries are ordered by corpus count descending, then by token text, which
/// is also the reporting order for keywords.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    entries: Vec<(String, usize)>,
}

impl Vocabulary {
    /// Count every token across `texts` and keep the `max_features` best.
    pub fn fit(texts: &[String], max_features: usize) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for text in texts {
            for token in tokenize(text) {
                *counts.entry(token).or_insert(0) += 1;
            }
        }

        let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(max_features);

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of the counts of vocabulary tokens only.
    pub fn total_count(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }
}

/// Capped-vocabulary counting plus per-entry word statistics.
///
/// `total_words` and `unique_words` describe the vocabulary, so tokens beyond
/// `max_features` are not part of them.
pub fn analyze(texts: &[String], config: &AnalyzerConfig) -> Result<AnalysisResult, AnalysisError> {
    if texts.is_empty() {
        return Err(AnalysisError::EmptyTextSequence);
    }

    let vocabulary = Vocabulary::fit(texts, config.max_features);
    if vocabulary.is_empty() {
        return Err(AnalysisError::EmptyVocabulary);
    }

    let total_words = vocabulary.total_count();
    let top_keywords = vocabulary
        .entries()
        .iter()
        .take(config.top_k)
        .map(|(word, count)| {
            KeywordStat::new(word.clone(), *count)
                .with_frequency(*count as f64 / total_words as f64)
        })
        .collect();

    Ok(AnalysisResult {
        total_words,
        unique_words: vocabulary.len(),
        top_keywords,
        advanced_stats: Some(entry_stats(texts)),
    })
}

/// Caller guarantees `texts` is non-empty.
fn entry_stats(texts: &[String]) -> AdvancedStats {
    let lengths: Vec<usize> = texts.iter().map(|t| whitespace_word_count(t)).collect();
    let sum: usize = lengths.iter().sum();

    AdvancedStats {
        average_words_per_entry: sum as f64 / lengths.len() as f64,
        longest_entry_words: lengths.iter().copied().max().unwrap_or(0),
    }
}
