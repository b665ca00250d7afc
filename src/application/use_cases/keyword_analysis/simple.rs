use std::collections::HashMap;

use super::tokenizer::tokenize;
use crate::domain::analysis_config::AnalyzerConfig;
use crate::domain::keyword::{AnalysisResult, KeywordStat};

/// Exact token counting over every text value.
///
/// Ties in the ranking keep first-encounter order.
pub fn analyze(texts: &[String], config: &AnalyzerConfig) -> AnalysisResult {
    // Insertion-ordered counts: `index` maps a token to its slot in `counts`
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut total_words = 0usize;

    for text in texts {
        for token in tokenize(text) {
            total_words += 1;
            match index.get(&token) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    index.insert(token.clone(), counts.len());
                    counts.push((token, 1));
                }
            }
        }
    }

    if counts.is_empty() {
        return AnalysisResult::empty();
    }
    let unique_words = counts.len();

    // sort_by is stable, so equal counts stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(config.top_k);

    AnalysisResult {
        total_words,
        unique_words,
        top_keywords: counts
            .into_iter()
            .map(|(word, count)| KeywordStat::new(word, count))
            .collect(),
        advanced_stats: None,
    }
}
