//! Workload description for capacity estimates

use serde::{Deserialize, Serialize};

/// Nominal article length in words.
pub const DEFAULT_WORDS_PER_ITEM: f64 = 2500.0;

/// Tokenizer expansion factor (tokens per word).
pub const DEFAULT_TOKENS_PER_WORD: f64 = 1.88;

/// A recurring batch-inference workload: `partitions` independent feeds, each
/// producing `items_per_partition` articles per scheduling window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadSpec {
    /// Independent workload partitions (e.g. regional newsfeeds)
    pub partitions: u32,

    /// Articles produced per partition per window
    pub items_per_partition: u32,

    /// Nominal article size in words
    pub words_per_item: f64,

    /// Tokens produced per word by the tokenizer
    pub tokens_per_word: f64,
}

impl Default for WorkloadSpec {
    fn default() -> Self {
        Self {
            partitions: 7,
            items_per_partition: 150,
            words_per_item: DEFAULT_WORDS_PER_ITEM,
            tokens_per_word: DEFAULT_TOKENS_PER_WORD,
        }
    }
}

impl WorkloadSpec {
    /// Create a workload with the default article size and tokenizer factor.
    pub fn new(partitions: u32, items_per_partition: u32) -> Self {
        Self {
            partitions,
            items_per_partition,
            ..Default::default()
        }
    }

    /// Builder method to set the article size in words
    pub fn with_words_per_item(mut self, words: f64) -> Self {
        self.words_per_item = words;
        self
    }

    /// Builder method to set the tokenizer expansion factor
    pub fn with_tokens_per_word(mut self, factor: f64) -> Self {
        self.tokens_per_word = factor;
        self
    }

    /// Total token volume for one scheduling window.
    pub fn total_tokens(&self) -> f64 {
        self.partitions as f64
            * self.items_per_partition as f64
            * self.words_per_item
            * self.tokens_per_word
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_workload() {
        let workload = WorkloadSpec::default();
        assert_eq!(workload.partitions, 7);
        assert_eq!(workload.items_per_partition, 150);
        assert_eq!(workload.words_per_item, 2500.0);
    }

    #[test]
    fn test_total_tokens() {
        let workload = WorkloadSpec::new(1, 1);
        assert_eq!(workload.total_tokens(), 2500.0 * 1.88);

        let workload = WorkloadSpec::new(7, 150);
        assert_eq!(workload.total_tokens(), 7.0 * 150.0 * 2500.0 * 1.88);
    }

    #[test]
    fn test_builder() {
        let workload = WorkloadSpec::new(3, 40)
            .with_words_per_item(800.0)
            .with_tokens_per_word(1.3);
        assert_eq!(workload.total_tokens(), 3.0 * 40.0 * 800.0 * 1.3);
    }
}
