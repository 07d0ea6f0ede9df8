use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A detected occurrence of a sensitive entity.
///
/// Offsets are character offsets into the analyzed text, half-open:
/// `[start, end)`. Callers are expected to uphold `start < end <= len`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Span {
    #[serde(alias = "entity_type")]
    pub category: String,
    pub start: usize,
    pub end: usize,
    pub score: f64,
}

impl Span {
    pub fn new(category: impl Into<String>, start: usize, end: usize, score: f64) -> Self {
        Self {
            category: category.into(),
            start,
            end,
            score,
        }
    }

    /// Width of the span in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slice the covered text out of `text`.
    ///
    /// Clamps at the end of `text` instead of panicking on a span that runs
    /// past it.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        let byte_at = |char_idx: usize| {
            text.char_indices()
                .nth(char_idx)
                .map(|(i, _)| i)
                .unwrap_or(text.len())
        };
        let start = byte_at(self.start);
        let end = byte_at(self.end).max(start);
        &text[start..end]
    }
}
