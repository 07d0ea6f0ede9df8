//! Detection result normalization.
//!
//! The analyzer routinely reports the same position more than once (one
//! hit per recognizer). Normalization keeps one span per
//! `(category, start, end)`, choosing the best-ranked candidate.

use std::collections::{BTreeMap, HashSet};

use redacta_core::models::span::Span;
use tracing::debug;

/// Collapse duplicate detections.
///
/// Spans are grouped by category and ranked by width (widest first), then
/// by score (highest first). The first span seen for a given position
/// wins. Overlapping spans at different positions are all kept.
pub fn normalize_spans(spans: &[Span]) -> Vec<Span> {
    let mut groups: BTreeMap<&str, Vec<&Span>> = BTreeMap::new();
    for span in spans {
        groups.entry(span.category.as_str()).or_default().push(span);
    }

    let mut seen: HashSet<(&str, usize, usize)> = HashSet::new();
    let mut normalized = Vec::with_capacity(spans.len());

    for (category, mut candidates) in groups {
        candidates.sort_by(|a, b| {
            b.len()
                .cmp(&a.len())
                .then_with(|| b.score.total_cmp(&a.score))
        });

        for span in candidates {
            if seen.insert((category, span.start, span.end)) {
                normalized.push(span.clone());
            }
        }
    }

    debug!(
        detected = spans.len(),
        kept = normalized.len(),
        "normalized detections"
    );

    normalized
}
