//! Reconciliation of detections with the anonymizer's output.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use redacta_core::models::anonymize::AppliedItem;
use redacta_core::models::mapping::{MappingEntry, MappingKey};
use redacta_core::models::span::Span;
use redacta_core::placeholders::placeholder_for;
use redacta_core::transforms::TransformConfig;
use tracing::debug;

use crate::normalize::normalize_spans;
use crate::policy::MappingPolicy;
use crate::table::MappingTable;

/// Resolve the placeholder used for each category the anonymizer touched.
///
/// The first item of a category decides. An item's own literal wins, then
/// the configured replacement value, then the static placeholder table
/// (which synthesizes `[CATEGORY]` for unknown categories).
pub fn resolve_placeholders(
    items: &[AppliedItem],
    transforms: &TransformConfig,
) -> BTreeMap<String, String> {
    let mut placeholders = BTreeMap::new();
    for item in items {
        if placeholders.contains_key(&item.category) {
            continue;
        }
        let placeholder = item
            .literal()
            .or_else(|| transforms.literal_for(&item.category))
            .map(str::to_string)
            .unwrap_or_else(|| placeholder_for(&item.category));
        placeholders.insert(item.category.clone(), placeholder);
    }
    placeholders
}

/// Build the mapping table from already-normalized spans.
///
/// Spans of a category the anonymizer reported nothing for are skipped.
/// An empty `items` slice yields an empty table.
pub fn reconcile(
    text: &str,
    spans: &[Span],
    items: &[AppliedItem],
    transforms: &TransformConfig,
    policy: &MappingPolicy,
) -> MappingTable {
    let mut table = MappingTable::new();
    if items.is_empty() {
        return table;
    }

    let placeholders = resolve_placeholders(items, transforms);

    for span in spans {
        let Some(placeholder) = placeholders.get(&span.category) else {
            debug!(category = %span.category, "no applied item for category, skipping span");
            continue;
        };

        let entry = MappingEntry {
            original_value: span.slice(text).to_string(),
            anonymized_value: placeholder.clone(),
            category: span.category.clone(),
            start: span.start,
            end: span.end,
        };

        if policy.excludes(&entry) {
            debug!(
                category = %entry.category,
                start = entry.start,
                end = entry.end,
                "entry below minimum length, excluded"
            );
            continue;
        }

        table.insert(MappingKey::from(&entry), entry);
    }

    reduce_best_matches(&mut table, policy);
    table
}

/// Normalize raw detections, then reconcile them.
pub fn build_mapping(
    text: &str,
    detections: &[Span],
    items: &[AppliedItem],
    transforms: &TransformConfig,
    policy: &MappingPolicy,
) -> MappingTable {
    let normalized = normalize_spans(detections);
    reconcile(text, &normalized, items, transforms, policy)
}

/// Collapse each reducible category holding more than one entry down to
/// its preferred entry, re-keyed as [`MappingKey::Best`].
///
/// Ties left by the preference go to the earliest span, so the outcome
/// never depends on insertion order.
pub fn reduce_best_matches(table: &mut MappingTable, policy: &MappingPolicy) {
    for (category, preference) in policy.reductions() {
        let candidates = table.entries_for(category);
        if candidates.len() <= 1 {
            continue;
        }

        let ranked = |a: &MappingEntry, b: &MappingEntry| -> Ordering {
            preference(a, b)
                .then_with(|| b.start.cmp(&a.start))
                .then_with(|| b.end.cmp(&a.end))
        };

        let Some(winner) = candidates
            .iter()
            .map(|(_, entry)| entry)
            .max_by(|a, b| ranked(*a, *b))
            .cloned()
        else {
            continue;
        };

        for (key, _) in &candidates {
            table.remove(key);
        }

        debug!(
            category,
            candidates = candidates.len(),
            start = winner.start,
            end = winner.end,
            "collapsed category to best match"
        );

        table.insert(MappingKey::best(category), winner);
    }
}
