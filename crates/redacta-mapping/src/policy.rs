//! Per-category exclusion and single-occurrence rules.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use redacta_core::models::mapping::MappingEntry;
use redacta_core::placeholders::{PERSON, PHONE_NUMBER};

/// Orders two candidates of the same category; the greater one is kept.
pub type Preference = Arc<dyn Fn(&MappingEntry, &MappingEntry) -> Ordering + Send + Sync>;

/// Prefer entries whose original text contains `marker`, then longer ones.
pub fn prefer_containing(marker: char) -> Preference {
    Arc::new(move |a: &MappingEntry, b: &MappingEntry| {
        a.original_value
            .contains(marker)
            .cmp(&b.original_value.contains(marker))
            .then_with(|| a.original_len().cmp(&b.original_len()))
    })
}

/// Prefer entries whose original text starts with `prefix` (ignoring
/// leading whitespace), then longer ones.
pub fn prefer_prefixed(prefix: char) -> Preference {
    Arc::new(move |a: &MappingEntry, b: &MappingEntry| {
        let leads = |e: &MappingEntry| e.original_value.trim_start().starts_with(prefix);
        leads(a)
            .cmp(&leads(b))
            .then_with(|| a.original_len().cmp(&b.original_len()))
    })
}

/// Prefer the longer original text.
pub fn prefer_longest() -> Preference {
    Arc::new(|a: &MappingEntry, b: &MappingEntry| a.original_len().cmp(&b.original_len()))
}

/// Which entries get dropped, and which categories collapse to one entry.
///
/// The default is the reference policy: PERSON values shorter than three
/// characters are dropped; PERSON collapses preferring a full name (has a
/// space); PHONE_NUMBER collapses preferring an international number (leading
/// `+`).
#[derive(Clone)]
pub struct MappingPolicy {
    min_lengths: BTreeMap<String, usize>,
    reductions: BTreeMap<String, Preference>,
}

impl Default for MappingPolicy {
    fn default() -> Self {
        Self::empty()
            .with_min_length(PERSON, 3)
            .with_reduction(PERSON, prefer_containing(' '))
            .with_reduction(PHONE_NUMBER, prefer_prefixed('+'))
    }
}

impl fmt::Debug for MappingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappingPolicy")
            .field("min_lengths", &self.min_lengths)
            .field("reductions", &self.reductions.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl MappingPolicy {
    /// A policy that keeps everything and collapses nothing.
    pub fn empty() -> Self {
        Self {
            min_lengths: BTreeMap::new(),
            reductions: BTreeMap::new(),
        }
    }

    pub fn with_min_length(mut self, category: impl Into<String>, min_chars: usize) -> Self {
        self.min_lengths.insert(category.into(), min_chars);
        self
    }

    pub fn with_reduction(mut self, category: impl Into<String>, preference: Preference) -> Self {
        self.reductions.insert(category.into(), preference);
        self
    }

    /// Whether `entry` falls under its category's minimum length.
    pub fn excludes(&self, entry: &MappingEntry) -> bool {
        self.min_lengths
            .get(&entry.category)
            .is_some_and(|min| entry.original_len() < *min)
    }

    pub fn preference(&self, category: &str) -> Option<&Preference> {
        self.reductions.get(category)
    }

    /// Categories that collapse to a single entry, with their preference.
    pub fn reductions(&self) -> impl Iterator<Item = (&str, &Preference)> {
        self.reductions.iter().map(|(c, p)| (c.as_str(), p))
    }
}
