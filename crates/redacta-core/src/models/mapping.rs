use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One confirmed pairing between an original substring and the
/// placeholder that replaced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MappingEntry {
    pub original_value: String,
    pub anonymized_value: String,
    pub category: String,
    pub start: usize,
    pub end: usize,
}

impl MappingEntry {
    /// Length of the original value in characters.
    pub fn original_len(&self) -> usize {
        self.original_value.chars().count()
    }
}

/// Identity of an entry in the mapping table.
///
/// Entries start out keyed by position. Categories collapsed to a single
/// representative are re-keyed as `Best` so they can't collide with a
/// positional key later.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MappingKey {
    Positional {
        category: String,
        start: usize,
        end: usize,
    },
    Best {
        category: String,
    },
}

impl MappingKey {
    pub fn positional(category: impl Into<String>, start: usize, end: usize) -> Self {
        MappingKey::Positional {
            category: category.into(),
            start,
            end,
        }
    }

    pub fn best(category: impl Into<String>) -> Self {
        MappingKey::Best {
            category: category.into(),
        }
    }

    pub fn category(&self) -> &str {
        match self {
            MappingKey::Positional { category, .. } | MappingKey::Best { category } => category,
        }
    }
}

impl From<&MappingEntry> for MappingKey {
    fn from(entry: &MappingEntry) -> Self {
        MappingKey::positional(entry.category.clone(), entry.start, entry.end)
    }
}
