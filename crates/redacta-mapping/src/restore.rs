//! Inverse substitution: placeholders back to original values.

use redacta_core::models::mapping::MappingEntry;

/// Replace every occurrence of each entry's placeholder with its original
/// value.
///
/// Longer placeholders go first so that one which contains another (say
/// `[PERSONAL]` and `[PERSON]`) is not broken apart. Matching is plain
/// substring matching; a placeholder that was already in the text before
/// anonymization is replaced too.
pub fn restore<'a, I>(text: &str, entries: I) -> String
where
    I: IntoIterator<Item = &'a MappingEntry>,
{
    let mut ordered: Vec<&MappingEntry> = entries
        .into_iter()
        .filter(|e| !e.anonymized_value.is_empty())
        .collect();

    if ordered.is_empty() {
        return text.to_string();
    }

    ordered.sort_by(|a, b| {
        b.anonymized_value
            .chars()
            .count()
            .cmp(&a.anonymized_value.chars().count())
    });

    ordered.iter().fold(text.to_string(), |acc, entry| {
        acc.replace(&entry.anonymized_value, &entry.original_value)
    })
}
