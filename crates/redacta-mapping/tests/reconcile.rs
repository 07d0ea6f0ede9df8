use std::cmp::Ordering;

use redacta_core::models::anonymize::AppliedItem;
use redacta_core::models::mapping::{MappingEntry, MappingKey};
use redacta_core::models::span::Span;
use redacta_core::transforms::{Transform, TransformConfig};
use redacta_mapping::policy::{prefer_longest, prefer_prefixed};
use redacta_mapping::{build_mapping, reconcile, resolve_placeholders, MappingPolicy};

const PHONES: &str = "Call 555-1234 or +1 555-123-4567 now";

fn phone_items() -> Vec<AppliedItem> {
    vec![AppliedItem::new("PHONE_NUMBER", "[PHONE]")]
}

#[test]
fn phone_reduction_prefers_international_number() {
    let local = Span::new("PHONE_NUMBER", 5, 13, 0.7);
    let intl = Span::new("PHONE_NUMBER", 17, 32, 0.7);

    for spans in [vec![local.clone(), intl.clone()], vec![intl, local]] {
        let table = reconcile(
            PHONES,
            &spans,
            &phone_items(),
            &TransformConfig::default(),
            &MappingPolicy::default(),
        );

        assert_eq!(table.len(), 1);
        let best = table.get(&MappingKey::best("PHONE_NUMBER")).unwrap();
        assert_eq!(best.original_value, "+1 555-123-4567");
        assert_eq!(best.anonymized_value, "[PHONE]");
        assert_eq!((best.start, best.end), (17, 32));
    }
}

#[test]
fn person_reduction_prefers_full_name() {
    let text = "John Doe met Doe";
    let spans = vec![
        Span::new("PERSON", 13, 16, 0.9),
        Span::new("PERSON", 0, 8, 0.6),
    ];

    let table = build_mapping(
        text,
        &spans,
        &[AppliedItem::new("PERSON", "[PERSON]")],
        &TransformConfig::default(),
        &MappingPolicy::default(),
    );

    let entries = table.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].original_value, "John Doe");
    assert!(table.get(&MappingKey::best("PERSON")).is_some());
}

#[test]
fn short_person_values_are_excluded() {
    let text = "Al and John Doe";
    let spans = vec![
        Span::new("PERSON", 0, 2, 0.9),
        Span::new("PERSON", 7, 15, 0.9),
    ];

    let table = reconcile(
        text,
        &spans,
        &[AppliedItem::new("PERSON", "[PERSON]")],
        &TransformConfig::default(),
        &MappingPolicy::default(),
    );

    // Only one PERSON survives the length filter, so it keeps its position key.
    assert_eq!(table.len(), 1);
    let entry = table.get(&MappingKey::positional("PERSON", 7, 15)).unwrap();
    assert_eq!(entry.original_value, "John Doe");
}

#[test]
fn no_applied_items_means_empty_table() {
    let table = reconcile(
        PHONES,
        &[Span::new("PHONE_NUMBER", 5, 13, 0.7)],
        &[],
        &TransformConfig::default(),
        &MappingPolicy::default(),
    );
    assert!(table.is_empty());
}

#[test]
fn spans_without_applied_items_are_skipped() {
    let text = "Mail jane@example.com from Paris";
    let spans = vec![
        Span::new("EMAIL_ADDRESS", 5, 21, 1.0),
        Span::new("LOCATION", 27, 32, 0.85),
    ];

    let table = reconcile(
        text,
        &spans,
        &[AppliedItem::new("LOCATION", "[LOCATION]")],
        &TransformConfig::default(),
        &MappingPolicy::default(),
    );

    let entries = table.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].category, "LOCATION");
    assert_eq!(entries[0].original_value, "Paris");
}

#[test]
fn overlapping_locations_are_both_mapped() {
    let text = "New York City";
    let spans = vec![
        Span::new("LOCATION", 0, 8, 0.8),
        Span::new("LOCATION", 0, 13, 0.7),
    ];

    let table = reconcile(
        text,
        &spans,
        &[AppliedItem::new("LOCATION", "[LOCATION]")],
        &TransformConfig::default(),
        &MappingPolicy::default(),
    );

    assert_eq!(table.len(), 2);
}

#[test]
fn new_categories_can_opt_into_reduction() {
    let text = "New York City";
    let spans = vec![
        Span::new("LOCATION", 0, 8, 0.8),
        Span::new("LOCATION", 0, 13, 0.7),
    ];
    let policy = MappingPolicy::default().with_reduction("LOCATION", prefer_longest());

    let table = reconcile(
        text,
        &spans,
        &[AppliedItem::new("LOCATION", "[LOCATION]")],
        &TransformConfig::default(),
        &policy,
    );

    assert_eq!(table.len(), 1);
    let best = table.get(&MappingKey::best("LOCATION")).unwrap();
    assert_eq!(best.original_value, "New York City");
}

#[test]
fn placeholder_resolution_order() {
    let masked = AppliedItem {
        category: "CREDIT_CARD".to_string(),
        operator: Some("mask".to_string()),
        replacement: Some("************1111".to_string()),
        start: None,
        end: None,
    };
    let hashed_person = AppliedItem {
        category: "PERSON".to_string(),
        operator: Some("hash".to_string()),
        replacement: Some("9f86d081884c7d65".to_string()),
        start: None,
        end: None,
    };
    let unknown = AppliedItem {
        category: "NRP".to_string(),
        operator: Some("mask".to_string()),
        replacement: None,
        start: None,
        end: None,
    };

    let mut transforms = TransformConfig::default();
    transforms.insert("PERSON", Transform::replace("<name>"));

    let resolved = resolve_placeholders(
        &[
            masked,
            hashed_person,
            unknown,
            AppliedItem::new("PERSON", "ignored, first item wins"),
        ],
        &transforms,
    );

    assert_eq!(resolved["CREDIT_CARD"], "[CREDIT_CARD]");
    assert_eq!(resolved["PERSON"], "<name>");
    assert_eq!(resolved["NRP"], "[NRP]");
}

#[test]
fn explicit_literal_beats_configured_value() {
    let resolved = resolve_placeholders(
        &[AppliedItem::new("PHONE_NUMBER", "<tel>")],
        &TransformConfig::default(),
    );
    assert_eq!(resolved["PHONE_NUMBER"], "<tel>");
}

#[test]
fn phone_reduction_only_rewards_a_leading_plus() {
    let text = "Call 1 (555) 010-0199 or 555-0100 ext+2";
    let plain = Span::new("PHONE_NUMBER", 5, 21, 0.7);
    let extension = Span::new("PHONE_NUMBER", 25, 39, 0.7);

    for spans in [vec![plain.clone(), extension.clone()], vec![extension, plain]] {
        let table = reconcile(
            text,
            &spans,
            &phone_items(),
            &TransformConfig::default(),
            &MappingPolicy::default(),
        );

        let best = table.get(&MappingKey::best("PHONE_NUMBER")).unwrap();
        assert_eq!(best.original_value, "1 (555) 010-0199");
    }
}

#[test]
fn prefixed_preference_ignores_leading_whitespace() {
    let entry = |value: &str| MappingEntry {
        original_value: value.to_string(),
        anonymized_value: "[PHONE]".to_string(),
        category: "PHONE_NUMBER".to_string(),
        start: 0,
        end: value.chars().count(),
    };
    let prefer = prefer_prefixed('+');

    assert_eq!(prefer(&entry(" +44 20 7946"), &entry("020 7946 0000 1")), Ordering::Greater);
    assert_eq!(prefer(&entry("x+1"), &entry("5550100")), Ordering::Less);
}
