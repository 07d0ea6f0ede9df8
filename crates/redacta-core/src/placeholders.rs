//! Placeholders the anonymizer is known to emit for each category.
//!
//! Used when an applied item does not carry a literal of its own.

pub const PERSON: &str = "PERSON";
pub const PHONE_NUMBER: &str = "PHONE_NUMBER";
pub const EMAIL_ADDRESS: &str = "EMAIL_ADDRESS";
pub const LOCATION: &str = "LOCATION";
pub const CREDIT_CARD: &str = "CREDIT_CARD";
pub const US_SSN: &str = "US_SSN";
pub const IP_ADDRESS: &str = "IP_ADDRESS";
pub const DATE_TIME: &str = "DATE_TIME";
pub const IBAN_CODE: &str = "IBAN_CODE";
pub const URL: &str = "URL";

const CATEGORY_PLACEHOLDERS: &[(&str, &str)] = &[
    (PERSON, "[PERSON]"),
    (PHONE_NUMBER, "[PHONE]"),
    (EMAIL_ADDRESS, "[EMAIL]"),
    (LOCATION, "[LOCATION]"),
    (CREDIT_CARD, "[CREDIT_CARD]"),
    (US_SSN, "[SSN]"),
    (IP_ADDRESS, "[IP_ADDRESS]"),
    (DATE_TIME, "[DATE]"),
    (IBAN_CODE, "[IBAN]"),
    (URL, "[URL]"),
];

/// Every category with a known placeholder.
pub fn known_categories() -> impl Iterator<Item = &'static str> {
    CATEGORY_PLACEHOLDERS.iter().map(|(c, _)| *c)
}

/// Look up the static placeholder for a category.
pub fn known_placeholder(category: &str) -> Option<&'static str> {
    CATEGORY_PLACEHOLDERS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, p)| *p)
}

/// Static placeholder for `category`, or `[CATEGORY]` when it is unknown.
pub fn placeholder_for(category: &str) -> String {
    known_placeholder(category)
        .map(str::to_string)
        .unwrap_or_else(|| format!("[{category}]"))
}
