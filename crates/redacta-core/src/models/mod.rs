pub mod anonymize;
pub mod mapping;
pub mod span;
