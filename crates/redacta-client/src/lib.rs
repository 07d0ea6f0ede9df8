//! redacta-client
//!
//! The analyzer and anonymizer collaborators, their HTTP implementations,
//! and the session object that ties detection, anonymization and mapping
//! together.

pub mod analyzer;
pub mod anonymizer;
pub mod client;
pub mod collaborator;
pub mod error;
pub mod guard;

pub use guard::{GuardSettings, HealthChecker, HealthReport, PrivacyGuard};
