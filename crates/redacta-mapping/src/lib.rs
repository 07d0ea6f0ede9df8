//! redacta-mapping
//!
//! Turns raw detections plus an anonymizer result into an invertible
//! original ↔ placeholder mapping, and applies that mapping in reverse.
//! Pure and synchronous, no I/O.

pub mod normalize;
pub mod policy;
pub mod reconcile;
pub mod restore;
pub mod table;

pub use normalize::normalize_spans;
pub use policy::MappingPolicy;
pub use reconcile::{build_mapping, reconcile, reduce_best_matches, resolve_placeholders};
pub use restore::restore;
pub use table::MappingTable;
