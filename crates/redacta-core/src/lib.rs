//! redacta-core
//!
//! Pure domain types shared by the mapping engine, the service clients and
//! the HTTP server. No I/O; this is the shared vocabulary of Redacta.

pub mod error;
pub mod models;
pub mod placeholders;
pub mod transforms;
