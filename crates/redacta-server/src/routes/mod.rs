pub mod anonymize;
pub mod entities;
pub mod health;
