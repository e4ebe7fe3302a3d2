//! Domain layer - Core business logic
//!
//! Entities describing a lost X-ray, the traits the scanner and the writer are built
//! on, and the pure services (pattern matching, name sanitizing) they share.

pub mod entities;
pub mod repositories;
pub mod services;
