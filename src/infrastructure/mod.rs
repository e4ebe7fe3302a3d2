//! Infrastructure layer
//!
//! Concrete implementations of the domain repositories on top of the local
//! filesystem.

pub mod file_systems;
pub mod metadata;
pub mod persistence;
