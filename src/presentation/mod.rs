//! Presentation layer
//!
//! Thin command line front end over [`crate::RecoveryService`].

pub mod cli;
