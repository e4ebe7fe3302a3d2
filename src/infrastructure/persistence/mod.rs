//! Recovery output on the local filesystem

mod local_recovery_writer;

pub use local_recovery_writer::{DESTINATION_TIME_FORMAT, LocalRecoveryWriter};
