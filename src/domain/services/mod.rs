//! Domain services
//!
//! Pure helpers shared by the scanner and the writer.

mod file_pattern;
mod name_sanitizer;

pub use file_pattern::FilePattern;
pub use name_sanitizer::{is_invalid_file_name_char, sanitize_file_name};
