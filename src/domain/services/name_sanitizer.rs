//! File name sanitizer
//!
//! Strips characters that cannot appear in a file or directory name. The set is the
//! Windows one (control characters plus `"<>|:*?\/`), which also covers POSIX.
//! Nothing is substituted and nothing is truncated, so a name made only of illegal
//! characters comes back empty.

/// Characters rejected on top of the ASCII control range
const RESERVED: [char; 9] = ['"', '<', '>', '|', ':', '*', '?', '\\', '/'];

/// Whether `c` is illegal in a file name
pub fn is_invalid_file_name_char(c: char) -> bool {
    (c as u32) < 0x20 || RESERVED.contains(&c)
}

/// Removes every illegal character from `name`
pub fn sanitize_file_name(name: &str) -> String {
    name.chars().filter(|&c| !is_invalid_file_name_char(c)).collect()
}
