//! File name patterns
//!
//! A tiny `prefix*.extension` glob, matched ASCII case-insensitively like the
//! acquisition software's host filesystem does.

use serde::{Deserialize, Serialize};
use std::ffi::OsString;

/// Pattern of the form `<prefix>*.<extension>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PatternFields")]
pub struct FilePattern {
    /// Leading text of the file name, may be empty
    prefix: String,
    /// Extension without the dot
    extension: String,
}

/// Deserialized form, normalized through [`FilePattern::new`]
#[derive(Deserialize)]
struct PatternFields {
    #[serde(default)]
    prefix: String,
    extension: String,
}

impl From<PatternFields> for FilePattern {
    fn from(fields: PatternFields) -> Self {
        Self::new(&fields.prefix, &fields.extension)
    }
}

impl FilePattern {
    pub fn new(prefix: &str, extension: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Whether `file_name` matches the pattern
    pub fn matches(&self, file_name: &str) -> bool {
        let suffix_len = self.extension.len() + 1;
        if file_name.len() < self.prefix.len() + suffix_len {
            return false;
        }

        let (Some(head), Some(tail)) = (
            file_name.get(..self.prefix.len()),
            file_name.get(file_name.len() - suffix_len..),
        ) else {
            return false;
        };

        head.eq_ignore_ascii_case(&self.prefix)
            && tail.starts_with('.')
            && tail[1..].eq_ignore_ascii_case(&self.extension)
    }

    /// Picks the lexicographically first matching name
    ///
    /// Directory listing order differs between platforms, so ties are always
    /// broken by sorting.
    pub fn select_first<I>(&self, names: I) -> Option<OsString>
    where
        I: IntoIterator<Item = OsString>,
    {
        names
            .into_iter()
            .filter(|name| name.to_str().is_some_and(|s| self.matches(s)))
            .min()
    }
}

impl std::fmt::Display for FilePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}*.{}", self.prefix, self.extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_raw_pattern() {
        let raw = FilePattern::new("U", "dcm");
        assert!(raw.matches("U001.dcm"));
        assert!(raw.matches("u001.DCM"));
        assert!(raw.matches("U.dcm"));
        assert!(!raw.matches("X001.dcm"));
        assert!(!raw.matches("U001.dcm.bak"));
        assert!(!raw.matches("U001dcm"));
        assert!(!raw.matches("Udcm"));
    }

    #[test]
    fn test_preview_pattern_any_base_name() {
        let preview = FilePattern::new("", ".jpg");
        assert_eq!(preview.extension(), "jpg");
        assert!(preview.matches("preview.jpg"));
        assert!(preview.matches(".jpg"));
        assert!(!preview.matches("preview.jpeg"));
    }

    #[test]
    fn test_multibyte_names_do_not_panic() {
        let raw = FilePattern::new("U", "dcm");
        assert!(!raw.matches("éé"));
        assert!(!raw.matches("Ü.dcm"));
    }

    #[test]
    fn test_select_first_sorts() {
        let raw = FilePattern::new("U", "dcm");
        let picked = raw.select_first(names(&["U200.dcm", "notes.txt", "U100.dcm", "U150.dcm"]));
        assert_eq!(picked, Some(OsString::from("U100.dcm")));
        assert_eq!(raw.select_first(names(&["preview.jpg"])), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(FilePattern::new("U", "dcm").to_string(), "U*.dcm");
    }
}
