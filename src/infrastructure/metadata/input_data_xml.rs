//! `InputData.xml` reader
//!
//! The acquisition software drops an `InputData.xml` into every study folder.
//! Its root element carries the patient details as direct children:
//!
//! ```xml
//! <InputData>
//!   <Patient_FirstName>Jane</Patient_FirstName>
//!   <Patient_LastName>Doe</Patient_LastName>
//! </InputData>
//! ```

use crate::config::{METADATA_FILE_NAME, RecoveryConfig};
use crate::domain::entities::PatientIdentity;
use crate::domain::repositories::{PatientMetadataReader, ScanError};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

const FIRST_NAME_TAG: &[u8] = b"Patient_FirstName";
const LAST_NAME_TAG: &[u8] = b"Patient_LastName";

#[derive(Debug, Clone, Copy)]
enum Field {
    FirstName,
    LastName,
}

impl Field {
    fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            FIRST_NAME_TAG => Some(Self::FirstName),
            LAST_NAME_TAG => Some(Self::LastName),
            _ => None,
        }
    }
}

/// Patient fields found under the root element; the first occurrence of each wins
#[derive(Debug, Default)]
struct InputData {
    first_name: Option<String>,
    last_name: Option<String>,
}

impl InputData {
    fn keep_first(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
        };
        slot.get_or_insert(value);
    }

    /// Walks the direct children of the root element.
    ///
    /// `Ok(None)` when the document has no root or is cut short.
    fn read(text: &str) -> Result<Option<Self>, quick_xml::Error> {
        let mut reader = Reader::from_str(text);
        let mut data = Self::default();
        let mut depth = 0usize;
        let mut seen_root = false;
        let mut current: Option<(Field, String)> = None;

        loop {
            match reader.read_event()? {
                Event::Start(element) => {
                    match depth {
                        0 if seen_root => return Ok(None),
                        0 => seen_root = true,
                        1 => {
                            current = Field::from_tag(element.name().as_ref())
                                .map(|field| (field, String::new()));
                        }
                        _ => {}
                    }
                    depth += 1;
                }
                Event::End(_) => {
                    let Some(parent_depth) = depth.checked_sub(1) else {
                        return Ok(None);
                    };
                    depth = parent_depth;
                    if depth == 1 {
                        if let Some((field, value)) = current.take() {
                            data.keep_first(field, value);
                        }
                    }
                }
                Event::Empty(element) => match depth {
                    0 if seen_root => return Ok(None),
                    0 => seen_root = true,
                    1 => {
                        if let Some(field) = Field::from_tag(element.name().as_ref()) {
                            data.keep_first(field, String::new());
                        }
                    }
                    _ => {}
                },
                Event::Text(text) => {
                    if let Some((_, value)) = current.as_mut() {
                        value.push_str(&text.unescape()?);
                    }
                }
                Event::CData(cdata) => {
                    if let Some((_, value)) = current.as_mut() {
                        value.push_str(&String::from_utf8_lossy(&cdata));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok((seen_root && depth == 0).then_some(data))
    }
}

/// Reads the patient identity out of the study sidecar
#[derive(Debug, Clone)]
pub struct InputDataXmlReader {
    file_name: String,
}

impl InputDataXmlReader {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    pub fn from_config(config: &RecoveryConfig) -> Self {
        Self::new(config.metadata_file_name.clone())
    }

    /// Extracts the identity from sidecar text, `None` when malformed or incomplete
    pub fn parse(text: &str) -> Option<PatientIdentity> {
        let text = text.trim_start_matches('\u{feff}');
        let data = match InputData::read(text) {
            Ok(Some(data)) => data,
            Ok(None) => {
                debug!("Patient sidecar has no complete root element");
                return None;
            }
            Err(e) => {
                debug!("Malformed patient sidecar: {}", e);
                return None;
            }
        };

        PatientIdentity::new(
            data.first_name.as_deref().unwrap_or_default(),
            data.last_name.as_deref().unwrap_or_default(),
        )
    }
}

impl Default for InputDataXmlReader {
    fn default() -> Self {
        Self::new(METADATA_FILE_NAME)
    }
}

impl PatientMetadataReader for InputDataXmlReader {
    fn read_identity(&self, study_folder: &Path) -> Result<Option<PatientIdentity>, ScanError> {
        let path = study_folder.join(&self.file_name);

        if !path.is_file() {
            debug!("No {} in {}", self.file_name, study_folder.display());
            return Ok(None);
        }

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                debug!("{} is not valid UTF-8", path.display());
                return Ok(None);
            }
            Err(e) => return Err(ScanError::from_io(&path, e)),
        };

        let identity = Self::parse(&text);
        if identity.is_none() {
            debug!("No usable patient name in {}", path.display());
        }
        Ok(identity)
    }
}
