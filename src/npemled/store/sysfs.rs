use super::AttributeBackend;
use crate::error::{NpemError, Result};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Attribute backend over the real filesystem (normally sysfs).
#[derive(Debug, Default, Clone, Copy)]
pub struct SysfsBackend;

impl SysfsBackend {
    pub fn new() -> Self {
        Self
    }
}

impl AttributeBackend for SysfsBackend {
    fn check_enclosure(&self, enclosure: &Path) -> Result<()> {
        fs::metadata(enclosure)
            .map(|_| ())
            .map_err(|source| NpemError::EnclosureUnavailable {
                path: enclosure.to_path_buf(),
                source,
            })
    }

    fn attribute_exists(&self, path: &Path) -> bool {
        fs::metadata(path).is_ok()
    }

    fn read_attribute(&self, path: &Path) -> Result<Option<String>> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(NpemError::Io(e)),
        }
    }

    fn write_attribute(&self, path: &Path, value: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(path)
            .map_err(NpemError::Io)?;
        file.write_all(value.as_bytes()).map_err(NpemError::Io)?;
        Ok(())
    }
}
