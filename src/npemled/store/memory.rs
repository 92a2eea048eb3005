use super::AttributeBackend;
use crate::attributes::led_for;
use crate::error::{NpemError, Result};
use crate::model::NpemCaps;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

/// In-memory attribute backend for testing.
///
/// Uses `RefCell` for interior mutability since the backend is driven from a
/// single thread. This keeps `AttributeBackend` on `&self` for every method.
#[derive(Default)]
pub struct MemBackend {
    enclosures: RefCell<HashSet<PathBuf>>,
    attributes: RefCell<HashMap<PathBuf, String>>,
    writes: RefCell<Vec<(PathBuf, String)>>,
    failing: RefCell<HashSet<PathBuf>>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an enclosure directory with no LEDs.
    pub fn add_enclosure(&self, enclosure: impl AsRef<Path>) {
        self.enclosures
            .borrow_mut()
            .insert(enclosure.as_ref().to_path_buf());
    }

    /// Expose the LED backing `bit` under `enclosure` with an initial value.
    pub fn add_led(&self, enclosure: impl AsRef<Path>, bit: NpemCaps, value: &str) {
        let enclosure = enclosure.as_ref();
        self.add_enclosure(enclosure);
        if let Some(led) = led_for(bit) {
            self.attributes
                .borrow_mut()
                .insert(led.path(enclosure), value.to_string());
        }
    }

    pub fn remove_led(&self, enclosure: impl AsRef<Path>, bit: NpemCaps) {
        if let Some(led) = led_for(bit) {
            self.attributes
                .borrow_mut()
                .remove(&led.path(enclosure.as_ref()));
        }
    }

    /// Current contents of the LED backing `bit`, if exposed.
    pub fn led_value(&self, enclosure: impl AsRef<Path>, bit: NpemCaps) -> Option<String> {
        let led = led_for(bit)?;
        self.attributes
            .borrow()
            .get(&led.path(enclosure.as_ref()))
            .cloned()
    }

    /// Make writes to the LED backing `bit` fail.
    pub fn fail_writes_to(&self, enclosure: impl AsRef<Path>, bit: NpemCaps) {
        if let Some(led) = led_for(bit) {
            self.failing
                .borrow_mut()
                .insert(led.path(enclosure.as_ref()));
        }
    }

    /// Every successful write, in order.
    pub fn writes(&self) -> Vec<(PathBuf, String)> {
        self.writes.borrow().clone()
    }
}

impl AttributeBackend for MemBackend {
    fn check_enclosure(&self, enclosure: &Path) -> Result<()> {
        if self.enclosures.borrow().contains(enclosure) {
            Ok(())
        } else {
            Err(NpemError::EnclosureUnavailable {
                path: enclosure.to_path_buf(),
                source: io::Error::from(io::ErrorKind::NotFound),
            })
        }
    }

    fn attribute_exists(&self, path: &Path) -> bool {
        self.attributes.borrow().contains_key(path)
    }

    fn read_attribute(&self, path: &Path) -> Result<Option<String>> {
        Ok(self.attributes.borrow().get(path).cloned())
    }

    fn write_attribute(&self, path: &Path, value: &str) -> Result<()> {
        if self.failing.borrow().contains(path) {
            return Err(NpemError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "Simulated write error",
            )));
        }
        let mut attributes = self.attributes.borrow_mut();
        match attributes.get_mut(path) {
            Some(current) => *current = value.to_string(),
            None => return Err(NpemError::Io(io::Error::from(io::ErrorKind::NotFound))),
        }
        self.writes
            .borrow_mut()
            .push((path.to_path_buf(), value.to_string()));
        Ok(())
    }
}
