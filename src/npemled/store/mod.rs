//! # Attribute Storage
//!
//! The NPEM "register" is not a register at all from userspace: it is a set of
//! independent LED class devices, one brightness file per indicator. The
//! [`AttributeBackend`] trait is the raw I/O seam for those files.
//!
//! ## Implementations
//!
//! - [`sysfs::SysfsBackend`]: Production backend over `std::fs`
//!   - Existence is a plain `stat`, contents are never read to probe
//!   - Writes open the file without `O_CREAT`; sysfs attributes cannot be
//!     created and a vanished LED must not turn into a regular file
//!
//! - [`memory::MemBackend`]: In-memory backend for testing
//!   - Records every write in order
//!   - Can simulate per-attribute write failures
//!
//! Backends hold no capability cache. Enclosures may be hot-plugged between
//! calls, so every operation re-probes.

use crate::error::Result;
use std::path::Path;

pub mod memory;
pub mod sysfs;

/// Raw access to the attribute files that make up an NPEM register.
pub trait AttributeBackend {
    /// Verify the enclosure directory itself can be stat'ed.
    ///
    /// Returns `NpemError::EnclosureUnavailable` when it cannot.
    fn check_enclosure(&self, enclosure: &Path) -> Result<()>;

    /// True if the attribute file exists.
    fn attribute_exists(&self, path: &Path) -> bool;

    /// Read the raw attribute contents.
    /// Returns Ok(None) if the file does not exist.
    /// Returns Err only on actual I/O errors (permissions, device gone mid-read).
    fn read_attribute(&self, path: &Path) -> Result<Option<String>>;

    /// Write `value` to an existing attribute file.
    fn write_attribute(&self, path: &Path, value: &str) -> Result<()>;
}

