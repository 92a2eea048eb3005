//! # Configuration
//!
//! Configuration is managed by [`clapfig`], which handles layered loading
//! from TOML files, environment variables, and compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `NPEMLED__STRICT_WRITES`, `NPEMLED__SYSFS_ROOT`.
//! 2. **Config file**: `npemled.toml` in the given search directories
//!    (later directories override earlier ones).
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `strict_writes` | `false` | Fail `set` if any LED attribute write fails |
//! | `sysfs_root` | `/sys/bus/pci/devices` | Base for relative enclosure paths |

use clapfig::{Clapfig, SearchMode, SearchPath};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "npemled.toml";
const DEFAULT_SYSFS_ROOT: &str = "/sys/bus/pci/devices";

/// Configuration for npemled, stored in `npemled.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NpemConfig {
    /// Fail a pattern change when any individual LED attribute write fails.
    /// When off, failed writes are reported as warnings and the change
    /// still succeeds.
    #[config(default = false)]
    pub strict_writes: bool,

    /// Directory that relative enclosure paths are resolved against.
    #[config(default = "/sys/bus/pci/devices")]
    pub sysfs_root: String,
}

impl Default for NpemConfig {
    fn default() -> Self {
        Self {
            strict_writes: false,
            sysfs_root: DEFAULT_SYSFS_ROOT.to_string(),
        }
    }
}

impl NpemConfig {
    /// Load from `npemled.toml` in `search_dirs`, merged in order, falling
    /// back to defaults if nothing usable is found.
    pub fn load(search_dirs: &[PathBuf]) -> Self {
        let search_paths: Vec<SearchPath> = search_dirs
            .iter()
            .map(|dir| SearchPath::Path(dir.clone()))
            .collect();

        Clapfig::builder::<NpemConfig>()
            .app_name("npemled")
            .file_name(CONFIG_FILE_NAME)
            .search_paths(search_paths)
            .search_mode(SearchMode::Merge)
            .load()
            .unwrap_or_else(|e| {
                log::debug!("Using default configuration: {}", e);
                Self::default()
            })
    }

    /// Resolve an enclosure argument: absolute paths are kept, anything else
    /// is taken relative to `sysfs_root` (e.g. a bare PCI address).
    pub fn resolve_enclosure(&self, enclosure: impl AsRef<Path>) -> PathBuf {
        let enclosure = enclosure.as_ref();
        if enclosure.is_absolute() {
            enclosure.to_path_buf()
        } else {
            Path::new(&self.sysfs_root).join(enclosure)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NpemConfig::default();
        assert!(!config.strict_writes);
        assert_eq!(config.sysfs_root, "/sys/bus/pci/devices");
    }

    #[test]
    fn test_resolve_bare_pci_address() {
        let config = NpemConfig::default();
        assert_eq!(
            config.resolve_enclosure("0000:00:1d.0"),
            PathBuf::from("/sys/bus/pci/devices/0000:00:1d.0")
        );
    }

    #[test]
    fn test_resolve_keeps_absolute_path() {
        let config = NpemConfig {
            sysfs_root: "/tmp/fake".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_enclosure("/sys/devices/pci0000:00/0000:00:1d.0"),
            PathBuf::from("/sys/devices/pci0000:00/0000:00:1d.0")
        );
    }

    #[test]
    fn test_config_toml_roundtrip_shape() {
        let config: NpemConfig =
            toml::from_str("strict_writes = true\nsysfs_root = \"/tmp/sys\"\n").unwrap();
        assert!(config.strict_writes);
        assert_eq!(config.resolve_enclosure("enc"), PathBuf::from("/tmp/sys/enc"));
    }
}
