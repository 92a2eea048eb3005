//! Attribute descriptors: which LED class device backs each capability bit.
//!
//! The kernel NPEM driver registers one LED class device per indicator under
//! the enclosure's PCI device directory:
//!
//! ```text
//! <enclosure>/leds/<basename(enclosure)>:enclosure:<name>/brightness
//! ```

use crate::model::NpemCaps;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NpemLed {
    pub bit: NpemCaps,
    pub name: &'static str,
}

pub const NPEM_LEDS: [NpemLed; 8] = [
    NpemLed {
        bit: NpemCaps::OK,
        name: "enclosure:ok",
    },
    NpemLed {
        bit: NpemCaps::LOCATE,
        name: "enclosure:locate",
    },
    NpemLed {
        bit: NpemCaps::FAIL,
        name: "enclosure:fail",
    },
    NpemLed {
        bit: NpemCaps::REBUILD,
        name: "enclosure:rebuild",
    },
    NpemLed {
        bit: NpemCaps::PFA,
        name: "enclosure:pfa",
    },
    NpemLed {
        bit: NpemCaps::HOT_SPARE,
        name: "enclosure:hotspare",
    },
    NpemLed {
        bit: NpemCaps::CRITICAL_ARRAY,
        name: "enclosure:ica",
    },
    NpemLed {
        bit: NpemCaps::FAILED_ARRAY,
        name: "enclosure:ifa",
    },
];

impl NpemLed {
    pub fn path(&self, enclosure: &Path) -> PathBuf {
        led_path(enclosure, self.name)
    }
}

/// Brightness file of LED `name` under `enclosure`.
pub fn led_path(enclosure: &Path, name: &str) -> PathBuf {
    let base = enclosure
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    enclosure
        .join("leds")
        .join(format!("{}:{}", base, name))
        .join("brightness")
}

/// Descriptor for a single capability bit.
pub fn led_for(bit: NpemCaps) -> Option<&'static NpemLed> {
    NPEM_LEDS.iter().find(|led| led.bit == bit)
}
