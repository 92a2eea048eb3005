use crate::error::NpemError;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An abstract LED-display intent for a drive or enclosure slot.
///
/// Which pattern to show for a given fault is decided upstream; this crate
/// only converts patterns to and from the NPEM hardware signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IbpiPattern {
    Normal,
    OneshotNormal,
    Degraded,
    Hotspare,
    Rebuild,
    FailedArray,
    Pfa,
    #[serde(rename = "FAILURE")]
    FailedDrive,
    Locate,
    LocateOff,
    Unknown,
}

impl IbpiPattern {
    pub const ALL: [IbpiPattern; 11] = [
        IbpiPattern::Normal,
        IbpiPattern::OneshotNormal,
        IbpiPattern::Degraded,
        IbpiPattern::Hotspare,
        IbpiPattern::Rebuild,
        IbpiPattern::FailedArray,
        IbpiPattern::Pfa,
        IbpiPattern::FailedDrive,
        IbpiPattern::Locate,
        IbpiPattern::LocateOff,
        IbpiPattern::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IbpiPattern::Normal => "NORMAL",
            IbpiPattern::OneshotNormal => "ONESHOT_NORMAL",
            IbpiPattern::Degraded => "DEGRADED",
            IbpiPattern::Hotspare => "HOTSPARE",
            IbpiPattern::Rebuild => "REBUILD",
            IbpiPattern::FailedArray => "FAILED_ARRAY",
            IbpiPattern::Pfa => "PFA",
            IbpiPattern::FailedDrive => "FAILURE",
            IbpiPattern::Locate => "LOCATE",
            IbpiPattern::LocateOff => "LOCATE_OFF",
            IbpiPattern::Unknown => "UNKNOWN",
        }
    }

    /// Patterns a caller may legitimately ask the hardware to display.
    pub fn is_writable(&self) -> bool {
        !matches!(self, IbpiPattern::Unknown)
    }
}

impl fmt::Display for IbpiPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IbpiPattern {
    type Err = NpemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase().replace('-', "_");
        let pattern = match lowered.as_str() {
            "normal" => IbpiPattern::Normal,
            "oneshot_normal" => IbpiPattern::OneshotNormal,
            "degraded" | "ica" => IbpiPattern::Degraded,
            "hotspare" | "hot_spare" => IbpiPattern::Hotspare,
            "rebuild" => IbpiPattern::Rebuild,
            "failed_array" | "ifa" => IbpiPattern::FailedArray,
            "pfa" => IbpiPattern::Pfa,
            "failure" | "failed_drive" | "disk_failed" => IbpiPattern::FailedDrive,
            "locate" => IbpiPattern::Locate,
            "locate_off" => IbpiPattern::LocateOff,
            "unknown" => IbpiPattern::Unknown,
            _ => return Err(NpemError::Parse(s.to_string())),
        };
        Ok(pattern)
    }
}

bitflags! {
    /// NPEM capability/control bits, laid out as in the PCIe NPEM
    /// capability register. Each bit is one independently controllable
    /// indicator.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NpemCaps: u32 {
        const OK = 0x004;
        const LOCATE = 0x008;
        const FAIL = 0x010;
        const REBUILD = 0x020;
        const PFA = 0x040;
        const HOT_SPARE = 0x080;
        const CRITICAL_ARRAY = 0x100;
        const FAILED_ARRAY = 0x200;
    }
}

impl NpemCaps {
    /// Short attribute-style names of the set bits, in register order.
    pub fn names(&self) -> Vec<&'static str> {
        self.iter_names()
            .map(|(name, _)| match name {
                "OK" => "ok",
                "LOCATE" => "locate",
                "FAIL" => "fail",
                "REBUILD" => "rebuild",
                "PFA" => "pfa",
                "HOT_SPARE" => "hotspare",
                "CRITICAL_ARRAY" => "ica",
                _ => "ifa",
            })
            .collect()
    }
}
