//! # Register Accessor
//!
//! Reads and writes the virtual NPEM register, one brightness file per bit.
//!
//! Missing attributes are never errors: a missing file reads as off and is
//! skipped on write. Writes are issued sequentially and are not atomic across
//! the set, so a concurrent reader can observe a partially updated register.
//! Callers that need the combined register to change atomically must serialize
//! writes to an enclosure themselves.

use crate::attributes::NPEM_LEDS;
use crate::model::NpemCaps;
use crate::store::AttributeBackend;
use std::path::Path;

/// Outcome of a [`write_register`] call, per capability bit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WriteReport {
    /// Bits whose attribute was written (with either value).
    pub written: NpemCaps,
    /// Bits skipped because the enclosure does not expose them.
    pub skipped: NpemCaps,
    /// Bits whose attribute exists but could not be written.
    pub failed: NpemCaps,
}

impl WriteReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Interpret a brightness attribute. Any non-zero integer is on.
pub fn parse_brightness(raw: &str) -> Option<bool> {
    raw.trim().parse::<i64>().ok().map(|v| v != 0)
}

/// Current register value: OR of every bit whose attribute reads non-zero.
pub fn read_register<B: AttributeBackend>(backend: &B, enclosure: &Path) -> NpemCaps {
    let mut register = NpemCaps::empty();

    for led in NPEM_LEDS.iter() {
        let path = led.path(enclosure);
        let lit = match backend.read_attribute(&path) {
            Ok(Some(raw)) => parse_brightness(&raw).unwrap_or_else(|| {
                log::warn!("NPEM: unparseable value {:?} in {}", raw, path.display());
                false
            }),
            Ok(None) => false,
            Err(e) => {
                log::warn!("NPEM: cannot read {}: {}", path.display(), e);
                false
            }
        };
        if lit {
            register |= led.bit;
        }
    }

    register
}

/// Write `requested` to every attribute the enclosure exposes: "1" for set
/// bits, "0" for the rest.
pub fn write_register<B: AttributeBackend>(
    backend: &B,
    enclosure: &Path,
    requested: NpemCaps,
) -> WriteReport {
    let mut report = WriteReport::default();

    for led in NPEM_LEDS.iter() {
        let path = led.path(enclosure);
        if !backend.attribute_exists(&path) {
            report.skipped |= led.bit;
            continue;
        }

        let value = if requested.intersects(led.bit) { "1" } else { "0" };
        match backend.write_attribute(&path, value) {
            Ok(()) => report.written |= led.bit,
            Err(e) => {
                log::warn!("NPEM: failed to write {} to {}: {}", value, path.display(), e);
                report.failed |= led.bit;
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemBackend;

    const ENC: &str = "/sys/bus/pci/devices/0000:c1:00.0";

    #[test]
    fn brightness_parsing() {
        assert_eq!(parse_brightness("1\n"), Some(true));
        assert_eq!(parse_brightness("0\n"), Some(false));
        assert_eq!(parse_brightness(" 255 "), Some(true));
        assert_eq!(parse_brightness("on"), None);
        assert_eq!(parse_brightness(""), None);
    }

    #[test]
    fn read_register_ors_lit_attributes() {
        let backend = MemBackend::new();
        backend.add_led(ENC, NpemCaps::OK, "0\n");
        backend.add_led(ENC, NpemCaps::FAIL, "1\n");
        backend.add_led(ENC, NpemCaps::LOCATE, "1\n");

        assert_eq!(
            read_register(&backend, Path::new(ENC)),
            NpemCaps::FAIL | NpemCaps::LOCATE
        );
    }

    #[test]
    fn read_register_treats_missing_and_garbage_as_off() {
        let backend = MemBackend::new();
        backend.add_led(ENC, NpemCaps::REBUILD, "bogus");

        assert_eq!(read_register(&backend, Path::new(ENC)), NpemCaps::empty());
        // Unknown enclosures simply read as all-off.
        assert_eq!(
            read_register(&backend, Path::new("/nowhere")),
            NpemCaps::empty()
        );
    }

    #[test]
    fn write_register_touches_only_present_attributes() {
        let backend = MemBackend::new();
        backend.add_led(ENC, NpemCaps::OK, "1");
        backend.add_led(ENC, NpemCaps::FAIL, "0");

        let report = write_register(&backend, Path::new(ENC), NpemCaps::FAIL);

        assert_eq!(report.written, NpemCaps::OK | NpemCaps::FAIL);
        assert_eq!(report.skipped, NpemCaps::all() - (NpemCaps::OK | NpemCaps::FAIL));
        assert!(report.is_complete());
        assert_eq!(backend.led_value(ENC, NpemCaps::OK).as_deref(), Some("0"));
        assert_eq!(backend.led_value(ENC, NpemCaps::FAIL).as_deref(), Some("1"));
        assert_eq!(backend.writes().len(), 2);
    }

    #[test]
    fn write_register_is_idempotent() {
        let backend = MemBackend::new();
        backend.add_led(ENC, NpemCaps::LOCATE, "0");
        backend.add_led(ENC, NpemCaps::PFA, "1");

        write_register(&backend, Path::new(ENC), NpemCaps::LOCATE);
        let first = read_register(&backend, Path::new(ENC));
        write_register(&backend, Path::new(ENC), NpemCaps::LOCATE);
        let second = read_register(&backend, Path::new(ENC));

        assert_eq!(first, NpemCaps::LOCATE);
        assert_eq!(first, second);
    }

    #[test]
    fn write_register_reports_failures_and_keeps_going() {
        let backend = MemBackend::new();
        backend.add_led(ENC, NpemCaps::OK, "0");
        backend.add_led(ENC, NpemCaps::LOCATE, "1");
        backend.add_led(ENC, NpemCaps::FAIL, "1");
        backend.fail_writes_to(ENC, NpemCaps::LOCATE);

        let report = write_register(&backend, Path::new(ENC), NpemCaps::OK);

        assert_eq!(report.failed, NpemCaps::LOCATE);
        assert_eq!(report.written, NpemCaps::OK | NpemCaps::FAIL);
        assert!(!report.is_complete());
        assert_eq!(backend.led_value(ENC, NpemCaps::FAIL).as_deref(), Some("0"));
        assert_eq!(backend.led_value(ENC, NpemCaps::LOCATE).as_deref(), Some("1"));
    }
}
