use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::probe::probe_supported;
use crate::register::read_register;
use crate::store::AttributeBackend;
use std::path::Path;

/// Probe `enclosure` and report what it exposes and what is currently lit.
pub fn run<B: AttributeBackend>(backend: &B, enclosure: &Path) -> Result<CmdResult> {
    let supported = probe_supported(backend, enclosure)?;
    let register = read_register(backend, enclosure);
    let mut result = CmdResult::new(enclosure)
        .with_supported(supported)
        .with_register(register);

    if result.present {
        result.add_message(CmdMessage::success(format!(
            "{} is NPEM capable: {}",
            enclosure.display(),
            supported.names().join(", ")
        )));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "{} exposes no NPEM indicators",
            enclosure.display()
        )));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NpemCaps;
    use crate::store::memory::MemBackend;

    const ENC: &str = "/sys/bus/pci/devices/0000:00:1d.0";

    #[test]
    fn reports_supported_and_lit_bits() {
        let backend = MemBackend::new();
        backend.add_led(ENC, NpemCaps::OK, "0");
        backend.add_led(ENC, NpemCaps::LOCATE, "1");

        let result = run(&backend, Path::new(ENC)).unwrap();

        assert!(result.present);
        assert_eq!(result.supported, NpemCaps::OK | NpemCaps::LOCATE);
        assert_eq!(result.register, NpemCaps::LOCATE);
        assert!(result.messages[0].content.contains("ok, locate"));
    }

    #[test]
    fn enclosure_without_leds_is_not_present() {
        let backend = MemBackend::new();
        backend.add_enclosure(ENC);

        let result = run(&backend, Path::new(ENC)).unwrap();

        assert!(!result.present);
        assert!(result.supported.is_empty());
    }

    #[test]
    fn missing_enclosure_propagates_error() {
        let backend = MemBackend::new();
        assert!(run(&backend, Path::new(ENC)).is_err());
    }
}
