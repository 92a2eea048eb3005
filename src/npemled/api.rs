//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point the rest of an enclosure-LED system uses to drive NPEM
//! enclosures.
//!
//! ## Entry Points
//!
//! - [`NpemApi::is_present`]: is this path NPEM-capable at all
//! - [`NpemApi::get_state`]: current IBPI pattern of an enclosure
//! - [`NpemApi::set_state`]: show a pattern on an enclosure
//! - [`NpemApi::write_pattern`]: IBPI write request from the block-device layer
//!
//! ## Generic Over AttributeBackend
//!
//! `NpemApi<B: AttributeBackend>` is generic over the storage backend:
//! - Production: `NpemApi<SysfsBackend>`
//! - Testing: `NpemApi<MemBackend>`
//!
//! Nothing is cached between calls. Each call re-probes the enclosure, and
//! calls on different enclosures share no mutable state.

use crate::commands;
use crate::config::NpemConfig;
use crate::error::{NpemError, Result};
use crate::model::IbpiPattern;
use crate::probe;
use crate::slot::NpemSlot;
use crate::store::sysfs::SysfsBackend;
use crate::store::AttributeBackend;
use std::path::{Path, PathBuf};

/// The main API facade for NPEM operations.
pub struct NpemApi<B: AttributeBackend> {
    backend: B,
    config: NpemConfig,
}

impl NpemApi<SysfsBackend> {
    pub fn sysfs(config: NpemConfig) -> Self {
        Self::new(SysfsBackend::new(), config)
    }
}

impl<B: AttributeBackend> NpemApi<B> {
    pub fn new(backend: B, config: NpemConfig) -> Self {
        Self { backend, config }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn config(&self) -> &NpemConfig {
        &self.config
    }

    /// The enclosure an NPEM controller drives is the controller's own
    /// sysfs directory.
    pub fn enclosure_path(&self, controller_path: impl AsRef<Path>) -> PathBuf {
        controller_path.as_ref().to_path_buf()
    }

    pub fn is_present(&self, enclosure: impl AsRef<Path>) -> bool {
        probe::is_present(&self.backend, enclosure.as_ref())
    }

    pub fn probe(&self, enclosure: impl AsRef<Path>) -> Result<commands::CmdResult> {
        commands::present::run(&self.backend, enclosure.as_ref())
    }

    pub fn get_state(&self, enclosure: impl AsRef<Path>) -> Result<commands::CmdResult> {
        commands::get::run(&self.backend, enclosure.as_ref())
    }

    pub fn set_state(
        &self,
        enclosure: impl AsRef<Path>,
        pattern: IbpiPattern,
    ) -> Result<commands::CmdResult> {
        commands::set::run(
            &self.backend,
            enclosure.as_ref(),
            pattern,
            self.config.strict_writes,
        )
    }

    /// Write path used for block devices behind an NPEM controller. Only
    /// patterns in the Normal..=LocateOff range are accepted.
    pub fn write_pattern(
        &self,
        controller_path: impl AsRef<Path>,
        pattern: IbpiPattern,
    ) -> Result<commands::CmdResult> {
        if !pattern.is_writable() {
            return Err(NpemError::UnknownPattern { pattern });
        }
        let enclosure = self.enclosure_path(controller_path);
        self.set_state(enclosure, pattern)
    }

    /// Slot record for the NPEM controller at `controller_path`.
    pub fn slot(&self, controller_path: impl AsRef<Path>) -> NpemSlot<'_, B> {
        NpemSlot::new(self, controller_path.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NpemCaps;
    use crate::store::memory::MemBackend;

    const ENC: &str = "/sys/bus/pci/devices/0000:00:1d.0";

    fn api() -> NpemApi<MemBackend> {
        let backend = MemBackend::new();
        backend.add_led(ENC, NpemCaps::OK, "1");
        backend.add_led(ENC, NpemCaps::LOCATE, "0");
        NpemApi::new(backend, NpemConfig::default())
    }

    #[test]
    fn is_present_dispatches_to_probe() {
        let api = api();
        assert!(api.is_present(ENC));
        assert!(!api.is_present("/sys/bus/pci/devices/0000:ff:00.0"));
    }

    #[test]
    fn get_state_returns_pattern() {
        let api = api();
        let result = api.get_state(ENC).unwrap();
        assert_eq!(result.pattern, Some(IbpiPattern::Normal));
    }

    #[test]
    fn set_state_dispatches_with_config_strictness() {
        let backend = MemBackend::new();
        backend.add_led(ENC, NpemCaps::LOCATE, "0");
        backend.fail_writes_to(ENC, NpemCaps::LOCATE);
        let config = NpemConfig {
            strict_writes: true,
            ..Default::default()
        };
        let api = NpemApi::new(backend, config);

        let err = api.set_state(ENC, IbpiPattern::Locate).unwrap_err();
        assert!(matches!(err, NpemError::PartialWrite { .. }));
    }

    #[test]
    fn write_pattern_rejects_unknown() {
        let api = api();
        let err = api.write_pattern(ENC, IbpiPattern::Unknown).unwrap_err();
        assert!(err.is_invalid_state());
        assert!(api.backend().writes().is_empty());
    }

    #[test]
    fn write_pattern_sets_enclosure_of_controller() {
        let api = api();
        api.write_pattern(ENC, IbpiPattern::Locate).unwrap();
        assert_eq!(
            api.backend().led_value(ENC, NpemCaps::LOCATE).as_deref(),
            Some("1")
        );
        assert_eq!(
            api.backend().led_value(ENC, NpemCaps::OK).as_deref(),
            Some("0")
        );
    }

    #[test]
    fn enclosure_path_is_controller_path() {
        let api = api();
        assert_eq!(api.enclosure_path(ENC), PathBuf::from(ENC));
    }
}
