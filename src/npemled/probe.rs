//! Capability probing: which NPEM indicators an enclosure actually exposes.

use crate::attributes::NPEM_LEDS;
use crate::error::Result;
use crate::model::NpemCaps;
use crate::store::AttributeBackend;
use std::path::Path;

/// OR of every capability bit whose attribute file exists under `enclosure`.
///
/// Missing attribute files are the normal case for unsupported indicators and
/// are not errors. An enclosure directory that cannot be stat'ed is.
pub fn probe_supported<B: AttributeBackend>(backend: &B, enclosure: &Path) -> Result<NpemCaps> {
    backend.check_enclosure(enclosure)?;

    let supported = NPEM_LEDS
        .iter()
        .filter(|led| backend.attribute_exists(&led.path(enclosure)))
        .fold(NpemCaps::empty(), |acc, led| acc | led.bit);

    log::debug!(
        "NPEM: {} supports {:?}",
        enclosure.display(),
        supported.names()
    );
    Ok(supported)
}

/// True if `enclosure` exposes at least one NPEM indicator.
pub fn is_present<B: AttributeBackend>(backend: &B, enclosure: &Path) -> bool {
    match probe_supported(backend, enclosure) {
        Ok(supported) => !supported.is_empty(),
        Err(e) => {
            log::debug!("NPEM: {}", e);
            false
        }
    }
}
