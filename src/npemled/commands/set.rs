use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NpemError, Result};
use crate::model::{IbpiPattern, NpemCaps};
use crate::probe::probe_supported;
use crate::register::write_register;
use crate::store::AttributeBackend;
use crate::translate::pattern_to_bit;
use std::path::Path;

/// Show `pattern` on `enclosure`.
///
/// The pattern's bit must be one the enclosure exposes, with one exception:
/// OK (Normal, OneshotNormal, LocateOff) is always accepted so that every other
/// indicator can be cleared even when the enclosure has no OK LED.
///
/// With `strict` unset, failed writes to individual attributes are reported as
/// warnings and the call still succeeds. With `strict` set they fail the call
/// with [`NpemError::PartialWrite`]. Nothing is rolled back in either case.
pub fn run<B: AttributeBackend>(
    backend: &B,
    enclosure: &Path,
    pattern: IbpiPattern,
    strict: bool,
) -> Result<CmdResult> {
    if !pattern.is_writable() {
        log::info!("NPEM: Controller doesn't support {} pattern", pattern);
        return Err(NpemError::UnknownPattern { pattern });
    }

    let requested = pattern_to_bit(pattern);
    let supported = probe_supported(backend, enclosure)?;

    if !requested.intersects(supported) && requested != NpemCaps::OK {
        log::info!(
            "NPEM: Controller {} doesn't support {} pattern",
            enclosure.display(),
            pattern
        );
        return Err(NpemError::InvalidState {
            enclosure: enclosure.to_path_buf(),
            pattern,
        });
    }

    let report = write_register(backend, enclosure, requested);
    let mut result = CmdResult::new(enclosure)
        .with_supported(supported)
        .with_pattern(pattern)
        .with_write(report);

    if !report.is_complete() {
        if strict {
            return Err(NpemError::PartialWrite {
                enclosure: enclosure.to_path_buf(),
                failed: report.failed,
            });
        }
        result.add_message(CmdMessage::warning(format!(
            "Could not update {} on {}",
            report.failed.names().join(", "),
            enclosure.display()
        )));
    }

    result.add_message(CmdMessage::success(format!(
        "{} set to {}",
        enclosure.display(),
        pattern
    )));
    Ok(result)
}
