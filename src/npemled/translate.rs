//! # State Translator
//!
//! Bidirectional mapping between [`IbpiPattern`] and the NPEM capability
//! bits. The mapping is data, not code: [`IBPI_TO_NPEM`] is an ordered table
//! and both lookups scan it front to back.
//!
//! Order matters for read-back. If several indicators are lit at once (which
//! should not happen, but hardware and other tools are free to do it), the
//! first table entry whose bit is set wins. `Normal`, `OneshotNormal` and
//! `LocateOff` all share the OK bit, so reading OK back always yields
//! `Normal`.

use crate::model::{IbpiPattern, NpemCaps};

pub const IBPI_TO_NPEM: [(IbpiPattern, NpemCaps); 11] = [
    (IbpiPattern::Normal, NpemCaps::OK),
    (IbpiPattern::OneshotNormal, NpemCaps::OK),
    (IbpiPattern::Degraded, NpemCaps::CRITICAL_ARRAY),
    (IbpiPattern::Hotspare, NpemCaps::HOT_SPARE),
    (IbpiPattern::Rebuild, NpemCaps::REBUILD),
    (IbpiPattern::FailedArray, NpemCaps::FAILED_ARRAY),
    (IbpiPattern::Pfa, NpemCaps::PFA),
    (IbpiPattern::FailedDrive, NpemCaps::FAIL),
    (IbpiPattern::Locate, NpemCaps::LOCATE),
    (IbpiPattern::LocateOff, NpemCaps::OK),
    (IbpiPattern::Unknown, NpemCaps::empty()),
];

/// Capability bits for `pattern`; empty for `Unknown`.
pub fn pattern_to_bit(pattern: IbpiPattern) -> NpemCaps {
    IBPI_TO_NPEM
        .iter()
        .find(|(p, _)| *p == pattern)
        .map(|(_, caps)| *caps)
        .unwrap_or_else(NpemCaps::empty)
}

/// Pattern of the first table entry whose bits intersect `register`.
pub fn bit_to_pattern(register: NpemCaps) -> IbpiPattern {
    IBPI_TO_NPEM
        .iter()
        .find(|(_, caps)| caps.intersects(register))
        .map(|(pattern, _)| *pattern)
        .unwrap_or(IbpiPattern::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_maps_to_no_bits() {
        assert!(pattern_to_bit(IbpiPattern::Unknown).is_empty());
    }

    #[test]
    fn ok_patterns_share_one_bit() {
        assert_eq!(pattern_to_bit(IbpiPattern::Normal), NpemCaps::OK);
        assert_eq!(pattern_to_bit(IbpiPattern::OneshotNormal), NpemCaps::OK);
        assert_eq!(pattern_to_bit(IbpiPattern::LocateOff), NpemCaps::OK);
    }

    #[test]
    fn every_pattern_reads_back_through_its_bit() {
        for pattern in IbpiPattern::ALL {
            let bits = pattern_to_bit(pattern);
            let back = bit_to_pattern(bits);
            assert_eq!(pattern_to_bit(back), bits, "{} did not read back", pattern);
        }
        assert_eq!(bit_to_pattern(NpemCaps::OK), IbpiPattern::Normal);
        assert_eq!(bit_to_pattern(NpemCaps::FAIL), IbpiPattern::FailedDrive);
        assert_eq!(bit_to_pattern(NpemCaps::CRITICAL_ARRAY), IbpiPattern::Degraded);
    }

    #[test]
    fn single_bit_maps_to_its_unique_pattern() {
        let cases = [
            (NpemCaps::LOCATE, IbpiPattern::Locate),
            (NpemCaps::REBUILD, IbpiPattern::Rebuild),
            (NpemCaps::PFA, IbpiPattern::Pfa),
            (NpemCaps::HOT_SPARE, IbpiPattern::Hotspare),
            (NpemCaps::FAILED_ARRAY, IbpiPattern::FailedArray),
        ];
        for (bits, expected) in cases {
            assert_eq!(bit_to_pattern(bits), expected);
        }
    }

    #[test]
    fn empty_register_is_unknown() {
        assert_eq!(bit_to_pattern(NpemCaps::empty()), IbpiPattern::Unknown);
    }

    #[test]
    fn table_order_breaks_ties() {
        // OK precedes everything.
        assert_eq!(
            bit_to_pattern(NpemCaps::OK | NpemCaps::LOCATE),
            IbpiPattern::Normal
        );
        // Critical array precedes hot spare, rebuild and fail.
        assert_eq!(
            bit_to_pattern(NpemCaps::FAIL | NpemCaps::CRITICAL_ARRAY),
            IbpiPattern::Degraded
        );
        assert_eq!(
            bit_to_pattern(NpemCaps::FAIL | NpemCaps::LOCATE),
            IbpiPattern::FailedDrive
        );
        assert_eq!(
            bit_to_pattern(NpemCaps::PFA | NpemCaps::FAILED_ARRAY),
            IbpiPattern::FailedArray
        );
    }
}
