//! Slot records for NPEM controllers.
//!
//! An NPEM controller drives exactly one slot, so the slot is identified by
//! the controller's sysfs path.

use crate::api::NpemApi;
use crate::error::Result;
use crate::model::IbpiPattern;
use crate::store::AttributeBackend;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ControllerType {
    KernelNpem,
}

pub struct NpemSlot<'a, B: AttributeBackend> {
    api: &'a NpemApi<B>,
    slot_id: String,
    sysfs_path: PathBuf,
}

impl<'a, B: AttributeBackend> NpemSlot<'a, B> {
    pub fn new(api: &'a NpemApi<B>, controller_path: &Path) -> Self {
        Self {
            api,
            slot_id: controller_path.display().to_string(),
            sysfs_path: controller_path.to_path_buf(),
        }
    }

    pub fn slot_id(&self) -> &str {
        &self.slot_id
    }

    pub fn sysfs_path(&self) -> &Path {
        &self.sysfs_path
    }

    pub fn controller_type(&self) -> ControllerType {
        ControllerType::KernelNpem
    }

    pub fn get_state(&self) -> IbpiPattern {
        self.api
            .get_state(&self.sysfs_path)
            .ok()
            .and_then(|result| result.pattern)
            .unwrap_or(IbpiPattern::Unknown)
    }

    pub fn set_state(&self, pattern: IbpiPattern) -> Result<()> {
        self.api.set_state(&self.sysfs_path, pattern).map(|_| ())
    }
}
