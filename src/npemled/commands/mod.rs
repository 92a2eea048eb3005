use crate::model::{IbpiPattern, NpemCaps};
use crate::register::WriteReport;
use std::path::PathBuf;

pub mod get;
pub mod present;
pub mod set;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub enclosure: PathBuf,
    pub present: bool,
    pub supported: NpemCaps,
    pub register: NpemCaps,
    pub pattern: Option<IbpiPattern>,
    pub write: Option<WriteReport>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn new(enclosure: impl Into<PathBuf>) -> Self {
        Self {
            enclosure: enclosure.into(),
            ..Default::default()
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_pattern(mut self, pattern: IbpiPattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn with_supported(mut self, supported: NpemCaps) -> Self {
        self.present = !supported.is_empty();
        self.supported = supported;
        self
    }

    pub fn with_register(mut self, register: NpemCaps) -> Self {
        self.register = register;
        self
    }

    pub fn with_write(mut self, report: WriteReport) -> Self {
        self.write = Some(report);
        self
    }
}
