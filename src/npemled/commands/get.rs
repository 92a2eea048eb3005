use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::register::read_register;
use crate::store::AttributeBackend;
use crate::translate::bit_to_pattern;
use std::path::Path;

pub fn run<B: AttributeBackend>(backend: &B, enclosure: &Path) -> Result<CmdResult> {
    let register = read_register(backend, enclosure);
    let pattern = bit_to_pattern(register);

    let mut result = CmdResult::new(enclosure)
        .with_register(register)
        .with_pattern(pattern);
    result.add_message(CmdMessage::info(format!(
        "{}: {}",
        enclosure.display(),
        pattern
    )));
    Ok(result)
}
