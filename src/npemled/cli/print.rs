use colored::Colorize;
use npemled::commands::{CmdMessage, CmdResult, MessageLevel};
use npemled::model::NpemCaps;
use serde_json::json;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_state(result: &CmdResult) {
    let pattern = result.pattern.map(|p| p.to_string()).unwrap_or_default();
    println!("{}", pattern.bold());
}

/// One line per known indicator: supported or not, lit or not.
pub(super) fn print_caps(result: &CmdResult) {
    for (name, bit) in NpemCaps::all().iter_names() {
        let label = format!("{:<15}", name.to_lowercase());
        if !result.supported.contains(bit) {
            println!("{} {}", label.dimmed(), "-".dimmed());
        } else if result.register.contains(bit) {
            println!("{} {}", label, "on".green().bold());
        } else {
            println!("{} off", label);
        }
    }
}

pub(super) fn print_json(result: &CmdResult) {
    let value = json!({
        "enclosure": result.enclosure.display().to_string(),
        "present": result.present,
        "supported": result.supported.names(),
        "lit": result.register.names(),
        "pattern": result.pattern,
    });
    println!("{}", value);
}
