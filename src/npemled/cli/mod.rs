//! # CLI Layer
//!
//! One possible client of the npemled library, and the **only** place that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs a logger
//! - Handles argument parsing
//! - Decides exit codes
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Loads configuration and builds the API
//! - `handle_*()`: Per-command handlers that call the API and format output

mod args;
mod print;

use args::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use npemled::api::NpemApi;
use npemled::config::NpemConfig;
use npemled::error::Result;
use npemled::model::IbpiPattern;
use npemled::store::sysfs::SysfsBackend;
use print::{print_caps, print_json, print_messages, print_state};
use std::path::{Path, PathBuf};

struct AppContext {
    api: NpemApi<SysfsBackend>,
}

impl AppContext {
    fn enclosure(&self, arg: &Path) -> PathBuf {
        self.api.config().resolve_enclosure(arg)
    }
}

/// Returns the exit code. `probe` exits 1 for enclosures without NPEM indicators.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let ctx = init_context(&cli);

    match cli.command {
        Commands::Probe { enclosure } => handle_probe(&ctx, &enclosure),
        Commands::Caps { enclosure, json } => handle_caps(&ctx, &enclosure, json),
        Commands::Get { enclosure, json } => handle_get(&ctx, &enclosure, json),
        Commands::Set { enclosure, pattern } => handle_set(&ctx, &enclosure, &pattern),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn init_context(cli: &Cli) -> AppContext {
    let search_dirs = match &cli.config_dir {
        Some(dir) => vec![dir.clone()],
        None => {
            let mut dirs = vec![PathBuf::from("/etc/npemled")];
            if let Some(proj) = ProjectDirs::from("org", "npemled", "npemled") {
                dirs.push(proj.config_dir().to_path_buf());
            }
            dirs
        }
    };
    let config = NpemConfig::load(&search_dirs);
    log::debug!("Configuration: {:?}", config);

    AppContext {
        api: NpemApi::sysfs(config),
    }
}

fn handle_probe(ctx: &AppContext, enclosure: &Path) -> Result<i32> {
    let enclosure = ctx.enclosure(enclosure);
    if !ctx.api.is_present(&enclosure) {
        println!("{}: not NPEM capable", enclosure.display());
        return Ok(1);
    }
    let result = ctx.api.probe(&enclosure)?;
    print_messages(&result.messages);
    Ok(0)
}

fn handle_caps(ctx: &AppContext, enclosure: &Path, json: bool) -> Result<i32> {
    let result = ctx.api.probe(ctx.enclosure(enclosure))?;
    if json {
        print_json(&result);
    } else {
        print_caps(&result);
    }
    Ok(0)
}

fn handle_get(ctx: &AppContext, enclosure: &Path, json: bool) -> Result<i32> {
    let result = ctx.api.get_state(ctx.enclosure(enclosure))?;
    if json {
        print_json(&result);
    } else {
        print_state(&result);
    }
    Ok(0)
}

fn handle_set(ctx: &AppContext, enclosure: &Path, pattern: &str) -> Result<i32> {
    let pattern: IbpiPattern = pattern.parse()?;
    let result = ctx.api.set_state(ctx.enclosure(enclosure), pattern)?;
    print_messages(&result.messages);
    Ok(0)
}
