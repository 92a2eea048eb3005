use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::OnceLock;

/// "0.3.2" for releases, "0.3.2@abc1234" for dev builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "npemled", version = get_version())]
#[command(about = "Drive NPEM enclosure LEDs through the kernel LED class interface", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose logging (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding npemled.toml (overrides the platform config dir)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether an enclosure exposes NPEM indicators
    Probe {
        /// Enclosure sysfs path or PCI address (e.g. 0000:00:1d.0)
        enclosure: PathBuf,
    },

    /// Show supported and currently lit indicators
    Caps {
        enclosure: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the current IBPI pattern
    #[command(alias = "g")]
    Get {
        enclosure: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show an IBPI pattern (normal, locate, locate_off, failure, rebuild,
    /// degraded, failed_array, hotspare, pfa, oneshot_normal)
    #[command(alias = "s")]
    Set {
        enclosure: PathBuf,

        pattern: String,
    },
}
