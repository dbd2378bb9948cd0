//! Common types and utilities shared across commands

use clap::Parser;
use enumsync_logger as logger;
use tracing_subscriber::EnvFilter;

/// Global CLI options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOpts {
    #[arg(short, long, global = true, help = "Decrease verbosity")]
    pub quiet: bool,

    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "Increase verbosity (-v for debug, -vv for trace)")]
    pub verbose: u8,
}

impl GlobalOpts {
    /// Get the effective verbosity level
    /// - 0: quiet/warn only
    /// - 1: debug (-v)
    /// - 2: trace (-vv)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}

/// Route `tracing` events from the library crates to stderr
///
/// `RUST_LOG` wins over the verbosity flags when set.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logger::verbosity_to_filter(verbosity)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
