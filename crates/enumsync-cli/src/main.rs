use clap::{Parser, Subcommand};
use enumsync::commands::{
    cache::{self, CacheAction},
    config::{self, ConfigAction},
    generate::{self, GenerateAction},
    list, payload,
};
use enumsync::{common, GlobalOpts};
use enumsync_logger as logger;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "enumsync")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Backend enum to frontend type synchronization",
    long_about = "enumsync exposes backend enums to a typed frontend: it builds the shared `enums` page prop and generates TypeScript declarations for it."
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate TypeScript declaration files
    #[command(subcommand)]
    Generate(GenerateAction),
    /// List frontend-visible enums
    List {
        /// Optional enum type name (e.g., UserStatus)
        name: Option<String>,
        /// Directory of enum definition files to use instead of the built-in enums
        #[arg(long)]
        source: Option<PathBuf>,
    },
    /// Print the shared `enums` page prop as JSON
    Payload {
        /// Recompute instead of serving the cached payload
        #[arg(long)]
        no_cache: bool,
        /// Directory of enum definition files to use instead of the built-in enums
        #[arg(long)]
        source: Option<PathBuf>,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Manage the cached enum payload
    #[command(subcommand)]
    Cache(CacheAction),
    /// Configure enumsync
    #[command(subcommand_required = false, arg_required_else_help = false)]
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

fn main() {
    let cli = Cli::parse();
    let verbosity = cli.global.verbosity_level();

    if let Err(e) = logger::init_with_verbosity(verbosity) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }
    common::init_tracing(verbosity);

    let result = match cli.command {
        Commands::Generate(action) => generate::handle_generate(action, &cli.global),
        Commands::List { name, source } => list::handle_list(name, source, &cli.global),
        Commands::Payload {
            no_cache,
            source,
            pretty,
        } => payload::handle_payload(no_cache, source, pretty, &cli.global),
        Commands::Cache(action) => cache::handle_cache(action, &cli.global),
        Commands::Config { action } => config::handle_config(action, &cli.global),
    };

    if let Err(e) = result {
        logger::error(&e.to_string());
        if verbosity > 0 {
            if let Some(path) = logger::log_path() {
                eprintln!("Log file: {}", path.display());
            }
        }
        std::process::exit(1);
    }
}
