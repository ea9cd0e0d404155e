use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use projboard::cli::{self, ListOptions};
use projboard::data::{dates, RecordStore, SortKey};
use projboard::{config, tui};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "projboard")]
#[command(about = "Terminal dashboard for tracking client projects")]
#[command(version)]
struct Args {
    /// Initialize configuration
    #[arg(long)]
    init: bool,

    /// Path to config file
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Projects JSON file (overrides the config file)
    #[arg(long, short)]
    data: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the filtered, sorted project list
    List {
        /// Case-insensitive substring of project or client name
        #[arg(long, short, default_value = "")]
        search: String,

        /// Only show these statuses (repeatable): active, on-hold, completed
        #[arg(long)]
        status: Vec<String>,

        /// Sort order
        #[arg(long, value_enum, default_value_t = SortArg::Name)]
        sort: SortArg,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print aggregate statistics over all projects
    Stats {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SortArg {
    Name,
    Deadline,
    Progress,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => SortKey::Name,
            SortArg::Deadline => SortKey::Deadline,
            SortArg::Progress => SortKey::Progress,
        }
    }
}

/// `RUST_LOG` when it is set, otherwise the per-command default.
fn log_filter(rust_log: Option<&str>, default_directive: &str) -> Result<EnvFilter> {
    let directives = rust_log
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default_directive);
    EnvFilter::try_new(directives)
        .with_context(|| format!("Invalid log filter '{}'", directives))
}

fn init_logging(log_file: Option<&Path>, default_directive: &str) -> Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = log_filter(rust_log.as_deref(), default_directive)?;

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Keep stderr quiet while the alternate screen is up
    let directive = if args.command.is_some() || args.init {
        "projboard=info"
    } else {
        "projboard=warn"
    };
    init_logging(args.log_file.as_deref(), directive)?;

    if args.init {
        return config::init_wizard(args.config.as_deref());
    }

    let config = config::load(args.config.as_deref())?;
    let store = RecordStore::load_or_bundled(config.data_path(args.data.as_deref()))?;

    match args.command {
        Some(Command::List {
            search,
            status,
            sort,
            json,
        }) => {
            let opts = ListOptions {
                search,
                statuses: cli::parse_statuses(&status)?,
                sort: sort.into(),
            };
            let today = dates::today();
            if json {
                println!("{}", cli::list_json(&store, &opts, today)?);
            } else {
                print!("{}", cli::list_text(&store, &opts, today));
            }
            Ok(())
        }
        Some(Command::Stats { json }) => {
            if json {
                println!("{}", cli::stats_json(&store)?);
            } else {
                print!("{}", cli::stats_text(&store));
            }
            Ok(())
        }
        None => tui::run(tui::App::new(config, store)),
    }
}
