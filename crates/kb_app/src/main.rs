mod platform;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser};
use kb_logging::{kb_error, kb_info};

use platform::logging::LogDestination;

#[derive(Parser)]
#[command(name = "kb")]
#[command(about = "Browse the service desk knowledge base")]
struct Cli {
    /// Catalog file (.ron or .json). The built-in catalog is used when omitted.
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Case-insensitive text matched against titles and excerpts.
    #[arg(long, short)]
    query: Option<String>,
    /// Category key, or `all`.
    #[arg(long, short)]
    category: Option<String>,
    /// Print matching articles as JSON.
    #[arg(long, default_value_t = false, conflicts_with = "interactive")]
    json: bool,
    /// Read commands from stdin and print display updates after each one.
    #[arg(long, short, default_value_t = false)]
    interactive: bool,
    /// Also write logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
    #[arg(long, short, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    platform::logging::initialize(
        LogDestination::from_option(cli.log_file.clone()),
        cli.verbose,
    );

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            kb_error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let catalog = match &cli.catalog {
        Some(path) => platform::catalog::load_catalog(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => kb_core::builtin_catalog(),
    };
    kb_info!("Catalog ready with {} articles", catalog.len());

    let state = kb_core::AppState::with_catalog(catalog);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if cli.interactive {
        let state = platform::app::with_initial_filter(
            state,
            cli.query.as_deref(),
            cli.category.as_deref(),
        );
        let stdin = std::io::stdin();
        platform::app::run_interactive(state, stdin.lock(), &mut out)
    } else {
        platform::app::run_once(
            state,
            cli.query.as_deref(),
            cli.category.as_deref(),
            cli.json,
            &mut out,
        )
    }
}
