use anyhow::{Context, Result};
use clap::Parser;
use redux_demos::apps::{self, AppKind, SharedWriter};
use redux_demos_config::AppConfig;
use std::cell::RefCell;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::rc::Rc;

mod logger;

/// Run a redux tutorial app against a script of actions
#[derive(Debug, Parser)]
#[command(name = "redux-demos", version, about)]
struct Cli {
    /// Config file (defaults to .redux-demos.toml in CWD or HOME)
    #[arg(long)]
    config: Option<PathBuf>,

    /// App to run
    #[arg(value_enum)]
    app: AppKind,

    /// Script with one JSON action or @event per line (stdin when omitted)
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = logger::init()?;
    log::info!("Starting redux-demos ({:?})", cli.app);

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load(),
    };

    let app = apps::build(cli.app, &config);
    let out: SharedWriter = Rc::new(RefCell::new(io::stdout()));

    let summary = match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            apps::run(app.as_ref(), &config, BufReader::new(file), out)?
        }
        None => apps::run(app.as_ref(), &config, io::stdin().lock(), out)?,
    };

    log::info!(
        "Exiting redux-demos: {} dispatched, {} rejected (log: {})",
        summary.dispatched,
        summary.rejected,
        log_file.display()
    );
    Ok(())
}
