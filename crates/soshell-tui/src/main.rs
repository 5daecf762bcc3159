//! soshell — a social dashboard for the terminal.

mod action;
mod app;
mod component;
mod event;
mod route;
mod screens;
mod theme;
mod tui;
mod viewport;
mod widgets;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::tui::Tui;

#[derive(Parser, Debug)]
#[command(name = "soshell", version, about = "Social dashboard TUI")]
struct Cli {
    /// Path to open at startup (e.g. "/", "/friends"). Unknown paths land
    /// on the 404 screen.
    #[arg(long)]
    route: Option<String>,

    /// Narrow-layout breakpoint in columns (overrides config).
    #[arg(long)]
    breakpoint: Option<u32>,

    /// Config file to load instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file path (overrides config).
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// File-based logging only. Writing to stdout would corrupt the TUI.
fn setup_tracing(log_file: Option<&PathBuf>, verbose: u8) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(path) = log_file else {
        return Ok(None);
    };

    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("soshell={level}")));

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), PathBuf::from);
    let file = path
        .file_name()
        .map_or_else(|| "soshell.log".into(), |f| f.to_string_lossy().into_owned());
    let appender = tracing_appender::rolling::never(dir, file);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}

#[tokio::main]
async fn main() -> Result<()> {
    tui::install_hooks()?;

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => soshell_config::load_config_from(path)?,
        None => soshell_config::load_config_or_default(),
    };
    if let Some(breakpoint) = cli.breakpoint {
        config.breakpoint = breakpoint;
    }
    if let Some(log_file) = &cli.log_file {
        config.log_file = Some(log_file.clone());
    }
    config.validate()?;

    let _log_guard = setup_tracing(config.log_file.as_ref(), cli.verbose)?;

    let route = cli.route.clone().unwrap_or_else(|| config.default_route.clone());

    let mut tui = Tui::new()?;
    let (width, _) = tui.size()?;
    tui.enter()?;

    let result = App::new(config, &route, width)?.run(&mut tui).await;

    tui.exit();
    result
}
