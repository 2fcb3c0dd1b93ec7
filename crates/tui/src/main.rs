//! Terminal catalog entry point.
mod app;
mod config;
mod input;
mod presentation;
mod state;

use std::ffi::OsStr;
use std::path::Path;

use anyhow::Result;
use app::CatalogApp;
use config::CliConfig;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = CliConfig::from_env();

    // The TUI owns the terminal, so logs go to a file instead of stdout.
    let log_dir = match config.log_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let log_name = config
        .log_file
        .file_name()
        .unwrap_or_else(|| OsStr::new("reelshelf.log"));
    let appender = tracing_appender::rolling::never(log_dir, log_name);
    let (writer, _log_guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    CatalogApp::new(config).run()
}
