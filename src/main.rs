mod api;
mod app;
mod config;
mod error;
mod fetcher;
mod itinerary;
mod middleware;
mod model;
mod service;
mod util;

use anyhow::Context;
use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::OnceLock,
};
use tokio::net::TcpListener;
use tracing_appender::rolling;
use tracing_subscriber::{
    filter::filter_fn, fmt::layer as fmt_layer, prelude::*, EnvFilter, Registry,
};

const CRATE_TARGET: &str = "itinerary_scraper";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::AppConfig::from_env().context("failed to load configuration")?;
    setup_tracing(&config)?;
    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .context("invalid SERVER_BIND address")?;

    tracing::info!(%addr, "starting server");

    let app = app::build_router(&config)?;
    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app).await.context("server failed")?;

    Ok(())
}

fn setup_tracing(config: &config::AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.logging.level.as_deref().unwrap_or("info"))
    });

    let ours = filter_fn(|meta| meta.target().starts_with(CRATE_TARGET));
    let theirs = filter_fn(|meta| !meta.target().starts_with(CRATE_TARGET));

    let file_layer = match config.logging.file.as_deref() {
        Some(path) => {
            let (directory, file_name) = split_log_path(Path::new(path))?;
            std::fs::create_dir_all(&directory)?;
            let (writer, guard) =
                tracing_appender::non_blocking(rolling::never(directory, file_name));

            static FILE_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> =
                OnceLock::new();
            let _ = FILE_GUARD.set(guard);

            Some(
                fmt_layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(ours.clone()),
            )
        }
        None => None,
    };

    Registry::default()
        .with(env_filter)
        .with(
            fmt_layer()
                .with_file(true)
                .with_line_number(true)
                .with_filter(ours),
        )
        .with(fmt_layer().with_filter(theirs))
        .with(file_layer)
        .try_init()
        .context("failed to init tracing subscriber")?;

    Ok(())
}

/// Splits a log file path into the directory to create and the file name.
fn split_log_path(path: &Path) -> anyhow::Result<(PathBuf, String)> {
    let file_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| anyhow::anyhow!("invalid log file path {:?}", path))?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((directory, file_name.to_string()))
}
