//! Tracing configuration for the catalog viewer
//!
//! ## Architecture / 架构
//!
//! - **Console**: stderr only, warnings and above; stdout belongs to the views
//! - **File**: `<data_local_dir>/catalog-viewer/logs/catalog-viewer.log`,
//!   everything the env filter lets through
//! - **Environment-aware**: debug in development builds, info in release,
//!   `RUST_LOG` overrides both

use std::{fs, io, sync::OnceLock};

use anyhow::Context;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{
    filter::LevelFilter, fmt, fmt::writer::BoxMakeWriter, prelude::*, registry, EnvFilter,
};

use super::app_paths::AppPaths;

const LOG_FILE_NAME: &str = "catalog-viewer.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// ## Behavior / 行为
/// - **Development**: debug level for the workspace crates
/// - **Production**: info level for the workspace crates
/// - HTTP stack crates stay at warn either way
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let app_level = if is_dev { "debug" } else { "info" };
    let mut directives = vec![app_level.to_string()];
    directives.extend(
        ["cv_core", "cv_app", "cv_infra", "cv_shell", "catalog_viewer"]
            .iter()
            .map(|krate| format!("{krate}={app_level}")),
    );
    directives.extend(
        ["hyper=warn", "hyper_util=warn", "reqwest=warn", "rustls=warn"]
            .iter()
            .map(|d| d.to_string()),
    );
    directives
}

/// Initialize the tracing subscriber
///
/// Call once from `main`, before the configuration is loaded so that config
/// resolution is itself traced. File logging failures are reported on stderr
/// and logging continues on the console only.
///
/// ## Errors / 错误
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives.join(",")));

    let console_writer: BoxMakeWriter = BoxMakeWriter::new(io::stderr);
    let file_writer = match build_file_writer() {
        Ok(writer) => Some(writer),
        Err(err) => {
            eprintln!("Failed to initialize file logging, falling back to stderr: {err:#}");
            None
        }
    };

    let console_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(console_writer)
        .with_filter(LevelFilter::WARN);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer() -> anyhow::Result<NonBlocking> {
    let logs_dir = AppPaths::resolve()
        .logs_dir
        .context("No local data directory on this platform")?;
    fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create log directory: {}", logs_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_directives() {
        let dev_directives = build_filter_directives(true);
        assert_eq!(dev_directives[0], "debug");
        assert!(dev_directives.contains(&"cv_infra=debug".to_string()));
        assert!(dev_directives.contains(&"cv_app=debug".to_string()));
        assert!(dev_directives.contains(&"reqwest=warn".to_string()));

        let prod_directives = build_filter_directives(false);
        assert_eq!(prod_directives[0], "info");
        assert!(prod_directives.contains(&"cv_infra=info".to_string()));
        assert!(prod_directives.contains(&"hyper=warn".to_string()));
    }

    #[test]
    fn test_directives_parse_as_env_filter() {
        for is_dev in [true, false] {
            let joined = build_filter_directives(is_dev).join(",");
            assert!(EnvFilter::try_new(joined).is_ok());
        }
    }
}
