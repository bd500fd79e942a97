//! Console and optional file logging for the command-line tool.
//!
//! Console output goes to stderr so `info` output on stdout stays clean.
//! `RUST_LOG` overrides the level picked from `-v` flags.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter directives for the number of `-v` flags given.
pub fn default_directives(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "info,tilemap_editor=debug",
        _ => "trace",
    }
}

/// Install the global subscriber. The returned guard must live until exit so
/// buffered file output is flushed.
pub fn init(verbosity: u8, log_file: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let (file_layer, guard) = match log_file.and_then(open_log_file) {
        Some((writer, guard)) => (
            Some(fmt::layer().with_writer(writer).with_ansi(false)),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}

/// Append a run marker to `path` and hand back a background writer for it.
fn open_log_file(path: &Path) -> Option<(NonBlocking, WorkerGuard)> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let file_name = path.file_name()?;
    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!("warning: cannot create log directory {:?}: {}", dir, e);
        return None;
    }

    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(mut file) => {
            let started = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
            let _ = writeln!(
                file,
                "\n--- tilemap-editor {} run started {} ---",
                env!("CARGO_PKG_VERSION"),
                started
            );
        }
        Err(e) => {
            eprintln!("warning: cannot open log file {:?}: {}", path, e);
            return None;
        }
    }

    let appender = tracing_appender::rolling::never(dir, file_name);
    Some(tracing_appender::non_blocking(appender))
}
