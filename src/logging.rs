use std::path::PathBuf;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

/// Initialise logging. The default level is `info`; with `debug` set the level
/// becomes `debug` and can be overridden via the `RUST_LOG` environment
/// variable. When `file` is given, output is also appended there.
///
/// Calling this more than once keeps the first subscriber.
pub fn init(debug: bool, file: Option<PathBuf>) {
    // Without debug logging the level is forced to `info` so a stray
    // `RUST_LOG` in the user's environment cannot turn on verbose output.
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let appender = file.as_ref().and_then(|path| {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        let name = path.file_name()?.to_owned();
        if let Err(e) = std::fs::create_dir_all(&dir) {
            eprintln!("cannot create log directory {}: {e}", dir.display());
            return None;
        }
        Some(tracing_appender::rolling::never(dir, name))
    });

    let result = match appender {
        Some(appender) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(std::io::stdout.and(appender))
            .try_init(),
        None => tracing_subscriber::fmt().with_env_filter(filter).try_init(),
    };
    if result.is_ok() {
        tracing::debug!("logging initialised");
    }
}
