//! File-based logging initialization

use super::config::{DebugConfig, LOG_FILE_NAME};
use std::any::Any;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the file subscriber and the panic hook.
///
/// Log lines go to `<PAZA_LOG_DIR>/paza-terminal.log.<date>`, never to
/// stdout, so they cannot interleave with the prompt. Returns `None` (and
/// keeps running without logs) when the directory or subscriber cannot be
/// set up. Keep the guard alive until exit; dropping it flushes the writer.
pub fn init() -> Option<WorkerGuard> {
    let config = DebugConfig::from_env();

    if let Err(e) = std::fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: cannot create log directory {}: {e}", config.log_dir.display());
        return None;
    }

    let appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_file(config.is_debug_enabled())
                .with_line_number(config.is_debug_enabled()),
        )
        .try_init();
    if let Err(e) = installed {
        eprintln!("Warning: log subscriber already installed: {e}");
        return None;
    }

    tracing::info!(
        file = %config.log_file().display(),
        level = %config.log_level,
        "Logging initialized"
    );

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_default();
        tracing::error!(%location, message = %panic_message(info.payload()), "panic");
        previous(info);
    }));

    Some(guard)
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_message_payloads() {
        let literal: Box<dyn Any + Send> = Box::new("boom");
        let owned: Box<dyn Any + Send> = Box::new(String::from("owned boom"));
        let other: Box<dyn Any + Send> = Box::new(42u8);

        assert_eq!(panic_message(literal.as_ref()), "boom");
        assert_eq!(panic_message(owned.as_ref()), "owned boom");
        assert_eq!(panic_message(other.as_ref()), "non-string panic payload");
    }
}
