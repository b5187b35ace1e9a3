//! Browser logging. Events go through `tracing` and a `fmt` subscriber whose
//! writer forwards each formatted line to the matching `console` method, so
//! levels stay filterable in the devtools.

use super::AppError;
use tracing::level_filters::LevelFilter;

/// Parses a log level name (`error`..`trace`, `off`) or verbosity (`0`..=`4`).
pub fn parse_level(level: &str) -> Result<LevelFilter, AppError> {
    let normalized = level.trim().to_lowercase();
    if let Ok(verbosity) = normalized.parse::<u8>() {
        return match verbosity {
            0 => Ok(LevelFilter::ERROR),
            1 => Ok(LevelFilter::WARN),
            2 => Ok(LevelFilter::INFO),
            3 => Ok(LevelFilter::DEBUG),
            4 => Ok(LevelFilter::TRACE),
            _ => Err(AppError::Config(format!(
                "log verbosity must be between 0 and 4, got {verbosity}"
            ))),
        };
    }

    match normalized.as_str() {
        "off" => Ok(LevelFilter::OFF),
        "error" => Ok(LevelFilter::ERROR),
        "warn" => Ok(LevelFilter::WARN),
        "info" => Ok(LevelFilter::INFO),
        "debug" => Ok(LevelFilter::DEBUG),
        "trace" => Ok(LevelFilter::TRACE),
        _ => Err(AppError::Config(format!("invalid log level: {level}"))),
    }
}

/// Installs the console subscriber. Invalid levels fall back to `info`.
#[cfg(target_arch = "wasm32")]
pub fn init(level: &str) {
    let (filter, invalid) = match parse_level(level) {
        Ok(filter) => (filter, None),
        Err(err) => (LevelFilter::INFO, Some(err)),
    };

    // A second init (hot reload) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_writer(console::ConsoleMakeWriter)
        .without_time()
        .with_target(false)
        .with_max_level(filter)
        .try_init();

    if let Some(err) = invalid {
        tracing::warn!(%err, "using default log level");
    }
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;
    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    pub struct ConsoleMakeWriter;

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter::new(Level::INFO)
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter::new(*meta.level())
        }
    }

    /// Buffers one formatted event and emits it on drop.
    pub struct ConsoleWriter {
        level: Level,
        buffer: Vec<u8>,
    }

    impl ConsoleWriter {
        fn new(level: Level) -> Self {
            Self {
                level,
                buffer: Vec::new(),
            }
        }
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            if self.buffer.is_empty() {
                return;
            }
            let line = String::from_utf8_lossy(&self.buffer);
            let message = JsValue::from_str(line.trim_end());
            match self.level {
                Level::ERROR => web_sys::console::error_1(&message),
                Level::WARN => web_sys::console::warn_1(&message),
                Level::INFO => web_sys::console::info_1(&message),
                Level::DEBUG => web_sys::console::log_1(&message),
                _ => web_sys::console::debug_1(&message),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_level;
    use crate::app_lib::AppError;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn parse_level_accepts_names_case_insensitively() {
        assert_eq!(parse_level("error"), Ok(LevelFilter::ERROR));
        assert_eq!(parse_level("WARN"), Ok(LevelFilter::WARN));
        assert_eq!(parse_level(" Info "), Ok(LevelFilter::INFO));
        assert_eq!(parse_level("debug"), Ok(LevelFilter::DEBUG));
        assert_eq!(parse_level("trace"), Ok(LevelFilter::TRACE));
        assert_eq!(parse_level("off"), Ok(LevelFilter::OFF));
    }

    #[test]
    fn parse_level_accepts_verbosity_numbers() {
        assert_eq!(parse_level("0"), Ok(LevelFilter::ERROR));
        assert_eq!(parse_level("2"), Ok(LevelFilter::INFO));
        assert_eq!(parse_level("4"), Ok(LevelFilter::TRACE));
    }

    #[test]
    fn parse_level_rejects_unknown_values() {
        assert!(matches!(parse_level("5"), Err(AppError::Config(_))));
        assert!(matches!(parse_level("verbose"), Err(AppError::Config(_))));
        assert!(matches!(parse_level(""), Err(AppError::Config(_))));
    }
}
