use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    verbose: bool,
}

impl Logger {
    fn new(prefix: Option<String>, verbose: bool) -> Self {
        Self { prefix, verbose }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        eprintln!("{}", self.format_line(file, line, message));
    }

    fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!(
                "[{}][{}][{}:{}] {}",
                timestamp, prefix, file_name, line, message
            ),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }
}

pub fn init_logger(prefix: Option<String>, verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, verbose));
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

/// Debug lines are dropped silently when the logger is missing or quiet,
/// so library code can log from tests and benches.
pub fn debug_enabled() -> bool {
    LOGGER.get().is_some_and(Logger::is_verbose)
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if $crate::logger::debug_enabled() {
            $crate::logger::log(file!(), line!(), &format!($($arg)*))
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_strips_directories() {
        let logger = Logger::new(Some("Client".to_string()), false);
        let line = logger.format_line("client/src/runner.rs", 42, "hello");
        assert!(line.ends_with("[Client][runner.rs:42] hello"));
    }

    #[test]
    fn test_format_line_without_prefix() {
        let logger = Logger::new(None, true);
        let line = logger.format_line("C:\\repo\\bot.rs", 7, "picked");
        assert!(line.ends_with("[bot.rs:7] picked"));
        assert!(logger.is_verbose());
    }
}
