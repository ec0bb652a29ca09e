use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    debug_enabled: bool,
}

impl Logger {
    fn new(prefix: Option<String>, debug_enabled: bool) -> Self {
        Self { prefix, debug_enabled }
    }

    pub fn log(&self, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        if let Some(ref prefix) = self.prefix {
            println!("[{}][{}] {}", timestamp, prefix, message);
        } else {
            println!("[{}] {}", timestamp, message);
        }
    }

    pub fn debug(&self, message: &str) {
        if self.debug_enabled {
            self.log(&format!("DEBUG {}", message));
        }
    }
}

/// First call wins; later calls keep the existing logger.
pub fn init_logger(prefix: Option<String>, debug_enabled: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, debug_enabled));
}

// The engine is embedded in hosts that may never install a logger, so
// messages logged before `init_logger` are dropped.
pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    }
}

pub fn debug(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.debug(message);
    }
}

pub fn is_debug_enabled() -> bool {
    LOGGER.get().is_some_and(|logger| logger.debug_enabled)
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if $crate::logger::is_debug_enabled() {
            $crate::logger::debug(&format!($($arg)*))
        }
    };
}
