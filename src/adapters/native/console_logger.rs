use crate::ports::LoggerPort;

/// Native logger forwarding to the `log` facade.
///
/// Output depends on the logger the host installs (`env_logger` and friends);
/// without one, messages are discarded.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerPort for ConsoleLogger {
    fn log(&self, message: &str) {
        log::info!("{message}");
    }

    fn error(&self, message: &str) {
        log::error!("{message}");
    }

    fn warn(&self, message: &str) {
        log::warn!("{message}");
    }

    fn debug(&self, message: &str) {
        log::debug!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_all_methods() {
        let logger = ConsoleLogger::new();
        logger.log("test log");
        logger.warn("test warn");
        logger.error("test error");
        logger.debug("test debug");
    }
}
