use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// [`Logger`] adapter emitting `tracing` events tagged with the owning component.
#[derive(Debug, Clone, Copy)]
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(component = self.component, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_component_name() {
        let logger = TracingLogger::new("menu_scan");
        assert_eq!(logger.component, "menu_scan");
    }

    #[test]
    fn should_log_without_subscriber_installed() {
        let logger: &dyn Logger = &TracingLogger::new("page_scanner");
        logger.info("page processed");
        logger.warn("page skipped");
        logger.error("task aborted");
        logger.debug("details");
    }
}
