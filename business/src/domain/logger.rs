/// Logging port injected into use cases and services.
/// Adapters decide where messages go; the domain never touches a global logger.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
