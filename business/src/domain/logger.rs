/// Logging port used by catalog, favorites and search use cases.
///
/// Advisory data-quality findings go to `warn`; document-level load
/// failures go to `error`. Neither ever aborts the operation.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
