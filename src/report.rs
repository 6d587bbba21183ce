/// Diagnostics sink for per-document and per-collection conditions. Injected
/// so the pipeline stays silent under test while the binary logs normally.
pub trait Reporter {
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}

/// Production sink: forwards to the `log` facade.
pub struct LogReporter;

impl Reporter for LogReporter {
    fn warning(&self, message: &str) {
        log::warn!("{}", message);
    }

    fn error(&self, message: &str) {
        log::error!("{}", message);
    }
}
