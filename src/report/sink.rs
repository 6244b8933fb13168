/// Destination for the reporter's local diagnostics.
pub trait WarnSink {
    fn warn(&self, message: &str);
}

/// Forwards diagnostics to the `log` facade at warning level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl WarnSink for LogSink {
    fn warn(&self, message: &str) {
        log::warn!(target: "accesslog", "{}", message);
    }
}

impl<T: WarnSink + ?Sized> WarnSink for &T {
    fn warn(&self, message: &str) {
        (**self).warn(message)
    }
}
