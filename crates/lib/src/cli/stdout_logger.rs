use log::{Log, Metadata, Record};

/// Logger printing every enabled record to stdout with its source location.
pub(crate) struct StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        println!(
            "{file}:{line}: {level}: {args}",
            file = record.file().unwrap_or_default(),
            line = record.line().unwrap_or_default(),
            level = record.level(),
            args = record.args(),
        );
    }

    fn flush(&self) {}
}
