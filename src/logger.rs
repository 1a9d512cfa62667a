use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

struct StderrLogger;

static STDERR_LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{}: {}: {}",
                record.level(),
                record.module_path().unwrap_or_default(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

/// Install the stderr logger, `verbosity` 0 leaves logging off.
pub fn init(verbosity: u8) -> Result<(), SetLoggerError> {
    let level = match verbosity {
        0 => return Ok(()),
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    log::set_logger(&STDERR_LOGGER)?;
    log::set_max_level(level);

    Ok(())
}
