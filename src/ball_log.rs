use cortex_m_semihosting::hprintln;
use log::{LevelFilter, Log, Metadata, Record};

// Semihosting halts the core for every line, keep per-frame traces out
const MAX_LEVEL: LevelFilter = LevelFilter::Info;

struct SemihostingLogger;

static LOGGER: SemihostingLogger = SemihostingLogger;

impl Log for SemihostingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= MAX_LEVEL
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // Ignore errors, there may be no debugger attached
            let _ = hprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

pub fn init() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(MAX_LEVEL);
    }
}
