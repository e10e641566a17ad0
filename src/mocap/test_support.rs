// Helpers shared by the unit tests.
use std::cell::RefCell;
use std::sync::Once;
use log::{Level, LevelFilter, Log, Metadata, Record};

thread_local! {
    static CAPTURED: RefCell<Option<Vec<String>>> = RefCell::new(None);
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn
    }
    fn log(&self, record: &Record) {
        if record.level() > Level::Warn {
            return;
        }
        CAPTURED.with(|slot| {
            if let Some(lines) = slot.borrow_mut().as_mut() {
                lines.push(record.args().to_string());
            }
        });
    }
    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Runs `f` and returns its result with the warnings it logged on this thread.
pub fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Warn);
    });
    CAPTURED.with(|slot| *slot.borrow_mut() = Some(Vec::new()));
    let out = f();
    let lines = CAPTURED
        .with(|slot| slot.borrow_mut().take())
        .unwrap_or_default();
    (out, lines)
}

pub fn frame_text(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
