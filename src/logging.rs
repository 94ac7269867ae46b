//! Browser Console Logger
//!
//! `log` backend that writes `[target] message` lines to the devtools console.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from(format_line(record.target(), &record.args().to_string()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug => web_sys::console::log_1(&line),
            Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// `requisition_ui::api::requests` -> `[api::requests] ...`
fn format_line(target: &str, message: &str) -> String {
    let target = target
        .split_once("::")
        .map(|(_, rest)| rest)
        .unwrap_or(target);
    format!("[{target}] {message}")
}

/// Install the console logger. Safe to call more than once.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_strips_crate() {
        assert_eq!(
            format_line("requisition_ui::api::requests", "loaded 3 requests"),
            "[api::requests] loaded 3 requests"
        );
        assert_eq!(format_line("app", "start"), "[app] start");
    }
}
