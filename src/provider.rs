//! Process-wide singleton accessors.
//!
//! The very first call to either accessor builds the global logger from that
//! call's arguments; every later call, to either accessor and with any
//! arguments, returns the same handle. First caller wins. Applications that
//! want independently configured loggers (say, text and JSON side by side)
//! should build them explicitly with [`Logger::builder`] instead.

use once_cell::sync::OnceCell;

use crate::formatter::FormatterKind;
use crate::level::Level;
use crate::logger::Logger;

static GLOBAL: OnceCell<Logger> = OnceCell::new();

/// Global text-format logger.
///
/// On the first accessor call in the process this builds the global handle
/// with text formatting, caller reporting, and the resolved `level`
/// (unrecognized or absent names resolve to `info`). Afterwards both
/// arguments and format are ignored and the existing handle is returned.
pub fn text_logger(level: Option<&str>) -> Logger {
    global(FormatterKind::Text, level)
}

/// Global JSON-format logger.
///
/// Same contract as [`text_logger`]: only the first accessor call in the
/// process configures anything, later calls get the stored handle as-is.
pub fn json_logger(level: Option<&str>) -> Logger {
    global(FormatterKind::Json, level)
}

// get_or_init gives the one-shot guarantee: at most one construction, and
// every caller observes the fully built handle.
fn global(formatter: FormatterKind, level: Option<&str>) -> Logger {
    GLOBAL
        .get_or_init(|| {
            Logger::builder()
                .formatter(formatter)
                .level(Level::resolve(level))
                .build()
        })
        .clone()
}
