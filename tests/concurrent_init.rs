//! Concurrent first calls race the one-shot guard; exactly one construction
//! wins and every thread observes the same fully built handle.

use std::thread;

use simplelogger::{json_logger, text_logger, FormatterKind, Level, Logger};

#[test]
fn racing_first_calls_yield_one_handle() {
    let threads: Vec<_> = (0..16)
        .map(|i| {
            thread::spawn(move || {
                if i % 2 == 0 {
                    text_logger(Some("debug"))
                } else {
                    json_logger(Some("error"))
                }
            })
        })
        .collect();

    let loggers: Vec<Logger> = threads
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    let winner = &loggers[0];
    assert!(loggers
        .iter()
        .all(|logger| Logger::same_instance(winner, logger)));

    // The stored configuration is whichever racing call was admitted first.
    let stored = (winner.formatter(), winner.level());
    assert!(
        stored == (FormatterKind::Text, Level::Debug)
            || stored == (FormatterKind::Json, Level::Error),
        "unexpected winning configuration: {stored:?}"
    );
}
