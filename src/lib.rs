//! # simplelogger
//!
//! Leveled logging with two output formats, caller reporting, and a one-shot
//! process-wide handle.
//!
//! ## Components
//! - `level`: seven-step severity scale with silent `info` fallback
//! - `formatter`: `key=value` text lines or pretty-printed JSON records
//! - `logger`: the shared [`Logger`] handle, builder, and sinks
//! - `config`: serde-friendly [`LoggerConfig`] for application config trees
//! - `provider`: [`text_logger`]/[`json_logger`] global accessors
//!
//! ## Two ways to get a logger
//!
//! The global accessors keep the original first-caller-wins contract: the
//! first call fixes level and format for the whole process. The builder
//! produces independently owned handles for composition-root wiring.
//!
//! ```
//! use simplelogger::{text_logger, FormatterKind, Level, Logger};
//!
//! // Singleton surface: the first caller decides level and format.
//! let log = text_logger(Some("debug"));
//! log.info("starting up");
//!
//! // Explicit surface: independently owned handles.
//! let json = Logger::builder()
//!     .formatter(FormatterKind::Json)
//!     .level(Level::Debug)
//!     .build();
//! json.with_field("port", 8080).info("listening");
//! ```

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod config;
mod error;
mod formatter;
mod level;
mod logger;
mod provider;

pub use config::LoggerConfig;
pub use error::BuildError;
pub use formatter::FormatterKind;
pub use formatter::TIMESTAMP_FORMAT;
pub use level::Level;
pub use logger::Entry;
pub use logger::Logger;
pub use logger::LoggerBuilder;
pub use logger::Sink;
pub use provider::json_logger;
pub use provider::text_logger;
