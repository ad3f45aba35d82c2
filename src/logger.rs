//! The logger handle: construction, sinks, and record emission.

use std::fmt;
use std::io::{self, Write};
use std::panic::Location;
use std::sync::Arc;

use chrono::Local;
use parking_lot::Mutex;
use serde_json::Value;

use crate::config::LoggerConfig;
use crate::error::BuildError;
use crate::formatter::{Caller, FormatterKind, Record};
use crate::level::Level;

/// Destination for rendered records.
#[derive(Clone)]
pub enum Sink {
    Stdout,
    Stderr,
    /// Caller-supplied writer behind a mutex so the handle stays `Sync`.
    Writer(Arc<Mutex<Box<dyn Write + Send>>>),
}

impl Sink {
    /// Wrap an arbitrary writer as a sink.
    pub fn writer<W: Write + Send + 'static>(writer: W) -> Sink {
        Sink::Writer(Arc::new(Mutex::new(Box::new(writer))))
    }

    // Best effort: a logger must not fail its host application, so write
    // errors are swallowed.
    fn write(&self, rendered: &str) {
        let _ = match self {
            Sink::Stdout => io::stdout().lock().write_all(rendered.as_bytes()),
            Sink::Stderr => io::stderr().lock().write_all(rendered.as_bytes()),
            Sink::Writer(writer) => writer.lock().write_all(rendered.as_bytes()),
        };
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Stdout => f.write_str("Sink::Stdout"),
            Sink::Stderr => f.write_str("Sink::Stderr"),
            Sink::Writer(_) => f.write_str("Sink::Writer(..)"),
        }
    }
}

#[derive(Debug)]
struct Inner {
    formatter: FormatterKind,
    level: Level,
    report_caller: bool,
    sink: Sink,
}

/// Shared logging handle.
///
/// Cloning is cheap and every clone refers to the same underlying logger;
/// [`Logger::same_instance`] compares identity. Handles are immutable after
/// construction: level, format, and sink are fixed for their lifetime.
///
/// The seven severity-named methods each record a message at that severity.
/// `fatal` and `panic` are severity names only; neither terminates the
/// process — whether a condition is worth aborting over stays with the
/// caller.
#[derive(Clone, Debug)]
pub struct Logger {
    inner: Arc<Inner>,
}

impl Logger {
    /// Start building an explicitly owned logger.
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// Build a logger from string-typed configuration.
    ///
    /// The level name resolves with the usual silent `Info` fallback; the
    /// formatter name must be `"text"` or `"json"` or construction fails
    /// with [`BuildError::UnknownFormatter`].
    pub fn from_config(config: &LoggerConfig) -> Result<Logger, BuildError> {
        let formatter = FormatterKind::from_name(&config.formatter)?;
        Ok(Logger::builder()
            .formatter(formatter)
            .level(Level::from_name(&config.level))
            .report_caller(config.report_caller)
            .build())
    }

    /// Severity threshold this handle was built with.
    pub fn level(&self) -> Level {
        self.inner.level
    }

    /// Output format this handle was built with.
    pub fn formatter(&self) -> FormatterKind {
        self.inner.formatter
    }

    /// Whether records carry their emit call site.
    pub fn reports_caller(&self) -> bool {
        self.inner.report_caller
    }

    /// Whether a record at `level` would be emitted.
    pub fn enabled(&self, level: Level) -> bool {
        self.inner.level.admits(level)
    }

    /// Whether two handles share the same underlying logger.
    pub fn same_instance(a: &Logger, b: &Logger) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    /// Attach one structured field, returning an [`Entry`] for emission.
    pub fn with_field(&self, key: impl Into<String>, value: impl Into<Value>) -> Entry {
        Entry {
            logger: self.clone(),
            fields: vec![(key.into(), value.into())],
        }
    }

    /// Attach several structured fields at once.
    pub fn with_fields<I, K, V>(&self, fields: I) -> Entry
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Entry {
            logger: self.clone(),
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    #[track_caller]
    pub fn trace(&self, message: &str) {
        self.emit(Level::Trace, message, &[]);
    }

    #[track_caller]
    pub fn debug(&self, message: &str) {
        self.emit(Level::Debug, message, &[]);
    }

    #[track_caller]
    pub fn info(&self, message: &str) {
        self.emit(Level::Info, message, &[]);
    }

    #[track_caller]
    pub fn warning(&self, message: &str) {
        self.emit(Level::Warning, message, &[]);
    }

    #[track_caller]
    pub fn error(&self, message: &str) {
        self.emit(Level::Error, message, &[]);
    }

    /// Record at `Fatal` severity. Does not exit the process.
    #[track_caller]
    pub fn fatal(&self, message: &str) {
        self.emit(Level::Fatal, message, &[]);
    }

    /// Record at `Panic` severity. Does not unwind.
    #[track_caller]
    pub fn panic(&self, message: &str) {
        self.emit(Level::Panic, message, &[]);
    }

    /// Record a message at an explicit severity.
    #[track_caller]
    pub fn log(&self, level: Level, message: &str) {
        self.emit(level, message, &[]);
    }

    #[track_caller]
    fn emit(&self, level: Level, message: &str, fields: &[(String, Value)]) {
        if !self.enabled(level) {
            return;
        }
        // Location must be taken directly in the #[track_caller] chain, not
        // inside a closure.
        let location = Location::caller();
        let caller = self.inner.report_caller.then(|| Caller {
            file: location.file(),
            line: location.line(),
        });
        let record = Record {
            timestamp: Local::now(),
            level,
            caller,
            message,
            fields,
        };
        self.inner.sink.write(&self.inner.formatter.render(&record));
    }
}

/// A logger with pending structured fields.
///
/// Produced by [`Logger::with_field`] / [`Logger::with_fields`]; exposes the
/// same severity-named methods as the logger itself.
#[derive(Clone, Debug)]
pub struct Entry {
    logger: Logger,
    fields: Vec<(String, Value)>,
}

impl Entry {
    /// Attach one more field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Entry {
        self.fields.push((key.into(), value.into()));
        self
    }

    #[track_caller]
    pub fn trace(&self, message: &str) {
        self.logger.emit(Level::Trace, message, &self.fields);
    }

    #[track_caller]
    pub fn debug(&self, message: &str) {
        self.logger.emit(Level::Debug, message, &self.fields);
    }

    #[track_caller]
    pub fn info(&self, message: &str) {
        self.logger.emit(Level::Info, message, &self.fields);
    }

    #[track_caller]
    pub fn warning(&self, message: &str) {
        self.logger.emit(Level::Warning, message, &self.fields);
    }

    #[track_caller]
    pub fn error(&self, message: &str) {
        self.logger.emit(Level::Error, message, &self.fields);
    }

    #[track_caller]
    pub fn fatal(&self, message: &str) {
        self.logger.emit(Level::Fatal, message, &self.fields);
    }

    #[track_caller]
    pub fn panic(&self, message: &str) {
        self.logger.emit(Level::Panic, message, &self.fields);
    }

    #[track_caller]
    pub fn log(&self, level: Level, message: &str) {
        self.logger.emit(level, message, &self.fields);
    }
}

/// Type-safe logger construction.
///
/// The formatter is an enum here, so the invalid-formatter defect the
/// string-typed [`Logger::from_config`] path guards against is
/// unrepresentable.
#[derive(Debug)]
pub struct LoggerBuilder {
    formatter: FormatterKind,
    level: Level,
    report_caller: bool,
    sink: Sink,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self {
            formatter: FormatterKind::Text,
            level: Level::DEFAULT,
            report_caller: true,
            sink: Sink::Stdout,
        }
    }
}

impl LoggerBuilder {
    pub fn formatter(mut self, formatter: FormatterKind) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Resolve a severity name with the usual silent `Info` fallback.
    pub fn level_name(self, name: &str) -> Self {
        self.level(Level::from_name(name))
    }

    pub fn report_caller(mut self, enabled: bool) -> Self {
        self.report_caller = enabled;
        self
    }

    pub fn sink(mut self, sink: Sink) -> Self {
        self.sink = sink;
        self
    }

    pub fn build(self) -> Logger {
        Logger {
            inner: Arc::new(Inner {
                formatter: self.formatter,
                level: self.level,
                report_caller: self.report_caller,
                sink: self.sink,
            }),
        }
    }
}
