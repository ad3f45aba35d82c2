//! Severity levels and threshold resolution.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Log severity, most severe first.
///
/// The derived ordering follows declaration order, so `Panic` is the smallest
/// variant and `Trace` the largest. A logger's level acts as a threshold: a
/// record is emitted when its level is at most the threshold (see
/// [`Level::admits`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Panic,
    Fatal,
    Error,
    Warning,
    Info,
    Debug,
    Trace,
}

impl Level {
    /// Threshold applied when no severity is requested.
    pub const DEFAULT: Level = Level::Info;

    /// Resolve a severity name.
    ///
    /// Lookup is case-sensitive; any name outside the table (including the
    /// empty string) resolves to `Info`. The fallback is deliberate and
    /// silent, never an error.
    pub fn from_name(name: &str) -> Level {
        match name {
            "panic" => Level::Panic,
            "fatal" => Level::Fatal,
            "error" => Level::Error,
            "warning" => Level::Warning,
            "info" => Level::Info,
            "debug" => Level::Debug,
            "trace" => Level::Trace,
            _ => Level::Info,
        }
    }

    /// Resolve an optional severity name, defaulting to `Info` when absent.
    pub(crate) fn resolve(name: Option<&str>) -> Level {
        name.map(Level::from_name).unwrap_or(Level::DEFAULT)
    }

    /// Lowercase name, matching the resolution table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Panic => "panic",
            Level::Fatal => "fatal",
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Trace => "trace",
        }
    }

    /// Whether a record at `level` passes `self` as the threshold.
    pub(crate) fn admits(self, level: Level) -> bool {
        level <= self
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const NAMES: [(&str, Level); 7] = [
        ("panic", Level::Panic),
        ("fatal", Level::Fatal),
        ("error", Level::Error),
        ("warning", Level::Warning),
        ("info", Level::Info),
        ("debug", Level::Debug),
        ("trace", Level::Trace),
    ];

    #[test]
    fn recognized_names_resolve_exactly() {
        for (name, level) in NAMES {
            assert_eq!(Level::from_name(name), level);
            assert_eq!(level.as_str(), name);
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(Level::from_name("Warning"), Level::Info);
        assert_eq!(Level::from_name("DEBUG"), Level::Info);
    }

    #[test]
    fn unknown_and_empty_names_fall_back_to_info() {
        assert_eq!(Level::from_name(""), Level::Info);
        assert_eq!(Level::from_name("verbose"), Level::Info);
        assert_eq!(Level::resolve(None), Level::Info);
        assert_eq!(Level::resolve(Some("nope")), Level::Info);
    }

    #[test]
    fn ordering_runs_from_panic_to_trace() {
        assert!(Level::Panic < Level::Fatal);
        assert!(Level::Error < Level::Info);
        assert!(Level::Debug < Level::Trace);
    }

    #[test]
    fn threshold_admits_at_most_its_own_severity() {
        assert!(Level::Info.admits(Level::Error));
        assert!(Level::Info.admits(Level::Info));
        assert!(!Level::Info.admits(Level::Debug));
        assert!(Level::Trace.admits(Level::Trace));
        assert!(!Level::Panic.admits(Level::Fatal));
    }

    proptest! {
        #[test]
        fn arbitrary_names_never_fail(name in "\\PC*") {
            let known = NAMES.iter().any(|(n, _)| *n == name);
            prop_assume!(!known);
            prop_assert_eq!(Level::from_name(&name), Level::Info);
        }
    }
}
