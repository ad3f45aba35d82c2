//! Logger configuration for embedding in an application's config tree.

use serde::{Deserialize, Serialize};

/// String-typed knobs for [`Logger::from_config`](crate::Logger::from_config).
///
/// Every field has a default, so a partial (or absent) `logging` section in
/// an application's configuration deserializes cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Severity name; unrecognized names resolve to `info`.
    pub level: String,
    /// Output format, `"text"` or `"json"`.
    pub formatter: String,
    /// Attach the emit call site to each record.
    pub report_caller: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            formatter: "text".into(),
            report_caller: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FormatterKind, Level, Logger};

    #[test]
    fn partial_sections_fill_with_defaults() {
        let config: LoggerConfig = serde_json::from_str(r#"{"formatter": "json"}"#).unwrap();
        assert_eq!(config.formatter, "json");
        assert_eq!(config.level, "info");
        assert!(config.report_caller);

        let empty: LoggerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, LoggerConfig::default());
    }

    #[test]
    fn default_config_builds_a_text_info_logger() {
        let logger = Logger::from_config(&LoggerConfig::default()).unwrap();
        assert_eq!(logger.formatter(), FormatterKind::Text);
        assert_eq!(logger.level(), Level::Info);
        assert!(logger.reports_caller());
    }
}
