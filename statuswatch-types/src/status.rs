//! Status-code to status-label mapping.

use crate::RuleTable;

/// Default pattern-to-label mapping applied when no `statusMapping`
/// configuration is supplied.
pub const DEFAULT_STATUS_MAPPING: &[(&str, &str)] = &[
    ("0", "stopped"),
    ("200-299", "running"),
    ("300-399", "running"),
    ("400-499", "error"),
    ("500-599", "warning"),
];

/// Label returned when no rule matches and no other fallback is configured.
pub const DEFAULT_STATUS_LABEL: &str = "stopped";

/// Maps an HTTP status code (or the sentinel `0` for unreachable) to a
/// semantic status label.
///
/// Resolution delegates to [`RuleTable`] (narrowest match first); when no
/// rule matches, the fallback label is returned. Mapping never fails.
///
/// # Example
///
/// ```rust
/// use statuswatch_types::StatusMapper;
///
/// let mapper = StatusMapper::default();
/// assert_eq!(mapper.map(204), "running");
/// assert_eq!(mapper.map(404), "error");
/// assert_eq!(mapper.map(0), "stopped");
/// ```
#[derive(Debug, Clone)]
pub struct StatusMapper {
    table: RuleTable<String>,
    fallback: String,
}

impl StatusMapper {
    /// Build a mapper from configured `(pattern, label)` pairs.
    ///
    /// `fallback` is the label returned when no rule matches; `None` uses
    /// the built-in default label.
    pub fn from_table<I>(entries: I, fallback: Option<String>) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            table: RuleTable::new(entries),
            fallback: fallback.unwrap_or_else(|| DEFAULT_STATUS_LABEL.to_string()),
        }
    }

    /// Map a status code to its label.
    pub fn map(&self, code: u16) -> &str {
        self.table
            .resolve(code)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }
}

impl Default for StatusMapper {
    fn default() -> Self {
        Self::from_table(
            DEFAULT_STATUS_MAPPING
                .iter()
                .map(|(p, v)| (p.to_string(), v.to_string())),
            None,
        )
    }
}
