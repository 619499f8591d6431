//! Status-code and status-label to display-color resolution.

use std::collections::BTreeMap;

use crate::{Interval, RuleTable};

/// Default pattern-to-color mapping, mirroring the default status table.
pub const DEFAULT_STATUS_COLORS: &[(&str, &str)] = &[
    ("0", "#808080"),        // gray: stopped / unreachable
    ("200-299", "#10b981"),  // green: success
    ("300-399", "#3b82f6"),  // blue: redirect
    ("400-499", "#ef4444"),  // red: client error
    ("500-599", "#f59e0b"),  // orange: server error
];

/// Color returned when resolution fails entirely.
pub const DEFAULT_COLOR: &str = "#808080";

/// Neutral color for a probe still in flight.
pub const DEFAULT_CHECKING_COLOR: &str = "#9ca3af";

/// Resolves a display color for a status code, a status label, or a probe
/// still in flight.
///
/// Configured tables (`theme.colors.serviceStatus`) mix three kinds of
/// keys: range patterns (`"200-299"`, `"404"`), literal status labels
/// (`"running"`), and the special `"checking"` entry. Keys are split at
/// build time; numeric resolution uses the same narrowest-match strategy
/// as [`crate::StatusMapper`].
#[derive(Debug, Clone)]
pub struct ColorResolver {
    ranges: RuleTable<String>,
    labels: BTreeMap<String, String>,
    checking: String,
    fallback: String,
}

impl ColorResolver {
    /// Build a resolver from configured `(key, color)` pairs.
    ///
    /// A configured `"0"` entry doubles as the total-failure fallback,
    /// matching how dashboards treat the unreachable color as the neutral
    /// default.
    pub fn from_table<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut range_entries = Vec::new();
        let mut labels = BTreeMap::new();
        let mut checking = DEFAULT_CHECKING_COLOR.to_string();
        let mut fallback = DEFAULT_COLOR.to_string();

        for (key, color) in entries {
            if key == "checking" {
                checking = color;
            } else if Interval::parse(&key).is_some() {
                if key.trim() == "0" {
                    fallback = color.clone();
                }
                range_entries.push((key, color));
            } else {
                labels.insert(key, color);
            }
        }

        Self {
            ranges: RuleTable::new(range_entries),
            labels,
            checking,
            fallback,
        }
    }

    /// Resolve the color for a status code.
    pub fn color_for_code(&self, code: u16) -> &str {
        self.ranges
            .resolve(code)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }

    /// Resolve the color for a literal status label.
    pub fn color_for_status(&self, label: &str) -> &str {
        self.labels
            .get(label)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }

    /// Color for a probe whose result is not yet known.
    pub fn checking_color(&self) -> &str {
        &self.checking
    }
}

impl Default for ColorResolver {
    fn default() -> Self {
        Self::from_table(
            DEFAULT_STATUS_COLORS
                .iter()
                .map(|(p, v)| (p.to_string(), v.to_string())),
        )
    }
}
