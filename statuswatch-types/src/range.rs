//! Range-pattern parsing and rule tables.
//!
//! Configuration keys classify numeric status codes using either a single
//! value (`"0"`, `"404"`) or a dash-separated range (`"200-299"`). Tables
//! resolve a code to the narrowest matching rule, so an operator can
//! override a broad default (`"200-299"`) with a specific exception
//! (`"204"`) without any priority metadata.

/// An inclusive interval of status codes parsed from a range pattern.
///
/// Single-value patterns cover exactly that value. Dash patterns `a-b`
/// cover `a..=b+1`: the historical configuration format widened the upper
/// bound by one, and existing config files rely on it, so `"200-300"`
/// matches 200, 300 and 301. Single values deliberately do not inherit
/// the widening: `"204"` matches 204 only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    lo: u32,
    hi: u32,
}

impl Interval {
    /// Parse a range pattern.
    ///
    /// Accepts `^\d+$` or `^\d+-\d+$`; any other shape (including a
    /// reversed range) yields `None`. Callers drop unparsable patterns
    /// silently rather than surfacing an error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statuswatch_types::Interval;
    ///
    /// let range = Interval::parse("200-299").unwrap();
    /// assert!(range.contains(200));
    /// assert!(range.contains(300)); // widened upper bound
    /// assert!(!range.contains(301));
    ///
    /// assert!(Interval::parse("abc").is_none());
    /// assert!(Interval::parse("300-200").is_none());
    /// ```
    pub fn parse(pattern: &str) -> Option<Self> {
        let pattern = pattern.trim();

        if let Some((lo, hi)) = pattern.split_once('-') {
            let lo = parse_bound(lo)?;
            let hi = parse_bound(hi)?.checked_add(1)?;
            if lo > hi {
                return None;
            }
            Some(Self { lo, hi })
        } else {
            let n = parse_bound(pattern)?;
            Some(Self { lo: n, hi: n })
        }
    }

    /// Whether `code` falls inside this interval (bounds inclusive).
    pub fn contains(&self, code: u32) -> bool {
        self.lo <= code && code <= self.hi
    }

    /// Interval width, used to order rules narrowest-first.
    pub fn width(&self) -> u32 {
        self.hi - self.lo
    }
}

/// Parse one bound: non-empty, ASCII digits only.
fn parse_bound(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// A single classification rule: a pattern and the value it maps to.
#[derive(Debug, Clone)]
pub struct RangeRule<T> {
    /// The original pattern string, kept for display and debugging.
    pub pattern: String,
    /// The parsed interval.
    pub interval: Interval,
    /// The mapped value (a status label, a color, ...).
    pub value: T,
}

/// An immutable table of range rules, resolved narrowest-match-first.
///
/// Built once from configuration and shared read-only for the lifetime of
/// a polling session. Ties in width are broken by the insertion order of
/// the source mapping (stable sort).
#[derive(Debug, Clone, Default)]
pub struct RuleTable<T> {
    rules: Vec<RangeRule<T>>,
}

impl<T> RuleTable<T> {
    /// Build a table from ordered `(pattern, value)` pairs.
    ///
    /// Malformed patterns are dropped; they never fail the build.
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, T)>,
    {
        let mut rules: Vec<RangeRule<T>> = entries
            .into_iter()
            .filter_map(|(pattern, value)| {
                Interval::parse(&pattern).map(|interval| RangeRule {
                    pattern,
                    interval,
                    value,
                })
            })
            .collect();

        // Stable: equal widths keep insertion order
        rules.sort_by_key(|rule| rule.interval.width());

        Self { rules }
    }

    /// Resolve a status code to the value of the narrowest matching rule.
    pub fn resolve(&self, code: u16) -> Option<&T> {
        let code = u32::from(code);
        self.rules
            .iter()
            .find(|rule| rule.interval.contains(code))
            .map(|rule| &rule.value)
    }

    /// Number of valid rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table holds no valid rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
