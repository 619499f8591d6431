//! Placeholder substitution for dynamic text fields.
//!
//! Config text may embed `{token}` placeholders that are resolved against
//! the current instant and, when available, a page URL. Unrecognized
//! tokens are left verbatim so typos degrade visibly instead of silently.
//!
//! Date/time tokens: `{year}`, `{month}`, `{monthName}`, `{monthShort}`,
//! `{day}`, `{weekday}`, `{weekdayShort}`, `{date}`, `{dateUS}`,
//! `{dateEU}`, `{time}`, `{time12}`, `{hour}`, `{hour12}`, `{minute}`,
//! `{second}`, `{ampm}`. Numeric fields are zero-padded to two digits
//! except `{year}` and `{hour12}`.
//!
//! Page tokens (resolved only when a page URL is configured): `{url}`,
//! `{hostname}`, `{host}`, `{pathname}`, `{origin}`, `{protocol}`,
//! `{port}`, `{search}`, `{hash}`.

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};
use url::Url;

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const MONTH_SHORT_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];

const WEEKDAY_SHORT_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Substitutes `{token}` placeholders in arbitrary text.
///
/// The engine is a small immutable value: the optional page context is
/// fixed at construction, the clock is read per call (or supplied
/// explicitly, which is what tests do).
///
/// # Example
///
/// ```rust
/// use statuswatch::PlaceholderEngine;
///
/// let engine = PlaceholderEngine::new();
/// let text = engine.substitute("Status for {date}");
/// assert!(!text.contains("{date}"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlaceholderEngine {
    page: Option<Url>,
}

impl PlaceholderEngine {
    /// Engine without a page context; page tokens stay verbatim.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a page context for `{url}`-family tokens.
    pub fn with_page_url(page: Url) -> Self {
        Self { page: Some(page) }
    }

    /// Substitute recognized tokens against the current local time.
    pub fn substitute(&self, text: &str) -> String {
        self.substitute_at(text, &Local::now())
    }

    /// Substitute recognized tokens against a fixed instant.
    pub fn substitute_at<Tz: TimeZone>(&self, text: &str, now: &DateTime<Tz>) -> String {
        if !text.contains('{') {
            return text.to_string();
        }

        let mut out = text.to_string();
        for (token, value) in date_time_values(now) {
            replace_token(&mut out, token, &value);
        }
        if let Some(page) = &self.page {
            for (token, value) in page_values(page) {
                replace_token(&mut out, token, &value);
            }
        }
        out
    }
}

/// Replace every occurrence of `{token}` with `value`.
fn replace_token(text: &mut String, token: &str, value: &str) {
    let needle = format!("{{{token}}}");
    if text.contains(&needle) {
        *text = text.replace(&needle, value);
    }
}

fn date_time_values<Tz: TimeZone>(now: &DateTime<Tz>) -> Vec<(&'static str, String)> {
    let year = now.year();
    let month = now.month();
    let day = now.day();
    let hour = now.hour();
    let minute = now.minute();
    let second = now.second();
    let month_index = now.month0() as usize;
    let weekday_index = now.weekday().num_days_from_sunday() as usize;
    let (is_pm, hour12) = now.hour12();
    let ampm = if is_pm { "PM" } else { "AM" };

    vec![
        ("year", year.to_string()),
        ("month", format!("{month:02}")),
        ("monthName", MONTH_NAMES[month_index].to_string()),
        ("monthShort", MONTH_SHORT_NAMES[month_index].to_string()),
        ("day", format!("{day:02}")),
        ("weekday", WEEKDAY_NAMES[weekday_index].to_string()),
        ("weekdayShort", WEEKDAY_SHORT_NAMES[weekday_index].to_string()),
        ("date", format!("{year}-{month:02}-{day:02}")),
        ("dateUS", format!("{month:02}/{day:02}/{year}")),
        ("dateEU", format!("{day:02}/{month:02}/{year}")),
        ("time", format!("{hour:02}:{minute:02}:{second:02}")),
        ("time12", format!("{hour12}:{minute:02} {ampm}")),
        ("hour", format!("{hour:02}")),
        ("hour12", hour12.to_string()),
        ("minute", format!("{minute:02}")),
        ("second", format!("{second:02}")),
        ("ampm", ampm.to_string()),
    ]
}

fn page_values(page: &Url) -> Vec<(&'static str, String)> {
    vec![
        ("url", page.as_str().to_string()),
        ("hostname", page.host_str().unwrap_or_default().to_string()),
        (
            "host",
            match (page.host_str(), page.port()) {
                (Some(host), Some(port)) => format!("{host}:{port}"),
                (Some(host), None) => host.to_string(),
                (None, _) => String::new(),
            },
        ),
        ("pathname", page.path().to_string()),
        ("origin", page.origin().ascii_serialization()),
        ("protocol", format!("{}:", page.scheme())),
        (
            "port",
            page.port().map(|p| p.to_string()).unwrap_or_default(),
        ),
        (
            "search",
            page.query().map(|q| format!("?{q}")).unwrap_or_default(),
        ),
        (
            "hash",
            page.fragment().map(|f| format!("#{f}")).unwrap_or_default(),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    /// 2024-03-05 14:30:45, a Tuesday.
    fn fixed_clock() -> DateTime<Utc> {
        let naive = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(14, 30, 45)
            .unwrap();
        Utc.from_utc_datetime(&naive)
    }

    #[test]
    fn substitutes_year_on_fixed_clock() {
        let engine = PlaceholderEngine::new();
        let out = engine.substitute_at("Built in {year}", &fixed_clock());
        assert_eq!(out, "Built in 2024");
    }

    #[test]
    fn substitutes_date_and_time_families() {
        let engine = PlaceholderEngine::new();
        let now = fixed_clock();

        assert_eq!(engine.substitute_at("{date}", &now), "2024-03-05");
        assert_eq!(engine.substitute_at("{dateUS}", &now), "03/05/2024");
        assert_eq!(engine.substitute_at("{dateEU}", &now), "05/03/2024");
        assert_eq!(engine.substitute_at("{time}", &now), "14:30:45");
        assert_eq!(engine.substitute_at("{time12}", &now), "2:30 PM");
        assert_eq!(engine.substitute_at("{monthName}", &now), "March");
        assert_eq!(engine.substitute_at("{monthShort}", &now), "Mar");
        assert_eq!(engine.substitute_at("{weekday}", &now), "Tuesday");
        assert_eq!(engine.substitute_at("{weekdayShort}", &now), "Tue");
        assert_eq!(engine.substitute_at("{hour12}", &now), "2");
        assert_eq!(engine.substitute_at("{ampm}", &now), "PM");
    }

    #[test]
    fn zero_pads_two_digit_fields() {
        let naive = NaiveDate::from_ymd_opt(2024, 1, 7)
            .unwrap()
            .and_hms_opt(8, 5, 9)
            .unwrap();
        let now = Utc.from_utc_datetime(&naive);
        let engine = PlaceholderEngine::new();

        assert_eq!(
            engine.substitute_at("{month}/{day} {hour}:{minute}:{second}", &now),
            "01/07 08:05:09"
        );
    }

    #[test]
    fn midnight_is_twelve_am() {
        let naive = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(0, 15, 0)
            .unwrap();
        let now = Utc.from_utc_datetime(&naive);
        let engine = PlaceholderEngine::new();

        assert_eq!(engine.substitute_at("{time12}", &now), "12:15 AM");
    }

    #[test]
    fn unrecognized_tokens_stay_verbatim() {
        let engine = PlaceholderEngine::new();
        let out = engine.substitute_at("hello {nope} {year}", &fixed_clock());
        assert_eq!(out, "hello {nope} 2024");
    }

    #[test]
    fn month_token_does_not_eat_month_name() {
        let engine = PlaceholderEngine::new();
        let out = engine.substitute_at("{month} {monthName}", &fixed_clock());
        assert_eq!(out, "03 March");
    }

    #[test]
    fn page_tokens_with_context() {
        let page = Url::parse("https://lab.example.com:8443/status?tab=all#top").unwrap();
        let engine = PlaceholderEngine::with_page_url(page);
        let now = fixed_clock();

        assert_eq!(
            engine.substitute_at("{hostname}", &now),
            "lab.example.com"
        );
        assert_eq!(
            engine.substitute_at("{host}", &now),
            "lab.example.com:8443"
        );
        assert_eq!(engine.substitute_at("{pathname}", &now), "/status");
        assert_eq!(engine.substitute_at("{protocol}", &now), "https:");
        assert_eq!(engine.substitute_at("{port}", &now), "8443");
        assert_eq!(engine.substitute_at("{search}", &now), "?tab=all");
        assert_eq!(engine.substitute_at("{hash}", &now), "#top");
        assert_eq!(
            engine.substitute_at("{origin}", &now),
            "https://lab.example.com:8443"
        );
    }

    #[test]
    fn page_tokens_without_context_stay_verbatim() {
        let engine = PlaceholderEngine::new();
        let out = engine.substitute_at("{hostname}/{pathname}", &fixed_clock());
        assert_eq!(out, "{hostname}/{pathname}");
    }

    #[test]
    fn text_without_braces_is_untouched() {
        let engine = PlaceholderEngine::new();
        assert_eq!(
            engine.substitute_at("plain text", &fixed_clock()),
            "plain text"
        );
    }
}
