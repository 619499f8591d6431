//! Configuration loading and normalization.
//!
//! The dashboard is driven by a single YAML file. Discovery tries a fixed
//! list of candidate names in order and takes the first file that both
//! exists and parses. The loaded [`AppConfig`] is an explicit immutable
//! value passed to whoever needs it; there is no module-level cache.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use serde::Deserialize;
use tracing::{info, warn};

use statuswatch_types::{ColorResolver, ServiceEndpoint, StatusMapper};

use crate::placeholder::PlaceholderEngine;

/// Candidate config files, tried in order.
pub const CONFIG_CANDIDATES: &[&str] =
    &["config.yaml", "config1.yaml", "config2.yaml", "config3.yaml"];

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Dashboard header: machine name and optional header text.
    pub server: ServerConfig,
    /// Optional footer block.
    #[serde(default)]
    pub footer: Option<FooterConfig>,
    /// Theme colors, including the per-status color table.
    pub theme: ThemeConfig,
    /// Range pattern to status label, e.g. `"200-299": running`.
    /// YAML mappings preserve document order, which is what breaks
    /// width ties during resolution.
    #[serde(default)]
    pub status_mapping: Option<serde_yaml::Mapping>,
    /// The fixed list of services to display and poll.
    #[serde(default)]
    pub services: Vec<ServiceConfig>,
}

impl AppConfig {
    /// Build the status mapper from `statusMapping`, or the defaults.
    pub fn status_mapper(&self) -> StatusMapper {
        match &self.status_mapping {
            Some(mapping) => StatusMapper::from_table(string_entries(mapping), None),
            None => StatusMapper::default(),
        }
    }

    /// Build the color resolver from `theme.colors.serviceStatus`, or the
    /// defaults.
    pub fn color_resolver(&self) -> ColorResolver {
        match &self.theme.colors.service_status {
            Some(mapping) => ColorResolver::from_table(string_entries(mapping)),
            None => ColorResolver::default(),
        }
    }

    /// Endpoints for the probing engine, index-aligned with `services`.
    pub fn endpoints(&self) -> Vec<ServiceEndpoint> {
        self.services
            .iter()
            .map(|service| ServiceEndpoint {
                url: service.url.clone(),
                health_check_url: service.health_check_url.clone(),
            })
            .collect()
    }

    /// Resolve placeholders in every service field that supports them.
    ///
    /// Runs once at load time so the rest of the system only ever sees
    /// resolved text.
    pub fn resolve_placeholders(&mut self, engine: &PlaceholderEngine) {
        for service in &mut self.services {
            service.name = engine.substitute(&service.name);
            service.description = engine.substitute(&service.description);
            if let Some(url) = &service.url {
                service.url = Some(engine.substitute(url));
            }
            if let Some(url) = &service.health_check_url {
                service.health_check_url = Some(engine.substitute(url));
            }
        }
    }
}

/// Dashboard header configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    pub name: String,
    /// Plain text or a list of text/link items.
    #[serde(default)]
    pub subtitle: Option<Content>,
    /// Extra content at the bottom of the header, same shape as subtitle.
    #[serde(default)]
    pub header_content: Option<Content>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub uptime: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// String-or-items union, resolved once at parse time.
///
/// Config authors can write `subtitle: hello` or a structured list of
/// text and link entries; downstream code matches on the variant instead
/// of re-branching on the raw shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Content {
    Plain(String),
    Items(Vec<ContentItem>),
}

/// One entry in structured content (footer, subtitle, header).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    #[serde(rename = "type")]
    pub kind: ContentKind,
    /// Text body, for `text` items.
    #[serde(default)]
    pub content: Option<String>,
    /// Link label, for `link` items.
    #[serde(default)]
    pub label: Option<String>,
    /// Link target URL, for `link` items.
    #[serde(default)]
    pub url: Option<String>,
    /// HTML target attribute, e.g. `_blank`.
    #[serde(default)]
    pub target: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Text,
    Link,
}

/// Footer configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterConfig {
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub content: Option<Vec<ContentItem>>,
}

/// Theme configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    #[serde(default)]
    pub background_image: Option<BackgroundImage>,
    pub colors: ThemeColors,
}

/// Optional background image settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundImage {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub opacity: Option<f64>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub repeat: Option<String>,
}

/// Flat theme color palette plus the per-status color table.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub background: String,
    pub card_background: String,
    pub medium_accent: String,
    pub dark_accent: String,
    pub text: String,
    pub header_background: String,
    pub header_text: String,
    #[serde(default)]
    pub footer_background: Option<String>,
    #[serde(default)]
    pub footer_text: Option<String>,
    /// Range pattern, status label, or `checking` to hex color.
    #[serde(default)]
    pub service_status: Option<serde_yaml::Mapping>,
}

/// One displayed service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceConfig {
    pub name: String,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub health_check_url: Option<String>,
}

/// Load configuration by candidate-file discovery.
///
/// Tries [`CONFIG_CANDIDATES`] in order under `dir`; an unreadable or
/// unparsable candidate is skipped with a warning. All candidates
/// failing is an error.
pub fn load_from_dir(dir: &Path) -> Result<AppConfig> {
    for candidate in CONFIG_CANDIDATES {
        let path = dir.join(candidate);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(_) => continue,
        };
        match serde_yaml::from_str(&text) {
            Ok(config) => {
                info!(path = %path.display(), "loaded configuration");
                return Ok(config);
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "skipping unparsable config");
            }
        }
    }

    bail!(
        "no configuration file found in {}; tried: {}",
        dir.display(),
        CONFIG_CANDIDATES.join(", ")
    )
}

/// Load configuration from an explicit file, bypassing discovery.
pub fn load_file(path: &Path) -> Result<AppConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    serde_yaml::from_str(&text)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}

/// Resolve the config path for a CLI invocation.
pub fn load(dir: &Path, explicit_file: Option<&PathBuf>) -> Result<AppConfig> {
    match explicit_file {
        Some(path) => load_file(path),
        None => load_from_dir(dir),
    }
}

/// Extract ordered string entries from a YAML mapping.
///
/// YAML parses an unquoted `0:` key as a number; both string and numeric
/// keys are accepted. Anything else is dropped, consistent with how
/// malformed range patterns are handled downstream.
fn string_entries(mapping: &serde_yaml::Mapping) -> Vec<(String, String)> {
    mapping
        .iter()
        .filter_map(|(key, value)| {
            let key = match key {
                serde_yaml::Value::String(s) => s.clone(),
                serde_yaml::Value::Number(n) => n.to_string(),
                _ => return None,
            };
            let value = value.as_str()?.to_string();
            Some((key, value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    const MINIMAL_THEME: &str = "
theme:
  colors:
    background: '#0f172a'
    cardBackground: '#1e293b'
    mediumAccent: '#334155'
    darkAccent: '#0b1120'
    text: '#e2e8f0'
    headerBackground: '#1e293b'
    headerText: '#f8fafc'
";

    fn write_config(dir: &TempDir, name: &str, body: &str) {
        let mut file = fs::File::create(dir.path().join(name)).unwrap();
        file.write_all(body.as_bytes()).unwrap();
    }

    fn minimal(extra: &str) -> String {
        format!("server:\n  name: Lab\n{MINIMAL_THEME}{extra}")
    }

    #[test]
    fn loads_first_candidate() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "config.yaml", &minimal(""));

        let config = load_from_dir(dir.path()).unwrap();
        assert_eq!(config.server.name, "Lab");
        assert!(config.services.is_empty());
    }

    #[test]
    fn falls_through_to_later_candidates() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "config2.yaml", &minimal(""));

        let config = load_from_dir(dir.path()).unwrap();
        assert_eq!(config.server.name, "Lab");
    }

    #[test]
    fn unparsable_candidate_is_skipped() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "config.yaml", "server: [not: valid");
        write_config(&dir, "config1.yaml", &minimal(""));

        let config = load_from_dir(dir.path()).unwrap();
        assert_eq!(config.server.name, "Lab");
    }

    #[test]
    fn missing_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = load_from_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("no configuration file found"));
    }

    #[test]
    fn subtitle_accepts_plain_string() {
        let yaml = format!("server:\n  name: Lab\n  subtitle: homelab status\n{MINIMAL_THEME}");
        let config: AppConfig = serde_yaml::from_str(&yaml).unwrap();
        match config.server.subtitle {
            Some(Content::Plain(text)) => assert_eq!(text, "homelab status"),
            other => panic!("expected plain subtitle, got {other:?}"),
        }
    }

    #[test]
    fn subtitle_accepts_item_list() {
        let yaml = format!(
            "server:\n  name: Lab\n  subtitle:\n    - type: text\n      content: powered by\n    - type: link\n      label: statuswatch\n      url: https://example.com\n      target: _blank\n{MINIMAL_THEME}"
        );
        let config: AppConfig = serde_yaml::from_str(&yaml).unwrap();
        match config.server.subtitle {
            Some(Content::Items(items)) => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[0].kind, ContentKind::Text);
                assert_eq!(items[1].kind, ContentKind::Link);
                assert_eq!(items[1].label.as_deref(), Some("statuswatch"));
            }
            other => panic!("expected item list, got {other:?}"),
        }
    }

    #[test]
    fn status_mapper_from_config_ranges() {
        let yaml = minimal(
            "statusMapping:\n  '0': stopped\n  '200-299': humming\n  '204': draining\n",
        );
        let config: AppConfig = serde_yaml::from_str(&yaml).unwrap();
        let mapper = config.status_mapper();

        assert_eq!(mapper.map(250), "humming");
        assert_eq!(mapper.map(204), "draining");
        assert_eq!(mapper.map(0), "stopped");
    }

    #[test]
    fn unquoted_numeric_keys_are_accepted() {
        let yaml = minimal("statusMapping:\n  0: stopped\n  200-299: running\n");
        let config: AppConfig = serde_yaml::from_str(&yaml).unwrap();
        let mapper = config.status_mapper();

        assert_eq!(mapper.map(0), "stopped");
        assert_eq!(mapper.map(204), "running");
    }

    #[test]
    fn color_resolver_from_theme() {
        let yaml = format!(
            "server:\n  name: Lab\ntheme:\n  colors:\n    background: '#000'\n    cardBackground: '#111'\n    mediumAccent: '#222'\n    darkAccent: '#333'\n    text: '#fff'\n    headerBackground: '#444'\n    headerText: '#fff'\n    serviceStatus:\n      checking: '#ffffff'\n      '200-299': '#00ff00'\n"
        );
        let config: AppConfig = serde_yaml::from_str(&yaml).unwrap();
        let colors = config.color_resolver();

        assert_eq!(colors.checking_color(), "#ffffff");
        assert_eq!(colors.color_for_code(204), "#00ff00");
    }

    #[test]
    fn endpoints_align_with_services() {
        let yaml = minimal(
            "services:\n  - name: Grafana\n    description: Dashboards\n    icon: FaChartBar\n    url: http://grafana.local\n    healthCheckUrl: http://grafana.local/api/health\n  - name: Static page\n    description: No probe\n    icon: FaFile\n",
        );
        let config: AppConfig = serde_yaml::from_str(&yaml).unwrap();
        let endpoints = config.endpoints();

        assert_eq!(endpoints.len(), 2);
        assert_eq!(
            endpoints[0].health_check_url.as_deref(),
            Some("http://grafana.local/api/health")
        );
        assert!(endpoints[1].health_check_url.is_none());
    }

    #[test]
    fn placeholders_resolved_in_service_fields() {
        let yaml = minimal(
            "services:\n  - name: 'Report {year}'\n    description: generated {date}\n    icon: FaFile\n",
        );
        let mut config: AppConfig = serde_yaml::from_str(&yaml).unwrap();
        config.resolve_placeholders(&PlaceholderEngine::new());

        assert!(!config.services[0].name.contains("{year}"));
        assert!(!config.services[0].description.contains("{date}"));
    }
}
