//! # statuswatch
//!
//! A status dashboard for a fixed list of configured services: each
//! service's health-check endpoint is polled on a fixed cadence, the raw
//! HTTP outcome is classified into a semantic status label and display
//! color through configurable range-based rule tables, and the resulting
//! snapshots are rendered by the CLI (or any other consumer of the
//! engine's watch channel).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                       Application                          │
//! │  ┌────────┐   ┌──────────────────┐   ┌─────────────────┐  │
//! │  │ config │──▶│ statuswatch-     │──▶│ HealthSnapshot  │  │
//! │  │ (yaml) │   │ engine (probes)  │   │ (watch channel) │  │
//! │  └───┬────┘   └──────────────────┘   └────────┬────────┘  │
//! │      │                                        ▼           │
//! │      │        ┌──────────────────┐   ┌─────────────────┐  │
//! │      └───────▶│ statuswatch-     │──▶│ CLI rendering   │  │
//! │               │ types (tables)   │   │ (lines / JSON)  │  │
//! │               └──────────────────┘   └─────────────────┘  │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`config`]**: YAML configuration with candidate-file discovery,
//!   the string-or-items content union, and helpers that build the
//!   classification tables
//! - **[`placeholder`]**: `{token}` substitution for date/time and
//!   page-URL tokens in text fields
//! - **[`icons`]**: explicit registry mapping configured icon keys to
//!   display glyphs
//!
//! The probing itself lives in [`statuswatch_engine`]; the pure
//! classification model in [`statuswatch_types`].

pub mod config;
pub mod icons;
pub mod placeholder;

pub use config::{AppConfig, Content, ContentItem, ContentKind, ServiceConfig};
pub use icons::IconRegistry;
pub use placeholder::PlaceholderEngine;

// Re-export the engine surface so binary consumers need one import
pub use statuswatch_engine::{HealthOrchestrator, PollHandle};
pub use statuswatch_types::{
    ColorResolver, HealthSnapshot, ProbeMethod, ProbeOutcome, RuleTable, ServiceEndpoint,
    StatusMapper,
};
