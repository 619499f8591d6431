//! # statuswatch-types
//!
//! Core types for service status dashboards. This crate defines the
//! classification model shared by the probing engine and any rendering
//! layer: range-pattern rule tables, status-code to status-label mapping,
//! display color resolution, and the probe outcome / snapshot schema.
//!
//! ## Design Goals
//!
//! - **Pure data**: no I/O, no async, no clocks beyond a timestamp helper
//! - **Infallible classification**: malformed rules are dropped, resolution
//!   always falls back to a built-in default
//! - **Immutable tables**: rule tables are built once from configuration
//!   and shared read-only across concurrent probes
//!
//! ## Example
//!
//! ```rust
//! use statuswatch_types::{RuleTable, StatusMapper};
//!
//! // Operator config: broad default with a narrow exception
//! let table = RuleTable::new([
//!     ("200-299".to_string(), "running".to_string()),
//!     ("204".to_string(), "draining".to_string()),
//! ]);
//!
//! assert_eq!(table.resolve(250), Some(&"running".to_string()));
//! assert_eq!(table.resolve(204), Some(&"draining".to_string()));
//!
//! // Built-in defaults
//! let mapper = StatusMapper::default();
//! assert_eq!(mapper.map(503), "warning");
//! assert_eq!(mapper.map(0), "stopped");
//! ```

mod color;
mod endpoint;
mod outcome;
mod range;
mod snapshot;
mod status;

pub use color::*;
pub use endpoint::*;
pub use outcome::*;
pub use range::*;
pub use snapshot::*;
pub use status::*;
