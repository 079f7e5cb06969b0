//! Framework-independent helpers shared by the record views.

pub mod clipboard;
pub mod config;
pub mod focus;
pub mod interpolate;
pub mod timing;

pub use config::{use_record_config, ConfigError, RecordConfig};
pub use interpolate::{interpolate, interpolate_positional};
