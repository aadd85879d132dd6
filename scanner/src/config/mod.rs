//! Configuration Module
//!
//! Settings file loading and the defaults it falls back to.

mod app_config;

pub use app_config::{AppConfig, LoadedConfig};
