//! upwatch-core — endpoint configuration for the availability monitor.
//!
//! Provides the endpoint descriptor type, YAML endpoint-list loading with
//! startup validation, and extraction of the per-domain aggregation key
//! from endpoint URLs.
//!
//! Descriptors are built once at startup and immutable afterwards; every
//! validation failure here is fatal by design, so the polling loop never
//! starts with an empty or corrupt endpoint list.

pub mod config;
pub mod domain;
pub mod error;

pub use config::{Endpoint, MonitorConfig};
pub use domain::extract_domain;
pub use error::{ConfigError, ConfigResult};
