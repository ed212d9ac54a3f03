//! YAML endpoint-list parser.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::domain::extract_domain;
use crate::error::{ConfigError, ConfigResult};

fn default_method() -> String {
    "GET".to_string()
}

/// A single monitored endpoint, as configured.
#[derive(Debug, Clone, Deserialize)]
pub struct Endpoint {
    /// Full request URL, including scheme and host.
    pub url: String,
    /// HTTP method. Only GET and POST are probed; any other value is a
    /// configuration defect counted as a failed probe at runtime.
    #[serde(default = "default_method")]
    pub method: String,
    /// Extra request headers.
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Request body, sent for POST only.
    #[serde(default)]
    pub body: Option<String>,
}

impl Endpoint {
    /// The aggregation key for this endpoint: the host segment of its URL.
    ///
    /// Validation guarantees the host exists for every configured
    /// endpoint, so the fallback to the full URL is unreachable in
    /// practice.
    pub fn domain(&self) -> &str {
        extract_domain(&self.url).unwrap_or(&self.url)
    }
}

/// The monitored endpoint list, in configured order.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    pub endpoints: Vec<Endpoint>,
}

impl MonitorConfig {
    /// Load and validate an endpoint list from a YAML file.
    ///
    /// Fails on an unreadable file, malformed YAML, an empty list, or a
    /// URL without a `//`-delimited host — all before any polling starts.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(path.display().to_string(), e))?;
        Self::from_yaml(&content)
    }

    /// Parse and validate an endpoint list from a YAML string.
    pub fn from_yaml(content: &str) -> ConfigResult<Self> {
        let endpoints: Vec<Endpoint> = serde_yaml::from_str(content)?;
        if endpoints.is_empty() {
            return Err(ConfigError::NoEndpoints);
        }
        for endpoint in &endpoints {
            if extract_domain(&endpoint.url).is_none() {
                return Err(ConfigError::InvalidUrl(endpoint.url.clone()));
            }
        }
        Ok(Self { endpoints })
    }
}
