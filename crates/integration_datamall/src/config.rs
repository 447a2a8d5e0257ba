//! DataMall client configuration

use std::fmt;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Maximum page size served by DataMall collection endpoints
pub const DATAMALL_PAGE_SIZE: usize = 500;

/// Configuration for the DataMall API client
#[derive(Clone, Serialize, Deserialize)]
pub struct DataMallConfig {
    /// Base URL for the DataMall OData service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Account key sent as the `AccountKey` header (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Records per page requested with `$skip`
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Upper bound on pages fetched for one collection
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,
}

impl fmt::Debug for DataMallConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataMallConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_key",
                &if self.api_key.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("timeout_secs", &self.timeout_secs)
            .field("page_size", &self.page_size)
            .field("max_pages", &self.max_pages)
            .finish()
    }
}

fn default_base_url() -> String {
    "http://datamall2.mytransport.sg/ltaodataservice".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_page_size() -> usize {
    DATAMALL_PAGE_SIZE
}

const fn default_max_pages() -> usize {
    100
}

impl Default for DataMallConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            page_size: default_page_size(),
            max_pages: default_max_pages(),
        }
    }
}

impl DataMallConfig {
    /// Default configuration with the given account key
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(SecretString::from(api_key.into())),
            ..Default::default()
        }
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Self::with_api_key("test-account-key")
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.api_key.is_none() {
            return Err(
                "api_key is required (set LTA_DATAMALL__API_KEY or datamall.api_key)".to_string(),
            );
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.page_size == 0 || self.page_size > DATAMALL_PAGE_SIZE {
            return Err(format!(
                "page_size must be between 1 and {DATAMALL_PAGE_SIZE}"
            ));
        }

        if self.max_pages == 0 {
            return Err("max_pages must be greater than 0".to_string());
        }

        Ok(())
    }
}
