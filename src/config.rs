//! Backend endpoint and retry configuration.
//!
//! The client runs in the browser, so there is no runtime environment to
//! read. Base URLs default to the local development services and may be
//! overridden at build time via `SNAPIT_ZEPTO_URL`, `SNAPIT_BLINKIT_URL` and
//! `SNAPIT_AUTH_URL`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_ZEPTO_URL: &str = "http://localhost:5000";
pub const DEFAULT_BLINKIT_URL: &str = "http://localhost:5001";
pub const DEFAULT_AUTH_URL: &str = "http://localhost:5000";

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 20;

/// Base URLs of the services the client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub zepto_url: String,
    pub blinkit_url: String,
    pub auth_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            zepto_url: DEFAULT_ZEPTO_URL.to_owned(),
            blinkit_url: DEFAULT_BLINKIT_URL.to_owned(),
            auth_url: DEFAULT_AUTH_URL.to_owned(),
        }
    }
}

impl BackendConfig {
    /// Build config from compile-time overrides, falling back to defaults.
    pub fn from_build_env() -> Self {
        Self {
            zepto_url: resolve_base_url(option_env!("SNAPIT_ZEPTO_URL"), DEFAULT_ZEPTO_URL),
            blinkit_url: resolve_base_url(option_env!("SNAPIT_BLINKIT_URL"), DEFAULT_BLINKIT_URL),
            auth_url: resolve_base_url(option_env!("SNAPIT_AUTH_URL"), DEFAULT_AUTH_URL),
        }
    }

    /// Retailer scrape services in merge order.
    pub fn retailer_urls(&self) -> [&str; 2] {
        [&self.zepto_url, &self.blinkit_url]
    }
}

/// Attempt budget and spacing for the product search loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub retry_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay: Duration::from_secs(DEFAULT_RETRY_DELAY_SECS),
        }
    }
}

fn resolve_base_url(raw: Option<&str>, default: &str) -> String {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .trim_end_matches('/')
        .to_owned()
}
