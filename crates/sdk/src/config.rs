//! Configuration types for the PCP SDK.

use std::time::Duration;
use url::Url;

/// Configuration for the PCP client.
///
/// The timeout is a local request deadline handed to the HTTP client. It is
/// unrelated to the pmwebapi `polltimeout` session parameter, which is
/// carried by the [`Context`](crate::api::Context) and interpreted by the
/// remote service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the pmwebd endpoint.
    pub base_url: Url,
    /// Request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(30),
        }
    }
}
