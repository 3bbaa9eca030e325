//! Context negotiation: the session handle and its query builder.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::api::Query;
use crate::error::{PcpError, PcpResult};

/// A monitoring session with a pmwebd endpoint.
///
/// Created by the caller with at least a host, host-spec, or archive file;
/// populated with a session id by
/// [`PcpClient::refresh_context`](crate::client::PcpClient::refresh_context)
/// and read-only afterwards. A context with no session id is rejected by
/// every metric, value, and instance-domain operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    /// Host to monitor, e.g. `local` or a remote hostname.
    #[serde(default)]
    pub hostname: String,
    /// Alternate host addressing, e.g. `local:?container=web` to scope the
    /// session to one container.
    #[serde(default)]
    pub hostspec: String,
    /// Local-mode flag forwarded to the service.
    #[serde(default)]
    pub local: String,
    /// Archive file to replay instead of live metrics.
    #[serde(default)]
    pub archivefile: String,
    /// Session poll timeout in seconds, communicated to the remote service.
    /// Zero means unset.
    #[serde(rename = "polltimeout", default)]
    pub poll_timeout: u32,
    /// Session id assigned by the service; zero until the first refresh.
    #[serde(rename = "context", default)]
    pub context_id: u32,
}

impl Context {
    /// Create a context targeting a host.
    pub fn host(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            ..Default::default()
        }
    }

    /// Create a context from a host specification.
    pub fn host_spec(hostspec: impl Into<String>) -> Self {
        Self {
            hostspec: hostspec.into(),
            ..Default::default()
        }
    }

    /// Create a context replaying an archive file.
    pub fn archive(archivefile: impl Into<String>) -> Self {
        Self {
            archivefile: archivefile.into(),
            ..Default::default()
        }
    }

    /// Set the local-mode flag.
    pub fn with_local(mut self, local: impl Into<String>) -> Self {
        self.local = local.into();
        self
    }

    /// Set the session poll timeout.
    pub fn with_poll_timeout(mut self, seconds: u32) -> Self {
        self.poll_timeout = seconds;
        self
    }

    /// Whether the service has assigned a session id yet.
    pub fn is_active(&self) -> bool {
        self.context_id != 0
    }

    fn append_if_not_empty(params: &mut form_urlencoded::Serializer<'_, String>, key: &str, value: &str) {
        if !value.is_empty() {
            params.append_pair(key, value);
        }
    }

    /// Encode the non-empty fields, in fixed key order.
    fn params(&self) -> String {
        let mut params = form_urlencoded::Serializer::new(String::new());

        Self::append_if_not_empty(&mut params, "archivefile", &self.archivefile);
        Self::append_if_not_empty(&mut params, "hostname", &self.hostname);
        Self::append_if_not_empty(&mut params, "hostspec", &self.hostspec);
        Self::append_if_not_empty(&mut params, "local", &self.local);
        // polltimeout is a negotiation parameter; once the session exists it
        // is no longer ours to send.
        if self.poll_timeout != 0 && !self.is_active() {
            params.append_pair("polltimeout", &self.poll_timeout.to_string());
        }
        params.finish()
    }
}

impl Query for Context {
    fn query(&self) -> PcpResult<String> {
        if self.hostname.is_empty() && self.hostspec.is_empty() && self.archivefile.is_empty() {
            return Err(PcpError::InvalidRequest(
                "context needs a hostname, hostspec, or archive file".to_string(),
            ));
        }
        Ok(format!("context?{}", self.params()))
    }
}
