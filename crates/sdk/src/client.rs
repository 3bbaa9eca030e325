//! Main client for the PCP SDK.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::api::metrics::MetricsResponse;
use crate::api::{Context, InstanceDomainQuery, MetricQuery, MetricValueQuery, Query};
use crate::config::ClientConfig;
use crate::error::{PcpError, PcpResult};
use crate::transport::HttpTransport;
use pcp_core::{InstanceDomain, Metric, MetricCatalog, MetricValueResponse};

/// Client for one pmwebd endpoint.
///
/// The client itself is stateless; session state lives in the [`Context`]
/// values the caller threads through it. Every operation is one GET plus one
/// JSON decode.
#[derive(Clone)]
pub struct PcpClient {
    pub(crate) http: HttpTransport,
}

impl PcpClient {
    /// Create a new client builder.
    pub fn builder() -> PcpClientBuilder {
        PcpClientBuilder::new()
    }

    /// Create a client from configuration.
    fn from_config(config: ClientConfig) -> PcpResult<Self> {
        let http = HttpTransport::new(Arc::new(config))?;

        Ok(Self { http })
    }

    /// Negotiate (or re-echo) a session for `context`.
    ///
    /// On success the service-assigned session id is written into the
    /// caller's context, along with any fields the service echoed back. On
    /// failure the caller's context is left exactly as it was.
    pub async fn refresh_context(&self, context: &mut Context) -> PcpResult<()> {
        debug!(?context, "refreshing context");
        let path = format!("/pmapi/{}", context.query()?);

        // Decode into a scratch value; the caller's context is only touched
        // once the whole response has decoded.
        let echo: Context = self.http.get(&path).await?;

        context.context_id = echo.context_id;
        if !echo.hostname.is_empty() {
            context.hostname = echo.hostname;
        }
        if !echo.hostspec.is_empty() {
            context.hostspec = echo.hostspec;
        }
        if !echo.local.is_empty() {
            context.local = echo.local;
        }
        if !echo.archivefile.is_empty() {
            context.archivefile = echo.archivefile;
        }
        if echo.poll_timeout != 0 {
            context.poll_timeout = echo.poll_timeout;
        }
        Ok(())
    }

    /// Fetch metric metadata and return it as a name-sorted catalog.
    pub async fn metrics(
        &self,
        context: &Context,
        query: &MetricQuery,
    ) -> PcpResult<MetricCatalog> {
        debug!("fetching metrics for context");
        let path = self.session_path(context, query)?;
        let response: MetricsResponse = self.http.get(&path).await?;
        Ok(MetricCatalog::new(response.metrics))
    }

    /// Fetch current values for the metrics selected by `query`.
    pub async fn metric_values(
        &self,
        context: &Context,
        query: &MetricValueQuery,
    ) -> PcpResult<MetricValueResponse> {
        let path = self.session_path(context, query)?;
        self.http.get(&path).await
    }

    /// Fetch one instance domain, sorted by instance id.
    pub async fn instance_domain(
        &self,
        context: &Context,
        query: &InstanceDomainQuery,
    ) -> PcpResult<InstanceDomain> {
        let path = self.session_path(context, query)?;
        let domain: InstanceDomain = self.http.get(&path).await?;
        Ok(domain.into_sorted())
    }

    /// Fetch the instance domain of `metric`.
    ///
    /// Descriptors without a domain short-circuit to the empty domain; no
    /// request is made for them.
    pub async fn indom_for_metric(
        &self,
        context: &Context,
        metric: &Metric,
    ) -> PcpResult<InstanceDomain> {
        if !metric.has_indom() {
            return Ok(InstanceDomain::empty());
        }
        self.instance_domain(context, &InstanceDomainQuery::new(metric.indom))
            .await
    }

    /// Render `/pmapi/<context-id>/<operation-query>` for a session-scoped
    /// operation, rejecting contexts that have not been refreshed.
    fn session_path(&self, context: &Context, query: &dyn Query) -> PcpResult<String> {
        if !context.is_active() {
            return Err(PcpError::InvalidRequest(
                "context has no session id; call refresh_context first".to_string(),
            ));
        }
        Ok(format!("/pmapi/{}/{}", context.context_id, query.query()?))
    }
}

/// Builder for creating a PcpClient.
pub struct PcpClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
}

impl PcpClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the base URL of the pmwebd endpoint.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> PcpResult<PcpClient> {
        let base_url_str = self
            .base_url
            .ok_or_else(|| PcpError::Config("base_url is required".to_string()))?;

        let base_url = Url::parse(&base_url_str)?;

        let config = ClientConfig {
            base_url,
            timeout: self.timeout,
        };

        PcpClient::from_config(config)
    }
}

impl Default for PcpClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
