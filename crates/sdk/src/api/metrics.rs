//! Metric metadata queries.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::api::Query;
use crate::error::PcpResult;
use pcp_core::Metric;

/// Query for metric metadata, optionally filtered to a name prefix.
///
/// An empty prefix asks for the full catalog. This builder has no
/// preconditions and never fails.
#[derive(Debug, Clone, Default)]
pub struct MetricQuery {
    pub prefix: String,
}

impl MetricQuery {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Query for the entire metric catalog.
    pub fn all() -> Self {
        Self::default()
    }
}

impl Query for MetricQuery {
    fn query(&self) -> PcpResult<String> {
        let mut query = "_metric".to_string();
        if !self.prefix.is_empty() {
            let mut params = form_urlencoded::Serializer::new(String::new());
            params.append_pair("prefix", &self.prefix);
            query.push('?');
            query.push_str(&params.finish());
        }
        Ok(query)
    }
}

/// Wire shape of a `_metric` response.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct MetricsResponse {
    #[serde(default)]
    pub metrics: Vec<Metric>,
}
