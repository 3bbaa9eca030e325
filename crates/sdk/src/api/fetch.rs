//! Metric value queries.

use url::form_urlencoded;

use crate::api::Query;
use crate::error::{PcpError, PcpResult};

/// Query for current values of a set of metrics, selected by name and/or by
/// numeric metric id.
///
/// At least one selector is mandatory; asking for values of nothing is an
/// invalid request, caught before any network call.
#[derive(Debug, Clone, Default)]
pub struct MetricValueQuery {
    pub names: Vec<String>,
    pub pmids: Vec<u32>,
}

impl MetricValueQuery {
    pub fn new(names: Vec<String>, pmids: Vec<u32>) -> Self {
        Self { names, pmids }
    }

    /// Select by metric names only.
    pub fn by_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            pmids: Vec::new(),
        }
    }

    /// Select by numeric metric ids only.
    pub fn by_pmids(pmids: Vec<u32>) -> Self {
        Self {
            names: Vec::new(),
            pmids,
        }
    }
}

impl Query for MetricValueQuery {
    fn query(&self) -> PcpResult<String> {
        if self.names.is_empty() && self.pmids.is_empty() {
            return Err(PcpError::InvalidRequest(
                "metric value query needs at least one name or pmid".to_string(),
            ));
        }

        let mut params = form_urlencoded::Serializer::new(String::new());
        if !self.names.is_empty() {
            params.append_pair("names", &self.names.join(","));
        }
        if !self.pmids.is_empty() {
            let pmids = self
                .pmids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(",");
            params.append_pair("pmids", &pmids);
        }
        Ok(format!("_fetch?{}", params.finish()))
    }
}
