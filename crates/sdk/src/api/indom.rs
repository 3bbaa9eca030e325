//! Instance-domain queries.

use url::form_urlencoded;

use crate::api::Query;
use crate::error::{PcpError, PcpResult};
use pcp_core::NO_INDOM;

/// Query for the instances of one instance domain, addressed by numeric id
/// or by metric name, optionally restricted to specific instances.
///
/// Either the domain id or the name must be supplied; the id participates in
/// the query only when it is a genuine domain (non-sentinel).
#[derive(Debug, Clone)]
pub struct InstanceDomainQuery {
    pub indom: u32,
    pub name: String,
    pub instances: Vec<u32>,
    pub inames: Vec<String>,
}

impl InstanceDomainQuery {
    /// Query a domain by its numeric id.
    pub fn new(indom: u32) -> Self {
        Self {
            indom,
            name: String::new(),
            instances: Vec::new(),
            inames: Vec::new(),
        }
    }

    /// Query the domain of the named metric.
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            indom: NO_INDOM,
            name: name.into(),
            instances: Vec::new(),
            inames: Vec::new(),
        }
    }

    /// Restrict the response to specific instance ids.
    pub fn with_instances(mut self, instances: Vec<u32>) -> Self {
        self.instances = instances;
        self
    }

    /// Restrict the response to specific instance names.
    pub fn with_instance_names<I, S>(mut self, inames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inames = inames.into_iter().map(Into::into).collect();
        self
    }
}

impl Query for InstanceDomainQuery {
    fn query(&self) -> PcpResult<String> {
        if self.indom == NO_INDOM && self.name.is_empty() {
            return Err(PcpError::InvalidRequest(
                "instance domain query needs a domain id or a metric name".to_string(),
            ));
        }

        let mut params = form_urlencoded::Serializer::new(String::new());
        if !self.inames.is_empty() {
            params.append_pair("iname", &self.inames.join(","));
        }
        if self.indom != NO_INDOM {
            params.append_pair("indom", &self.indom.to_string());
        }
        if !self.instances.is_empty() {
            let instances = self
                .instances
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(",");
            params.append_pair("instance", &instances);
        }
        if !self.name.is_empty() {
            params.append_pair("name", &self.name);
        }
        Ok(format!("_indom?{}", params.finish()))
    }
}
