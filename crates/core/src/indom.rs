use serde::{Deserialize, Serialize};
use tracing::info;

use crate::metric::{NO_INDOM, NO_INSTANCE};
use crate::value::MetricValue;

/// Display name assigned to value rows whose instance id is the singleton
/// sentinel.
pub const UNDEFINED_INSTANCE_NAME: &str = "UNDEFINED";

/// One (id, name) pair within an instance domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceDomainInstance {
    #[serde(rename = "instance")]
    pub id: i32,
    #[serde(default)]
    pub name: String,
}

/// The catalog of valid instances for one instance-domain id, sorted
/// ascending by instance id.
///
/// Same sortedness contract as the metric catalog: construction sorts, and
/// `resolve_names` relies on the order for its lower-bound probes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstanceDomain {
    #[serde(default)]
    pub indom: u32,
    #[serde(default)]
    pub instances: Vec<InstanceDomainInstance>,
}

impl InstanceDomain {
    /// Build a domain from instances in service order.
    pub fn new(indom: u32, mut instances: Vec<InstanceDomainInstance>) -> Self {
        instances.sort_by(|a, b| a.id.cmp(&b.id));
        Self { indom, instances }
    }

    /// The empty domain used for singleton metrics.
    pub fn empty() -> Self {
        Self {
            indom: NO_INDOM,
            instances: Vec::new(),
        }
    }

    /// Re-establish the id order after a raw wire decode.
    pub fn into_sorted(self) -> Self {
        Self::new(self.indom, self.instances)
    }

    /// Lower-bound lookup of an instance name by id.
    pub fn lookup(&self, id: i32) -> Option<&str> {
        let i = self.instances.partition_point(|inst| inst.id < id);
        self.instances.get(i).map(|inst| inst.name.as_str())
    }

    /// Back-fill display names onto every value row of `value`.
    ///
    /// Sentinel-id rows get the literal [`UNDEFINED_INSTANCE_NAME`]. Ids
    /// whose probe runs past the end of the domain are left unresolved; each
    /// such miss is logged at info level and counted in the return value.
    pub fn resolve_names(&self, value: &mut MetricValue) -> usize {
        let mut misses = 0;
        for inst in &mut value.instances {
            if inst.id == NO_INSTANCE {
                inst.name = Some(UNDEFINED_INSTANCE_NAME.to_string());
                continue;
            }
            match self.lookup(inst.id) {
                Some(name) => inst.name = Some(name.to_string()),
                None => {
                    info!(
                        metric = %value.name,
                        instance = inst.id,
                        indom = self.indom,
                        "no instance-domain entry for instance"
                    );
                    misses += 1;
                }
            }
        }
        misses
    }
}
