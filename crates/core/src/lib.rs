// Core types and resolution algorithms for the PCP pmwebapi client

pub mod aggregate;
pub mod catalog;
pub mod indom;
pub mod metric;
pub mod value;

pub use aggregate::ResponseList;
pub use catalog::MetricCatalog;
pub use indom::{InstanceDomain, InstanceDomainInstance, UNDEFINED_INSTANCE_NAME};
pub use metric::{Metric, MetricType, NO_INDOM, NO_INSTANCE};
pub use value::{InstanceValue, MetricInstance, MetricValue, MetricValueResponse, Timestamp};
