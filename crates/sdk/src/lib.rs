//! # PCP SDK
//!
//! Rust client for the Performance Co-Pilot pmwebapi: discover the metrics a
//! pmwebd endpoint exposes, fetch their current values, and resolve the
//! per-instance names of multi-instance metrics (per-CPU, per-disk,
//! per-container counters).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pcp_sdk::{Context, MetricQuery, MetricValueQuery, PcpClient, PcpResult};
//!
//! #[tokio::main]
//! async fn main() -> PcpResult<()> {
//!     let client = PcpClient::builder()
//!         .base_url("http://localhost:44323")
//!         .build()?;
//!
//!     // Negotiate a session for the local host
//!     let mut context = Context::host("local");
//!     client.refresh_context(&mut context).await?;
//!
//!     // Discover metrics and fetch a few values
//!     let catalog = client.metrics(&context, &MetricQuery::all()).await?;
//!     println!("{} metrics available", catalog.len());
//!
//!     let query = MetricValueQuery::by_names(["kernel.all.load"]);
//!     let mut response = client.metric_values(&context, &query).await?;
//!
//!     // Resolve instance names for every fetched metric
//!     for value in &mut response.values {
//!         if let Some(metric) = catalog.find_by_name(&value.name) {
//!             let domain = client.indom_for_metric(&context, metric).await?;
//!             domain.resolve_names(value);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;

// Re-export main client
pub use client::{PcpClient, PcpClientBuilder};
pub use config::ClientConfig;
pub use error::{PcpError, PcpResult};

// Re-export the request builders
pub use api::{Context, InstanceDomainQuery, MetricQuery, MetricValueQuery, Query};

// Re-export core types for convenience
pub use pcp_core::{
    InstanceDomain, InstanceDomainInstance, InstanceValue, Metric, MetricCatalog, MetricInstance,
    MetricType, MetricValue, MetricValueResponse, ResponseList, Timestamp, NO_INDOM, NO_INSTANCE,
    UNDEFINED_INSTANCE_NAME,
};
