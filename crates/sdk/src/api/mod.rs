//! Typed request builders for the pmwebapi operations.
//!
//! Each builder renders itself as `<operation>[?<query>]` — the path segment
//! the client appends to `/pmapi[/<context-id>]/`. Builders are pure and
//! deterministic: parameters are percent-encoded with `form_urlencoded` and
//! appended in fixed key order, so the same input always produces the same
//! string. Precondition violations are reported before any network call.

pub mod context;
pub mod fetch;
pub mod indom;
pub mod metrics;

pub use context::Context;
pub use fetch::MetricValueQuery;
pub use indom::InstanceDomainQuery;
pub use metrics::MetricQuery;

use crate::error::PcpResult;

/// A pmwebapi request that renders itself as an operation path plus encoded
/// query string.
pub trait Query {
    fn query(&self) -> PcpResult<String>;
}
