//! Transport layer for the PCP SDK.

pub mod http;

pub use http::HttpTransport;
