use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::metric::NO_INSTANCE;

/// A single fetched value.
///
/// The true shape of a value depends on the owning metric's declared type and
/// is only decided at read time, so decode keeps it as a tagged union instead
/// of eagerly converting. Integral JSON numbers land in `Int` (or `Uint` when
/// they exceed `i64`), fractional ones in `Float`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InstanceValue {
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),
}

impl InstanceValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Uint(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Int(v) => u64::try_from(*v).ok(),
            Self::Uint(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Uint(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// One value row within a per-metric fetch result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricInstance {
    /// Instance id, or [`NO_INSTANCE`] for singleton metrics.
    #[serde(rename = "instance", default = "no_instance")]
    pub id: i32,
    /// Resolved display name. Never present on the wire; back-filled by
    /// [`InstanceDomain::resolve_names`](crate::indom::InstanceDomain).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    pub value: InstanceValue,
}

fn no_instance() -> i32 {
    NO_INSTANCE
}

/// One metric's payload within a fetch response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricValue {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pmid: u32,
    #[serde(default)]
    pub instances: Vec<MetricInstance>,
}

/// Service-clock timestamp of a fetch, seconds plus microseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    #[serde(rename = "s", default)]
    pub sec: u64,
    #[serde(rename = "us", default)]
    pub usec: u64,
}

impl Timestamp {
    /// Convert to a UTC datetime for display. `None` if either field is out
    /// of chrono's representable range.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let nanos = u32::try_from(self.usec).ok()?.checked_mul(1_000)?;
        Utc.timestamp_opt(self.sec as i64, nanos).single()
    }
}

/// One `_fetch` result: a timestamp and the values of every requested metric.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricValueResponse {
    #[serde(default)]
    pub timestamp: Timestamp,
    #[serde(default)]
    pub values: Vec<MetricValue>,
}
