use serde::{Deserialize, Serialize};

/// Instance-domain id meaning "this metric has no instance domain".
///
/// The pmwebapi never assigns domain id 0 to a real domain; descriptors for
/// singleton metrics come back with the field absent or zero.
pub const NO_INDOM: u32 = 0;

/// Instance id carried by value rows of singleton metrics.
pub const NO_INSTANCE: i32 = -1;

/// Value type of a metric, as reported in metric metadata.
///
/// The wire spellings mirror the PM_TYPE_* constants from pmapi.h. Only a
/// subset (`32`, `U32`, `U64`, `FLOAT`, `DOUBLE`, `STRING`) has been observed
/// from a live pmwebd; the rest are carried for completeness. Anything the
/// service sends that we do not recognize decodes as `Unknown` rather than
/// failing the whole metadata payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricType {
    #[serde(rename = "32")]
    Int32,
    #[serde(rename = "U32")]
    Uint32,
    #[serde(rename = "64")]
    Int64,
    #[serde(rename = "U64")]
    Uint64,
    #[serde(rename = "FLOAT")]
    Float,
    #[serde(rename = "DOUBLE")]
    Double,
    #[serde(rename = "STRING")]
    String,
    #[serde(rename = "AGGREGATE")]
    Aggregate,
    #[serde(rename = "AGGREGATE_STATIC")]
    AggregateStatic,
    #[serde(rename = "EVENT")]
    Event,
    #[serde(rename = "HIGHRES_EVENT")]
    HighresEvent,
    #[serde(rename = "NOSUPPORT")]
    NoSupport,
    #[default]
    #[serde(other, rename = "UNKNOWN")]
    Unknown,
}

/// One metric descriptor from a `_metric` metadata response.
///
/// Every field is decoded leniently: the pmwebapi omits fields it has no
/// value for, and an absent field degrades to the empty string, zero, or the
/// no-domain sentinel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metric {
    /// Dotted hierarchical metric name, unique within a context.
    #[serde(default)]
    pub name: String,
    /// Numeric metric id.
    #[serde(rename = "pmID", default)]
    pub pmid: u32,
    /// Instance-domain id, or [`NO_INDOM`] for singleton metrics.
    #[serde(default)]
    pub indom: u32,
    /// Declared value type.
    #[serde(rename = "type", default)]
    pub metric_type: MetricType,
    /// Counter/instant/discrete semantics tag. The pmwebapi reports this
    /// under the JSON key `instant`; kept free-form.
    #[serde(rename = "instant", default)]
    pub semantics: String,
    /// Unit string, e.g. `Kbyte` or `count / sec`.
    #[serde(default)]
    pub units: String,
    /// One-line help text.
    #[serde(rename = "text-oneline", default)]
    pub text_oneline: String,
    /// Long-form help text.
    #[serde(rename = "text-help", default)]
    pub text_help: String,
}

impl Metric {
    /// Whether this metric reports over an instance domain at all.
    pub fn has_indom(&self) -> bool {
        self.indom != NO_INDOM
    }
}
