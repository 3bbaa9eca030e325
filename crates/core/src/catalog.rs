use crate::metric::{Metric, MetricType};

/// A name-sorted collection of metric descriptors.
///
/// Construction establishes the name order; lookups rely on it. Both lookup
/// operations use lower-bound search: the probe lands on the first descriptor
/// whose name is not less than the target, so a successful probe may return a
/// neighbor rather than an exact match. Callers that need strict matching
/// must compare the returned name themselves.
#[derive(Debug, Clone, Default)]
pub struct MetricCatalog {
    metrics: Vec<Metric>,
}

impl MetricCatalog {
    /// Build a catalog from descriptors in service order.
    pub fn new(mut metrics: Vec<Metric>) -> Self {
        metrics.sort_by(|a, b| a.name.cmp(&b.name));
        Self { metrics }
    }

    /// Lower-bound lookup by metric name.
    pub fn find_by_name(&self, name: &str) -> Option<&Metric> {
        let i = self.metrics.partition_point(|m| m.name.as_str() < name);
        self.metrics.get(i)
    }

    /// Declared value type of the named metric, or `Unknown` when the probe
    /// runs past the end of the catalog.
    pub fn value_type(&self, name: &str) -> MetricType {
        self.find_by_name(name)
            .map(|m| m.metric_type)
            .unwrap_or(MetricType::Unknown)
    }

    /// Metric names in catalog (sorted) order.
    pub fn names(&self) -> Vec<String> {
        self.metrics.iter().map(|m| m.name.clone()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Metric> {
        self.metrics.iter()
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

impl<'a> IntoIterator for &'a MetricCatalog {
    type Item = &'a Metric;
    type IntoIter = std::slice::Iter<'a, Metric>;

    fn into_iter(self) -> Self::IntoIter {
        self.metrics.iter()
    }
}
