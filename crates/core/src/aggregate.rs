use std::collections::{HashMap, HashSet};

use crate::value::{InstanceValue, MetricInstance, MetricValueResponse};

/// An accumulated series of fetch responses, typically one per poll
/// interval, with derived views over the whole series.
///
/// All views are pure functions of the current contents. Set-valued views
/// carry no meaningful order. Name-keyed views only see instances whose
/// names have been resolved.
#[derive(Debug, Clone, Default)]
pub struct ResponseList {
    responses: Vec<MetricValueResponse>,
}

impl ResponseList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, response: MetricValueResponse) {
        self.responses.push(response);
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// Every distinct resolved instance name seen across the series.
    pub fn instance_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        for response in &self.responses {
            for value in &response.values {
                for inst in &value.instances {
                    if let Some(name) = &inst.name {
                        seen.insert(name.clone());
                    }
                }
            }
        }
        seen.into_iter().collect()
    }

    /// Every distinct metric name seen across the series.
    pub fn metric_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        for response in &self.responses {
            for value in &response.values {
                seen.insert(value.name.clone());
            }
        }
        seen.into_iter().collect()
    }

    /// Slice out the instances satisfying `matches`, keyed by metric name.
    ///
    /// Within each metric the instances keep discovery order across the
    /// series.
    pub fn filter_instances<F>(&self, matches: F) -> HashMap<String, Vec<MetricInstance>>
    where
        F: Fn(&MetricInstance) -> bool,
    {
        let mut result: HashMap<String, Vec<MetricInstance>> = HashMap::new();
        for response in &self.responses {
            for value in &response.values {
                for inst in &value.instances {
                    if matches(inst) {
                        result.entry(value.name.clone()).or_default().push(inst.clone());
                    }
                }
            }
        }
        result
    }

    /// Instance name → metric name → last-seen value, plus a synthetic
    /// `"time"` entry per instance.
    ///
    /// The `"time"` entry is set once, from the first response that produced
    /// a value for that instance, and later responses never overwrite it:
    /// the table answers "value as of first observation".
    pub fn values_by_instance(&self) -> HashMap<String, HashMap<String, InstanceValue>> {
        let mut table: HashMap<String, HashMap<String, InstanceValue>> = HashMap::new();
        for response in &self.responses {
            for value in &response.values {
                for inst in &value.instances {
                    let Some(name) = &inst.name else {
                        continue;
                    };
                    let row = table.entry(name.clone()).or_default();
                    row.insert(value.name.clone(), inst.value.clone());
                    row.entry("time".to_string())
                        .or_insert(InstanceValue::Uint(response.timestamp.sec));
                }
            }
        }
        table
    }
}

impl From<Vec<MetricValueResponse>> for ResponseList {
    fn from(responses: Vec<MetricValueResponse>) -> Self {
        Self { responses }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{MetricValue, Timestamp};

    fn inst(id: i32, name: &str, value: InstanceValue) -> MetricInstance {
        MetricInstance {
            id,
            name: Some(name.to_string()),
            value,
        }
    }

    fn response(sec: u64, values: Vec<MetricValue>) -> MetricValueResponse {
        MetricValueResponse {
            timestamp: Timestamp { sec, usec: 0 },
            values,
        }
    }

    fn metric(name: &str, instances: Vec<MetricInstance>) -> MetricValue {
        MetricValue {
            name: name.to_string(),
            pmid: 0,
            instances,
        }
    }

    #[test]
    fn test_instance_names_deduplicated() {
        let mut list = ResponseList::new();
        list.push(response(
            1,
            vec![metric(
                "load",
                vec![
                    inst(0, "cpu0", InstanceValue::Int(1)),
                    inst(1, "cpu1", InstanceValue::Int(2)),
                ],
            )],
        ));
        list.push(response(
            2,
            vec![metric("load", vec![inst(0, "cpu0", InstanceValue::Int(3))])],
        ));

        let mut names = list.instance_names();
        names.sort();
        assert_eq!(names, vec!["cpu0", "cpu1"]);
    }

    #[test]
    fn test_unresolved_instances_excluded_from_names() {
        let mut list = ResponseList::new();
        list.push(response(
            1,
            vec![metric(
                "load",
                vec![MetricInstance {
                    id: 5,
                    name: None,
                    value: InstanceValue::Int(1),
                }],
            )],
        ));
        assert!(list.instance_names().is_empty());
    }

    #[test]
    fn test_metric_names_complete_across_responses() {
        let mut list = ResponseList::new();
        list.push(response(
            1,
            vec![metric("a", vec![]), metric("b", vec![])],
        ));
        list.push(response(
            2,
            vec![metric("b", vec![]), metric("c", vec![])],
        ));

        let mut names = list.metric_names();
        names.sort();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_filter_instances_by_threshold() {
        let mut list = ResponseList::new();
        list.push(response(
            1,
            vec![metric(
                "mem.used",
                vec![
                    inst(0, "host0", InstanceValue::Int(10)),
                    inst(1, "host1", InstanceValue::Int(100)),
                ],
            )],
        ));
        list.push(response(
            2,
            vec![metric("mem.used", vec![inst(2, "host2", InstanceValue::Int(50))])],
        ));

        let over_40 = list.filter_instances(|inst| {
            inst.value.as_i64().map(|v| v > 40).unwrap_or(false)
        });

        assert_eq!(over_40.len(), 1);
        let hits = &over_40["mem.used"];
        assert_eq!(hits.len(), 2);
        // Discovery order preserved within the metric.
        assert_eq!(hits[0].name.as_deref(), Some("host1"));
        assert_eq!(hits[1].name.as_deref(), Some("host2"));
    }

    #[test]
    fn test_values_by_instance_keeps_first_time() {
        let mut list = ResponseList::new();
        list.push(response(
            100,
            vec![metric("load", vec![inst(0, "cpu0", InstanceValue::Float(0.5))])],
        ));
        list.push(response(
            200,
            vec![metric("load", vec![inst(0, "cpu0", InstanceValue::Float(0.9))])],
        ));

        let table = list.values_by_instance();
        let row = &table["cpu0"];

        // Value is the last seen, time is from the first observation.
        assert_eq!(row["load"], InstanceValue::Float(0.9));
        assert_eq!(row["time"], InstanceValue::Uint(100));
    }

    #[test]
    fn test_values_by_instance_multiple_metrics() {
        let mut list = ResponseList::new();
        list.push(response(
            7,
            vec![
                metric("cpu.user", vec![inst(0, "cpu0", InstanceValue::Int(12))]),
                metric("cpu.sys", vec![inst(0, "cpu0", InstanceValue::Int(3))]),
            ],
        ));

        let table = list.values_by_instance();
        let row = &table["cpu0"];
        assert_eq!(row["cpu.user"], InstanceValue::Int(12));
        assert_eq!(row["cpu.sys"], InstanceValue::Int(3));
        assert_eq!(row["time"], InstanceValue::Uint(7));
    }
}
