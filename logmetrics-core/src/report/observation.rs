use serde::Serialize;

/// One named value handed to the metrics sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricObservation {
    pub name: &'static str,
    pub value: f64,
    pub description: &'static str,
}

impl MetricObservation {
    pub fn new(name: &'static str, value: f64, description: &'static str) -> Self {
        Self {
            name,
            value,
            description,
        }
    }
}
