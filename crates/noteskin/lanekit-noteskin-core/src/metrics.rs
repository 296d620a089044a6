//! Per-skin numeric constants ("metrics").
//!
//! A skin can override any default and add its own names; generators and
//! the notefield read them through the owning skin. Read-only once the
//! skin is constructed.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metrics {
    values: HashMap<String, f32>,
}

impl Metrics {
    /// Built-in values every skin starts from.
    pub fn defaults() -> Self {
        let mut values = HashMap::new();
        values.insert("HoldBodyTopOffset".to_string(), -32.0);
        values.insert("HoldBodyBottomOffset".to_string(), 32.0);
        values.insert("RollBodyTopOffset".to_string(), -32.0);
        values.insert("RollBodyBottomOffset".to_string(), 32.0);
        values.insert("ReceptorPulseZoom".to_string(), 1.15);
        values.insert("JudgementY".to_string(), -64.0);
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<f32> {
        self.values.get(name).copied()
    }

    pub fn get_or(&self, name: &str, fallback: f32) -> f32 {
        self.get(name).unwrap_or(fallback)
    }

    /// Overlay `overrides`, replacing defaults name by name.
    pub fn merge(mut self, overrides: HashMap<String, f32>) -> Metrics {
        for (name, value) in overrides {
            self.values.insert(name, value);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_win_name_by_name() {
        let mut overrides = HashMap::new();
        overrides.insert("HoldBodyTopOffset".to_string(), -24.0);
        overrides.insert("ExplosionZoom".to_string(), 1.4);

        let metrics = Metrics::defaults().merge(overrides);
        assert_eq!(metrics.get("HoldBodyTopOffset"), Some(-24.0));
        assert_eq!(metrics.get("HoldBodyBottomOffset"), Some(32.0));
        assert_eq!(metrics.get("ExplosionZoom"), Some(1.4));
        assert_eq!(metrics.get("NoSuchMetric"), None);
        assert_eq!(metrics.get_or("NoSuchMetric", 7.0), 7.0);
    }

    #[test]
    fn metrics_deserialize_from_flat_json() {
        let parsed: Metrics =
            serde_json::from_str(r#"{ "JudgementY": -48.0, "ReceptorPulseZoom": 1.2 }"#).unwrap();
        assert_eq!(parsed.get("JudgementY"), Some(-48.0));
        assert_eq!(parsed.len(), 2);
    }
}
