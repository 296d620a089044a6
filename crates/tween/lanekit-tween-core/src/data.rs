#![allow(dead_code)]
//! Canonical tween data model (keyframe sets).
//!
//! A KeyframeSet holds frames at strictly increasing normalized times in
//! [0,1]. Each frame maps property paths to either a number or the
//! "inherit" sentinel, which is captured from the live target the first
//! time the frame is sampled.

use crate::path::PropertyPath;
use hashbrown::HashMap;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// JSON spelling of the capture sentinel.
pub const INHERIT: &str = "inherit";

/// A single animated value inside a keyframe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyValue {
    Number(f32),
    /// Placeholder resolved against the live target on first use.
    Inherit,
}

// Serde support: a bare number or the string "inherit".
impl Serialize for KeyValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            KeyValue::Number(n) => serializer.serialize_f32(*n),
            KeyValue::Inherit => serializer.serialize_str(INHERIT),
        }
    }
}

impl<'de> Deserialize<'de> for KeyValue {
    fn deserialize<D>(deserializer: D) -> Result<KeyValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        match raw {
            serde_json::Value::Number(n) => {
                let v = n
                    .as_f64()
                    .ok_or_else(|| de::Error::custom("keyframe value is not a finite number"))?;
                Ok(KeyValue::Number(v as f32))
            }
            serde_json::Value::String(s) if s == INHERIT => Ok(KeyValue::Inherit),
            other => Err(de::Error::custom(format!(
                "keyframe value must be a number or \"{INHERIT}\", got {other}"
            ))),
        }
    }
}

/// A single keyframe in normalized time [0..1].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Keyframe {
    /// Normalized time in [0,1] within the tween duration.
    pub time: f32,
    pub props: HashMap<PropertyPath, KeyValue>,
}

impl Keyframe {
    pub fn at(time: f32) -> Self {
        Self {
            time,
            props: HashMap::new(),
        }
    }

    /// Chainable insert, mainly for building sets in code.
    pub fn with(mut self, path: PropertyPath, value: KeyValue) -> Self {
        self.props.insert(path, value);
        self
    }

    pub fn insert(&mut self, path: PropertyPath, value: KeyValue) {
        self.props.insert(path, value);
    }
}

/// An ordered set of keyframes describing one tween's property curves.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct KeyframeSet {
    pub frames: Vec<Keyframe>,
}

impl KeyframeSet {
    pub fn new(frames: Vec<Keyframe>) -> Self {
        Self { frames }
    }

    /// Validate basic invariants (finite times in [0,1], strictly increasing).
    pub fn validate_basic(&self) -> Result<(), String> {
        let mut last = -f32::INFINITY;
        for frame in &self.frames {
            if !frame.time.is_finite() || frame.time < 0.0 || frame.time > 1.0 {
                return Err("keyframe time must be in [0,1] and finite".into());
            }
            if frame.time == last {
                return Err(format!("duplicate keyframe time {}", frame.time));
            }
            if frame.time < last {
                return Err("keyframe times must be strictly increasing".into());
            }
            last = frame.time;
        }
        Ok(())
    }

    /// Paths animated by this set: the property list of the base frame.
    /// Properties appearing only in later frames are not driven.
    pub fn base_paths(&self) -> Vec<PropertyPath> {
        self.frames
            .first()
            .map(|f| f.props.keys().cloned().collect())
            .unwrap_or_default()
    }
}
