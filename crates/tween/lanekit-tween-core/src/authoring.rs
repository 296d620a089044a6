use serde::Deserialize;
use std::collections::HashMap;

use crate::data::{KeyValue, Keyframe, KeyframeSet, INHERIT};
use crate::path::PropertyPath;

/// Public API: parse authored keyframe-set JSON into a canonical
/// [`KeyframeSet`] (data.rs).
///
/// Authored shape is a map from string-encoded normalized times to property
/// maps:
///
/// ```json
/// { "0": { "zoom": 1.25, "glow.alpha": 1 },
///   "1": { "zoom": 1.0,  "glow.alpha": "inherit" } }
/// ```
///
/// Notes:
/// - Times must parse as finite floats in [0,1]; frames are sorted by time.
/// - Two spellings of the same time ("0" and "0.0") are rejected.
/// - Property keys parse as PropertyPath; values are numbers or "inherit".
pub fn parse_keyframe_set_json(s: &str) -> Result<KeyframeSet, String> {
    let raw: HashMap<String, HashMap<String, RawKeyValue>> =
        serde_json::from_str(s).map_err(|e| format!("parse error: {e}"))?;

    let mut frames: Vec<Keyframe> = Vec::with_capacity(raw.len());
    for (stamp, props) in raw {
        let time: f32 = stamp
            .trim()
            .parse()
            .map_err(|_| format!("keyframe time '{stamp}' is not a number"))?;
        let mut frame = Keyframe::at(time);
        for (path, value) in props {
            let path = PropertyPath::parse(&path)?;
            frame.insert(path, to_key_value(value)?);
        }
        frames.push(frame);
    }
    frames.sort_by(|a, b| a.time.partial_cmp(&b.time).unwrap_or(std::cmp::Ordering::Equal));

    let set = KeyframeSet::new(frames);
    // Basic validation (times finite, in [0,1], strictly increasing)
    set.validate_basic()?;
    Ok(set)
}

fn to_key_value(raw: RawKeyValue) -> Result<KeyValue, String> {
    match raw {
        RawKeyValue::Number(n) => Ok(KeyValue::Number(n as f32)),
        RawKeyValue::Text(s) if s == INHERIT => Ok(KeyValue::Inherit),
        RawKeyValue::Text(s) => Err(format!("unsupported keyframe value '{s}'")),
    }
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawKeyValue {
    Number(f64),
    Text(String),
}
