#![allow(dead_code)]
//! Tween targets: the `Tweenable` seam the animator drives, plus `PropBag`,
//! a generic numeric property tree hosts can embed in their visuals.

use crate::path::{PathSegment, PropertyPath};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Anything the animator can read and write scalar properties on.
///
/// `property` returns `None` when the path does not resolve; `set_property`
/// is expected to create missing intermediates where the target's tree
/// allows it and to drop the write otherwise.
pub trait Tweenable {
    fn property(&self, path: &PropertyPath) -> Option<f32>;
    fn set_property(&mut self, path: &PropertyPath, value: f32);
}

/// One slot in a property tree.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PropValue {
    Number(f32),
    List(Vec<PropValue>),
    Object(HashMap<String, PropValue>),
}

/// String-keyed numeric property tree addressed by [`PropertyPath`].
///
/// Reads return `None` through missing or mismatched intermediates. Writes
/// create missing intermediate objects (and pad indexed lists) so the leaf
/// can always be assigned; writes through an existing non-container slot are
/// dropped.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct PropBag {
    entries: HashMap<String, PropValue>,
}

impl PropBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a top-level numeric property by name.
    pub fn set_number(&mut self, name: &str, value: f32) {
        self.entries
            .insert(name.to_string(), PropValue::Number(value));
    }

    /// Read a top-level numeric property by name.
    pub fn number(&self, name: &str) -> Option<f32> {
        match self.entries.get(name) {
            Some(PropValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    /// Read the numeric leaf at `path`.
    pub fn get(&self, path: &PropertyPath) -> Option<f32> {
        let (leaf, parents) = path.segments.split_last()?;
        let mut map = &self.entries;
        for seg in parents {
            match seg_value(map, seg)? {
                PropValue::Object(next) => map = next,
                _ => return None,
            }
        }
        match seg_value(map, leaf)? {
            PropValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Write the numeric leaf at `path`, vivifying intermediates.
    pub fn set(&mut self, path: &PropertyPath, value: f32) {
        let (leaf, parents) = match path.segments.split_last() {
            Some(split) => split,
            None => return,
        };
        let mut map = &mut self.entries;
        for seg in parents {
            map = match descend_mut(map, seg) {
                Some(next) => next,
                None => return,
            };
        }
        match leaf.index {
            None => {
                map.insert(leaf.name.clone(), PropValue::Number(value));
            }
            Some(i) => {
                let slot = map
                    .entry(leaf.name.clone())
                    .or_insert_with(|| PropValue::List(Vec::new()));
                if let PropValue::List(items) = slot {
                    if items.len() <= i {
                        items.resize(i + 1, PropValue::Number(0.0));
                    }
                    items[i] = PropValue::Number(value);
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve one segment against a map, applying its index when present.
fn seg_value<'a>(map: &'a HashMap<String, PropValue>, seg: &PathSegment) -> Option<&'a PropValue> {
    let value = map.get(&seg.name)?;
    match seg.index {
        None => Some(value),
        Some(i) => match value {
            PropValue::List(items) => items.get(i),
            _ => None,
        },
    }
}

/// Resolve one intermediate segment for writing, vivifying missing slots.
/// Returns `None` when an existing slot is not a container of the right
/// shape, which drops the write.
fn descend_mut<'a>(
    map: &'a mut HashMap<String, PropValue>,
    seg: &PathSegment,
) -> Option<&'a mut HashMap<String, PropValue>> {
    let slot = match seg.index {
        None => map
            .entry(seg.name.clone())
            .or_insert_with(|| PropValue::Object(HashMap::new())),
        Some(i) => {
            let value = map
                .entry(seg.name.clone())
                .or_insert_with(|| PropValue::List(Vec::new()));
            match value {
                PropValue::List(items) => {
                    if items.len() <= i {
                        items.resize(i + 1, PropValue::Object(HashMap::new()));
                    }
                    &mut items[i]
                }
                _ => return None,
            }
        }
    };
    match slot {
        PropValue::Object(next) => Some(next),
        _ => None,
    }
}

impl Tweenable for PropBag {
    fn property(&self, path: &PropertyPath) -> Option<f32> {
        self.get(path)
    }

    fn set_property(&mut self, path: &PropertyPath, value: f32) {
        self.set(path, value)
    }
}
