#![allow(dead_code)]
//! Lanekit Tween Core (renderer-agnostic)
//!
//! Keyframe property tweening over weakly-held targets: string property
//! paths, authored keyframe sets with an "inherit" capture sentinel, cubic
//! bezier easing, and an `Animator` the render-loop owner ticks once per
//! frame. This crate defines the data model, the path accessor seam, the
//! sampling math, and the scheduler; it knows nothing about what it is
//! animating.

pub mod animator;
pub mod authoring;
pub mod data;
pub mod ease;
pub mod path;
pub mod sampling;
pub mod target;

// Re-exports for consumers (skins and hosts)
pub use animator::{Animator, OnEnd, TweenCfg, TweenKey, WeakTarget};
pub use authoring::parse_keyframe_set_json;
pub use data::{KeyValue, Keyframe, KeyframeSet};
pub use ease::Ease;
pub use path::{PathSegment, PropertyPath};
pub use sampling::apply_keyframes;
pub use target::{PropBag, PropValue, Tweenable};
