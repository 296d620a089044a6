#![allow(dead_code)]
//! Declarative noteskin runtime for the Lanekit editor.
//!
//! A skin is authored as data: per-column element tables (generators or
//! redirects), optional lifecycle hooks, metric overrides. This crate
//! resolves element requests against those tables with cycle detection,
//! runs the per-skin event/update hubs that drive feedback, and degrades
//! every authoring failure to a placeholder node instead of an error.
//!
//! Tweening itself lives in `lanekit-tween-core`; generators reach the
//! animator through the contexts this crate hands them.

pub mod elements;
pub mod error;
pub mod event;
pub mod hub;
pub mod metrics;
pub mod node;
pub mod noteskin;

pub use elements::{resolve, ElementDef, ElementDescriptor, ElementKey, ElementMap, Generator};
pub use error::SkinError;
pub use event::{ColumnRef, EventKind, Judgement, SkinEvent};
pub use hub::{EventHandler, EventHub, HookId, UpdateHandler, UpdateHub};
pub use metrics::Metrics;
pub use node::{Node, SharedNode, WeakNode};
pub use noteskin::{
    ElementCtx, FrameCtx, LoadOverride, Noteskin, NoteskinDef, SkinHook, PLACEHOLDER_SPRITE,
};
