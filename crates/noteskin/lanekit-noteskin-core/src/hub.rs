#![allow(dead_code)]
//! Event and update hubs: per-skin pub/sub scoped to node lifetimes.
//!
//! Hooks hold a weak reference to the node they animate. A broadcast or
//! update pass upgrades each hook's node first; hooks whose node is gone
//! are dropped during the pass, so teardown needs no explicit call. For
//! eager removal (a node re-skinning itself, say) both hubs also return
//! a `HookId` that `off` accepts.
//!
//! Within one pass hooks run in registration order. Nothing is
//! guaranteed across passes or across event kinds.

use crate::event::{EventKind, SkinEvent};
use crate::node::{SharedNode, WeakNode};
use crate::noteskin::FrameCtx;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// Subscription handle, scoped to the hub that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HookId(pub u32);

/// Handler for one event kind. Receives the subscribing node (already
/// upgraded for this call) so it can start tweens on it through the
/// frame context's animator.
pub type EventHandler = Box<dyn Fn(&SharedNode, &SkinEvent, &mut FrameCtx<'_>)>;

/// Handler invoked once per frame.
pub type UpdateHandler = Box<dyn Fn(&SharedNode, &mut FrameCtx<'_>)>;

struct EventHook {
    id: HookId,
    node: WeakNode,
    handler: EventHandler,
}

struct UpdateHook {
    id: HookId,
    node: WeakNode,
    handler: UpdateHandler,
}

/// Pub/sub keyed by event kind.
#[derive(Default)]
pub struct EventHub {
    hooks: HashMap<EventKind, Vec<EventHook>>,
    next_hook: u32,
}

impl fmt::Debug for EventHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total: usize = self.hooks.values().map(Vec::len).sum();
        f.debug_struct("EventHub")
            .field("hooks", &total)
            .field("next_hook", &self.next_hook)
            .finish()
    }
}

impl EventHub {
    /// Subscribe `node` to `kind`. The hook lives until the node is
    /// dropped or `off` is called with the returned id.
    pub fn on(&mut self, node: &SharedNode, kind: EventKind, handler: EventHandler) -> HookId {
        let id = self.alloc_id();
        self.hooks.entry(kind).or_default().push(EventHook {
            id,
            node: Rc::downgrade(node),
            handler,
        });
        id
    }

    /// Remove one hook. Unknown ids are ignored.
    pub fn off(&mut self, kind: EventKind, id: HookId) {
        if let Some(list) = self.hooks.get_mut(&kind) {
            list.retain(|hook| hook.id != id);
        }
    }

    /// Invoke every live hook registered for the event's kind, in
    /// registration order. Hooks whose node is gone are dropped.
    pub fn broadcast(&mut self, event: &SkinEvent, ctx: &mut FrameCtx<'_>) {
        if let Some(list) = self.hooks.get_mut(&event.kind()) {
            list.retain(|hook| match hook.node.upgrade() {
                Some(node) => {
                    (hook.handler)(&node, event, ctx);
                    true
                }
                None => false,
            });
        }
    }

    /// Hooks currently registered for `kind`, including not-yet-pruned
    /// ones whose node is already gone.
    pub fn count(&self, kind: EventKind) -> usize {
        self.hooks.get(&kind).map(Vec::len).unwrap_or(0)
    }

    fn alloc_id(&mut self) -> HookId {
        let id = HookId(self.next_hook);
        self.next_hook = self.next_hook.wrapping_add(1);
        id
    }
}

/// Per-frame subscriber set.
#[derive(Default)]
pub struct UpdateHub {
    hooks: Vec<UpdateHook>,
    next_hook: u32,
}

impl fmt::Debug for UpdateHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateHub")
            .field("hooks", &self.hooks.len())
            .field("next_hook", &self.next_hook)
            .finish()
    }
}

impl UpdateHub {
    pub fn on_update(&mut self, node: &SharedNode, handler: UpdateHandler) -> HookId {
        let id = HookId(self.next_hook);
        self.next_hook = self.next_hook.wrapping_add(1);
        self.hooks.push(UpdateHook {
            id,
            node: Rc::downgrade(node),
            handler,
        });
        id
    }

    pub fn off(&mut self, id: HookId) {
        self.hooks.retain(|hook| hook.id != id);
    }

    /// Run every live hook once, in registration order, pruning dead ones.
    pub fn update(&mut self, ctx: &mut FrameCtx<'_>) {
        self.hooks.retain(|hook| match hook.node.upgrade() {
            Some(node) => {
                (hook.handler)(&node, ctx);
                true
            }
            None => false,
        });
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}
