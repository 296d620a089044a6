#![allow(dead_code)]
//! The noteskin façade: element resolution, hubs and metrics behind the
//! one entry point the rendering layer uses, `get_element`.
//!
//! A `Noteskin` is built from a declarative `NoteskinDef` once per view
//! or skin selection and dropped on skin change. The animator is not
//! owned here: the render-loop owner constructs one next to the skin and
//! passes it into each frame context, so tween keys stay scoped to that
//! owner.

use crate::elements::{resolve, ElementDescriptor, ElementKey, ElementMap};
use crate::error::SkinError;
use crate::event::{ColumnRef, SkinEvent};
use crate::hub::{EventHub, UpdateHub};
use crate::metrics::Metrics;
use crate::node::{Node, SharedNode};
use hashbrown::HashMap;
use lanekit_tween_core::Animator;
use std::fmt;
use std::rc::Rc;

/// Sprite id carried by placeholder nodes; the render layer maps it to
/// a visible broken-element marker.
pub const PLACEHOLDER_SPRITE: &str = "__placeholder";

/// Per-frame context threaded through update and broadcast passes.
pub struct FrameCtx<'a> {
    /// Seconds since the previous frame.
    pub dt: f32,
    /// Chart position of the current frame.
    pub beat: f32,
    pub second: f32,
    pub animator: &'a mut Animator,
}

/// Context handed to element generators while they build a node.
pub struct ElementCtx<'a> {
    pub elements: &'a ElementMap,
    pub events: &'a mut EventHub,
    pub updates: &'a mut UpdateHub,
    pub animator: &'a mut Animator,
    pub metrics: &'a Metrics,
    /// Column the element is being built for. After a redirect this is
    /// the redirected column, not the requested one.
    pub column: ColumnRef,
    /// Element key the request named, before any redirects.
    pub element: ElementKey,
}

impl ElementCtx<'_> {
    /// Build another element of the same skin, for composition. Errors
    /// propagate to the caller; inside `get_element` they still end up
    /// as a placeholder.
    pub fn build(&mut self, desc: &ElementDescriptor) -> Result<SharedNode, SkinError> {
        let (generator, column) = resolve(self.elements, desc)?;
        let mut ctx = ElementCtx {
            elements: self.elements,
            events: &mut *self.events,
            updates: &mut *self.updates,
            animator: &mut *self.animator,
            metrics: self.metrics,
            column,
            element: desc.element.clone(),
        };
        (*generator)(&mut ctx)
    }
}

/// Hook run at skin activation or once per frame.
pub type SkinHook = Rc<dyn Fn(&mut FrameCtx<'_>)>;

/// Full resolution override. When a skin supplies one, every
/// `get_element` call goes through it instead of the element tables.
pub type LoadOverride =
    Rc<dyn Fn(&ElementDescriptor, &mut ElementCtx<'_>) -> Result<SharedNode, SkinError>>;

/// Declarative authoring surface: everything a skin provides.
#[derive(Clone, Default)]
pub struct NoteskinDef {
    pub name: String,
    pub elements: ElementMap,
    /// Replaces the default resolution path entirely when present.
    pub load: Option<LoadOverride>,
    pub init: Option<SkinHook>,
    pub update: Option<SkinHook>,
    /// Merged over built-in metric defaults at construction.
    pub metrics: HashMap<String, f32>,
    /// Element keys the editor should not draw lane icons for.
    pub hide_icons: Vec<ElementKey>,
}

impl fmt::Debug for NoteskinDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elements: usize = self.elements.values().map(HashMap::len).sum();
        f.debug_struct("NoteskinDef")
            .field("name", &self.name)
            .field("columns", &self.elements.len())
            .field("elements", &elements)
            .field("load", &self.load.is_some())
            .field("init", &self.init.is_some())
            .field("update", &self.update.is_some())
            .field("metrics", &self.metrics.len())
            .field("hide_icons", &self.hide_icons)
            .finish()
    }
}

/// A live skin instance: the def plus its hubs and merged metrics.
#[derive(Debug)]
pub struct Noteskin {
    def: NoteskinDef,
    events: EventHub,
    updates: UpdateHub,
    metrics: Metrics,
    debug_elements: bool,
    initialized: bool,
}

impl Noteskin {
    pub fn new(def: NoteskinDef) -> Self {
        let metrics = Metrics::defaults().merge(def.metrics.clone());
        Noteskin {
            def,
            events: EventHub::default(),
            updates: UpdateHub::default(),
            metrics,
            debug_elements: false,
            initialized: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.def.name
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// When enabled, placeholder nodes carry the failure text in their
    /// `diagnostic` field so the editor can show what broke.
    pub fn set_debug_elements(&mut self, on: bool) {
        self.debug_elements = on;
    }

    pub fn is_icon_hidden(&self, element: &str) -> bool {
        self.def.hide_icons.iter().any(|e| e == element)
    }

    pub fn events(&mut self) -> &mut EventHub {
        &mut self.events
    }

    pub fn updates(&mut self) -> &mut UpdateHub {
        &mut self.updates
    }

    /// Run the skin's activation hook. Repeat calls are ignored.
    pub fn init(&mut self, ctx: &mut FrameCtx<'_>) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        if let Some(hook) = &self.def.init {
            (**hook)(ctx);
        }
    }

    /// Per-frame pass: the skin's own hook first, then node update hooks
    /// in registration order.
    pub fn update(&mut self, ctx: &mut FrameCtx<'_>) {
        if let Some(hook) = &self.def.update {
            (**hook)(ctx);
        }
        self.updates.update(ctx);
    }

    /// Dispatch a gameplay event to handlers registered for its kind.
    pub fn broadcast(&mut self, event: &SkinEvent, ctx: &mut FrameCtx<'_>) {
        self.events.broadcast(event, ctx);
    }

    /// Produce the visual for `desc`. Resolution and generator failures
    /// degrade to a placeholder node; this never fails.
    pub fn get_element(
        &mut self,
        desc: &ElementDescriptor,
        animator: &mut Animator,
    ) -> SharedNode {
        match self.build_element(desc, animator) {
            Ok(node) => node,
            Err(e) => {
                log::warn!(
                    "noteskin '{}': {e}; placeholder for {}/{}",
                    self.def.name,
                    desc.column_name,
                    desc.element
                );
                self.placeholder(&e)
            }
        }
    }

    fn build_element(
        &mut self,
        desc: &ElementDescriptor,
        animator: &mut Animator,
    ) -> Result<SharedNode, SkinError> {
        if let Some(load) = &self.def.load {
            let load = Rc::clone(load);
            let mut ctx = ElementCtx {
                elements: &self.def.elements,
                events: &mut self.events,
                updates: &mut self.updates,
                animator,
                metrics: &self.metrics,
                column: ColumnRef::new(desc.column_name.clone(), desc.column_number),
                element: desc.element.clone(),
            };
            return (*load)(desc, &mut ctx);
        }

        let (generator, column) = resolve(&self.def.elements, desc)?;
        let mut ctx = ElementCtx {
            elements: &self.def.elements,
            events: &mut self.events,
            updates: &mut self.updates,
            animator,
            metrics: &self.metrics,
            column,
            element: desc.element.clone(),
        };
        (*generator)(&mut ctx)
    }

    fn placeholder(&self, err: &SkinError) -> SharedNode {
        let node = Node::with_sprite(PLACEHOLDER_SPRITE);
        if self.debug_elements {
            node.borrow_mut().diagnostic = Some(err.to_string());
        }
        node
    }
}
