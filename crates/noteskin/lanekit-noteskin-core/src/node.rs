//! The visual node generators produce.
//!
//! Nodes are renderer-agnostic: a sprite identifier plus a bag of
//! animatable numeric properties the render layer samples when drawing.
//! Generators hand out `SharedNode` handles; the hubs and the animator
//! hold weak references, so dropping the last `SharedNode` unregisters
//! everything attached to it within one frame.

use lanekit_tween_core::{PropBag, PropertyPath, Tweenable};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Strong handle to a node, shared between the owner and its generators.
pub type SharedNode = Rc<RefCell<Node>>;

/// Weak handle the hubs and animator hold between frames.
pub type WeakNode = Weak<RefCell<Node>>;

#[derive(Clone, Debug, Default)]
pub struct Node {
    /// Sprite/asset identifier the render layer maps to a drawable.
    pub sprite: String,
    /// Animatable properties (zoom, alpha, rotation, nested bags).
    pub props: PropBag,
    /// Failure description carried by placeholder nodes when the owning
    /// skin has debug elements enabled.
    pub diagnostic: Option<String>,
}

impl Node {
    pub fn with_sprite(sprite: &str) -> SharedNode {
        Rc::new(RefCell::new(Node {
            sprite: sprite.to_string(),
            ..Default::default()
        }))
    }
}

impl Tweenable for Node {
    fn property(&self, path: &PropertyPath) -> Option<f32> {
        self.props.get(path)
    }

    fn set_property(&mut self, path: &PropertyPath, value: f32) {
        self.props.set(path, value);
    }
}
