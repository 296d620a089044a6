#![allow(dead_code)]
//! Animator: tween ownership and the per-frame tick that drives every
//! registered animation.
//!
//! Methods:
//! - animate (register/replace), stop (cancel, optional snap), tick,
//!   is_active/active_len/clear
//!
//! The animator is an owned instance: the render-loop owner constructs one,
//! threads it through frame contexts, and ticks it once per frame. Keys are
//! scoped to the instance. Targets are held weakly; dropping a target's last
//! strong handle cancels its tweens on the next tick with no callback.

use crate::data::KeyframeSet;
use crate::ease::Ease;
use crate::path::PropertyPath;
use crate::sampling::apply_keyframes;
use crate::target::Tweenable;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Key under which a tween is registered. Registering another tween with
/// the same key replaces the first without firing its callback.
pub type TweenKey = String;

/// Type-erased weak handle the animator holds between ticks.
pub type WeakTarget = Weak<RefCell<dyn Tweenable>>;

/// One-shot callback invoked after natural completion only. Cancellation
/// via `stop` or target drop never fires it.
pub type OnEnd = Box<dyn FnOnce(&mut Animator)>;

/// Configuration for registering a tween.
#[derive(Default)]
pub struct TweenCfg {
    /// Explicit key. When absent, the animator allocates one with the
    /// "__auto:" prefix; avoid that prefix for explicit keys.
    pub key: Option<TweenKey>,
    pub ease: Ease,
    pub on_end: Option<OnEnd>,
}

/// A registered tween. Private: owned and advanced by the animator.
struct Animation {
    key: TweenKey,
    target: WeakTarget,
    /// Private clone of the authored set; inherit captures land here.
    frames: KeyframeSet,
    /// Property list from the base frame, precomputed at registration.
    paths: Vec<PropertyPath>,
    /// Progress gained per second: 1 / duration.
    speed: f32,
    /// Raw progress in [0,1]; easing applies on top per tick.
    progress: f32,
    ease: Ease,
    on_end: Option<OnEnd>,
}

/// Owns active tweens and applies them once per `tick`.
#[derive(Default)]
pub struct Animator {
    tweens: Vec<Animation>,
    next_auto: u32,
}

impl fmt::Debug for Animator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animator")
            .field("active", &self.tweens.len())
            .field("next_auto", &self.next_auto)
            .finish()
    }
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tween driving `target` with a private copy of `frames`
    /// over `duration_secs`. Returns the key it was registered under.
    ///
    /// A non-positive or non-finite duration registers the tween already
    /// completed: the next tick snaps to the end frame and fires `on_end`.
    pub fn animate<T>(
        &mut self,
        target: &Rc<RefCell<T>>,
        frames: &KeyframeSet,
        duration_secs: f32,
        cfg: TweenCfg,
    ) -> TweenKey
    where
        T: Tweenable + 'static,
    {
        let erased: Rc<RefCell<dyn Tweenable>> = target.clone();
        self.animate_dyn(Rc::downgrade(&erased), frames, duration_secs, cfg)
    }

    /// `animate` for an already type-erased target handle.
    pub fn animate_dyn(
        &mut self,
        target: WeakTarget,
        frames: &KeyframeSet,
        duration_secs: f32,
        cfg: TweenCfg,
    ) -> TweenKey {
        let key = match cfg.key {
            Some(key) => key,
            None => self.alloc_key(),
        };
        // Re-registration under an existing key replaces the old tween
        // outright; its callback is dropped unfired.
        self.tweens.retain(|a| a.key != key);

        let (speed, progress) = if duration_secs > 0.0 && duration_secs.is_finite() {
            (1.0 / duration_secs, 0.0)
        } else {
            (0.0, 1.0)
        };

        self.tweens.push(Animation {
            key: key.clone(),
            target,
            frames: frames.clone(),
            paths: frames.base_paths(),
            speed,
            progress,
            ease: cfg.ease,
            on_end: cfg.on_end,
        });
        key
    }

    /// Cancel the tween under `key`. With `final_time`, its keyframes are
    /// applied once at that raw (uneased) time first, snapping the target.
    /// `on_end` is never fired from here.
    pub fn stop(&mut self, key: &str, final_time: Option<f32>) {
        let idx = match self.tweens.iter().position(|a| a.key == key) {
            Some(i) => i,
            None => return,
        };
        let mut anim = self.tweens.remove(idx);
        if let Some(t) = final_time {
            if let Some(target) = anim.target.upgrade() {
                apply_keyframes(&mut anim.frames, &anim.paths, t, &mut *target.borrow_mut());
            }
        }
    }

    /// Advance every tween by `dt_secs`, applying eased keyframe values.
    /// Tweens whose target is gone are pruned silently. Tweens reaching
    /// progress 1 are removed and their callbacks run after the sweep, so a
    /// callback that chains a new tween sees the post-removal list and the
    /// chained tween first advances on the next frame.
    pub fn tick(&mut self, dt_secs: f32) {
        let mut finished: Vec<OnEnd> = Vec::new();
        let mut i = 0;
        while i < self.tweens.len() {
            let anim = &mut self.tweens[i];
            let target = match anim.target.upgrade() {
                Some(t) => t,
                None => {
                    self.tweens.remove(i);
                    continue;
                }
            };
            anim.progress = (anim.progress + anim.speed * dt_secs).clamp(0.0, 1.0);
            let eased = anim.ease.apply(anim.progress);
            apply_keyframes(
                &mut anim.frames,
                &anim.paths,
                eased,
                &mut *target.borrow_mut(),
            );
            if anim.progress >= 1.0 {
                let mut done = self.tweens.remove(i);
                if let Some(on_end) = done.on_end.take() {
                    finished.push(on_end);
                }
                continue;
            }
            i += 1;
        }
        for on_end in finished {
            on_end(self);
        }
    }

    /// Whether a tween is registered under `key`.
    pub fn is_active(&self, key: &str) -> bool {
        self.tweens.iter().any(|a| a.key == key)
    }

    pub fn active_len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Drop every tween without firing callbacks.
    pub fn clear(&mut self) {
        self.tweens.clear();
    }

    fn alloc_key(&mut self) -> TweenKey {
        let key = format!("__auto:{}", self.next_auto);
        self.next_auto = self.next_auto.wrapping_add(1);
        key
    }
}
