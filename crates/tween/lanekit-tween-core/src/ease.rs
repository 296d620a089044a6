#![allow(dead_code)]
//! Easing curves applied to tween progress: linear, or CSS-style cubic
//! bezier evaluated by inverting the x polynomial.

use serde::{Deserialize, Serialize};

/// Timing curve mapping raw progress in [0,1] to eased progress.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub enum Ease {
    Linear,
    /// Control points (x1, y1, x2, y2); x components should lie in [0,1].
    Bezier([f32; 4]),
}

impl Default for Ease {
    fn default() -> Self {
        Ease::Linear
    }
}

impl Ease {
    pub fn bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Ease::Bezier([x1, y1, x2, y2])
    }

    /// Map raw progress to eased progress. Input is clamped to [0,1]; the
    /// output of an overshooting bezier may leave that range.
    #[inline]
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Ease::Linear => t.clamp(0.0, 1.0),
            Ease::Bezier([x1, y1, x2, y2]) => bezier_ease_t(t, *x1, *y1, *x2, *y2),
        }
    }
}

/// Cubic Bezier basis function
#[inline]
fn cubic_bezier(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Given control points (x1, y1, x2, y2) and an input t in [0,1],
/// compute the eased y by inverting the x bezier via binary search.
#[inline]
fn bezier_ease_t(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    // Fast path: Bezier(0,0,1,1) is exactly linear -> eased t == t
    if x1 == 0.0 && y1 == 0.0 && x2 == 1.0 && y2 == 1.0 {
        return t;
    }
    // Monotonic X in [0,1] assumed for x1/x2 ∈ [0,1]
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut mid = t;
    // Increase precision to reduce error for near-linear curves
    for _ in 0..24 {
        let x = cubic_bezier(0.0, x1, x2, 1.0, mid);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    cubic_bezier(0.0, y1, y2, 1.0, mid)
}
