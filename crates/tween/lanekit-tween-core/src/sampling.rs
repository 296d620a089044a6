#![allow(dead_code)]
//! Keyframe sampling: bracket an eased time, resolve "inherit" entries
//! against the live target, and write interpolated properties through the
//! `Tweenable` seam.
//!
//! Model:
//! - Frames have strictly increasing times in [0,1]; they need not start at
//!   0 or end at 1. Outside the covered span the nearest frame holds.
//! - An "inherit" entry (or a property absent from a bracketing frame) is
//!   captured from the live target the first time it is needed and written
//!   back into the frame. The animator hands each animation a private clone
//!   of its set, so captures never leak between animations.

use crate::data::{KeyValue, Keyframe, KeyframeSet};
use crate::path::PropertyPath;
use crate::target::Tweenable;

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Find the pair of frame indices bracketing time t, and the local blend
/// factor between them.
/// Edge cases:
/// - If t <= first.time, returns (0, 0, 0) and values hold at the first frame.
/// - If t >= last.time, returns (last, last, 0) and values hold at the last frame.
fn bracket(frames: &[Keyframe], t: f32) -> (usize, usize, f32) {
    let n = frames.len();
    if n == 0 {
        return (0, 0, 0.0);
    }
    if n == 1 || t <= frames[0].time {
        return (0, 0, 0.0);
    }
    if t >= frames[n - 1].time {
        return (n - 1, n - 1, 0.0);
    }
    // Linear scan (could be optimized to binary search if needed)
    for i in 0..(n - 1) {
        let t0 = frames[i].time;
        let t1 = frames[i + 1].time;
        if t >= t0 && t <= t1 {
            let denom = (t1 - t0).max(f32::EPSILON);
            let lt = (t - t0) / denom;
            return (i, i + 1, lt.clamp(0.0, 1.0));
        }
    }
    (n - 1, n - 1, 0.0)
}

/// Sample `set` at time `t` (already eased) and write every driven property
/// through `target`. `paths` is the set's base property list, precomputed by
/// the caller so the frames can be mutated for inherit capture while
/// iterating.
pub fn apply_keyframes<T>(set: &mut KeyframeSet, paths: &[PropertyPath], t: f32, target: &mut T)
where
    T: Tweenable + ?Sized,
{
    if set.frames.is_empty() {
        return;
    }
    let (i0, i1, lt) = bracket(&set.frames, t);
    for path in paths {
        let a = resolve_value(&mut set.frames, i0, path, target);
        let b = resolve_value(&mut set.frames, i1, path, target);
        target.set_property(path, lerp_f32(a, b, lt));
    }
}

/// Value of `path` in frame `idx`, capturing from the target when the entry
/// is "inherit" or missing. The capture is written back so later ticks see a
/// stable value. A property the target itself lacks captures 0.0.
fn resolve_value<T>(frames: &mut [Keyframe], idx: usize, path: &PropertyPath, target: &T) -> f32
where
    T: Tweenable + ?Sized,
{
    match frames[idx].props.get(path) {
        Some(KeyValue::Number(v)) => *v,
        _ => {
            let live = target.property(path).unwrap_or(0.0);
            frames[idx].props.insert(path.clone(), KeyValue::Number(live));
            live
        }
    }
}
