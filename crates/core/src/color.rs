//! Kinematic heat to color mapping.
//!
//! Particles are tinted by a "heat" scalar in [0, 1] derived from their speed
//! and distance from the world origin: cool blue when drifting far out, through
//! orange, to red when fast and close in. The mapping is three linear segments
//! whose band edges are deliberately not continuous in every channel — the
//! gradient was calibrated visually against the mapped output, so the jumps at
//! 0.3 and 0.6 are part of the look and must not be smoothed over.

use serde::{Deserialize, Serialize};

/// RGB color with f32 components, nominally in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Heat value where the cool band ends and the warm band begins.
const WARM_THRESHOLD: f32 = 0.3;
/// Heat value where the warm band ends and the hot band begins.
const HOT_THRESHOLD: f32 = 0.6;

/// Maps a heat scalar in [0, 1] to an RGB color.
///
/// Three linear segments:
/// - cool (`heat < 0.3`): blue tones brightening with heat;
/// - warm (`0.3 <= heat < 0.6`): orange tones;
/// - hot (`heat >= 0.6`): saturated red, green/blue draining to zero.
///
/// No clamping is applied; callers must guarantee `heat` is in [0, 1].
/// The pool's heat formula provides that guarantee (bounded term plus an
/// outer `min`).
pub fn heat_to_color(heat: f32) -> Rgb {
    if heat < WARM_THRESHOLD {
        Rgb::new(0.3 + heat, 0.4 + heat, 0.7 + heat)
    } else if heat < HOT_THRESHOLD {
        let t = (heat - WARM_THRESHOLD) / 0.3;
        Rgb::new(0.6 + t * 0.4, 0.4 + t * 0.2, 0.3 - t * 0.3)
    } else {
        let t = (heat - HOT_THRESHOLD) / 0.4;
        Rgb::new(1.0, 0.3 - t * 0.3, 0.1 - t * 0.1)
    }
}
