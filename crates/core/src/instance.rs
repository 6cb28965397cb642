//! The per-particle transform element exposed to render adapters.

use crate::color::Rgb;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One renderable particle transform: position, Euler rotation, uniform
/// scale, and color.
///
/// A source exposes its particles as an index-aligned `&[Instance]` slice —
/// element `i` always describes particle `i` of the pool. The slice is only
/// valid as a whole-tick snapshot: sources rebuild it after all particles
/// have been updated, so readers never observe a half-updated frame.
/// Adapters receive it read-only and must copy anything they want to keep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    /// World position.
    pub position: Vec3,
    /// Euler angles in radians, applied XYZ.
    pub rotation: Vec3,
    /// Uniform scale factor.
    pub scale: f32,
    /// Current tint.
    pub color: Rgb,
}

impl Instance {
    pub fn new(position: Vec3, rotation: Vec3, scale: f32, color: Rgb) -> Self {
        Self {
            position,
            rotation,
            scale,
            color,
        }
    }
}
