//! Per-particle force contributions.
//!
//! Each function returns a position displacement for one tick. Forces are
//! superposed by simple addition; there is no inter-particle coupling.
//! Direction-dependent forces shut off entirely inside a small singularity
//! radius instead of normalizing a near-zero vector.

use glam::Vec3;

/// Distance at or below which direction-dependent forces are skipped.
pub const SINGULARITY_RADIUS: f32 = 0.1;
/// Default pointer attraction strength per tick.
pub const DEFAULT_ATTRACT_STRENGTH: f32 = 0.003;
/// Default distance beyond which pointer attraction has faded to nothing.
pub const DEFAULT_ATTRACT_RANGE: f32 = 15.0;
/// Default x coordinate of the fixed sink; doubles as the exit boundary.
pub const DEFAULT_SINK_X: f32 = 6.0;
/// Per-tick gain toward the sink along x.
pub const SINK_GAIN_X: f32 = 0.001;
/// Per-tick gain toward the sink along y and z.
pub const SINK_GAIN_LATERAL: f32 = 0.0005;
/// Default soft boundary for |y| and |z|.
pub const DEFAULT_SOFT_BOUND: f32 = 4.0;
/// Default multiplicative decay applied outside the soft boundary.
pub const DEFAULT_DAMPING: f32 = 0.95;

/// Attraction toward the pointer, with linear falloff over `range`.
///
/// Returns zero when the pointer is within [`SINGULARITY_RADIUS`] of the
/// particle, and fades to zero once the pointer is `range` or further away.
pub fn pointer_pull(position: Vec3, pointer: Vec3, strength: f32, range: f32) -> Vec3 {
    let d = pointer - position;
    let dist = d.length();
    if dist <= SINGULARITY_RADIUS {
        return Vec3::ZERO;
    }
    let falloff = (1.0 - dist / range).max(0.0);
    d / dist * strength * falloff
}

/// Drift toward the fixed sink at `(sink_x, position.y, 0)`.
///
/// The sink target always matches the particle's current height, so the
/// pull is purely horizontal and depth-wise; vertical spread is preserved.
/// The per-axis gains are asymmetric: x moves at twice the lateral rate.
pub fn sink_pull(position: Vec3, sink_x: f32) -> Vec3 {
    let target = Vec3::new(sink_x, position.y, 0.0);
    let to_target = target - position;
    let dist = to_target.length();
    if dist <= SINGULARITY_RADIUS {
        return Vec3::ZERO;
    }
    Vec3::new(
        to_target.x / dist * SINK_GAIN_X,
        to_target.y / dist * SINK_GAIN_LATERAL,
        to_target.z / dist * SINK_GAIN_LATERAL,
    )
}

/// Soft boundary damping for a single coordinate.
///
/// Outside the bound the value decays multiplicatively toward it; inside,
/// the value passes through untouched. This never snaps the coordinate back
/// inside the bound in a single step.
pub fn soft_damp(value: f32, bound: f32, damping: f32) -> f32 {
    if value.abs() > bound {
        value * damping
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_pull_is_zero_inside_singularity_radius() {
        let pull = pointer_pull(
            Vec3::ZERO,
            Vec3::new(0.05, 0.0, 0.0),
            DEFAULT_ATTRACT_STRENGTH,
            DEFAULT_ATTRACT_RANGE,
        );
        assert_eq!(pull, Vec3::ZERO);
    }

    #[test]
    fn pointer_pull_points_toward_pointer() {
        let pull = pointer_pull(
            Vec3::ZERO,
            Vec3::new(3.0, 4.0, 0.0),
            DEFAULT_ATTRACT_STRENGTH,
            DEFAULT_ATTRACT_RANGE,
        );
        assert!(pull.x > 0.0, "x pull should be positive, got {}", pull.x);
        assert!(pull.y > 0.0, "y pull should be positive, got {}", pull.y);
        assert!(pull.z.abs() < 1e-9, "z pull should be zero, got {}", pull.z);
    }

    #[test]
    fn pointer_pull_magnitude_matches_linear_falloff() {
        // At distance 5 with range 15: strength * (1 - 5/15) = 0.003 * 2/3.
        let pull = pointer_pull(
            Vec3::ZERO,
            Vec3::new(5.0, 0.0, 0.0),
            DEFAULT_ATTRACT_STRENGTH,
            DEFAULT_ATTRACT_RANGE,
        );
        assert!(
            (pull.length() - 0.002).abs() < 1e-6,
            "expected 0.002, got {}",
            pull.length()
        );
    }

    #[test]
    fn pointer_pull_fades_to_zero_beyond_range() {
        let pull = pointer_pull(
            Vec3::ZERO,
            Vec3::new(20.0, 0.0, 0.0),
            DEFAULT_ATTRACT_STRENGTH,
            DEFAULT_ATTRACT_RANGE,
        );
        assert_eq!(pull, Vec3::ZERO);
    }

    #[test]
    fn sink_pull_moves_right_when_left_of_sink() {
        let pull = sink_pull(Vec3::new(-3.0, 1.0, 0.0), DEFAULT_SINK_X);
        assert!(pull.x > 0.0, "x pull should be positive, got {}", pull.x);
        // Target sits at the particle's own height: no vertical pull.
        assert!(pull.y.abs() < 1e-9, "y pull should be zero, got {}", pull.y);
    }

    #[test]
    fn sink_pull_centers_depth() {
        let above = sink_pull(Vec3::new(0.0, 0.0, 2.0), DEFAULT_SINK_X);
        let below = sink_pull(Vec3::new(0.0, 0.0, -2.0), DEFAULT_SINK_X);
        assert!(above.z < 0.0, "z should pull toward 0, got {}", above.z);
        assert!(below.z > 0.0, "z should pull toward 0, got {}", below.z);
    }

    #[test]
    fn sink_pull_x_gain_is_twice_lateral_gain() {
        // Particle directly left of the sink plane with equal x and z offsets.
        let pull = sink_pull(Vec3::new(DEFAULT_SINK_X - 3.0, 0.0, 3.0), DEFAULT_SINK_X);
        assert!(
            (pull.x.abs() - 2.0 * pull.z.abs()).abs() < 1e-7,
            "expected 2:1 gain ratio, got x={} z={}",
            pull.x,
            pull.z
        );
    }

    #[test]
    fn sink_pull_is_zero_at_the_sink() {
        let pull = sink_pull(Vec3::new(DEFAULT_SINK_X, 2.5, 0.0), DEFAULT_SINK_X);
        assert_eq!(pull, Vec3::ZERO);
    }

    #[test]
    fn soft_damp_passes_values_inside_the_bound() {
        assert_eq!(soft_damp(3.9, DEFAULT_SOFT_BOUND, DEFAULT_DAMPING), 3.9);
        assert_eq!(soft_damp(-4.0, DEFAULT_SOFT_BOUND, DEFAULT_DAMPING), -4.0);
        assert_eq!(soft_damp(0.0, DEFAULT_SOFT_BOUND, DEFAULT_DAMPING), 0.0);
    }

    #[test]
    fn soft_damp_decays_values_outside_the_bound() {
        let damped = soft_damp(4.5, DEFAULT_SOFT_BOUND, DEFAULT_DAMPING);
        assert!((damped - 4.275).abs() < 1e-6, "got {damped}");
        let damped_neg = soft_damp(-4.5, DEFAULT_SOFT_BOUND, DEFAULT_DAMPING);
        assert!((damped_neg + 4.275).abs() < 1e-6, "got {damped_neg}");
    }

    #[test]
    fn soft_damp_never_snaps_inside_the_bound() {
        // Even a far-out value only shrinks by the damping factor per call.
        let damped = soft_damp(40.0, DEFAULT_SOFT_BOUND, DEFAULT_DAMPING);
        assert!((damped - 38.0).abs() < 1e-5, "got {damped}");
        assert!(damped > DEFAULT_SOFT_BOUND);
    }
}
