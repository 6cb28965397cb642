//! Emission classes and their spawn distributions.
//!
//! Every particle is permanently assigned one of three emission regions on
//! the reactor silhouette (core, piston ring, top vent) by `index mod 3`.
//! The same sampling function produces a particle's state both at pool
//! construction and at every recycle, so the initial and recycled
//! distributions can never drift apart.

use glam::Vec3;
use particle_field_core::Xorshift64;

/// X coordinate the reactor silhouette is centered on.
const EMITTER_X: f32 = -3.0;
/// Core region half-extents around the emitter (x and z).
const CORE_JITTER: f32 = 0.25;
/// Core region vertical half-extent.
const CORE_Y_SPAN: f32 = 1.5;
/// Piston ring radius in the x/z plane.
const RING_RADIUS: f32 = 2.0;
/// Piston ring vertical band.
const RING_Y_MIN: f32 = -2.0;
const RING_Y_MAX: f32 = -1.5;
/// Top vent half-extents (x and z).
const TOP_JITTER: f32 = 0.5;
/// Top vent vertical band.
const TOP_Y_MIN: f32 = 2.0;
const TOP_Y_MAX: f32 = 2.5;

/// Rightward flow speed range.
const VX_MIN: f32 = 0.02;
const VX_MAX: f32 = 0.035;
/// Vertical drift half-range.
const VY_DRIFT: f32 = 0.0015;
/// Depth drift half-range.
const VZ_DRIFT: f32 = 0.001;

/// Which region of the reactor a particle is emitted from.
///
/// Assigned once at construction and never changed for the lifetime of the
/// particle; recycling re-samples from the same region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmissionClass {
    /// The reactor core: a tight vertical column.
    Core,
    /// The piston ring: a circle in the x/z plane below the core.
    Ring,
    /// The top vent: a small box above the core.
    Top,
}

impl EmissionClass {
    /// Round-robin class assignment from a particle index.
    pub fn from_index(index: usize) -> Self {
        match index % 3 {
            0 => EmissionClass::Core,
            1 => EmissionClass::Ring,
            _ => EmissionClass::Top,
        }
    }
}

/// Samples a fresh (position, velocity) pair for the given emission class.
///
/// Called both at pool initialization and at every recycle event. Velocity
/// is rightward-biased for all classes so the exhaust streams toward the
/// sink on the right edge of the field.
pub fn spawn(class: EmissionClass, rng: &mut Xorshift64) -> (Vec3, Vec3) {
    let position = match class {
        EmissionClass::Core => Vec3::new(
            EMITTER_X + rng.next_range(-CORE_JITTER, CORE_JITTER),
            rng.next_range(-CORE_Y_SPAN, CORE_Y_SPAN),
            rng.next_range(-CORE_JITTER, CORE_JITTER),
        ),
        EmissionClass::Ring => {
            let angle = rng.next_angle();
            Vec3::new(
                EMITTER_X + angle.cos() * RING_RADIUS,
                rng.next_range(RING_Y_MIN, RING_Y_MAX),
                angle.sin() * RING_RADIUS,
            )
        }
        EmissionClass::Top => Vec3::new(
            EMITTER_X + rng.next_range(-TOP_JITTER, TOP_JITTER),
            rng.next_range(TOP_Y_MIN, TOP_Y_MAX),
            rng.next_range(-TOP_JITTER, TOP_JITTER),
        ),
    };

    let velocity = Vec3::new(
        rng.next_range(VX_MIN, VX_MAX),
        rng.next_range(-VY_DRIFT, VY_DRIFT),
        rng.next_range(-VZ_DRIFT, VZ_DRIFT),
    );

    (position, velocity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_index_cycles_through_all_classes() {
        assert_eq!(EmissionClass::from_index(0), EmissionClass::Core);
        assert_eq!(EmissionClass::from_index(1), EmissionClass::Ring);
        assert_eq!(EmissionClass::from_index(2), EmissionClass::Top);
        assert_eq!(EmissionClass::from_index(3), EmissionClass::Core);
        assert_eq!(EmissionClass::from_index(149), EmissionClass::Top);
    }

    #[test]
    fn core_positions_stay_in_the_core_band() {
        let mut rng = Xorshift64::new(42);
        for _ in 0..1000 {
            let (pos, _) = spawn(EmissionClass::Core, &mut rng);
            assert!(
                (-3.25..=-2.75).contains(&pos.x),
                "core x out of band: {}",
                pos.x
            );
            assert!((-1.5..=1.5).contains(&pos.y), "core y out of band: {}", pos.y);
            assert!(
                (-0.25..=0.25).contains(&pos.z),
                "core z out of band: {}",
                pos.z
            );
        }
    }

    #[test]
    fn ring_positions_lie_on_the_ring_circle() {
        let mut rng = Xorshift64::new(42);
        for _ in 0..1000 {
            let (pos, _) = spawn(EmissionClass::Ring, &mut rng);
            let radial = ((pos.x + 3.0).powi(2) + pos.z.powi(2)).sqrt();
            assert!(
                (radial - 2.0).abs() < 1e-5,
                "ring radius off: {radial} at {pos:?}"
            );
            assert!(
                (-2.0..=-1.5).contains(&pos.y),
                "ring y out of band: {}",
                pos.y
            );
        }
    }

    #[test]
    fn top_positions_stay_in_the_vent_band() {
        let mut rng = Xorshift64::new(42);
        for _ in 0..1000 {
            let (pos, _) = spawn(EmissionClass::Top, &mut rng);
            assert!(
                (-3.5..=-2.5).contains(&pos.x),
                "top x out of band: {}",
                pos.x
            );
            assert!((2.0..=2.5).contains(&pos.y), "top y out of band: {}", pos.y);
            assert!((-0.5..=0.5).contains(&pos.z), "top z out of band: {}", pos.z);
        }
    }

    #[test]
    fn velocity_is_rightward_biased_for_every_class() {
        let mut rng = Xorshift64::new(7);
        for class in [EmissionClass::Core, EmissionClass::Ring, EmissionClass::Top] {
            for _ in 0..1000 {
                let (_, vel) = spawn(class, &mut rng);
                assert!(
                    (0.02..0.035).contains(&vel.x),
                    "vx out of range: {}",
                    vel.x
                );
                assert!(
                    vel.y.abs() <= 0.0015,
                    "vy drift out of range: {}",
                    vel.y
                );
                assert!(vel.z.abs() <= 0.001, "vz drift out of range: {}", vel.z);
            }
        }
    }

    #[test]
    fn spawn_is_deterministic_for_equal_rng_state() {
        let mut rng_a = Xorshift64::new(123);
        let mut rng_b = Xorshift64::new(123);
        for i in 0..100 {
            let class = EmissionClass::from_index(i);
            let (pa, va) = spawn(class, &mut rng_a);
            let (pb, vb) = spawn(class, &mut rng_b);
            assert_eq!(pa, pb, "positions diverged at index {i}");
            assert_eq!(va, vb, "velocities diverged at index {i}");
        }
    }
}
