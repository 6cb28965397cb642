//! The core `ParticleSource` trait shared by every particle population.
//!
//! Two kinds of population sit behind this trait: procedurally simulated
//! pools that integrate state every tick, and declaratively parameterized
//! sets whose motion is applied by an external animator. Both expose the
//! same snapshot surface so render adapters and tests never depend on which
//! kind they are looking at.
//!
//! The trait is object-safe so sources can be driven as `dyn ParticleSource`
//! for runtime switching.

use crate::error::FieldError;
use crate::instance::Instance;
use glam::Vec3;
use serde_json::Value;

/// Core trait for particle populations.
///
/// A host scheduler calls [`tick`](ParticleSource::tick) once per logical
/// frame, then reads [`instances`](ParticleSource::instances). The snapshot
/// is rebuilt inside `tick`, so a completed call guarantees a fully
/// consistent frame — there is no way to observe a partial update.
///
/// This trait is **object-safe**: `Box<dyn ParticleSource>` and
/// `&dyn ParticleSource` both work.
pub trait ParticleSource {
    /// Advance the population by one tick.
    ///
    /// `pointer` is the current interaction point, taken by value so every
    /// particle in the tick observes the same coordinate. The caller must
    /// supply a finite vector (last known value or the origin when no
    /// pointer is available). `dt` is the elapsed time for the frame;
    /// sources that deliberately integrate in per-tick units ignore it.
    ///
    /// Declaratively parameterized sources are free to make this a no-op.
    fn tick(&mut self, dt: f32, pointer: Vec3) -> Result<(), FieldError>;

    /// The index-aligned transform snapshot of the whole population.
    fn instances(&self) -> &[Instance];

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing all available parameters, their types, ranges, and defaults.
    fn param_schema(&self) -> Value;

    /// Number of particles in the population.
    fn len(&self) -> usize {
        self.instances().len()
    }

    /// True when the population holds no particles.
    fn is_empty(&self) -> bool {
        self.instances().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use serde_json::json;

    /// Minimal source implementation used to verify trait object safety.
    struct MockSource {
        instances: Vec<Instance>,
        tick_count: usize,
    }

    impl MockSource {
        fn new(count: usize) -> Self {
            Self {
                instances: vec![
                    Instance::new(Vec3::ZERO, Vec3::ZERO, 1.0, Rgb::new(0.3, 0.4, 0.7));
                    count
                ],
                tick_count: 0,
            }
        }
    }

    impl ParticleSource for MockSource {
        fn tick(&mut self, _dt: f32, pointer: Vec3) -> Result<(), FieldError> {
            self.tick_count += 1;
            for inst in &mut self.instances {
                inst.position = pointer;
            }
            Ok(())
        }

        fn instances(&self) -> &[Instance] {
            &self.instances
        }

        fn params(&self) -> Value {
            json!({"tick_count": self.tick_count})
        }

        fn param_schema(&self) -> Value {
            json!({
                "tick_count": {
                    "type": "integer",
                    "default": 0,
                    "description": "Number of ticks executed"
                }
            })
        }
    }

    #[test]
    fn particle_source_trait_is_object_safe() {
        // If the trait were not object-safe, this would fail to compile.
        let source: Box<dyn ParticleSource> = Box::new(MockSource::new(4));
        assert_eq!(source.len(), 4);
        assert!(!source.is_empty());
    }

    #[test]
    fn mock_source_tick_advances_state() {
        let mut source = MockSource::new(2);
        source.tick(0.016, Vec3::new(1.0, 2.0, 3.0)).unwrap();
        source.tick(0.016, Vec3::new(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(source.tick_count, 2);
        assert_eq!(source.instances()[1].position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn mock_source_params_reflects_state() {
        let mut source = MockSource::new(1);
        source.tick(0.016, Vec3::ZERO).unwrap();
        assert_eq!(source.params()["tick_count"], 1);
    }

    #[test]
    fn param_schema_has_expected_structure() {
        let source = MockSource::new(1);
        let schema = source.param_schema();
        assert!(schema.get("tick_count").is_some());
        assert_eq!(schema["tick_count"]["type"], "integer");
    }

    #[test]
    fn empty_source_reports_empty() {
        let source = MockSource::new(0);
        assert!(source.is_empty());
        assert_eq!(source.len(), 0);
    }

    #[test]
    fn dyn_source_mut_reference_works() {
        let mut source = MockSource::new(1);
        let source_ref: &mut dyn ParticleSource = &mut source;
        source_ref.tick(0.016, Vec3::ZERO).unwrap();
        assert_eq!(source_ref.params()["tick_count"], 1);
    }
}
