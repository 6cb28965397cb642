#![deny(unsafe_code)]
//! Ambient particle population.
//!
//! Unlike the simulated reactor pool, ambient particles carry no velocity
//! and receive no per-tick update. The generator runs once at construction
//! and emits an immutable list of descriptors — position, dot radius, a
//! small jitter vector, and a phase delay — that an external declarative
//! animation layer interpolates on its own schedule. The jitter and delay
//! exist purely to stagger that externally driven oscillation.
//!
//! Placement follows a controlled-chaos split: most particles land
//! uniformly anywhere in the viewport, the rest cluster around supplied
//! anchor points (for example network-diagram nodes) at a random angle and
//! bounded distance. With no anchors supplied, the whole population is
//! placed uniformly.

use glam::{Vec2, Vec3};
use particle_field_core::color::heat_to_color;
use particle_field_core::params::param_f32;
use particle_field_core::{FieldError, Instance, ParticleSource, Xorshift64};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Default population size.
pub const DEFAULT_COUNT: usize = 70;
/// Default viewport extents, in viewport units.
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1400.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 900.0;

/// Default fraction of the population placed near anchors.
const DEFAULT_ANCHORED_FRACTION: f32 = 0.4;
/// Default dot radius.
const DEFAULT_RADIUS: f32 = 1.5;
/// Default total jitter span (offsets are +/- half of this per axis).
const DEFAULT_JITTER_RANGE: f32 = 6.0;
/// Default upper bound for the pulse phase delay, in seconds.
const DEFAULT_DELAY_MAX: f32 = 4.0;
/// Default bounds for the anchor offset distance.
const DEFAULT_ANCHOR_MIN_DIST: f32 = 20.0;
const DEFAULT_ANCHOR_MAX_DIST: f32 = 80.0;

/// One ambient particle descriptor, immutable once generated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmbientParticle {
    /// Viewport position.
    pub position: Vec2,
    /// Dot radius.
    pub radius: f32,
    /// Oscillation offset target, per axis.
    pub jitter: Vec2,
    /// Phase delay in seconds, staggering the external pulse animation.
    pub delay: f32,
}

/// Generation parameters for the ambient population.
#[derive(Debug, Clone, Copy)]
pub struct AmbientParams {
    /// Fraction of the population placed near anchors, in [0, 1].
    pub anchored_fraction: f32,
    /// Dot radius for every particle.
    pub radius: f32,
    /// Total jitter span; offsets are +/- half of this per axis.
    pub jitter_range: f32,
    /// Upper bound for the random phase delay.
    pub delay_max: f32,
    /// Minimum distance from an anchor for anchored placement.
    pub anchor_min_dist: f32,
    /// Maximum distance from an anchor for anchored placement.
    pub anchor_max_dist: f32,
}

impl Default for AmbientParams {
    fn default() -> Self {
        Self {
            anchored_fraction: DEFAULT_ANCHORED_FRACTION,
            radius: DEFAULT_RADIUS,
            jitter_range: DEFAULT_JITTER_RANGE,
            delay_max: DEFAULT_DELAY_MAX,
            anchor_min_dist: DEFAULT_ANCHOR_MIN_DIST,
            anchor_max_dist: DEFAULT_ANCHOR_MAX_DIST,
        }
    }
}

impl AmbientParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            anchored_fraction: param_f32(params, "anchored_fraction", DEFAULT_ANCHORED_FRACTION),
            radius: param_f32(params, "radius", DEFAULT_RADIUS),
            jitter_range: param_f32(params, "jitter_range", DEFAULT_JITTER_RANGE),
            delay_max: param_f32(params, "delay_max", DEFAULT_DELAY_MAX),
            anchor_min_dist: param_f32(params, "anchor_min_dist", DEFAULT_ANCHOR_MIN_DIST),
            anchor_max_dist: param_f32(params, "anchor_max_dist", DEFAULT_ANCHOR_MAX_DIST),
        }
    }
}

/// The ambient particle population.
///
/// Descriptor and instance lists are built once in `new` and never mutated;
/// `tick` is a deliberate no-op so the population can still be driven
/// through the shared [`ParticleSource`] interface.
pub struct AmbientField {
    particles: Vec<AmbientParticle>,
    instances: Vec<Instance>,
    viewport: Vec2,
    params: AmbientParams,
}

impl AmbientField {
    /// Generates a population of exactly `count` particles.
    ///
    /// `floor(count * anchored_fraction)` particles are placed near randomly
    /// chosen anchors (when any are supplied); the remainder is uniform over
    /// the viewport. Returns `FieldError::EmptyPool` for a zero count and
    /// `FieldError::InvalidFraction` when the fraction is outside [0, 1].
    pub fn new(
        count: usize,
        viewport: Vec2,
        anchors: &[Vec2],
        seed: u64,
        params: AmbientParams,
    ) -> Result<Self, FieldError> {
        if count == 0 {
            return Err(FieldError::EmptyPool);
        }
        if !(0.0..=1.0).contains(&params.anchored_fraction) {
            return Err(FieldError::InvalidFraction {
                name: "anchored_fraction".into(),
                value: params.anchored_fraction,
            });
        }

        let mut rng = Xorshift64::new(seed);
        let anchored_count = if anchors.is_empty() {
            0
        } else {
            (count as f32 * params.anchored_fraction) as usize
        };
        let random_count = count - anchored_count;

        let mut particles = Vec::with_capacity(count);
        for _ in 0..random_count {
            let position = Vec2::new(
                rng.next_range(0.0, viewport.x),
                rng.next_range(0.0, viewport.y),
            );
            particles.push(Self::describe(position, &params, &mut rng));
        }
        for _ in 0..anchored_count {
            let anchor = anchors[rng.next_usize(anchors.len())];
            let angle = rng.next_angle();
            let distance = rng.next_range(params.anchor_min_dist, params.anchor_max_dist);
            let position = anchor + Vec2::new(angle.cos(), angle.sin()) * distance;
            particles.push(Self::describe(position, &params, &mut rng));
        }

        // Ambient particles have no kinematic heat; instances carry the cool
        // base tint and the external animator applies the real styling.
        let base_color = heat_to_color(0.0);
        let instances = particles
            .iter()
            .map(|p| {
                Instance::new(
                    Vec3::new(p.position.x, p.position.y, 0.0),
                    Vec3::ZERO,
                    p.radius,
                    base_color,
                )
            })
            .collect();

        log::debug!(
            "ambient field generated: {count} particles ({anchored_count} anchored), seed {seed}"
        );

        Ok(Self {
            particles,
            instances,
            viewport,
            params,
        })
    }

    /// Generates a population from a JSON params object.
    ///
    /// Reads `viewport_width`, `viewport_height`, and an optional `anchors`
    /// array of `[x, y]` pairs alongside the tunables.
    pub fn from_json(count: usize, seed: u64, json_params: &Value) -> Result<Self, FieldError> {
        let viewport = Vec2::new(
            param_f32(json_params, "viewport_width", DEFAULT_VIEWPORT_WIDTH),
            param_f32(json_params, "viewport_height", DEFAULT_VIEWPORT_HEIGHT),
        );
        let anchors = parse_anchors(json_params);
        Self::new(
            count,
            viewport,
            &anchors,
            seed,
            AmbientParams::from_json(json_params),
        )
    }

    /// The immutable descriptor list consumed by the declarative animator.
    pub fn particles(&self) -> &[AmbientParticle] {
        &self.particles
    }

    /// The viewport extents this population was generated for.
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    fn describe(position: Vec2, params: &AmbientParams, rng: &mut Xorshift64) -> AmbientParticle {
        let half_jitter = params.jitter_range / 2.0;
        AmbientParticle {
            position,
            radius: params.radius,
            jitter: Vec2::new(
                rng.next_range(-half_jitter, half_jitter),
                rng.next_range(-half_jitter, half_jitter),
            ),
            delay: rng.next_range(0.0, params.delay_max),
        }
    }
}

impl ParticleSource for AmbientField {
    /// No-op: ambient motion is applied by the external declarative
    /// animator, never by a simulation step.
    fn tick(&mut self, _dt: f32, _pointer: Vec3) -> Result<(), FieldError> {
        Ok(())
    }

    fn instances(&self) -> &[Instance] {
        &self.instances
    }

    fn params(&self) -> Value {
        json!({
            "anchored_fraction": self.params.anchored_fraction,
            "radius": self.params.radius,
            "jitter_range": self.params.jitter_range,
            "delay_max": self.params.delay_max,
            "anchor_min_dist": self.params.anchor_min_dist,
            "anchor_max_dist": self.params.anchor_max_dist,
            "viewport_width": self.viewport.x,
            "viewport_height": self.viewport.y,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "anchored_fraction": {
                "type": "number",
                "default": DEFAULT_ANCHORED_FRACTION,
                "min": 0.0,
                "max": 1.0,
                "description": "Fraction of the population placed near anchors"
            },
            "radius": {
                "type": "number",
                "default": DEFAULT_RADIUS,
                "min": 0.0,
                "max": 20.0,
                "description": "Dot radius for every particle"
            },
            "jitter_range": {
                "type": "number",
                "default": DEFAULT_JITTER_RANGE,
                "min": 0.0,
                "max": 100.0,
                "description": "Total jitter span; offsets are +/- half per axis"
            },
            "delay_max": {
                "type": "number",
                "default": DEFAULT_DELAY_MAX,
                "min": 0.0,
                "max": 60.0,
                "description": "Upper bound for the random pulse phase delay"
            },
            "anchor_min_dist": {
                "type": "number",
                "default": DEFAULT_ANCHOR_MIN_DIST,
                "min": 0.0,
                "max": 1000.0,
                "description": "Minimum distance from an anchor for anchored placement"
            },
            "anchor_max_dist": {
                "type": "number",
                "default": DEFAULT_ANCHOR_MAX_DIST,
                "min": 0.0,
                "max": 1000.0,
                "description": "Maximum distance from an anchor for anchored placement"
            },
            "viewport_width": {
                "type": "number",
                "default": DEFAULT_VIEWPORT_WIDTH,
                "min": 1.0,
                "max": 10000.0,
                "description": "Viewport width in viewport units"
            },
            "viewport_height": {
                "type": "number",
                "default": DEFAULT_VIEWPORT_HEIGHT,
                "min": 1.0,
                "max": 10000.0,
                "description": "Viewport height in viewport units"
            }
        })
    }
}

/// Extracts an `anchors` array of `[x, y]` pairs; entries that are not
/// two-element numeric arrays are skipped.
fn parse_anchors(params: &Value) -> Vec<Vec2> {
    params
        .get("anchors")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| {
                    let pair = entry.as_array()?;
                    if pair.len() != 2 {
                        return None;
                    }
                    let x = pair[0].as_f64()? as f32;
                    let y = pair[1].as_f64()? as f32;
                    Some(Vec2::new(x, y))
                })
                .collect()
        })
        .unwrap_or_default()
}
