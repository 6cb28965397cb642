#![deny(unsafe_code)]
//! Reactor exhaust particle pool.
//!
//! A fixed pool of particles emitted from three regions of the reactor
//! silhouette (core, piston ring, top vent), pulled toward the user's
//! pointer and a fixed sink on the right edge, tinted by a kinematic heat
//! function, and recycled back to their emission region when they cross the
//! exit boundary. Particles are never created or destroyed after
//! construction — recycling re-samples state in place.
//!
//! State lives in parallel arrays indexed by particle id; `tick` mutates
//! them in place and then rebuilds the transform snapshot, so readers only
//! ever see a fully updated frame.

pub mod forces;
pub mod spawn;

use forces::{
    pointer_pull, sink_pull, soft_damp, DEFAULT_ATTRACT_RANGE, DEFAULT_ATTRACT_STRENGTH,
    DEFAULT_DAMPING, DEFAULT_SINK_X, DEFAULT_SOFT_BOUND,
};
use glam::Vec3;
use particle_field_core::color::{heat_to_color, Rgb};
use particle_field_core::params::param_f32;
use particle_field_core::{FieldError, Instance, ParticleSource, Xorshift64};
use serde_json::{json, Value};
use spawn::{spawn, EmissionClass};

/// Default pool size.
pub const DEFAULT_COUNT: usize = 150;

/// Placeholder tint applied at construction; the first tick overwrites it
/// from kinematics.
const INITIAL_COLOR: Rgb = Rgb::new(0.5, 0.55, 0.6);
/// Per-axis angular velocity half-range for the cosmetic tumble.
const SPIN_LIMIT: f32 = 0.01;
/// Cosmetic per-tick scale bounds.
const SCALE_MIN: f32 = 0.04;
const SCALE_MAX: f32 = 0.07;
/// Gain applied to speed in the heat formula.
const HEAT_SPEED_GAIN: f32 = 10.0;

/// Kinematic heat in [0, 1] from a particle's speed and distance from the
/// world origin.
///
/// `1 / (distance + 1)` is bounded by 1 for any non-negative distance (the
/// denominator is always >= 1, so there is no division hazard), and the
/// outer `min` caps the sum, so the result is in [0, 1] for all finite
/// non-negative inputs.
pub fn heat(speed: f32, distance: f32) -> f32 {
    (1.0 / (distance + 1.0) + speed * HEAT_SPEED_GAIN).min(1.0)
}

/// Tunable force parameters for the reactor pool.
///
/// Defaults reproduce the calibrated field exactly; the JSON layer exists so
/// hosts can retune without recompiling.
#[derive(Debug, Clone, Copy)]
pub struct ReactorParams {
    /// Pointer attraction strength per tick.
    pub attract_strength: f32,
    /// Distance beyond which pointer attraction has faded to nothing.
    pub attract_range: f32,
    /// X coordinate of the sink; doubles as the exit/recycle boundary.
    pub sink_x: f32,
    /// Soft boundary for |y| and |z|.
    pub soft_bound: f32,
    /// Multiplicative decay applied outside the soft boundary.
    pub damping: f32,
}

impl Default for ReactorParams {
    fn default() -> Self {
        Self {
            attract_strength: DEFAULT_ATTRACT_STRENGTH,
            attract_range: DEFAULT_ATTRACT_RANGE,
            sink_x: DEFAULT_SINK_X,
            soft_bound: DEFAULT_SOFT_BOUND,
            damping: DEFAULT_DAMPING,
        }
    }
}

impl ReactorParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            attract_strength: param_f32(params, "attract_strength", DEFAULT_ATTRACT_STRENGTH),
            attract_range: param_f32(params, "attract_range", DEFAULT_ATTRACT_RANGE),
            sink_x: param_f32(params, "sink_x", DEFAULT_SINK_X),
            soft_bound: param_f32(params, "soft_bound", DEFAULT_SOFT_BOUND),
            damping: param_f32(params, "damping", DEFAULT_DAMPING),
        }
    }
}

/// The simulated particle pool.
///
/// Pool size is fixed for the lifetime of the field. Per-particle state is
/// held in parallel arrays indexed by particle id (no per-tick allocation);
/// the `instances` buffer is the index-aligned snapshot rebuilt at the end
/// of every tick.
pub struct ReactorField {
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    rotations: Vec<Vec3>,
    spins: Vec<Vec3>,
    classes: Vec<EmissionClass>,
    colors: Vec<Rgb>,
    scales: Vec<f32>,
    instances: Vec<Instance>,
    rng: Xorshift64,
    params: ReactorParams,
}

impl ReactorField {
    /// Creates a pool of `count` particles.
    ///
    /// Classes are assigned round-robin (`index mod 3`) and each particle is
    /// placed by the same `spawn` sampler that recycling uses later.
    ///
    /// Returns `FieldError::EmptyPool` if `count` is zero.
    pub fn new(count: usize, seed: u64, params: ReactorParams) -> Result<Self, FieldError> {
        if count == 0 {
            return Err(FieldError::EmptyPool);
        }
        let mut rng = Xorshift64::new(seed);

        let mut positions = Vec::with_capacity(count);
        let mut velocities = Vec::with_capacity(count);
        let mut rotations = Vec::with_capacity(count);
        let mut spins = Vec::with_capacity(count);
        let mut classes = Vec::with_capacity(count);
        let mut scales = Vec::with_capacity(count);

        for i in 0..count {
            let class = EmissionClass::from_index(i);
            let (position, velocity) = spawn(class, &mut rng);
            positions.push(position);
            velocities.push(velocity);
            rotations.push(Vec3::new(
                rng.next_angle(),
                rng.next_angle(),
                rng.next_angle(),
            ));
            spins.push(Vec3::new(
                rng.next_range(-SPIN_LIMIT, SPIN_LIMIT),
                rng.next_range(-SPIN_LIMIT, SPIN_LIMIT),
                rng.next_range(-SPIN_LIMIT, SPIN_LIMIT),
            ));
            classes.push(class);
            scales.push(rng.next_range(SCALE_MIN, SCALE_MAX));
        }

        let colors = vec![INITIAL_COLOR; count];
        let instances = positions
            .iter()
            .zip(rotations.iter())
            .zip(scales.iter())
            .map(|((&p, &r), &s)| Instance::new(p, r, s, INITIAL_COLOR))
            .collect();

        log::debug!("reactor field initialized: {count} particles, seed {seed}");

        Ok(Self {
            positions,
            velocities,
            rotations,
            spins,
            classes,
            colors,
            scales,
            instances,
            rng,
            params,
        })
    }

    /// Creates a pool from a JSON params object.
    pub fn from_json(count: usize, seed: u64, json_params: &Value) -> Result<Self, FieldError> {
        Self::new(count, seed, ReactorParams::from_json(json_params))
    }

    /// Current particle positions, index-aligned with the pool.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Current particle velocities, index-aligned with the pool.
    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    /// Emission class per particle; fixed for the lifetime of the pool.
    pub fn classes(&self) -> &[EmissionClass] {
        &self.classes
    }

    /// Colors computed by the most recent tick.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Advances every particle by one tick against the given pointer.
    fn step(&mut self, pointer: Vec3) {
        let p = self.params;

        for i in 0..self.positions.len() {
            // Heat and color come from the pre-update kinematic state.
            let speed = self.velocities[i].length();
            let distance = self.positions[i].length();
            self.colors[i] = heat_to_color(heat(speed, distance));

            let pos_i = self.positions[i];
            self.positions[i] += pointer_pull(
                pos_i,
                pointer,
                p.attract_strength,
                p.attract_range,
            );
            let pos_i = self.positions[i];
            self.positions[i] += sink_pull(pos_i, p.sink_x);
            self.positions[i] += self.velocities[i];

            // Crossing the exit boundary recycles the particle: a full
            // re-sample of position and velocity from its own class, which
            // also bounds any transient numeric corruption to one pass.
            if self.positions[i].x > p.sink_x {
                let (position, velocity) = spawn(self.classes[i], &mut self.rng);
                self.positions[i] = position;
                self.velocities[i] = velocity;
            }

            self.positions[i].y = soft_damp(self.positions[i].y, p.soft_bound, p.damping);
            self.positions[i].z = soft_damp(self.positions[i].z, p.soft_bound, p.damping);

            self.rotations[i] += self.spins[i];
            self.scales[i] = self.rng.next_range(SCALE_MIN, SCALE_MAX);
        }
    }

    /// Rebuilds the snapshot buffer from the freshly updated arrays.
    fn rebuild_instances(&mut self) {
        for i in 0..self.instances.len() {
            self.instances[i] = Instance::new(
                self.positions[i],
                self.rotations[i],
                self.scales[i],
                self.colors[i],
            );
        }
    }
}

impl ParticleSource for ReactorField {
    /// Advances the simulation by one tick.
    ///
    /// Integration is deliberately in per-tick units (`position += velocity`
    /// once per call): every gain and the heat calibration are expressed per
    /// tick, so apparent speed tracks the host frame rate, matching the
    /// calibrated visual. `dt` stays in the signature so hosts can pass real
    /// elapsed time and a future recalibration can consume it without an
    /// API break.
    fn tick(&mut self, _dt: f32, pointer: Vec3) -> Result<(), FieldError> {
        self.step(pointer);
        self.rebuild_instances();
        Ok(())
    }

    fn instances(&self) -> &[Instance] {
        &self.instances
    }

    fn params(&self) -> Value {
        json!({
            "attract_strength": self.params.attract_strength,
            "attract_range": self.params.attract_range,
            "sink_x": self.params.sink_x,
            "soft_bound": self.params.soft_bound,
            "damping": self.params.damping,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "attract_strength": {
                "type": "number",
                "default": DEFAULT_ATTRACT_STRENGTH,
                "min": 0.0,
                "max": 0.1,
                "description": "Pointer attraction strength per tick"
            },
            "attract_range": {
                "type": "number",
                "default": DEFAULT_ATTRACT_RANGE,
                "min": 1.0,
                "max": 100.0,
                "description": "Distance beyond which pointer attraction fades to nothing"
            },
            "sink_x": {
                "type": "number",
                "default": DEFAULT_SINK_X,
                "min": 0.0,
                "max": 100.0,
                "description": "X coordinate of the sink and exit boundary"
            },
            "soft_bound": {
                "type": "number",
                "default": DEFAULT_SOFT_BOUND,
                "min": 1.0,
                "max": 100.0,
                "description": "Soft boundary for |y| and |z|"
            },
            "damping": {
                "type": "number",
                "default": DEFAULT_DAMPING,
                "min": 0.0,
                "max": 1.0,
                "description": "Multiplicative decay applied outside the soft boundary"
            }
        })
    }
}
