#![deny(unsafe_code)]
//! Source registry: maps source names to implementations and provides JSON
//! snapshot export.
//!
//! This crate sits between `particle-field-core` (which defines the
//! `ParticleSource` trait) and the individual population crates
//! (`particle-field-reactor`, `particle-field-ambient`). Drivers depend on
//! this crate to avoid duplicating dispatch logic.

pub mod snapshot;

use glam::Vec3;
use particle_field_ambient::AmbientField;
use particle_field_core::error::FieldError;
use particle_field_core::{Instance, ParticleSource};
use particle_field_reactor::ReactorField;
use serde_json::Value;

/// All available source names.
const SOURCE_NAMES: &[&str] = &["reactor", "ambient"];

/// Enumeration of all available particle sources.
///
/// Wraps each population implementation and delegates `ParticleSource`
/// trait methods. Use [`SourceKind::from_name`] for string-based
/// construction (CLI, embedding hosts).
pub enum SourceKind {
    /// Simulated reactor exhaust pool.
    Reactor(ReactorField),
    /// Declaratively animated ambient population.
    Ambient(AmbientField),
}

impl SourceKind {
    /// Constructs a source by name.
    ///
    /// Returns `FieldError::UnknownSource` if the name is not recognized.
    pub fn from_name(
        name: &str,
        count: usize,
        seed: u64,
        params: &Value,
    ) -> Result<Self, FieldError> {
        log::debug!("constructing source '{name}': {count} particles, seed {seed}");
        match name {
            "reactor" => Ok(SourceKind::Reactor(ReactorField::from_json(
                count, seed, params,
            )?)),
            "ambient" => Ok(SourceKind::Ambient(AmbientField::from_json(
                count, seed, params,
            )?)),
            _ => Err(FieldError::UnknownSource(name.to_string())),
        }
    }

    /// Returns a slice of all recognized source names.
    pub fn list_sources() -> &'static [&'static str] {
        SOURCE_NAMES
    }
}

impl ParticleSource for SourceKind {
    fn tick(&mut self, dt: f32, pointer: Vec3) -> Result<(), FieldError> {
        match self {
            SourceKind::Reactor(s) => s.tick(dt, pointer),
            SourceKind::Ambient(s) => s.tick(dt, pointer),
        }
    }

    fn instances(&self) -> &[Instance] {
        match self {
            SourceKind::Reactor(s) => s.instances(),
            SourceKind::Ambient(s) => s.instances(),
        }
    }

    fn params(&self) -> Value {
        match self {
            SourceKind::Reactor(s) => s.params(),
            SourceKind::Ambient(s) => s.params(),
        }
    }

    fn param_schema(&self) -> Value {
        match self {
            SourceKind::Reactor(s) => s.param_schema(),
            SourceKind::Ambient(s) => s.param_schema(),
        }
    }
}
