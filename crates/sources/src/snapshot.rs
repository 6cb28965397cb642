//! JSON export of a source's instance snapshot.
//!
//! The export is a plain array of instances, index-aligned with the pool,
//! so external tooling can inspect or replay a frame without linking the
//! simulation.

use particle_field_core::error::FieldError;
use particle_field_core::ParticleSource;
use std::fs;
use std::path::Path;

/// Writes the current instance snapshot as pretty-printed JSON.
///
/// Returns `FieldError::Io` on serialization or write failure.
pub fn write_json(source: &dyn ParticleSource, path: &Path) -> Result<(), FieldError> {
    let json = serde_json::to_string_pretty(source.instances())
        .map_err(|e| FieldError::Io(e.to_string()))?;
    fs::write(path, json).map_err(|e| FieldError::Io(e.to_string()))
}
