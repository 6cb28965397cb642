//! Reproducible specification for a particle-field run.
//!
//! A [`Seed`] captures everything needed to recreate a field state:
//! source name, pool size, parameters, PRNG seed, and tick count.

use crate::error::FieldError;
use serde::{Deserialize, Serialize};

/// Reproducible specification for a particle-field run.
///
/// Two identical `Seed` values fed to the same binary produce bit-identical
/// snapshots (given the same pointer input per tick).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Seed {
    pub source: String,
    pub count: usize,
    pub params: serde_json::Value,
    pub seed: u64,
    pub ticks: usize,
}

impl Seed {
    /// Creates a new Seed with default params (`{}`) and ticks (`0`).
    pub fn new(source: &str, count: usize, seed: u64) -> Self {
        Self {
            source: source.to_string(),
            count,
            params: serde_json::Value::Object(serde_json::Map::new()),
            seed,
            ticks: 0,
        }
    }

    /// Validates that the seed describes a non-empty pool.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.count == 0 {
            return Err(FieldError::EmptyPool);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_seed_with_default_params_and_ticks() {
        let s = Seed::new("reactor", 150, 42);
        assert_eq!(s.source, "reactor");
        assert_eq!(s.count, 150);
        assert_eq!(s.seed, 42);
        assert_eq!(s.ticks, 0);
        assert_eq!(s.params, serde_json::json!({}));
    }

    #[test]
    fn json_round_trip_with_defaults() {
        let original = Seed::new("ambient", 70, 8675309);
        let json = serde_json::to_string(&original).unwrap();
        let restored: Seed = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }

    #[test]
    fn json_round_trip_with_custom_params() {
        let mut s = Seed::new("reactor", 150, 99);
        s.params = serde_json::json!({
            "attract_strength": 0.003,
            "attract_range": 15.0,
        });
        s.ticks = 600;

        let json = serde_json::to_string_pretty(&s).unwrap();
        let restored: Seed = serde_json::from_str(&json).unwrap();
        assert_eq!(s, restored);
    }

    #[test]
    fn json_contains_expected_keys() {
        let s = Seed::new("reactor", 150, 1);
        let v: serde_json::Value = serde_json::to_value(&s).unwrap();
        assert!(v.get("source").is_some());
        assert!(v.get("count").is_some());
        assert!(v.get("params").is_some());
        assert!(v.get("seed").is_some());
        assert!(v.get("ticks").is_some());
    }

    #[test]
    fn validate_succeeds_for_valid_seed() {
        let s = Seed::new("reactor", 150, 42);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn validate_fails_for_empty_pool() {
        let s = Seed::new("reactor", 0, 42);
        assert!(matches!(s.validate(), Err(FieldError::EmptyPool)));
    }
}
