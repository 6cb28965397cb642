#![deny(unsafe_code)]
//! Core types and traits for the particle-field simulation system.
//!
//! Provides the `ParticleSource` trait, the `Instance` snapshot element,
//! heat-to-color mapping (`Rgb`, `heat_to_color`), the `Xorshift64` PRNG,
//! `Seed`, error types, and JSON parameter helpers.

pub mod color;
pub mod error;
pub mod instance;
pub mod params;
pub mod prng;
pub mod seed;
pub mod source;

pub use color::{heat_to_color, Rgb};
pub use error::FieldError;
pub use instance::Instance;
pub use prng::Xorshift64;
pub use seed::Seed;
pub use source::ParticleSource;
