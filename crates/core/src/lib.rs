#![deny(unsafe_code)]
//! Core primitives for the colorwash gradient engine.
//!
//! Provides the color types (`Rgb`, `Xyz`, `Lab`, `Lch`) with pure
//! conversions between them, the `Lerp` trait, the `Spring`/`Spring2D`
//! damped integrators, the `Xorshift64` PRNG, and JSON parameter helpers.

pub mod color;
pub mod error;
pub mod lerp;
pub mod params;
pub mod prng;
pub mod spring;

pub use color::{Lab, Lch, Rgb, Xyz};
pub use error::EngineError;
pub use lerp::Lerp;
pub use prng::Xorshift64;
pub use spring::{Spring, Spring2D, SpringConfig};
