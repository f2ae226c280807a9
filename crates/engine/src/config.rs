//! Declarative engine configuration and the live knob set.
//!
//! [`EngineConfig`] captures everything needed to construct a reproducible
//! engine instance. Loading from JSON never fails: missing or mistyped keys
//! fall back to their defaults, key by key.

use crate::params::{DEFAULT_BIAS, DEFAULT_NOISE, DEFAULT_POWER};
use colorwash_core::params::{param_f64, param_u32, param_u64};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default animation speed multiplier.
pub const DEFAULT_SPEED: f64 = 1.0;
/// Default color-transition speed multiplier.
pub const DEFAULT_TRANSITION_SPEED: f64 = 3.25;
/// Default frame limit; 0 means unlimited (follow the sync signal).
pub const DEFAULT_FRAME_LIMIT: u32 = 0;
/// Default PRNG seed for speckle target randomization.
pub const DEFAULT_SEED: u64 = 42;

/// Construction-time configuration for a [`GradientEngine`](crate::GradientEngine).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Position animation speed multiplier; 0 freezes motion.
    pub speed: f64,
    /// Renderer distance-falloff bias.
    pub bias: f64,
    /// Renderer dithering noise amount.
    pub noise: f64,
    /// Renderer distance-falloff power.
    pub power: f64,
    /// Color-transition clock multiplier; 0 leaves transitions parked.
    pub transition_speed: f64,
    /// Frame-rate ceiling; 0 means unlimited.
    pub frame_limit: u32,
    /// Seed for the target-randomization PRNG.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            bias: DEFAULT_BIAS,
            noise: DEFAULT_NOISE,
            power: DEFAULT_POWER,
            transition_speed: DEFAULT_TRANSITION_SPEED,
            frame_limit: DEFAULT_FRAME_LIMIT,
            seed: DEFAULT_SEED,
        }
    }
}

impl EngineConfig {
    /// Extracts a configuration from a JSON object, falling back to defaults
    /// for missing keys. Never fails.
    pub fn from_json(params: &Value) -> Self {
        let defaults = Self::default();
        Self {
            speed: param_f64(params, "speed", defaults.speed),
            bias: param_f64(params, "bias", defaults.bias),
            noise: param_f64(params, "noise", defaults.noise),
            power: param_f64(params, "power", defaults.power),
            transition_speed: param_f64(params, "transition_speed", defaults.transition_speed),
            frame_limit: param_u32(params, "frame_limit", defaults.frame_limit),
            seed: param_u64(params, "seed", defaults.seed),
        }
    }
}

/// The live mutable subset of the configuration, consulted on every update
/// pass. The frame limit lives in the pacer and the seed in the PRNG, so
/// neither appears here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knobs {
    pub speed: f64,
    pub bias: f64,
    pub noise: f64,
    pub power: f64,
    pub transition_speed: f64,
}

impl Default for Knobs {
    fn default() -> Self {
        Knobs::from(EngineConfig::default())
    }
}

impl From<EngineConfig> for Knobs {
    fn from(config: EngineConfig) -> Self {
        Self {
            speed: config.speed,
            bias: config.bias,
            noise: config.noise,
            power: config.power,
            transition_speed: config.transition_speed,
        }
    }
}
