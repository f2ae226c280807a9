#![deny(unsafe_code)]
//! Animated multi-point gradient parameter engine.
//!
//! Eight spring-driven "speckle" control points wander a unit square while
//! their colors cross-fade in LAB space; every accepted sync tick distills
//! them into an immutable [`Parameters`] snapshot for a rendering backend.
//! [`FramePacer`] bounds how often that happens, [`GradientEngine`] wraps
//! the whole thing behind one lock, and [`TickDriver`] supplies a sync
//! signal on hosts without a native one.

pub mod config;
pub mod driver;
pub mod engine;
pub mod pacer;
pub mod params;
pub mod preset;
pub mod speckle;

pub use config::{EngineConfig, Knobs};
pub use driver::TickDriver;
pub use engine::GradientEngine;
pub use pacer::FramePacer;
pub use params::{ColorStop, Parameters};
pub use preset::Preset;
pub use speckle::{Speckle, SpeckleSet, COLOR_SLOT};
