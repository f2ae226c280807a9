//! The engine façade: one lock, two callers.
//!
//! A [`GradientEngine`] is driven from two directions. A producer context
//! (configuration or UI) assigns colors and twists knobs; the consumer
//! context (the sync-signal callback) calls [`tick`](GradientEngine::tick).
//! One mutex guards the whole mutable state — slot array, knobs, pacer, and
//! the latest snapshot — and is held for the duration of each whole-set
//! pass, never per slot, so a reader can never observe a half-applied color
//! assignment.
//!
//! The published [`Parameters`] snapshot is immutable and shared through an
//! `Arc`; reading it costs one lock acquisition to clone the pointer.

use crate::config::{EngineConfig, Knobs};
use crate::pacer::FramePacer;
use crate::params::Parameters;
use crate::speckle::SpeckleSet;
use colorwash_core::Rgb;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Thread-safe animated gradient parameter engine.
///
/// Every operation completes in O(8) work with no blocking I/O; excess sync
/// ticks beyond the frame limit are dropped, never queued.
#[derive(Debug)]
pub struct GradientEngine {
    state: Mutex<EngineState>,
}

#[derive(Debug)]
struct EngineState {
    speckles: SpeckleSet,
    pacer: FramePacer,
    knobs: Knobs,
    current: Arc<Parameters>,
}

impl GradientEngine {
    /// Creates an engine with default knobs and the given PRNG seed.
    pub fn new(seed: u64) -> Self {
        Self::with_config(EngineConfig {
            seed,
            ..EngineConfig::default()
        })
    }

    /// Creates an engine from a full configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        let speckles = SpeckleSet::new(config.seed);
        let knobs = Knobs::from(config);
        let current = Arc::new(speckles.snapshot(&knobs));
        Self {
            state: Mutex::new(EngineState {
                speckles,
                pacer: FramePacer::new(config.frame_limit),
                knobs,
                current,
            }),
        }
    }

    /// Assigns a new color list to the speckle slots.
    ///
    /// See [`SpeckleSet::set_colors`] for the assignment semantics.
    pub fn set_colors(&self, colors: &[Rgb], interpolation_enabled: bool, repeat_to_fill: bool) {
        self.lock()
            .speckles
            .set_colors(colors, interpolation_enabled, repeat_to_fill);
    }

    /// Position animation speed multiplier; 0 freezes motion.
    pub fn speed(&self) -> f64 {
        self.lock().knobs.speed
    }

    /// Sets the animation speed.
    pub fn set_speed(&self, speed: f64) {
        let mut state = self.lock();
        state.knobs.speed = speed;
        state.speckles.mark_input_modified();
    }

    /// Renderer distance-falloff bias.
    pub fn bias(&self) -> f64 {
        self.lock().knobs.bias
    }

    /// Sets the renderer bias.
    pub fn set_bias(&self, bias: f64) {
        let mut state = self.lock();
        state.knobs.bias = bias;
        state.speckles.mark_input_modified();
    }

    /// Renderer dithering noise amount.
    pub fn noise(&self) -> f64 {
        self.lock().knobs.noise
    }

    /// Sets the renderer noise amount.
    pub fn set_noise(&self, noise: f64) {
        let mut state = self.lock();
        state.knobs.noise = noise;
        state.speckles.mark_input_modified();
    }

    /// Color-transition clock multiplier.
    pub fn transition_speed(&self) -> f64 {
        self.lock().knobs.transition_speed
    }

    /// Sets the color-transition speed.
    pub fn set_transition_speed(&self, transition_speed: f64) {
        let mut state = self.lock();
        state.knobs.transition_speed = transition_speed;
        state.speckles.mark_input_modified();
    }

    /// Frame-rate ceiling; 0 means unlimited.
    pub fn frame_limit(&self) -> u32 {
        self.lock().pacer.frame_limit()
    }

    /// Sets the frame-rate ceiling.
    pub fn set_frame_limit(&self, frame_limit: u32) {
        let mut state = self.lock();
        state.pacer.set_frame_limit(frame_limit);
        state.speckles.mark_input_modified();
    }

    /// The latest published parameter snapshot.
    pub fn current_parameters(&self) -> Arc<Parameters> {
        Arc::clone(&self.lock().current)
    }

    /// Sync-signal entry point: decides via the pacer whether the tick at
    /// `now` (seconds, any monotonic origin) deserves work, and if so runs
    /// one update pass and publishes the new snapshot.
    ///
    /// Returns whether a new snapshot was published. Decision and update run
    /// under a single lock acquisition, so producers never interleave with a
    /// half-finished pass.
    pub fn tick(&self, now: f64) -> bool {
        let mut state = self.lock();
        let EngineState {
            speckles,
            pacer,
            knobs,
            current,
        } = &mut *state;

        let advance = pacer.should_advance(
            now,
            speckles.transitions_pending(),
            speckles.input_modified(),
            knobs.speed,
        );
        if !advance {
            return false;
        }
        let dt = pacer.delta_time(now);
        match speckles.update_render_parameters(dt, knobs) {
            Some(params) => {
                *current = Arc::new(params);
                true
            }
            None => false,
        }
    }

    fn lock(&self) -> MutexGuard<'_, EngineState> {
        // Poisoned state is still plain data; keep serving it.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
