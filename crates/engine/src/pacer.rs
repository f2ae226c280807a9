//! Frame pacing: deciding which external sync ticks deserve work.
//!
//! The engine rides on an external, roughly periodic synchronization signal
//! (a display-refresh callback) rather than owning a timer. The pacer turns
//! that raw signal into a bounded cadence: it enforces a configurable
//! frame-rate ceiling, stalls completely when the animation is static, and
//! clamps the delta time handed to the integrators so a process suspension
//! resumes as a single ordinary frame instead of a minutes-long jump.
//!
//! Timestamps are injected seconds; the pacer never reads a clock, which is
//! what keeps every decision here unit-testable.

/// Frame rate assumed for delta clamping when no limit is configured.
const FALLBACK_FRAME_RATE: f64 = 60.0;

/// Decides, per sync tick, whether a new parameter update should run.
///
/// [`should_advance`](FramePacer::should_advance) and
/// [`delta_time`](FramePacer::delta_time) form a decide-then-consume pair;
/// callers run both under the same exclusive lock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePacer {
    last_parameter_update: f64,
    last_render_execution: f64,
    frame_limit: u32,
}

impl FramePacer {
    /// Creates a pacer with both timestamps at zero.
    ///
    /// `frame_limit` of 0 means unlimited — every sync tick may produce work.
    pub fn new(frame_limit: u32) -> Self {
        Self {
            last_parameter_update: 0.0,
            last_render_execution: 0.0,
            frame_limit,
        }
    }

    /// Current frame-rate ceiling; 0 is unlimited.
    pub fn frame_limit(&self) -> u32 {
        self.frame_limit
    }

    /// Replaces the frame-rate ceiling.
    pub fn set_frame_limit(&mut self, frame_limit: u32) {
        self.frame_limit = frame_limit;
    }

    /// Decides whether the tick at `now` should produce work, recording
    /// `now` as the last executed render when it does.
    ///
    /// In order:
    /// 1. a running color transition always advances (never stall a fade);
    /// 2. a fully idle engine (no modified inputs, zero speed) never does;
    /// 3. with no frame limit, every remaining tick advances;
    /// 4. otherwise the tick advances once at least `1/limit − 1/(2·limit)`
    ///    seconds have passed since the last executed render. The half-tier
    ///    relaxation absorbs sync-signal quantization: a strict `1/limit`
    ///    comparison would routinely miss by one tick and lock onto the next
    ///    slower cadence tier instead of the requested one.
    pub fn should_advance(
        &mut self,
        now: f64,
        transitions_pending: bool,
        input_modified: bool,
        speed: f64,
    ) -> bool {
        let decision = self.decide(now, transitions_pending, input_modified, speed);
        if decision {
            self.last_render_execution = now;
        }
        decision
    }

    fn decide(
        &self,
        now: f64,
        transitions_pending: bool,
        input_modified: bool,
        speed: f64,
    ) -> bool {
        if transitions_pending {
            return true;
        }
        if !input_modified && speed == 0.0 {
            return false;
        }
        if self.frame_limit == 0 {
            return true;
        }
        let required = 1.0 / f64::from(self.frame_limit);
        let relaxed = required - 1.0 / f64::from(2 * self.frame_limit);
        now - self.last_render_execution >= relaxed
    }

    /// Consumes the time elapsed since the last parameter update, clamped
    /// into `[0, 1/rate]` where `rate` is the frame limit (or 60 when
    /// unlimited), and records `now`.
    ///
    /// The lower clamp swallows the negative deltas a suspended process can
    /// produce; the upper clamp makes the first tick after a long suspension
    /// behave as if one ordinary frame had passed.
    pub fn delta_time(&mut self, now: f64) -> f64 {
        let rate = if self.frame_limit < 1 {
            FALLBACK_FRAME_RATE
        } else {
            f64::from(self.frame_limit)
        };
        let delta = (now - self.last_parameter_update).clamp(0.0, 1.0 / rate);
        self.last_parameter_update = now;
        delta
    }
}
