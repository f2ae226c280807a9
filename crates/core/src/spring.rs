//! Damped second-order spring integrators for smooth animated motion.
//!
//! A [`Spring`] advances a position/velocity pair toward a movable target
//! using the damped harmonic oscillator model
//! `x'' = ω²(target − x) − 2ζωx'`, integrated with a semi-implicit Euler
//! step (velocity first, then position). Semi-implicit Euler is stable for
//! every `ω·dt` the engine produces and, unlike the explicit variant, does
//! not pump energy into underdamped systems.
//!
//! Retargeting never touches position or velocity, so a spring re-aimed
//! mid-flight keeps its momentum and curves smoothly toward the new goal.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Immutable parameters of a spring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    /// Natural angular frequency ω: how stiff the spring is.
    pub angular_frequency: f64,
    /// Damping ratio ζ: < 1 oscillates, 1 is critically damped, > 1 crawls.
    pub damping_ratio: f64,
    /// Distance at which the spring counts as settled on its target.
    pub threshold: f64,
    /// When set, a step that lands within `threshold` of the target snaps
    /// position onto the target exactly and zeroes velocity, so convergence
    /// finishes in finite time instead of asymptotically.
    pub stop_when_hit_target: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            angular_frequency: 4.0,
            damping_ratio: 1.0,
            threshold: 1e-3,
            stop_when_hit_target: false,
        }
    }
}

/// One-dimensional damped spring: position, velocity, and a movable target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    /// Creates a spring at rest at `initial`, targeting `initial`.
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            position: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    /// Advances the spring one timestep.
    ///
    /// `dt <= 0` is a silent no-op; suspending and resuming the host process
    /// can hand the engine zero or negative deltas.
    pub fn advance(&mut self, dt: f64) {
        if dt <= 0.0 {
            return;
        }
        let omega = self.config.angular_frequency;
        let zeta = self.config.damping_ratio;
        let accel = omega * omega * (self.target - self.position)
            - 2.0 * zeta * omega * self.velocity;
        self.velocity += accel * dt;
        self.position += self.velocity * dt;

        if self.config.stop_when_hit_target
            && (self.position - self.target).abs() <= self.config.threshold
        {
            self.position = self.target;
            self.velocity = 0.0;
        }
    }

    /// Reassigns the target without touching position or velocity.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Hard-resets position and velocity, keeping the current target.
    pub fn set_current(&mut self, position: f64, velocity: f64) {
        self.position = position;
        self.velocity = velocity;
    }

    /// Current position.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Current velocity.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Current target.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Absolute distance between position and target.
    pub fn distance_to_target(&self) -> f64 {
        (self.target - self.position).abs()
    }

    /// True when the spring is within its threshold of the target and
    /// effectively motionless.
    pub fn is_settled(&self) -> bool {
        self.distance_to_target() <= self.config.threshold
            && self.velocity.abs() <= self.config.threshold
    }
}

/// Two independent scalar springs driving a 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spring2D {
    x: Spring,
    y: Spring,
}

impl Spring2D {
    /// Creates a 2D spring at rest at `initial`, targeting `initial`.
    pub fn new(config: SpringConfig, initial: DVec2) -> Self {
        Self {
            x: Spring::new(config, initial.x),
            y: Spring::new(config, initial.y),
        }
    }

    /// Advances both axes one timestep. `dt <= 0` is a no-op.
    pub fn advance(&mut self, dt: f64) {
        self.x.advance(dt);
        self.y.advance(dt);
    }

    /// Reassigns the target point, preserving momentum.
    pub fn set_target(&mut self, target: DVec2) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    /// Hard-resets position and velocity on both axes.
    pub fn set_current(&mut self, position: DVec2, velocity: DVec2) {
        self.x.set_current(position.x, velocity.x);
        self.y.set_current(position.y, velocity.y);
    }

    /// Current position.
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x.position(), self.y.position())
    }

    /// Current velocity.
    pub fn velocity(&self) -> DVec2 {
        DVec2::new(self.x.velocity(), self.y.velocity())
    }

    /// Current target point.
    pub fn target(&self) -> DVec2 {
        DVec2::new(self.x.target(), self.y.target())
    }

    /// Euclidean distance between position and target.
    pub fn distance_to_target(&self) -> f64 {
        self.position().distance(self.target())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn critically_damped() -> SpringConfig {
        SpringConfig {
            angular_frequency: 4.0,
            damping_ratio: 1.0,
            threshold: 1e-3,
            stop_when_hit_target: false,
        }
    }

    fn underdamped() -> SpringConfig {
        SpringConfig {
            angular_frequency: 1.5,
            damping_ratio: 0.2,
            threshold: 1e-3,
            stop_when_hit_target: false,
        }
    }

    // -- Basic stepping --

    #[test]
    fn new_spring_is_at_rest_on_its_target() {
        let s = Spring::new(critically_damped(), 0.7);
        assert_eq!(s.position(), 0.7);
        assert_eq!(s.velocity(), 0.0);
        assert_eq!(s.target(), 0.7);
        assert!(s.is_settled());
    }

    #[test]
    fn advance_moves_toward_target() {
        let mut s = Spring::new(critically_damped(), 0.0);
        s.set_target(1.0);
        let mut last = 0.0;
        for _ in 0..10 {
            s.advance(1.0 / 60.0);
            assert!(s.position() > last, "position regressed: {}", s.position());
            last = s.position();
        }
        assert!(s.position() < 1.0, "should not overshoot this early");
    }

    #[test]
    fn critically_damped_spring_converges() {
        let mut s = Spring::new(critically_damped(), 0.0);
        s.set_target(1.0);
        for _ in 0..600 {
            s.advance(1.0 / 60.0);
        }
        assert!(
            s.distance_to_target() < 1e-3,
            "did not converge: {}",
            s.position()
        );
    }

    #[test]
    fn underdamped_spring_converges_with_oscillation() {
        let mut s = Spring::new(underdamped(), 0.0);
        s.set_target(1.0);
        let mut overshot = false;
        for _ in 0..6000 {
            s.advance(1.0 / 60.0);
            if s.position() > 1.0 {
                overshot = true;
            }
        }
        assert!(overshot, "a damping ratio of 0.2 must overshoot");
        assert!(
            s.distance_to_target() < 1e-2,
            "did not converge: {}",
            s.position()
        );
    }

    // -- Degenerate delta times --

    #[test]
    fn zero_delta_time_is_a_no_op() {
        let mut s = Spring::new(critically_damped(), 0.0);
        s.set_target(1.0);
        s.advance(1.0 / 60.0);
        let snapshot = s;
        s.advance(0.0);
        assert_eq!(s, snapshot);
    }

    #[test]
    fn negative_delta_time_is_a_no_op() {
        let mut s = Spring::new(critically_damped(), 0.0);
        s.set_target(1.0);
        s.advance(1.0 / 60.0);
        let snapshot = s;
        s.advance(-5.0);
        assert_eq!(s, snapshot);
    }

    // -- Retargeting --

    #[test]
    fn set_target_preserves_position_and_velocity() {
        let mut s = Spring::new(critically_damped(), 0.0);
        s.set_target(1.0);
        for _ in 0..20 {
            s.advance(1.0 / 60.0);
        }
        let pos = s.position();
        let vel = s.velocity();
        assert!(vel > 0.0, "should be mid-flight");
        s.set_target(-1.0);
        assert_eq!(s.position(), pos);
        assert_eq!(s.velocity(), vel);
    }

    #[test]
    fn set_current_hard_resets_state() {
        let mut s = Spring::new(critically_damped(), 0.0);
        s.set_target(1.0);
        for _ in 0..20 {
            s.advance(1.0 / 60.0);
        }
        s.set_current(0.25, 0.0);
        assert_eq!(s.position(), 0.25);
        assert_eq!(s.velocity(), 0.0);
        assert_eq!(s.target(), 1.0);
    }

    // -- Snap-on-arrival --

    #[test]
    fn stop_when_hit_target_snaps_exactly() {
        let config = SpringConfig {
            angular_frequency: 0.5,
            damping_ratio: 1.0,
            threshold: 1e-3,
            stop_when_hit_target: true,
        };
        let mut s = Spring::new(config, 0.0);
        s.set_target(1.0);
        for _ in 0..100_000 {
            s.advance(1.0 / 60.0);
            if s.position() == 1.0 {
                break;
            }
        }
        assert_eq!(s.position(), 1.0, "spring never snapped onto its target");
        assert_eq!(s.velocity(), 0.0);
    }

    #[test]
    fn without_stop_flag_convergence_is_asymptotic() {
        let mut s = Spring::new(critically_damped(), 0.0);
        s.set_target(1.0);
        for _ in 0..300 {
            s.advance(1.0 / 60.0);
        }
        // Close, but still approaching rather than parked on the target.
        assert!(s.distance_to_target() < 1e-6);
        assert_ne!(s.position(), 1.0);
    }

    // -- Stability --

    #[test]
    fn stable_at_the_largest_engine_timestep() {
        // 1/7 s is the largest delta the frame pacer will ever hand out
        // (frame limits below 7 fps clamp there).
        for config in [critically_damped(), underdamped()] {
            let mut s = Spring::new(config, 0.0);
            s.set_target(1.0);
            for i in 0..1000 {
                s.advance(1.0 / 7.0);
                assert!(
                    s.position().is_finite() && s.velocity().is_finite(),
                    "diverged at step {i}: pos={} vel={}",
                    s.position(),
                    s.velocity()
                );
                assert!(
                    (s.position() - 1.0).abs() < 10.0,
                    "unbounded oscillation at step {i}: {}",
                    s.position()
                );
            }
        }
    }

    // -- Spring2D --

    #[test]
    fn spring2d_tracks_both_axes_independently() {
        let mut s = Spring2D::new(critically_damped(), DVec2::ZERO);
        s.set_target(DVec2::new(1.0, -1.0));
        for _ in 0..600 {
            s.advance(1.0 / 60.0);
        }
        let pos = s.position();
        assert!((pos.x - 1.0).abs() < 1e-3, "x: {}", pos.x);
        assert!((pos.y + 1.0).abs() < 1e-3, "y: {}", pos.y);
    }

    #[test]
    fn spring2d_set_current_and_target_round_trip() {
        let mut s = Spring2D::new(underdamped(), DVec2::ZERO);
        s.set_current(DVec2::new(0.3, 0.4), DVec2::ZERO);
        s.set_target(DVec2::new(0.9, 0.1));
        assert_eq!(s.position(), DVec2::new(0.3, 0.4));
        assert_eq!(s.target(), DVec2::new(0.9, 0.1));
        let expected = DVec2::new(0.3, 0.4).distance(DVec2::new(0.9, 0.1));
        assert!((s.distance_to_target() - expected).abs() < 1e-12);
    }

    #[test]
    fn spring2d_zero_delta_is_a_no_op() {
        let mut s = Spring2D::new(underdamped(), DVec2::new(0.5, 0.5));
        s.set_target(DVec2::ONE);
        s.advance(1.0 / 60.0);
        let snapshot = s;
        s.advance(0.0);
        s.advance(-1.0);
        assert_eq!(s, snapshot);
    }

    // -- Serde --

    #[test]
    fn spring_serde_round_trip_mid_flight() {
        let mut s = Spring::new(underdamped(), 0.0);
        s.set_target(1.0);
        for _ in 0..17 {
            s.advance(1.0 / 60.0);
        }
        let json = serde_json::to_string(&s).unwrap();
        let mut restored: Spring = serde_json::from_str(&json).unwrap();
        assert_eq!(s, restored);
        // Both continue identically after restoration.
        s.advance(1.0 / 60.0);
        restored.advance(1.0 / 60.0);
        assert_eq!(s, restored);
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn spring_never_produces_nan(
                omega in 0.1_f64..=8.0,
                zeta in 0.0_f64..=2.0,
                target in -10.0_f64..=10.0,
                dt in 0.0_f64..=(1.0 / 7.0),
            ) {
                let config = SpringConfig {
                    angular_frequency: omega,
                    damping_ratio: zeta,
                    threshold: 1e-3,
                    stop_when_hit_target: false,
                };
                let mut s = Spring::new(config, 0.0);
                s.set_target(target);
                for _ in 0..200 {
                    s.advance(dt);
                    prop_assert!(s.position().is_finite(), "position diverged");
                    prop_assert!(s.velocity().is_finite(), "velocity diverged");
                }
            }

            #[test]
            fn critically_damped_from_rest_never_overshoots(
                target in 0.1_f64..=10.0,
                dt in 1e-3_f64..=(1.0 / 30.0),
            ) {
                let config = SpringConfig {
                    angular_frequency: 2.0,
                    damping_ratio: 1.0,
                    threshold: 1e-6,
                    stop_when_hit_target: false,
                };
                let mut s = Spring::new(config, 0.0);
                s.set_target(target);
                for _ in 0..2000 {
                    s.advance(dt);
                    prop_assert!(
                        s.position() <= target + 1e-6,
                        "overshot: {} > {target}", s.position()
                    );
                }
            }
        }
    }
}
