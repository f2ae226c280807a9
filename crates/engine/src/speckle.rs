//! Animated gradient control points and the fixed-capacity set that owns them.
//!
//! A [`Speckle`] is one control point of the blob gradient: an enabled flag,
//! a color transition (previous color blending toward a target color under a
//! normalized progress clock), and a spring-driven 2D position that chases
//! randomized targets forever.
//!
//! [`SpeckleSet`] holds exactly [`COLOR_SLOT`] slots — the capacity of the
//! downstream renderer's uniform buffer — and owns the only two mutation
//! paths: color assignment ([`SpeckleSet::set_colors`]) and the per-tick
//! update ([`SpeckleSet::update_render_parameters`]). Callers serialize
//! access to the whole set; see [`GradientEngine`](crate::GradientEngine)
//! for the locked facade.

use crate::config::Knobs;
use crate::params::{ColorStop, Parameters};
use colorwash_core::color::rgb_to_lab;
use colorwash_core::{Lab, Lerp, Rgb, Spring, Spring2D, SpringConfig, Xorshift64};
use glam::DVec2;

/// Number of speckle slots; the renderer's uniform buffer holds this many.
pub const COLOR_SLOT: usize = 8;

/// Transition clock spring: critically damped toward 1, snapping onto the
/// target so a transition completes in finite time.
const TRANSITION_SPRING: SpringConfig = SpringConfig {
    angular_frequency: 0.5,
    damping_ratio: 1.0,
    threshold: 1e-3,
    stop_when_hit_target: true,
};

/// Position spring: underdamped, so points drift and swing organically
/// instead of beelining to their targets.
const POSITION_SPRING: SpringConfig = SpringConfig {
    angular_frequency: 1.5,
    damping_ratio: 0.2,
    threshold: 1e-3,
    stop_when_hit_target: false,
};

/// A slot re-rolls its target once the spring comes this close on either axis.
const RETARGET_PROXIMITY: f64 = 0.125;

/// Substituted when `set_colors` receives an empty list.
const NEUTRAL_GRAY: Rgb = Rgb {
    r: 0.5,
    g: 0.5,
    b: 0.5,
};

/// One animated gradient control point.
///
/// Both colors are always LAB — the working space for transitions — so the
/// blend in [`current_color`](Speckle::current_color) is never asked to mix
/// across spaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Speckle {
    enabled: bool,
    target_color: Lab,
    previous_color: Lab,
    transition: Spring,
    position: Spring2D,
}

impl Default for Speckle {
    fn default() -> Self {
        let black = Lab {
            l: 0.0,
            a: 0.0,
            b: 0.0,
        };
        Self {
            enabled: false,
            target_color: black,
            previous_color: black,
            transition: Spring::new(TRANSITION_SPRING, 1.0),
            position: Spring2D::new(POSITION_SPRING, DVec2::ZERO),
        }
    }
}

impl Speckle {
    /// Whether this slot contributes to the output snapshot.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// The color this slot is transitioning toward.
    pub fn target_color(&self) -> Lab {
        self.target_color
    }

    /// The color this slot is transitioning away from.
    pub fn previous_color(&self) -> Lab {
        self.previous_color
    }

    /// Normalized [0, 1] clock blending the previous color into the target.
    pub fn transition_progress(&self) -> f64 {
        self.transition.position().clamp(0.0, 1.0)
    }

    /// True once the transition clock has reached 1.
    pub fn transition_complete(&self) -> bool {
        self.transition_progress() >= 1.0
    }

    /// The currently displayed color: previous blended toward target by the
    /// transition progress. Equals the target exactly once complete.
    pub fn current_color(&self) -> Lab {
        self.previous_color
            .lerp(self.target_color, self.transition_progress())
    }

    /// Current spring position in gradient space.
    pub fn position(&self) -> DVec2 {
        self.position.position()
    }

    /// Current spring target in gradient space.
    pub fn position_target(&self) -> DVec2 {
        self.position.target()
    }
}

/// The fixed set of eight speckles plus the PRNG that feeds their wandering.
#[derive(Debug, Clone)]
pub struct SpeckleSet {
    slots: [Speckle; COLOR_SLOT],
    rng: Xorshift64,
    input_modified: bool,
}

impl SpeckleSet {
    /// Creates a set with all slots disabled and every position spring
    /// seeded from `seed`.
    pub fn new(seed: u64) -> Self {
        let mut set = Self {
            slots: [Speckle::default(); COLOR_SLOT],
            rng: Xorshift64::new(seed),
            input_modified: false,
        };
        set.initialize_render_parameters();
        set
    }

    /// Read-only view of all slots, enabled or not.
    pub fn slots(&self) -> &[Speckle] {
        &self.slots
    }

    /// Whether colors or knobs changed since the last completed update pass.
    pub fn input_modified(&self) -> bool {
        self.input_modified
    }

    /// Flags that an external input (a knob) changed. `set_colors` flags
    /// itself.
    pub fn mark_input_modified(&mut self) {
        self.input_modified = true;
    }

    /// True while any enabled slot's color transition is still running.
    pub fn transitions_pending(&self) -> bool {
        self.slots
            .iter()
            .any(|s| s.enabled && !s.transition_complete())
    }

    /// Seeds every slot's position spring with a random current position and
    /// an independently drawn random target, so the animation is already in
    /// motion on the first frame instead of waking up frozen.
    fn initialize_render_parameters(&mut self) {
        let rng = &mut self.rng;
        for slot in &mut self.slots {
            slot.transition.set_target(1.0);
            slot.position.set_current(rng.next_unit_point(), DVec2::ZERO);
            slot.position.set_target(rng.next_unit_point());
        }
    }

    /// Assigns a new color list to the slots.
    ///
    /// Colors are normalized into LAB. With `repeat_to_fill` the list cycles
    /// across all eight slots; otherwise only the first `colors.len()` slots
    /// are assigned and the rest are disabled. An empty list is coerced to a
    /// single neutral gray.
    ///
    /// Assigning a slot its existing target is a no-op, so re-sending an
    /// unchanged list never restarts an in-flight transition. A touched slot
    /// starts a fresh transition from its *current* interpolated color when
    /// `interpolation_enabled` and the slot was already enabled; otherwise it
    /// snaps (a newly enabled slot never fades in from its stale color).
    pub fn set_colors(&mut self, colors: &[Rgb], interpolation_enabled: bool, repeat_to_fill: bool) {
        let fallback = [NEUTRAL_GRAY];
        let colors: &[Rgb] = if colors.is_empty() { &fallback } else { colors };
        let lab: Vec<Lab> = colors.iter().map(|&c| rgb_to_lab(c)).collect();

        let ending_index = if repeat_to_fill {
            COLOR_SLOT
        } else {
            lab.len().min(COLOR_SLOT)
        };

        for idx in 0..ending_index {
            let slot = &mut self.slots[idx];
            let color = lab[idx % lab.len()];
            if slot.target_color == color {
                continue;
            }
            let interpolate = interpolation_enabled && slot.enabled;
            let current = slot.current_color();
            slot.enabled = true;
            slot.previous_color = if interpolate { current } else { color };
            slot.target_color = color;
            slot.transition
                .set_current(if interpolate { 0.0 } else { 1.0 }, 0.0);
            slot.transition.set_target(1.0);
        }
        for slot in &mut self.slots[ending_index..] {
            slot.enabled = false;
        }
        self.input_modified = true;
    }

    /// Advances every enabled slot by `dt` seconds and assembles a fresh
    /// snapshot. Returns `None` without touching anything when `dt <= 0`.
    ///
    /// The position springs advance by `dt * speed * 0.5`; the halving
    /// decouples the user-facing speed scale from the spring's natural
    /// timescale. A slot whose position has come within [`RETARGET_PROXIMITY`]
    /// of its target on either axis draws a new uniform random target,
    /// keeping its momentum.
    pub fn update_render_parameters(&mut self, dt: f64, knobs: &Knobs) -> Option<Parameters> {
        if dt <= 0.0 {
            return None;
        }
        let move_delta = dt * knobs.speed * 0.5;

        let rng = &mut self.rng;
        for slot in self.slots.iter_mut().filter(|s| s.enabled) {
            if !slot.transition_complete() {
                slot.transition.advance(dt * knobs.transition_speed);
            }
            if move_delta > 0.0 {
                slot.position.advance(move_delta);
            }

            let pos = slot.position.position();
            let target = slot.position.target();
            if (pos.x - target.x).abs() < RETARGET_PROXIMITY
                || (pos.y - target.y).abs() < RETARGET_PROXIMITY
            {
                slot.position.set_target(rng.next_unit_point());
            }
        }

        self.input_modified = false;
        Some(self.snapshot(knobs))
    }

    /// Assembles a snapshot from the current state without advancing it.
    pub fn snapshot(&self, knobs: &Knobs) -> Parameters {
        Parameters {
            points: self
                .slots
                .iter()
                .filter(|s| s.enabled)
                .map(|s| ColorStop {
                    position: s.position(),
                    color: s.current_color(),
                })
                .collect(),
            bias: knobs.bias,
            power: knobs.power,
            noise: knobs.noise,
        }
    }
}
