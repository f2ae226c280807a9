//! Linear interpolation over scalars, 2D points, and same-space colors.
//!
//! The trait bounds interpolation to values of one type, so two colors can
//! only be blended when they carry the same space tag. The weighted form
//! `a*(1-t) + b*t` is used instead of `a + (b-a)*t` so that `t=0` and `t=1`
//! reproduce the endpoints bit-exactly.
//!
//! Hue interpolation for [`Lch`] takes the shortest angular path across the
//! 0°/360° wrap; blending 350° toward 10° passes through 0°, not 180°.

use crate::color::{Lab, Lch, Rgb, Xyz};
use glam::DVec2;

/// Values that can be linearly interpolated toward another value of the
/// same type.
pub trait Lerp {
    /// Interpolates from `self` toward `to` by factor `t`.
    ///
    /// `t=0` returns `self` exactly and `t=1` returns `to` exactly;
    /// values outside [0, 1] extrapolate.
    fn lerp(self, to: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(self, to: Self, t: f64) -> Self {
        self * (1.0 - t) + to * t
    }
}

impl Lerp for DVec2 {
    fn lerp(self, to: Self, t: f64) -> Self {
        DVec2::new(self.x.lerp(to.x, t), self.y.lerp(to.y, t))
    }
}

impl Lerp for Rgb {
    fn lerp(self, to: Self, t: f64) -> Self {
        Rgb {
            r: self.r.lerp(to.r, t),
            g: self.g.lerp(to.g, t),
            b: self.b.lerp(to.b, t),
        }
    }
}

impl Lerp for Xyz {
    fn lerp(self, to: Self, t: f64) -> Self {
        Xyz {
            x: self.x.lerp(to.x, t),
            y: self.y.lerp(to.y, t),
            z: self.z.lerp(to.z, t),
        }
    }
}

impl Lerp for Lab {
    fn lerp(self, to: Self, t: f64) -> Self {
        Lab {
            l: self.l.lerp(to.l, t),
            a: self.a.lerp(to.a, t),
            b: self.b.lerp(to.b, t),
        }
    }
}

impl Lerp for Lch {
    fn lerp(self, to: Self, t: f64) -> Self {
        Lch {
            l: self.l.lerp(to.l, t),
            c: self.c.lerp(to.c, t),
            h: lerp_hue(self.h, to.h, t),
        }
    }
}

/// Interpolates a hue angle along the shortest arc, handling wraparound at 360.
pub fn lerp_hue(h0: f64, h1: f64, t: f64) -> f64 {
    let delta = match h1 - h0 {
        d if d > 180.0 => d - 360.0,
        d if d < -180.0 => d + 360.0,
        d => d,
    };
    (h0 + t * delta).rem_euclid(360.0)
}
