//! Color types and conversion functions for the colorwash engine.
//!
//! Provides four color types (`Rgb`, `Xyz`, `Lab`, `Lch`) — one per tagged
//! color space — and pure conversion functions between them, composing
//! through the canonical pivot RGB -> XYZ -> LAB -> LCH and its inverse.
//! All conversions are total: out-of-gamut results clip rather than fail.
//! Uses `f64` throughout for precision.
//!
//! LAB is the working space for speckle color transitions; interpolating
//! there is perceptually much smoother than in raw RGB.

use crate::error::EngineError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// D65 reference white, XYZ scaled to the 0–100 domain.
const WHITE_X: f64 = 95.047;
const WHITE_Y: f64 = 100.0;
const WHITE_Z: f64 = 108.883;

/// CIE standard constants: ε = (6/29)³, κ = (29/3)³.
const CIE_EPSILON: f64 = 216.0 / 24389.0;
const CIE_KAPPA: f64 = 24389.0 / 27.0;

/// Chroma below this is treated as achromatic and the hue collapses to 0,
/// keeping `atan2(0, 0)` indeterminacy out of the pipeline.
const CHROMA_FLOOR: f64 = 1e-10;

/// sRGB color with components in [0, 1].
///
/// Serializes as a hex string `"#rrggbb"` for human-readable formats.
/// The hex round-trip has 8-bit quantization (1/255 precision loss),
/// which is acceptable since hex colors are inherently 8-bit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// CIE XYZ color, D65 white, components on the 0–100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// CIE L*a*b* color, D65 white. L in [0, 100], a/b roughly [-128, 128].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// LCh (cylindrical form of LAB). Hue in degrees, [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Rgb {
    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `EngineError::InvalidColor` if the input is not a valid 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Rgb, EngineError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            return Err(EngineError::InvalidColor(format!(
                "expected 6 hex digits, got {}",
                hex.len()
            )));
        }
        let r = u8::from_str_radix(&hex[0..2], 16)
            .map_err(|e| EngineError::InvalidColor(format!("invalid red component: {e}")))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .map_err(|e| EngineError::InvalidColor(format!("invalid green component: {e}")))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .map_err(|e| EngineError::InvalidColor(format!("invalid blue component: {e}")))?;
        Ok(Rgb::from_u8(r, g, b))
    }

    /// Creates a color from 8-bit channel values.
    pub fn from_u8(r: u8, g: u8, b: u8) -> Rgb {
        Rgb {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        }
    }

    /// Converts the color to a hex string like `"#rrggbb"`.
    ///
    /// Components are quantized to 8-bit (0–255) with rounding.
    pub fn to_hex(self) -> String {
        let r = (self.r.clamp(0.0, 1.0) * 255.0).round() as u8;
        let g = (self.g.clamp(0.0, 1.0) * 255.0).round() as u8;
        let b = (self.b.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Applies inverse sRGB companding to convert one sRGB component to linear.
fn srgb_decode(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Applies sRGB companding to convert one linear component to sRGB.
fn srgb_encode(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Converts sRGB to CIE XYZ (D65, 0–100 scale).
pub fn rgb_to_xyz(c: Rgb) -> Xyz {
    let r = srgb_decode(c.r);
    let g = srgb_decode(c.g);
    let b = srgb_decode(c.b);
    Xyz {
        x: (0.412_456_4 * r + 0.357_576_1 * g + 0.180_437_5 * b) * 100.0,
        y: (0.212_672_9 * r + 0.715_152_2 * g + 0.072_175_0 * b) * 100.0,
        z: (0.019_333_9 * r + 0.119_192_0 * g + 0.950_304_1 * b) * 100.0,
    }
}

/// Converts CIE XYZ (D65, 0–100 scale) to sRGB.
///
/// Out-of-gamut components clip into [0, 1]: negative values clamp to zero
/// (signal clipping, not an error) and overbright values clamp to one.
pub fn xyz_to_rgb(c: Xyz) -> Rgb {
    let x = c.x / 100.0;
    let y = c.y / 100.0;
    let z = c.z / 100.0;
    let r = 3.240_454_2 * x - 1.537_138_5 * y - 0.498_531_4 * z;
    let g = -0.969_266_0 * x + 1.876_010_8 * y + 0.041_556_0 * z;
    let b = 0.055_643_4 * x - 0.204_025_9 * y + 1.057_225_2 * z;
    Rgb {
        r: srgb_encode(r.clamp(0.0, 1.0)),
        g: srgb_encode(g.clamp(0.0, 1.0)),
        b: srgb_encode(b.clamp(0.0, 1.0)),
    }
}

/// The CIE f() forward transfer function.
fn lab_f(t: f64) -> f64 {
    if t > CIE_EPSILON {
        t.cbrt()
    } else {
        (CIE_KAPPA * t + 16.0) / 116.0
    }
}

/// Converts CIE XYZ (D65, 0–100 scale) to L*a*b*.
pub fn xyz_to_lab(c: Xyz) -> Lab {
    let fx = lab_f(c.x / WHITE_X);
    let fy = lab_f(c.y / WHITE_Y);
    let fz = lab_f(c.z / WHITE_Z);
    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Converts L*a*b* to CIE XYZ (D65, 0–100 scale).
pub fn lab_to_xyz(c: Lab) -> Xyz {
    let fy = (c.l + 16.0) / 116.0;
    let fx = fy + c.a / 500.0;
    let fz = fy - c.b / 200.0;

    let fx3 = fx * fx * fx;
    let fz3 = fz * fz * fz;
    let xr = if fx3 > CIE_EPSILON {
        fx3
    } else {
        (116.0 * fx - 16.0) / CIE_KAPPA
    };
    let yr = if c.l > CIE_KAPPA * CIE_EPSILON {
        fy * fy * fy
    } else {
        c.l / CIE_KAPPA
    };
    let zr = if fz3 > CIE_EPSILON {
        fz3
    } else {
        (116.0 * fz - 16.0) / CIE_KAPPA
    };

    Xyz {
        x: xr * WHITE_X,
        y: yr * WHITE_Y,
        z: zr * WHITE_Z,
    }
}

/// Converts L*a*b* to LCh (cylindrical form).
///
/// NaN guard: chroma below `1e-10` forces hue to 0.0 instead of evaluating
/// the indeterminate `atan2(0, 0)`.
pub fn lab_to_lch(c: Lab) -> Lch {
    let chroma = (c.a * c.a + c.b * c.b).sqrt();
    let h = if chroma < CHROMA_FLOOR {
        0.0
    } else {
        c.b.atan2(c.a).to_degrees().rem_euclid(360.0)
    };
    Lch {
        l: c.l,
        c: chroma,
        h,
    }
}

/// Converts LCh to L*a*b*.
pub fn lch_to_lab(c: Lch) -> Lab {
    let h_rad = c.h.to_radians();
    Lab {
        l: c.l,
        a: c.c * h_rad.cos(),
        b: c.c * h_rad.sin(),
    }
}

/// Convenience: sRGB to LAB via the chain RGB -> XYZ -> LAB.
pub fn rgb_to_lab(c: Rgb) -> Lab {
    xyz_to_lab(rgb_to_xyz(c))
}

/// Convenience: LAB to sRGB via the chain LAB -> XYZ -> RGB, clipped into gamut.
pub fn lab_to_rgb(c: Lab) -> Rgb {
    xyz_to_rgb(lab_to_xyz(c))
}

/// Convenience: sRGB to LCh via the full forward pivot.
pub fn rgb_to_lch(c: Rgb) -> Lch {
    lab_to_lch(rgb_to_lab(c))
}

/// Convenience: LCh to sRGB via the full inverse pivot, clipped into gamut.
pub fn lch_to_rgb(c: Lch) -> Rgb {
    lab_to_rgb(lch_to_lab(c))
}
