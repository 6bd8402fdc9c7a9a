//! Complex helpers with pinned conventions.

use std::fmt;

use num_complex::Complex64;

/// Square root on the principal branch, with the real part forced to be
/// non-negative.
///
/// `num_complex` returns the principal root already; the check pins the
/// convention so Z0 and γ stay on the passive branch whatever the backend.
#[inline]
pub fn principal_sqrt(z: Complex64) -> Complex64 {
    let root = z.sqrt();
    if root.re < 0.0 {
        -root
    } else {
        root
    }
}

/// Hyperbolic tangent that stays finite for large real parts.
///
/// Uses `tanh(z) = s · (1 - e^(-2sz)) / (1 + e^(-2sz))` with `s` the sign of
/// `Re(z)`, so the exponential never overflows.
pub fn tanh(z: Complex64) -> Complex64 {
    let sign = if z.re < 0.0 { -1.0 } else { 1.0 };
    let e = (-2.0 * sign * z).exp();
    sign * (1.0 - e) / (1.0 + e)
}

/// Magnitude and phase of a complex impedance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Polar {
    pub magnitude: f64,
    /// Phase in degrees.
    pub phase: f64,
}

impl From<Complex64> for Polar {
    fn from(z: Complex64) -> Self {
        Self {
            magnitude: z.norm(),
            phase: z.arg().to_degrees(),
        }
    }
}

impl fmt::Display for Polar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} ∠ {:.3}° Ω", self.magnitude, self.phase)
    }
}

/// Rectangular rendering of an impedance, e.g. `"12.000 + -3.500i Ω"`.
pub fn rectangular(z: Complex64) -> String {
    format!("{:.3} + {:.3}i Ω", z.re, z.im)
}
