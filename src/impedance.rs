pub mod complex;

mod rlgc;
mod sweep;

pub use rlgc::RlgcParameters;
pub use sweep::{
    load_impedance, ImpedanceProfile, SweepDescriptor, DEFAULT_NPOINTS, DEGENERATE_LENGTH,
};

use num_complex::Complex64;

/// Conversion factor from nepers to decibels.
pub const NEPER_TO_DB: f64 = 8.686;

/// Describes the per-unit-length behavior of a uniform transmission line.
pub trait TransmissionLine {
    /// Series impedance per unit length at angular frequency `omega`.
    fn series_impedance(&self, omega: f64) -> Complex64;
    /// Shunt admittance per unit length at angular frequency `omega`.
    fn shunt_admittance(&self, omega: f64) -> Complex64;

    /// `Z0 = sqrt(Z / Y)`, on the branch with a non-negative real part.
    fn characteristic_impedance(&self, frequency: f64) -> Complex64 {
        let omega = angular_frequency(frequency);
        complex::principal_sqrt(self.series_impedance(omega) / self.shunt_admittance(omega))
    }

    /// `γ = sqrt(Z · Y)`, on the branch with a non-negative real part.
    fn propagation_constant(&self, frequency: f64) -> Complex64 {
        let omega = angular_frequency(frequency);
        complex::principal_sqrt(self.series_impedance(omega) * self.shunt_admittance(omega))
    }
}

#[inline]
pub fn angular_frequency(frequency: f64) -> f64 {
    2.0 * std::f64::consts::PI * frequency
}
