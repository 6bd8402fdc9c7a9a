use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::impedance::TransmissionLine;

/// Per-unit-length line constants.
///
/// Values are taken as given. Negative or zero entries are not rejected, the
/// resulting impedances are simply whatever the formulas produce.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RlgcParameters {
    /// Resistance [Ω / length unit].
    pub r: f64,
    /// Inductance [H / length unit].
    pub l: f64,
    /// Conductance [S / length unit].
    pub g: f64,
    /// Capacitance [F / length unit].
    pub c: f64,
}

impl TransmissionLine for RlgcParameters {
    #[inline]
    fn series_impedance(&self, omega: f64) -> Complex64 {
        Complex64::new(self.r, omega * self.l)
    }
    #[inline]
    fn shunt_admittance(&self, omega: f64) -> Complex64 {
        Complex64::new(self.g, omega * self.c)
    }
}
