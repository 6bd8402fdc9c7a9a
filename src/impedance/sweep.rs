use num_complex::Complex64;

use crate::Error;
use crate::impedance::{complex, TransmissionLine, NEPER_TO_DB};

/// Number of sweep intervals used when none is given.
pub const DEFAULT_NPOINTS: usize = 100;

/// Stand-in for a zero line length, so the sweep still has a positive step.
pub const DEGENERATE_LENGTH: f64 = 1e-50;

/// Describes an input impedance sweep along a terminated line.
pub struct SweepDescriptor<L: TransmissionLine> {
    pub line: L,
    /// Source frequency [Hz].
    pub frequency: f64,
    /// Complex load impedance at the far end [Ω].
    pub load: Complex64,
    /// Total line length, in the length unit of `line`.
    pub line_length: f64,
    /// Number of intervals; the sweep has `npoints + 1` samples.
    pub npoints: usize,
}

/// Builds a load impedance from its magnitude [Ω] and phase [deg].
#[inline]
pub fn load_impedance(magnitude: f64, phase: f64) -> Complex64 {
    Complex64::from_polar(magnitude, phase.to_radians())
}

/// The computed impedance profile of a terminated line.
#[derive(Clone, Debug)]
pub struct ImpedanceProfile {
    pub frequency: f64,
    /// Characteristic impedance.
    pub z0: Complex64,
    /// Propagation constant; real part is α [Np / length unit], imaginary part
    /// is β [rad / length unit].
    pub gamma: Complex64,
    pub load: Complex64,
    /// Swept length. A zero input length is replaced by `DEGENERATE_LENGTH`.
    pub line_length: f64,
    /// Distance of each sample from the load end.
    pub positions: ndarray::Array1<f64>,
    /// Input impedance at each sample.
    pub impedances: ndarray::Array1<Complex64>,
    /// `|Z_in|` at each sample.
    pub magnitudes: ndarray::Array1<f64>,
}

impl ImpedanceProfile {
    /// Evaluates `Z_in(x) = Z0 (Z_L + Z0 tanh γx) / (Z0 + Z_L tanh γx)` at
    /// `npoints + 1` evenly spaced positions from `0` to the line length.
    pub fn compute<L: TransmissionLine>(desc: SweepDescriptor<L>) -> Result<Self, Error> {
        if desc.npoints == 0 {
            return Err(Error::Validation { field: "npoints" });
        }

        let z0 = desc.line.characteristic_impedance(desc.frequency);
        let gamma = desc.line.propagation_constant(desc.frequency);

        let line_length = if desc.line_length == 0.0 {
            DEGENERATE_LENGTH
        } else {
            desc.line_length
        };
        let step = line_length / (desc.npoints as f64);

        let positions = ndarray::Array1::from_shape_fn(desc.npoints + 1, |i| (i as f64) * step);
        let impedances = positions.mapv(|x| input_impedance(z0, gamma, desc.load, x));
        let magnitudes = impedances.mapv(|z| z.norm());

        tracing::debug!(
            frequency = desc.frequency,
            line_length,
            npoints = desc.npoints,
            "computed impedance profile"
        );

        Ok(Self {
            frequency: desc.frequency,
            z0,
            gamma,
            load: desc.load,
            line_length,
            positions,
            impedances,
            magnitudes,
        })
    }

    /// Attenuation constant [Np / length unit].
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.gamma.re
    }

    /// Phase constant [rad / length unit].
    #[inline]
    pub fn beta(&self) -> f64 {
        self.gamma.im
    }

    /// Attenuation [dB / length unit].
    #[inline]
    pub fn attenuation_db(&self) -> f64 {
        self.alpha() * NEPER_TO_DB
    }

    /// Phase constant [deg / length unit].
    #[inline]
    pub fn beta_degrees(&self) -> f64 {
        self.beta().to_degrees()
    }

    /// Input impedance at the full line length.
    pub fn z_in(&self) -> Complex64 {
        self.impedances[self.impedances.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// `(position, |Z_in|)` pairs in sweep order.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.positions.iter().copied().zip(self.magnitudes.iter().copied())
    }

    pub fn z0_polar(&self) -> complex::Polar {
        self.z0.into()
    }

    pub fn z_in_polar(&self) -> complex::Polar {
        self.z_in().into()
    }
}

#[inline]
fn input_impedance(z0: Complex64, gamma: Complex64, load: Complex64, x: f64) -> Complex64 {
    let t = complex::tanh(gamma * x);
    z0 * (load + z0 * t) / (z0 + load * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impedance::RlgcParameters;
    use approx::assert_relative_eq;

    fn line() -> RlgcParameters {
        RlgcParameters { r: 31.5, l: 0.605e-3, g: 4.35e-5, c: 0.0488e-6 }
    }

    #[test]
    fn zero_points_is_rejected() {
        let res = ImpedanceProfile::compute(SweepDescriptor {
            line: line(),
            frequency: 1e3,
            load: load_impedance(50.0, 0.0),
            line_length: 10.0,
            npoints: 0,
        });
        assert!(matches!(res, Err(Error::Validation { field: "npoints" })));
    }

    #[test]
    fn first_sample_sees_the_load() {
        let load = load_impedance(75.0, -30.0);
        let profile = ImpedanceProfile::compute(SweepDescriptor {
            line: line(),
            frequency: 5e3,
            load,
            line_length: 3.0,
            npoints: 8,
        })
        .unwrap();

        assert_eq!(profile.len(), 9);
        assert_eq!(profile.positions[0], 0.0);
        assert_relative_eq!(profile.impedances[0].re, load.re, epsilon = 1e-9);
        assert_relative_eq!(profile.impedances[0].im, load.im, epsilon = 1e-9);
        assert_relative_eq!(profile.positions[8], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn shorted_eighth_wave_is_inductive() {
        // Z0 = 50 Ω and β = 2π rad/m at 1 Hz, so an eighth wave is 0.125 m
        let lossless = RlgcParameters { r: 0.0, l: 50.0, g: 0.0, c: 1.0 / 50.0 };
        let short = ImpedanceProfile::compute(SweepDescriptor {
            line: lossless,
            frequency: 1.0,
            load: Complex64::new(0.0, 0.0),
            line_length: 0.125,
            npoints: 4,
        })
        .unwrap();
        // tan(π/4) = 1, so a shorted eighth wave looks like j·Z0
        assert_relative_eq!(short.z0.re, 50.0, epsilon = 1e-9);
        assert_relative_eq!(short.z_in().re, 0.0, epsilon = 1e-9);
        assert_relative_eq!(short.z_in().im, 50.0, epsilon = 1e-9);
    }
}
