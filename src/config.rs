use crate::Error;
use crate::impedance::{load_impedance, RlgcParameters, SweepDescriptor, DEFAULT_NPOINTS};

/// Upper display bound used when the configured one is unusable.
const DEGENERATE_BOUND: f64 = 1e-50;

/// Parses a numeric input field, falling back when the text is empty, not a
/// number, or not finite. A parsed `0` is kept.
pub fn parse_field(text: &str, fallback: f64) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            if !text.trim().is_empty() {
                tracing::warn!(text, fallback, "unparseable numeric field, using fallback");
            }
            fallback
        }
    }
}

/// Requested upper bound of the `|Z_in|` axis.
#[derive(Clone, Debug, PartialEq)]
pub enum MaxImpedance {
    Auto,
    Fixed(String),
}

/// Axis limits for a `|Z_in|` against position plot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisBounds {
    pub x_min: f64,
    pub x_max: f64,
    /// `None` lets the plot scale itself.
    pub y_max: Option<f64>,
}

impl AxisBounds {
    /// Resolves the bounds for a line of length `line_length`.
    ///
    /// A fixed bound that is not a positive number is replaced by a minimal
    /// bound, and the problem is returned as a warning alongside.
    pub fn resolve(line_length: f64, max_impedance: &MaxImpedance) -> (Self, Option<Error>) {
        let (y_max, warning) = match max_impedance {
            MaxImpedance::Auto => (None, None),
            MaxImpedance::Fixed(text) => match text.trim().parse::<f64>() {
                Ok(value) if value > 0.0 && value.is_finite() => (Some(value), None),
                _ => {
                    tracing::warn!(value = %text, "invalid max impedance, using minimal bound");
                    (
                        Some(DEGENERATE_BOUND),
                        Some(Error::Configuration { value: text.clone() }),
                    )
                }
            },
        };

        (Self { x_min: 0.0, x_max: line_length, y_max }, warning)
    }
}

/// Transient calculator inputs, already parsed.
#[derive(Clone, Debug, PartialEq)]
pub struct LineConfiguration {
    /// [Hz]
    pub frequency: f64,
    pub line_length: f64,
    /// [Ω]
    pub load_magnitude: f64,
    /// [deg]
    pub load_phase: f64,
    pub max_impedance: MaxImpedance,
    pub npoints: usize,
}

impl Default for LineConfiguration {
    fn default() -> Self {
        Self {
            frequency: 0.0,
            line_length: 0.0,
            load_magnitude: 0.0,
            load_phase: 0.0,
            max_impedance: MaxImpedance::Auto,
            npoints: DEFAULT_NPOINTS,
        }
    }
}

impl LineConfiguration {
    /// Builds the sweep for `params` under this configuration.
    pub fn sweep(&self, params: RlgcParameters) -> SweepDescriptor<RlgcParameters> {
        SweepDescriptor {
            line: params,
            frequency: self.frequency,
            load: load_impedance(self.load_magnitude, self.load_phase),
            line_length: self.line_length,
            npoints: self.npoints,
        }
    }
}
