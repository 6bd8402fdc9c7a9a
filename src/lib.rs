//! Input impedance of terminated RLGC transmission lines.
//!
//! The [`impedance`] module computes the characteristic impedance, the
//! propagation constant and the swept input impedance `Z_in(x)` of a uniform
//! line. The [`catalog`] module persists named RLGC parameter sets, and the
//! [`views`] and [`sync`] modules keep the calculator and catalog list
//! surfaces consistent over one shared catalog.
//!
//! To get started, refer to the `demos` directory in the main repository.

mod config;

pub mod catalog;
pub mod export;
pub mod impedance;
pub mod prelude;
pub mod sync;
pub mod views;

pub use config::{parse_field, AxisBounds, LineConfiguration, MaxImpedance};

/// Represents an error in the calculator or the catalog.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Required field `{field}` is empty or not a number")]
    Validation { field: &'static str },
    #[error("Index {index} is out of bounds ( catalog length: {len} )")]
    Index { index: usize, len: usize },
    #[error("The catalog authority of the main view is unreachable")]
    UnavailableCollaborator,
    #[error("Max impedance `{value}` is not a positive number")]
    Configuration { value: String },
    #[error(transparent)]
    H5Error(#[from] hdf5::Error),
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
