//! Includes commonly used library components.

pub use crate::{
    AxisBounds,
    Error,
    LineConfiguration,
    MaxImpedance,
};
pub use crate::catalog::{Catalog, CatalogStore, Hdf5Store, KeyValueStore, MemoryStore, RlgcSet};
pub use crate::impedance::{ImpedanceProfile, RlgcParameters, SweepDescriptor, TransmissionLine};
pub use crate::sync::{CatalogAuthority, CatalogView, ViewSynchronizer};
pub use crate::views::{LineInputs, ListView, MainView, Prompt};
