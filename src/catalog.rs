//! Persisted catalog of named RLGC parameter sets.

mod hdf5_store;
mod memory;
mod set;
mod store;

pub use hdf5_store::Hdf5Store;
pub use memory::MemoryStore;
pub use set::{Catalog, RlgcSet};
pub use store::{CatalogStore, CATALOG_KEY};

use crate::Error;

/// A persistence backend holding opaque values under string keys.
///
/// `put` must replace the value atomically: a `get` never observes a
/// partially written value.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, Error>;
    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), Error>;
}
