use crate::Error;
use crate::catalog::{Catalog, KeyValueStore, RlgcSet};

/// Key the catalog is persisted under.
pub const CATALOG_KEY: &str = "rlgcSets";

/// Owns the persisted catalog and every mutation of it.
///
/// Each mutation persists before returning. The revision counts persisted
/// writes made through this store and lets views detect that what they show
/// is stale.
pub struct CatalogStore<K: KeyValueStore> {
    backend: K,
    revision: u64,
}

impl<K: KeyValueStore> CatalogStore<K> {
    #[inline]
    pub fn new(backend: K) -> Self {
        Self { backend, revision: 0 }
    }

    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }

    /// Reads the persisted catalog.
    ///
    /// A missing value reads as an empty catalog, and so does one that fails
    /// to parse.
    pub fn load(&self) -> Result<Catalog, Error> {
        let bytes = match self.backend.get(CATALOG_KEY)? {
            Some(bytes) => bytes,
            None => return Ok(Catalog::default()),
        };

        match serde_json::from_slice(&bytes) {
            Ok(catalog) => Ok(catalog),
            Err(err) => {
                tracing::warn!(%err, "persisted catalog is malformed, treating it as empty");
                Ok(Catalog::default())
            }
        }
    }

    /// Replaces the persisted catalog as a whole.
    pub fn save(&mut self, catalog: &Catalog) -> Result<(), Error> {
        let bytes = serde_json::to_vec(catalog)?;
        self.backend.put(CATALOG_KEY, &bytes)?;
        self.revision += 1;
        tracing::debug!(sets = catalog.len(), revision = self.revision, "saved catalog");
        Ok(())
    }

    /// Appends the built-in default set and persists.
    pub fn add_default(&mut self) -> Result<Catalog, Error> {
        let mut catalog = self.load()?;
        catalog.push(RlgcSet::builtin_default());
        self.save(&catalog)?;
        tracing::info!("added default RLGC set");
        Ok(catalog)
    }

    /// Loads the catalog, seeding it with the default set when it is empty.
    pub fn load_or_bootstrap(&mut self) -> Result<Catalog, Error> {
        let catalog = self.load()?;
        if catalog.is_empty() {
            self.add_default()
        } else {
            Ok(catalog)
        }
    }

    /// Saves `set` by name.
    ///
    /// A set with the same name is replaced in place, but only if
    /// `confirm_overwrite` agrees; otherwise the set is appended. Returns the
    /// index of the saved set, or `None` when the overwrite was declined.
    pub fn upsert<F>(&mut self, set: RlgcSet, confirm_overwrite: F) -> Result<Option<usize>, Error>
    where
        F: FnOnce(&RlgcSet) -> bool,
    {
        if set.name.is_empty() {
            return Err(Error::Validation { field: "name" });
        }

        let mut catalog = self.load()?;
        let index = match catalog.position(&set.name) {
            Some(index) => {
                if !confirm_overwrite(catalog.at(index)?) {
                    tracing::debug!(name = %set.name, "overwrite declined");
                    return Ok(None);
                }
                catalog.replace(index, set);
                index
            }
            None => catalog.push(set),
        };
        self.save(&catalog)?;
        tracing::info!(index, "saved RLGC set");

        Ok(Some(index))
    }

    /// Removes the set at `index`.
    ///
    /// Confirmation belongs to the caller: an unconfirmed call changes
    /// nothing. Removing the last set puts the default set in its place
    /// within the same write, so the persisted catalog is never empty.
    pub fn delete_at(&mut self, index: usize, confirmed: bool) -> Result<Catalog, Error> {
        let mut catalog = self.load()?;
        catalog.at(index)?;
        if !confirmed {
            tracing::debug!(index, "delete not confirmed");
            return Ok(catalog);
        }

        let removed = catalog.remove(index);
        if catalog.is_empty() {
            tracing::info!("last RLGC set deleted, seeding default");
            catalog.push(RlgcSet::builtin_default());
        }
        self.save(&catalog)?;
        tracing::info!(index, name = %removed.name, "deleted RLGC set");

        Ok(catalog)
    }
}
