//! Keeps several surfaces over one catalog showing the same state.
//!
//! The main view owns the authoritative [`CatalogStore`] through a
//! [`SharedStore`]. Every other surface reaches it through a
//! [`CatalogAuthority`], which holds only a weak handle: once the main view is
//! gone, calls fail with [`Error::UnavailableCollaborator`] instead of
//! touching a dangling catalog.
//!
//! Views never keep a catalog beyond one render. After a mutation the
//! [`ViewSynchronizer`] compares the store revision with the revision each
//! view last rendered and reloads the stale ones.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::Error;
use crate::catalog::{Catalog, CatalogStore, KeyValueStore};

/// Strong handle to the authoritative store.
pub type SharedStore<K> = Rc<RefCell<CatalogStore<K>>>;

/// Handle through which a secondary surface calls into the main view's store.
pub struct CatalogAuthority<K: KeyValueStore> {
    store: Weak<RefCell<CatalogStore<K>>>,
}

impl<K: KeyValueStore> Clone for CatalogAuthority<K> {
    fn clone(&self) -> Self {
        Self { store: self.store.clone() }
    }
}

impl<K: KeyValueStore> CatalogAuthority<K> {
    pub fn new(store: &SharedStore<K>) -> Self {
        Self { store: Rc::downgrade(store) }
    }

    /// Whether the owning surface is still alive.
    pub fn is_reachable(&self) -> bool {
        self.store.strong_count() > 0
    }

    fn with<T, F>(&self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut CatalogStore<K>) -> Result<T, Error>,
    {
        let store = self.store.upgrade().ok_or(Error::UnavailableCollaborator)?;
        let mut store = store
            .try_borrow_mut()
            .map_err(|_| Error::UnavailableCollaborator)?;
        f(&mut store)
    }

    pub fn load(&self) -> Result<Catalog, Error> {
        self.with(|store| store.load())
    }

    pub fn delete_at(&self, index: usize, confirmed: bool) -> Result<Catalog, Error> {
        self.with(|store| store.delete_at(index, confirmed))
    }

    pub fn revision(&self) -> Result<u64, Error> {
        self.with(|store| Ok(store.revision()))
    }
}

/// A surface that renders the catalog.
pub trait CatalogView {
    /// Store revision the surface last rendered, if any.
    fn seen_revision(&self) -> Option<u64>;
    /// Re-reads the catalog from the store and re-renders.
    fn reload(&mut self) -> Result<(), Error>;
}

/// Propagates catalog mutations to every registered surface.
pub struct ViewSynchronizer<K: KeyValueStore> {
    authority: CatalogAuthority<K>,
}

impl<K: KeyValueStore> ViewSynchronizer<K> {
    pub fn new(authority: CatalogAuthority<K>) -> Self {
        Self { authority }
    }

    /// Reloads each view that has not rendered the current revision.
    /// Returns how many views were reloaded.
    pub fn propagate(&self, views: &mut [&mut dyn CatalogView]) -> Result<usize, Error> {
        let revision = self.authority.revision()?;
        let mut reloaded = 0;
        for view in views.iter_mut() {
            if view.seen_revision() != Some(revision) {
                view.reload()?;
                reloaded += 1;
            }
        }
        tracing::debug!(revision, reloaded, "propagated catalog revision");
        Ok(reloaded)
    }
}

/// Keeps `selected` if it still points into a catalog of length `len`,
/// otherwise falls back to the first entry.
#[inline]
pub fn revalidate_selection(selected: usize, len: usize) -> usize {
    if selected < len {
        selected
    } else {
        0
    }
}

/// Loads the catalog for a surface, seeding the default set when it is empty.
pub(crate) fn load_non_empty<K: KeyValueStore>(store: &SharedStore<K>) -> Result<Catalog, Error> {
    store.borrow_mut().load_or_bootstrap()
}
