use crate::Error;
use crate::catalog::{KeyValueStore, RlgcSet};
use crate::sync::{CatalogAuthority, CatalogView};
use crate::views::Prompt;

/// The catalog list surface.
///
/// It has no store of its own: reads and deletes go through the main view's
/// authority, and it reports failures instead of propagating a crash.
pub struct ListView<K: KeyValueStore> {
    authority: CatalogAuthority<K>,
    rows: Vec<RlgcSet>,
    status: Vec<String>,
    seen_revision: Option<u64>,
}

impl<K: KeyValueStore> ListView<K> {
    /// Opens the list and renders it once.
    pub fn open(authority: CatalogAuthority<K>) -> Result<Self, Error> {
        let mut view = Self {
            authority,
            rows: Vec::new(),
            status: Vec::new(),
            seen_revision: None,
        };
        view.reload()?;
        Ok(view)
    }

    /// Rows as last rendered.
    pub fn rows(&self) -> &[RlgcSet] {
        &self.rows
    }

    /// An empty list renders a placeholder row instead of sets.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn status(&self) -> &[String] {
        &self.status
    }

    /// Deletes the row at `index` after the user confirms here. The main
    /// view is not asked again.
    pub fn delete<P: Prompt>(&mut self, index: usize, prompt: &mut P) -> Result<bool, Error> {
        self.status.push("Delete started.".to_string());
        if !prompt.confirm("Delete this RLGC set?") {
            self.status.push("Delete cancelled.".to_string());
            return Ok(false);
        }

        match self.authority.delete_at(index, true).and_then(|_| self.reload()) {
            Ok(()) => {
                self.status.push("Delete succeeded.".to_string());
                Ok(true)
            }
            Err(err) => {
                tracing::error!(%err, index, "delete from list failed");
                prompt.alert(&format!("Delete failed: {err}"));
                self.status.push("Delete failed.".to_string());
                Err(err)
            }
        }
    }
}

impl<K: KeyValueStore> CatalogView for ListView<K> {
    fn seen_revision(&self) -> Option<u64> {
        self.seen_revision
    }

    fn reload(&mut self) -> Result<(), Error> {
        let catalog = self.authority.load()?;
        self.seen_revision = Some(self.authority.revision()?);
        self.rows = catalog.iter().cloned().collect();
        Ok(())
    }
}
