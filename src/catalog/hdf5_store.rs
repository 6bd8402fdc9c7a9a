use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::Error;
use crate::catalog::KeyValueStore;

/// Keeps every key as a `u8` dataset in the root group of one HDF5 file.
///
/// Writes go to a sibling file which is then renamed over the store, so a
/// reader sees either the old file or the new one.
#[derive(Debug)]
pub struct Hdf5Store {
    path: PathBuf,
}

impl Hdf5Store {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn read_all(&self) -> Result<BTreeMap<String, Vec<u8>>, Error> {
        let mut values = BTreeMap::new();
        if !self.path.exists() {
            return Ok(values);
        }

        let file = hdf5::File::open(&self.path)?;
        for name in file.member_names()? {
            let value = file.dataset(&name)?.read_raw::<u8>()?;
            values.insert(name, value);
        }
        file.close()?;

        Ok(values)
    }
}

impl KeyValueStore for Hdf5Store {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, Error> {
        if !self.path.exists() {
            return Ok(None);
        }

        let file = hdf5::File::open(&self.path)?;
        let value = if file.member_names()?.iter().any(|name| name == key) {
            Some(file.dataset(key)?.read_raw::<u8>()?)
        } else {
            None
        };
        file.close()?;

        Ok(value)
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), Error> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_vec());

        let staging = self.staging_path();
        let file = hdf5::File::create(&staging)?;
        for (name, bytes) in &values {
            file.new_dataset::<u8>()
                .shape(bytes.len())
                .create(name.as_str())?
                .write_raw(bytes.as_slice())?;
        }
        file.close()?;

        std::fs::rename(&staging, &self.path)?;
        tracing::debug!(path = %self.path.display(), key, bytes = value.len(), "wrote store");

        Ok(())
    }
}
