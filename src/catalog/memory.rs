use std::collections::HashMap;

use crate::Error;
use crate::catalog::KeyValueStore;

/// Keeps values in process memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, Error> {
        Ok(self.values.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), Error> {
        self.values.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
