use serde::{Deserialize, Serialize};

use crate::Error;
use crate::impedance::RlgcParameters;

/// A named set of line constants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RlgcSet {
    pub name: String,
    #[serde(flatten)]
    pub params: RlgcParameters,
}

impl RlgcSet {
    pub fn new(name: impl Into<String>, r: f64, l: f64, g: f64, c: f64) -> Self {
        Self {
            name: name.into(),
            params: RlgcParameters { r, l, g, c },
        }
    }

    /// The set every empty catalog is seeded with.
    pub fn builtin_default() -> Self {
        Self::new("Default", 31.5, 0.605e-3, 4.35e-5, 0.0488e-6)
    }
}

/// Ordered sequence of parameter sets, in display order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    sets: Vec<RlgcSet>,
}

impl Catalog {
    pub fn new(sets: Vec<RlgcSet>) -> Self {
        Self { sets }
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RlgcSet> {
        self.sets.get(index)
    }

    /// Like `get`, but reports an out of range index as an error.
    pub fn at(&self, index: usize) -> Result<&RlgcSet, Error> {
        self.sets.get(index).ok_or(Error::Index {
            index,
            len: self.sets.len(),
        })
    }

    /// Position of the set with exactly this name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.sets.iter().position(|set| set.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RlgcSet> {
        self.sets.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.sets.iter().map(|set| set.name.as_str()).collect()
    }

    pub(crate) fn push(&mut self, set: RlgcSet) -> usize {
        self.sets.push(set);
        self.sets.len() - 1
    }

    pub(crate) fn replace(&mut self, index: usize, set: RlgcSet) {
        self.sets[index] = set;
    }

    pub(crate) fn remove(&mut self, index: usize) -> RlgcSet {
        self.sets.remove(index)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a RlgcSet;
    type IntoIter = std::slice::Iter<'a, RlgcSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sets.iter()
    }
}
