// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::Dictionary;
use crate::Error;

/// A vector of logical length `length` which only stores non-zero elements.
pub struct SparseVector<D> {
    length: u64,
    elements: D,
}

impl<D: Dictionary<u64, f64>> SparseVector<D> {
    pub fn new(length: u64) -> Self {
        Self {
            length,
            elements: D::default(),
        }
    }

    pub fn len(&self) -> u64 {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Number of stored (non-zero) elements
    pub fn non_zero(&self) -> usize {
        self.elements.len()
    }

    pub fn get(&self, index: u64) -> Result<f64, Error> {
        self.check(index)?;
        Ok(self.elements.get(&index).copied().unwrap_or(0.0))
    }

    /// Setting an element to zero removes it from storage.
    pub fn set(&mut self, index: u64, value: f64) -> Result<(), Error> {
        self.check(index)?;
        if value != 0.0 {
            self.elements.insert(index, value);
        } else {
            self.elements.remove(&index);
        }
        Ok(())
    }

    pub fn remove(&mut self, index: u64) -> Result<(), Error> {
        self.check(index)?;
        self.elements.remove(&index);
        Ok(())
    }

    /// Apply `f` to every stored element.
    pub fn map(&mut self, f: impl Fn(f64) -> f64) {
        for value in self.elements.values_mut() {
            *value = f(*value);
        }
    }

    /// Fold the stored elements. Implicit zeros are not visited.
    pub fn reduce(&self, f: impl Fn(f64, f64) -> f64, initial: f64) -> f64 {
        self.elements.entries().fold(initial, |acc, (_, v)| f(acc, *v))
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.elements.entries().map(|(k, v)| (*k, *v))
    }

    fn check(&self, index: u64) -> Result<(), Error> {
        if index >= self.length {
            Err(Error::IndexOutOfBounds {
                index,
                length: self.length,
            })
        } else {
            Ok(())
        }
    }
}
