// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::Dictionary;
use crate::Error;

/// Matrix coordinate. Ordered row-major.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexPair {
    pub row: u64,
    pub column: u64,
}

impl IndexPair {
    pub fn new(row: u64, column: u64) -> Self {
        Self { row, column }
    }
}

/// A `rows` by `columns` matrix which only stores non-zero elements.
pub struct SparseMatrix<D> {
    rows: u64,
    columns: u64,
    elements: D,
}

impl<D: Dictionary<IndexPair, f64>> SparseMatrix<D> {
    pub fn new(rows: u64, columns: u64) -> Self {
        Self {
            rows,
            columns,
            elements: D::default(),
        }
    }

    pub fn rows(&self) -> u64 {
        self.rows
    }

    pub fn columns(&self) -> u64 {
        self.columns
    }

    pub fn non_zero(&self) -> usize {
        self.elements.len()
    }

    pub fn get(&self, row: u64, column: u64) -> Result<f64, Error> {
        let key = self.key(row, column)?;
        Ok(self.elements.get(&key).copied().unwrap_or(0.0))
    }

    pub fn set(&mut self, row: u64, column: u64, value: f64) -> Result<(), Error> {
        let key = self.key(row, column)?;
        if value != 0.0 {
            self.elements.insert(key, value);
        } else {
            self.elements.remove(&key);
        }
        Ok(())
    }

    pub fn remove(&mut self, row: u64, column: u64) -> Result<(), Error> {
        let key = self.key(row, column)?;
        self.elements.remove(&key);
        Ok(())
    }

    pub fn map(&mut self, f: impl Fn(f64) -> f64) {
        for value in self.elements.values_mut() {
            *value = f(*value);
        }
    }

    pub fn reduce(&self, f: impl Fn(f64, f64) -> f64, initial: f64) -> f64 {
        self.elements.entries().fold(initial, |acc, (_, v)| f(acc, *v))
    }

    pub fn iter(&self) -> impl Iterator<Item = (IndexPair, f64)> + '_ {
        self.elements.entries().map(|(k, v)| (*k, *v))
    }

    fn key(&self, row: u64, column: u64) -> Result<IndexPair, Error> {
        if row >= self.rows {
            return Err(Error::IndexOutOfBounds {
                index: row,
                length: self.rows,
            });
        }
        if column >= self.columns {
            return Err(Error::IndexOutOfBounds {
                index: column,
                length: self.columns,
            });
        }
        Ok(IndexPair::new(row, column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::{BTreeMap, HashMap};

    fn exercise<D: Dictionary<IndexPair, f64>>() {
        let mut matrix = SparseMatrix::<D>::new(5, 4);
        matrix.set(0, 0, 1.0).unwrap();
        matrix.set(1, 2, 2.5).unwrap();
        matrix.set(4, 3, -3.0).unwrap();

        assert_eq!(matrix.get(1, 2).unwrap(), 2.5);
        assert_eq!(matrix.get(2, 1).unwrap(), 0.0);
        assert_eq!(matrix.non_zero(), 3);

        matrix.map(|x| x * -1.0);
        assert_eq!(matrix.get(4, 3).unwrap(), 3.0);
        assert_eq!(matrix.reduce(|acc, x| acc + x, 0.0), -0.5);

        matrix.set(0, 0, 0.0).unwrap();
        matrix.remove(1, 2).unwrap();
        assert_eq!(
            matrix.iter().collect::<Vec<_>>(),
            vec![(IndexPair::new(4, 3), 3.0)]
        );

        assert!(matrix.get(5, 0).is_err());
        match matrix.set(0, 4, 1.0) {
            Err(Error::IndexOutOfBounds { index, length }) => {
                assert_eq!((index, length), (4, 4));
            }
            other => panic!("expected out of bounds, got {:?}", other),
        }
    }

    #[test]
    fn hash_backed() {
        exercise::<HashMap<IndexPair, f64>>();
    }

    #[test]
    fn btree_backed() {
        exercise::<BTreeMap<IndexPair, f64>>();
    }

    #[test]
    fn index_pairs_order_by_row_then_column() {
        let mut pairs = vec![
            IndexPair::new(1, 0),
            IndexPair::new(0, 9),
            IndexPair::new(1, 0),
            IndexPair::new(0, 1),
        ];
        pairs.sort();
        pairs.dedup();
        assert_eq!(
            pairs,
            vec![IndexPair::new(0, 1), IndexPair::new(0, 9), IndexPair::new(1, 0)]
        );
    }
}
