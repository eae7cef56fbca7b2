// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sparse containers over interchangeable key-value storage.

mod matrix;
mod storage;
mod vector;

pub use matrix::{IndexPair, SparseMatrix};
pub use storage::{Backend, Dictionary};
pub use vector::SparseVector;
