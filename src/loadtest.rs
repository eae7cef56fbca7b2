// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Timed bulk insertion into the sparse containers, producing the result
//! files the plotter reads.

use crate::sparse::{Backend, Dictionary, IndexPair, SparseMatrix, SparseVector};
use crate::Error;

use serde_derive::*;

use std::collections::{BTreeMap, HashMap};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Multiplier used to scatter insertion indices.
const STRIDE: u64 = 31;

/// One benchmark point: `elements` insertions into a container of `size`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoadCase {
    size: u64,
    elements: u64,
}

impl LoadCase {
    pub fn new(size: u64, elements: u64) -> Self {
        Self { size, elements }
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn elements(&self) -> u64 {
        self.elements
    }

    fn check(&self) -> Result<(), Error> {
        if self.size == 0 {
            Err(Error::Config(format!(
                "load case with {} elements has zero size",
                self.elements
            )))
        } else {
            Ok(())
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Kind {
    Vector,
    Matrix,
}

impl Kind {
    pub fn name(self) -> &'static str {
        match self {
            Kind::Vector => "vector",
            Kind::Matrix => "matrix",
        }
    }
}

/// Time filling a vector of `case.size` with `case.elements` values.
pub fn load_vector<D: Dictionary<u64, f64>>(case: LoadCase) -> Result<Duration, Error> {
    case.check()?;
    let mut vector = SparseVector::<D>::new(case.size);

    let start = Instant::now();
    for i in 0..case.elements {
        vector.set(i.wrapping_mul(STRIDE) % case.size, i as f64)?;
    }
    let elapsed = start.elapsed();

    trace!("vector stored {} non-zero elements", vector.non_zero());
    Ok(elapsed)
}

/// Time filling a square matrix of side `case.size` with `case.elements`
/// values.
pub fn load_matrix<D: Dictionary<IndexPair, f64>>(case: LoadCase) -> Result<Duration, Error> {
    case.check()?;
    let mut matrix = SparseMatrix::<D>::new(case.size, case.size);

    let start = Instant::now();
    for i in 0..case.elements {
        matrix.set(i % case.size, i.wrapping_mul(STRIDE) % case.size, i as f64)?;
    }
    let elapsed = start.elapsed();

    trace!("matrix stored {} non-zero elements", matrix.non_zero());
    Ok(elapsed)
}

/// Timings for one container kind on one backend, in case order.
#[derive(Clone, Debug)]
pub struct Results {
    kind: Kind,
    backend: Backend,
    samples: Vec<(Duration, u64)>,
}

impl Results {
    pub fn run(kind: Kind, backend: Backend, cases: &[LoadCase]) -> Result<Self, Error> {
        let mut samples = Vec::with_capacity(cases.len());
        for case in cases {
            let elapsed = match (kind, backend) {
                (Kind::Vector, Backend::Hash) => load_vector::<HashMap<u64, f64>>(*case)?,
                (Kind::Vector, Backend::BTree) => load_vector::<BTreeMap<u64, f64>>(*case)?,
                (Kind::Matrix, Backend::Hash) => load_matrix::<HashMap<IndexPair, f64>>(*case)?,
                (Kind::Matrix, Backend::BTree) => load_matrix::<BTreeMap<IndexPair, f64>>(*case)?,
            };
            info!(
                "{} {} size: {} elements: {} time: {:.6} s",
                kind.name(),
                backend,
                case.size,
                case.elements,
                elapsed.as_secs_f64()
            );
            samples.push((elapsed, case.elements));
        }
        Ok(Self {
            kind,
            backend,
            samples,
        })
    }

    /// Name of the file these results are written to.
    pub fn filename(&self) -> String {
        format!(
            "result_time_{}_{}.txt",
            self.kind.name(),
            self.backend.suffix()
        )
    }

    pub fn samples(&self) -> &[(Duration, u64)] {
        &self.samples
    }

    /// One `<seconds> <elements>` line per sample.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (elapsed, elements) in &self.samples {
            let _ = writeln!(out, "{} {}", elapsed.as_secs_f64(), elements);
        }
        out
    }

    pub fn save(&self, dir: &Path) -> Result<PathBuf, Error> {
        let path = dir.join(self.filename());
        std::fs::write(&path, self.render()).map_err(|e| Error::io(&path, e))?;
        debug!("wrote {}", path.display());
        Ok(path)
    }
}

/// Run every case for both container kinds on both backends and write the
/// result files into `dir`.
pub fn run(dir: &Path, vector: &[LoadCase], matrix: &[LoadCase]) -> Result<Vec<PathBuf>, Error> {
    let mut written = Vec::new();
    for (kind, cases) in &[(Kind::Matrix, matrix), (Kind::Vector, vector)] {
        for backend in Backend::ALL.iter() {
            let results = Results::run(*kind, *backend, cases)?;
            written.push(results.save(dir)?);
        }
    }
    Ok(written)
}
