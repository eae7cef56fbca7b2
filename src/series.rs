// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Error;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One plotted line: element counts (x) against elapsed time (y), in the
/// order the samples were read.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    label: String,
    times: Vec<f64>,
    elements: Vec<f64>,
}

impl Series {
    pub fn new(label: impl AsRef<str>) -> Self {
        Self {
            label: label.as_ref().to_owned(),
            times: Vec::new(),
            elements: Vec::new(),
        }
    }

    /// Read a result file. The file is closed before this returns, whether or
    /// not parsing succeeded.
    pub fn load(path: impl AsRef<Path>, label: impl AsRef<str>) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        Self::parse(path, label, BufReader::new(file))
    }

    /// Parse `<time> <elements>` lines from `reader`. `source` is only used
    /// to describe where a malformed line came from.
    pub fn parse<R: BufRead>(
        source: &Path,
        label: impl AsRef<str>,
        mut reader: R,
    ) -> Result<Self, Error> {
        let mut series = Self::new(label);

        let mut buf = String::new();
        let mut line = 0;
        loop {
            buf.clear();
            if reader
                .read_line(&mut buf)
                .map_err(|e| Error::io(source, e))?
                == 0
            {
                break;
            }
            line += 1;

            let (time, elements) = parse_line(&buf).map_err(|reason| Error::Malformed {
                path: source.to_owned(),
                line,
                reason,
            })?;
            series.push(time, elements);
        }

        Ok(series)
    }

    pub fn push(&mut self, time: f64, elements: f64) {
        self.times.push(time);
        self.elements.push(elements);
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn elements(&self) -> &[f64] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// `(elements, time)` pairs in file order
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.elements.iter().copied().zip(self.times.iter().copied())
    }

    /// Runs of consecutive finite points. A NaN or infinite sample ends the
    /// current run and leaves a gap in the drawn line.
    pub fn segments(&self) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for (x, y) in self.points() {
            if x.is_finite() && y.is_finite() {
                current.push((x, y));
            } else if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }
}

fn parse_line(line: &str) -> Result<(f64, f64), String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(format!(
            "expected 2 whitespace separated values, found {}",
            tokens.len()
        ));
    }

    Ok((parse_value(tokens[0])?, parse_value(tokens[1])?))
}

fn parse_value(token: &str) -> Result<f64, String> {
    token
        .parse()
        .map_err(|_| format!("invalid number: {:?}", token))
}
