// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Error, Series};

use std::ops::Range;
use std::path::Path;

/// Accumulates series until the chart is rendered. Setters chain the way
/// plot configuration does elsewhere in the crate.
#[derive(Clone, Debug, Default)]
pub struct Chart {
    series: Vec<Series>,
    x_desc: Option<String>,
    y_desc: Option<String>,
    caption: Option<String>,
    legend: bool,
}

/// Data ranges covering every finite point on a chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Bounds {
    pub x: Range<f64>,
    pub y: Range<f64>,
}

impl Bounds {
    /// Whether both axis spans fit in an `f64`. Samples near `±f64::MAX` can
    /// give finite endpoints whose difference still overflows.
    pub fn has_finite_span(&self) -> bool {
        (self.x.end - self.x.start).is_finite() && (self.y.end - self.y.start).is_finite()
    }

    /// Position of `(x, y)` as a fraction of each axis, computed on halved
    /// values so the span never overflows.
    pub fn fraction(&self, x: f64, y: f64) -> (f64, f64) {
        (scale(x, &self.x), scale(y, &self.y))
    }
}

fn scale(value: f64, range: &Range<f64>) -> f64 {
    (value * 0.5 - range.start * 0.5) / (range.end * 0.5 - range.start * 0.5)
}

impl Chart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plot(&mut self, series: Series) -> &mut Self {
        debug!("plotting {} ({} points)", series.label(), series.len());
        self.series.push(series);
        self
    }

    /// Parse `path` and plot it, labeled with the path as given.
    pub fn plot_file(&mut self, path: impl AsRef<Path>) -> Result<&mut Self, Error> {
        let path = path.as_ref();
        let series = Series::load(path, path.display().to_string())?;
        Ok(self.plot(series))
    }

    pub fn x_desc(&mut self, x_desc: impl AsRef<str>) -> &mut Self {
        self.x_desc = Some(x_desc.as_ref().to_owned());
        self
    }

    pub fn y_desc(&mut self, y_desc: impl AsRef<str>) -> &mut Self {
        self.y_desc = Some(y_desc.as_ref().to_owned());
        self
    }

    pub fn caption(&mut self, caption: impl AsRef<str>) -> &mut Self {
        self.caption = Some(caption.as_ref().to_owned());
        self
    }

    pub fn legend(&mut self) -> &mut Self {
        self.legend = true;
        self
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn x_label(&self) -> Option<&str> {
        self.x_desc.as_deref()
    }

    pub fn y_label(&self) -> Option<&str> {
        self.y_desc.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub fn has_legend(&self) -> bool {
        self.legend
    }

    pub fn bounds(&self) -> Bounds {
        let mut x = None;
        let mut y = None;

        for (px, py) in self.series.iter().flat_map(|s| s.points()) {
            if px.is_finite() && py.is_finite() {
                x = Some(extend(x, px));
                y = Some(extend(y, py));
            }
        }

        Bounds {
            x: widen(x),
            y: widen(y),
        }
    }
}

fn extend(range: Option<Range<f64>>, value: f64) -> Range<f64> {
    match range {
        Some(r) => r.start.min(value)..r.end.max(value),
        None => value..value,
    }
}

// an empty or single-valued range still needs some width to be drawn
fn widen(range: Option<Range<f64>>) -> Range<f64> {
    match range {
        None => 0.0..1.0,
        Some(r) if r.start < r.end => r,
        Some(r) => {
            let pad = if r.start == 0.0 { 1.0 } else { r.start.abs() * 0.5 };
            (r.start - pad).max(f64::MIN)..(r.end + pad).min(f64::MAX)
        }
    }
}
