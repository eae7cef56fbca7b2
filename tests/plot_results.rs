// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use perfgraph::loadtest::{self, LoadCase};
use perfgraph::render::{svg, terminal};
use perfgraph::{plotter, Error};

use std::fs;

#[test]
fn empty_directory_renders_empty_chart() {
    let dir = tempfile::tempdir().unwrap();
    let chart = plotter::collect(dir.path()).unwrap();
    assert!(chart.series().is_empty());

    let text = terminal::render(&chart, 60, 12);
    assert!(text.starts_with(&format!("{:^71}", plotter::CAPTION)));
    assert!(text.contains("X: Number of Elements"));
    assert!(text.contains("Y: Time"));

    let image = svg::to_string(&chart, (800, 600)).unwrap();
    assert!(image.contains(plotter::CAPTION));
}

#[test]
fn every_candidate_becomes_a_labeled_series() {
    let dir = tempfile::tempdir().unwrap();
    for (i, name) in plotter::CANDIDATES.iter().enumerate() {
        let scale = (i + 1) as f64;
        let content = format!(
            "{} 1000\n{} 10000\n{} 100000\n",
            0.001 * scale,
            0.01 * scale,
            0.1 * scale
        );
        fs::write(dir.path().join(name), content).unwrap();
    }

    let chart = plotter::collect(dir.path()).unwrap();
    assert_eq!(chart.series().len(), 4);
    for (series, name) in chart.series().iter().zip(plotter::CANDIDATES.iter()) {
        assert_eq!(series.label(), *name);
        assert_eq!(series.elements(), &[1000.0, 10000.0, 100000.0]);
    }

    let bounds = chart.bounds();
    assert_eq!(bounds.x, 1000.0..100000.0);

    let text = terminal::render(&chart, 60, 12);
    for name in plotter::CANDIDATES.iter() {
        assert!(text.contains(name));
    }

    let output = dir.path().join("performance_graphs.svg");
    svg::save(&chart, &output, (800, 600)).unwrap();
    let image = fs::read_to_string(&output).unwrap();
    for name in plotter::CANDIDATES.iter() {
        assert!(image.contains(name));
    }
}

#[test]
fn malformed_file_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(plotter::CANDIDATES[3]), "0.5 100\nabc 200\n").unwrap();

    let err = plotter::collect(dir.path()).unwrap_err();
    assert!(matches!(err, Error::Malformed { line: 2, .. }));
    assert!(err.to_string().contains("invalid number"));
}

#[test]
fn benchmark_output_feeds_the_plotter() {
    let dir = tempfile::tempdir().unwrap();
    let vector = [LoadCase::new(1_000_000, 1_000), LoadCase::new(1_000, 100)];
    let matrix = [LoadCase::new(1_000, 500)];

    let written = loadtest::run(dir.path(), &vector, &matrix).unwrap();
    assert_eq!(written.len(), 4);

    let chart = plotter::collect(dir.path()).unwrap();
    let lengths: Vec<usize> = chart.series().iter().map(|s| s.len()).collect();
    assert_eq!(lengths, vec![1, 1, 2, 2]);
}
