// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[macro_use]
extern crate log;

use perfgraph::config::VERSION;
use perfgraph::render::{svg, terminal};
use perfgraph::*;

use std::path::Path;

fn main() {
    let config = Config::new("perfgraph", "Plot sparse container benchmark results");

    Logger::new()
        .label("perfgraph")
        .level(config.logging())
        .init()
        .expect("failed to initialize logger");

    info!("perfgraph {} initializing...", VERSION);
    config.print();

    if let Err(e) = run(&config) {
        perfgraph::fatal!("{}", e);
    }
}

fn run(config: &Config) -> Result<(), Error> {
    let dir = std::env::current_dir().map_err(|e| Error::Io {
        path: Path::new(".").to_owned(),
        source: e,
    })?;

    let chart = plotter::collect(&dir)?;

    if let Some(output) = config.output() {
        svg::save(&chart, output, config.size())?;
    }

    if let Some((width, height)) = config.terminal() {
        print!("{}", terminal::render(&chart, width, height));
    }

    Ok(())
}
