// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[macro_use]
extern crate log;

use perfgraph::config::VERSION;
use perfgraph::*;

use std::path::Path;

fn main() {
    let config = Config::new(
        "perfgraph-bench",
        "Load test sparse containers and write result files",
    );

    Logger::new()
        .label("perfgraph-bench")
        .level(config.logging())
        .init()
        .expect("failed to initialize logger");

    info!("perfgraph-bench {} initializing...", VERSION);
    config.print();

    let dir = Path::new(".");
    match loadtest::run(dir, config.vector_cases(), config.matrix_cases()) {
        Ok(written) => {
            for path in written {
                info!("results: {}", path.display());
            }
        }
        Err(e) => {
            perfgraph::fatal!("{}", e);
        }
    }
}
