// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Plot benchmark result files, and produce them from sparse container load
//! tests.

#[macro_use]
extern crate log;

pub mod config;
pub mod loadtest;
pub mod logger;
pub mod plotter;
pub mod render;
pub mod sparse;

mod chart;
mod error;
mod series;

pub use crate::chart::{Bounds, Chart};
pub use crate::config::Config;
pub use crate::error::Error;
pub use crate::logger::Logger;
pub use crate::series::Series;
