// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::loadtest::LoadCase;
use crate::logger::Level;
use crate::Error;

use clap::{App, Arg};
use serde_derive::*;

use std::path::Path;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    general: General,
    #[serde(default)]
    chart: Output,
    #[serde(default)]
    bench: Bench,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct General {
    #[serde(default = "default_logging_level")]
    logging: Level,
}

impl Default for General {
    fn default() -> Self {
        Self {
            logging: default_logging_level(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Output {
    #[serde(default = "default_output")]
    output: String,
    #[serde(default = "enabled")]
    image: bool,
    #[serde(default = "default_width")]
    width: u32,
    #[serde(default = "default_height")]
    height: u32,
    #[serde(default = "enabled")]
    terminal: bool,
    #[serde(default = "default_terminal_width")]
    terminal_width: usize,
    #[serde(default = "default_terminal_height")]
    terminal_height: usize,
}

impl Default for Output {
    fn default() -> Self {
        Self {
            output: default_output(),
            image: enabled(),
            width: default_width(),
            height: default_height(),
            terminal: enabled(),
            terminal_width: default_terminal_width(),
            terminal_height: default_terminal_height(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Bench {
    #[serde(default = "default_vector_cases")]
    vector: Vec<LoadCase>,
    #[serde(default = "default_matrix_cases")]
    matrix: Vec<LoadCase>,
}

impl Default for Bench {
    fn default() -> Self {
        Self {
            vector: default_vector_cases(),
            matrix: default_matrix_cases(),
        }
    }
}

fn default_logging_level() -> Level {
    Level::Info
}

fn default_output() -> String {
    "performance_graphs.svg".to_string()
}

fn enabled() -> bool {
    true
}

fn default_width() -> u32 {
    1280
}

fn default_height() -> u32 {
    720
}

fn default_terminal_width() -> usize {
    80
}

fn default_terminal_height() -> usize {
    20
}

fn default_vector_cases() -> Vec<LoadCase> {
    vec![
        LoadCase::new(1_000_000_000, 100_000),
        LoadCase::new(10_000_000, 100_000),
        LoadCase::new(10_000_000, 10_000),
    ]
}

fn default_matrix_cases() -> Vec<LoadCase> {
    vec![
        LoadCase::new(10_000_000, 100_000),
        LoadCase::new(1_000_000, 10_000),
        LoadCase::new(100_000, 1_000),
    ]
}

impl Config {
    /// parse command line options and return `Config`
    pub fn new(name: &str, about: &str) -> Config {
        let matches = App::new(name)
            .version(VERSION)
            .about(about)
            .arg(
                Arg::with_name("config")
                    .long("config")
                    .value_name("FILE")
                    .help("TOML config file")
                    .takes_value(true),
            )
            .arg(
                Arg::with_name("verbose")
                    .short("v")
                    .long("verbose")
                    .help("Increase verbosity by one level. Can be used more than once")
                    .multiple(true),
            )
            .get_matches();

        let mut config = if let Some(file) = matches.value_of("config") {
            match Config::load_from_file(file) {
                Ok(config) => config,
                Err(e) => {
                    println!("Failed to load config: {}", file);
                    println!("{}", e);
                    std::process::exit(1);
                }
            }
        } else {
            Default::default()
        };

        match matches.occurrences_of("verbose") {
            0 => {}
            1 => config.general.logging = Level::Debug,
            _ => config.general.logging = Level::Trace,
        }

        config
    }

    pub fn load_from_file(filename: impl AsRef<Path>) -> Result<Config, Error> {
        let filename = filename.as_ref();
        let content = std::fs::read_to_string(filename).map_err(|e| Error::io(filename, e))?;
        Config::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Config, Error> {
        let config: Config = toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), Error> {
        if self.chart.width == 0 || self.chart.height == 0 {
            return Err(Error::Config("chart dimensions must be non-zero".to_string()));
        }
        for case in self.bench.vector.iter().chain(self.bench.matrix.iter()) {
            if case.size() == 0 {
                return Err(Error::Config("load case size must be non-zero".to_string()));
            }
        }
        Ok(())
    }

    pub fn logging(&self) -> Level {
        self.general.logging
    }

    /// where to save the chart image, if it should be saved at all
    pub fn output(&self) -> Option<&str> {
        if self.chart.image {
            Some(&self.chart.output)
        } else {
            None
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.chart.width, self.chart.height)
    }

    /// text plot dimensions, if the text plot is enabled
    pub fn terminal(&self) -> Option<(usize, usize)> {
        if self.chart.terminal {
            Some((self.chart.terminal_width, self.chart.terminal_height))
        } else {
            None
        }
    }

    pub fn vector_cases(&self) -> &[LoadCase] {
        &self.bench.vector
    }

    pub fn matrix_cases(&self) -> &[LoadCase] {
        &self.bench.matrix
    }

    pub fn print(&self) {
        info!("-----");
        info!("Config: Logging: {}", self.logging());
        info!(
            "Config: Image: {} Size: {}x{}",
            self.output().unwrap_or("disabled"),
            self.chart.width,
            self.chart.height,
        );
        match self.terminal() {
            Some((w, h)) => info!("Config: Terminal: {}x{}", w, h),
            None => info!("Config: Terminal: disabled"),
        }
        debug!(
            "Config: Load cases: Vector: {} Matrix: {}",
            self.bench.vector.len(),
            self.bench.matrix.len(),
        );
        info!("-----");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.logging(), Level::Info);
        assert_eq!(config.output(), Some("performance_graphs.svg"));
        assert_eq!(config.size(), (1280, 720));
        assert_eq!(config.terminal(), Some((80, 20)));
        assert_eq!(config.vector_cases().len(), 3);
        assert_eq!(config.matrix_cases()[2], LoadCase::new(100_000, 1_000));
    }

    #[test]
    fn sections_override_defaults() {
        let config = Config::parse(
            r#"
            [general]
            logging = "debug"

            [chart]
            output = "out.svg"
            width = 800
            terminal = false

            [bench]
            vector = [{ size = 1000, elements = 10 }]
            "#,
        )
        .unwrap();

        assert_eq!(config.logging(), Level::Debug);
        assert_eq!(config.output(), Some("out.svg"));
        assert_eq!(config.size(), (800, 720));
        assert_eq!(config.terminal(), None);
        assert_eq!(config.vector_cases(), &[LoadCase::new(1000, 10)]);
        assert_eq!(config.matrix_cases().len(), 3);
    }

    #[test]
    fn image_can_be_disabled() {
        let config = Config::parse("[chart]\nimage = false\n").unwrap();
        assert_eq!(config.output(), None);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(matches!(
            Config::parse("[chart]\ncandidates = [\"a.txt\"]\n"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn zero_sized_case_is_rejected() {
        assert!(matches!(
            Config::parse("[bench]\nmatrix = [{ size = 0, elements = 10 }]\n"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::load_from_file(dir.path().join("perfgraph.toml")),
            Err(Error::Io { .. })
        ));
    }
}
