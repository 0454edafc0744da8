/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level};
use pixmap_core::options::DecoderOptions;
use pixmap_ppm::PpmFormat;

#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub assets:      OsString,
    pub max_width:   usize,
    pub max_height:  usize,
    pub strict_mode: bool,
    pub out_format:  PpmFormat
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        let defaults = DecoderOptions::default();

        CmdOptions {
            assets:      OsString::from("assets"),
            max_width:   defaults.max_width(),
            max_height:  defaults.max_height(),
            strict_mode: false,
            out_format:  PpmFormat::Binary
        }
    }

    pub fn decoder_options(&self) -> DecoderOptions {
        DecoderOptions::default()
            .set_max_width(self.max_width)
            .set_max_height(self.max_height)
            .set_strict_mode(self.strict_mode)
    }
}

fn flag(options: &ArgMatches, id: &str) -> bool {
    options.get_one::<bool>(id).copied().unwrap_or(false)
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Some(assets) = options.get_one::<OsString>("assets") {
        cmd_options.assets = assets.clone();
    }
    if let Some(width) = options.get_one::<usize>("max-width") {
        cmd_options.max_width = *width;
    }
    if let Some(height) = options.get_one::<usize>("max-height") {
        cmd_options.max_height = *height;
    }

    if options.value_source("strict") == Some(ValueSource::CommandLine) {
        info!("Enabling strict header parsing");
        cmd_options.strict_mode = flag(options, "strict");
    }
    if flag(options, "ascii") {
        info!("Output will be written as P3");
        cmd_options.out_format = PpmFormat::Ascii;
    }
    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if flag(options, "debug") {
        log_level = Level::Debug;
    } else if flag(options, "trace") {
        log_level = Level::Trace;
    } else if flag(options, "warn") {
        log_level = Level::Warn
    } else if flag(options, "info") {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
