/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use clap::{value_parser, Arg, ArgAction, Command};

static AFTER_HELP: &str = "Relative file names are looked up inside the assets directory.\n\
    Absolute paths are used as given.";

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("pixmap")
        .after_help(AFTER_HELP)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Decode PPM (P3/P6) images into packed RGBA pixel buffers")
        .arg(Arg::new("in")
            .help("PPM file to decode")
            .value_parser(value_parser!(OsString))
            .required(true))
        .arg(Arg::new("assets")
            .long("assets")
            .help("Directory relative file names are resolved against")
            .default_value("assets")
            .value_parser(value_parser!(OsString)))
        .arg(Arg::new("out")
            .short('o')
            .long("out")
            .help("Write the decoded image back out as a PPM file")
            .value_parser(value_parser!(OsString)))
        .arg(Arg::new("ascii")
            .long("ascii")
            .help("Write --out as ASCII (P3) instead of binary (P6)")
            .requires("out")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("probe")
            .long("probe")
            .help("Print the image header as JSON and exit")
            .action(ArgAction::SetTrue))
        .args(add_logging_options())
        .args(add_settings())
}

fn add_logging_options() -> [Arg; 4] {
    [
        Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("Logging")
            .help("Display debug information and higher"),
        Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("Logging")
            .help("Display very verbose information"),
        Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("Logging")
            .help("Display warnings and errors"),
        Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("Logging")
            .help("Display information about the decoding options")
    ]
}

fn add_settings() -> Vec<Arg> {
    let mut args = [
        Arg::new("max-width")
            .long("max-width")
            .help_heading("Image Settings")
            .help("Maximum width of images allowed")
            .default_value("16384")
            .value_parser(value_parser!(usize)),
        Arg::new("max-height")
            .long("max-height")
            .help_heading("Image Settings")
            .help("Maximum height of images allowed")
            .default_value("16384")
            .value_parser(value_parser!(usize)),
        Arg::new("strict")
            .long("strict")
            .help_heading("Image Settings")
            .help("Reject zero header values instead of skipping them")
            .action(ArgAction::SetTrue)
    ];
    // list them in order
    args.sort_unstable_by(|x, y| x.get_id().cmp(y.get_id()));

    args.to_vec()
}

#[test]
fn verify_cli() {
    create_cmd_args().debug_assert();
}

#[test]
fn parses_file_and_settings() {
    let matches = create_cmd_args()
        .try_get_matches_from(["pixmap", "cat.ppm", "--max-width", "64", "--strict"])
        .unwrap();

    assert_eq!(
        matches.get_one::<OsString>("in"),
        Some(&OsString::from("cat.ppm"))
    );
    assert_eq!(matches.get_one::<usize>("max-width"), Some(&64));
    assert_eq!(matches.get_one::<usize>("max-height"), Some(&16384));
    assert_eq!(matches.get_one::<bool>("strict"), Some(&true));
}

#[test]
fn ascii_needs_an_output() {
    let result = create_cmd_args().try_get_matches_from(["pixmap", "cat.ppm", "--ascii"]);

    assert!(result.is_err());
}
