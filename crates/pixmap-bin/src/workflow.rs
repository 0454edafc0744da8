/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use clap::ArgMatches;
use log::{debug, info};
use pixmap_ppm::{PPMEncoder, PixelBuffer, PpmFormat};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::CliErrors;
use crate::file_io::{resolve_asset_path, PpmFile};
use crate::probe_files::probe_input_file;

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), CliErrors> {
    let Some(in_file) = args.get_one::<OsString>("in") else {
        return Ok(());
    };
    let path = resolve_asset_path(&cmd_opts.assets, in_file);
    let file = PpmFile::new(path, cmd_opts.decoder_options());

    if args.get_one::<bool>("probe").copied().unwrap_or(false) {
        return probe_input_file(&file);
    }

    let start = Instant::now();

    let buffer = file.open()?.decode()?;

    info!(
        "Decoded {:?} in {:?}",
        file.path(),
        start.elapsed()
    );
    present(&buffer);

    if let Some(out) = args.get_one::<OsString>("out") {
        write_output(&buffer, Path::new(out), cmd_opts.out_format)?;
    }
    Ok(())
}

/// Report the decoded buffer, drawing stays with whoever embeds the decoder
fn present(buffer: &PixelBuffer) {
    let (width, height) = buffer.dimensions();

    info!("Image dimensions: {}x{}", width, height);
    info!("Max value: {}", buffer.max_value());
    info!("Pixel count: {}", buffer.pixels().len());
}

fn write_output(buffer: &PixelBuffer, out: &Path, format: PpmFormat) -> Result<(), CliErrors> {
    let start = Instant::now();

    let mut writer = BufWriter::new(File::create(out)?);

    let written = PPMEncoder::new(buffer)
        .set_format(format)
        .encode(&mut writer)?;

    writer.flush()?;

    debug!("Wrote {} bytes as {} to {:?}", written, format, out);
    info!("Encoded to {:?} in {:?}", out, start.elapsed());

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::global_options::parse_options;
    use crate::errors::CliErrors;
    use crate::workflow::create_and_exec_workflow_from_cmd;

    fn run(argv: &[&str]) -> Result<(), CliErrors> {
        let matches = create_cmd_args().try_get_matches_from(argv).unwrap();
        let options = parse_options(&matches);

        create_and_exec_workflow_from_cmd(&matches, &options)
    }

    #[test]
    fn decode_and_rewrite_as_ascii() {
        let dir = std::env::temp_dir().join(format!("pixmap-bin-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("in.ppm"), b"P6\n2 1\n255\n\x01\x02\x03\x04\x05\x06").unwrap();

        let out = dir.join("out.ppm");
        let assets = dir.to_str().unwrap();
        let out_str = out.to_str().unwrap();

        run(&["pixmap", "in.ppm", "--assets", assets, "--out", out_str, "--ascii"]).unwrap();

        let written = fs::read(&out).unwrap();
        fs::remove_dir_all(&dir).unwrap();

        assert_eq!(written, b"P3\n2 1\n255\n1 2 3 4 5 6\n");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = run(&["pixmap", "does-not-exist.ppm", "--assets", "no-such-dir"]);

        assert!(matches!(result, Err(CliErrors::IoErrors(_))));
    }

    #[test]
    fn limits_reach_the_decoder() {
        let dir = std::env::temp_dir().join(format!("pixmap-bin-limits-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("wide.ppm"), b"P6\n9 1\n255\n").unwrap();

        let result = run(&["pixmap", "wide.ppm", "--assets", dir.to_str().unwrap(), "--max-width", "8"]);
        fs::remove_dir_all(&dir).unwrap();

        assert!(matches!(
            result,
            Err(CliErrors::DecodeErrors(pixmap_ppm::PPMDecodeErrors::LargeDimensions(8, 9)))
        ));
    }
}
