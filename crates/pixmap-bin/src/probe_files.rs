/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::info;

use crate::errors::CliErrors;
use crate::file_io::PpmFile;
use crate::serde::Metadata;

/// Read only the header of `file` and print it to standard output as JSON
pub fn probe_input_file(file: &PpmFile) -> Result<(), CliErrors> {
    let file_size = std::fs::metadata(file.path())?.len();

    let mut decoder = file.open()?;
    decoder.decode_headers()?;

    if let Some(header) = decoder.header() {
        info!("Probed {:?}", file.path());

        let metadata = Metadata::new(file.path(), file_size, header);

        println!("{}", serde_json::to_string_pretty(&metadata)?);
    }
    Ok(())
}
