/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::debug;
use pixmap_core::options::DecoderOptions;
use pixmap_ppm::PPMDecoder;

use crate::errors::CliErrors;

/// Resolve a file name against the assets directory.
///
/// Absolute paths are returned unchanged.
pub fn resolve_asset_path(assets: &OsStr, file: &OsStr) -> PathBuf {
    let file = Path::new(file);

    if file.is_absolute() {
        return file.to_path_buf();
    }
    Path::new(assets).join(file)
}

pub struct PpmFile {
    file_path: PathBuf,
    options:   DecoderOptions
}

impl PpmFile {
    pub fn new(file_path: PathBuf, options: DecoderOptions) -> PpmFile {
        PpmFile { file_path, options }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Open the file and wrap it in a decoder
    pub fn open(&self) -> Result<PPMDecoder<BufReader<File>>, CliErrors> {
        debug!("Opening {:?}", self.file_path);

        let fd = BufReader::new(File::open(&self.file_path)?);

        Ok(PPMDecoder::new_with_options(fd, self.options))
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;
    use std::path::PathBuf;

    use crate::file_io::resolve_asset_path;

    #[test]
    fn relative_names_go_into_assets() {
        let path = resolve_asset_path(OsStr::new("assets"), OsStr::new("cat.ppm"));

        assert_eq!(path, PathBuf::from("assets").join("cat.ppm"));
    }

    #[test]
    fn absolute_names_are_kept() {
        let absolute = std::env::temp_dir().join("cat.ppm");
        let path = resolve_asset_path(OsStr::new("assets"), absolute.as_os_str());

        assert_eq!(path, absolute);
    }
}
