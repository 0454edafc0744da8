/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use pixmap_ppm::PpmHeader;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

pub struct Metadata<'a> {
    file:      &'a Path,
    file_size: u64,
    header:    PpmHeader
}

impl<'a> Metadata<'a> {
    pub fn new(file: &'a Path, file_size: u64, header: PpmHeader) -> Metadata<'a> {
        Metadata {
            file,
            file_size,
            header
        }
    }
}

impl<'a> Serialize for Metadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Metadata", 6)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("file_size", &self.file_size)?;
        state.serialize_field("format", &self.header.format.to_string())?;
        state.serialize_field("width", &self.header.width)?;
        state.serialize_field("height", &self.header.height)?;
        state.serialize_field("max_value", &self.header.max_value)?;

        state.end()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pixmap_ppm::{PpmFormat, PpmHeader};

    use crate::serde::Metadata;

    #[test]
    fn metadata_to_json() {
        let header = PpmHeader {
            format:    PpmFormat::Binary,
            width:     3,
            height:    2,
            max_value: 255
        };
        let metadata = Metadata::new(Path::new("cat.ppm"), 29, header);
        let json = serde_json::to_value(&metadata).unwrap();

        assert_eq!(json["file"], "cat.ppm");
        assert_eq!(json["file_size"], 29);
        assert_eq!(json["format"], "P6");
        assert_eq!(json["width"], 3);
        assert_eq!(json["height"], 2);
        assert_eq!(json["max_value"], 255);
    }
}
