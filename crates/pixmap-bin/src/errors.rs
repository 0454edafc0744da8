/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Formatter};

use pixmap_ppm::{PPMDecodeErrors, PPMEncodeErrors};

/// Errors that stop the command line workflow
pub enum CliErrors {
    /// Opening, creating or writing a file failed
    IoErrors(std::io::Error),
    DecodeErrors(PPMDecodeErrors),
    EncodeErrors(PPMEncodeErrors),
    SerializeErrors(serde_json::Error)
}

impl Debug for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::IoErrors(err) => writeln!(f, "I/O error: {err}"),
            Self::DecodeErrors(err) => writeln!(f, "Could not decode image: {err:?}"),
            Self::EncodeErrors(err) => writeln!(f, "Could not encode image: {err:?}"),
            Self::SerializeErrors(err) => writeln!(f, "Could not serialize metadata: {err}")
        }
    }
}

impl From<std::io::Error> for CliErrors {
    fn from(value: std::io::Error) -> Self {
        CliErrors::IoErrors(value)
    }
}

impl From<PPMDecodeErrors> for CliErrors {
    fn from(value: PPMDecodeErrors) -> Self {
        CliErrors::DecodeErrors(value)
    }
}

impl From<PPMEncodeErrors> for CliErrors {
    fn from(value: PPMEncodeErrors) -> Self {
        CliErrors::EncodeErrors(value)
    }
}

impl From<serde_json::Error> for CliErrors {
    fn from(value: serde_json::Error) -> Self {
        CliErrors::SerializeErrors(value)
    }
}
