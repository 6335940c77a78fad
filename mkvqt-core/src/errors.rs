// MkvQt
// Copyright (c) 2026 The MkvQt Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `errors` module defines the common error type.

use std::error;
use std::fmt;
use std::io;
use std::result;

/// `Error` provides an enumeration of all possible errors reported by MkvQt.
#[derive(Debug)]
pub enum Error {
    /// A required handle or argument was absent or unusable.
    InvalidParameter(&'static str),
    /// A child element or private-data buffer the conversion requires was not
    /// present on the track.
    MissingMetadata(&'static str),
    /// The private data declared a packet or header geometry that is
    /// inconsistent with the actual buffer length.
    MalformedData(&'static str),
    /// An IO error occured while reading a buffer.
    IoError(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::InvalidParameter(msg) => {
                write!(f, "invalid parameter: {}", msg)
            }
            Error::MissingMetadata(msg) => {
                write!(f, "missing required metadata: {}", msg)
            }
            Error::MalformedData(msg) => {
                write!(f, "malformed private data: {}", msg)
            }
            Error::IoError(ref err) => err.fmt(f),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::IoError(ref err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IoError(err)
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Convenience function to create an invalid parameter error.
pub fn invalid_param_error<T>(msg: &'static str) -> Result<T> {
    Err(Error::InvalidParameter(msg))
}

/// Convenience function to create a missing metadata error.
pub fn missing_metadata_error<T>(msg: &'static str) -> Result<T> {
    Err(Error::MissingMetadata(msg))
}

/// Convenience function to create a malformed data error.
pub fn malformed_data_error<T>(msg: &'static str) -> Result<T> {
    Err(Error::MalformedData(msg))
}
