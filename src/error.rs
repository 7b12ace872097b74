// SPDX-License-Identifier: MPL-2.0
use crate::ui::notifications::{Placement, ToastId};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    /// A toast was requested at a placement outside the six known zones.
    InvalidPlacement(String),
    /// A caller-supplied id is already held by a live toast.
    DuplicateId(ToastId),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::InvalidPlacement(value) => {
                let valid: Vec<&str> = Placement::ALL.iter().map(|p| p.as_str()).collect();
                write!(
                    f,
                    "Invalid toast placement \"{}\". Please provide a valid placement from the following options: {}.",
                    value,
                    valid.join(", ")
                )
            }
            Error::DuplicateId(id) => write!(
                f,
                "Duplicate toast id \"{}\". A toast with this id is already displayed.",
                id
            ),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
