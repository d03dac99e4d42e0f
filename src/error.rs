#![warn(missing_docs)]
//! Motheye specific error structures
use std::{error::Error, fmt::Display};

/// Motheye specific Result type
pub type MeResult<T> = std::result::Result<T, MothEyeError>;

/// Errors that can be returned by the various motheye functions.
#[derive(Debug, PartialEq, Eq)]
pub enum MothEyeError {
    /// a geometry document lacks a strictly required field or is not valid JSON
    MalformedDocument(String),
    /// errors while reading or writing files
    Io(String),
    /// errors in console io and argument handling
    Console(String),
    /// errors while handling (solar) spectra
    Spectrum(String),
    /// errors while generating probability distributions
    Distribution(String),
    /// errors while evaluating refractive index or effective medium models
    RefractiveIndex(String),
    /// errors while creating plots
    Plot(String),
    /// errors not falling in one of the categories above
    Other(String),
}

impl Display for MothEyeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedDocument(m) => {
                write!(f, "MalformedDocument:{m}")
            }
            Self::Io(m) => {
                write!(f, "Io:{m}")
            }
            Self::Console(m) => {
                write!(f, "Console:{m}")
            }
            Self::Spectrum(m) => {
                write!(f, "Spectrum:{m}")
            }
            Self::Distribution(m) => {
                write!(f, "Distribution:{m}")
            }
            Self::RefractiveIndex(m) => {
                write!(f, "RefractiveIndex:{m}")
            }
            Self::Plot(m) => {
                write!(f, "Plot:{m}")
            }
            Self::Other(m) => write!(f, "Motheye Error:Other:{m}"),
        }
    }
}
impl Error for MothEyeError {}

impl std::convert::From<String> for MothEyeError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}
