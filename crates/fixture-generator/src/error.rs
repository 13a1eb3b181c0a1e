//! Fixture generator errors
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE.md` file in the Veracruz root directory for
//! information on licensing and copyright.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while rendering or writing an address fixture.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The address-kind selector is not one of `dec`, `hex` or `oct`.
    #[error("FixtureError: unrecognised address kind {0:?}, expected one of `dec`, `hex` or `oct`.")]
    InvalidAddressKind(String),
    /// The last address of a fixture with this many lines does not fit in a
    /// `u64`.
    #[error("FixtureError: line count {0} overflows the address range.")]
    LineCountOverflow(u64),
    /// An address field could not be parsed back in the expected base.
    #[error("FixtureError: invalid address field {0:?}.")]
    InvalidAddressField(String),
    /// The output file could not be created, written or flushed.
    #[error("FixtureError: IO error on {path:?}: {source}.")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("FixtureError: IOError: {0:?}.")]
    IOError(#[from] std::io::Error),
}

impl FixtureError {
    /// Returns `true` iff the error originates from the filesystem rather than
    /// from an invalid argument.
    pub fn is_io(&self) -> bool {
        matches!(self, FixtureError::Io { .. } | FixtureError::IOError(_))
    }
}
