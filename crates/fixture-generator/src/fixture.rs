//! Writing address fixtures
//!
//! A fixture is a plain text file with one record per line:
//!
//! ```text
//! 000000: 89ABCDE
//! 000010: 89ABCDE
//! 000020: 89ABCDE
//! ```
//!
//! Line `i` carries the address `i * 16`, rendered in the requested base and
//! zero-padded to at least six characters, followed by a fixed payload.  There
//! is no header or footer.
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE.md` file in the Veracruz root directory for
//! information on licensing and copyright.

use crate::{
    address::{render_address, AddressKind, ADDRESS_STRIDE},
    error::FixtureError,
};
use log::{debug, info};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// The literal payload following every address.
pub const PAYLOAD: &str = "89ABCDE";
/// Separates the address field from the payload.
pub const SEPARATOR: &str = ": ";

/// Computes the address of line `index`, failing if it does not fit in a
/// `u64`.
#[inline]
pub fn line_address(index: u64) -> Result<u64, FixtureError> {
    index
        .checked_mul(ADDRESS_STRIDE)
        .ok_or(FixtureError::LineCountOverflow(index))
}

/// Renders line `index` of a fixture, including its line terminator.
pub fn render_line(index: u64, kind: AddressKind) -> Result<String, FixtureError> {
    let address = line_address(index)?;
    Ok(format!(
        "{}{}{}\n",
        render_address(address, kind),
        SEPARATOR,
        PAYLOAD
    ))
}

/// Rejects line counts whose final address would overflow.
fn check_line_count(line_count: u64) -> Result<(), FixtureError> {
    match line_count.checked_sub(1) {
        Some(last) => line_address(last)
            .map(|_| ())
            .map_err(|_| FixtureError::LineCountOverflow(line_count)),
        None => Ok(()),
    }
}

/// Emits `line_count` fixture lines to `writer`, returning the number of bytes
/// written.  The writer is not flushed.
pub fn write_fixture_to<W: Write>(
    writer: &mut W,
    line_count: u64,
    kind: AddressKind,
) -> Result<u64, FixtureError> {
    check_line_count(line_count)?;

    let mut written = 0u64;
    for index in 0..line_count {
        let line = render_line(index, kind)?;
        writer.write_all(line.as_bytes())?;
        written += line.len() as u64;
    }

    Ok(written)
}

/// Writes a fixture of `line_count` lines to `path`, creating the file or
/// truncating an existing one.
///
/// Arguments are validated before the file is opened, so an invalid line
/// count never touches the filesystem.  A failure part way through leaves
/// whatever was already written in place.
pub fn write_fixture<P: AsRef<Path>>(
    path: P,
    line_count: u64,
    kind: AddressKind,
) -> Result<(), FixtureError> {
    let path = path.as_ref();
    check_line_count(line_count)?;

    info!(
        "Generating fixture '{}': {} lines, {} addresses.",
        path.display(),
        line_count,
        kind
    );

    let io_error = |source: std::io::Error| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    };

    debug!("Opening output file '{}'.", path.display());
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);

    let written = match write_fixture_to(&mut writer, line_count, kind) {
        Ok(written) => written,
        Err(FixtureError::IOError(source)) => return Err(io_error(source)),
        Err(otherwise) => return Err(otherwise),
    };
    writer.flush().map_err(io_error)?;

    info!(
        "Wrote {} bytes to fixture '{}'.",
        written,
        path.display()
    );

    Ok(())
}
