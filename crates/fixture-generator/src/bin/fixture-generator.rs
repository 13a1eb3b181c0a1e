//! Fixture generator for hex-view front-ends
//!
//! # Purpose
//!
//! Writes a synthetic text fixture of `--lines` records to `--output`.  Each
//! record models sixteen bytes of data: a zero-padded address, rendered in the
//! base selected by `--address-kind`, followed by a fixed payload.  Run with no
//! arguments to produce the standard 100,000-line hexadecimal fixture.
//!
//! # Authors
//!
//! The Veracruz Development Team.
//!
//! # Copyright
//!
//! See the file `LICENSE.md` in the Veracruz root directory for licensing
//! and copyright information.
//!
//! # Example
//! ```
//! cargo run -- --output [PATH] --lines [NUMBER] --address-kind [dec|hex|oct];
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use fixture_generator::{write_fixture, AddressKind};
use log::{error, info};
use std::{path::PathBuf, str::FromStr};

////////////////////////////////////////////////////////////////////////////////
// Constants.
////////////////////////////////////////////////////////////////////////////////

/// About the utility.
const ABOUT: &str = "Generates a synthetic text fixture of zero-padded 16-byte \
line addresses, each followed by a fixed payload.";
/// The name of the application.
const APPLICATION_NAME: &str = "fixture-generator";
/// The authors list.
const AUTHORS: &str = "The Veracruz Development Team.";
/// The application's version information.
const VERSION: &str = "0.3.0";

/// The default filename of the output fixture.
const DEFAULT_OUTPUT_FILENAME: &str = "test-100000.txt";
/// The default number of lines in the output fixture.
const DEFAULT_LINE_COUNT: &str = "100000";
/// The default address kind of the output fixture.
const DEFAULT_ADDRESS_KIND: &str = "hex";

////////////////////////////////////////////////////////////////////////////////
// Command line parsing.
////////////////////////////////////////////////////////////////////////////////

/// A structure collating all of the arguments passed to the executable.
#[derive(Debug, Parser)]
#[command(name = APPLICATION_NAME, author = AUTHORS, version = VERSION, about = ABOUT, long_about = None, rename_all = "kebab-case")]
struct Arguments {
    /// The filename of the output fixture.  An existing file is truncated.
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT_FILENAME, value_name = "PATH")]
    output: PathBuf,
    /// The number of lines to generate.
    #[arg(long, short = 'n', default_value = DEFAULT_LINE_COUNT, value_name = "NUMBER")]
    lines: u64,
    /// The base in which line addresses are rendered: `dec`, `hex` or `oct`.
    #[arg(long, short = 'a', default_value = DEFAULT_ADDRESS_KIND, value_name = "KIND", value_parser = AddressKind::from_str)]
    address_kind: AddressKind,
}

/// Entry point: parses the command line and writes the fixture.
fn main() -> Result<()> {
    env_logger::init();

    let arguments = Arguments::parse();
    info!("Command line parsed: {:?}.", arguments);

    write_fixture(&arguments.output, arguments.lines, arguments.address_kind)
        .map_err(|e| {
            error!("Fixture generation failed: {}", e);
            e
        })
        .with_context(|| format!("failed to write fixture '{}'", arguments.output.display()))?;

    info!("Exiting program successfully.");

    Ok(())
}
