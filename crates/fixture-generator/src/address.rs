//! Address kinds and the rendering of line addresses
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE.md` file in the Veracruz root directory for
//! information on licensing and copyright.

use crate::error::FixtureError;
use std::{fmt, str::FromStr};

////////////////////////////////////////////////////////////////////////////////
// Constants.
////////////////////////////////////////////////////////////////////////////////

/// The number of bytes modelled by each line of a fixture, and therefore the
/// distance between consecutive addresses.
pub const ADDRESS_STRIDE: u64 = 16;
/// The minimum width of a rendered address field.  Wider addresses are never
/// truncated.
pub const ADDRESS_WIDTH: usize = 6;

////////////////////////////////////////////////////////////////////////////////
// Address kinds.
////////////////////////////////////////////////////////////////////////////////

/// The numeral base used to render the address field of each line.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum AddressKind {
    /// Plain base-10 digits.
    #[default]
    Decimal,
    /// Lowercase base-16 digits.
    Hexadecimal,
    /// Base-8 digits.
    Octal,
}

impl AddressKind {
    /// All address kinds, in selector order.
    pub const ALL: [AddressKind; 3] = [
        AddressKind::Decimal,
        AddressKind::Hexadecimal,
        AddressKind::Octal,
    ];

    /// The radix of the numeral base.
    #[inline]
    pub fn radix(self) -> u32 {
        match self {
            AddressKind::Decimal => 10,
            AddressKind::Hexadecimal => 16,
            AddressKind::Octal => 8,
        }
    }

    /// The conventional base prefix.  Never emitted into a fixture, but
    /// tolerated by `parse_address`.
    #[inline]
    pub fn prefix(self) -> &'static str {
        match self {
            AddressKind::Decimal => "",
            AddressKind::Hexadecimal => "0x",
            AddressKind::Octal => "0o",
        }
    }

    /// The short selector accepted on the command line.
    #[inline]
    pub fn selector(self) -> &'static str {
        match self {
            AddressKind::Decimal => "dec",
            AddressKind::Hexadecimal => "hex",
            AddressKind::Octal => "oct",
        }
    }
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

/// Enables parsing of `AddressKind` values with the `str::parse()` function.
impl FromStr for AddressKind {
    type Err = FixtureError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "dec" | "decimal" => Ok(AddressKind::Decimal),
            "hex" | "hexadecimal" => Ok(AddressKind::Hexadecimal),
            "oct" | "octal" => Ok(AddressKind::Octal),
            _ => Err(FixtureError::InvalidAddressKind(value.to_string())),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Rendering and parsing.
////////////////////////////////////////////////////////////////////////////////

/// Renders `address` in the base selected by `kind`, without a base prefix,
/// left-padded with zeros to `ADDRESS_WIDTH` characters.
pub fn render_address(address: u64, kind: AddressKind) -> String {
    match kind {
        AddressKind::Decimal => format!("{:0width$}", address, width = ADDRESS_WIDTH),
        AddressKind::Hexadecimal => format!("{:0width$x}", address, width = ADDRESS_WIDTH),
        AddressKind::Octal => format!("{:0width$o}", address, width = ADDRESS_WIDTH),
    }
}

/// Parses an address field back into its value.  A whole base prefix
/// (`0x` or `0o`) is accepted but not required; anything other than digits of
/// the selected base is rejected.
pub fn parse_address(field: &str, kind: AddressKind) -> Result<u64, FixtureError> {
    let digits = field.strip_prefix(kind.prefix()).unwrap_or(field);
    let radix = kind.radix();

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(FixtureError::InvalidAddressField(field.to_string()));
    }

    u64::from_str_radix(digits, radix)
        .map_err(|_| FixtureError::InvalidAddressField(field.to_string()))
}
