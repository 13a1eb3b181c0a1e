//! Address fixture generator
//!
//! Generates synthetic text fixtures for hex-view style front-ends: each line
//! models sixteen bytes of data and carries a zero-padded address, rendered in
//! decimal, hexadecimal or octal, followed by a fixed payload.
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE.md` file in the Veracruz root directory for
//! information on licensing and copyright.

pub mod address;
pub use self::address::*;
pub mod error;
pub use self::error::*;
pub mod fixture;
pub use self::fixture::*;
