//! Byte and bit counts with SI and IEC suffixes.
//!
//! Thin wrappers that bind the generic magnitude algorithm to the byte and
//! bit tables, plus the matching parsers.

use crate::error::{HumanizeError, Result};
use crate::magnitude::{
    BIG_IEC_BYTES, BIG_SI_BYTES, FormatOptions, IEC_BITS, IEC_BYTES, Rounding, SI_BITS, SI_BYTES,
    format_count, parse_count,
};


/// Formats a byte count using SI units (kB, MB).
///
/// # Examples
///
/// ```
/// use libhumanize::bytes::bytes;
///
/// assert_eq!(bytes(82_854_982), "83 MB");
/// assert_eq!(bytes(1000), "1.0 kB");
/// assert_eq!(bytes(999), "999 B");
/// ```
pub fn bytes(count: u64) -> String {
    format_count(u128::from(count), &SI_BYTES, FormatOptions::default())
}

/// Formats a byte count using IEC units (KiB, MiB).
///
/// # Examples
///
/// ```
/// use libhumanize::bytes::ibytes;
///
/// assert_eq!(ibytes(82_854_982), "79 MiB");
/// assert_eq!(ibytes(1024), "1.0 KiB");
/// ```
pub fn ibytes(count: u64) -> String {
    format_count(u128::from(count), &IEC_BYTES, FormatOptions::default())
}

/// SI byte count rounded down to `precision` decimals, trailing zeros dropped.
///
/// # Examples
///
/// ```
/// use libhumanize::bytes::bytes_custom_floor;
///
/// assert_eq!(bytes_custom_floor(1024, 2), "1.02 kB");
/// assert_eq!(bytes_custom_floor(1_000_000_000, 2), "1 GB");
/// ```
pub fn bytes_custom_floor(count: u64, precision: usize) -> String {
    let options = FormatOptions::natural(precision, Rounding::Floor);
    format_count(u128::from(count), &SI_BYTES, options)
}

/// IEC byte count rounded down to `precision` decimals, trailing zeros dropped.
pub fn ibytes_custom_floor(count: u64, precision: usize) -> String {
    let options = FormatOptions::natural(precision, Rounding::Floor);
    format_count(u128::from(count), &IEC_BYTES, options)
}

/// SI byte count rounded up to `precision` decimals, trailing zeros dropped.
///
/// # Examples
///
/// ```
/// use libhumanize::bytes::bytes_custom_ceil;
///
/// assert_eq!(bytes_custom_ceil(1024, 2), "1.03 kB");
/// ```
pub fn bytes_custom_ceil(count: u64, precision: usize) -> String {
    let options = FormatOptions::natural(precision, Rounding::Ceil);
    format_count(u128::from(count), &SI_BYTES, options)
}

/// IEC byte count rounded up to `precision` decimals, trailing zeros dropped.
pub fn ibytes_custom_ceil(count: u64, precision: usize) -> String {
    let options = FormatOptions::natural(precision, Rounding::Ceil);
    format_count(u128::from(count), &IEC_BYTES, options)
}

/// Formats a bit count using SI units (kb, Mb).
///
/// # Examples
///
/// ```
/// use libhumanize::bytes::bits;
///
/// assert_eq!(bits(82_854_982), "83 Mb");
/// ```
pub fn bits(count: u64) -> String {
    format_count(u128::from(count), &SI_BITS, FormatOptions::default())
}

/// Formats a bit count using IEC units (Kib, Mib).
pub fn ibits(count: u64) -> String {
    format_count(u128::from(count), &IEC_BITS, FormatOptions::default())
}

/// Formats a wide byte count with SI units up to YB, without a space.
///
/// # Examples
///
/// ```
/// use libhumanize::bytes::big_bytes;
///
/// assert_eq!(big_bytes(82_854_982), "83MB");
/// assert_eq!(big_bytes(10u128.pow(24)), "1.0YB");
/// ```
pub fn big_bytes(count: u128) -> String {
    format_count(count, &BIG_SI_BYTES, FormatOptions::default().compact())
}

/// Formats a wide byte count with IEC units up to YiB, without a space.
pub fn big_ibytes(count: u128) -> String {
    format_count(count, &BIG_IEC_BYTES, FormatOptions::default().compact())
}

/// Parses a human-readable byte size into a byte count.
///
/// Units are case-insensitive and the trailing `B` is optional, so `"42 MB"`,
/// `"42mb"` and `"42 M"` all mean the same thing.
///
/// # Examples
///
/// ```
/// use libhumanize::bytes::parse_bytes;
///
/// assert_eq!(parse_bytes("42 MB").unwrap(), 42_000_000);
/// assert_eq!(parse_bytes("42 mib").unwrap(), 44_040_192);
/// assert!(parse_bytes("16 EiB").is_err());
/// ```
pub fn parse_bytes(text: &str) -> Result<u64> {
    let count = parse_count(text, &[&SI_BYTES, &IEC_BYTES])?;
    u64::try_from(count).map_err(|_| HumanizeError::overflow(text))
}

/// Parses a human-readable bit size into a bit count.
///
/// Bit and byte suffixes only differ in case, so this accepts exactly what
/// [`parse_bytes`] accepts.
pub fn parse_bits(text: &str) -> Result<u64> {
    let count = parse_count(text, &[&SI_BITS, &IEC_BITS])?;
    u64::try_from(count).map_err(|_| HumanizeError::overflow(text))
}

/// Parses a human-readable byte size into a wide byte count, including
/// zetta and yotta units.
///
/// # Examples
///
/// ```
/// use libhumanize::bytes::parse_big_bytes;
///
/// assert_eq!(parse_big_bytes("42 ZB").unwrap(), 42 * 10u128.pow(21));
/// ```
pub fn parse_big_bytes(text: &str) -> Result<u128> {
    parse_count(text, &[&BIG_SI_BYTES, &BIG_IEC_BYTES])
}
