//! The item/label alphabet and random string draws.
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE_MIT.markdown` file in the Veracruz root directory for
//! information on licensing and copyright.

use rand::Rng;
use std::convert::TryFrom;

/// Lowercase then uppercase ASCII letters. Nothing here needs escaping in a
/// CSV field.
pub const ALPHABET: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Draws a string of `len` characters, each chosen uniformly from
/// [`ALPHABET`].
pub fn random_string<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Number of distinct strings of length `len` over [`ALPHABET`], saturating
/// at `u64::MAX`.
pub fn distinct_capacity(len: usize) -> u64 {
    u32::try_from(len)
        .ok()
        .and_then(|exp| (ALPHABET.len() as u64).checked_pow(exp))
        .unwrap_or(u64::MAX)
}

/// Returns `true` if every byte of `s` is in [`ALPHABET`].
pub fn is_alphabetic(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_alphabetic())
}
