//! BCD octets as used in SMS timestamp fields
//!
//! Each octet holds a decimal value 0-99 with the tens digit in the low nibble
//! and the units digit in the high nibble, i.e. the same swapped order as a
//! semi-octet digit pair.

use crate::errors::BcdError;

/// Sign flag of a signed octet (bit 3 of the tens nibble)
pub const SIGN_BIT: u8 = 0x08;

/// Largest magnitude representable by a signed octet
pub const MAX_SIGNED: i32 = 79;

/// Encode a value in 0..=99
pub fn encode(v: i32) -> Result<u8, BcdError> {
    if !(0..=99).contains(&v) {
        return Err(BcdError::InvalidInteger(v));
    }
    Ok((((v % 10) as u8) << 4) | (v / 10) as u8)
}

/// Decode an octet into 0..=99
pub fn decode(b: u8) -> Result<i32, BcdError> {
    let tens = b & 0x0F;
    let units = b >> 4;
    if tens > 9 || units > 9 {
        return Err(BcdError::InvalidOctet(b));
    }
    Ok(i32::from(tens) * 10 + i32::from(units))
}

/// Encode a value in -79..=79, overlaying the sign on the tens nibble
pub fn encode_signed(v: i32) -> Result<u8, BcdError> {
    if !(-MAX_SIGNED..=MAX_SIGNED).contains(&v) {
        return Err(BcdError::InvalidInteger(v));
    }
    let b = encode(v.abs())?;
    Ok(if v < 0 { b | SIGN_BIT } else { b })
}

/// Decode a signed octet
pub fn decode_signed(b: u8) -> Result<i32, BcdError> {
    let v = decode(b & !SIGN_BIT).map_err(|_| BcdError::InvalidOctet(b))?;
    Ok(if b & SIGN_BIT != 0 { -v } else { v })
}
