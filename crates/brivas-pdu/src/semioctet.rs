//! Semi-octet (packed BCD) digit encoding
//!
//! 3GPP TS 23.040 §9.1.2.3: two digits per octet, the first digit in the low
//! nibble. An odd number of digits is padded with a fill nibble (0xF) in the
//! high nibble of the final octet.

use crate::errors::SemiOctetError;
use bytes::{BufMut, BytesMut};
use tracing::trace;

/// Fill nibble
pub const FILL: u8 = 0x0F;

/// Digit alphabet, indexed by nibble value (0x0 - 0xE)
const DIGITS: &[u8; 15] = b"0123456789*#abc";

/// Number of octets needed to pack `digits` digits
pub fn encoded_len(digits: usize) -> usize {
    (digits + 1) / 2
}

/// Maximum number of digits held by `octets` packed octets
pub fn decoded_len(octets: usize) -> usize {
    octets * 2
}

/// Encode digits into semi-octets
pub fn encode(src: &[u8]) -> Result<Vec<u8>, SemiOctetError> {
    let mut buf = BytesMut::with_capacity(encoded_len(src.len()));

    for chunk in src.chunks(2) {
        let low = encode_digit(chunk[0])?;
        let high = match chunk.get(1) {
            Some(&d) => encode_digit(d)?,
            None => FILL,
        };
        buf.put_u8(low | (high << 4));
    }

    Ok(buf.to_vec())
}

/// Decode semi-octets into `dst`
///
/// Decoding stops when either `dst` is full or `src` is exhausted, so the
/// capacity of `dst` limits the number of digits returned. Fill nibbles are
/// skipped wherever they appear. An octet whose low digit takes the last slot
/// in `dst` must carry a fill nibble in its high half, otherwise the field is
/// truncated mid-octet and `MissingFill` is returned, carrying the number of
/// octets read up to and including the truncated one.
///
/// Returns the decoded prefix of `dst` and the number of octets read from `src`.
pub fn decode<'a>(dst: &'a mut [u8], src: &[u8]) -> Result<(&'a [u8], usize), SemiOctetError> {
    let mut written = 0;
    let mut read = 0;

    for &b in src {
        if written >= dst.len() {
            break;
        }
        read += 1;

        let low = b & 0x0F;
        if low != FILL {
            dst[written] = DIGITS[low as usize];
            written += 1;
        }

        let high = b >> 4;
        if high == FILL {
            continue;
        }
        if written >= dst.len() {
            trace!("Semi-octet 0x{:02x} truncated at octet {}", b, read);
            return Err(SemiOctetError::MissingFill { read });
        }
        dst[written] = DIGITS[high as usize];
        written += 1;
    }

    Ok((&dst[..written], read))
}

/// Decode all semi-octets in `src`
pub fn decode_all(src: &[u8]) -> Result<Vec<u8>, SemiOctetError> {
    let mut dst = vec![0u8; decoded_len(src.len())];
    let (digits, _) = decode(&mut dst, src)?;
    let len = digits.len();
    dst.truncate(len);
    Ok(dst)
}

fn encode_digit(d: u8) -> Result<u8, SemiOctetError> {
    match d {
        b'0'..=b'9' => Ok(d - b'0'),
        b'*' => Ok(0x0A),
        b'#' => Ok(0x0B),
        b'a'..=b'c' => Ok(d - b'a' + 0x0C),
        _ => {
            trace!("Rejected digit 0x{:02x}", d);
            Err(SemiOctetError::InvalidDigit(d))
        }
    }
}
