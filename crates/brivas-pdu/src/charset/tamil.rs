//! Tamil national language tables (3GPP TS 23.038 §6.2.1.2.4 / §6.2.1.2.5)

use super::{Decoder, Encoder};
use once_cell::sync::Lazy;
use tracing::debug;

static DECODER: Lazy<Decoder> = Lazy::new(|| Decoder::from_pairs(LOCKING_SHIFT));
static EXT_DECODER: Lazy<Decoder> = Lazy::new(|| Decoder::from_pairs(SINGLE_SHIFT));

static ENCODER: Lazy<Encoder> = Lazy::new(|| {
    let encoder = Encoder::from_decoder(&DECODER);
    debug!("Tamil locking shift encoder built: {} characters", encoder.len());
    encoder
});

static EXT_ENCODER: Lazy<Encoder> = Lazy::new(|| {
    let encoder = Encoder::from_decoder(&EXT_DECODER);
    debug!("Tamil single shift encoder built: {} characters", encoder.len());
    encoder
});

/// Locking shift table
pub fn decoder() -> &'static Decoder {
    &DECODER
}

/// Single shift table
pub fn ext_decoder() -> &'static Decoder {
    &EXT_DECODER
}

/// Inverse of the locking shift table
pub fn encoder() -> &'static Encoder {
    &ENCODER
}

/// Inverse of the single shift table
pub fn ext_encoder() -> &'static Encoder {
    &EXT_ENCODER
}

pub fn decode_default(code: u8) -> Option<char> {
    DECODER.get(code)
}

pub fn decode_extension(code: u8) -> Option<char> {
    EXT_DECODER.get(code)
}

pub fn encode_default(ch: char) -> Option<u8> {
    ENCODER.get(ch)
}

pub fn encode_extension(ch: char) -> Option<u8> {
    EXT_ENCODER.get(ch)
}

// LF, CR, ESC and SP keep their ASCII values; unlisted codes are unassigned.
const LOCKING_SHIFT: &[(u8, char)] = &[
    (0x01, '\u{0b82}'),
    (0x02, '\u{0b83}'),
    (0x03, '\u{0b85}'),
    (0x04, '\u{0b86}'),
    (0x05, '\u{0b87}'),
    (0x06, '\u{0b88}'),
    (0x07, '\u{0b89}'),
    (0x08, '\u{0b8a}'),
    (0x0A, '\n'),
    (0x0D, '\r'),
    (0x0E, '\u{0b8e}'),
    (0x0F, '\u{0b8f}'),
    (0x10, '\u{0b90}'),
    (0x12, '\u{0b92}'),
    (0x13, '\u{0b93}'),
    (0x14, '\u{0b94}'),
    (0x15, '\u{0b95}'),
    (0x19, '\u{0b99}'),
    (0x1A, '\u{0b9a}'),
    (0x1B, '\u{1b}'),
    (0x1D, '\u{0b9c}'),
    (0x1F, '\u{0b9e}'),
    (0x20, ' '),
    (0x21, '!'),
    (0x22, '\u{0b9f}'),
    (0x26, '\u{0ba3}'),
    (0x27, '\u{0ba4}'),
    (0x28, ')'),
    (0x29, '('),
    (0x2C, ','),
    (0x2E, '.'),
    (0x2F, '\u{0ba8}'),
    (0x30, '0'),
    (0x31, '1'),
    (0x32, '2'),
    (0x33, '3'),
    (0x34, '4'),
    (0x35, '5'),
    (0x36, '6'),
    (0x37, '7'),
    (0x38, '8'),
    (0x39, '9'),
    (0x3A, ':'),
    (0x3B, ';'),
    (0x3C, '\u{0ba9}'),
    (0x3D, '\u{0baa}'),
    (0x3F, '?'),
    (0x42, '\u{0bae}'),
    (0x43, '\u{0baf}'),
    (0x44, '\u{0bb0}'),
    (0x45, '\u{0bb1}'),
    (0x46, '\u{0bb2}'),
    (0x47, '\u{0bb3}'),
    (0x48, '\u{0bb4}'),
    (0x49, '\u{0bb5}'),
    (0x4A, '\u{0bb6}'),
    (0x4B, '\u{0bb7}'),
    (0x4C, '\u{0bb8}'),
    (0x4D, '\u{0bb9}'),
    (0x50, '\u{0bbe}'),
    (0x51, '\u{0bbf}'),
    (0x52, '\u{0bc0}'),
    (0x53, '\u{0bc1}'),
    (0x54, '\u{0bc2}'),
    (0x58, '\u{0bc6}'),
    (0x59, '\u{0bc7}'),
    (0x5A, '\u{0bc8}'),
    (0x5C, '\u{0bca}'),
    (0x5D, '\u{0bcb}'),
    (0x5E, '\u{0bcc}'),
    (0x5F, '\u{0bcd}'),
    (0x60, '\u{0bd0}'),
    (0x61, 'a'),
    (0x62, 'b'),
    (0x63, 'c'),
    (0x64, 'd'),
    (0x65, 'e'),
    (0x66, 'f'),
    (0x67, 'g'),
    (0x68, 'h'),
    (0x69, 'i'),
    (0x6A, 'j'),
    (0x6B, 'k'),
    (0x6C, 'l'),
    (0x6D, 'm'),
    (0x6E, 'n'),
    (0x6F, 'o'),
    (0x70, 'p'),
    (0x71, 'q'),
    (0x72, 'r'),
    (0x73, 's'),
    (0x74, 't'),
    (0x75, 'u'),
    (0x76, 'v'),
    (0x77, 'w'),
    (0x78, 'x'),
    (0x79, 'y'),
    (0x7A, 'z'),
    (0x7B, '\u{0bd7}'),
    (0x7C, '\u{0bf0}'),
    (0x7D, '\u{0bf1}'),
    (0x7E, '\u{0bf2}'),
    (0x7F, '\u{0bf9}'),
];

// 0x0B/0x18 and 0x13/0x15 are duplicate legacy mappings.
const SINGLE_SHIFT: &[(u8, char)] = &[
    (0x00, '@'),
    (0x01, '£'),
    (0x02, '$'),
    (0x03, '¥'),
    (0x04, '¿'),
    (0x05, '"'),
    (0x06, '¤'),
    (0x07, '%'),
    (0x08, '&'),
    (0x09, '\''),
    (0x0A, '\u{0c}'),
    (0x0B, '*'),
    (0x0C, '+'),
    (0x0D, '\r'),
    (0x0E, '-'),
    (0x0F, '/'),
    (0x10, '<'),
    (0x11, '='),
    (0x12, '>'),
    (0x13, '¡'),
    (0x14, '^'),
    (0x15, '¡'),
    (0x16, '_'),
    (0x17, '#'),
    (0x18, '*'),
    (0x19, '\u{0964}'),
    (0x1A, '\u{0965}'),
    (0x1B, '\u{1b}'),
    (0x1C, '\u{0be6}'),
    (0x1D, '\u{0be7}'),
    (0x1E, '\u{0be8}'),
    (0x1F, '\u{0be9}'),
    (0x20, '\u{0bea}'),
    (0x21, '\u{0beb}'),
    (0x22, '\u{0bec}'),
    (0x23, '\u{0bed}'),
    (0x24, '\u{0bee}'),
    (0x25, '\u{0bef}'),
    (0x26, '\u{0bf3}'),
    (0x27, '\u{0bf4}'),
    (0x28, '{'),
    (0x29, '}'),
    (0x2A, '\u{0bf5}'),
    (0x2B, '\u{0bf6}'),
    (0x2C, '\u{0bf7}'),
    (0x2D, '\u{0bf8}'),
    (0x2E, '\u{0bfa}'),
    (0x2F, '\\'),
    (0x3C, '['),
    (0x3D, '~'),
    (0x3E, ']'),
    (0x40, '|'),
    (0x41, 'A'),
    (0x42, 'B'),
    (0x43, 'C'),
    (0x44, 'D'),
    (0x45, 'E'),
    (0x46, 'F'),
    (0x47, 'G'),
    (0x48, 'H'),
    (0x49, 'I'),
    (0x4A, 'J'),
    (0x4B, 'K'),
    (0x4C, 'L'),
    (0x4D, 'M'),
    (0x4E, 'N'),
    (0x4F, 'O'),
    (0x50, 'P'),
    (0x51, 'Q'),
    (0x52, 'R'),
    (0x53, 'S'),
    (0x54, 'T'),
    (0x55, 'U'),
    (0x56, 'V'),
    (0x57, 'W'),
    (0x58, 'X'),
    (0x59, 'Y'),
    (0x5A, 'Z'),
    (0x65, '€'),
];
