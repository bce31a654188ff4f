//! GSM 7-bit national language character sets
//!
//! A national language is described by a pair of tables: the locking shift
//! (default) table and the single shift (extension) table reached through
//! ESC. Each table is a `Decoder` from 7-bit code to character; the matching
//! `Encoder` is derived from it rather than maintained by hand.

pub mod tamil;

use crate::errors::CharsetError;
use std::collections::HashMap;
use tracing::debug;

/// Number of codes in a 7-bit table
pub const TABLE_SIZE: usize = 128;

/// Escape to the single shift table
pub const ESC: u8 = 0x1B;

/// 7-bit code to character mapping
#[derive(Debug, Clone)]
pub struct Decoder {
    table: [Option<char>; TABLE_SIZE],
}

impl Decoder {
    /// Build from `(code, char)` pairs
    ///
    /// Codes outside the 7-bit range are ignored; a later pair for the same
    /// code replaces an earlier one.
    pub fn from_pairs(pairs: &[(u8, char)]) -> Self {
        let mut table = [None; TABLE_SIZE];
        for &(code, ch) in pairs {
            if let Some(slot) = table.get_mut(code as usize) {
                *slot = Some(ch);
            }
        }
        Self { table }
    }

    /// Look up a code, `None` if unassigned
    pub fn get(&self, code: u8) -> Option<char> {
        self.table.get(code as usize).copied().flatten()
    }

    pub fn decode(&self, code: u8) -> Result<char, CharsetError> {
        self.get(code).ok_or(CharsetError::NotDecodable(code))
    }

    /// Number of assigned codes
    pub fn len(&self) -> usize {
        self.table.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Assigned `(code, char)` pairs in ascending code order
    pub fn iter(&self) -> impl Iterator<Item = (u8, char)> + '_ {
        self.table
            .iter()
            .enumerate()
            .filter_map(|(code, ch)| ch.map(|ch| (code as u8, ch)))
    }
}

/// Character to 7-bit code mapping
#[derive(Debug, Clone)]
pub struct Encoder {
    table: HashMap<char, u8>,
}

impl Encoder {
    /// Invert a decoder
    ///
    /// Where several codes decode to the same character the lowest code wins.
    pub fn from_decoder(decoder: &Decoder) -> Self {
        let mut table = HashMap::with_capacity(decoder.len());
        let mut duplicates = 0;
        for (code, ch) in decoder.iter() {
            if table.contains_key(&ch) {
                duplicates += 1;
                continue;
            }
            table.insert(ch, code);
        }
        if duplicates > 0 {
            debug!("Encoder: {} duplicate mappings resolved to lowest code", duplicates);
        }
        Self { table }
    }

    /// Look up a character, `None` if not in the table
    pub fn get(&self, ch: char) -> Option<u8> {
        self.table.get(&ch).copied()
    }

    pub fn encode(&self, ch: char) -> Result<u8, CharsetError> {
        self.get(ch).ok_or(CharsetError::NotEncodable(ch))
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
