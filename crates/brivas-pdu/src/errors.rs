//! Error types for the PDU field codecs

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PduError>;

/// Top-level PDU codec error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PduError {
    #[error("Semi-octet error: {0}")]
    SemiOctet(#[from] SemiOctetError),

    #[error("BCD error: {0}")]
    Bcd(#[from] BcdError),

    #[error("Timestamp error: {0}")]
    Timestamp(#[from] TimestampError),

    #[error("Charset error: {0}")]
    Charset(#[from] CharsetError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Semi-octet (packed digit) errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SemiOctetError {
    #[error("invalid digit: '{}' - 0x{:x}", as_char(.0), .0)]
    InvalidDigit(u8),

    /// `read` counts octets taken from the source, including the truncated one
    #[error("missing fill after {read} octets")]
    MissingFill { read: usize },
}

/// BCD octet errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BcdError {
    #[error("invalid octet: 0x{0:02x}")]
    InvalidOctet(u8),

    #[error("invalid integer: {0}")]
    InvalidInteger(i32),
}

/// Service centre timestamp errors
///
/// BCD failures are carried as-is rather than wrapped, so a caller matching on
/// `InvalidOctet` sees the offending byte directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("underflow")]
    Underflow,

    #[error("invalid octet: 0x{0:02x}")]
    InvalidOctet(u8),

    #[error("invalid integer: {0}")]
    InvalidInteger(i32),

    #[error("invalid date/time: {year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}")]
    InvalidDateTime {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    },

    #[error("year out of range: {yy:02} from window start {start_year}")]
    YearOutOfRange { start_year: i32, yy: i32 },
}

impl From<BcdError> for TimestampError {
    fn from(err: BcdError) -> Self {
        match err {
            BcdError::InvalidOctet(b) => Self::InvalidOctet(b),
            BcdError::InvalidInteger(v) => Self::InvalidInteger(v),
        }
    }
}

/// Character set lookup errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CharsetError {
    #[error("not encodable: '{}' (U+{:04X})", .0, code_point(.0))]
    NotEncodable(char),

    #[error("not decodable: 0x{0:02x}")]
    NotDecodable(u8),
}

fn as_char(b: &u8) -> char {
    char::from(*b)
}

fn code_point(c: &char) -> u32 {
    u32::from(*c)
}
