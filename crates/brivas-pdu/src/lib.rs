//! # Brivas PDU Field Codecs
//!
//! Low-level codecs for SMS TPDU fields (3GPP TS 23.040 / 23.038):
//!
//! - **semioctet** - packed digit strings (addresses, service centre numbers)
//! - **bcd** - decimal octets, including the signed timezone octet
//! - **timestamp** - 7 octet Service Centre Time Stamp
//! - **charset** - national language locking/single shift tables
//!
//! All codecs are pure functions over byte slices. Character tables are built
//! once on first use and are safe to share across threads.
//!
//! ## Example
//! ```rust
//! use brivas_pdu::{semioctet, Timestamp};
//!
//! let packed = semioctet::encode(b"2348031234567").unwrap();
//! assert_eq!(packed[0], 0x32);
//!
//! let scts = Timestamp::unmarshal_binary(&[0x71, 0x80, 0x13, 0x11, 0x12, 0x45, 0x23]).unwrap();
//! assert_eq!(scts.to_string(), "2017-08-31 11:21:54 +0800");
//! ```

pub mod bcd;
pub mod charset;
pub mod config;
pub mod errors;
pub mod semioctet;
pub mod timestamp;

// Re-exports
pub use config::{CodecConfig, TimestampConfig};
pub use errors::{BcdError, CharsetError, PduError, Result, SemiOctetError, TimestampError};
pub use timestamp::{CenturyWindow, Timestamp};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
