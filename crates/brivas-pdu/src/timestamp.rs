//! Service Centre Time Stamp (TP-SCTS)
//!
//! 3GPP TS 23.040 §9.2.3.11. Seven BCD octets: year, month, day, hour,
//! minute, second and a signed timezone offset in quarter-hours.

use crate::bcd;
use crate::errors::TimestampError;
use bytes::{Buf, BufMut};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeZone, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Encoded length of a timestamp
pub const SCTS_LEN: usize = 7;

/// Seconds per timezone quarter-hour
const QUARTER_HOUR_SECS: i32 = 15 * 60;

/// Maps the two-digit wire year onto a full year
///
/// Years resolve into `[start_year, start_year + 100)`. A window built with
/// `new` is not range checked; `checked` limits it to years chrono can
/// represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenturyWindow {
    start_year: i32,
}

impl CenturyWindow {
    pub const fn new(start_year: i32) -> Self {
        Self { start_year }
    }

    /// Window whose whole century lies in chrono's calendar range
    pub fn checked(start_year: i32) -> Option<Self> {
        let last = start_year.checked_add(99)?;
        if start_year < NaiveDate::MIN.year() || last > NaiveDate::MAX.year() {
            return None;
        }
        Some(Self::new(start_year))
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Resolve a two-digit year (0-99)
    ///
    /// Returns `None` if the resolved year does not fit in an `i32`.
    pub fn resolve(&self, yy: i32) -> Option<i32> {
        let century = self.start_year.checked_sub(self.start_year.rem_euclid(100))?;
        let year = century.checked_add(yy)?;
        if year < self.start_year {
            year.checked_add(100)
        } else {
            Some(year)
        }
    }
}

impl Default for CenturyWindow {
    fn default() -> Self {
        Self::new(1970)
    }
}

/// SMS timestamp with a fixed UTC offset
///
/// Two timestamps are equal only if they denote the same instant *and* carry
/// the same offset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Timestamp(pub DateTime<FixedOffset>);

impl Timestamp {
    pub fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }

    /// UTC offset in quarter-hours, truncated toward zero
    pub fn offset_quarter_hours(&self) -> i32 {
        self.0.offset().local_minus_utc() / QUARTER_HOUR_SECS
    }

    /// Encode into the 7 octet wire form
    pub fn marshal_binary(&self) -> Result<[u8; SCTS_LEN], TimestampError> {
        let t = &self.0;
        let offset = t.offset().local_minus_utc();
        if offset % QUARTER_HOUR_SECS != 0 {
            debug!("Timestamp offset {}s is not quarter-hour aligned, truncating", offset);
        }
        let tz = bcd::encode_signed(self.offset_quarter_hours()).map_err(|e| {
            debug!("Timestamp offset {}s out of range", offset);
            e
        })?;

        Ok([
            bcd::encode(t.year().rem_euclid(100))?,
            bcd::encode(t.month() as i32)?,
            bcd::encode(t.day() as i32)?,
            bcd::encode(t.hour() as i32)?,
            bcd::encode(t.minute() as i32)?,
            bcd::encode(t.second() as i32)?,
            tz,
        ])
    }

    /// Decode from the wire form, resolving the year in the default window
    pub fn unmarshal_binary(src: &[u8]) -> Result<Self, TimestampError> {
        Self::unmarshal_binary_with(src, &CenturyWindow::default())
    }

    /// Decode from the wire form
    ///
    /// Only the first 7 octets of `src` are read.
    pub fn unmarshal_binary_with(
        src: &[u8],
        window: &CenturyWindow,
    ) -> Result<Self, TimestampError> {
        if src.len() < SCTS_LEN {
            debug!("Timestamp underflow: {} of {} octets", src.len(), SCTS_LEN);
            return Err(TimestampError::Underflow);
        }

        let mut fields = [0i32; 6];
        for (field, &b) in fields.iter_mut().zip(src) {
            *field = bcd::decode(b)?;
        }
        let quarters = bcd::decode_signed(src[6])?;

        let [yy, month, day, hour, minute, second] = fields;
        let year = window.resolve(yy).ok_or_else(|| {
            debug!("Timestamp year {:02} overflows window {}", yy, window.start_year());
            TimestampError::YearOutOfRange {
                start_year: window.start_year(),
                yy,
            }
        })?;
        let invalid = || TimestampError::InvalidDateTime {
            year,
            month: month as u32,
            day: day as u32,
            hour: hour as u32,
            minute: minute as u32,
            second: second as u32,
        };

        let offset = FixedOffset::east_opt(quarters * QUARTER_HOUR_SECS)
            .ok_or(TimestampError::InvalidInteger(quarters))?;
        let naive = NaiveDate::from_ymd_opt(year, month as u32, day as u32)
            .and_then(|d| d.and_hms_opt(hour as u32, minute as u32, second as u32))
            .ok_or_else(invalid)?;
        let t = offset.from_local_datetime(&naive).single().ok_or_else(invalid)?;

        Ok(Self(t))
    }

    /// Read a timestamp from a PDU cursor, resolving the year in the default window
    pub fn decode<B: Buf>(buf: &mut B) -> Result<Self, TimestampError> {
        Self::decode_with(buf, &CenturyWindow::default())
    }

    /// Read a timestamp from a PDU cursor
    ///
    /// On success exactly 7 octets are consumed. Octets are consumed even if
    /// their content fails to decode.
    pub fn decode_with<B: Buf>(
        buf: &mut B,
        window: &CenturyWindow,
    ) -> Result<Self, TimestampError> {
        if buf.remaining() < SCTS_LEN {
            debug!("Timestamp underflow: {} of {} octets", buf.remaining(), SCTS_LEN);
            return Err(TimestampError::Underflow);
        }
        let mut raw = [0u8; SCTS_LEN];
        buf.copy_to_slice(&mut raw);
        Self::unmarshal_binary_with(&raw, window)
    }

    /// Append the wire form to a PDU buffer
    pub fn encode<B: BufMut>(&self, buf: &mut B) -> Result<(), TimestampError> {
        buf.put_slice(&self.marshal_binary()?);
        Ok(())
    }
}

impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.0.offset() == other.0.offset()
    }
}

impl Eq for Timestamp {}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(t: DateTime<FixedOffset>) -> Self {
        Self(t)
    }
}

impl From<Timestamp> for DateTime<FixedOffset> {
    fn from(t: Timestamp) -> Self {
        t.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S %z"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::{Bytes, BytesMut};

    fn ts(offset_secs: i32, y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Timestamp {
        let tz = FixedOffset::east_opt(offset_secs).unwrap();
        Timestamp(tz.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap())
    }

    fn vectors() -> Vec<(&'static str, Timestamp, [u8; 7])> {
        vec![
            (
                "19700101",
                ts(0, 1970, 1, 1, 1, 2, 3),
                [0x07, 0x10, 0x10, 0x10, 0x20, 0x30, 0x00],
            ),
            (
                "19991231",
                ts(-15 * 60, 1999, 12, 31, 23, 59, 59),
                [0x99, 0x21, 0x13, 0x32, 0x95, 0x95, 0x18],
            ),
            (
                "20001231",
                ts(15 * 60, 2000, 12, 31, 23, 59, 59),
                [0x00, 0x21, 0x13, 0x32, 0x95, 0x95, 0x10],
            ),
            (
                "20170831",
                ts(8 * 3600, 2017, 8, 31, 11, 21, 54),
                [0x71, 0x80, 0x13, 0x11, 0x12, 0x45, 0x23],
            ),
        ]
    }

    #[test]
    fn test_marshal_binary() {
        for (name, t, out) in vectors() {
            assert_eq!(t.marshal_binary().unwrap(), out, "{}", name);
        }
    }

    #[test]
    fn test_marshal_outside_window_wraps_year() {
        assert_eq!(
            ts(0, 2070, 1, 1, 1, 2, 3).marshal_binary().unwrap(),
            [0x07, 0x10, 0x10, 0x10, 0x20, 0x30, 0x00]
        );
        assert_eq!(
            ts(15 * 60, 2100, 12, 31, 23, 59, 59).marshal_binary().unwrap(),
            [0x00, 0x21, 0x13, 0x32, 0x95, 0x95, 0x10]
        );
    }

    #[test]
    fn test_marshal_offset_out_of_range() {
        let t = ts(20 * 3600, 2070, 12, 31, 23, 59, 59);
        assert_eq!(t.marshal_binary(), Err(TimestampError::InvalidInteger(80)));

        let t = ts(-(20 * 3600), 2020, 6, 1, 0, 0, 0);
        assert_eq!(t.marshal_binary(), Err(TimestampError::InvalidInteger(-80)));

        let t = ts(-(19 * 3600 + 45 * 60), 2020, 6, 1, 0, 0, 0);
        assert_eq!(t.marshal_binary().unwrap()[6], 0x9f);
    }

    #[test]
    fn test_unmarshal_binary() {
        for (name, t, src) in vectors() {
            let got = Timestamp::unmarshal_binary(&src).unwrap();
            assert_eq!(got, t, "{}", name);
            assert_eq!(got.0.offset(), t.0.offset(), "{}", name);
        }
    }

    #[test]
    fn test_unmarshal_errors() {
        assert_eq!(
            Timestamp::unmarshal_binary(&[0x71, 0x80, 0x13, 0x11, 0x12, 0x45]),
            Err(TimestampError::Underflow)
        );
        assert_eq!(
            Timestamp::unmarshal_binary(&[0xa1, 0x80, 0x13, 0x11, 0x12, 0x45, 0x00]),
            Err(TimestampError::InvalidOctet(0xa1))
        );
        assert_eq!(
            Timestamp::unmarshal_binary(&[0x71, 0x80, 0x13, 0x11, 0x12, 0x45, 0xa0]),
            Err(TimestampError::InvalidOctet(0xa0))
        );
    }

    #[test]
    fn test_unmarshal_invalid_calendar_date() {
        // 2017-13-31
        let err =
            Timestamp::unmarshal_binary(&[0x71, 0x31, 0x13, 0x11, 0x12, 0x45, 0x00]).unwrap_err();
        assert!(matches!(err, TimestampError::InvalidDateTime { year: 2017, month: 13, .. }));

        // 2017-02-30
        let err =
            Timestamp::unmarshal_binary(&[0x71, 0x20, 0x03, 0x11, 0x12, 0x45, 0x00]).unwrap_err();
        assert!(matches!(err, TimestampError::InvalidDateTime { day: 30, .. }));
    }

    #[test]
    fn test_century_window() {
        let window = CenturyWindow::default();
        assert_eq!(window.resolve(70), Some(1970));
        assert_eq!(window.resolve(99), Some(1999));
        assert_eq!(window.resolve(0), Some(2000));
        assert_eq!(window.resolve(69), Some(2069));

        let window = CenturyWindow::new(2000);
        assert_eq!(window.resolve(70), Some(2070));
        assert_eq!(window.resolve(0), Some(2000));

        let window = CenturyWindow::new(1985);
        assert_eq!(window.resolve(84), Some(2084));
        assert_eq!(window.resolve(85), Some(1985));

        let t = Timestamp::unmarshal_binary_with(
            &[0x07, 0x10, 0x10, 0x10, 0x20, 0x30, 0x00],
            &CenturyWindow::new(2000),
        )
        .unwrap();
        assert_eq!(t, ts(0, 2070, 1, 1, 1, 2, 3));
    }

    #[test]
    fn test_century_window_overflow() {
        let window = CenturyWindow::new(2147483600);
        assert_eq!(window.resolve(47), Some(i32::MAX));
        assert_eq!(window.resolve(48), None);
        assert_eq!(CenturyWindow::new(i32::MIN).resolve(0), None);

        assert_eq!(
            Timestamp::unmarshal_binary_with(&[0x99, 0x21, 0x13, 0x32, 0x95, 0x95, 0x18], &window),
            Err(TimestampError::YearOutOfRange {
                start_year: 2147483600,
                yy: 99
            })
        );

        // Resolves, but past chrono's calendar
        let err = Timestamp::unmarshal_binary_with(
            &[0x00, 0x21, 0x13, 0x32, 0x95, 0x95, 0x10],
            &window,
        )
        .unwrap_err();
        assert!(matches!(err, TimestampError::InvalidDateTime { year: 2147483600, .. }));
    }

    #[test]
    fn test_checked_window() {
        assert_eq!(CenturyWindow::checked(1970), Some(CenturyWindow::default()));
        assert_eq!(CenturyWindow::checked(2147483600), None);
        assert_eq!(CenturyWindow::checked(i32::MIN), None);
        assert!(CenturyWindow::checked(NaiveDate::MAX.year() - 99).is_some());
        assert_eq!(CenturyWindow::checked(NaiveDate::MAX.year() - 98), None);
    }

    #[test]
    fn test_equality_includes_offset() {
        let utc = ts(0, 2017, 8, 31, 3, 21, 54);
        let local = ts(8 * 3600, 2017, 8, 31, 11, 21, 54);
        assert_eq!(utc.0, local.0);
        assert_ne!(utc, local);
    }

    #[test]
    fn test_display() {
        let tz = FixedOffset::east_opt(22800).unwrap();
        let t = tz.with_ymd_and_hms(2000, 11, 2, 3, 4, 5).unwrap()
            + chrono::Duration::nanoseconds(65);
        assert_eq!(Timestamp(t).to_string(), "2000-11-02 03:04:05 +0620");
        assert_eq!(ts(22800, 2000, 11, 2, 3, 4, 5).to_string(), "2000-11-02 03:04:05 +0620");
        assert_eq!(ts(0, 2000, 11, 2, 3, 4, 5).to_string(), "2000-11-02 03:04:05 +0000");
        assert_eq!(ts(-15 * 60, 1999, 12, 31, 23, 59, 59).to_string(), "1999-12-31 23:59:59 -0015");
    }

    #[test]
    fn test_buf_encode_decode() {
        let t = ts(8 * 3600, 2017, 8, 31, 11, 21, 54);
        let mut buf = BytesMut::new();
        buf.extend_from_slice(&[0xAA]);
        t.encode(&mut buf).unwrap();
        buf.extend_from_slice(&[0xBB]);

        let mut data: Bytes = buf.freeze();
        assert_eq!(data.get_u8(), 0xAA);
        assert_eq!(Timestamp::decode(&mut data).unwrap(), t);
        assert_eq!(data.get_u8(), 0xBB);
        assert_eq!(Timestamp::decode(&mut data), Err(TimestampError::Underflow));
    }

    #[test]
    fn test_buf_decode_with_window() {
        let raw = [0x07, 0x10, 0x10, 0x10, 0x20, 0x30, 0x00, 0xCC];

        let mut data = Bytes::copy_from_slice(&raw);
        let t = Timestamp::decode_with(&mut data, &CenturyWindow::new(2000)).unwrap();
        assert_eq!(t, ts(0, 2070, 1, 1, 1, 2, 3));
        assert_eq!(data.remaining(), 1);

        let mut data = Bytes::copy_from_slice(&raw);
        assert_eq!(Timestamp::decode(&mut data).unwrap(), ts(0, 1970, 1, 1, 1, 2, 3));
    }

    #[test]
    fn test_serde_keeps_offset() {
        let t = ts(-15 * 60, 1999, 12, 31, 23, 59, 59);
        let json = serde_json::to_string(&t).unwrap();
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
