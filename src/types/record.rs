use crate::error::{ResmartError, Result};
use crate::types::field::KnownField;
use jiff::civil::Date;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Number of 16-bit data words at the start of every packet
pub const FIELD_COUNT: usize = 106;

/// Day zero for ordinals: 0001-01-01 has ordinal 1
const ORDINAL_EPOCH: Date = jiff::civil::date(1, 1, 1);

/// Packet timestamp, stored exactly as the device wrote it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Timestamp {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub reserved: u8,
}

impl Timestamp {
    /// Calendar date of the timestamp, if year/month/day form one
    pub fn date(&self) -> Option<Date> {
        if self.year == 0 {
            return None;
        }
        let year = i16::try_from(self.year).ok()?;
        let month = i8::try_from(self.month).ok()?;
        let day = i8::try_from(self.day).ok()?;
        Date::new(year, month, day).ok()
    }

    /// Year, month, day, hour, minute, second (reserved byte excluded)
    pub fn components(&self) -> [u16; 6] {
        [
            self.year,
            self.month as u16,
            self.day as u16,
            self.hour as u16,
            self.minute as u16,
            self.second as u16,
        ]
    }
}

/// One decoded 256-byte packet
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Record {
    timestamp: Timestamp,
    fields: Vec<u16>,
    date: Date,
    ordinal: i32,
}

impl Record {
    /// Build a record, checking the field count and the timestamp's date
    pub fn new(timestamp: Timestamp, fields: Vec<u16>) -> Result<Self> {
        if fields.len() != FIELD_COUNT {
            return Err(ResmartError::malformed(
                0,
                format!("expected {FIELD_COUNT} data fields, got {}", fields.len()),
            ));
        }

        let date = timestamp.date().ok_or_else(|| {
            ResmartError::malformed(
                0,
                format!(
                    "invalid date {:04}-{:02}-{:02}",
                    timestamp.year, timestamp.month, timestamp.day
                ),
            )
        })?;
        let ordinal = date
            .since(ORDINAL_EPOCH)
            .map_err(|e| ResmartError::malformed(0, format!("date out of range: {e}")))?
            .get_days()
            + 1;

        Ok(Self {
            timestamp,
            fields,
            date,
            ordinal,
        })
    }

    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    /// All 106 data words in packet order
    pub fn fields(&self) -> &[u16] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Option<u16> {
        self.fields.get(index).copied()
    }

    pub fn value(&self, field: KnownField) -> u16 {
        self.fields[field.index()]
    }

    pub fn date(&self) -> Date {
        self.date
    }

    /// Proleptic Gregorian day number (0001-01-01 is day 1)
    pub fn ordinal(&self) -> i32 {
        self.ordinal
    }

    /// Seconds since the ordinal epoch. Only meaningful for ordering and
    /// differences within one dataset; this is not Unix time.
    pub fn seconds(&self) -> i64 {
        let ts = &self.timestamp;
        ts.second as i64
            + 60 * ts.minute as i64
            + 3600 * (ts.hour as i64 + 24 * self.ordinal as i64)
    }

    /// ISO 8601 date, e.g. "2021-03-15"
    pub fn date_string(&self) -> String {
        self.date.to_string()
    }
}
