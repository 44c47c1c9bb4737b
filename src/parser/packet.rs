//! Fixed 256-byte packet layout
//!
//! ```text
//! offset  len  content
//!      0  212  106 x u16 LE data words
//!    212   36  unused
//!    248    2  year (u16 LE)
//!    250    6  month, day, hour, minute, second, reserved (u8)
//! ```

use crate::error::{ResmartError, Result};
use crate::parser::stream::ByteStream;
use crate::types::{Record, Timestamp, FIELD_COUNT};

pub const PACKET_SIZE: usize = 256;

/// Bytes holding the data words
pub const DATA_BYTES: usize = FIELD_COUNT * 2;

/// Start of the 8-byte timestamp trailer
pub const DATE_OFFSET: usize = PACKET_SIZE - 8;

/// Decode one packet. Only the first 256 bytes of `buf` are looked at.
pub fn decode_packet(buf: &[u8]) -> Result<Record> {
    if buf.len() < PACKET_SIZE {
        return Err(ResmartError::malformed(
            0,
            format!("packet is {} bytes, need {PACKET_SIZE}", buf.len()),
        ));
    }

    let mut stream = ByteStream::new(&buf[..PACKET_SIZE]);

    stream.set_position(DATE_OFFSET);
    let timestamp = Timestamp {
        year: stream.read_u16_le()?,
        month: stream.read_byte()?,
        day: stream.read_byte()?,
        hour: stream.read_byte()?,
        minute: stream.read_byte()?,
        second: stream.read_byte()?,
        reserved: stream.read_byte()?,
    };

    stream.set_position(0);
    let mut fields = Vec::with_capacity(FIELD_COUNT);
    for _ in 0..FIELD_COUNT {
        fields.push(stream.read_u16_le()?);
    }

    Record::new(timestamp, fields)
}

/// Inverse of [`decode_packet`]; the unused region is zero-filled
pub fn encode_packet(record: &Record) -> [u8; PACKET_SIZE] {
    let mut buf = [0u8; PACKET_SIZE];

    for (i, value) in record.fields().iter().enumerate() {
        buf[2 * i..2 * i + 2].copy_from_slice(&value.to_le_bytes());
    }

    let ts = record.timestamp();
    buf[DATE_OFFSET..DATE_OFFSET + 2].copy_from_slice(&ts.year.to_le_bytes());
    buf[DATE_OFFSET + 2] = ts.month;
    buf[DATE_OFFSET + 3] = ts.day;
    buf[DATE_OFFSET + 4] = ts.hour;
    buf[DATE_OFFSET + 5] = ts.minute;
    buf[DATE_OFFSET + 6] = ts.second;
    buf[DATE_OFFSET + 7] = ts.reserved;

    buf
}
