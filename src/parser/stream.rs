use crate::error::{ResmartError, Result};
use crate::parser::packet::{decode_packet, PACKET_SIZE};
use crate::types::Record;

/// Little-endian byte reader over one packet
pub struct ByteStream<'a> {
    data: &'a [u8],
    pub pos: usize,
    end: usize,
    pub eof: bool,
}

impl<'a> ByteStream<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            end: data.len(),
            eof: data.is_empty(),
        }
    }

    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos;
        self.eof = pos >= self.end;
    }

    pub fn read_byte(&mut self) -> Result<u8> {
        if self.pos < self.end {
            let byte = self.data[self.pos];
            self.pos += 1;
            self.eof = self.pos >= self.end;
            Ok(byte)
        } else {
            self.eof = true;
            Err(ResmartError::malformed(self.pos, "unexpected end of packet"))
        }
    }

    pub fn read_u16_le(&mut self) -> Result<u16> {
        let lo = self.read_byte()? as u16;
        let hi = self.read_byte()? as u16;
        Ok(lo | (hi << 8))
    }
}

/// Iterator over the packets of one file's contents.
///
/// Yields one record per whole 256-byte block. A trailing partial block is
/// never decoded. After the first decode error the iterator is fused.
pub struct PacketStream<'a> {
    data: &'a [u8],
    pos: usize,
    failed: bool,
}

impl<'a> PacketStream<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            failed: false,
        }
    }

    /// Whole packets in the buffer
    pub fn packet_count(&self) -> usize {
        self.data.len() / PACKET_SIZE
    }

    /// Bytes after the last whole packet
    pub fn trailing_bytes(&self) -> usize {
        self.data.len() % PACKET_SIZE
    }
}

impl<'a> Iterator for PacketStream<'a> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos + PACKET_SIZE > self.data.len() {
            return None;
        }

        let offset = self.pos;
        self.pos += PACKET_SIZE;

        match decode_packet(&self.data[offset..offset + PACKET_SIZE]) {
            Ok(record) => Some(Ok(record)),
            Err(ResmartError::MalformedPacket { reason, .. }) => {
                self.failed = true;
                Some(Err(ResmartError::malformed(offset, reason)))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let remaining = (self.data.len() - self.pos) / PACKET_SIZE;
        (0, Some(remaining))
    }
}
