//! Wire primitives shared by the instruction encoder and record decoder.
//!
//! The layout rules are fixed by the on-chain program: multi-byte integers
//! are little-endian, strings carry a 4-byte little-endian byte-length
//! prefix followed by UTF-8 payload, addresses are raw 32 bytes, bools are a
//! single 0/1 byte. There is no padding, no alignment, and no field
//! delimiter anywhere.

use opine_types::Address;

use crate::error::{DecodeError, DecodeResult};

/// Sequential bounds-checked reader over an encoded blob.
///
/// Every read verifies the remaining length before touching the buffer, so
/// truncated or corrupt data surfaces as a [`DecodeError`] instead of a
/// panic. The position only moves forward.
#[derive(Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, wanted: usize) -> DecodeResult<&'a [u8]> {
        if wanted > self.remaining() {
            return Err(DecodeError::UnexpectedEnd {
                offset: self.pos,
                wanted,
                remaining: self.remaining(),
            });
        }
        let slice = &self.buf[self.pos..self.pos + wanted];
        self.pos += wanted;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> DecodeResult<u8> {
        Ok(self.take(1)?[0])
    }

    /// Strict one-byte bool: 0 or 1, anything else is an error.
    pub fn read_bool(&mut self) -> DecodeResult<bool> {
        let offset = self.pos;
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            value => Err(DecodeError::InvalidBool { offset, value }),
        }
    }

    pub fn read_u32(&mut self) -> DecodeResult<u32> {
        let bytes = self.take(4)?;
        Ok(u32::from_le_bytes(bytes.try_into().unwrap()))
    }

    pub fn read_u64(&mut self) -> DecodeResult<u64> {
        let bytes = self.take(8)?;
        Ok(u64::from_le_bytes(bytes.try_into().unwrap()))
    }

    pub fn read_i64(&mut self) -> DecodeResult<i64> {
        let bytes = self.take(8)?;
        Ok(i64::from_le_bytes(bytes.try_into().unwrap()))
    }

    pub fn read_address(&mut self) -> DecodeResult<Address> {
        let bytes = self.take(32)?;
        Ok(Address::new(bytes.try_into().unwrap()))
    }

    /// Length-prefixed UTF-8 string. The prefix is read and checked before
    /// the payload is sliced: a prefix implying bytes beyond the buffer end
    /// is an [`DecodeError::UnexpectedEnd`], never an out-of-bounds read.
    pub fn read_string(&mut self) -> DecodeResult<String> {
        let len = self.read_u32()? as usize;
        let offset = self.pos;
        let bytes = self.take(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| DecodeError::InvalidUtf8 { offset })
    }
}

/// Append a length-prefixed UTF-8 string.
///
/// The empty string is exactly four zero bytes. The prefix counts bytes,
/// not characters.
pub fn put_string(out: &mut Vec<u8>, s: &str) {
    out.extend_from_slice(&(s.len() as u32).to_le_bytes());
    out.extend_from_slice(s.as_bytes());
}

/// Append a raw 32-byte address, no delimiter.
pub fn put_address(out: &mut Vec<u8>, address: &Address) {
    out.extend_from_slice(address.as_bytes());
}
