use core::cmp;

use crate::error::Error;

/// Forward-only reader over an instruction buffer.
pub struct Bytes<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Bytes<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Creates a reader that never looks past `limit` bytes.
    pub fn with_limit(data: &'a [u8], limit: usize) -> Self {
        Self::new(&data[..cmp::min(limit, data.len())])
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn as_slice(&self) -> &'a [u8] {
        self.data
    }

    pub fn tail(&self) -> &'a [u8] {
        &self.data[self.offset..]
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    pub fn peek_u8(&self) -> Option<u8> {
        self.data.get(self.offset).copied()
    }

    pub fn peek_u8_at(&self, ahead: usize) -> Option<u8> {
        self.data.get(self.offset + ahead).copied()
    }

    pub fn read(&mut self, len: usize) -> Result<&'a [u8], Error> {
        if self.offset + len > self.data.len() {
            return Err(Error::More(self.offset + len));
        }
        let bytes = &self.data[self.offset..self.offset + len];
        self.offset += len;
        Ok(bytes)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let mut raw = [0; N];
        raw.copy_from_slice(self.read(N)?);
        Ok(raw)
    }

    pub fn read_u8(&mut self) -> Result<u8, Error> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, Error> {
        Ok(u16::from_le_bytes(self.read_array::<2>()?))
    }

    pub fn read_u32(&mut self) -> Result<u32, Error> {
        Ok(u32::from_le_bytes(self.read_array::<4>()?))
    }

    pub fn read_u64(&mut self) -> Result<u64, Error> {
        Ok(u64::from_le_bytes(self.read_array::<8>()?))
    }

    pub fn read_i8(&mut self) -> Result<i8, Error> {
        Ok(self.read_u8()? as i8)
    }

    pub fn read_i16(&mut self) -> Result<i16, Error> {
        Ok(self.read_u16()? as i16)
    }

    pub fn read_i32(&mut self) -> Result<i32, Error> {
        Ok(self.read_u32()? as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_little_endian() {
        let mut bytes = Bytes::new(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07]);
        assert_eq!(bytes.read_u8(), Ok(0x01));
        assert_eq!(bytes.read_u16(), Ok(0x0302));
        assert_eq!(bytes.read_u32(), Ok(0x07060504));
        assert_eq!(bytes.remaining(), 0);
    }

    #[test]
    fn read_past_end() {
        let mut bytes = Bytes::new(&[0xff, 0xff]);
        assert_eq!(bytes.read_i8(), Ok(-1));
        assert_eq!(bytes.read_u32(), Err(Error::More(5)));
        // failed reads do not move the cursor
        assert_eq!(bytes.offset(), 1);
        assert_eq!(bytes.read_i8(), Ok(-1));
    }

    #[test]
    fn limit() {
        let data = [0x90; 20];
        let mut bytes = Bytes::with_limit(&data, 15);
        assert_eq!(bytes.len(), 15);
        assert!(bytes.read(15).is_ok());
        assert_eq!(bytes.peek_u8(), None);
        assert_eq!(bytes.read_u8(), Err(Error::More(16)));
    }
}
