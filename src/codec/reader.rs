use crate::error::{Error, Result};

/// Binary reader for AreaMapTiles data
pub struct BinaryReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BinaryReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(Error::Truncated);
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        if self.remaining() < 1 {
            return Err(Error::Truncated);
        }
        let v = self.data[self.pos];
        self.pos += 1;
        Ok(v)
    }

    pub fn read_u32_le(&mut self) -> Result<u32> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_i32_le(&mut self) -> Result<i32> {
        Ok(self.read_u32_le()? as i32)
    }

    /// Read a 7-bit encoded int (low groups first, high bit = continuation).
    /// At most 5 bytes; a fifth byte may only carry the top 4 bits.
    pub fn read_7bit_encoded_i32(&mut self) -> Result<i32> {
        let mut result: u32 = 0;
        for shift in (0..28).step_by(7) {
            let byte = self.read_u8()?;
            result |= ((byte & 0x7F) as u32) << shift;
            if byte & 0x80 == 0 {
                return Ok(result as i32);
            }
        }
        let last = self.read_u8()?;
        if last > 0x0F {
            return Err(Error::InvalidStringLength);
        }
        result |= (last as u32) << 28;
        Ok(result as i32)
    }

    /// Read a length-prefixed string (7-bit encoded byte length, then UTF-8).
    pub fn read_string(&mut self) -> Result<String> {
        let len = self.read_7bit_encoded_i32()?;
        if len < 0 {
            return Err(Error::InvalidStringLength);
        }
        let bytes = self.read_bytes(len as usize)?;
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }

    /// Read an i32 count followed by that many raw bytes. Negative counts read nothing.
    pub fn read_byte_array(&mut self) -> Result<Vec<u8>> {
        let len = self.read_i32_le()?.max(0) as usize;
        Ok(self.read_bytes(len)?.to_vec())
    }
}
