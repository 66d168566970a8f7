/// Binary writer for AreaMapTiles data
pub struct BinaryWriter {
    data: Vec<u8>,
}

impl BinaryWriter {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { data: Vec::with_capacity(capacity) }
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    pub fn write_u8(&mut self, v: u8) {
        self.data.push(v);
    }

    pub fn write_i32_le(&mut self, v: i32) {
        self.data.extend_from_slice(&v.to_le_bytes());
    }

    /// Write a 7-bit encoded int
    pub fn write_7bit_encoded_i32(&mut self, v: i32) {
        let mut v = v as u32;
        while v >= 0x80 {
            self.write_u8((v as u8) | 0x80);
            v >>= 7;
        }
        self.write_u8(v as u8);
    }

    /// Write a length-prefixed UTF-8 string
    pub fn write_string(&mut self, s: &str) {
        self.write_7bit_encoded_i32(s.len() as i32);
        self.write_bytes(s.as_bytes());
    }

    /// Write an i32 count followed by the raw bytes
    pub fn write_byte_array(&mut self, bytes: &[u8]) {
        self.write_i32_le(bytes.len() as i32);
        self.write_bytes(bytes);
    }
}

impl Default for BinaryWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::reader::BinaryReader;

    #[test]
    fn test_7bit_encoding_boundaries() {
        let mut writer = BinaryWriter::new();
        writer.write_7bit_encoded_i32(127);
        writer.write_7bit_encoded_i32(128);
        writer.write_7bit_encoded_i32(300);
        assert_eq!(writer.into_vec(), vec![0x7F, 0x80, 0x01, 0xAC, 0x02]);
    }

    #[test]
    fn test_long_string() {
        let long = "x".repeat(200);
        let mut writer = BinaryWriter::new();
        writer.write_string(&long);

        let data = writer.into_vec();
        assert_eq!(&data[..2], &[0xC8, 0x01]);

        let mut reader = BinaryReader::new(&data);
        assert_eq!(reader.read_string().unwrap(), long);
        assert!(reader.is_empty());
    }
}
