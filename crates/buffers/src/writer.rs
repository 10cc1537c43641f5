//! Append-only big-endian writer.

/// Accumulates fixed-width big-endian values into a byte vector.
///
/// ```
/// use whenwhere_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(0x01);
/// writer.u16(0x0203);
/// assert_eq!(writer.flush(), [0x01, 0x02, 0x03]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Writer {
    uint8: Vec<u8>,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocates room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            uint8: Vec::with_capacity(capacity),
        }
    }

    /// Returns the written bytes and leaves the writer empty.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.uint8)
    }

    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.uint8.push(val);
    }

    #[inline]
    pub fn u16(&mut self, val: u16) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    #[inline]
    pub fn u64(&mut self, val: u64) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    #[inline]
    pub fn f64(&mut self, val: f64) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes a one-byte tag followed by a 64-bit float.
    #[inline]
    pub fn u8f64(&mut self, tag: u8, val: f64) {
        self.u8(tag);
        self.f64(val);
    }
}
