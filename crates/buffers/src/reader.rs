//! Cursor-tracking reader over a borrowed byte slice.

use crate::BufferError;

/// Reads big-endian fixed-width values from a byte slice.
///
/// Every read is bounds-checked; reading past the end returns
/// [`BufferError::EndOfBuffer`] and leaves the cursor where it was.
///
/// ```
/// use whenwhere_buffers::Reader;
///
/// let data = [0x01, 0x02, 0x03];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.u8().unwrap(), 0x01);
/// assert_eq!(reader.u16().unwrap(), 0x0203);
/// assert!(reader.u8().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    x: usize,
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, x: 0 }
    }

    /// Number of bytes left after the cursor.
    pub fn size(&self) -> usize {
        self.data.len() - self.x
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    #[inline]
    fn take<const N: usize>(&mut self) -> Result<[u8; N], BufferError> {
        let end = self.x + N;
        let bytes = self
            .data
            .get(self.x..end)
            .ok_or(BufferError::EndOfBuffer)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        self.x = end;
        Ok(out)
    }

    /// Returns the byte under the cursor without advancing.
    pub fn peek(&self) -> Result<u8, BufferError> {
        self.data.get(self.x).copied().ok_or(BufferError::EndOfBuffer)
    }

    #[inline]
    pub fn u8(&mut self) -> Result<u8, BufferError> {
        Ok(self.take::<1>()?[0])
    }

    #[inline]
    pub fn u16(&mut self) -> Result<u16, BufferError> {
        self.take().map(u16::from_be_bytes)
    }

    #[inline]
    pub fn u64(&mut self) -> Result<u64, BufferError> {
        self.take().map(u64::from_be_bytes)
    }

    #[inline]
    pub fn f64(&mut self) -> Result<f64, BufferError> {
        self.take().map(f64::from_be_bytes)
    }

    /// Skips `length` bytes.
    pub fn skip(&mut self, length: usize) -> Result<(), BufferError> {
        if length > self.size() {
            return Err(BufferError::EndOfBuffer);
        }
        self.x += length;
        Ok(())
    }
}
