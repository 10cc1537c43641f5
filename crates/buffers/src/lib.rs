//! Fixed-width binary buffers for the whenwhere token layouts.
//!
//! All multi-byte values are big-endian.
//!
//! # Example
//!
//! ```
//! use whenwhere_buffers::{Reader, Writer};
//!
//! let mut writer = Writer::with_capacity(11);
//! writer.u8f64(1, 1_614_600_000_000.0);
//! writer.u16(42);
//! let data = writer.flush();
//!
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.u8().unwrap(), 1);
//! assert_eq!(reader.f64().unwrap(), 1_614_600_000_000.0);
//! assert_eq!(reader.u16().unwrap(), 42);
//! assert!(reader.is_empty());
//! ```

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::Writer;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    /// A read asked for more bytes than remain after the cursor.
    #[error("unexpected end of buffer")]
    EndOfBuffer,
}
