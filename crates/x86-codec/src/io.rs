//! Byte sources for the decoder and byte sinks for the encoder.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Pull-based byte supplier consumed by the decoder.
pub trait ByteSource {
    /// Next byte, or `None` when the source is exhausted.
    fn next_byte(&mut self) -> Option<u8>;
}

impl ByteSource for &[u8] {
    #[inline]
    fn next_byte(&mut self) -> Option<u8> {
        let (&first, rest) = self.split_first()?;
        *self = rest;
        Some(first)
    }
}

impl ByteSource for core::slice::Iter<'_, u8> {
    #[inline]
    fn next_byte(&mut self) -> Option<u8> {
        self.next().copied()
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    #[inline]
    fn next_byte(&mut self) -> Option<u8> {
        (**self).next_byte()
    }
}

/// Failure reported by a [`ByteSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SinkError {
    /// The sink has no room for the bytes.
    Full {
        /// Bytes the sink can still accept.
        remaining: usize,
        /// Bytes that were offered.
        requested: usize,
    },
    /// The underlying writer failed.
    Io {
        /// Writer error description.
        detail: String,
    },
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkError::Full {
                remaining,
                requested,
            } => {
                write!(
                    f,
                    "sink full ({} byte(s) requested, {} remaining)",
                    requested, remaining
                )
            }
            SinkError::Io { detail } => write!(f, "write failed: {}", detail),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SinkError {}

/// Push-based byte consumer fed by the encoder.
///
/// The encoder hands over a complete instruction with a single
/// [`ByteSink::write_all`] call, so sinks that check capacity up front never
/// see a partial instruction.
pub trait ByteSink {
    /// Appends one byte.
    fn write_byte(&mut self, byte: u8) -> Result<(), SinkError>;

    /// Appends `bytes`.
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), SinkError> {
        for &b in bytes {
            self.write_byte(b)?;
        }
        Ok(())
    }
}

impl ByteSink for Vec<u8> {
    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<(), SinkError> {
        self.push(byte);
        Ok(())
    }

    #[inline]
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), SinkError> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<(), SinkError> {
        (**self).write_byte(byte)
    }

    #[inline]
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), SinkError> {
        (**self).write_all(bytes)
    }
}

/// Sink writing into a caller-provided buffer, e.g. for in-place patching.
#[derive(Debug)]
pub struct SliceSink<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> SliceSink<'a> {
    /// Sink starting at the beginning of `buf`.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes written so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Room left in the buffer.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }
}

impl ByteSink for SliceSink<'_> {
    fn write_byte(&mut self, byte: u8) -> Result<(), SinkError> {
        self.write_all(&[byte])
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<(), SinkError> {
        let remaining = self.remaining();
        let dst = self
            .buf
            .get_mut(self.pos..self.pos + bytes.len())
            .ok_or(SinkError::Full {
                remaining,
                requested: bytes.len(),
            })?;
        dst.copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(())
    }
}

/// Adapter from [`std::io::Write`] to [`ByteSink`].
///
/// An I/O error in the middle of `write_all` may leave a partial
/// instruction in the writer.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSink<W>(pub W);

#[cfg(feature = "std")]
impl<W: std::io::Write> IoSink<W> {
    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.0
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> ByteSink for IoSink<W> {
    fn write_byte(&mut self, byte: u8) -> Result<(), SinkError> {
        self.write_all(&[byte])
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<(), SinkError> {
        self.0.write_all(bytes).map_err(|e| SinkError::Io {
            detail: alloc::format!("{}", e),
        })
    }
}

// ─── InstrBytes: stack-allocated instruction buffer ────────────────────

/// Capacity of [`InstrBytes`]: one byte beyond the architectural maximum so
/// an over-long encoding is detected rather than silently truncated.
pub const INSTR_BYTES_CAPACITY: usize = 16;

/// Stack-allocated instruction byte buffer; the encoder stages every
/// instruction here before handing it to the caller's sink.
#[derive(Clone, Copy)]
pub struct InstrBytes {
    data: [u8; INSTR_BYTES_CAPACITY],
    len: u8,
}

impl InstrBytes {
    /// Create an empty buffer.
    #[inline]
    pub const fn new() -> Self {
        Self {
            data: [0; INSTR_BYTES_CAPACITY],
            len: 0,
        }
    }

    /// Create a buffer pre-filled from a byte slice; `None` if it does not fit.
    pub fn from_slice(src: &[u8]) -> Option<Self> {
        let mut buf = Self::new();
        buf.extend_from_slice(src).then_some(buf)
    }

    /// Append a single byte. Returns `false` when the buffer is full.
    #[inline]
    pub fn push(&mut self, byte: u8) -> bool {
        match self.data.get_mut(self.len as usize) {
            Some(slot) => {
                *slot = byte;
                self.len += 1;
                true
            }
            None => false,
        }
    }

    /// Append a slice of bytes. Returns `false` (leaving the buffer
    /// unchanged) when they do not fit.
    #[inline]
    pub fn extend_from_slice(&mut self, bytes: &[u8]) -> bool {
        let start = self.len as usize;
        match self.data.get_mut(start..start + bytes.len()) {
            Some(dst) => {
                dst.copy_from_slice(bytes);
                self.len = (start + bytes.len()) as u8;
                true
            }
            None => false,
        }
    }

    /// Number of bytes in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Convert to a heap-allocated `Vec<u8>`.
    #[inline]
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_ref().to_vec()
    }
}

impl Default for InstrBytes {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl core::ops::Deref for InstrBytes {
    type Target = [u8];
    #[inline]
    fn deref(&self) -> &[u8] {
        &self.data[..self.len as usize]
    }
}

impl core::ops::DerefMut for InstrBytes {
    #[inline]
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.data[..self.len as usize]
    }
}

impl AsRef<[u8]> for InstrBytes {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self
    }
}

impl fmt::Debug for InstrBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for InstrBytes {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl Eq for InstrBytes {}

impl PartialEq<[u8]> for InstrBytes {
    fn eq(&self, other: &[u8]) -> bool {
        **self == *other
    }
}

impl PartialEq<Vec<u8>> for InstrBytes {
    fn eq(&self, other: &Vec<u8>) -> bool {
        **self == **other
    }
}

impl ByteSink for InstrBytes {
    fn write_byte(&mut self, byte: u8) -> Result<(), SinkError> {
        if self.push(byte) {
            Ok(())
        } else {
            Err(SinkError::Full {
                remaining: 0,
                requested: 1,
            })
        }
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<(), SinkError> {
        if self.extend_from_slice(bytes) {
            Ok(())
        } else {
            Err(SinkError::Full {
                remaining: INSTR_BYTES_CAPACITY - self.len(),
                requested: bytes.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn slice_source_advances() {
        let bytes = [1u8, 2, 3];
        let mut src: &[u8] = &bytes;
        assert_eq!(src.next_byte(), Some(1));
        assert_eq!(src, &[2, 3]);
        assert_eq!(src.next_byte(), Some(2));
        assert_eq!(src.next_byte(), Some(3));
        assert_eq!(src.next_byte(), None);
    }

    #[test]
    fn iter_source_and_mut_ref_forwarding() {
        let bytes = [0xAAu8, 0xBB];
        let mut it = bytes.iter();
        let src = &mut it;
        assert_eq!(src.next_byte(), Some(0xAA));
        assert_eq!(it.next_byte(), Some(0xBB));
        assert_eq!(it.next_byte(), None);
    }

    #[test]
    fn vec_sink_appends() {
        let mut out = vec![0x90u8];
        out.write_all(&[0xEB, 0x10]).unwrap();
        out.write_byte(0xCC).unwrap();
        assert_eq!(out, vec![0x90, 0xEB, 0x10, 0xCC]);
    }

    #[test]
    fn slice_sink_is_all_or_nothing() {
        let mut buf = [0u8; 3];
        let mut sink = SliceSink::new(&mut buf);
        sink.write_all(&[1, 2]).unwrap();
        let err = sink.write_all(&[3, 4]).unwrap_err();
        assert_eq!(
            err,
            SinkError::Full {
                remaining: 1,
                requested: 2
            }
        );
        assert_eq!(sink.position(), 2);
        assert_eq!(buf, [1, 2, 0]);
    }

    #[test]
    fn instr_bytes_capacity() {
        let mut buf = InstrBytes::new();
        assert!(buf.extend_from_slice(&[0u8; 15]));
        assert!(buf.push(0x90));
        assert!(!buf.push(0x90));
        assert!(!buf.extend_from_slice(&[1]));
        assert_eq!(buf.len(), INSTR_BYTES_CAPACITY);
        assert!(InstrBytes::from_slice(&[0u8; 17]).is_none());
    }

    #[test]
    fn instr_bytes_equality_and_sink() {
        let mut buf = InstrBytes::new();
        buf.write_all(&[0xEB, 0x10]).unwrap();
        assert_eq!(buf, vec![0xEB, 0x10]);
        assert_eq!(buf.to_vec(), vec![0xEB, 0x10]);
        assert!(buf.write_all(&[0u8; 15]).is_err());
        assert_eq!(buf.len(), 2);
    }

    #[cfg(feature = "std")]
    #[test]
    fn io_sink_writes_through() {
        let mut sink = IoSink(std::io::Cursor::new(vec![]));
        sink.write_all(&[0xC3]).unwrap();
        assert_eq!(sink.into_inner().into_inner(), vec![0xC3]);
    }
}
