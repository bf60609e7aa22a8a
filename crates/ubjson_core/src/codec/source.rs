use std::io::{self, Read};

use crate::codec::{Result, UbjError};

/// Sequential supplier of wire bytes for the decoder.
///
/// Multi-byte integers and floats are always read most-significant byte
/// first, independent of host byte order.
pub trait ByteSource {
	/// Return the number of bytes consumed so far (absolute offset for slices).
	fn pos(&self) -> usize;

	/// Fill `buf` completely or fail with [`UbjError::UnexpectedEof`].
	fn read_exact_into(&mut self, buf: &mut [u8]) -> Result<()>;

	/// Read exactly `len` bytes into a fresh buffer.
	fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>>;

	/// Read one byte.
	fn read_u8(&mut self) -> Result<u8> {
		let [byte] = self.read_array::<1>()?;
		Ok(byte)
	}

	/// Read a fixed-size byte array.
	fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let mut buf = [0_u8; N];
		self.read_exact_into(&mut buf)?;
		Ok(buf)
	}

	/// Read a signed 8-bit integer.
	fn read_i8(&mut self) -> Result<i8> {
		Ok(i8::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian `i16`.
	fn read_i16(&mut self) -> Result<i16> {
		Ok(i16::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian `i32`.
	fn read_i32(&mut self) -> Result<i32> {
		Ok(i32::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian `i64`.
	fn read_i64(&mut self) -> Result<i64> {
		Ok(i64::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian IEEE-754 single.
	fn read_f32(&mut self) -> Result<f32> {
		Ok(f32::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian IEEE-754 double.
	fn read_f64(&mut self) -> Result<f64> {
		Ok(f64::from_be_bytes(self.read_array()?))
	}
}

/// Simple bounded cursor over an immutable byte slice.
pub struct SliceSource<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> SliceSource<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Create a cursor at an explicit byte offset.
	pub fn at(bytes: &'a [u8], pos: usize) -> Self {
		Self { bytes, pos }
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(UbjError::UnexpectedEof {
				at: self.pos,
				need: n,
				have: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}
}

impl ByteSource for SliceSource<'_> {
	fn pos(&self) -> usize {
		self.pos
	}

	fn read_exact_into(&mut self, buf: &mut [u8]) -> Result<()> {
		let raw = self.read_exact(buf.len())?;
		buf.copy_from_slice(raw);
		Ok(())
	}

	fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
		Ok(self.read_exact(len)?.to_vec())
	}
}

/// Advance-only source over any [`Read`] implementation.
pub struct ReaderSource<R> {
	reader: R,
	consumed: usize,
}

impl<R: Read> ReaderSource<R> {
	/// Wrap a reader; offsets are counted from the current stream position.
	pub fn new(reader: R) -> Self {
		Self { reader, consumed: 0 }
	}

	/// Return the wrapped reader.
	pub fn into_inner(self) -> R {
		self.reader
	}
}

impl<R: Read> ByteSource for ReaderSource<R> {
	fn pos(&self) -> usize {
		self.consumed
	}

	fn read_exact_into(&mut self, buf: &mut [u8]) -> Result<()> {
		let mut filled = 0;
		while filled < buf.len() {
			match self.reader.read(&mut buf[filled..]) {
				Ok(0) => {
					return Err(UbjError::UnexpectedEof {
						at: self.consumed,
						need: buf.len(),
						have: filled,
					});
				}
				Ok(read) => filled += read,
				Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
				Err(err) => return Err(err.into()),
			}
		}

		self.consumed += filled;
		Ok(())
	}

	fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
		// Allocation tracks bytes actually read, not the declared length.
		let mut out = Vec::new();
		let read = (&mut self.reader).take(len as u64).read_to_end(&mut out)?;
		if read < len {
			return Err(UbjError::UnexpectedEof {
				at: self.consumed,
				need: len,
				have: read,
			});
		}

		self.consumed += read;
		Ok(out)
	}
}
