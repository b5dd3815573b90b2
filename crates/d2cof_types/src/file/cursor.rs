//! Sequential byte cursor shared by the format decoders.
//!
//! [`StreamReader`] consumes a borrowed buffer front to back. Every read names the
//! field being read so a short buffer produces an [`AssetError::InsufficientData`]
//! pointing at the exact field and offset. A failed read does not move the cursor.
//!
//! [`StreamWriter`] is the append-only counterpart used by encoders (and by tests
//! to synthesize fixtures). Multi-byte integers are little-endian in both.

use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt};

use crate::file::{AssetError, FileType};

/// Sequential little-endian reader over an in-memory buffer.
#[derive(Debug, Clone)]
pub struct StreamReader<'a> {
	inner: Cursor<&'a [u8]>,
	file_type: FileType,
}

impl<'a> StreamReader<'a> {
	/// Creates a reader positioned at the start of `data`.
	///
	/// `file_type` is attached to any error raised by this reader.
	pub fn new(data: &'a [u8], file_type: FileType) -> Self {
		Self {
			inner: Cursor::new(data),
			file_type,
		}
	}

	/// Current byte offset from the start of the buffer.
	pub fn position(&self) -> usize {
		self.inner.position() as usize
	}

	/// Total length of the underlying buffer.
	pub fn len(&self) -> usize {
		self.inner.get_ref().len()
	}

	/// Returns `true` when the underlying buffer is empty.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Number of bytes not yet consumed.
	pub fn remaining(&self) -> usize {
		self.len().saturating_sub(self.position())
	}

	/// Returns `true` once every byte has been consumed.
	pub fn is_exhausted(&self) -> bool {
		self.remaining() == 0
	}

	fn ensure(&self, count: usize, field: &'static str) -> Result<(), AssetError> {
		let remaining = self.remaining();
		if remaining < count {
			return Err(AssetError::insufficient_data(
				self.file_type,
				field,
				self.position(),
				count,
				remaining,
			));
		}
		Ok(())
	}

	/// Reads one byte.
	pub fn read_u8(&mut self, field: &'static str) -> Result<u8, AssetError> {
		self.ensure(1, field)?;
		Ok(self.inner.read_u8()?)
	}

	/// Reads a little-endian `u16`.
	pub fn read_u16(&mut self, field: &'static str) -> Result<u16, AssetError> {
		self.ensure(2, field)?;
		Ok(self.inner.read_u16::<LittleEndian>()?)
	}

	/// Reads a little-endian `u32`.
	pub fn read_u32(&mut self, field: &'static str) -> Result<u32, AssetError> {
		self.ensure(4, field)?;
		Ok(self.inner.read_u32::<LittleEndian>()?)
	}

	/// Borrows the next `count` bytes and advances past them.
	pub fn read_bytes(&mut self, count: usize, field: &'static str) -> Result<&'a [u8], AssetError> {
		self.ensure(count, field)?;
		let start = self.position();
		let data: &'a [u8] = *self.inner.get_ref();
		self.inner.set_position((start + count) as u64);
		Ok(&data[start..start + count])
	}

	/// Copies the next `N` bytes into a fixed-size array.
	pub fn read_array<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N], AssetError> {
		let mut out = [0u8; N];
		out.copy_from_slice(self.read_bytes(N, field)?);
		Ok(out)
	}

	/// Discards the next `count` bytes.
	pub fn skip(&mut self, count: usize, field: &'static str) -> Result<(), AssetError> {
		self.read_bytes(count, field).map(|_| ())
	}
}

/// Append-only little-endian writer.
#[derive(Debug, Clone, Default)]
pub struct StreamWriter {
	buffer: Vec<u8>,
}

impl StreamWriter {
	/// Creates an empty writer.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty writer with room for `capacity` bytes.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			buffer: Vec::with_capacity(capacity),
		}
	}

	/// Number of bytes written so far.
	pub fn position(&self) -> usize {
		self.buffer.len()
	}

	/// Appends one byte.
	pub fn write_u8(&mut self, value: u8) {
		self.buffer.push(value);
	}

	/// Appends a little-endian `u16`.
	pub fn write_u16(&mut self, value: u16) {
		self.buffer.extend_from_slice(&value.to_le_bytes());
	}

	/// Appends a little-endian `u32`.
	pub fn write_u32(&mut self, value: u32) {
		self.buffer.extend_from_slice(&value.to_le_bytes());
	}

	/// Appends raw bytes.
	pub fn write_bytes(&mut self, bytes: &[u8]) {
		self.buffer.extend_from_slice(bytes);
	}

	/// Appends `count` zero bytes.
	pub fn write_zeros(&mut self, count: usize) {
		self.buffer.resize(self.buffer.len() + count, 0);
	}

	/// Borrows the bytes written so far.
	pub fn as_bytes(&self) -> &[u8] {
		&self.buffer
	}

	/// Consumes the writer and returns the buffer.
	pub fn into_bytes(self) -> Vec<u8> {
		self.buffer
	}
}
