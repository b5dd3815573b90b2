//! Error types for file format parsing and manipulation.

use std::fmt::Display;

use thiserror::Error;

/// Identifies which file format an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
	/// `AnimData.d2` animation metadata table
	AnimData,
	/// `.COF` composite object file
	Cof,
}

impl Display for FileType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::AnimData => write!(f, "AnimData"),
			Self::Cof => write!(f, "COF"),
		}
	}
}

/// Coarse classification of an [`AssetError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// The cursor ran out of data in the middle of a field
	TruncatedInput,
	/// The data is long enough but violates a structural rule of the format
	StructuralViolation,
	/// Decoding finished without consuming exactly the whole buffer
	TrailingDataMismatch,
	/// A mutation was requested with out-of-range arguments
	InvalidArgument,
	/// Underlying reader failure
	Io,
}

/// Errors that can occur when decoding or manipulating asset files
#[derive(Debug, Error)]
pub enum AssetError {
	/// Not enough data to read a field
	#[error(
		"{file_type}: insufficient data for {field} at offset {offset}: expected {expected} bytes, got {actual} bytes"
	)]
	InsufficientData {
		/// File type being decoded
		file_type: FileType,
		/// Name of the field being read
		field: &'static str,
		/// Byte offset where the read started
		offset: usize,
		/// Number of bytes the field needs
		expected: usize,
		/// Number of bytes left in the buffer
		actual: usize,
	},

	/// A bucket declares more records than the format allows
	#[error("AnimData: malformed bucket {bucket}: {count} records declared, at most {max} allowed")]
	BucketOverflow {
		/// Bucket index (0-255)
		bucket: usize,
		/// Declared record count
		count: u32,
		/// Maximum records per bucket
		max: usize,
	},

	/// A record name field is not zero-terminated
	#[error(
		"AnimData: record {record} in bucket {bucket} is missing the name terminator (offset {offset})"
	)]
	MissingTerminator {
		/// Bucket index (0-255)
		bucket: usize,
		/// Record index within the bucket
		record: usize,
		/// Byte offset of the name field
		offset: usize,
	},

	/// The decoder stopped before (or after) the end of the buffer
	#[error("AnimData: unable to parse animation data: consumed {consumed} of {total} bytes")]
	TrailingData {
		/// Bytes consumed by the decoder
		consumed: usize,
		/// Total buffer length
		total: usize,
	},

	/// Index or size out of range for a mutation
	#[error("{file_type}: {message}")]
	OutOfRange {
		/// File type being manipulated
		file_type: FileType,
		/// Description of the violation
		message: String,
	},

	/// IO error
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl AssetError {
	/// Shorthand for [`AssetError::InsufficientData`].
	pub fn insufficient_data(
		file_type: FileType,
		field: &'static str,
		offset: usize,
		expected: usize,
		actual: usize,
	) -> Self {
		Self::InsufficientData {
			file_type,
			field,
			offset,
			expected,
			actual,
		}
	}

	/// Shorthand for [`AssetError::OutOfRange`].
	pub fn out_of_range(file_type: FileType, message: impl Into<String>) -> Self {
		Self::OutOfRange {
			file_type,
			message: message.into(),
		}
	}

	/// Returns the error classification.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::InsufficientData {
				..
			} => ErrorKind::TruncatedInput,
			Self::BucketOverflow {
				..
			}
			| Self::MissingTerminator {
				..
			} => ErrorKind::StructuralViolation,
			Self::TrailingData {
				..
			} => ErrorKind::TrailingDataMismatch,
			Self::OutOfRange {
				..
			} => ErrorKind::InvalidArgument,
			Self::Io(_) => ErrorKind::Io,
		}
	}

	/// Returns the file type the error belongs to, if known.
	pub fn file_type(&self) -> Option<FileType> {
		match self {
			Self::InsufficientData {
				file_type,
				..
			}
			| Self::OutOfRange {
				file_type,
				..
			} => Some(*file_type),
			Self::BucketOverflow {
				..
			}
			| Self::MissingTerminator {
				..
			}
			| Self::TrailingData {
				..
			} => Some(FileType::AnimData),
			Self::Io(_) => None,
		}
	}
}
