//! File type support for `d2cof-rs` project.

mod error;

pub mod animdata;
pub mod cof;
pub mod cursor;
pub mod event;

// Re-export unified error type
pub use error::{AssetError, ErrorKind, FileType};

pub use cursor::{StreamReader, StreamWriter};
pub use event::FrameEvent;

// Re-export main file types
pub use animdata::{
	AnimationRecord, Bucket, File as AnimDataFile, HashJournal, MisplacedRecord, hash_name,
};
pub use cof::{
	CofLayer, CompositeType, DrawEffect, File as CofFile, PriorityMatrix, WeaponClass,
};

/// Decodes an `AnimData.d2` buffer.
///
/// Equivalent to [`AnimDataFile::from_bytes`].
pub fn decode_animation_metadata(data: &[u8]) -> Result<AnimDataFile, AssetError> {
	AnimDataFile::from_bytes(data)
}

/// Creates an empty COF document.
pub fn new_composite_document() -> CofFile {
	CofFile::new()
}

/// Decodes a `.COF` buffer.
///
/// Equivalent to [`CofFile::from_bytes`].
pub fn decode_composite(data: &[u8]) -> Result<CofFile, AssetError> {
	CofFile::from_bytes(data)
}

/// Encodes a COF document.
pub fn encode_composite(document: &CofFile) -> Vec<u8> {
	document.to_bytes()
}
