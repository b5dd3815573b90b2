//! Record name hashing.
//!
//! The game places a record in bucket `hash_name(name) % 256`. The decoder keeps the
//! hash of every record it reads, in file order, so tools can check or rebuild the
//! bucket placement without hashing names again.

use super::constants;

/// Hashes a canonical record name.
///
/// The hash is the sum of the ASCII-uppercased character codes, truncated to a
/// byte, which is also the bucket index the game expects the record in.
///
/// # Examples
///
/// ```
/// use d2cof_types::file::animdata::hash_name;
///
/// assert_eq!(hash_name("HD"), hash_name("hd"));
/// assert_eq!(hash_name("AB"), (b'A' as u32 + b'B' as u32) as u8);
/// ```
pub fn hash_name(name: &str) -> u8 {
	let sum = name
		.chars()
		.map(|c| c.to_ascii_uppercase() as u32)
		.fold(0u32, u32::wrapping_add);
	(sum % constants::BUCKET_COUNT as u32) as u8
}

/// Append-only log of record name hashes in decode order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashJournal {
	hashes: Vec<u8>,
}

impl HashJournal {
	/// Creates an empty journal sized for the largest possible file.
	pub(crate) fn new() -> Self {
		Self {
			hashes: Vec::with_capacity(constants::MAX_RECORDS),
		}
	}

	/// Hashes `name` and appends the result.
	pub(crate) fn record(&mut self, name: &str) -> u8 {
		let hash = hash_name(name);
		self.hashes.push(hash);
		hash
	}

	/// Number of hashes recorded.
	pub fn len(&self) -> usize {
		self.hashes.len()
	}

	/// Returns `true` if no record was decoded.
	pub fn is_empty(&self) -> bool {
		self.hashes.is_empty()
	}

	/// Maximum number of entries the format allows.
	pub fn capacity(&self) -> usize {
		constants::MAX_RECORDS
	}

	/// Hash of the `index`-th decoded record.
	pub fn get(&self, index: usize) -> Option<u8> {
		self.hashes.get(index).copied()
	}

	/// Iterates over the hashes in decode order.
	pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
		self.hashes.iter().copied()
	}

	/// All hashes in decode order.
	pub fn as_slice(&self) -> &[u8] {
		&self.hashes
	}
}
