//! `AnimData.d2` table structure and decoding.

use std::{collections::HashMap, fmt::Display, io::Read};

use log::{debug, trace};

use super::{
	constants,
	hash::{HashJournal, hash_name},
	record::{AnimationRecord, Bucket},
};
use crate::file::{AssetError, FileType, FrameEvent, StreamReader};

/// Position of a record inside the bucket table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RecordRef {
	bucket: usize,
	slot: usize,
}

/// A record stored in a bucket other than the one its name hashes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MisplacedRecord {
	/// Bucket the record was read from
	pub bucket: usize,
	/// Index of the record within that bucket
	pub slot: usize,
	/// Canonical record name
	pub name: String,
	/// Bucket selected by [`hash_name`]
	pub expected_bucket: usize,
}

/// Decoded `AnimData.d2` table.
///
/// The table always holds 256 buckets. Records are also indexed by name: a name
/// may appear several times, and the entries are kept in the order they were
/// read so that [`File::record`] can return the last one.
///
/// # Examples
///
/// ```no_run
/// use d2cof_types::file::animdata::File;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let data = std::fs::read("AnimData.d2")?;
/// let animdata = File::from_bytes(&data)?;
///
/// if let Some(record) = animdata.record("AMA1HTH") {
///     println!("{} frames at {:.1} fps", record.frame_count(), record.fps());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
	buckets: Vec<Bucket>,
	entries: HashMap<String, Vec<RecordRef>>,
	journal: HashJournal,
}

impl File {
	/// Decodes a table from bytes.
	///
	/// # Errors
	///
	/// Returns an error if:
	/// - The buffer ends in the middle of a field ([`AssetError::InsufficientData`])
	/// - A bucket declares more than 67 records ([`AssetError::BucketOverflow`])
	/// - A name field's last byte is not zero ([`AssetError::MissingTerminator`])
	/// - Bytes remain after the 256th bucket ([`AssetError::TrailingData`])
	pub fn from_bytes(data: &[u8]) -> Result<Self, AssetError> {
		let mut reader = StreamReader::new(data, FileType::AnimData);
		let mut buckets = Vec::with_capacity(constants::BUCKET_COUNT);
		let mut entries: HashMap<String, Vec<RecordRef>> = HashMap::new();
		let mut journal = HashJournal::new();

		for bucket_index in 0..constants::BUCKET_COUNT {
			let count = reader.read_u32("bucket record count")?;
			if count as usize > constants::MAX_RECORDS_PER_BUCKET {
				return Err(AssetError::BucketOverflow {
					bucket: bucket_index,
					count,
					max: constants::MAX_RECORDS_PER_BUCKET,
				});
			}
			trace!("bucket {bucket_index}: {count} records at offset {}", reader.position() - 4);

			let mut bucket = Bucket::with_capacity(count as usize);
			for record_index in 0..count as usize {
				let record = read_record(&mut reader, bucket_index, record_index)?;
				journal.record(record.name());

				let name = record.name().to_string();
				let slot = bucket.push(record);
				entries.entry(name).or_default().push(RecordRef {
					bucket: bucket_index,
					slot,
				});
			}
			buckets.push(bucket);
		}

		if !reader.is_exhausted() {
			return Err(AssetError::TrailingData {
				consumed: reader.position(),
				total: reader.len(),
			});
		}

		debug!(
			"decoded AnimData: {} records, {} distinct names, {} bytes",
			journal.len(),
			entries.len(),
			data.len()
		);

		Ok(Self {
			buckets,
			entries,
			journal,
		})
	}

	/// Reads the whole stream and decodes it.
	///
	/// # Errors
	///
	/// Returns an error if reading fails or the data is invalid.
	pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, AssetError> {
		let mut data = Vec::new();
		reader.read_to_end(&mut data)?;
		Self::from_bytes(&data)
	}

	/// Returns every distinct record name. The order is unspecified.
	pub fn record_names(&self) -> Vec<&str> {
		self.entries.keys().map(String::as_str).collect()
	}

	/// Returns every record named `name`, in decode order.
	///
	/// An unknown name yields an empty list.
	pub fn records(&self, name: &str) -> Vec<&AnimationRecord> {
		self.entries
			.get(name)
			.map(|refs| refs.iter().filter_map(|r| self.resolve(*r)).collect())
			.unwrap_or_default()
	}

	/// Returns the most recently decoded record named `name`.
	///
	/// The table stores successive overrides under the same name; the last one
	/// read is the one in effect.
	pub fn record(&self, name: &str) -> Option<&AnimationRecord> {
		self.entries.get(name).and_then(|refs| refs.last()).and_then(|r| self.resolve(*r))
	}

	/// All 256 buckets in file order.
	pub fn buckets(&self) -> &[Bucket] {
		&self.buckets
	}

	/// Bucket at `index` (0-255).
	pub fn bucket(&self, index: usize) -> Option<&Bucket> {
		self.buckets.get(index)
	}

	/// Total number of records across all buckets.
	pub fn record_count(&self) -> usize {
		self.buckets.iter().map(Bucket::len).sum()
	}

	/// Iterates over every record in file order.
	pub fn iter(&self) -> impl Iterator<Item = &AnimationRecord> {
		self.buckets.iter().flat_map(|bucket| bucket.records().iter())
	}

	/// Name hashes of every record, in file order.
	pub fn hash_journal(&self) -> &HashJournal {
		&self.journal
	}

	/// Lists records stored in a bucket other than the one their name hashes to.
	pub fn misplaced_records(&self) -> Vec<MisplacedRecord> {
		let mut misplaced = Vec::new();
		let mut hashes = self.journal.iter();

		for (bucket_index, bucket) in self.buckets.iter().enumerate() {
			for (slot, record) in bucket.records().iter().enumerate() {
				let expected =
					hashes.next().unwrap_or_else(|| hash_name(record.name())) as usize;
				if expected != bucket_index {
					misplaced.push(MisplacedRecord {
						bucket: bucket_index,
						slot,
						name: record.name().to_string(),
						expected_bucket: expected,
					});
				}
			}
		}

		misplaced
	}

	fn resolve(&self, r: RecordRef) -> Option<&AnimationRecord> {
		self.buckets.get(r.bucket).and_then(|bucket| bucket.get(r.slot))
	}
}

impl Display for File {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let populated = self.buckets.iter().filter(|bucket| !bucket.is_empty()).count();
		write!(
			f,
			"AnimData ({} records, {} names, {}/{} buckets populated)",
			self.record_count(),
			self.entries.len(),
			populated,
			constants::BUCKET_COUNT
		)
	}
}

fn read_record(
	reader: &mut StreamReader<'_>,
	bucket: usize,
	record: usize,
) -> Result<AnimationRecord, AssetError> {
	let name_offset = reader.position();
	let name_field = reader.read_array::<{ constants::NAME_FIELD_SIZE }>("record name")?;
	if name_field[constants::NAME_FIELD_SIZE - 1] != 0 {
		return Err(AssetError::MissingTerminator {
			bucket,
			record,
			offset: name_offset,
		});
	}
	let name = canonical_name(&name_field);

	let frame_count = reader.read_u32("record frame count")?;
	let speed = reader.read_u16("record speed")?;
	reader.skip(constants::SPEED_PADDING_SIZE, "record speed padding")?;

	let slots = reader.read_bytes(constants::EVENT_SLOT_COUNT, "record events")?;
	let events = slots
		.iter()
		.enumerate()
		.filter(|(_, code)| **code != 0)
		.map(|(frame, &code)| (frame as u8, FrameEvent::from_u8(code)));

	Ok(AnimationRecord::new(name, frame_count, speed, events))
}

/// Drops every zero byte of a name field. Bytes map one-to-one onto chars.
fn canonical_name(field: &[u8]) -> String {
	field.iter().filter(|&&b| b != 0).map(|&b| char::from(b)).collect()
}
