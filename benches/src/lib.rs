//! Benchmark helper utilities for d2cof-rs
//!
//! This module generates synthetic `AnimData.d2` tables and `.COF` files so the
//! benchmark suite does not depend on extracted game data.

/// Records per bucket used by the default benchmark table.
pub const TYPICAL_RECORDS_PER_BUCKET: usize = 24;

/// Generates an `AnimData.d2` table with `records_per_bucket` records in every
/// bucket (capped at the 67 record limit).
///
/// Names are synthetic (`R<bucket><index>`) and are not placed by hash, which
/// the decoder does not check.
pub fn generate_animdata(records_per_bucket: usize) -> Vec<u8> {
	let count = records_per_bucket.min(67);
	let mut data = Vec::with_capacity(256 * (4 + count * 160));

	for bucket in 0..256usize {
		data.extend_from_slice(&(count as u32).to_le_bytes());
		for index in 0..count {
			let name = format!("R{bucket:03}{index:02}");
			let mut field = [0u8; 8];
			field[..name.len()].copy_from_slice(name.as_bytes());
			data.extend_from_slice(&field);

			let frames = 8 + (index as u32 % 16);
			data.extend_from_slice(&frames.to_le_bytes());
			data.extend_from_slice(&256u16.to_le_bytes());
			data.extend_from_slice(&[0, 0]);

			let mut events = [0u8; 144];
			events[frames as usize / 2] = 1;
			data.extend_from_slice(&events);
		}
	}

	data
}

/// Generates a `.COF` file with the given dimensions.
///
/// Every frame draws the layers in a rotated order so the priority table is
/// not uniform.
pub fn generate_cof(directions: u8, frames: u8, layers: u8) -> Vec<u8> {
	let mut data = vec![layers, frames, directions];
	data.extend_from_slice(&[0u8; 21]);
	// Speed
	data.push(8);
	data.extend_from_slice(&[0u8; 3]);

	for layer in 0..layers {
		data.extend_from_slice(&[layer % 16, 1, 1, 0, 5]);
		data.extend_from_slice(b"hth\0");
	}

	for frame in 0..frames {
		data.push(u8::from(frame == frames / 2));
	}

	for direction in 0..directions as usize {
		for frame in 0..frames as usize {
			for slot in 0..layers as usize {
				data.push(((slot + direction + frame) % layers as usize % 16) as u8);
			}
		}
	}

	data
}

#[cfg(test)]
mod tests {
	use super::*;
	use d2cof_types::file::{AnimDataFile, CofFile};

	#[test]
	fn test_generated_animdata_decodes() {
		let data = generate_animdata(4);
		let animdata = AnimDataFile::from_bytes(&data).unwrap();
		assert_eq!(animdata.record_count(), 4 * 256);
		assert_eq!(animdata.record("R01203").unwrap().frame_count(), 11);
	}

	#[test]
	fn test_generated_cof_round_trips() {
		let data = generate_cof(16, 12, 9);
		let cof = CofFile::from_bytes(&data).unwrap();
		assert_eq!(cof.direction_count(), 16);
		assert_eq!(cof.to_bytes(), data);
	}
}
