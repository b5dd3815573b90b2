//! `AnimData.d2` decoding through the facade crate

use d2cof::{file::StreamWriter, prelude::*};

const BUCKETS: usize = 256;

type Record = (&'static str, u32, u16, &'static [(usize, u8)]);

fn rec(name: &'static str, frames: u32, speed: u16, events: &'static [(usize, u8)]) -> Record {
	(name, frames, speed, events)
}

/// Writes a table holding `records` as `(name, frames, speed, events)`, each
/// placed in the bucket its name hashes to.
fn table(records: &[Record]) -> Vec<u8> {
	let mut writer = StreamWriter::new();
	for bucket in 0..BUCKETS {
		let in_bucket: Vec<_> =
			records.iter().filter(|(name, ..)| hash_name(name) as usize == bucket).collect();
		writer.write_u32(in_bucket.len() as u32);
		for (name, frames, speed, events) in in_bucket {
			let mut field = [0u8; 8];
			field[..name.len()].copy_from_slice(name.as_bytes());
			writer.write_bytes(&field);
			writer.write_u32(*frames);
			writer.write_u16(*speed);
			writer.write_zeros(2);
			let mut slots = [0u8; 144];
			for &(frame, code) in *events {
				slots[frame] = code;
			}
			writer.write_bytes(&slots);
		}
	}
	writer.into_bytes()
}

#[test]
fn empty_table_decodes() {
	let animdata = decode_animation_metadata(&table(&[])).unwrap();
	assert_eq!(animdata.buckets().len(), BUCKETS);
	assert_eq!(animdata.record_count(), 0);
}

#[test]
fn lookups_by_name() {
	let data = table(&[
		rec("AMA1HTH", 16, 256, &[(8, 1)]),
		rec("AMNUHTH", 12, 128, &[]),
		rec("AMA1HTH", 18, 256, &[(9, 1)]),
	]);
	let animdata = decode_animation_metadata(&data).unwrap();

	let mut names = animdata.record_names();
	names.sort_unstable();
	assert_eq!(names, vec!["AMA1HTH", "AMNUHTH"]);

	let attack = animdata.record("AMA1HTH").unwrap();
	assert_eq!(attack.frame_count(), 18);
	assert_eq!(attack.event(9), FrameEvent::Attack);
	assert_eq!(animdata.records("AMA1HTH").len(), 2);

	let neutral = animdata.record("AMNUHTH").unwrap();
	assert!((neutral.fps() - 12.5).abs() < f64::EPSILON);
	assert_eq!(neutral.frame_duration_ms(), Some(80.0));

	assert!(animdata.misplaced_records().is_empty());
}

#[test]
fn structural_errors() {
	let mut data = table(&[rec("HD", 1, 256, &[])]);
	let bucket = hash_name("HD") as usize;
	// Name bytes start right after the bucket's record count.
	let name_offset = 4 * (bucket + 1);
	data[name_offset + 7] = b'X';

	let err = decode_animation_metadata(&data).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::StructuralViolation);
	assert_eq!(err.to_string(), format!(
		"AnimData: record 0 in bucket {bucket} is missing the name terminator (offset {name_offset})"
	));

	let mut data = table(&[]);
	data.extend_from_slice(&[0; 4]);
	let err = decode_animation_metadata(&data).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::TrailingDataMismatch);
}
