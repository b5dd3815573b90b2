//! Animation records and the buckets that hold them.

use std::{collections::BTreeMap, fmt::Display};

use serde::{Deserialize, Serialize};

use super::constants;
use crate::file::FrameEvent;

/// One named entry of the `AnimData.d2` table.
///
/// Only frame slots carrying an event are stored; every other slot reads back
/// as [`FrameEvent::None`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationRecord {
	name: String,
	frame_count: u32,
	speed: u16,
	events: BTreeMap<u8, FrameEvent>,
}

impl AnimationRecord {
	/// Creates a record from already decoded fields.
	///
	/// Events whose frame index falls outside the 144 slots, or whose kind is
	/// [`FrameEvent::None`], are dropped.
	pub fn new(
		name: impl Into<String>,
		frame_count: u32,
		speed: u16,
		events: impl IntoIterator<Item = (u8, FrameEvent)>,
	) -> Self {
		let events = events
			.into_iter()
			.filter(|(frame, event)| {
				(*frame as usize) < constants::EVENT_SLOT_COUNT && !event.is_none()
			})
			.collect();

		Self {
			name: name.into(),
			frame_count,
			speed,
			events,
		}
	}

	/// Canonical record name (zero padding removed).
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Number of frames per direction.
	pub fn frame_count(&self) -> u32 {
		self.frame_count
	}

	/// Raw playback speed, in 256ths of a frame per game tick.
	pub fn speed(&self) -> u16 {
		self.speed
	}

	/// Playback rate in frames per second.
	pub fn fps(&self) -> f64 {
		f64::from(self.speed) / constants::SPEED_DIVISOR * constants::SPEED_BASE_FPS
	}

	/// Duration of a single frame in milliseconds, `None` when the speed is zero.
	pub fn frame_duration_ms(&self) -> Option<f64> {
		if self.speed == 0 {
			return None;
		}
		Some(constants::MILLISECONDS / self.fps())
	}

	/// Event at `frame`, [`FrameEvent::None`] if the slot is empty or out of range.
	pub fn event(&self, frame: usize) -> FrameEvent {
		u8::try_from(frame)
			.ok()
			.and_then(|frame| self.events.get(&frame).copied())
			.unwrap_or_default()
	}

	/// Iterates over `(frame, event)` pairs in ascending frame order.
	pub fn events(&self) -> impl Iterator<Item = (usize, FrameEvent)> + '_ {
		self.events.iter().map(|(&frame, &event)| (frame as usize, event))
	}

	/// Number of frames carrying an event.
	pub fn event_count(&self) -> usize {
		self.events.len()
	}
}

impl Display for AnimationRecord {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{:<7} frames={:<3} speed={:<4} ({:.2} fps) events={}",
			self.name,
			self.frame_count,
			self.speed,
			self.fps(),
			self.events.len()
		)
	}
}

/// One of the 256 fixed slots of the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bucket {
	records: Vec<AnimationRecord>,
}

impl Bucket {
	pub(crate) fn with_capacity(capacity: usize) -> Self {
		Self {
			records: Vec::with_capacity(capacity),
		}
	}

	pub(crate) fn push(&mut self, record: AnimationRecord) -> usize {
		self.records.push(record);
		self.records.len() - 1
	}

	/// Records in file order.
	pub fn records(&self) -> &[AnimationRecord] {
		&self.records
	}

	/// Number of records in this bucket.
	pub fn len(&self) -> usize {
		self.records.len()
	}

	/// Returns `true` if the bucket holds no record.
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Record at `index`.
	pub fn get(&self, index: usize) -> Option<&AnimationRecord> {
		self.records.get(index)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_fps_and_duration() {
		let record = AnimationRecord::new("0AA1HTH", 12, 256, []);
		assert!((record.fps() - 25.0).abs() < f64::EPSILON);
		assert!((record.frame_duration_ms().unwrap() - 40.0).abs() < 1e-9);

		let half = AnimationRecord::new("0AA1HTH", 12, 128, []);
		assert!((half.fps() - 12.5).abs() < f64::EPSILON);

		let still = AnimationRecord::new("0AA1HTH", 12, 0, []);
		assert_eq!(still.fps(), 0.0);
		assert_eq!(still.frame_duration_ms(), None);
	}

	#[test]
	fn test_events_are_sparse() {
		let record = AnimationRecord::new(
			"BAA1HTH",
			16,
			256,
			[(3, FrameEvent::Attack), (5, FrameEvent::None), (200, FrameEvent::Sound)],
		);

		assert_eq!(record.event_count(), 1);
		assert_eq!(record.event(3), FrameEvent::Attack);
		assert_eq!(record.event(5), FrameEvent::None);
		assert_eq!(record.event(143), FrameEvent::None);
		assert_eq!(record.event(10_000), FrameEvent::None);
		assert_eq!(record.events().collect::<Vec<_>>(), vec![(3, FrameEvent::Attack)]);
	}
}
