//! Layer draw order per direction and frame.

use super::types::CompositeType;
use crate::file::{AssetError, FileType};

/// Three-dimensional `[direction][frame][slot]` table of composite types.
///
/// Each `(direction, frame)` cell lists the composite types in the order they
/// are drawn. Values are stored flat in the on-disk order: direction-major,
/// then frame, then layer slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriorityMatrix {
	directions: usize,
	frames: usize,
	slots: usize,
	cells: Vec<CompositeType>,
}

impl PriorityMatrix {
	/// Creates a matrix where every frame draws `slot_fill` in order.
	///
	/// The slot count is `slot_fill.len()`.
	pub fn new(directions: usize, frames: usize, slot_fill: &[CompositeType]) -> Self {
		let mut cells = Vec::with_capacity(directions * frames * slot_fill.len());
		for _ in 0..directions * frames {
			cells.extend_from_slice(slot_fill);
		}
		Self {
			directions,
			frames,
			slots: slot_fill.len(),
			cells,
		}
	}

	/// Builds a matrix from raw bytes laid out direction-major.
	///
	/// `bytes` must hold exactly `directions * frames * slots` values.
	pub(crate) fn from_bytes(directions: usize, frames: usize, slots: usize, bytes: &[u8]) -> Self {
		debug_assert_eq!(bytes.len(), directions * frames * slots);
		Self {
			directions,
			frames,
			slots,
			cells: bytes.iter().map(|&b| CompositeType::from_u8(b)).collect(),
		}
	}

	/// Number of directions.
	pub fn directions(&self) -> usize {
		self.directions
	}

	/// Number of frames in each direction.
	pub fn frames_per_direction(&self) -> usize {
		self.frames
	}

	/// Number of layer slots in each frame.
	pub fn layer_slots(&self) -> usize {
		self.slots
	}

	/// Total number of cells.
	pub fn len(&self) -> usize {
		self.cells.len()
	}

	/// Returns `true` if any dimension is zero.
	pub fn is_empty(&self) -> bool {
		self.cells.is_empty()
	}

	fn frame_start(&self, direction: usize, frame: usize) -> Option<usize> {
		if direction < self.directions && frame < self.frames {
			Some((direction * self.frames + frame) * self.slots)
		} else {
			None
		}
	}

	/// Composite type drawn at `slot` of the given frame.
	pub fn get(&self, direction: usize, frame: usize, slot: usize) -> Option<CompositeType> {
		self.frame(direction, frame).and_then(|cells| cells.get(slot).copied())
	}

	/// Replaces one cell.
	///
	/// # Errors
	///
	/// Returns [`AssetError::OutOfRange`] if any index is outside the matrix.
	pub fn set(
		&mut self,
		direction: usize,
		frame: usize,
		slot: usize,
		value: CompositeType,
	) -> Result<(), AssetError> {
		let (directions, frames, slots) = (self.directions, self.frames, self.slots);
		let cell = self.frame_mut(direction, frame).and_then(|cells| cells.get_mut(slot)).ok_or_else(
			|| {
				AssetError::out_of_range(
					FileType::Cof,
					format!(
						"priority index [{direction}][{frame}][{slot}] outside {directions}x{frames}x{slots} matrix"
					),
				)
			},
		)?;
		*cell = value;
		Ok(())
	}

	/// Draw order of one frame.
	pub fn frame(&self, direction: usize, frame: usize) -> Option<&[CompositeType]> {
		let start = self.frame_start(direction, frame)?;
		Some(&self.cells[start..start + self.slots])
	}

	/// Mutable draw order of one frame. The slice length is fixed.
	pub fn frame_mut(&mut self, direction: usize, frame: usize) -> Option<&mut [CompositeType]> {
		let start = self.frame_start(direction, frame)?;
		let slots = self.slots;
		Some(&mut self.cells[start..start + slots])
	}

	/// Iterates over the frames of one direction.
	pub fn direction(&self, direction: usize) -> Option<impl Iterator<Item = &[CompositeType]>> {
		if direction >= self.directions {
			return None;
		}
		Some((0..self.frames).filter_map(move |frame| self.frame(direction, frame)))
	}

	/// Copies the matrix into nested vectors indexed `[direction][frame][slot]`.
	pub fn to_nested(&self) -> Vec<Vec<Vec<CompositeType>>> {
		(0..self.directions)
			.map(|direction| {
				(0..self.frames)
					.filter_map(|frame| self.frame(direction, frame).map(<[CompositeType]>::to_vec))
					.collect()
			})
			.collect()
	}

	/// All cells in on-disk order.
	pub fn iter(&self) -> impl Iterator<Item = CompositeType> + '_ {
		self.cells.iter().copied()
	}

	/// Changes the direction and frame counts.
	///
	/// Existing cells keep their coordinates; new frames draw `slot_fill`.
	pub(crate) fn resize(&mut self, directions: usize, frames: usize, slot_fill: &[CompositeType]) {
		debug_assert_eq!(slot_fill.len(), self.slots);
		let mut resized = Self::new(directions, frames, slot_fill);
		for direction in 0..directions.min(self.directions) {
			for frame in 0..frames.min(self.frames) {
				if let (Some(src), Some(dst)) =
					(self.frame(direction, frame), resized.frame_mut(direction, frame))
				{
					dst.copy_from_slice(src);
				}
			}
		}
		*self = resized;
	}

	/// Appends a slot to every frame, filled with `value`.
	pub(crate) fn push_slot(&mut self, value: CompositeType) {
		let frame_count = self.directions * self.frames;
		let mut cells = Vec::with_capacity(frame_count * (self.slots + 1));
		for index in 0..frame_count {
			let start = index * self.slots;
			cells.extend_from_slice(&self.cells[start..start + self.slots]);
			cells.push(value);
		}
		self.cells = cells;
		self.slots += 1;
	}
}
