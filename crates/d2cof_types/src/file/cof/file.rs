//! COF file structure and I/O operations.

use std::{collections::HashMap, fmt::Display, io::Read};

use log::{debug, trace};

use super::{
	constants,
	layer::CofLayer,
	priority::PriorityMatrix,
	types::CompositeType,
};
use crate::file::{AssetError, FileType, FrameEvent, StreamReader, StreamWriter};

/// Composite object file: how the layers of an animated unit are stacked.
///
/// # Layout
///
/// ```text
/// Offset  Size        Field            Description
/// ------  ----------  ---------------  ----------------------------------
/// 0x00    1           layer_count      Number of layers
/// 0x01    1           frames           Frames per direction
/// 0x02    1           directions       Number of directions
/// 0x03    21          reserved         Opaque, preserved verbatim
/// 0x18    1           speed            Playback speed
/// 0x19    3           reserved         Opaque, preserved verbatim
/// 0x1C    9 × L       layers           Layer descriptors
/// ...     F           frame events     One event per frame, shared by all directions
/// ...     D × F × L   priority         Draw order, direction-major
/// ```
///
/// Direction, frame and layer counts are not stored separately: they are the
/// dimensions of the priority matrix, which keeps the matrix, the event table
/// and the layer list consistent by construction.
///
/// # Examples
///
/// ```
/// use d2cof_types::file::cof::{CofLayer, CompositeType, File};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut cof = File::new();
/// cof.set_dimensions(1, 1);
/// cof.add_layer(CofLayer::new(CompositeType::Head))?;
///
/// let bytes = cof.to_bytes();
/// assert_eq!(bytes.len(), 39);
/// assert_eq!(File::from_bytes(&bytes)?, cof);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
	reserved_header: [u8; constants::RESERVED_HEADER_SIZE],
	reserved_body: [u8; constants::RESERVED_BODY_SIZE],
	speed: u8,
	layers: Vec<CofLayer>,
	composite_layers: HashMap<CompositeType, usize>,
	frame_events: Vec<FrameEvent>,
	priority: PriorityMatrix,
}

impl File {
	/// Creates an empty document with zeroed reserved bytes and no layers,
	/// directions or frames.
	pub fn new() -> Self {
		Self {
			reserved_header: [0u8; constants::RESERVED_HEADER_SIZE],
			reserved_body: [0u8; constants::RESERVED_BODY_SIZE],
			speed: 0,
			layers: Vec::new(),
			composite_layers: HashMap::new(),
			frame_events: Vec::new(),
			priority: PriorityMatrix::default(),
		}
	}

	/// Decodes a COF file from bytes.
	///
	/// # Errors
	///
	/// Returns [`AssetError::InsufficientData`] if any region declared by the
	/// header extends past the end of the buffer.
	pub fn from_bytes(data: &[u8]) -> Result<Self, AssetError> {
		let mut reader = StreamReader::new(data, FileType::Cof);

		let header = reader.read_array::<{ constants::HEADER_SIZE }>("header")?;
		let layer_count = header[constants::HEADER_LAYER_COUNT] as usize;
		let frames = header[constants::HEADER_FRAMES_PER_DIRECTION] as usize;
		let directions = header[constants::HEADER_DIRECTION_COUNT] as usize;
		let speed = header[constants::HEADER_SPEED];
		let mut reserved_header = [0u8; constants::RESERVED_HEADER_SIZE];
		reserved_header.copy_from_slice(
			&header[constants::HEADER_RESERVED_OFFSET..constants::HEADER_SPEED],
		);

		let reserved_body = reader.read_array::<{ constants::RESERVED_BODY_SIZE }>("reserved body")?;

		let mut layers = Vec::with_capacity(layer_count);
		let mut composite_layers = HashMap::new();
		for index in 0..layer_count {
			let layer = CofLayer::from_bytes(&reader.read_array::<{ constants::LAYER_SIZE }>("layer")?);
			trace!("layer {index}: {layer}");
			composite_layers.insert(layer.composite_type, index);
			layers.push(layer);
		}

		let frame_events = reader
			.read_bytes(frames, "frame events")?
			.iter()
			.map(|&code| FrameEvent::from_u8(code))
			.collect();

		let priority_bytes = reader.read_bytes(directions * frames * layer_count, "priority")?;
		let priority = PriorityMatrix::from_bytes(directions, frames, layer_count, priority_bytes);

		debug!(
			"decoded COF: {directions} directions, {frames} frames, {layer_count} layers, {} unread bytes",
			reader.remaining()
		);

		Ok(Self {
			reserved_header,
			reserved_body,
			speed,
			layers,
			composite_layers,
			frame_events,
			priority,
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

	/// Encodes the document.
	///
	/// Reserved regions are written back exactly as decoded. Flags are written
	/// as `0x00`/`0x01` and weapon class codes as three bytes plus a terminator.
	pub fn to_bytes(&self) -> Vec<u8> {
		let mut writer = StreamWriter::with_capacity(self.encoded_len());

		writer.write_u8(self.layer_count() as u8);
		writer.write_u8(self.frames_per_direction() as u8);
		writer.write_u8(self.direction_count() as u8);
		writer.write_bytes(&self.reserved_header);
		writer.write_u8(self.speed);
		writer.write_bytes(&self.reserved_body);

		for layer in &self.layers {
			writer.write_bytes(&layer.to_bytes());
		}

		for event in &self.frame_events {
			writer.write_u8(event.to_u8());
		}

		for cell in self.priority.iter() {
			writer.write_u8(cell.to_u8());
		}

		debug!("encoded COF: {} bytes", writer.position());
		writer.into_bytes()
	}

	/// Size of the encoded document in bytes.
	pub fn encoded_len(&self) -> usize {
		constants::HEADER_SIZE
			+ constants::RESERVED_BODY_SIZE
			+ self.layers.len() * constants::LAYER_SIZE
			+ self.frame_events.len()
			+ self.priority.len()
	}

	/// Number of directions.
	pub fn direction_count(&self) -> usize {
		self.priority.directions()
	}

	/// Number of frames in each direction.
	pub fn frames_per_direction(&self) -> usize {
		self.priority.frames_per_direction()
	}

	/// Number of layers.
	pub fn layer_count(&self) -> usize {
		self.layers.len()
	}

	/// Playback speed byte.
	pub fn speed(&self) -> u8 {
		self.speed
	}

	/// Sets the playback speed byte.
	pub fn set_speed(&mut self, speed: u8) {
		self.speed = speed;
	}

	/// Opaque header bytes (offsets 3..24).
	pub fn reserved_header(&self) -> &[u8; constants::RESERVED_HEADER_SIZE] {
		&self.reserved_header
	}

	/// Opaque bytes following the header.
	pub fn reserved_body(&self) -> &[u8; constants::RESERVED_BODY_SIZE] {
		&self.reserved_body
	}

	/// Layers in file order.
	pub fn layers(&self) -> &[CofLayer] {
		&self.layers
	}

	/// Layer at `index`.
	pub fn layer(&self, index: usize) -> Option<&CofLayer> {
		self.layers.get(index)
	}

	/// Index of the layer drawing `composite_type`.
	///
	/// When several layers share a type the last one wins.
	pub fn layer_index(&self, composite_type: CompositeType) -> Option<usize> {
		self.composite_layers.get(&composite_type).copied()
	}

	/// Layer drawing `composite_type`, see [`File::layer_index`].
	pub fn layer_by_type(&self, composite_type: CompositeType) -> Option<&CofLayer> {
		self.layer_index(composite_type).and_then(|index| self.layers.get(index))
	}

	/// Map from composite type to layer index.
	pub fn composite_layers(&self) -> &HashMap<CompositeType, usize> {
		&self.composite_layers
	}

	/// Replaces the layer at `index`.
	///
	/// # Errors
	///
	/// Returns [`AssetError::OutOfRange`] if there is no layer at `index`.
	pub fn set_layer(&mut self, index: usize, layer: CofLayer) -> Result<(), AssetError> {
		let count = self.layers.len();
		let slot = self.layers.get_mut(index).ok_or_else(|| {
			AssetError::out_of_range(
				FileType::Cof,
				format!("layer index {index} out of range ({count} layers)"),
			)
		})?;
		*slot = layer;
		self.rebuild_composite_layers();
		Ok(())
	}

	/// Appends a layer and gives it a slot in every priority frame.
	///
	/// The new slot draws the layer's own composite type. Returns the layer index.
	///
	/// # Errors
	///
	/// Returns [`AssetError::OutOfRange`] if the document already has 255 layers.
	pub fn add_layer(&mut self, layer: CofLayer) -> Result<usize, AssetError> {
		if self.layers.len() >= constants::MAX_COUNT {
			return Err(AssetError::out_of_range(
				FileType::Cof,
				format!("at most {} layers are supported", constants::MAX_COUNT),
			));
		}

		let index = self.layers.len();
		self.priority.push_slot(layer.composite_type);
		self.composite_layers.insert(layer.composite_type, index);
		self.layers.push(layer);
		Ok(index)
	}

	/// Changes the direction and frame counts.
	///
	/// Existing events and priority cells keep their positions. New frames get
	/// [`FrameEvent::None`] and draw the layers in layer order.
	pub fn set_dimensions(&mut self, directions: u8, frames: u8) {
		let fill: Vec<CompositeType> = self.layers.iter().map(|layer| layer.composite_type).collect();
		self.priority.resize(directions as usize, frames as usize, &fill);
		self.frame_events.resize(frames as usize, FrameEvent::None);
	}

	/// Per-frame events, shared by every direction.
	pub fn frame_events(&self) -> &[FrameEvent] {
		&self.frame_events
	}

	/// Event at `frame`.
	pub fn frame_event(&self, frame: usize) -> Option<FrameEvent> {
		self.frame_events.get(frame).copied()
	}

	/// Sets the event at `frame`.
	///
	/// # Errors
	///
	/// Returns [`AssetError::OutOfRange`] if `frame` is not a valid frame index.
	pub fn set_frame_event(&mut self, frame: usize, event: FrameEvent) -> Result<(), AssetError> {
		let count = self.frame_events.len();
		let slot = self.frame_events.get_mut(frame).ok_or_else(|| {
			AssetError::out_of_range(
				FileType::Cof,
				format!("frame {frame} out of range ({count} frames)"),
			)
		})?;
		*slot = event;
		Ok(())
	}

	/// Draw order matrix.
	pub fn priority(&self) -> &PriorityMatrix {
		&self.priority
	}

	/// Mutable draw order matrix. Its dimensions cannot be changed through it.
	pub fn priority_mut(&mut self) -> &mut PriorityMatrix {
		&mut self.priority
	}

	fn rebuild_composite_layers(&mut self) {
		self.composite_layers = self
			.layers
			.iter()
			.enumerate()
			.map(|(index, layer)| (layer.composite_type, index))
			.collect();
	}
}

impl Default for File {
	fn default() -> Self {
		Self::new()
	}
}

impl Display for File {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"COF File ({} layers, {} directions, {} frames, speed {})",
			self.layer_count(),
			self.direction_count(),
			self.frames_per_direction(),
			self.speed
		)
	}
}
