//! Per-frame event codes shared by `AnimData.d2` records and `.COF` event tables.

use std::{
	fmt::{Display, Formatter},
	hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

/// Event triggered when an animation reaches a given frame.
///
/// Codes outside the known range are kept as [`FrameEvent::Unknown`] so they
/// survive a decode/encode cycle unchanged. Equality and hashing go through the
/// raw code, so `Unknown(1)` equals `Attack`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub enum FrameEvent {
	/// No event
	#[default]
	None,
	/// Melee attack lands
	Attack,
	/// Missile is launched
	Missile,
	/// Sound is played
	Sound,
	/// Skill effect fires
	Skill,
	/// Unrecognized code
	Unknown(u8),
}

impl FrameEvent {
	/// Converts a raw byte to `FrameEvent`
	pub fn from_u8(value: u8) -> Self {
		match value {
			0 => Self::None,
			1 => Self::Attack,
			2 => Self::Missile,
			3 => Self::Sound,
			4 => Self::Skill,
			other => Self::Unknown(other),
		}
	}

	/// Converts `FrameEvent` to its raw byte
	pub fn to_u8(self) -> u8 {
		match self {
			Self::None => 0,
			Self::Attack => 1,
			Self::Missile => 2,
			Self::Sound => 3,
			Self::Skill => 4,
			Self::Unknown(value) => value,
		}
	}

	/// Returns `true` for [`FrameEvent::None`].
	pub fn is_none(self) -> bool {
		self == Self::None
	}
}

impl PartialEq for FrameEvent {
	fn eq(&self, other: &Self) -> bool {
		self.to_u8() == other.to_u8()
	}
}

impl Eq for FrameEvent {}

impl Hash for FrameEvent {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.to_u8().hash(state);
	}
}

impl From<u8> for FrameEvent {
	fn from(value: u8) -> Self {
		Self::from_u8(value)
	}
}

impl From<FrameEvent> for u8 {
	fn from(value: FrameEvent) -> Self {
		value.to_u8()
	}
}

impl Display for FrameEvent {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::None => write!(f, "None"),
			Self::Attack => write!(f, "Attack"),
			Self::Missile => write!(f, "Missile"),
			Self::Sound => write!(f, "Sound"),
			Self::Skill => write!(f, "Skill"),
			Self::Unknown(value) => write!(f, "Unknown({value})"),
		}
	}
}
