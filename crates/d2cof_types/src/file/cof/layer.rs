//! COF layer descriptors.

use std::fmt::Display;

use log::warn;
use serde::{Deserialize, Serialize};

use super::{
	constants,
	types::{CompositeType, DrawEffect, WeaponClass},
};

/// One drawable component of a composite object.
///
/// ```text
/// Offset  Size  Field         Description
/// ------  ----  ------------  ------------------------------------------
/// +0x00   1     type          Composite type code
/// +0x01   1     shadow        Shadow byte
/// +0x02   1     selectable    Non-zero when the layer can be clicked
/// +0x03   1     transparent   Non-zero when the layer is see-through
/// +0x04   1     draw_effect   Blend mode code
/// +0x05   4     weapon_class  ASCII code, zero padded
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CofLayer {
	/// Composite type drawn by this layer
	pub composite_type: CompositeType,
	/// Shadow byte
	pub shadow: u8,
	/// Layer can be selected with the mouse
	pub selectable: bool,
	/// Layer is drawn transparently
	pub transparent: bool,
	/// Blend mode
	pub draw_effect: DrawEffect,
	/// Weapon stance
	pub weapon_class: WeaponClass,
}

impl CofLayer {
	/// Creates a layer of the given type with every other field zeroed.
	pub fn new(composite_type: CompositeType) -> Self {
		Self {
			composite_type,
			..Self::default()
		}
	}

	/// Decodes a layer descriptor.
	pub fn from_bytes(bytes: &[u8; constants::LAYER_SIZE]) -> Self {
		Self {
			composite_type: CompositeType::from_u8(bytes[constants::LAYER_TYPE]),
			shadow: bytes[constants::LAYER_SHADOW],
			selectable: bytes[constants::LAYER_SELECTABLE] != 0,
			transparent: bytes[constants::LAYER_TRANSPARENT] != 0,
			draw_effect: DrawEffect::from_u8(bytes[constants::LAYER_DRAW_EFFECT]),
			weapon_class: WeaponClass::from_code(&weapon_code(
				&bytes[constants::LAYER_WEAPON_CLASS..],
			)),
		}
	}

	/// Encodes the layer descriptor.
	///
	/// The weapon class is written as exactly three bytes plus a zero terminator.
	/// Shorter codes are zero padded, longer codes are truncated. Each char is
	/// written as one byte; chars above `U+00FF` become `?`.
	pub fn to_bytes(&self) -> [u8; constants::LAYER_SIZE] {
		let mut bytes = [0u8; constants::LAYER_SIZE];
		bytes[constants::LAYER_TYPE] = self.composite_type.to_u8();
		bytes[constants::LAYER_SHADOW] = self.shadow;
		bytes[constants::LAYER_SELECTABLE] = u8::from(self.selectable);
		bytes[constants::LAYER_TRANSPARENT] = u8::from(self.transparent);
		bytes[constants::LAYER_DRAW_EFFECT] = self.draw_effect.to_u8();

		let code = self.weapon_class.as_code();
		if code.chars().count() > constants::WEAPON_CLASS_MAX_LEN {
			warn!(
				"weapon class {code:?} is longer than {} characters and will be truncated",
				constants::WEAPON_CLASS_MAX_LEN
			);
		}
		let start = constants::LAYER_WEAPON_CLASS;
		for (slot, c) in code.chars().take(constants::WEAPON_CLASS_MAX_LEN).enumerate() {
			// Same one-byte-per-char mapping as decoding.
			bytes[start + slot] = u8::try_from(u32::from(c)).unwrap_or_else(|_| {
				warn!("weapon class {code:?} contains {c:?}, which has no single-byte form");
				b'?'
			});
		}

		bytes
	}
}

impl Display for CofLayer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{} shadow={} selectable={} transparent={} effect={} weapon={}",
			self.composite_type,
			self.shadow,
			self.selectable,
			self.transparent,
			self.draw_effect,
			self.weapon_class
		)
	}
}

/// Drops every zero byte, then trims surrounding ASCII whitespace.
///
/// Each remaining byte maps to the char with the same value.
fn weapon_code(field: &[u8]) -> String {
	let text: String = field.iter().filter(|&&b| b != 0).map(|&b| char::from(b)).collect();
	text.trim_matches(is_field_space).to_string()
}

fn is_field_space(c: char) -> bool {
	matches!(c, '\t' | '\n' | '\x0B' | '\x0C' | '\r' | ' ')
}
