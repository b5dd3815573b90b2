//! Code tables used by COF layers and the priority matrix.
//!
//! All three enumerations keep values they do not recognize, so a decoded file
//! can always be written back unchanged. Equality and hashing go through the
//! raw value, so `Unknown(1)` and `Torso` are the same composite type.

use std::{
	fmt::{Display, Formatter},
	hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

/// Body part or equipment slot a layer draws.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub enum CompositeType {
	/// `HD`
	#[default]
	Head,
	/// `TR`
	Torso,
	/// `LG`
	Legs,
	/// `RA`
	RightArm,
	/// `LA`
	LeftArm,
	/// `RH`
	RightHand,
	/// `LH`
	LeftHand,
	/// `SH`
	Shield,
	/// `S1`
	Special1,
	/// `S2`
	Special2,
	/// `S3`
	Special3,
	/// `S4`
	Special4,
	/// `S5`
	Special5,
	/// `S6`
	Special6,
	/// `S7`
	Special7,
	/// `S8`
	Special8,
	/// Code outside the known range
	Unknown(u8),
}

impl CompositeType {
	const TOKENS: [&'static str; 16] = [
		"HD", "TR", "LG", "RA", "LA", "RH", "LH", "SH", "S1", "S2", "S3", "S4", "S5", "S6", "S7",
		"S8",
	];

	/// Converts a raw byte to `CompositeType`
	pub fn from_u8(value: u8) -> Self {
		match value {
			0 => Self::Head,
			1 => Self::Torso,
			2 => Self::Legs,
			3 => Self::RightArm,
			4 => Self::LeftArm,
			5 => Self::RightHand,
			6 => Self::LeftHand,
			7 => Self::Shield,
			8 => Self::Special1,
			9 => Self::Special2,
			10 => Self::Special3,
			11 => Self::Special4,
			12 => Self::Special5,
			13 => Self::Special6,
			14 => Self::Special7,
			15 => Self::Special8,
			other => Self::Unknown(other),
		}
	}

	/// Converts `CompositeType` to its raw byte
	pub fn to_u8(self) -> u8 {
		match self {
			Self::Head => 0,
			Self::Torso => 1,
			Self::Legs => 2,
			Self::RightArm => 3,
			Self::LeftArm => 4,
			Self::RightHand => 5,
			Self::LeftHand => 6,
			Self::Shield => 7,
			Self::Special1 => 8,
			Self::Special2 => 9,
			Self::Special3 => 10,
			Self::Special4 => 11,
			Self::Special5 => 12,
			Self::Special6 => 13,
			Self::Special7 => 14,
			Self::Special8 => 15,
			Self::Unknown(value) => value,
		}
	}

	/// Two-letter token used in sprite paths (`HD`, `TR`, ...).
	pub fn as_token(self) -> Option<&'static str> {
		Self::TOKENS.get(self.to_u8() as usize).copied()
	}

	/// Parses a two-letter token, ignoring case.
	pub fn from_token(token: &str) -> Option<Self> {
		Self::TOKENS
			.iter()
			.position(|t| t.eq_ignore_ascii_case(token))
			.map(|index| Self::from_u8(index as u8))
	}
}

impl PartialEq for CompositeType {
	fn eq(&self, other: &Self) -> bool {
		self.to_u8() == other.to_u8()
	}
}

impl Eq for CompositeType {}

impl Hash for CompositeType {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.to_u8().hash(state);
	}
}

impl Display for CompositeType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.as_token() {
			Some(token) => write!(f, "{token}"),
			None => write!(f, "#{}", self.to_u8()),
		}
	}
}

/// Blend mode applied when drawing a layer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub enum DrawEffect {
	/// 25% transparent
	#[default]
	Transparency25,
	/// 50% transparent
	Transparency50,
	/// 75% transparent
	Transparency75,
	/// Modulate
	Modulate,
	/// Burn
	Burn,
	/// Normal
	Normal,
	/// Mod
	Mod,
	/// Code outside the known range
	Unknown(u8),
}

impl DrawEffect {
	/// Converts a raw byte to `DrawEffect`
	pub fn from_u8(value: u8) -> Self {
		match value {
			0 => Self::Transparency25,
			1 => Self::Transparency50,
			2 => Self::Transparency75,
			3 => Self::Modulate,
			4 => Self::Burn,
			5 => Self::Normal,
			6 => Self::Mod,
			other => Self::Unknown(other),
		}
	}

	/// Converts `DrawEffect` to its raw byte
	pub fn to_u8(self) -> u8 {
		match self {
			Self::Transparency25 => 0,
			Self::Transparency50 => 1,
			Self::Transparency75 => 2,
			Self::Modulate => 3,
			Self::Burn => 4,
			Self::Normal => 5,
			Self::Mod => 6,
			Self::Unknown(value) => value,
		}
	}
}

impl PartialEq for DrawEffect {
	fn eq(&self, other: &Self) -> bool {
		self.to_u8() == other.to_u8()
	}
}

impl Eq for DrawEffect {}

impl Hash for DrawEffect {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.to_u8().hash(state);
	}
}

impl Display for DrawEffect {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Transparency25 => write!(f, "25% Transparency"),
			Self::Transparency50 => write!(f, "50% Transparency"),
			Self::Transparency75 => write!(f, "75% Transparency"),
			Self::Modulate => write!(f, "Modulate"),
			Self::Burn => write!(f, "Burn"),
			Self::Normal => write!(f, "Normal"),
			Self::Mod => write!(f, "Mod"),
			Self::Unknown(value) => write!(f, "Unknown({value})"),
		}
	}
}

/// Weapon stance a layer is drawn for, stored as a short ASCII code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub enum WeaponClass {
	/// Empty code
	#[default]
	None,
	/// `hth` hand to hand
	HandToHand,
	/// `bow`
	Bow,
	/// `1hs` one-handed swing
	OneHandSwing,
	/// `1ht` one-handed thrust
	OneHandThrust,
	/// `stf` staff
	Staff,
	/// `2hs` two-handed swing
	TwoHandSwing,
	/// `2ht` two-handed thrust
	TwoHandThrust,
	/// `xbw` crossbow
	Crossbow,
	/// `1js` left jab, right swing
	LeftJabRightSwing,
	/// `1jt` left jab, right thrust
	LeftJabRightThrust,
	/// `1ss` left swing, right swing
	LeftSwingRightSwing,
	/// `1st` left swing, right thrust
	LeftSwingRightThrust,
	/// `ht1` one hand-to-hand weapon
	OneHandToHand,
	/// `ht2` two hand-to-hand weapons
	TwoHandToHand,
	/// Any other code, kept verbatim
	Other(String),
}

impl WeaponClass {
	/// Maps a code to `WeaponClass`. Unrecognized codes become [`WeaponClass::Other`].
	pub fn from_code(code: &str) -> Self {
		match code {
			"" => Self::None,
			"hth" => Self::HandToHand,
			"bow" => Self::Bow,
			"1hs" => Self::OneHandSwing,
			"1ht" => Self::OneHandThrust,
			"stf" => Self::Staff,
			"2hs" => Self::TwoHandSwing,
			"2ht" => Self::TwoHandThrust,
			"xbw" => Self::Crossbow,
			"1js" => Self::LeftJabRightSwing,
			"1jt" => Self::LeftJabRightThrust,
			"1ss" => Self::LeftSwingRightSwing,
			"1st" => Self::LeftSwingRightThrust,
			"ht1" => Self::OneHandToHand,
			"ht2" => Self::TwoHandToHand,
			other => Self::Other(other.to_string()),
		}
	}

	/// Returns the code as stored in the file.
	pub fn as_code(&self) -> &str {
		match self {
			Self::None => "",
			Self::HandToHand => "hth",
			Self::Bow => "bow",
			Self::OneHandSwing => "1hs",
			Self::OneHandThrust => "1ht",
			Self::Staff => "stf",
			Self::TwoHandSwing => "2hs",
			Self::TwoHandThrust => "2ht",
			Self::Crossbow => "xbw",
			Self::LeftJabRightSwing => "1js",
			Self::LeftJabRightThrust => "1jt",
			Self::LeftSwingRightSwing => "1ss",
			Self::LeftSwingRightThrust => "1st",
			Self::OneHandToHand => "ht1",
			Self::TwoHandToHand => "ht2",
			Self::Other(code) => code,
		}
	}
}

impl PartialEq for WeaponClass {
	fn eq(&self, other: &Self) -> bool {
		self.as_code() == other.as_code()
	}
}

impl Eq for WeaponClass {}

impl Hash for WeaponClass {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.as_code().hash(state);
	}
}

impl From<&str> for WeaponClass {
	fn from(code: &str) -> Self {
		Self::from_code(code)
	}
}

impl Display for WeaponClass {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_code())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_composite_type_bytes_are_lossless() {
		for value in 0..=u8::MAX {
			assert_eq!(CompositeType::from_u8(value).to_u8(), value);
			assert_eq!(DrawEffect::from_u8(value).to_u8(), value);
		}
	}

	#[test]
	fn test_composite_type_tokens() {
		assert_eq!(CompositeType::Head.as_token(), Some("HD"));
		assert_eq!(CompositeType::Special8.as_token(), Some("S8"));
		assert_eq!(CompositeType::Unknown(16).as_token(), None);
		assert_eq!(CompositeType::from_token("rh"), Some(CompositeType::RightHand));
		assert_eq!(CompositeType::from_token("XX"), None);
		assert_eq!(CompositeType::Unknown(200).to_string(), "#200");
	}

	#[test]
	fn test_weapon_class_codes() {
		assert_eq!(WeaponClass::from_code("hth"), WeaponClass::HandToHand);
		assert_eq!(WeaponClass::from_code(""), WeaponClass::None);
		assert_eq!(WeaponClass::from_code("HTH"), WeaponClass::Other("HTH".to_string()));
		assert_eq!(WeaponClass::from("1st").as_code(), "1st");
		assert_eq!(WeaponClass::Other("long".to_string()).to_string(), "long");
	}

	#[test]
	fn test_unknown_variants_compare_by_value() {
		use std::collections::HashSet;

		assert_eq!(CompositeType::Unknown(1), CompositeType::Torso);
		assert_ne!(CompositeType::Unknown(16), CompositeType::Head);
		assert_eq!(DrawEffect::Unknown(5), DrawEffect::Normal);
		assert_eq!(WeaponClass::Other("hth".to_string()), WeaponClass::HandToHand);

		let types: HashSet<_> = [CompositeType::Unknown(7), CompositeType::Shield].into_iter().collect();
		assert_eq!(types.len(), 1);
	}
}
