//! COF file format constants.

/// Opaque bytes between the direction count and the speed byte
pub const RESERVED_HEADER_SIZE: usize = 21;

/// Opaque bytes between the header and the first layer
pub const RESERVED_BODY_SIZE: usize = 3;

/// Size of the header (3 counts + reserved bytes + speed)
pub const HEADER_SIZE: usize = 4 + RESERVED_HEADER_SIZE;

/// Header offset of the layer count
pub const HEADER_LAYER_COUNT: usize = 0;

/// Header offset of the frames-per-direction count
pub const HEADER_FRAMES_PER_DIRECTION: usize = 1;

/// Header offset of the direction count
pub const HEADER_DIRECTION_COUNT: usize = 2;

/// Header offset where the reserved bytes start
pub const HEADER_RESERVED_OFFSET: usize = 3;

/// Header offset of the speed byte (last byte of the header)
pub const HEADER_SPEED: usize = HEADER_SIZE - 1;

/// Size of one layer descriptor
pub const LAYER_SIZE: usize = 9;

/// Layer offset of the composite type
pub const LAYER_TYPE: usize = 0;

/// Layer offset of the shadow byte
pub const LAYER_SHADOW: usize = 1;

/// Layer offset of the selectable flag
pub const LAYER_SELECTABLE: usize = 2;

/// Layer offset of the transparent flag
pub const LAYER_TRANSPARENT: usize = 3;

/// Layer offset of the draw effect
pub const LAYER_DRAW_EFFECT: usize = 4;

/// Layer offset of the weapon class field
pub const LAYER_WEAPON_CLASS: usize = 5;

/// Size of the weapon class field
pub const WEAPON_CLASS_FIELD_SIZE: usize = LAYER_SIZE - LAYER_WEAPON_CLASS;

/// Characters kept when writing a weapon class code (the last byte is the terminator)
pub const WEAPON_CLASS_MAX_LEN: usize = WEAPON_CLASS_FIELD_SIZE - 1;

/// Largest count a header byte can express
pub const MAX_COUNT: usize = u8::MAX as usize;
