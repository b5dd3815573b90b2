//! Prelude module for `d2cof_types`.
//!
//! This module provides a convenient way to import commonly used types and functions.
//!
//! # Examples
//!
//! ```no_run
//! use d2cof_types::prelude::*;
//!
//! let mut cof = new_composite_document();
//! cof.set_dimensions(1, 1);
//! let bytes = encode_composite(&cof);
//! ```

// File module types
#[doc(inline)]
pub use crate::file::{
	// AnimData types
	AnimDataFile,
	AnimationRecord,
	AssetError,

	// COF types
	CofFile,
	CofLayer,
	CompositeType,
	DrawEffect,
	ErrorKind,
	FileType,

	FrameEvent,
	PriorityMatrix,
	WeaponClass,

	// Codec entry points
	decode_animation_metadata,
	decode_composite,
	encode_composite,
	hash_name,
	new_composite_document,
};

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;
