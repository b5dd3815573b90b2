#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `d2cof-rs` reads the animation tables of Diablo II: the global `AnimData.d2`
//! metadata file and per-animation `.COF` composite object files.
//!
//! ```no_run
//! use d2cof::prelude::*;
//!
//! # fn main() -> Result<(), AssetError> {
//! let cof = decode_composite(&std::fs::read("AMA1HTH.cof")?)?;
//! println!("{cof}");
//! # Ok(())
//! # }
//! ```

/// `use d2cof::prelude::*;` to import commonly used items.
pub mod prelude {
	#[doc(inline)]
	pub use d2cof_types::prelude::*;
}

// Re-export d2cof_types for convenience
pub use d2cof_types;

pub use d2cof_types::file;
