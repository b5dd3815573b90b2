//! This crate provides core data types and file format support for the `d2cof-rs` project.
//!
//! # File Formats
//!
//! - **`AnimData.d2`**: Hashed table of per-animation frame counts, speeds and frame events
//! - **COF**: Composite object files describing layer stacking and draw order of an animation
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use d2cof_types::prelude::*;
//!
//! # fn main() -> Result<(), AssetError> {
//! let animdata = AnimDataFile::from_bytes(&std::fs::read("AnimData.d2")?)?;
//! if let Some(record) = animdata.record("AMA1HTH") {
//!     println!("{} frames at {:.1} fps", record.frame_count(), record.fps());
//! }
//!
//! let cof = CofFile::from_bytes(&std::fs::read("AMA1HTH.cof")?)?;
//! assert_eq!(CofFile::from_bytes(&cof.to_bytes())?, cof);
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use d2cof_types::file::cof::{CofLayer, CompositeType, File};
//!
//! let mut cof = File::new();
//! cof.set_dimensions(8, 12);
//! // ...
//! ```

pub mod file;

/// `use d2cof_types::prelude::*;` to import commonly used items.
pub mod prelude;
