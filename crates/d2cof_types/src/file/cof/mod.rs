//! `.COF` composite object file support.
//!
//! A COF describes how a unit's animation is assembled from layers (head,
//! torso, weapon, ...): which layers exist, which event each frame fires and,
//! for every direction and frame, in which order the layers are drawn.
//!
//! # File Structure
//!
//! ```text
//! Offset  Size        Field            Description
//! ------  ----------  ---------------  ----------------------------------
//! 0x00    1           layer_count      L
//! 0x01    1           frames           F
//! 0x02    1           directions       D
//! 0x03    21          reserved         Opaque
//! 0x18    1           speed            Playback speed
//! 0x19    3           reserved         Opaque
//! 0x1C    9 × L       layers           See [`CofLayer`]
//! ...     F           frame events     See [`FrameEvent`](crate::file::FrameEvent)
//! ...     D × F × L   priority         See [`PriorityMatrix`]
//! ```
//!
//! There is no magic number and no length field. Bytes after the priority
//! table are ignored when decoding. Reserved regions are round-tripped
//! verbatim, so decoding and re-encoding a well-formed file reproduces it
//! byte for byte, except for flag bytes other than `0x00`/`0x01` and weapon
//! class codes longer than three characters.
//!
//! # Usage
//!
//! ```no_run
//! use d2cof_types::file::cof::{CompositeType, File};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cof = File::from_bytes(&std::fs::read("AMA1HTH.cof")?)?;
//!
//! if let Some(torso) = cof.layer_by_type(CompositeType::Torso) {
//!     println!("torso: {torso}");
//! }
//! for (direction, frames) in cof.priority().to_nested().iter().enumerate() {
//!     println!("direction {direction}: {:?}", frames.first());
//! }
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod file;
pub mod layer;
pub mod priority;
pub mod types;


pub use self::file::File;
pub use self::layer::CofLayer;
pub use self::priority::PriorityMatrix;
pub use self::types::{CompositeType, DrawEffect, WeaponClass};
