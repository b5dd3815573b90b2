//! `AnimData.d2` file format support.
//!
//! `AnimData.d2` is a global table describing, for every animation token
//! (e.g. `AMA1HTH` = Amazon, attack 1, hand-to-hand), how many frames the
//! animation has, how fast it plays and which frames trigger game events.
//!
//! # File Structure
//!
//! The file is a sequence of exactly 256 buckets with no header, no end marker
//! and no checksum. The only structural check available is that decoding the
//! 256 buckets consumes the buffer exactly.
//!
//! ```text
//! Bucket (repeated 256 times)
//! Offset  Size  Field         Description
//! ------  ----  ------------  ------------------------------------------
//! +0x00   4     count         Number of records in this bucket (<= 67, LE)
//! +0x04   160   record[0]     First record
//! ...     160   record[n]     Remaining records
//!
//! Record (160 bytes)
//! Offset  Size  Field         Description
//! ------  ----  ------------  ------------------------------------------
//! +0x00   8     name          Name, zero padded, last byte must be zero
//! +0x08   4     frame_count   Frames per direction (LE)
//! +0x0C   2     speed         256ths of a frame per tick (LE)
//! +0x0E   2     padding       Ignored
//! +0x10   144   events        One event code per frame slot
//! ```
//!
//! A record is placed in bucket [`hash_name`]`(name)`. Because the start of
//! bucket N depends on the record counts of every earlier bucket, buckets are
//! decoded strictly in order.
//!
//! # Usage
//!
//! ```no_run
//! use d2cof_types::file::animdata::File;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let animdata = File::from_bytes(&std::fs::read("AnimData.d2")?)?;
//!
//! for record in animdata.records("AMA1HTH") {
//!     println!("{record}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod file;
pub mod hash;
pub mod record;


pub use self::file::{File, MisplacedRecord};
pub use self::hash::{HashJournal, hash_name};
pub use self::record::{AnimationRecord, Bucket};
