//! `AnimData.d2` file format constants.

/// Number of buckets in the table; every file has exactly this many
pub const BUCKET_COUNT: usize = 256;

/// Maximum number of records a single bucket may declare
pub const MAX_RECORDS_PER_BUCKET: usize = 67;

/// Upper bound on the number of records in a file
pub const MAX_RECORDS: usize = BUCKET_COUNT * MAX_RECORDS_PER_BUCKET;

/// Size of the record count field at the start of each bucket
pub const RECORD_COUNT_SIZE: usize = 4;

/// Size of the zero-terminated name field (7 characters + terminator)
pub const NAME_FIELD_SIZE: usize = 8;

/// Size of the reserved padding after the speed field
pub const SPEED_PADDING_SIZE: usize = 2;

/// Number of per-frame event slots in each record
pub const EVENT_SLOT_COUNT: usize = 144;

/// Size of one record on disk (name + frames + speed + padding + events)
pub const RECORD_SIZE: usize = NAME_FIELD_SIZE + 4 + 2 + SPEED_PADDING_SIZE + EVENT_SLOT_COUNT;

/// Speed is stored in 256ths of a frame per game tick
pub const SPEED_DIVISOR: f64 = 256.0;

/// Game ticks per second
pub const SPEED_BASE_FPS: f64 = 25.0;

/// Milliseconds per second
pub const MILLISECONDS: f64 = 1000.0;
