//! Format tests for `d2cof-rs` through the public API

mod animdata;
mod cof;
