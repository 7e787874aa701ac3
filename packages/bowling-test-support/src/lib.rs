//! Test support utilities shared by the bowling crates.

pub mod logging;
