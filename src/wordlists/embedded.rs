//! Embedded word lists
//!
//! Generated from `data/answers.txt` and `data/allowed.txt` at build time.

include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));
