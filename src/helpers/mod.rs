//! Helper functions shared across commands and the loader

mod date;

pub use date::*;
