//! Report modules.

pub mod generator;

pub use generator::*;
