//! Board rendering for the command-line front end.

pub mod generator;

pub use generator::*;
