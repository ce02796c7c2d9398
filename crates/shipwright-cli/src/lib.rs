//! Shipwright CLI library.
//!
//! Terminal styling and output formatting shared by the `shipwright` binary.

pub mod output;
pub mod terminal;
