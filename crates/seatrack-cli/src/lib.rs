//! Seatrack CLI library.
//!
//! Terminal styling and output formatting shared by the `seatrack` binary
//! subcommands.

pub mod output;
pub mod terminal;
