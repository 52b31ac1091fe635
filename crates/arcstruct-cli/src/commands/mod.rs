//! Subcommand implementations.

pub mod formats;
pub mod inspect;
