//! CLI subcommand implementations.

pub mod ancestry;
pub mod creator;
pub mod durations;
pub mod members;
mod util;

#[cfg(test)]
mod fixtures;
