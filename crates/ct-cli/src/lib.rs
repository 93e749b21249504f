//! Cardtrail CLI library.
//!
//! This crate provides the CLI interface over board exports.

mod cli;
pub mod commands;
mod config;
pub mod export;

pub use cli::{CardArgs, Cli, Commands};
pub use config::Config;
