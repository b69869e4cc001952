//! config-zero CLI Library
//!
//! Argument definitions, command handlers and console output for the
//! `config-zero` binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use error::CliError;
