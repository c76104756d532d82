//! piboard manager library
//!
//! Command implementations behind the `piboard` CLI.

pub mod cli_output;
pub mod commands;
