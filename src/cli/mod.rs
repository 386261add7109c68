//! CLI module - command-line interface
//!
//! Contains the subcommand handlers used by the binary.

pub mod commands;
