//! Command line front end of `ouilookup`: flag parsing, dispatch and terminal output.

pub mod commands;
pub mod terminal;

pub const BIN_NAME: &str = "ouilookup";
