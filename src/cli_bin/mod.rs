//! CLI module for the devto-publish command-line interface
//!
//! Argument parsing and the command handler that drives the library's
//! publisher and renders its outcomes on the console.

pub mod args;
pub mod commands;
