//! EventHub CLI library.
//!
//! This crate provides the command-line interface, the interactive REPL and
//! the plain-text rendering both of them share.

pub mod cli;
pub mod commands;
pub mod render;
pub mod repl;
