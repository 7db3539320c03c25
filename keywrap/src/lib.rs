// keywrap/src/lib.rs
//! # keywrap CLI
//!
//! Patches `license/server/WebAPI.cpp` in place so that JsonCpp accessors
//! with string-literal keys go through an explicit `std::string`.
//! The rewrite logic lives in `keywrap-core`; this crate holds the CLI
//! definition, logging setup, the file wrapper and output formatting.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::patch::{run_patch, PatchOutcome, TARGET_FILE};
