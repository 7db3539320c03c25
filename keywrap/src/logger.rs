// keywrap/src/logger.rs
//! Logger setup for the keywrap binary.
//!
//! Logs go to stderr so stdout only carries the status lines.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initializes `env_logger`.
///
/// `RUST_LOG` is honoured, defaulting to `warn`. A `level` overrides it:
/// `Off` silences everything, any other level applies to the keywrap crates.
/// Calling this more than once is harmless.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.target(Target::Stderr);

    match level {
        Some(LevelFilter::Off) => {
            builder.filter_level(LevelFilter::Off);
        }
        Some(level) => {
            builder
                .filter_module("keywrap", level)
                .filter_module("keywrap_core", level);
        }
        None => {}
    }

    // Already initialized (e.g. by another test); keep the existing logger.
    let _ = builder.try_init();
}
