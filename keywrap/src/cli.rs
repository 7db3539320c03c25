// keywrap/src/cli.rs
//! Command-line interface definition for `keywrap`.
//!
//! The tool takes no positional arguments: the file it patches is fixed.
//! The flags here only control logging.

use clap::Parser;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "keywrap",
    version = env!("CARGO_PKG_VERSION"),
    about = "Wrap string-literal JsonCpp keys in std::string(...)",
    long_about = "keywrap rewrites license/server/WebAPI.cpp in place, turning every accessor of the form obj[\"key\"] (including chains such as obj[\"a\"][\"b\"]) into obj[std::string(\"key\")]. This avoids the ambiguous Json::Value::operator[] overload some compilers report for bare string literals.",
)]
pub struct Cli {
    /// Suppress all internal logging.
    #[arg(long, short = 'q', conflicts_with = "debug", help = "Suppress all internal logging.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for the keywrap crates).
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,
}

impl Cli {
    /// The log level requested on the command line, if any.
    pub fn log_level(&self) -> Option<log::LevelFilter> {
        if self.quiet {
            Some(log::LevelFilter::Off)
        } else if self.debug {
            Some(log::LevelFilter::Debug)
        } else {
            None
        }
    }
}
