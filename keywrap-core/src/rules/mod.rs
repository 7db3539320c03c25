//! Rule compilation for the rewrite engines.
//!
//! Turns the embedded `RewriteConfig` into regexes plus replacement
//! templates that the engines in `crate::engines` apply pass by pass.

pub mod compiler;
