//! Concrete `RewriteEngine` implementations.
//!
//! # License
//! MIT OR APACHE 2.0

pub mod fixed_point;
