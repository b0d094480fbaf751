//! Common utilities for the slidetext converter.
//!
//! This crate provides shared infrastructure used by all converter components:
//! - **Warning System** - colored, deduplicated stderr output for input the
//!   converter recovers from (unsupported CSS, bad colors, HTML parse errors)

pub mod warning;
