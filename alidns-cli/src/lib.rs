//! Command layer for the `alidns` binary.
//!
//! Kept as a library so the whole argument-to-output path can be driven in
//! tests with injected writers and API factories.

pub mod cli;
pub mod output;
