// dataguard/src/ui/mod.rs
//! Console output helpers for the CLI.

pub mod output_format;
