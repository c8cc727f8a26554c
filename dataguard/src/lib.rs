// dataguard/src/lib.rs
//! # DataGuard CLI Application
//!
//! This crate provides the command-line interface for the `dataguard-core` validation
//! and sanitization library, plus the small test harness behind `dataguard self-test`.

pub mod cli;
pub mod commands;
pub mod harness;
pub mod logger;
pub mod ui;

pub use harness::{expect, TestRunner};
