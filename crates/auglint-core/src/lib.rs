//! Core types and configuration for auglint.
//!
//! This crate provides the data model shared across all auglint crates:
//! - [`types`] — Violation records, default-value rendering, and error types
//! - [`config`] — Configuration loading from `.auglint.json`

pub mod config;
pub mod types;
