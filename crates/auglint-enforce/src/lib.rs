//! Enforcement of the transform default-argument convention.
//!
//! A001: apply-methods of transform classes must not declare parameter
//! defaults. Transform parameters belong in `__init__`; the `apply*` entry
//! points receive fully resolved values at call time.
//!
//! - [`violations`] — the rule itself, one class at a time
//! - [`engine`] — composes walk → parse → family selection → rule
//! - [`types`] — the scan result consumed by formatters

pub mod engine;
pub mod types;
pub mod violations;
