//! # Scaffold Core
//!
//! Two independent, stateless libraries:
//!
//! * **[`math`]**: elementary arithmetic over `f64` with argument validation.
//! * **[`text`]**: trimming, case conversion, splitting, joining and replacement.
//!
//! Neither library logs. Both are usable headless and from any number of threads.
//! The [`demo`] module strings them together into the reports shown by the CLI.

pub mod demo;
pub mod math;
pub mod text;

pub use math::Calculator;
pub use scaffold_common::{Error, Result};
