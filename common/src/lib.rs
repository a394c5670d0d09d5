//! Shared building blocks for the scaffold workspace.
//!
//! * [`error`]: the error type returned by the core libraries.
//! * [`config`]: runtime knobs shared between the CLI and its drivers.
//! * [`log`]: the named, leveled logging façade handed to drivers.
//!
//! `config` and `log` sit behind the default `log` feature. The core libraries depend on
//! this crate with default features off, so they only ever see [`error`].

#[cfg(feature = "log")]
pub mod config;
pub mod error;
#[cfg(feature = "log")]
pub mod log;

pub use error::{Error, Result};
