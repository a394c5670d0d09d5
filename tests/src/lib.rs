//! Cross-crate checks for the scaffold libraries.
//!
//! Everything here compiles only under `cargo test`.

mod arithmetic;
mod manifests;
mod text;
mod walkthrough;
