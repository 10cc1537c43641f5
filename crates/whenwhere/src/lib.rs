//! whenwhere — share a moment in time and a set of time zones as a URL.
//!
//! The codec lives in [`whenwhere_core`]; this crate adds the `whenwhere`
//! command-line front end.

pub mod cli;

pub use whenwhere_core::*;
