//! Error types for fixture generation and directory cataloging.
//!
//! Errors are grouped per operation: configuration and root resolution
//! errors surface before any filesystem mutation, while generation,
//! removal and catalog errors carry the offending path alongside the
//! underlying [`std::io::Error`].

mod catalog;
mod fixture;

pub use catalog::*;
pub use fixture::*;
