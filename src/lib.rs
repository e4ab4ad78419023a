//! Filesystem cataloging and randomized directory tree fixtures
//! built on top of [`std::fs`].
//!
//!
//! # Main features
//! - generate randomized, bounded directory/file trees ("fixtures") with:
//!     - validated numeric configuration (counts, ranges, depth), and
//!     - guaranteed teardown via a scoped lifecycle,
//! - recursively catalog a directory subtree into immutable entry records.
//!
//! <br>
//!
//! Visit the [`fixture`] and [`catalog`] modules
//! for more information and a list of available functions.
//!
//!
//! <br>
//!
//! # Feature flags
//! The following feature flags enable optional functionality:
//! - `dunce` (*enabled by default*): enables the optional [`dunce`](../dunce/index.html) support.
//!   This automatically strips Windows' UNC paths if they can be represented
//!   using the usual type of path (e.g. `\\?\C:\foo -> C:\foo`), both in the
//!   resolved fixture root and in catalog traversal roots.
//!   This has an effect only when compiling for Windows targets.
//! - `fs-err` (*disabled by default*): enables the optional [`fs-err`](../fs_err/index.html) support.
//!   While `fs-fixture-catalog` already provides quite extensive [error types](crate::error),
//!   this does enable more helpful error messages for underlying IO errors.
//!
//!
//! <br>
//!
//! # Examples
//!
//! Generating a fixture tree, cataloging it, and tearing it down:
//! ```no_run
//! # use fs_fixture_catalog::fixture::FixtureGenerator;
//! # use fs_fixture_catalog::catalog::catalog_directory;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = FixtureGenerator::new(None, Some("fixtures"))?;
//!
//! let entries = generator.with_tree(|root_path| catalog_directory(root_path))??;
//!
//! for entry in &entries {
//!     println!(
//!         "{} (inside {})",
//!         entry.name(),
//!         entry.parent_name(),
//!     );
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Using a fixed-count configuration:
//! ```no_run
//! # use fs_fixture_catalog::fixture::{FixtureConfigOptions, FixtureGenerator};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut generator = FixtureGenerator::new(None, Some("fixtures"))?;
//!
//! generator.configure(FixtureConfigOptions {
//!     use_random_directory_count: false,
//!     use_random_file_count: false,
//!     directory_count: 2,
//!     file_count: 3,
//!     depth: 1,
//!     ..Default::default()
//! })?;
//!
//! generator.generate()?;
//! // ... exercise the tree ...
//! generator.destroy()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]


/// This brings in the README's doctests (and is present only when testing).
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;


pub mod catalog;
pub mod error;
pub mod fixture;

pub(crate) mod common;
mod macros;
