//! Randomized directory/file tree ("fixture") generation.
//!
//! <br>
//!
//! ##### Feature Overview
//!
//! | | <span style="font-weight:normal"><i>configured by</i></span> | <span style="font-weight:normal"><i>returns</i></span>
//! |-----------------------------|---------------------------------|:--------------------:|
//! | [`FixtureGenerator::new`]       | *destination / directory name*  | [`FixtureGenerator`] <br><sup style="text-align: right">(or [`FixtureRootError`])</sup> |
//! | [`FixtureGenerator::generate`]  | [`FixtureConfig`]               | `()` <br><sup style="text-align: right">(or [`TreeGenerationError`])</sup> |
//! | [`FixtureGenerator::destroy`]   |                                 | `()` <br><sup style="text-align: right">(or [`FixtureRemovalError`])</sup> |
//! | [`FixtureGenerator::with_tree`] | *a closure receiving the root*  | *closure output* <br><sup style="text-align: right">(or [`ScopedFixtureError`])</sup> |
//!
//!
//! [`FixtureRootError`]: crate::error::FixtureRootError
//! [`TreeGenerationError`]: crate::error::TreeGenerationError
//! [`FixtureRemovalError`]: crate::error::FixtureRemovalError
//! [`ScopedFixtureError`]: crate::error::ScopedFixtureError


mod bounded;
mod config;
mod generator;


pub use bounded::*;
pub use config::*;
pub use generator::*;
