//! Directory cataloging: pre-order traversal of a filesystem subtree
//! into an ordered sequence of immutable [`CatalogEntry`] records.
//!
//! <br>
//!
//! ##### Feature Overview
//!
//! | | <span style="font-weight:normal"><i>takes</i></span> | <span style="font-weight:normal"><i>returns</i></span>
//! |-----------------------------|---------------------------------|:--------------------:|
//! | [`catalog_directory`]  | *a directory path (relative or absolute)* | [`Vec<CatalogEntry>`] <br><sup style="text-align: right">(or [`CatalogError`])</sup> |
//! | [`render_catalog`]     | *a slice of entries*                      | [`Vec<String>`] |
//!
//!
//! [`CatalogError`]: crate::error::CatalogError


mod entry;
mod render;
mod walk;


pub use entry::*;
pub use render::*;
pub use walk::*;
