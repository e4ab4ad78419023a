use std::path::PathBuf;

use thiserror::Error;


/// An error that can occur when cataloging a directory subtree.
///
/// A failed walk yields no partial results; the entry sequence is
/// returned only on full completion.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The provided traversal root doesn't exist.
    #[error("path doesn't exist: {}", .path.display())]
    NotFound {
        /// The path that couldn't be cataloged.
        path: PathBuf,
    },

    /// The provided traversal root exists, but is not a directory.
    #[error(
        "path exists, but is not a directory: {}",
        .path.display()
    )]
    NotADirectory {
        /// The path that couldn't be cataloged.
        path: PathBuf,
    },

    /// The provided traversal root could not be turned into an absolute path.
    ///
    /// The inner [`std::io::Error`] will likely describe a more precise cause of this error.
    #[error("unable to resolve path into an absolute one: {}", .path.display())]
    UnableToResolvePath {
        /// The path we were unable to resolve.
        path: PathBuf,

        /// IO error describing why the path could not be resolved.
        #[source]
        error: std::io::Error,
    },

    /// A directory inside the subtree could not be read due to an IO error.
    ///
    /// The inner [`std::io::Error`] will likely describe a more precise cause of this error.
    #[error("unable to read directory: {}", .directory_path.display())]
    UnableToReadDirectory {
        /// The directory path that could not be read.
        directory_path: PathBuf,

        /// IO error describing why the directory could not be read.
        #[source]
        error: std::io::Error,
    },

    /// A directory contains an entry (i.e. directory or file)
    /// that could not be read due to an IO error.
    ///
    /// The inner [`std::io::Error`] will likely describe a more precise cause of this error.
    #[error("unable to read directory entry for {}", .directory_path.display())]
    UnableToReadDirectoryEntry {
        /// The directory path whose entries could not be read.
        directory_path: PathBuf,

        /// IO error describing why the given file or directory could not be read.
        #[source]
        error: std::io::Error,
    },
}
