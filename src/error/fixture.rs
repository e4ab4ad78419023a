use std::path::PathBuf;

use thiserror::Error;


/// Fixture configuration error.
///
/// Raised synchronously when a configuration value is assigned,
/// never deferred to generation time (with the exception of
/// [`EmptyExtensionList`][Self::EmptyExtensionList], since the extension
/// list stays publicly mutable after configuration).
#[derive(Error, Debug)]
pub enum FixtureConfigurationError {
    /// A bounded numeric field was assigned a value outside its range.
    ///
    /// The range is exclusive at the bottom and inclusive at the top,
    /// i.e. valid values satisfy `minimum < value <= maximum`.
    /// The previously stored value remains in place.
    #[error(
        "invalid value {} for \"{}\": expected an integer in range ({}, {}]",
        .value,
        .field,
        .minimum,
        .maximum
    )]
    ValueOutOfRange {
        /// Name of the configuration field that rejected the value.
        field: &'static str,

        /// The offending value.
        value: u32,

        /// Exclusive lower bound of the field.
        minimum: u32,

        /// Inclusive upper bound of the field.
        maximum: u32,
    },

    /// A randomized count range has its minimum at or above its maximum.
    ///
    /// Both fields individually passed their bounds check,
    /// but together they describe an empty sampling range.
    #[error(
        "invalid range for \"{}\"/\"{}\": minimum {} must be less than maximum {}",
        .minimum_field,
        .maximum_field,
        .minimum,
        .maximum
    )]
    InvertedCountRange {
        /// Name of the minimum field of the pair.
        minimum_field: &'static str,

        /// Name of the maximum field of the pair.
        maximum_field: &'static str,

        /// The configured minimum.
        minimum: u32,

        /// The configured maximum.
        maximum: u32,
    },

    /// The candidate file extension list is empty.
    ///
    /// At least one extension is required to generate file names.
    #[error("the file extension list must contain at least one extension")]
    EmptyExtensionList,
}



/// Fixture root path resolution error.
///
/// All variants are raised before any filesystem mutation occurs.
#[derive(Error, Debug)]
pub enum FixtureRootError {
    /// The provided directory name is a path, not a bare name.
    #[error(
        "directory name must be a bare folder name, not a path: {}",
        .directory_name
    )]
    DirectoryNameIsAPath {
        /// The offending directory name.
        directory_name: String,
    },

    /// A directory name was provided together with a relative destination.
    ///
    /// When a directory name is given, the destination must be
    /// an absolute path (or absent).
    #[error(
        "destination must be an absolute path when a directory name is given: {}",
        .destination.display()
    )]
    DestinationNotAbsolute {
        /// The offending relative destination path.
        destination: PathBuf,
    },

    /// The provided or resolved path could not be turned into an absolute path.
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

    /// The resolved fixture root did not exist and could not be created.
    ///
    /// For example, this can happen due to missing write permissions.
    #[error("unable to create fixture root directory: {}", .root_path.display())]
    UnableToCreateRoot {
        /// The fixture root directory we were unable to create.
        root_path: PathBuf,

        /// IO error describing why the root could not be created.
        #[source]
        error: std::io::Error,
    },
}



/// Fixture tree generation error.
///
/// A failed generation leaves whatever partial tree existed
/// at the point of failure; no rollback is attempted
/// (see [`FixtureGenerator::with_tree`] for guaranteed cleanup).
///
///
/// [`FixtureGenerator::with_tree`]: crate::fixture::FixtureGenerator::with_tree
#[derive(Error, Debug)]
pub enum TreeGenerationError {
    /// The configuration is unusable at generation time.
    ///
    /// This currently only occurs when the live extension list
    /// has been emptied after configuration.
    #[error(transparent)]
    ConfigurationError(#[from] FixtureConfigurationError),

    /// Failed to create a directory inside the fixture tree.
    ///
    /// The inner [`std::io::Error`] will likely describe a more precise cause of this error.
    #[error("unable to create fixture directory: {}", .directory_path.display())]
    UnableToCreateDirectory {
        /// Directory we were unable to create.
        directory_path: PathBuf,

        /// IO error describing why the directory could not be created.
        #[source]
        error: std::io::Error,
    },

    /// Failed to create or write a file inside the fixture tree.
    ///
    /// The inner [`std::io::Error`] will likely describe a more precise cause of this error.
    #[error("unable to write fixture file: {}", .file_path.display())]
    UnableToWriteFile {
        /// File we were unable to create or write.
        file_path: PathBuf,

        /// IO error describing why the file could not be written.
        #[source]
        error: std::io::Error,
    },
}



/// Fixture tree removal error.
#[derive(Error, Debug)]
pub enum FixtureRemovalError {
    /// The fixture root does not exist (anymore).
    ///
    /// Returned by repeated teardown calls; distinct from other removal
    /// failures so callers can treat it as an idempotence signal.
    #[error("fixture root does not exist: {}", .root_path.display())]
    RootNotFound {
        /// The missing fixture root path.
        root_path: PathBuf,
    },

    /// The fixture tree (or part of it) could not be removed.
    ///
    /// The inner [`std::io::Error`] will likely describe a more precise cause of this error.
    #[error("unable to remove fixture tree at {}", .root_path.display())]
    UnableToRemoveTree {
        /// The fixture root whose tree could not be removed.
        root_path: PathBuf,

        /// IO error describing why the tree could not be removed.
        #[source]
        error: std::io::Error,
    },
}



/// Scoped fixture lifecycle error (see [`FixtureGenerator::with_tree`]).
///
///
/// [`FixtureGenerator::with_tree`]: crate::fixture::FixtureGenerator::with_tree
#[derive(Error, Debug)]
pub enum ScopedFixtureError {
    /// Building the fixture tree failed.
    ///
    /// Teardown of the partial tree has still been attempted.
    #[error(transparent)]
    GenerationError(#[from] TreeGenerationError),

    /// Tearing the fixture tree down failed after the scoped block completed.
    #[error(transparent)]
    RemovalError(#[from] FixtureRemovalError),
}
