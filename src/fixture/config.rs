use std::fmt;

use super::bounded::{BoundedCount, DEFAULT_UPPER_LIMIT};
use crate::error::FixtureConfigurationError;


/// The full set of fixture generation options.
///
/// This is a plain value struct: constructing it performs no validation.
/// Pass it to [`FixtureConfig::configure`][super::FixtureConfig::configure]
/// (or [`FixtureGenerator::configure`][super::FixtureGenerator::configure]),
/// which validates the complete set and replaces the active configuration
/// atomically.
///
///
/// # Examples
/// ```
/// # use fs_fixture_catalog::fixture::FixtureConfigOptions;
/// let options = FixtureConfigOptions {
///     use_random_file_count: false,
///     file_count: 3,
///     depth: 1,
///     ..Default::default()
/// };
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FixtureConfigOptions {
    /// Whether to draw the per-directory subdirectory count
    /// from `[min_directory_count, max_directory_count]`
    /// instead of using the fixed `directory_count`.
    pub use_random_directory_count: bool,

    /// Whether to draw the per-directory file count
    /// from `[min_file_count, max_file_count]`
    /// instead of using the fixed `file_count`.
    pub use_random_file_count: bool,

    /// Lower bound (inclusive) for the randomized file count.
    pub min_file_count: u32,

    /// Upper bound (inclusive) for the randomized file count.
    pub max_file_count: u32,

    /// Lower bound (inclusive) for the randomized subdirectory count.
    pub min_directory_count: u32,

    /// Upper bound (inclusive) for the randomized subdirectory count.
    pub max_directory_count: u32,

    /// Fixed per-directory file count, used when
    /// `use_random_file_count` is disabled.
    pub file_count: u32,

    /// Fixed per-directory subdirectory count, used when
    /// `use_random_directory_count` is disabled.
    pub directory_count: u32,

    /// Prefix prepended to generated file names.
    pub file_prefix: String,

    /// Prefix prepended to generated directory names.
    pub directory_prefix: String,

    /// Maximum recursion depth of the generated tree.
    ///
    /// `0` yields a single populated directory with no subdirectories,
    /// `d` yields subdirectories nested `d` levels deep,
    /// each level populated with files.
    pub depth: u32,

    /// Candidate file extensions (without the leading dot).
    /// Must contain at least one entry.
    pub extensions: Vec<String>,
}

impl Default for FixtureConfigOptions {
    fn default() -> Self {
        Self {
            use_random_directory_count: true,
            use_random_file_count: true,
            min_file_count: 1,
            max_file_count: 8,
            min_directory_count: 1,
            max_directory_count: 5,
            file_count: 5,
            directory_count: 5,
            file_prefix: String::from("file_"),
            directory_prefix: String::from("dir_"),
            depth: 3,
            extensions: vec![
                String::from("txt"),
                String::from("tmp"),
                String::from("md"),
                String::from("log"),
            ],
        }
    }
}



/// A validated fixture generation configuration.
///
/// Numeric fields are bounded: counts must lie in `(0, 30]`
/// and the depth in `[0, 30]`, validated at assignment time
/// (see [`BoundedCount`]). A rejected assignment leaves the previous
/// value in place. Randomized count pairs additionally maintain
/// `min < max`.
///
/// The [`extensions`][Self::extensions] list stays publicly mutable;
/// it is re-read on every generation pass, so removing or appending
/// extensions between passes takes effect immediately.
///
/// The [`Display`][fmt::Display] implementation dumps every field as a
/// `key = value` line, in declaration order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FixtureConfig {
    /// See [`FixtureConfigOptions::use_random_directory_count`].
    pub use_random_directory_count: bool,

    /// See [`FixtureConfigOptions::use_random_file_count`].
    pub use_random_file_count: bool,

    min_file_count: BoundedCount,

    max_file_count: BoundedCount,

    min_directory_count: BoundedCount,

    max_directory_count: BoundedCount,

    file_count: BoundedCount,

    directory_count: BoundedCount,

    /// Prefix prepended to generated file names.
    pub file_prefix: String,

    /// Prefix prepended to generated directory names.
    pub directory_prefix: String,

    depth: u32,

    /// Candidate file extensions (without the leading dot).
    ///
    /// This is a live list: mutations after configuration are picked up
    /// by the next generation pass. Emptying it makes generation fail
    /// with [`FixtureConfigurationError::EmptyExtensionList`].
    pub extensions: Vec<String>,
}

impl FixtureConfig {
    /// Validates the given options and builds a configuration from them.
    ///
    ///
    /// # Errors
    /// Returns a [`FixtureConfigurationError`] if any numeric field is out
    /// of bounds, a min/max pair is not strictly ascending, or the
    /// extension list is empty.
    pub fn from_options(
        options: FixtureConfigOptions,
    ) -> Result<Self, FixtureConfigurationError> {
        ensure_ascending_pair(
            "min_file_count",
            "max_file_count",
            options.min_file_count,
            options.max_file_count,
        )?;
        ensure_ascending_pair(
            "min_directory_count",
            "max_directory_count",
            options.min_directory_count,
            options.max_directory_count,
        )?;

        if options.extensions.is_empty() {
            return Err(FixtureConfigurationError::EmptyExtensionList);
        }

        validate_depth(options.depth)?;

        Ok(Self {
            use_random_directory_count: options.use_random_directory_count,
            use_random_file_count: options.use_random_file_count,
            min_file_count: BoundedCount::new("min_file_count", options.min_file_count)?,
            max_file_count: BoundedCount::new("max_file_count", options.max_file_count)?,
            min_directory_count: BoundedCount::new(
                "min_directory_count",
                options.min_directory_count,
            )?,
            max_directory_count: BoundedCount::new(
                "max_directory_count",
                options.max_directory_count,
            )?,
            file_count: BoundedCount::new("file_count", options.file_count)?,
            directory_count: BoundedCount::new("directory_count", options.directory_count)?,
            file_prefix: options.file_prefix,
            directory_prefix: options.directory_prefix,
            depth: options.depth,
            extensions: options.extensions,
        })
    }

    /// Replaces the entire configuration atomically.
    ///
    /// The full option set is validated first; on any error the existing
    /// configuration is left untouched. Partial updates are not supported
    /// by this operation — use the individual setters instead.
    pub fn configure(
        &mut self,
        options: FixtureConfigOptions,
    ) -> Result<(), FixtureConfigurationError> {
        *self = Self::from_options(options)?;

        Ok(())
    }

    /// Lower bound (inclusive) for the randomized file count.
    pub fn min_file_count(&self) -> u32 {
        self.min_file_count.get()
    }

    /// Upper bound (inclusive) for the randomized file count.
    pub fn max_file_count(&self) -> u32 {
        self.max_file_count.get()
    }

    /// Lower bound (inclusive) for the randomized subdirectory count.
    pub fn min_directory_count(&self) -> u32 {
        self.min_directory_count.get()
    }

    /// Upper bound (inclusive) for the randomized subdirectory count.
    pub fn max_directory_count(&self) -> u32 {
        self.max_directory_count.get()
    }

    /// Fixed per-directory file count.
    pub fn file_count(&self) -> u32 {
        self.file_count.get()
    }

    /// Fixed per-directory subdirectory count.
    pub fn directory_count(&self) -> u32 {
        self.directory_count.get()
    }

    /// Maximum recursion depth of the generated tree.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Sets the lower bound for the randomized file count.
    pub fn set_min_file_count(&mut self, value: u32) -> Result<(), FixtureConfigurationError> {
        self.min_file_count.check(value)?;
        ensure_ascending_pair(
            "min_file_count",
            "max_file_count",
            value,
            self.max_file_count.get(),
        )?;

        self.min_file_count.set(value)
    }

    /// Sets the upper bound for the randomized file count.
    pub fn set_max_file_count(&mut self, value: u32) -> Result<(), FixtureConfigurationError> {
        self.max_file_count.check(value)?;
        ensure_ascending_pair(
            "min_file_count",
            "max_file_count",
            self.min_file_count.get(),
            value,
        )?;

        self.max_file_count.set(value)
    }

    /// Sets the lower bound for the randomized subdirectory count.
    pub fn set_min_directory_count(
        &mut self,
        value: u32,
    ) -> Result<(), FixtureConfigurationError> {
        self.min_directory_count.check(value)?;
        ensure_ascending_pair(
            "min_directory_count",
            "max_directory_count",
            value,
            self.max_directory_count.get(),
        )?;

        self.min_directory_count.set(value)
    }

    /// Sets the upper bound for the randomized subdirectory count.
    pub fn set_max_directory_count(
        &mut self,
        value: u32,
    ) -> Result<(), FixtureConfigurationError> {
        self.max_directory_count.check(value)?;
        ensure_ascending_pair(
            "min_directory_count",
            "max_directory_count",
            self.min_directory_count.get(),
            value,
        )?;

        self.max_directory_count.set(value)
    }

    /// Sets the fixed per-directory file count.
    pub fn set_file_count(&mut self, value: u32) -> Result<(), FixtureConfigurationError> {
        self.file_count.set(value)
    }

    /// Sets the fixed per-directory subdirectory count.
    pub fn set_directory_count(&mut self, value: u32) -> Result<(), FixtureConfigurationError> {
        self.directory_count.set(value)
    }

    /// Sets the maximum recursion depth of the generated tree.
    pub fn set_depth(&mut self, value: u32) -> Result<(), FixtureConfigurationError> {
        validate_depth(value)?;

        self.depth = value;

        Ok(())
    }
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self::from_options(FixtureConfigOptions::default())
            // PANIC SAFETY: The default option set is statically valid.
            .expect("default fixture options should pass validation")
    }
}

impl fmt::Display for FixtureConfig {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            formatter,
            "use_random_directory_count = {}",
            self.use_random_directory_count
        )?;
        writeln!(
            formatter,
            "use_random_file_count = {}",
            self.use_random_file_count
        )?;
        writeln!(formatter, "min_file_count = {}", self.min_file_count.get())?;
        writeln!(formatter, "max_file_count = {}", self.max_file_count.get())?;
        writeln!(
            formatter,
            "min_directory_count = {}",
            self.min_directory_count.get()
        )?;
        writeln!(
            formatter,
            "max_directory_count = {}",
            self.max_directory_count.get()
        )?;
        writeln!(formatter, "file_count = {}", self.file_count.get())?;
        writeln!(formatter, "directory_count = {}", self.directory_count.get())?;
        writeln!(formatter, "file_prefix = {}", self.file_prefix)?;
        writeln!(formatter, "directory_prefix = {}", self.directory_prefix)?;
        writeln!(formatter, "depth = {}", self.depth)?;
        writeln!(formatter, "extensions = {:?}", self.extensions)?;

        Ok(())
    }
}


/// Validates that a randomized count pair is strictly ascending.
fn ensure_ascending_pair(
    minimum_field: &'static str,
    maximum_field: &'static str,
    minimum: u32,
    maximum: u32,
) -> Result<(), FixtureConfigurationError> {
    if minimum >= maximum {
        return Err(FixtureConfigurationError::InvertedCountRange {
            minimum_field,
            maximum_field,
            minimum,
            maximum,
        });
    }

    Ok(())
}

/// Validates the tree depth.
///
/// Unlike the counts, a depth of zero is meaningful
/// (a single populated directory with no subdirectories),
/// so only the upper limit applies.
fn validate_depth(value: u32) -> Result<(), FixtureConfigurationError> {
    if value > DEFAULT_UPPER_LIMIT {
        return Err(FixtureConfigurationError::ValueOutOfRange {
            field: "depth",
            value,
            minimum: 0,
            maximum: DEFAULT_UPPER_LIMIT,
        });
    }

    Ok(())
}



#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn default_configuration_matches_documented_defaults() {
        let config = FixtureConfig::default();

        assert!(config.use_random_directory_count);
        assert!(config.use_random_file_count);
        assert_eq!(config.min_file_count(), 1);
        assert_eq!(config.max_file_count(), 8);
        assert_eq!(config.min_directory_count(), 1);
        assert_eq!(config.max_directory_count(), 5);
        assert_eq!(config.file_count(), 5);
        assert_eq!(config.directory_count(), 5);
        assert_eq!(config.file_prefix, "file_");
        assert_eq!(config.directory_prefix, "dir_");
        assert_eq!(config.depth(), 3);
        assert_eq!(config.extensions, ["txt", "tmp", "md", "log"]);
    }

    #[test]
    fn configure_replaces_the_whole_configuration() {
        let mut config = FixtureConfig::default();

        config
            .configure(FixtureConfigOptions {
                use_random_file_count: false,
                file_count: 7,
                directory_count: 4,
                ..Default::default()
            })
            .unwrap();

        assert!(!config.use_random_file_count);
        assert_eq!(config.file_count(), 7);
        assert_eq!(config.directory_count(), 4);
    }

    #[test]
    fn configure_with_invalid_options_leaves_configuration_untouched() {
        let mut config = FixtureConfig::default();
        config.set_file_count(9).unwrap();

        let error = config.configure(FixtureConfigOptions {
            file_count: 99,
            ..Default::default()
        });

        assert_matches!(
            error.unwrap_err(),
            FixtureConfigurationError::ValueOutOfRange {
                field: "file_count",
                value: 99,
                ..
            }
        );
        assert_eq!(config.file_count(), 9);
    }

    #[test]
    fn configure_rejects_inverted_ranges() {
        let mut config = FixtureConfig::default();

        let error = config.configure(FixtureConfigOptions {
            min_file_count: 8,
            max_file_count: 2,
            ..Default::default()
        });

        assert_matches!(
            error.unwrap_err(),
            FixtureConfigurationError::InvertedCountRange {
                minimum_field: "min_file_count",
                maximum_field: "max_file_count",
                minimum: 8,
                maximum: 2,
            }
        );
    }

    #[test]
    fn configure_rejects_empty_extension_list() {
        let mut config = FixtureConfig::default();

        let error = config.configure(FixtureConfigOptions {
            extensions: Vec::new(),
            ..Default::default()
        });

        assert_matches!(
            error.unwrap_err(),
            FixtureConfigurationError::EmptyExtensionList
        );
    }

    #[test]
    fn individual_setters_keep_the_pair_invariant() {
        let mut config = FixtureConfig::default();

        // max_file_count defaults to 8; a minimum at or above it is invalid.
        assert_matches!(
            config.set_min_file_count(8).unwrap_err(),
            FixtureConfigurationError::InvertedCountRange { .. }
        );

        config.set_max_file_count(10).unwrap();
        config.set_min_file_count(8).unwrap();

        assert_eq!(config.min_file_count(), 8);
        assert_eq!(config.max_file_count(), 10);
    }

    #[test]
    fn zero_max_file_count_is_rejected_and_previous_value_kept() {
        let mut config = FixtureConfig::default();

        assert_matches!(
            config.set_max_file_count(0).unwrap_err(),
            FixtureConfigurationError::ValueOutOfRange {
                field: "max_file_count",
                value: 0,
                ..
            }
        );
        assert_eq!(config.max_file_count(), 8);
    }

    #[test]
    fn depth_zero_is_valid() {
        let mut config = FixtureConfig::default();

        config.set_depth(0).unwrap();

        assert_eq!(config.depth(), 0);
    }

    #[test]
    fn depth_above_upper_limit_is_rejected() {
        let mut config = FixtureConfig::default();

        assert_matches!(
            config.set_depth(31).unwrap_err(),
            FixtureConfigurationError::ValueOutOfRange { field: "depth", value: 31, .. }
        );
    }

    #[test]
    fn display_dumps_fields_in_declaration_order() {
        let config = FixtureConfig::default();

        let dump = config.to_string();
        let lines: Vec<&str> = dump.lines().collect();

        assert_eq!(
            lines,
            [
                "use_random_directory_count = true",
                "use_random_file_count = true",
                "min_file_count = 1",
                "max_file_count = 8",
                "min_directory_count = 1",
                "max_directory_count = 5",
                "file_count = 5",
                "directory_count = 5",
                "file_prefix = file_",
                "directory_prefix = dir_",
                "depth = 3",
                "extensions = [\"txt\", \"tmp\", \"md\", \"log\"]",
            ]
        );
    }
}
