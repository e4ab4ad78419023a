use std::path::{Path, PathBuf};

use log::{debug, info, trace};
use rand::{distributions::Alphanumeric, seq::SliceRandom, Rng};

use crate::use_enabled_fs_module;

use_enabled_fs_module!();

use super::{FixtureConfig, FixtureConfigOptions};
use crate::{
    common::to_absolute_path,
    error::{
        FixtureConfigurationError,
        FixtureRemovalError,
        FixtureRootError,
        ScopedFixtureError,
        TreeGenerationError,
    },
};


/// The directory name used when the fixture root is resolved
/// from an absolute destination (or from nothing at all).
pub const DEFAULT_ROOT_DIRECTORY_NAME: &str = "test_folder";


/// Characters a generated file body is drawn from.
///
/// Mirrors the usual "printable" set: digits, ASCII letters,
/// punctuation and a bit of whitespace.
const PRINTABLE_CHARACTERS: &[u8] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ\
      !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~ \t\n";


/// A generator of randomized, bounded directory/file trees.
///
/// The generator exclusively owns the filesystem subtree rooted at its
/// resolved root path for the duration of its lifetime. The root directory
/// itself is created at construction if it does not exist yet; its
/// descendants are only materialized by [`generate`][Self::generate]
/// (or the scoped [`with_tree`][Self::with_tree]).
///
///
/// # Examples
/// ```no_run
/// # use fs_fixture_catalog::fixture::FixtureGenerator;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let generator = FixtureGenerator::new(None, Some("fixtures"))?;
///
/// generator.generate()?;
/// println!("{}", generator.config());
/// generator.destroy()?;
/// # Ok(())
/// # }
/// ```
pub struct FixtureGenerator {
    root_path: PathBuf,

    config: FixtureConfig,
}

impl FixtureGenerator {
    /// Initializes a fixture generator, resolving its root path from
    /// an optional destination path and an optional bare directory name.
    ///
    /// Resolution precedence:
    /// 1. both given: `destination` must be absolute;
    ///    the root is `destination/directory_name`,
    /// 2. only `destination` given: if absolute, the root is
    ///    `destination/test_folder`; if relative, the root is the
    ///    absolutized destination itself,
    /// 3. only `directory_name` given: must be a bare name;
    ///    the root is the absolutized name,
    /// 4. neither given: the root is the absolutized `test_folder`.
    ///
    /// The resolved root directory is created immediately if it does not
    /// exist; the default [`FixtureConfig`] is applied.
    ///
    ///
    /// # Errors
    /// - [`DirectoryNameIsAPath`][FixtureRootError::DirectoryNameIsAPath]
    ///   if `directory_name` is an absolute path instead of a bare name,
    /// - [`DestinationNotAbsolute`][FixtureRootError::DestinationNotAbsolute]
    ///   if a `directory_name` is paired with a relative destination,
    /// - [`UnableToCreateRoot`][FixtureRootError::UnableToCreateRoot]
    ///   if the missing root directory could not be created.
    ///
    /// All validation happens before any filesystem mutation.
    pub fn new(
        destination: Option<&Path>,
        directory_name: Option<&str>,
    ) -> Result<Self, FixtureRootError> {
        let root_path = resolve_root_path(destination, directory_name)?;

        if !root_path.exists() {
            fs::create_dir(&root_path).map_err(|error| FixtureRootError::UnableToCreateRoot {
                root_path: root_path.clone(),
                error,
            })?;

            debug!("created fixture root at {}", root_path.display());
        }

        Ok(Self {
            root_path,
            config: FixtureConfig::default(),
        })
    }

    /// Returns the resolved fixture root path.
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &FixtureConfig {
        &self.config
    }

    /// Returns the active configuration mutably,
    /// allowing individual fields to be adjusted through their setters
    /// (and the extension list to be edited in place).
    pub fn config_mut(&mut self) -> &mut FixtureConfig {
        &mut self.config
    }

    /// Replaces the entire configuration atomically,
    /// see [`FixtureConfig::configure`].
    pub fn configure(
        &mut self,
        options: FixtureConfigOptions,
    ) -> Result<(), FixtureConfigurationError> {
        self.config.configure(options)
    }

    /// Creates one level of uniquely-named subdirectories
    /// under `parent_directory_path` and returns their names.
    ///
    /// The directory count is either the fixed `directory_count` or drawn
    /// uniformly from `[min_directory_count, max_directory_count]`,
    /// depending on `use_random_directory_count`. Names consist of the
    /// configured prefix plus a random alphanumeric suffix of 2 to 4
    /// characters; the suffix space is relied upon to statistically avoid
    /// collisions, there is no retry on a clash.
    pub fn create_directories(
        &self,
        parent_directory_path: &Path,
    ) -> Result<Vec<String>, TreeGenerationError> {
        let mut rng = rand::thread_rng();

        self.create_directories_with_rng(parent_directory_path, &mut rng)
    }

    /// Creates one level of randomly-named files with random printable
    /// contents under `parent_directory_path` and returns their names.
    ///
    /// The file count is resolved like the directory count
    /// (fixed value or uniform draw, depending on `use_random_file_count`).
    /// Each file is named `{file_prefix}{suffix}{index}.{extension}`,
    /// with the extension chosen uniformly from the configured list,
    /// and receives a body of 2 to 150 random printable characters.
    pub fn create_files(
        &self,
        parent_directory_path: &Path,
    ) -> Result<Vec<String>, TreeGenerationError> {
        let mut rng = rand::thread_rng();

        self.create_files_with_rng(parent_directory_path, &mut rng)
    }

    /// Builds the whole fixture tree under the root path,
    /// following the active configuration.
    ///
    /// Every level of the tree receives files; levels above the configured
    /// depth also receive subdirectories that are then recursed into.
    /// A depth of `0` therefore yields a single populated directory.
    ///
    ///
    /// # Errors
    /// Filesystem failures propagate as [`TreeGenerationError`];
    /// a failed generation leaves whatever partial tree existed at the
    /// point of failure (see [`with_tree`][Self::with_tree] for
    /// guaranteed cleanup).
    pub fn generate(&self) -> Result<(), TreeGenerationError> {
        let mut rng = rand::thread_rng();

        info!(
            "generating fixture tree at {} (depth {})",
            self.root_path.display(),
            self.config.depth()
        );

        self.generate_level(&self.root_path, self.config.depth(), 0, &mut rng)
    }

    /// Recursively removes the fixture root and everything beneath it.
    ///
    /// Succeeds even if the tree was only partially built.
    ///
    ///
    /// # Errors
    /// - [`RootNotFound`][FixtureRemovalError::RootNotFound]
    ///   if the root has already been removed,
    /// - [`UnableToRemoveTree`][FixtureRemovalError::UnableToRemoveTree]
    ///   for any other removal failure (e.g. missing permissions).
    pub fn destroy(&self) -> Result<(), FixtureRemovalError> {
        info!("removing fixture tree at {}", self.root_path.display());

        fs::remove_dir_all(&self.root_path).map_err(|error| {
            if error.kind() == std::io::ErrorKind::NotFound {
                FixtureRemovalError::RootNotFound {
                    root_path: self.root_path.clone(),
                }
            } else {
                FixtureRemovalError::UnableToRemoveTree {
                    root_path: self.root_path.clone(),
                    error,
                }
            }
        })
    }

    /// Builds the fixture tree, hands the root path to `action`,
    /// and tears the tree down again on every exit path.
    ///
    /// If `action` panics, teardown is still attempted (via a drop guard);
    /// in that case a teardown failure can only be logged, not returned.
    /// On the normal path a teardown failure is surfaced as
    /// [`ScopedFixtureError::RemovalError`].
    ///
    /// A *generation* failure is returned without teardown,
    /// leaving the partial tree in place for inspection.
    ///
    ///
    /// # Examples
    /// ```no_run
    /// # use fs_fixture_catalog::fixture::FixtureGenerator;
    /// # use fs_fixture_catalog::catalog::catalog_directory;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let generator = FixtureGenerator::new(None, Some("fixtures"))?;
    ///
    /// let entries = generator.with_tree(|root_path| catalog_directory(root_path))??;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_tree<T, F>(&self, action: F) -> Result<T, ScopedFixtureError>
    where
        F: FnOnce(&Path) -> T,
    {
        self.generate()?;

        let mut teardown_guard = TeardownGuard {
            generator: self,
            armed: true,
        };

        let outcome = action(self.root_path());

        teardown_guard.armed = false;
        self.destroy()?;

        Ok(outcome)
    }


    fn create_directories_with_rng<R: Rng>(
        &self,
        parent_directory_path: &Path,
        rng: &mut R,
    ) -> Result<Vec<String>, TreeGenerationError> {
        let directory_count = if self.config.use_random_directory_count {
            rng.gen_range(self.config.min_directory_count()..=self.config.max_directory_count())
        } else {
            self.config.directory_count()
        };

        let mut directory_names = Vec::with_capacity(directory_count as usize);

        for _ in 0..directory_count {
            let directory_name = format!(
                "{}{}",
                self.config.directory_prefix,
                random_name_suffix(rng)
            );

            let directory_path = parent_directory_path.join(&directory_name);

            fs::create_dir(&directory_path).map_err(|error| {
                TreeGenerationError::UnableToCreateDirectory {
                    directory_path: directory_path.clone(),
                    error,
                }
            })?;

            trace!("created fixture directory {}", directory_path.display());

            directory_names.push(directory_name);
        }

        Ok(directory_names)
    }

    fn create_files_with_rng<R: Rng>(
        &self,
        parent_directory_path: &Path,
        rng: &mut R,
    ) -> Result<Vec<String>, TreeGenerationError> {
        let file_count = if self.config.use_random_file_count {
            rng.gen_range(self.config.min_file_count()..=self.config.max_file_count())
        } else {
            self.config.file_count()
        };

        let mut file_names = Vec::with_capacity(file_count as usize);

        for file_index in 0..file_count {
            // The extension list is re-read on every pass;
            // it is publicly mutable and may have changed (or been emptied).
            let extension = self
                .config
                .extensions
                .choose(&mut *rng)
                .ok_or(FixtureConfigurationError::EmptyExtensionList)?;

            let file_name = format!(
                "{}{}{}.{}",
                self.config.file_prefix,
                random_name_suffix(rng),
                file_index,
                extension
            );

            let file_path = parent_directory_path.join(&file_name);

            fs::write(&file_path, random_file_body(rng)).map_err(|error| {
                TreeGenerationError::UnableToWriteFile {
                    file_path: file_path.clone(),
                    error,
                }
            })?;

            trace!("created fixture file {}", file_path.display());

            file_names.push(file_name);
        }

        Ok(file_names)
    }

    fn generate_level<R: Rng>(
        &self,
        directory_path: &Path,
        depth: u32,
        level: u32,
        rng: &mut R,
    ) -> Result<(), TreeGenerationError> {
        self.create_files_with_rng(directory_path, rng)?;

        // The final level still receives files, but no further subdirectories.
        if level == depth {
            return Ok(());
        }

        for directory_name in self.create_directories_with_rng(directory_path, rng)? {
            self.generate_level(&directory_path.join(directory_name), depth, level + 1, rng)?;
        }

        Ok(())
    }
}


/// Resolves the fixture root path from an optional destination
/// and an optional bare directory name,
/// see [`FixtureGenerator::new`] for the precedence rules.
fn resolve_root_path(
    destination: Option<&Path>,
    directory_name: Option<&str>,
) -> Result<PathBuf, FixtureRootError> {
    if let Some(directory_name) = directory_name {
        if Path::new(directory_name).is_absolute() {
            return Err(FixtureRootError::DirectoryNameIsAPath {
                directory_name: directory_name.to_string(),
            });
        }
    }

    match (destination, directory_name) {
        (Some(destination), Some(directory_name)) => {
            if !destination.is_absolute() {
                return Err(FixtureRootError::DestinationNotAbsolute {
                    destination: destination.to_path_buf(),
                });
            }

            Ok(destination.join(directory_name))
        }
        (Some(destination), None) => {
            if destination.is_absolute() {
                Ok(destination.join(DEFAULT_ROOT_DIRECTORY_NAME))
            } else {
                absolutize(destination)
            }
        }
        (None, Some(directory_name)) => absolutize(Path::new(directory_name)),
        (None, None) => absolutize(Path::new(DEFAULT_ROOT_DIRECTORY_NAME)),
    }
}

fn absolutize(path: &Path) -> Result<PathBuf, FixtureRootError> {
    to_absolute_path(path).map_err(|error| FixtureRootError::UnableToResolvePath {
        path: path.to_path_buf(),
        error,
    })
}


/// Generates a random alphanumeric name suffix of 2 to 4 characters.
fn random_name_suffix<R: Rng>(rng: &mut R) -> String {
    let suffix_length = rng.gen_range(2..=4);

    (&mut *rng)
        .sample_iter(&Alphanumeric)
        .take(suffix_length)
        .map(char::from)
        .collect()
}

/// Generates a random file body of 2 to 150 printable characters.
fn random_file_body<R: Rng>(rng: &mut R) -> Vec<u8> {
    let body_length = rng.gen_range(2..=150);

    (0..body_length)
        .map(|_| {
            *PRINTABLE_CHARACTERS
                .choose(&mut *rng)
                // PANIC SAFETY: `PRINTABLE_CHARACTERS` is a non-empty constant.
                .expect("printable character set should not be empty")
        })
        .collect()
}


/// Tears the fixture tree down when dropped while still armed.
///
/// Covers unwinds out of the scoped block in
/// [`FixtureGenerator::with_tree`]; on the normal path the guard is
/// disarmed and teardown runs explicitly so its errors can be surfaced.
struct TeardownGuard<'g> {
    generator: &'g FixtureGenerator,

    armed: bool,
}

impl Drop for TeardownGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        if let Err(removal_error) = self.generator.destroy() {
            log::error!(
                "failed to tear down fixture tree while unwinding: {}",
                removal_error
            );
        }
    }
}
