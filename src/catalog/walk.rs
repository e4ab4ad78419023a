use std::path::Path;

use log::info;

use crate::use_enabled_fs_module;

use_enabled_fs_module!();

use super::CatalogEntry;
use crate::{
    common::{path_base_name, to_absolute_path},
    error::CatalogError,
};


/// Recursively catalogs the filesystem subtree rooted at `directory_path`
/// into an ordered sequence of [`CatalogEntry`] records.
///
/// The input path may be relative or absolute; it is normalized into an
/// absolute path internally. The traversal is pre-order: each directory
/// (the root included) is emitted before its contents, its files before
/// its subdirectories, and entries within one directory are visited in
/// name order, so the output is deterministic for a given tree.
///
/// One `info`-level log record is emitted per discovered directory
/// and per discovered file.
///
///
/// # Symbolic link behaviour
/// Symbolic links are never followed: a link to a directory is recorded
/// as a directory entry but not descended into, and a link to a file
/// (or a broken link) is recorded as a file entry. This keeps the walk
/// free of cycles without a visited-set guard.
///
///
/// # Errors
/// If the subtree cannot be fully read, a [`CatalogError`] is returned
/// and *no partial sequence* is produced.
/// Here is a non-exhaustive list of error causes:
/// - the root path does not exist ([`NotFound`][CatalogError::NotFound]),
/// - the root path is not a directory
///   ([`NotADirectory`][CatalogError::NotADirectory]),
/// - a directory or one of its entries could not be read, for example
///   due to missing permissions
///   ([`UnableToReadDirectory`][CatalogError::UnableToReadDirectory] /
///   [`UnableToReadDirectoryEntry`][CatalogError::UnableToReadDirectoryEntry]).
pub fn catalog_directory<P>(directory_path: P) -> Result<Vec<CatalogEntry>, CatalogError>
where
    P: AsRef<Path>,
{
    let directory_path: &Path = directory_path.as_ref();

    let absolute_root_path = to_absolute_path(directory_path).map_err(|error| {
        CatalogError::UnableToResolvePath {
            path: directory_path.to_path_buf(),
            error,
        }
    })?;

    let root_metadata = fs::metadata(&absolute_root_path).map_err(|error| {
        if error.kind() == std::io::ErrorKind::NotFound {
            CatalogError::NotFound {
                path: absolute_root_path.clone(),
            }
        } else {
            CatalogError::UnableToReadDirectory {
                directory_path: absolute_root_path.clone(),
                error,
            }
        }
    })?;

    if !root_metadata.is_dir() {
        return Err(CatalogError::NotADirectory {
            path: absolute_root_path,
        });
    }

    // The root's parent name is the base name of its own parent directory,
    // or empty at a filesystem root.
    let root_parent_name = absolute_root_path
        .parent()
        .map(path_base_name)
        .unwrap_or_default();

    let mut entries = Vec::new();

    visit_directory(&absolute_root_path, root_parent_name, &mut entries)?;

    Ok(entries)
}


/// Emits the record for `directory_path` itself, then its file records,
/// then recurses into its subdirectories.
fn visit_directory(
    directory_path: &Path,
    parent_name: String,
    entries: &mut Vec<CatalogEntry>,
) -> Result<(), CatalogError> {
    let directory_name = path_base_name(directory_path);

    info!(
        "discovered directory {:?} in {:?}",
        directory_name, parent_name
    );

    entries.push(CatalogEntry::directory(directory_name.clone(), parent_name));


    let directory_reader = fs::read_dir(directory_path).map_err(|error| {
        CatalogError::UnableToReadDirectory {
            directory_path: directory_path.to_path_buf(),
            error,
        }
    })?;

    let mut child_file_names: Vec<String> = Vec::new();
    // The boolean marks whether the subdirectory should be descended into
    // (real directories yes, symlinked directories no).
    let mut child_directory_names: Vec<(String, bool)> = Vec::new();

    for raw_entry_result in directory_reader {
        let raw_entry = raw_entry_result.map_err(|error| {
            CatalogError::UnableToReadDirectoryEntry {
                directory_path: directory_path.to_path_buf(),
                error,
            }
        })?;

        let entry_file_type = raw_entry.file_type().map_err(|error| {
            CatalogError::UnableToReadDirectoryEntry {
                directory_path: directory_path.to_path_buf(),
                error,
            }
        })?;

        let entry_name = raw_entry.file_name().to_string_lossy().into_owned();

        if entry_file_type.is_dir() {
            child_directory_names.push((entry_name, true));
        } else if entry_file_type.is_symlink() {
            // Classify the link by its target, but never descend through it.
            // A broken link is classified as a file.
            let links_to_directory = fs::metadata(raw_entry.path())
                .map(|target_metadata| target_metadata.is_dir())
                .unwrap_or(false);

            if links_to_directory {
                child_directory_names.push((entry_name, false));
            } else {
                child_file_names.push(entry_name);
            }
        } else {
            child_file_names.push(entry_name);
        }
    }

    child_file_names.sort_unstable();
    child_directory_names.sort_unstable();


    for file_name in child_file_names {
        let file_entry = CatalogEntry::file(&file_name, directory_name.clone());

        info!(
            "discovered file {:?} (extension {:?}) in {:?}",
            file_entry.name(),
            file_entry.extension(),
            file_entry.parent_name()
        );

        entries.push(file_entry);
    }

    for (subdirectory_name, should_descend) in child_directory_names {
        if should_descend {
            visit_directory(
                &directory_path.join(&subdirectory_name),
                directory_name.clone(),
                entries,
            )?;
        } else {
            info!(
                "discovered directory {:?} in {:?} (symlink, not followed)",
                subdirectory_name, directory_name
            );

            entries.push(CatalogEntry::directory(
                subdirectory_name,
                directory_name.clone(),
            ));
        }
    }

    Ok(())
}
