use std::path::{Path, PathBuf};


/// Converts the given path into an absolute one,
/// resolving it against the current working directory if it is relative.
///
/// Unlike [`fs::canonicalize`][std::fs::canonicalize], this does not require
/// the path to exist, and it does not resolve symbolic links.
///
/// When the `dunce` feature is enabled, the resulting path is additionally
/// simplified, stripping Windows' UNC prefix where possible.
pub(crate) fn to_absolute_path(path: &Path) -> std::io::Result<PathBuf> {
    let absolute_path = std::path::absolute(path)?;

    #[cfg(feature = "dunce")]
    {
        Ok(dunce::simplified(&absolute_path).to_path_buf())
    }

    #[cfg(not(feature = "dunce"))]
    {
        Ok(absolute_path)
    }
}


/// Returns the base name of the given path as a UTF-8 string,
/// or an empty string when the path has no final component
/// (e.g. a filesystem root).
///
/// Non-UTF-8 file names are replaced lossily; the catalog and fixture
/// records carry plain strings.
pub(crate) fn path_base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}



#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_name_of_regular_path_is_final_component() {
        assert_eq!(path_base_name(Path::new("/tmp/some/dir")), "dir");
    }

    #[test]
    fn base_name_of_root_is_empty() {
        #[cfg(unix)]
        assert_eq!(path_base_name(Path::new("/")), "");
    }

    #[test]
    fn absolute_path_is_left_untouched() {
        #[cfg(unix)]
        {
            let absolute = to_absolute_path(Path::new("/tmp/fixtures")).unwrap();
            assert_eq!(absolute, PathBuf::from("/tmp/fixtures"));
        }
    }

    #[test]
    fn relative_path_is_resolved_against_working_directory() {
        let resolved = to_absolute_path(Path::new("some-relative-dir")).unwrap();

        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("some-relative-dir"));
    }
}
