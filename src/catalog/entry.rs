/// An immutable description of one filesystem node (file or directory)
/// observed during a catalog walk.
///
/// For files, the name and extension are split at the last dot;
/// the stored extension retains its leading dot
/// (use [`extension_without_separator`][Self::extension_without_separator]
/// for presentation). Directories have an empty extension.
///
/// `parent_name` is the *base name* of the immediate parent directory,
/// not a full path; it is empty when the node sits at a filesystem root.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct CatalogEntry {
    name: String,

    extension: String,

    is_directory: bool,

    parent_name: String,
}

impl CatalogEntry {
    /// Builds a directory entry.
    pub fn directory(name: String, parent_name: String) -> Self {
        Self {
            name,
            extension: String::new(),
            is_directory: true,
            parent_name,
        }
    }

    /// Builds a file entry, splitting `file_name` into a base name and
    /// an extension at the last dot.
    ///
    /// A dot in the leading position does not count as an extension
    /// separator (`.hidden` is a name without an extension).
    pub fn file(file_name: &str, parent_name: String) -> Self {
        let (name, extension) = split_file_name(file_name);

        Self {
            name,
            extension,
            is_directory: false,
            parent_name,
        }
    }

    /// Returns the base name (without extension for files).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the extension, including the leading dot.
    /// Empty for directories and extensionless files.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Returns the extension with the leading dot stripped.
    pub fn extension_without_separator(&self) -> &str {
        self.extension.strip_prefix('.').unwrap_or(&self.extension)
    }

    /// Returns `true` if this entry describes a directory.
    pub fn is_directory(&self) -> bool {
        self.is_directory
    }

    /// Returns the base name of the immediate parent directory.
    pub fn parent_name(&self) -> &str {
        &self.parent_name
    }
}


/// Splits a file name into `(base name, extension)` at the last dot.
///
/// The extension keeps its leading dot. A leading dot is part of the
/// name, never an extension separator.
fn split_file_name(file_name: &str) -> (String, String) {
    match file_name.rfind('.') {
        Some(dot_index) if dot_index > 0 => (
            file_name[..dot_index].to_string(),
            file_name[dot_index..].to_string(),
        ),
        _ => (file_name.to_string(), String::new()),
    }
}
