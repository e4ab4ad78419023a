use super::CatalogEntry;


/// Renders catalog entries into presentation lines of the form
/// `KIND [name] - ext: <extension-without-dot> - parent_dir: <parent>`.
///
/// Names are centered and padded to the widest name in the sequence;
/// the extension column is printed without its leading dot.
/// This performs no console I/O, it only produces the strings.
///
///
/// # Examples
/// ```no_run
/// # use fs_fixture_catalog::catalog::{catalog_directory, render_catalog};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let entries = catalog_directory("some/directory")?;
///
/// for line in render_catalog(&entries) {
///     println!("{line}");
/// }
/// # Ok(())
/// # }
/// ```
pub fn render_catalog(entries: &[CatalogEntry]) -> Vec<String> {
    let widest_name = entries
        .iter()
        .map(|entry| entry.name().chars().count())
        .max()
        .unwrap_or(0);

    entries
        .iter()
        .map(|entry| {
            let kind = if entry.is_directory() { "DIR" } else { "FILE" };

            format!(
                "{:<4} [{:^name_width$}] - ext: {:<5} - parent_dir: {}",
                kind,
                entry.name(),
                entry.extension_without_separator(),
                entry.parent_name(),
                name_width = widest_name,
            )
        })
        .collect()
}
