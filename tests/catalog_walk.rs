use std::path::Path;

use assert_matches::assert_matches;
use fs_fixture_catalog::catalog::{catalog_directory, render_catalog, CatalogEntry};
use fs_fixture_catalog::error::CatalogError;
use fs_fixture_catalog::fixture::{FixtureConfigOptions, FixtureGenerator};


/// Builds a small handcrafted tree:
///
/// ```md
/// <root>
///  |- notes.txt
///  |- readme.md
///  |- alpha/
///     |- nested.log
///  |- beta/
///     (empty)
/// ```
fn build_handcrafted_tree(root_path: &Path) {
    std::fs::write(root_path.join("notes.txt"), b"notes").unwrap();
    std::fs::write(root_path.join("readme.md"), b"readme").unwrap();

    std::fs::create_dir(root_path.join("alpha")).unwrap();
    std::fs::write(root_path.join("alpha/nested.log"), b"nested").unwrap();

    std::fs::create_dir(root_path.join("beta")).unwrap();
}


#[test]
fn handcrafted_tree_yields_the_exact_preorder_sequence() {
    let root = tempfile::tempdir().unwrap();
    build_handcrafted_tree(root.path());

    let root_name = root.path().file_name().unwrap().to_str().unwrap().to_string();
    let root_parent_name = root
        .path()
        .parent()
        .and_then(|parent| parent.file_name())
        .map(|name| name.to_str().unwrap().to_string())
        .unwrap_or_default();

    let entries = catalog_directory(root.path()).unwrap();

    assert_eq!(
        entries,
        [
            CatalogEntry::directory(root_name.clone(), root_parent_name),
            CatalogEntry::file("notes.txt", root_name.clone()),
            CatalogEntry::file("readme.md", root_name.clone()),
            CatalogEntry::directory(String::from("alpha"), root_name.clone()),
            CatalogEntry::file("nested.log", String::from("alpha")),
            CatalogEntry::directory(String::from("beta"), root_name),
        ]
    );
}

#[test]
fn file_records_split_name_and_extension_at_the_last_dot() {
    let root = tempfile::tempdir().unwrap();
    std::fs::write(root.path().join("archive.tar.gz"), b"data").unwrap();
    std::fs::write(root.path().join("Makefile"), b"all:").unwrap();

    let entries = catalog_directory(root.path()).unwrap();

    let archive = entries
        .iter()
        .find(|entry| entry.name() == "archive.tar")
        .unwrap();
    assert_eq!(archive.extension(), ".gz");
    assert_eq!(archive.extension_without_separator(), "gz");

    let makefile = entries
        .iter()
        .find(|entry| entry.name() == "Makefile")
        .unwrap();
    assert_eq!(makefile.extension(), "");
}

#[test]
fn every_file_record_is_preceded_by_its_parent_directory_record() {
    let destination = tempfile::tempdir().unwrap();

    let mut generator =
        FixtureGenerator::new(Some(destination.path()), Some("fixtures")).unwrap();

    generator
        .configure(FixtureConfigOptions {
            max_directory_count: 3,
            depth: 2,
            ..Default::default()
        })
        .unwrap();

    generator.generate().unwrap();

    let entries = catalog_directory(generator.root_path()).unwrap();

    let root_name = "fixtures";

    for (entry_index, entry) in entries.iter().enumerate() {
        if entry.is_directory() {
            continue;
        }

        if entry.parent_name() == root_name {
            // Files directly under the traversal root need no earlier record.
            continue;
        }

        let has_earlier_parent_record = entries[..entry_index]
            .iter()
            .any(|candidate| candidate.is_directory() && candidate.name() == entry.parent_name());

        assert!(
            has_earlier_parent_record,
            "no earlier directory record named {:?} for file {:?}",
            entry.parent_name(),
            entry.name(),
        );
    }

    generator.destroy().unwrap();
}

#[test]
fn cataloging_a_generated_tree_round_trips_all_created_nodes() {
    let destination = tempfile::tempdir().unwrap();

    let mut generator =
        FixtureGenerator::new(Some(destination.path()), Some("fixtures")).unwrap();

    generator
        .configure(FixtureConfigOptions {
            use_random_directory_count: false,
            use_random_file_count: false,
            directory_count: 2,
            file_count: 3,
            depth: 1,
            ..Default::default()
        })
        .unwrap();

    generator.generate().unwrap();

    let entries = catalog_directory(generator.root_path()).unwrap();

    let directory_record_count = entries.iter().filter(|entry| entry.is_directory()).count();
    let file_record_count = entries.iter().filter(|entry| !entry.is_directory()).count();

    // 2 subdirectories plus the root itself; 3 files per directory.
    assert_eq!(directory_record_count, 3);
    assert_eq!(file_record_count, 9);

    // Every record's parent must physically contain an entry of that name.
    for entry in entries.iter().skip(1) {
        assert!(
            entry.parent_name() == "fixtures"
                || entries.iter().any(|candidate| {
                    candidate.is_directory() && candidate.name() == entry.parent_name()
                }),
            "parent {:?} of {:?} is not a cataloged directory",
            entry.parent_name(),
            entry.name(),
        );
    }

    generator.destroy().unwrap();
}

#[test]
fn missing_path_is_reported_as_not_found() {
    let root = tempfile::tempdir().unwrap();
    let missing_path = root.path().join("does-not-exist");

    assert_matches!(
        catalog_directory(&missing_path).unwrap_err(),
        CatalogError::NotFound { path } if path == missing_path
    );
}

#[test]
fn file_path_is_reported_as_not_a_directory() {
    let root = tempfile::tempdir().unwrap();
    let file_path = root.path().join("plain.txt");
    std::fs::write(&file_path, b"plain").unwrap();

    assert_matches!(
        catalog_directory(&file_path).unwrap_err(),
        CatalogError::NotADirectory { path } if path == file_path
    );
}

#[cfg(unix)]
#[test]
fn symbolic_links_are_recorded_but_not_followed() {
    let root = tempfile::tempdir().unwrap();

    std::fs::create_dir(root.path().join("real")).unwrap();
    std::fs::write(root.path().join("real/inner.txt"), b"inner").unwrap();

    std::os::unix::fs::symlink(root.path().join("real"), root.path().join("linked")).unwrap();

    let entries = catalog_directory(root.path()).unwrap();

    let linked_record = entries.iter().find(|entry| entry.name() == "linked").unwrap();
    assert!(linked_record.is_directory());

    // The linked directory's contents must appear exactly once
    // (under "real", never under "linked").
    let inner_records: Vec<&CatalogEntry> = entries
        .iter()
        .filter(|entry| entry.name() == "inner")
        .collect();

    assert_eq!(inner_records.len(), 1);
    assert_eq!(inner_records[0].parent_name(), "real");
}

#[test]
fn rendered_lines_follow_the_presentation_format() {
    let root = tempfile::tempdir().unwrap();
    build_handcrafted_tree(root.path());

    let entries = catalog_directory(root.path()).unwrap();
    let lines = render_catalog(&entries);

    assert_eq!(lines.len(), entries.len());

    for (line, entry) in lines.iter().zip(&entries) {
        if entry.is_directory() {
            assert!(line.starts_with("DIR "));
        } else {
            assert!(line.starts_with("FILE"));
        }

        assert!(line.contains(&format!(
            "- parent_dir: {}",
            entry.parent_name()
        )));
        assert!(!line.contains(&format!("ext: .{}", entry.extension_without_separator())));
    }
}
