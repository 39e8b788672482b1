//! File-based loading of seed documents.

use std::io::Write;

use portfolio_seed::{BUILTIN_SEED_JSON, SeedDocument, SeedError};
use rstest::rstest;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes())
        .expect("write temp file");
    file
}

#[rstest]
fn loads_builtin_document_from_disk() {
    let file = write_temp(BUILTIN_SEED_JSON);

    let from_disk = SeedDocument::from_file(file.path()).expect("load seed file");
    let builtin = SeedDocument::builtin().expect("built-in seed");

    assert_eq!(from_disk, builtin);
}

#[rstest]
fn surfaces_parse_errors_from_disk() {
    let file = write_temp("{\"version\": 1");

    let result = SeedDocument::from_file(file.path());

    assert!(matches!(result, Err(SeedError::ParseError { .. })));
}
