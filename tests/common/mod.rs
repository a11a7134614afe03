//! Shared helpers for Greek's integration tests.
//!
//! Each test file under `tests/` is compiled as its own crate, so not every
//! helper here is used by every file.
#![allow(dead_code)]

use std::path::Path;

use greekc::codegen;
use greekc::semantic::{CheckError, Checker, FsLoader};

/// Checks and compiles a single-file program with no imports, returning the
/// generated C source.
pub fn compile(source: &str) -> Result<String, CheckError> {
    let loader = FsLoader::new(".");
    let module = Checker::new().check_program("main", source, &loader)?;
    Ok(codegen::compile(&module))
}

/// Same as `compile`, but panics with the error message on failure. Use in
/// tests that only care about the generated output.
pub fn compile_ok(source: &str) -> String {
    compile(source).unwrap_or_else(|e| panic!("expected '{source}' to compile, got: {e}"))
}

/// Checks and compiles the `entry` module of a program laid out on disk
/// under `root` (e.g. a temp directory populated with sibling `.greek`
/// files), exercising real import resolution.
pub fn compile_from_dir(root: &Path, entry: &str) -> Result<String, CheckError> {
    let entry_path = root.join(entry).with_extension("greek");
    let source = std::fs::read_to_string(&entry_path)
        .unwrap_or_else(|e| panic!("fixture '{}' missing: {e}", entry_path.display()));
    let loader = FsLoader::new(root);
    let module = Checker::new().check_program(entry, &source, &loader)?;
    Ok(codegen::compile(&module))
}

/// Writes `contents` to `<dir>/<dotted_name with '.' -> '/'>.greek`,
/// creating parent directories as needed.
pub fn write_module(dir: &Path, dotted_name: &str, contents: &str) {
    let mut path = dir.to_path_buf();
    for segment in dotted_name.split('.') {
        path.push(segment);
    }
    path.set_extension("greek");
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, contents).unwrap();
}
