//! Ties the four compiler stages together for the CLI: read the entry
//! file, check the whole program (which recursively lexes, parses, and
//! checks every import), emit C, and write it out.

use std::path::Path;

use crate::codegen;
use crate::semantic::{CheckError, Checker, FsLoader};

/// Every way `compile_file` can fail: the checker's own taxonomy, plus the
/// I/O this stage owns (reading the entry file, writing the C output).
pub enum CompileError {
    Check(CheckError),
    ReadEntry { path: String, source: std::io::Error },
    WriteOutput { path: String, source: std::io::Error },
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::Check(e) => write!(f, "{e}"),
            CompileError::ReadEntry { path, source } => write!(f, "could not read '{path}': {source}"),
            CompileError::WriteOutput { path, source } => write!(f, "could not write '{path}': {source}"),
        }
    }
}

/// Compiles the `.greek` file at `file` and writes the resulting C
/// translation unit to `output` (or returns it for the caller to print to
/// stdout when `output` is `None`).
///
/// Imports are resolved relative to `file`'s parent directory, per the
/// language's dotted-module-path convention; the entry module itself is
/// named after its file stem.
pub fn compile_file(file: &Path, output: Option<&Path>) -> Result<(), CompileError> {
    let source = std::fs::read_to_string(file).map_err(|source| CompileError::ReadEntry {
        path: file.display().to_string(),
        source,
    })?;

    let entry_name = file.file_stem().and_then(|s| s.to_str()).unwrap_or("main");
    let root = file.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or_else(|| Path::new("."));
    let loader = FsLoader::new(root);

    let module = Checker::new()
        .check_program(entry_name, &source, &loader)
        .map_err(CompileError::Check)?;

    let generated = codegen::compile(&module);

    match output {
        Some(path) => std::fs::write(path, generated).map_err(|source| CompileError::WriteOutput {
            path: path.display().to_string(),
            source,
        }),
        None => {
            print!("{generated}");
            Ok(())
        }
    }
}

/// Reads the entry file's source back out for diagnostic reporting,
/// independent of whether compilation itself succeeded.
pub fn read_source_for_diagnostics(file: &Path) -> String {
    std::fs::read_to_string(file).unwrap_or_default()
}
