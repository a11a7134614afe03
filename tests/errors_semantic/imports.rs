use crate::common;

#[test]
fn importing_a_self_cycle_is_a_recursion_error() {
    let dir = tempfile::tempdir().unwrap();
    common::write_module(dir.path(), "main", "import main\n");

    let err = common::compile_from_dir(dir.path(), "main").unwrap_err();
    assert!(matches!(err, greekc::semantic::CheckError::Recursion { .. }), "got: {err}");
}

#[test]
fn importing_a_missing_module_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    common::write_module(dir.path(), "main", "import nope\nfun main() int { return 0 }\n");

    let err = common::compile_from_dir(dir.path(), "main").unwrap_err();
    assert!(matches!(err, greekc::semantic::CheckError::Io { .. }), "got: {err}");
}
