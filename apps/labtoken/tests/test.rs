use std::path::Path;

fn do_test(path: &Path) -> datatest_stable::Result<()> {
    testutil::run_yaml_file(env!("CARGO_BIN_EXE_labtoken"), path);
    Ok(())
}

datatest_stable::harness!(do_test, "tests/cases", r"^.*\.yaml$");
