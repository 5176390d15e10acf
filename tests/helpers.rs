use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Fixture path as a string, for passing straight to CLI arguments.
pub fn fixture_str(name: &str) -> String {
    fixture_path(name)
        .into_os_string()
        .into_string()
        .expect("fixture paths are utf-8")
}

pub fn read_fixture(name: &str) -> Vec<u8> {
    std::fs::read(fixture_path(name)).expect("fixture should be readable")
}
