//! Locating optional FITS files used by the heavier decode tests.

use std::path::PathBuf;

/// Workspace root, two levels above this crate.
pub fn workspace_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .ancestors()
        .nth(2)
        .map(PathBuf::from)
        .unwrap_or(manifest_dir)
}

/// Look for `name` under `$SKYSPOTTER_TEST_DATA`, then `fits-parser/testdata`,
/// then `testdata/` at the workspace root.
pub fn find_test_file(name: &str) -> Option<PathBuf> {
    let root = workspace_root();
    std::env::var_os("SKYSPOTTER_TEST_DATA")
        .map(|dir| PathBuf::from(dir).join(name))
        .into_iter()
        .chain([
            root.join("crates/fits-parser/testdata").join(name),
            root.join("testdata").join(name),
        ])
        .find(|path| path.is_file())
}
