//! Entry Point Tests - Working Directory
//!
//! Kept in its own test binary: it changes the process working directory,
//! which would race with any test resolving relative paths.

use identicon_core::create_identicon;

#[test]
fn invariant_entry_point_writes_to_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let result = create_identicon("cwd-seed");
    std::env::set_current_dir(previous).unwrap();

    let outcome = result.unwrap();
    assert_eq!(
        outcome.message,
        "Successfully create file, see path: ./cwd-seed.png"
    );
    assert!(dir.path().join("cwd-seed.png").exists());
}
