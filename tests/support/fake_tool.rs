// ABOUTME: Fake lxc executables for integration tests.
// ABOUTME: Writes shell scripts into a temp dir and marks them executable.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write an executable script named `name` into `dir`.
pub fn create_tool(dir: &TempDir, name: &str, script: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, script).unwrap();

    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();

    path
}

/// A tool that prints its arguments on stdout and a note on stderr.
pub fn echo_tool(dir: &TempDir) -> PathBuf {
    create_tool(
        dir,
        "fake-lxc",
        "#!/bin/sh\necho \"args: $*\"\necho 'note from stderr' >&2\nexit 0\n",
    )
}

/// A tool that prints `message` and exits with `code`.
pub fn failing_tool(dir: &TempDir, message: &str, code: i32) -> PathBuf {
    create_tool(
        dir,
        "failing-lxc",
        &format!("#!/bin/sh\necho '{message}' >&2\nexit {code}\n"),
    )
}

/// Number of lines in a counter file written by a tool (0 if absent).
pub fn count_lines(path: &Path) -> usize {
    fs::read_to_string(path)
        .map(|s| s.lines().count())
        .unwrap_or(0)
}
