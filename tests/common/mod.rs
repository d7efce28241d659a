use std::fs;
use std::path::{Path, PathBuf};

/// Lay out `<root>/home/proj` with a couple of files and a `.git` directory,
/// plus `<root>/opt/shared` outside the home directory.
pub fn setup_test_tree(root: &Path) -> (PathBuf, PathBuf, PathBuf) {
    let root = root.canonicalize().unwrap();
    let home = root.join("home");
    let project = home.join("proj");
    let outside = root.join("opt").join("shared");

    fs::create_dir_all(project.join(".git")).unwrap();
    fs::create_dir_all(project.join("src")).unwrap();
    fs::create_dir_all(&outside).unwrap();

    fs::write(project.join("README.md"), "# Test Project").unwrap();
    fs::write(project.join("src").join("main.rs"), "fn main() {}").unwrap();
    fs::write(project.join(".git").join("HEAD"), "ref: refs/heads/main\n").unwrap();

    (home, project, outside)
}
