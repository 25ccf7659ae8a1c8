//! Path normalization

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Resolve `path` against the current working directory and fold away `.`
/// and `..` components without touching the filesystem.
pub fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(normalize_lexically(path));
    }
    let cwd = std::env::current_dir()?;
    Ok(normalize_lexically(&cwd.join(path)))
}

/// The file the OS would open for writing at `path`.
///
/// Symlinks and `..` are resolved by the filesystem: an existing destination
/// is canonicalized as a whole, otherwise only its parent directory is.
pub fn resolve_write_target(path: &Path) -> io::Result<PathBuf> {
    let joined =
        if path.is_absolute() { path.to_path_buf() } else { std::env::current_dir()?.join(path) };

    if let Ok(real) = fs::canonicalize(&joined) {
        return Ok(real);
    }

    let file_name = joined
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name"))?;
    let parent = joined.parent().unwrap_or_else(|| Path::new("/"));
    Ok(fs::canonicalize(parent)?.join(file_name))
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `pop` is a no-op at the root, which matches `/..` == `/`.
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_input_is_returned_normalized() {
        let resolved = absolute_path(Path::new("/tmp/./docs/../README.md")).expect("path");
        assert_eq!(resolved, PathBuf::from("/tmp/README.md"));
    }

    #[test]
    fn relative_input_is_anchored_at_cwd() {
        let cwd = std::env::current_dir().expect("cwd");
        let resolved = absolute_path(Path::new("README.md")).expect("path");
        assert_eq!(resolved, cwd.join("README.md"));
        assert!(resolved.is_absolute());
    }

    #[test]
    fn write_target_of_new_file_keeps_its_name() {
        let dir = tempfile::TempDir::new().expect("tmp");
        let target = resolve_write_target(&dir.path().join("NEW.md")).expect("target");
        assert_eq!(target, fs::canonicalize(dir.path()).expect("canon").join("NEW.md"));
    }

    #[test]
    fn write_target_without_file_name_is_rejected() {
        let dir = tempfile::TempDir::new().expect("tmp");
        let err = resolve_write_target(&dir.path().join("missing").join("..")).expect_err("no name");
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[cfg(unix)]
    #[test]
    fn write_target_follows_symlinked_parent_before_dotdot() {
        let dir = tempfile::TempDir::new().expect("tmp");
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).expect("mkdir");
        std::os::unix::fs::symlink(&nested, dir.path().join("lnk")).expect("symlink");

        let target =
            resolve_write_target(&dir.path().join("lnk").join("..").join("OUT.md")).expect("target");
        assert_eq!(target, fs::canonicalize(dir.path().join("a")).expect("canon").join("OUT.md"));
    }

    #[test]
    fn parent_of_root_stays_at_root() {
        let resolved = absolute_path(Path::new("/../README.md")).expect("path");
        assert_eq!(resolved, PathBuf::from("/README.md"));
    }
}
