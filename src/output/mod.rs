//! README output writing

use crate::error::{ReadmeError, Result};
use crate::utils::{absolute_path, resolve_write_target};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Write `content` to `path`, replacing whatever is there.
///
/// The text is written to a sibling temporary file and renamed into place,
/// so the destination either holds the complete new content or is left
/// untouched. A symlinked destination is written through, and an existing
/// file keeps its permissions. Parent directories are not created.
///
/// # Returns
/// The absolute path of the written file, as given by the caller
pub fn write_output(path: &Path, content: &str) -> Result<PathBuf> {
    let write_error = |source: io::Error| ReadmeError::Write { path: path.to_path_buf(), source };

    let reported = absolute_path(path).map_err(write_error)?;
    let destination = resolve_write_target(path).map_err(write_error)?;
    let file_name = destination.file_name().ok_or_else(|| {
        write_error(io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name"))
    })?;
    let parent = destination.parent().unwrap_or_else(|| Path::new("/"));
    let existing_permissions = fs::metadata(&destination).ok().map(|meta| meta.permissions());

    let staging =
        parent.join(format!(".{}.{}.tmp", file_name.to_string_lossy(), std::process::id()));

    let staged = fs::write(&staging, content).and_then(|()| match existing_permissions {
        Some(permissions) => fs::set_permissions(&staging, permissions),
        None => Ok(()),
    });
    if let Err(source) = staged.and_then(|()| fs::rename(&staging, &destination)) {
        let _ = fs::remove_file(&staging);
        return Err(write_error(source));
    }

    if destination != reported {
        tracing::debug!("{} resolves to {}", reported.display(), destination.display());
    }
    tracing::debug!("Wrote {} bytes to {}", content.len(), destination.display());
    Ok(reported)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_content_and_returns_absolute_path() {
        let dir = TempDir::new().expect("tmp");
        let target = dir.path().join("README.md");

        let written = write_output(&target, "Hello README").expect("write");
        assert!(written.is_absolute());
        assert_eq!(written, target);
        assert_eq!(fs::read_to_string(&target).expect("read"), "Hello README");
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = TempDir::new().expect("tmp");
        let target = dir.path().join("README.md");
        fs::write(&target, "old content that is longer than the new one").expect("seed");

        write_output(&target, "new").expect("write");
        assert_eq!(fs::read_to_string(&target).expect("read"), "new");
    }

    #[test]
    fn leaves_no_staging_files_behind() {
        let dir = TempDir::new().expect("tmp");
        write_output(&dir.path().join("OUT.md"), "x").expect("write");

        let names: Vec<_> = fs::read_dir(dir.path())
            .expect("read_dir")
            .map(|entry| entry.expect("entry").file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("OUT.md")]);
    }

    #[test]
    fn missing_parent_directory_is_write_error() {
        let dir = TempDir::new().expect("tmp");
        let target = dir.path().join("no").join("such").join("README.md");

        let err = write_output(&target, "x").expect_err("missing parent");
        match err {
            ReadmeError::Write { path, .. } => assert_eq!(path, target),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!target.exists());
    }

    #[test]
    fn directory_destination_is_write_error() {
        let dir = TempDir::new().expect("tmp");
        let err = write_output(dir.path(), "x").expect_err("directory target");
        assert!(matches!(err, ReadmeError::Write { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_destination_is_written_through() {
        let dir = TempDir::new().expect("tmp");
        let real = dir.path().join("docs_README.md");
        let link = dir.path().join("README.md");
        fs::write(&real, "old").expect("seed");
        std::os::unix::fs::symlink(&real, &link).expect("symlink");

        let written = write_output(&link, "new").expect("write");

        assert_eq!(written, link);
        assert!(fs::symlink_metadata(&link).expect("lstat").file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real).expect("read"), "new");
    }

    #[cfg(unix)]
    #[test]
    fn dotdot_after_symlinked_directory_follows_the_filesystem() {
        let dir = TempDir::new().expect("tmp");
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).expect("mkdir");
        std::os::unix::fs::symlink(&nested, dir.path().join("lnk")).expect("symlink");

        write_output(&dir.path().join("lnk").join("..").join("OUT.md"), "x").expect("write");

        assert_eq!(fs::read_to_string(dir.path().join("a").join("OUT.md")).expect("read"), "x");
        assert!(!dir.path().join("OUT.md").exists());
    }

    #[cfg(unix)]
    #[test]
    fn existing_permissions_are_preserved() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().expect("tmp");
        let target = dir.path().join("README.md");
        fs::write(&target, "old").expect("seed");
        fs::set_permissions(&target, fs::Permissions::from_mode(0o640)).expect("chmod");

        write_output(&target, "new").expect("write");

        let mode = fs::metadata(&target).expect("stat").permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
    }
}
