//! File-system access used by every stage of a run.
//!
//! The resolver, locator, extractor and writer never touch `std::fs`
//! directly; they go through [`FileSystem`] so a run can be driven entirely
//! in memory.

mod mem;
pub use mem::MemFileSystem;

use std::io;
use std::path::{Path, PathBuf};

pub trait FileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Reads `path`, replacing invalid UTF-8 with U+FFFD.
    fn read_lossy(&self, path: &Path) -> io::Result<String> {
        let bytes = self.read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Replaces the whole content of `path`.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;

    fn is_file(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Regular files directly inside `dir`, in enumeration order.
    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;
}

/// Returns the files in `dir` with the given extension, keeping the order of
/// [`FileSystem::list_files`]. A missing directory yields no files.
pub fn files_with_extension(
    fs: &dyn FileSystem,
    dir: &Path,
    extension: &str,
) -> io::Result<Vec<PathBuf>> {
    if !fs.is_dir(dir) {
        return Ok(vec![]);
    }

    Ok(fs
        .list_files(dir)?
        .into_iter()
        .filter(|path| path.extension().is_some_and(|ext| ext == extension))
        .collect())
}

/// The host file system.
///
/// Directory listings are sorted by file name, matching the order PHP's
/// `glob()` and `scandir()` produce.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        std::fs::write(path, contents)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = vec![];

        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            // Follows symlinks
            if path.is_file() {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn lists_symlinked_files_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        let shared = tempfile::tempdir().unwrap();

        std::fs::write(dir.path().join("b_create_posts.php"), "<?php").unwrap();
        std::fs::write(shared.path().join("create_users.php"), "<?php").unwrap();
        std::os::unix::fs::symlink(
            shared.path().join("create_users.php"),
            dir.path().join("a_create_users.php"),
        )
        .unwrap();
        std::fs::create_dir(dir.path().join("c_archive")).unwrap();

        let files = OsFileSystem.list_files(dir.path()).unwrap();

        assert_eq!(
            files,
            vec![
                dir.path().join("a_create_users.php"),
                dir.path().join("b_create_posts.php"),
            ]
        );
    }
}
