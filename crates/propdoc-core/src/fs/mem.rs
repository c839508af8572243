use super::FileSystem;

use indexmap::IndexMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// An in-memory [`FileSystem`].
///
/// Directories exist implicitly as parents of stored files. Listings follow
/// insertion order, which lets callers pin down enumeration order.
#[derive(Debug, Default)]
pub struct MemFileSystem {
    store: Mutex<Store>,
}

#[derive(Debug, Default)]
struct Store {
    files: IndexMap<PathBuf, Vec<u8>>,
    writes: Vec<PathBuf>,
}

impl MemFileSystem {
    pub fn new() -> MemFileSystem {
        MemFileSystem::default()
    }

    /// Adds a file, builder style.
    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.insert(path, contents);
        self
    }

    /// Adds a file holding raw bytes, builder style.
    pub fn with_bytes(self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        let mut store = self.store.lock().unwrap();
        store.files.insert(path.into(), contents.into());
        drop(store);
        self
    }

    /// Adds or replaces a file without recording it as a write.
    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        let mut store = self.store.lock().unwrap();
        store.files.insert(path.into(), contents.into().into_bytes());
    }

    /// Returns the current content of a file, lossily decoded.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        let store = self.store.lock().unwrap();
        store
            .files
            .get(path.as_ref())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Paths written through [`FileSystem::write`], in order.
    pub fn writes(&self) -> Vec<PathBuf> {
        self.store.lock().unwrap().writes.clone()
    }
}

impl FileSystem for MemFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let store = self.store.lock().unwrap();
        store.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: no such file", path.display()),
            )
        })
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        String::from_utf8(self.read(path)?)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        let mut store = self.store.lock().unwrap();
        store.files.insert(path.to_path_buf(), contents.as_bytes().to_vec());
        store.writes.push(path.to_path_buf());
        Ok(())
    }

    fn is_file(&self, path: &Path) -> bool {
        self.store.lock().unwrap().files.contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        let store = self.store.lock().unwrap();
        store.files.keys().any(|file| file.starts_with(path) && file != path)
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let store = self.store.lock().unwrap();
        Ok(store
            .files
            .keys()
            .filter(|file| file.parent() == Some(dir))
            .cloned()
            .collect())
    }
}
