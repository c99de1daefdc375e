use crate::AssetError;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A place assets can be read from by name.
pub trait AssetSource {
    /// Read the full contents of the named asset.
    fn open(&self, name: &str) -> Result<Vec<u8>, AssetError>;

    /// Read the named asset as UTF-8 text.
    fn read_text(&self, name: &str) -> Result<String, AssetError> {
        let bytes = self.open(name)?;
        String::from_utf8(bytes).map_err(|_| AssetError::Utf8(name.to_string()))
    }
}

/// Assets stored as files under a root directory.
#[derive(Debug, Clone)]
pub struct AssetDir {
    root: PathBuf,
}

impl AssetDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetSource for AssetDir {
    fn open(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        let path = self.root.join(name);
        tracing::debug!(path = %path.display(), "opening asset");
        std::fs::read(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AssetError::Missing(name.to_string()),
            _ => AssetError::Io {
                name: name.to_string(),
                source: e,
            },
        })
    }
}

/// Assets held in memory, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssets {
    assets: BTreeMap<String, Vec<u8>>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.assets.insert(name.into(), data.into());
    }

    pub fn with(mut self, name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.insert(name, data);
        self
    }

    pub fn remove(&mut self, name: &str) -> Option<Vec<u8>> {
        self.assets.remove(name)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl AssetSource for MemoryAssets {
    fn open(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        self.assets
            .get(name)
            .cloned()
            .ok_or_else(|| AssetError::Missing(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("shader.v.glsl"), "void main() {}").unwrap();

        let assets = AssetDir::new(dir.path());
        assert_eq!(assets.root(), dir.path());
        assert_eq!(assets.read_text("shader.v.glsl").unwrap(), "void main() {}");
    }

    #[test]
    fn dir_missing_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let assets = AssetDir::new(dir.path());
        let err = assets.open("gopher.png").unwrap_err();
        assert!(matches!(err, AssetError::Missing(ref n) if n == "gopher.png"));
    }

    #[test]
    fn memory_roundtrip_and_missing() {
        let assets = MemoryAssets::new().with("a.txt", "hello");
        assert_eq!(assets.len(), 1);
        assert_eq!(assets.open("a.txt").unwrap(), b"hello");
        assert!(matches!(assets.open("b.txt"), Err(AssetError::Missing(_))));
    }

    #[test]
    fn read_text_rejects_invalid_utf8() {
        let assets = MemoryAssets::new().with("bad", vec![0xff, 0xfe]);
        assert!(matches!(assets.read_text("bad"), Err(AssetError::Utf8(_))));
    }

    #[test]
    fn memory_remove() {
        let mut assets = MemoryAssets::new().with("x", "1");
        assert!(assets.remove("x").is_some());
        assert!(assets.is_empty());
    }
}
