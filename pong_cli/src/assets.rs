use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use game_core::{AssetError, AssetLoader, TextureHandle};
use tracing::debug;

/// Hands out handles for sprites found under a directory
pub struct FileAssets {
    root: PathBuf,
    next: u32,
}

impl FileAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            next: 1,
        }
    }
}

impl AssetLoader for FileAssets {
    fn load_texture(&mut self, path: &Path) -> Result<TextureHandle, AssetError> {
        let full = self.root.join(path);
        match std::fs::metadata(&full) {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => return Err(AssetError::Missing { path: full }),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(AssetError::Missing { path: full })
            }
            Err(source) => return Err(AssetError::Unreadable { path: full, source }),
        }

        let handle = TextureHandle(self.next);
        self.next += 1;
        debug!(path = %full.display(), handle = handle.0, "texture loaded");
        Ok(handle)
    }
}

/// Hands out handles without touching the disk, for headless runs
#[derive(Debug, Default)]
pub struct NullAssets {
    issued: u32,
}

impl AssetLoader for NullAssets {
    fn load_texture(&mut self, _path: &Path) -> Result<TextureHandle, AssetError> {
        self.issued += 1;
        Ok(TextureHandle(self.issued))
    }
}
