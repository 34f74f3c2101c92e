// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Filesystem access behind an injectable seam.
//!
//! The buffer loader retrieves raw bytes through the [`FileSystem`] trait so
//! it can be driven by the real disk in production and by in-memory fakes in
//! tests. [`DiskFileSystem`] is the default implementation, resolving paths
//! relative to a base directory.

use std::io;
use std::path::{Path, PathBuf};

/// Byte-exact retrieval of file contents by project-relative path.
pub trait FileSystem: Send + Sync {
    /// Returns `true` if a file exists at `path`.
    fn exists(&self, path: &str) -> bool;

    /// Reads the full contents of the file at `path`.
    fn read(&self, path: &str) -> io::Result<Vec<u8>>;
}

/// A [`FileSystem`] backed by the local disk, rooted at a base directory.
#[derive(Debug, Clone)]
pub struct DiskFileSystem {
    base_path: PathBuf,
}

impl DiskFileSystem {
    /// Creates a new `DiskFileSystem` resolving paths relative to `base_path`.
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl FileSystem for DiskFileSystem {
    fn exists(&self, path: &str) -> bool {
        self.full_path(path).is_file()
    }

    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        std::fs::read(self.full_path(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disk_filesystem_reads_relative_to_base() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("buffer.bin"), [1u8, 2, 3]).unwrap();

        let fs = DiskFileSystem::new(dir.path());
        assert!(fs.exists("buffer.bin"));
        assert!(!fs.exists("missing.bin"));
        assert_eq!(fs.read("buffer.bin").unwrap(), vec![1, 2, 3]);
        assert!(fs.read("missing.bin").is_err());
    }
}
