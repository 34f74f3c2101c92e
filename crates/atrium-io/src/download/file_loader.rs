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

use super::Download;
use atrium_core::vfs::FileSystem;

/// Synchronous retrieval of a raw byte buffer from a resolved path.
///
/// Blocks the calling thread for the duration of the read, which is
/// acceptable at resolution time since the path is local. Failure is
/// recorded on the handle, not returned: a missing file yields
/// `success() == false` with the path named in the error message.
pub struct FileBufferLoader {
    data: Option<Vec<u8>>,
    error: Option<String>,
    disposed: bool,
}

impl FileBufferLoader {
    /// Reads the full contents at `path` through `fs` and captures the
    /// outcome in a new handle.
    pub fn load(fs: &dyn FileSystem, path: &str) -> Self {
        if fs.exists(path) {
            match fs.read(path) {
                Ok(data) => Self {
                    data: Some(data),
                    error: None,
                    disposed: false,
                },
                Err(e) => {
                    log::warn!("failed to read buffer at {path}: {e}");
                    Self::failed(path)
                }
            }
        } else {
            Self::failed(path)
        }
    }

    fn failed(path: &str) -> Self {
        Self {
            data: None,
            error: Some(format!("Cannot find resource at path {path}")),
            disposed: false,
        }
    }
}

impl Download for FileBufferLoader {
    fn success(&self) -> bool {
        self.data.is_some()
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    fn disposed(&self) -> bool {
        self.disposed
    }

    fn dispose(&mut self) {
        self.data = None;
        self.disposed = true;
    }
}
