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

use super::{Download, TextureDownload};
use atrium_core::asset::{AssetHandle, ImportedTexture, TextureRegistry};

/// Synchronous retrieval of an already-imported texture asset.
///
/// Never reads raw bytes: the texture is looked up in the host's registry of
/// imported assets, so the import settings the host applied (compression,
/// readability) stay in effect. A plain image file sitting at the path does
/// not count; only a registered texture does.
pub struct ImportedTextureLoader {
    texture: Option<AssetHandle<ImportedTexture>>,
    error: Option<String>,
    non_readable: bool,
    disposed: bool,
}

impl ImportedTextureLoader {
    /// Looks up the texture registered at `path` and captures the outcome in
    /// a new handle. `non_readable` states the caller's binding intent and
    /// is carried through untouched.
    pub fn load(registry: &dyn TextureRegistry, path: &str, non_readable: bool) -> Self {
        let texture = registry.load_texture(path);
        let error = if texture.is_none() {
            log::warn!("no imported texture registered at {path}");
            Some(format!("Couldn't load texture at {path}"))
        } else {
            None
        };

        Self {
            texture,
            error,
            non_readable,
            disposed: false,
        }
    }
}

impl Download for ImportedTextureLoader {
    fn success(&self) -> bool {
        self.texture.is_some()
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // Texture retrieval carries no byte payload; `text` and `is_binary`
    // stay absent with it.
    fn data(&self) -> Option<&[u8]> {
        None
    }

    fn disposed(&self) -> bool {
        self.disposed
    }

    fn dispose(&mut self) {
        self.texture = None;
        self.disposed = true;
    }
}

impl TextureDownload for ImportedTextureLoader {
    fn texture(&self) -> Option<&AssetHandle<ImportedTexture>> {
        self.texture.as_ref()
    }

    fn non_readable(&self) -> bool {
        self.non_readable
    }
}
