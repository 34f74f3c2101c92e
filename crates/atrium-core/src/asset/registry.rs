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

use super::{AssetHandle, ImportedTexture};

/// Lookup of already-imported texture assets by project-relative path.
///
/// Implemented by the host on top of its asset database; the import services
/// only consume it. Re-deriving a texture from raw bytes would duplicate
/// work and discard the import settings the host applied, so textures are
/// always fetched through this registry instead of the filesystem.
pub trait TextureRegistry: Send + Sync {
    /// Returns a handle to the texture registered at `asset_path`, or `None`
    /// if no imported texture exists there. The presence of a plain file at
    /// that path is irrelevant.
    fn load_texture(&self, asset_path: &str) -> Option<AssetHandle<ImportedTexture>>;
}
