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

//! The download seam the importer talks to.
//!
//! The importer never constructs loaders directly; it requests resources
//! through a [`DownloadProvider`]. At resolution time that provider is
//! [`CachedDownloadProvider`], which resolves URIs against the previous
//! import's dependency records and retrieves locally. A runtime network
//! layer implements the same trait with genuinely asynchronous downloads.

use crate::cache::DependencyCache;
use crate::download::{Download, FileBufferLoader, ImportedTextureLoader, TextureDownload};
use async_trait::async_trait;
use atrium_core::asset::{DependencyKind, DependencyRecord, TextureRegistry};
use atrium_core::vfs::FileSystem;
use std::sync::Arc;

/// Supplies resource downloads to a scene importer.
///
/// Both operations are total: failures surface on the returned handle, never
/// as an error from the request itself.
#[async_trait]
pub trait DownloadProvider: Send {
    /// Requests the raw byte buffer behind `uri`.
    async fn request(&mut self, uri: &str) -> Box<dyn Download>;

    /// Requests the texture behind `uri`. `non_readable` states how the
    /// caller intends to bind the texture (GPU-only vs. CPU-readable).
    async fn request_texture(&mut self, uri: &str, non_readable: bool) -> Box<dyn TextureDownload>;
}

/// Resolution-time [`DownloadProvider`] backed by the dependency cache and
/// the local filesystem/registry collaborators.
///
/// Owns the session's [`DependencyCache`]; once the import pass is over,
/// [`into_dependencies`](CachedDownloadProvider::into_dependencies) yields
/// the record list to persist for the next session.
pub struct CachedDownloadProvider {
    cache: DependencyCache,
    fs: Arc<dyn FileSystem>,
    textures: Arc<dyn TextureRegistry>,
}

impl CachedDownloadProvider {
    /// Creates a provider for one import session over the records persisted
    /// by the previous one.
    pub fn new(
        previous: Vec<DependencyRecord>,
        fs: Arc<dyn FileSystem>,
        textures: Arc<dyn TextureRegistry>,
    ) -> Self {
        Self {
            cache: DependencyCache::new(previous),
            fs,
            textures,
        }
    }

    /// The dependency records appended so far in this session.
    pub fn dependencies(&self) -> &[DependencyRecord] {
        self.cache.dependencies()
    }

    /// Consumes the provider, yielding the session's record list for
    /// persistence.
    pub fn into_dependencies(self) -> Vec<DependencyRecord> {
        self.cache.into_dependencies()
    }
}

// The async signatures exist for the seam's sake; local retrieval completes
// without suspending.
#[async_trait]
impl DownloadProvider for CachedDownloadProvider {
    async fn request(&mut self, uri: &str) -> Box<dyn Download> {
        let path = self.cache.resolve(uri, DependencyKind::Buffer);
        Box::new(FileBufferLoader::load(&*self.fs, &path))
    }

    async fn request_texture(&mut self, uri: &str, non_readable: bool) -> Box<dyn TextureDownload> {
        let path = self.cache.resolve(uri, DependencyKind::Texture);
        Box::new(ImportedTextureLoader::load(
            &*self.textures,
            &path,
            non_readable,
        ))
    }
}
