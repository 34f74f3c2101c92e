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

//! End-to-end import sessions: resolution through the provider, retrieval
//! through real temporary files, and snapshot persistence between sessions.

use anyhow::Result;
use atrium_core::asset::{
    AssetHandle, DependencyKind, DependencyRecord, Extent2d, ImportedTexture, TextureFormat,
    TextureRegistry,
};
use atrium_core::vfs::DiskFileSystem;
use atrium_io::cache::{decode_dependencies, encode_dependencies};
use atrium_io::{CachedDownloadProvider, DownloadProvider};
use std::collections::HashMap;
use std::sync::Arc;
use tempfile::tempdir;

struct FakeTextureRegistry(HashMap<String, AssetHandle<ImportedTexture>>);

impl FakeTextureRegistry {
    fn with_texture(path: &str) -> Self {
        let mut textures = HashMap::new();
        textures.insert(
            path.to_owned(),
            AssetHandle::new(ImportedTexture {
                size: Extent2d {
                    width: 64,
                    height: 64,
                },
                format: TextureFormat::Bc7RgbaUnormSrgb,
                mip_level_count: 7,
                pixels: None,
            }),
        );
        Self(textures)
    }
}

impl TextureRegistry for FakeTextureRegistry {
    fn load_texture(&self, asset_path: &str) -> Option<AssetHandle<ImportedTexture>> {
        self.0.get(asset_path).cloned()
    }
}

#[tokio::test]
async fn previous_texture_record_redirects_to_its_asset_path() -> Result<()> {
    // The scene references "tex.png"; a previous import materialized it at
    // "Textures/tex.png" and only the registry entry at that path exists.
    let previous = vec![DependencyRecord {
        original_uri: "tex.png".into(),
        asset_path: "Textures/tex.png".into(),
        kind: DependencyKind::Texture,
    }];
    let registry = FakeTextureRegistry::with_texture("Textures/tex.png");
    let dir = tempdir()?;

    let mut provider = CachedDownloadProvider::new(
        previous,
        Arc::new(DiskFileSystem::new(dir.path())),
        Arc::new(registry),
    );

    let download = provider.request_texture("tex.png", true).await;
    assert!(download.success());
    assert!(download.non_readable());
    assert!(download.texture().is_some());

    // The reused record is carried into the session's own list.
    assert_eq!(provider.dependencies().len(), 1);
    assert_eq!(provider.dependencies()[0].asset_path, "Textures/tex.png");
    Ok(())
}

#[tokio::test]
async fn first_time_buffer_uri_loads_from_disk_under_its_own_name() -> Result<()> {
    let dir = tempdir()?;
    std::fs::create_dir(dir.path().join("meshes"))?;
    std::fs::write(dir.path().join("meshes/hull.bin"), [7u8; 32])?;

    let mut provider = CachedDownloadProvider::new(
        Vec::new(),
        Arc::new(DiskFileSystem::new(dir.path())),
        Arc::new(FakeTextureRegistry(HashMap::new())),
    );

    let download = provider.request("meshes/hull.bin").await;
    assert!(download.success());
    assert_eq!(download.data().unwrap(), &[7u8; 32]);
    assert_eq!(download.is_binary(), Some(false));

    // No prior mapping: the raw URI doubled as the path and was recorded.
    assert_eq!(
        provider.dependencies(),
        &[DependencyRecord::first_seen(
            "meshes/hull.bin",
            DependencyKind::Buffer
        )]
    );
    Ok(())
}

#[tokio::test]
async fn failed_retrievals_surface_on_the_handle_not_as_errors() -> Result<()> {
    let dir = tempdir()?;
    // An image file on disk does not make a texture: only the registry
    // counts, and this registry is empty.
    std::fs::write(dir.path().join("missing.png"), b"\x89PNG\x0d\x0a\x1a\x0a")?;

    let mut provider = CachedDownloadProvider::new(
        Vec::new(),
        Arc::new(DiskFileSystem::new(dir.path())),
        Arc::new(FakeTextureRegistry(HashMap::new())),
    );

    let buffer = provider.request("missing.bin").await;
    assert!(!buffer.success());
    assert!(buffer.error().unwrap().contains("missing.bin"));

    let texture = provider.request_texture("missing.png", false).await;
    assert!(!texture.success());
    assert!(texture.error().unwrap().contains("missing.png"));
    Ok(())
}

#[tokio::test]
async fn persisted_snapshot_reproduces_paths_in_the_next_session() -> Result<()> {
    let dir = tempdir()?;
    std::fs::write(dir.path().join("hull.bin"), [1u8, 2, 3])?;
    let fs = Arc::new(DiskFileSystem::new(dir.path()));
    let registry = Arc::new(FakeTextureRegistry::with_texture("tex.png"));

    // First session: everything resolves first-time.
    let mut first = CachedDownloadProvider::new(Vec::new(), fs.clone(), registry.clone());
    first.request("hull.bin").await;
    first.request_texture("tex.png", false).await;
    let snapshot = encode_dependencies(&first.into_dependencies())?;

    // Second session: fed the persisted snapshot, same URI set.
    let previous = decode_dependencies(&snapshot)?;
    let mut second = CachedDownloadProvider::new(previous, fs, registry);
    let buffer = second.request("hull.bin").await;
    let texture = second.request_texture("tex.png", false).await;

    assert!(buffer.success());
    assert!(texture.success());
    assert_eq!(
        second.dependencies(),
        &[
            DependencyRecord::first_seen("hull.bin", DependencyKind::Buffer),
            DependencyRecord::first_seen("tex.png", DependencyKind::Texture),
        ]
    );
    Ok(())
}
