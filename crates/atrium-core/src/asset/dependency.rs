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

//! Persisted dependency records for scene imports.
//!
//! A scene description references external resources (binary buffers,
//! textures) by URI. After an import pass has mapped a URI to a concrete
//! local asset path, that mapping is persisted as a [`DependencyRecord`] so
//! the next import pass can reuse it instead of resolving the URI again.

use serde::{Deserialize, Serialize};

/// The kind of external resource a dependency record refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DependencyKind {
    /// Legacy sentinel found in snapshots written before kinds were
    /// mandatory. Records carrying it are ignored during lookup; current
    /// sessions never produce it.
    Unknown,
    /// A raw byte payload, e.g. geometry or animation data.
    Buffer,
    /// An image resource materialized by the host's asset pipeline.
    Texture,
}

/// A cached mapping from an external resource's original URI to its resolved
/// local asset path.
///
/// `original_uri` is the identity key: two records refer to the same external
/// resource exactly when their original URIs are equal. The working list
/// produced during a session may contain several appended copies for the same
/// URI; lookup only ever consults the first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRecord {
    /// The URI exactly as it appears in the scene description.
    pub original_uri: String,
    /// The local asset path the URI resolved to. For a first-time resolution
    /// this is the URI itself; the host rewrites it once the resource has
    /// been materialized as a project asset.
    pub asset_path: String,
    /// What kind of resource the record describes.
    pub kind: DependencyKind,
}

impl DependencyRecord {
    /// Creates a record for a URI seen for the first time: the raw URI
    /// doubles as the interim asset path.
    pub fn first_seen(uri: impl Into<String>, kind: DependencyKind) -> Self {
        let uri = uri.into();
        Self {
            asset_path: uri.clone(),
            original_uri: uri,
            kind,
        }
    }

    /// Returns `true` if this record carries a real resolution, i.e. its
    /// kind is not the legacy [`DependencyKind::Unknown`] sentinel.
    pub fn is_resolved(&self) -> bool {
        self.kind != DependencyKind::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_seen_uses_uri_as_interim_path() {
        let record = DependencyRecord::first_seen("meshes/hull.bin", DependencyKind::Buffer);
        assert_eq!(record.original_uri, "meshes/hull.bin");
        assert_eq!(record.asset_path, "meshes/hull.bin");
        assert_eq!(record.kind, DependencyKind::Buffer);
    }

    #[test]
    fn unknown_kind_is_not_resolved() {
        let record = DependencyRecord {
            original_uri: "tex.png".into(),
            asset_path: "tex.png".into(),
            kind: DependencyKind::Unknown,
        };
        assert!(!record.is_resolved());
        assert!(DependencyRecord::first_seen("tex.png", DependencyKind::Texture).is_resolved());
    }
}
