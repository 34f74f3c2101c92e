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

//! # Atrium IO
//!
//! Resource resolution and download services for scene import.
//!
//! An importer parsing a scene description emits a stream of `(uri, kind)`
//! requests. The [`cache::DependencyCache`] maps each URI to a local asset
//! path, reusing the mappings persisted by the previous import pass. The
//! resolved path is then handed to one of the synchronous loaders in
//! [`download`], or to the deferred wrapper when the bytes come from a
//! runtime network layer. [`provider`] ties the pieces together behind the
//! seam a network-backed implementation would also fit.

#![warn(missing_docs)]

pub mod cache;
pub mod download;
pub mod provider;

pub use cache::{DependencyCache, SnapshotError};
pub use download::{
    DeferredDownload, Download, FileBufferLoader, ImportedTextureLoader, PendingDownload,
    TextureDownload,
};
pub use provider::{CachedDownloadProvider, DownloadProvider};
