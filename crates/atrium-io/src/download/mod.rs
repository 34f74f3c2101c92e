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

//! Download result handles and the loaders that produce them.
//!
//! Every retrieval, local or remote, ends in a handle implementing
//! [`Download`]: success or a descriptive error, never a propagated failure.
//! Whether a failed handle aborts the whole import or is skipped is the
//! caller's policy decision, not made here.
//!
//! The two synchronous loaders are independent types — their construction
//! logic does not overlap, so there is no base/derived pair, just the shared
//! capability trait.

mod deferred;
mod file_loader;
mod texture_loader;

pub use deferred::{DeferredDownload, PendingDownload};
pub use file_loader::FileBufferLoader;
pub use texture_loader::ImportedTextureLoader;

use atrium_core::asset::{AssetHandle, ImportedTexture};
use atrium_core::scene::format::{self, GlbHeader};
use std::borrow::Cow;

/// The uniform result shape of a finished download.
///
/// A handle is created per request and explicitly released with
/// [`dispose`](Download::dispose) once the consumer is done with the
/// payload; handles are never reused. Payload accessors return `None` after
/// disposal.
pub trait Download: Send {
    /// `true` if the payload was retrieved and is still held.
    fn success(&self) -> bool;

    /// A descriptive message when the retrieval failed, `None` otherwise.
    fn error(&self) -> Option<&str>;

    /// The raw byte payload. `None` for unsuccessful or disposed handles,
    /// and for handle kinds that carry no bytes.
    fn data(&self) -> Option<&[u8]>;

    /// `true` once [`dispose`](Download::dispose) has run.
    fn disposed(&self) -> bool;

    /// Releases the payload. Idempotent; afterwards
    /// [`success`](Download::success) reads `false`.
    fn dispose(&mut self);

    /// UTF-8 view of the byte payload, available only while
    /// [`data`](Download::data) is.
    fn text(&self) -> Option<Cow<'_, str>> {
        self.data().map(String::from_utf8_lossy)
    }

    /// Whether the byte payload is a binary glTF container, judged by its
    /// magic-byte header. Absent whenever the payload is.
    fn is_binary(&self) -> Option<bool> {
        self.data().map(format::is_binary_gltf)
    }

    /// The parsed binary-container header, for payloads that
    /// [`is_binary`](Download::is_binary) judged `true`. Lets the importer
    /// dispatch on container version and validate the declared length
    /// without re-sniffing the bytes.
    fn glb_header(&self) -> Option<GlbHeader> {
        self.data().and_then(|d| GlbHeader::from_bytes(d).ok())
    }
}

/// A [`Download`] whose payload is an already-imported texture asset.
pub trait TextureDownload: Download {
    /// The retrieved texture handle, while successful and not disposed.
    fn texture(&self) -> Option<&AssetHandle<ImportedTexture>>;

    /// The caller's binding intent: `true` means the texture will be used
    /// GPU-only. Carried through unchanged; it never affects lookup success.
    fn non_readable(&self) -> bool;
}
