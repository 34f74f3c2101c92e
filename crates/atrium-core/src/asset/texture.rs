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

//! The imported-texture asset type.
//!
//! Scene-referenced textures are expected to already exist as independently
//! imported assets with their own import settings (compression, readability).
//! The import services look these up through a [`TextureRegistry`]; they
//! never decode image bytes themselves.
//!
//! [`TextureRegistry`]: super::TextureRegistry

use super::Asset;

/// Width and height of a 2D texture, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent2d {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// The storage format an imported texture was materialized with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFormat {
    /// 8-bit RGBA, linear.
    Rgba8Unorm,
    /// 8-bit RGBA, sRGB.
    Rgba8UnormSrgb,
    /// BC7 block compression, sRGB. Typical for color textures imported with
    /// compression enabled.
    Bc7RgbaUnormSrgb,
}

/// A texture asset already materialized by the host's asset pipeline.
///
/// Whether CPU pixel data was retained is decided at import time: a texture
/// imported as GPU-only carries `pixels: None` and can only be bound, not
/// read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedTexture {
    /// Pixel dimensions.
    pub size: Extent2d,
    /// Storage format.
    pub format: TextureFormat,
    /// Number of mip levels generated at import time.
    pub mip_level_count: u32,
    /// Retained CPU-side pixel data, if the import settings kept it.
    pub pixels: Option<Vec<u8>>,
}

impl ImportedTexture {
    /// Returns `true` if CPU-side pixel data was retained at import time.
    pub fn is_readable(&self) -> bool {
        self.pixels.is_some()
    }
}

impl Asset for ImportedTexture {}
