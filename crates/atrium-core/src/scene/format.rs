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

//! The glTF binary container (GLB) signature and header.
//!
//! A scene description arrives either as JSON text (`.gltf`) or inside the
//! binary container (`.glb`). The container starts with a fixed 12-byte
//! header: the magic bytes, a format version, and the total file length.
//! Buffer downloads sniff this header so the importer can dispatch the bytes
//! to the right parser without trusting the file extension.

use std::convert::TryInto;

/// The magic byte sequence opening every binary glTF container ("glTF").
pub const GLB_MAGIC_BYTES: [u8; 4] = *b"glTF";

/// Returns `true` if `bytes` starts with the binary glTF container magic.
///
/// Shorter inputs are never binary; a four-byte prefix match is exactly what
/// the container format mandates, so no further validation happens here.
pub fn is_binary_gltf(bytes: &[u8]) -> bool {
    bytes.len() >= GLB_MAGIC_BYTES.len() && bytes[..GLB_MAGIC_BYTES.len()] == GLB_MAGIC_BYTES
}

/// The fixed-size header at the beginning of every binary glTF container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlbHeader {
    /// Container format version. Version 2 is the only one in active use.
    pub version: u32,
    /// Total length of the file in bytes, header included.
    pub length: u32,
}

impl GlbHeader {
    /// The total size of the header in bytes.
    pub const SIZE: usize = 4 + 4 + 4;

    /// Attempts to parse a `GlbHeader` from the beginning of a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, &'static str> {
        if bytes.len() < Self::SIZE {
            return Err("Not enough bytes to form a valid GLB header");
        }
        if !is_binary_gltf(bytes) {
            return Err("Invalid magic bytes; not a binary glTF container");
        }

        let version = u32::from_le_bytes(bytes[4..8].try_into().unwrap());
        let length = u32::from_le_bytes(bytes[8..12].try_into().unwrap());

        Ok(Self { version, length })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glb_bytes(version: u32, length: u32) -> Vec<u8> {
        let mut bytes = GLB_MAGIC_BYTES.to_vec();
        bytes.extend_from_slice(&version.to_le_bytes());
        bytes.extend_from_slice(&length.to_le_bytes());
        bytes
    }

    #[test]
    fn magic_prefix_is_detected() {
        assert!(is_binary_gltf(&glb_bytes(2, 12)));
        assert!(!is_binary_gltf(b"{\"asset\":{\"version\":\"2.0\"}}"));
        assert!(!is_binary_gltf(b"glT"));
        assert!(!is_binary_gltf(b""));
    }

    #[test]
    fn header_round_trips_version_and_length() {
        let header = GlbHeader::from_bytes(&glb_bytes(2, 1024)).unwrap();
        assert_eq!(header.version, 2);
        assert_eq!(header.length, 1024);
    }

    #[test]
    fn header_rejects_truncated_or_foreign_input() {
        assert!(GlbHeader::from_bytes(&GLB_MAGIC_BYTES).is_err());
        assert!(GlbHeader::from_bytes(b"PNG\x0d............").is_err());
    }
}
