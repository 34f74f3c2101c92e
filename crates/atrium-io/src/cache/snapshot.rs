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

//! Binary encoding of the dependency snapshot.
//!
//! The host decides where the bytes live (an import-metadata sidecar,
//! typically); this module only fixes the encoding so two sessions agree on
//! it.

use atrium_core::asset::DependencyRecord;
use thiserror::Error;

/// A failure while encoding or decoding a dependency snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The record list could not be encoded.
    #[error("failed to encode dependency snapshot: {0}")]
    Encode(#[from] bincode::error::EncodeError),
    /// The byte payload is not a valid snapshot.
    #[error("failed to decode dependency snapshot: {0}")]
    Decode(#[from] bincode::error::DecodeError),
}

/// Encodes a dependency record list into the persisted snapshot format.
pub fn encode_dependencies(records: &[DependencyRecord]) -> Result<Vec<u8>, SnapshotError> {
    let config = bincode::config::standard();
    Ok(bincode::serde::encode_to_vec(records, config)?)
}

/// Decodes a persisted snapshot back into its dependency record list.
pub fn decode_dependencies(bytes: &[u8]) -> Result<Vec<DependencyRecord>, SnapshotError> {
    let config = bincode::config::standard();
    let (records, _) = bincode::serde::decode_from_slice(bytes, config)?;
    Ok(records)
}
