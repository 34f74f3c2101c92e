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

//! URI-to-asset-path resolution against the previous import's records.

mod snapshot;

pub use snapshot::{decode_dependencies, encode_dependencies, SnapshotError};

use atrium_core::asset::{DependencyKind, DependencyRecord};

/// Maps requested URIs to local asset paths, reusing the records a previous
/// import pass persisted.
///
/// The previous list is an immutable snapshot for the session's duration.
/// The current list grows by one record on every [`resolve`] call — repeat
/// requests for the same URI append again, deliberately: deduplication is
/// left to whoever persists the list, and duplicate entries are harmless to
/// the next session's lookup, which only consults the first match.
///
/// Both lists are touched only from the single resolving thread, so the
/// cache holds no locks.
///
/// [`resolve`]: DependencyCache::resolve
#[derive(Debug, Default)]
pub struct DependencyCache {
    previous: Vec<DependencyRecord>,
    current: Vec<DependencyRecord>,
}

impl DependencyCache {
    /// Creates a cache over the records persisted by the previous import
    /// pass. Pass an empty vector for a first-ever import.
    pub fn new(previous: Vec<DependencyRecord>) -> Self {
        Self {
            previous,
            current: Vec::new(),
        }
    }

    /// Resolves `uri` to a local asset path.
    ///
    /// If the previous import recorded a real mapping for `uri`, that
    /// record's asset path wins and `kind` is ignored — identity is the URI
    /// alone. Otherwise the raw URI doubles as the interim path and a fresh
    /// record is started for it.
    ///
    /// Resolution is total: it never fails and never checks that the
    /// returned path is actually retrievable. That is the loader's job, and
    /// it keeps resolution stateless with respect to retrieval success.
    pub fn resolve(&mut self, uri: &str, kind: DependencyKind) -> String {
        match self.previous_record(uri).cloned() {
            Some(record) => {
                log::debug!("dependency cache hit: {} -> {}", uri, record.asset_path);
                let path = record.asset_path.clone();
                self.current.push(record);
                path
            }
            None => {
                log::debug!("dependency cache miss: {}", uri);
                self.current.push(DependencyRecord::first_seen(uri, kind));
                uri.to_owned()
            }
        }
    }

    /// The records appended so far in this session, in request order. This
    /// becomes the snapshot persisted for the next session.
    pub fn dependencies(&self) -> &[DependencyRecord] {
        &self.current
    }

    /// Consumes the cache, yielding the current record list for persistence.
    pub fn into_dependencies(self) -> Vec<DependencyRecord> {
        self.current
    }

    /// First previous record matching `uri`, if it carries a real
    /// resolution.
    ///
    /// Only the first URI match is ever considered: if that record has the
    /// legacy `Unknown` kind the lookup is a miss, even when a later record
    /// for the same URI would have matched. The sentinel is turned into an
    /// explicit `Option` here, at the snapshot boundary; everything past
    /// this point deals in `Option` rather than a sentinel kind.
    fn previous_record(&self, uri: &str) -> Option<&DependencyRecord> {
        self.previous
            .iter()
            .find(|d| d.original_uri == uri)
            .filter(|d| d.is_resolved())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn previous() -> Vec<DependencyRecord> {
        vec![
            DependencyRecord {
                original_uri: "tex.png".into(),
                asset_path: "Textures/tex.png".into(),
                kind: DependencyKind::Texture,
            },
            DependencyRecord {
                original_uri: "mesh.bin".into(),
                asset_path: "Buffers/mesh.bin".into(),
                kind: DependencyKind::Buffer,
            },
        ]
    }

    #[test]
    fn known_uri_resolves_to_stored_path_regardless_of_kind() {
        let mut cache = DependencyCache::new(previous());
        assert_eq!(
            cache.resolve("tex.png", DependencyKind::Texture),
            "Textures/tex.png"
        );
        // The stored record drives resolution even when the caller asks for
        // a different kind.
        assert_eq!(
            cache.resolve("tex.png", DependencyKind::Buffer),
            "Textures/tex.png"
        );
    }

    #[test]
    fn unknown_uri_resolves_to_itself_and_starts_a_record() {
        let mut cache = DependencyCache::new(previous());
        assert_eq!(
            cache.resolve("new/skin.bin", DependencyKind::Buffer),
            "new/skin.bin"
        );
        assert_eq!(
            cache.dependencies(),
            &[DependencyRecord::first_seen(
                "new/skin.bin",
                DependencyKind::Buffer
            )]
        );
    }

    #[test]
    fn legacy_unknown_records_do_not_drive_resolution() {
        let mut cache = DependencyCache::new(vec![DependencyRecord {
            original_uri: "tex.png".into(),
            asset_path: "Textures/tex.png".into(),
            kind: DependencyKind::Unknown,
        }]);
        // Treated as "no real previous entry": the URI doubles as the path.
        assert_eq!(cache.resolve("tex.png", DependencyKind::Texture), "tex.png");
        assert_eq!(cache.dependencies()[0].kind, DependencyKind::Texture);
    }

    #[test]
    fn first_uri_match_wins_even_when_it_is_a_legacy_unknown() {
        // Only the first record for a URI drives resolution. An Unknown
        // record in front degrades the lookup to a miss; the resolved
        // record behind it must not be consulted.
        let mut cache = DependencyCache::new(vec![
            DependencyRecord {
                original_uri: "u.bin".into(),
                asset_path: "stale".into(),
                kind: DependencyKind::Unknown,
            },
            DependencyRecord {
                original_uri: "u.bin".into(),
                asset_path: "Buffers/u.bin".into(),
                kind: DependencyKind::Buffer,
            },
        ]);
        assert_eq!(cache.resolve("u.bin", DependencyKind::Buffer), "u.bin");
        assert_eq!(
            cache.dependencies(),
            &[DependencyRecord::first_seen("u.bin", DependencyKind::Buffer)]
        );
    }

    #[test]
    fn repeat_resolution_is_stable_and_appends_each_time() {
        let mut cache = DependencyCache::new(previous());
        let first = cache.resolve("mesh.bin", DependencyKind::Buffer);
        let second = cache.resolve("mesh.bin", DependencyKind::Buffer);
        assert_eq!(first, second);
        assert_eq!(cache.dependencies().len(), 2);
    }

    #[test]
    fn round_trip_reproduces_paths_in_a_second_session() {
        let mut first_session = DependencyCache::new(previous());
        let uris = ["tex.png", "mesh.bin", "brand_new.bin"];
        let first_paths: Vec<String> = uris
            .iter()
            .map(|u| first_session.resolve(u, DependencyKind::Buffer))
            .collect();

        let mut second_session = DependencyCache::new(first_session.into_dependencies());
        let second_paths: Vec<String> = uris
            .iter()
            .map(|u| second_session.resolve(u, DependencyKind::Buffer))
            .collect();

        assert_eq!(first_paths, second_paths);
    }
}
