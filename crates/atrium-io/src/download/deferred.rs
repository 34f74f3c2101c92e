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

//! One-shot wrapping of asynchronous downloads.
//!
//! At runtime, resources arrive through a network layer as futures rather
//! than synchronous reads. [`PendingDownload`] adapts one such future into
//! an awaitable task whose finished result is then read through the same
//! [`Download`] shape the synchronous loaders produce. An orchestrator can
//! start many of these, await them as a batch, and pull the results out
//! uniformly.
//!
//! There is no cancellation or timeout in this path: abandoning an import
//! simply drops the in-flight wrappers.

use super::Download;
use async_trait::async_trait;
use std::future::Future;
use std::pin::Pin;

type BoxedDownloadFuture<D> = Pin<Box<dyn Future<Output = D> + Send>>;

/// A download that has been started but whose result may not be in yet.
///
/// Object-safe so an orchestrator can hold a mixed batch of pending buffer
/// and texture downloads behind one type.
#[async_trait]
pub trait DeferredDownload: Send {
    /// Suspends until the wrapped operation completes and stores its result
    /// for later synchronous access through
    /// [`download`](DeferredDownload::download).
    ///
    /// # Panics
    ///
    /// A wrapper holds exactly one pending operation, so calling `load` a
    /// second time is a programming error and panics.
    async fn load(&mut self);

    /// The finished result handle, once [`load`](DeferredDownload::load)
    /// has run.
    fn download(&self) -> Option<&dyn Download>;
}

/// Wraps a single pending download future of a fixed result kind `D`.
///
/// Many instances may be in flight simultaneously; each owns nothing but its
/// private pending future and, later, its result.
pub struct PendingDownload<D: Download> {
    pending: Option<BoxedDownloadFuture<D>>,
    result: Option<D>,
}

impl<D: Download> PendingDownload<D> {
    /// Wraps `future` without polling it; nothing runs until
    /// [`load`](DeferredDownload::load).
    pub fn new(future: impl Future<Output = D> + Send + 'static) -> Self {
        Self {
            pending: Some(Box::pin(future)),
            result: None,
        }
    }

    /// The finished result with its concrete type, once loaded.
    pub fn result(&self) -> Option<&D> {
        self.result.as_ref()
    }

    /// Consumes the wrapper, yielding the finished result if there is one.
    pub fn into_result(self) -> Option<D> {
        self.result
    }
}

#[async_trait]
impl<D: Download + 'static> DeferredDownload for PendingDownload<D> {
    async fn load(&mut self) {
        let pending = self
            .pending
            .take()
            .expect("PendingDownload::load called twice");
        self.result = Some(pending.await);
    }

    fn download(&self) -> Option<&dyn Download> {
        self.result.as_ref().map(|d| d as &dyn Download)
    }
}
