//! Single-flight repository search.

use std::sync::{Mutex, MutexGuard, PoisonError};

use futures::future::{AbortHandle, Abortable};
use ghsearch_ghapi_interface::{types::GhSearchResponse, ApiError, Result};
use tracing::debug;

use crate::{endpoints::Endpoints, executor::RequestExecutor};

#[derive(Default)]
struct SearchSlot {
    generation: u64,
    handle: Option<AbortHandle>,
}

/// Releases its generation from the slot when dropped, including when the
/// `search` future itself is dropped mid-flight.
struct SlotGuard<'a> {
    coordinator: &'a SearchCoordinator,
    generation: u64,
}

impl SlotGuard<'_> {
    fn release(self) -> bool {
        self.coordinator.release(self.generation)
    }
}

impl Drop for SlotGuard<'_> {
    fn drop(&mut self) {
        self.coordinator.release(self.generation);
    }
}

/// Runs at most one search at a time.
///
/// Starting a search aborts the one in flight. Each search is tagged with a
/// generation number; a result whose generation is no longer current is
/// discarded and reported as cancelled, so a superseded search never
/// overwrites a newer one.
///
/// Concurrent callers must serialize their `search` calls themselves.
pub struct SearchCoordinator {
    executor: RequestExecutor,
    endpoints: Endpoints,
    slot: Mutex<SearchSlot>,
}

impl SearchCoordinator {
    /// Creates a new coordinator.
    pub fn new(executor: RequestExecutor, endpoints: Endpoints) -> Self {
        Self {
            executor,
            endpoints,
            slot: Mutex::new(SearchSlot::default()),
        }
    }

    /// Search repositories, superseding the search in flight.
    pub async fn search(&self, query: &str) -> Result<GhSearchResponse> {
        let (handle, registration) = AbortHandle::new_pair();
        let generation = self.supersede(handle);
        let guard = SlotGuard {
            coordinator: self,
            generation,
        };

        let url = self.endpoints.search_url(query)?;
        let outcome = Abortable::new(self.executor.fetch_json(&url), registration).await;
        let still_current = guard.release();

        match outcome {
            Err(_aborted) => {
                debug!(generation = generation, "Search was cancelled");
                Err(ApiError::cancelled())
            }
            Ok(_) if !still_current => {
                debug!(generation = generation, "Discarding superseded search result");
                Err(ApiError::cancelled())
            }
            Ok(result) => result,
        }
    }

    /// Cancel the search in flight, if any.
    pub fn cancel(&self) {
        let mut slot = self.lock_slot();
        if let Some(handle) = slot.handle.take() {
            handle.abort();
            slot.generation = slot.generation.wrapping_add(1);
            debug!(generation = slot.generation, "Cancelled current search");
        }
    }

    /// Is a search in flight?
    pub fn is_searching(&self) -> bool {
        self.lock_slot().handle.is_some()
    }

    /// Abort the previous search, store the new handle and return its generation.
    fn supersede(&self, handle: AbortHandle) -> u64 {
        let mut slot = self.lock_slot();
        if let Some(previous) = slot.handle.replace(handle) {
            previous.abort();
            debug!(generation = slot.generation, "Superseded previous search");
        }

        slot.generation = slot.generation.wrapping_add(1);
        slot.generation
    }

    /// Clear the slot if `generation` still owns it. Returns whether it did.
    fn release(&self, generation: u64) -> bool {
        let mut slot = self.lock_slot();
        if slot.generation == generation {
            slot.handle = None;
            true
        } else {
            false
        }
    }

    fn lock_slot(&self) -> MutexGuard<'_, SearchSlot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
