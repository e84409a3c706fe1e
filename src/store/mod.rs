//! Remote collections and in-flight request tracking.
//!
//! [`RemoteData`] owns one backend-sourced value (a record collection, or a
//! prediction outcome) together with its load lifecycle. The contract:
//!
//! - loads run on a worker thread and report back over a channel polled from
//!   the event loop; the render thread never blocks on the network,
//! - a successful load replaces the value atomically; readers never observe
//!   a partial update,
//! - a failed load keeps the previous value and raises an error flag that is
//!   distinct from "empty collection",
//! - loads are serialized: while one is in flight, further requests are
//!   ignored,
//! - a response from a superseded request (the store was reset, e.g. on view
//!   unmount) is discarded rather than applied out of order. Each request is
//!   tagged with a generation; only the current generation may mutate state.

pub mod endpoints;
pub mod http;

pub use http::ApiClient;

use crate::model::FetchError;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use tracing::debug;

/// Lifecycle of a remote value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing loaded, nothing requested yet.
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request succeeded; the value is current.
    Loaded,
    /// The last request failed; any previous value is still held.
    Failed,
}

/// A backend-sourced value with last-good retention and stale-response
/// suppression.
#[derive(Debug)]
pub struct RemoteData<T> {
    value: Option<T>,
    status: LoadStatus,
    last_error: Option<FetchError>,
    generation: u64,
    inflight: Option<(u64, Receiver<Result<T, FetchError>>)>,
}

impl<T> Default for RemoteData<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RemoteData<T> {
    /// Create an empty store in `Idle` state.
    pub fn new() -> Self {
        Self {
            value: None,
            status: LoadStatus::Idle,
            last_error: None,
            generation: 0,
            inflight: None,
        }
    }

    /// Current lifecycle status.
    pub fn status(&self) -> LoadStatus {
        self.status
    }

    /// The held value, which survives failed reloads.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// The error from the most recent failed load, if the store is `Failed`.
    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    /// Whether a request is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// Discard any in-flight request and clear the held value.
    ///
    /// Used on view unmount: bumping the generation guarantees a late
    /// response from the old request can never touch the fresh state.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.inflight = None;
        self.value = None;
        self.last_error = None;
        self.status = LoadStatus::Idle;
    }

    /// Apply a finished request's result, suppressing stale generations.
    fn apply_result(&mut self, generation: u64, result: Result<T, FetchError>) {
        if generation != self.generation {
            debug!(
                stale = generation,
                current = self.generation,
                "discarding superseded load response"
            );
            return;
        }
        match result {
            Ok(value) => {
                // Atomic replace: the whole collection swaps in one assignment.
                self.value = Some(value);
                self.last_error = None;
                self.status = LoadStatus::Loaded;
            }
            Err(err) => {
                // Keep the last-good value; only the flag changes.
                self.last_error = Some(err);
                self.status = LoadStatus::Failed;
            }
        }
    }
}

impl<T: Send + 'static> RemoteData<T> {
    /// Start a load on a worker thread.
    ///
    /// Returns `false` without doing anything if a request is already in
    /// flight (loads are serialized, not interleaved).
    pub fn begin_load(
        &mut self,
        fetch: impl FnOnce() -> Result<T, FetchError> + Send + 'static,
    ) -> bool {
        if self.inflight.is_some() {
            debug!("load already in flight, ignoring request");
            return false;
        }
        self.generation += 1;
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            // Receiver may be gone if the store was reset; nothing to do then.
            let _ = tx.send(fetch());
        });
        self.inflight = Some((self.generation, rx));
        self.status = LoadStatus::Loading;
        true
    }

    /// Poll the in-flight request, if any. Returns `true` when the store's
    /// state changed (the caller should re-render).
    pub fn poll(&mut self) -> bool {
        let Some((generation, rx)) = self.inflight.as_ref() else {
            return false;
        };
        let generation = *generation;
        match rx.try_recv() {
            Ok(result) => {
                self.inflight = None;
                self.apply_result(generation, result);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                // Worker died without sending; treat as a failed load.
                self.inflight = None;
                self.apply_result(
                    generation,
                    Err(FetchError::Network("load worker disappeared".to_string())),
                );
                true
            }
        }
    }
}

/// A remote record collection. Convenience alias plus slice access.
pub type RecordStore<R> = RemoteData<Vec<R>>;

impl<R> RemoteData<Vec<R>> {
    /// The current records, empty until the first successful load.
    pub fn records(&self) -> &[R] {
        self.value.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn poll_until_settled<T: Send + 'static>(store: &mut RemoteData<T>) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while store.is_loading() {
            if store.poll() {
                return;
            }
            assert!(Instant::now() < deadline, "load did not settle in time");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn successful_load_replaces_value_atomically() {
        let mut store: RecordStore<u32> = RemoteData::new();
        assert_eq!(store.status(), LoadStatus::Idle);

        assert!(store.begin_load(|| Ok(vec![1, 2, 3])));
        assert!(store.is_loading());

        poll_until_settled(&mut store);
        assert_eq!(store.status(), LoadStatus::Loaded);
        assert_eq!(store.records(), &[1, 2, 3]);
        assert!(store.last_error().is_none());
    }

    #[test]
    fn failed_load_keeps_last_good_value() {
        let mut store: RecordStore<u32> = RemoteData::new();
        store.begin_load(|| Ok(vec![7]));
        poll_until_settled(&mut store);
        assert_eq!(store.records(), &[7]);

        store.begin_load(|| Err(FetchError::Network("down".to_string())));
        poll_until_settled(&mut store);
        assert_eq!(store.status(), LoadStatus::Failed);
        assert_eq!(store.records(), &[7], "previous collection must survive");
        assert!(store.last_error().is_some());
    }

    #[test]
    fn failed_state_is_distinct_from_empty() {
        let mut store: RecordStore<u32> = RemoteData::new();
        store.begin_load(|| Err(FetchError::Network("down".to_string())));
        poll_until_settled(&mut store);

        assert!(store.records().is_empty());
        assert_eq!(store.status(), LoadStatus::Failed);

        let mut empty_ok: RecordStore<u32> = RemoteData::new();
        empty_ok.begin_load(|| Ok(Vec::new()));
        poll_until_settled(&mut empty_ok);
        assert!(empty_ok.records().is_empty());
        assert_eq!(empty_ok.status(), LoadStatus::Loaded);
    }

    #[test]
    fn second_load_while_in_flight_is_ignored() {
        let mut store: RecordStore<u32> = RemoteData::new();
        assert!(store.begin_load(|| {
            thread::sleep(Duration::from_millis(50));
            Ok(vec![1])
        }));
        // Serialized: the slow first request wins, the second never starts.
        assert!(!store.begin_load(|| Ok(vec![2])));

        poll_until_settled(&mut store);
        assert_eq!(store.records(), &[1]);
    }

    #[test]
    fn stale_generation_result_is_discarded() {
        let mut store: RecordStore<u32> = RemoteData::new();
        store.begin_load(|| Ok(vec![1]));
        poll_until_settled(&mut store);

        // A result tagged with an outdated generation must not apply.
        let stale_generation = store.generation - 1;
        store.apply_result(stale_generation, Ok(vec![99]));
        assert_eq!(store.records(), &[1]);
        assert_eq!(store.status(), LoadStatus::Loaded);
    }

    #[test]
    fn reset_supersedes_inflight_request() {
        let mut store: RecordStore<u32> = RemoteData::new();
        store.begin_load(|| {
            thread::sleep(Duration::from_millis(30));
            Ok(vec![1])
        });
        store.reset();
        assert_eq!(store.status(), LoadStatus::Idle);
        assert!(store.records().is_empty());

        // A fresh load after reset proceeds normally; the old worker's
        // response has nowhere to land.
        assert!(store.begin_load(|| Ok(vec![2])));
        poll_until_settled(&mut store);
        assert_eq!(store.records(), &[2]);
    }

    #[test]
    fn poll_without_inflight_is_a_no_op() {
        let mut store: RecordStore<u32> = RemoteData::new();
        assert!(!store.poll());
    }
}
