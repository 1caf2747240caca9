//! Keyed read-through cache with request coalescing.
//!
//! Every key moves through the same small state machine:
//!
//! ```text
//!   Idle ──read──▶ Loading ──ok──▶ Success ──invalidate / stale──▶ Loading
//!                     │
//!                     └──err──▶ Error ──invalidate──▶ Idle
//! ```
//!
//! While a key is `Loading`, further reads join the pending request instead
//! of starting another one, so there is at most one fetch in flight per key.
//! Failures are returned as [`QueryState::Error`] rather than propagated, and
//! are not retried until the key is invalidated.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use tokio::time::Instant;

use crate::error::{ConsoleError, ConsoleResult};

type FetchOutput<T> = Result<Arc<T>, Arc<ConsoleError>>;
type SharedFetch<T> = Shared<BoxFuture<'static, FetchOutput<T>>>;

/// Observable state of one cache key
#[derive(Debug)]
pub enum QueryState<T> {
    /// Nothing has been requested yet
    Idle,
    /// A fetch is in flight
    Loading,
    /// Latest successful value
    Success(Arc<T>),
    /// Latest fetch failed
    Error(Arc<ConsoleError>),
}

impl<T> Clone for QueryState<T> {
    fn clone(&self) -> Self {
        match self {
            QueryState::Idle => QueryState::Idle,
            QueryState::Loading => QueryState::Loading,
            QueryState::Success(data) => QueryState::Success(Arc::clone(data)),
            QueryState::Error(err) => QueryState::Error(Arc::clone(err)),
        }
    }
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    /// Cached data, if the last fetch succeeded
    pub fn data(&self) -> Option<&Arc<T>> {
        match self {
            QueryState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&Arc<ConsoleError>> {
        match self {
            QueryState::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Short status name (`idle`, `loading`, `success`, `error`)
    pub fn status(&self) -> &'static str {
        match self {
            QueryState::Idle => "idle",
            QueryState::Loading => "loading",
            QueryState::Success(_) => "success",
            QueryState::Error(_) => "error",
        }
    }

    fn from_output(output: FetchOutput<T>) -> Self {
        match output {
            Ok(data) => QueryState::Success(data),
            Err(err) => QueryState::Error(err),
        }
    }
}

enum Entry<T> {
    Loading {
        fetch: SharedFetch<T>,
        generation: u64,
    },
    Success {
        data: Arc<T>,
        fetched_at: Instant,
    },
    Error {
        error: Arc<ConsoleError>,
    },
}

struct Inner<T> {
    entries: HashMap<String, Entry<T>>,
    next_generation: u64,
}

/// Keyed cache that deduplicates concurrent fetches of the same key
pub struct QueryCache<T> {
    inner: Mutex<Inner<T>>,
    stale_time: Option<Duration>,
}

impl<T> Default for QueryCache<T> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<T> QueryCache<T> {
    /// Create a cache. With `stale_time` set, successful values older than
    /// that are refetched on the next read; `None` keeps them until invalidated.
    pub fn new(stale_time: Option<Duration>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: HashMap::new(),
                next_generation: 0,
            }),
            stale_time,
        }
    }

    pub fn stale_time(&self) -> Option<Duration> {
        self.stale_time
    }

    /// Current state of a key without triggering a fetch.
    ///
    /// A stale value is still reported as `Success` until it is re-read.
    pub fn state(&self, key: &str) -> QueryState<T> {
        match self.inner.lock().entries.get(key) {
            None => QueryState::Idle,
            Some(Entry::Loading { .. }) => QueryState::Loading,
            Some(Entry::Success { data, .. }) => QueryState::Success(Arc::clone(data)),
            Some(Entry::Error { error }) => QueryState::Error(Arc::clone(error)),
        }
    }

    /// Store a value directly, replacing whatever the key held.
    ///
    /// A fetch already in flight for the key still resolves for its waiters
    /// but no longer writes into the cache.
    pub fn set_data(&self, key: &str, data: T) {
        let mut inner = self.inner.lock();
        inner.next_generation += 1;
        inner.entries.insert(
            key.to_string(),
            Entry::Success {
                data: Arc::new(data),
                fetched_at: Instant::now(),
            },
        );
    }

    /// Drop the cached entry so the next read fetches again.
    pub fn invalidate(&self, key: &str) -> bool {
        let removed = self.inner.lock().entries.remove(key).is_some();
        if removed {
            tracing::debug!(key, "Query invalidated");
        }
        removed
    }

    pub fn invalidate_all(&self) {
        self.inner.lock().entries.clear();
    }

    fn is_stale(&self, fetched_at: Instant) -> bool {
        self.stale_time
            .is_some_and(|stale_time| fetched_at.elapsed() >= stale_time)
    }
}

impl<T> QueryCache<T>
where
    T: Send + Sync + 'static,
{
    /// Read a key, fetching it with `fetcher` when nothing usable is cached.
    ///
    /// `fetcher` is only invoked when this call starts a new request; callers
    /// that arrive while a request is pending share its result.
    pub async fn fetch<F, Fut>(&self, key: &str, fetcher: F) -> QueryState<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ConsoleResult<T>> + Send + 'static,
    {
        let (pending, generation) = {
            let mut inner = self.inner.lock();
            let mut joined = None;
            if let Some(entry) = inner.entries.get(key) {
                match entry {
                    Entry::Success { data, fetched_at } if !self.is_stale(*fetched_at) => {
                        tracing::trace!(key, "Query cache hit");
                        return QueryState::Success(Arc::clone(data));
                    }
                    Entry::Error { error } => return QueryState::Error(Arc::clone(error)),
                    Entry::Loading { fetch, generation } => {
                        tracing::debug!(key, "Joining in-flight query");
                        joined = Some((fetch.clone(), *generation));
                    }
                    Entry::Success { .. } => {}
                }
            }

            match joined {
                Some(pending) => pending,
                None => {
                    inner.next_generation += 1;
                    let generation = inner.next_generation;
                    let fetch = fetcher()
                        .map(|result| result.map(Arc::new).map_err(Arc::new))
                        .boxed()
                        .shared();
                    inner.entries.insert(
                        key.to_string(),
                        Entry::Loading {
                            fetch: fetch.clone(),
                            generation,
                        },
                    );
                    tracing::debug!(key, generation, "Query fetch started");
                    (fetch, generation)
                }
            }
        };

        let output = pending.await;
        self.settle(key, generation, &output);
        QueryState::from_output(output)
    }

    /// Record a finished fetch, unless the key was invalidated or replaced
    /// while it was running.
    fn settle(&self, key: &str, generation: u64, output: &FetchOutput<T>) {
        let mut inner = self.inner.lock();
        let current = matches!(
            inner.entries.get(key),
            Some(Entry::Loading { generation: g, .. }) if *g == generation
        );
        if !current {
            return;
        }
        let entry = match output {
            Ok(data) => Entry::Success {
                data: Arc::clone(data),
                fetched_at: Instant::now(),
            },
            Err(error) => {
                tracing::warn!(key, error = %error, "Query fetch failed");
                Entry::Error {
                    error: Arc::clone(error),
                }
            }
        };
        inner.entries.insert(key.to_string(), entry);
    }
}
