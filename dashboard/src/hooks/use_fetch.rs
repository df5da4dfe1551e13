use futures::FutureExt;
use futures::future::BoxFuture;
use payloads::ClientError;
use std::fmt::Debug;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::FetchState;

type FetchFn<K, T> =
    Arc<dyn Fn(K) -> BoxFuture<'static, Result<T, ClientError>> + Send + Sync>;

/// Generic resource hook.
///
/// Wraps one API call with loading/error bookkeeping, keyed by the input that
/// selects the data (usually a location). Fetches run as spawned tokio tasks,
/// so activation and refetch must happen inside a runtime.
///
/// Every fetch start takes a new generation and aborts the fetch it
/// supersedes. A result is only published if its generation is still the
/// current one, so a slow response for an old key never overwrites the state
/// of a newer activation.
///
/// # Example
///
/// ```rust,ignore
/// let mut hook = Resource::new("main dashboard", move |location: Location| {
///     let client = client.clone();
///     async move { client.dashboard_main(&location).await }
/// });
/// hook.activate(Location::city("almaty"));
/// let state = hook.settled().await;
/// ```
pub struct Resource<K, T> {
    name: &'static str,
    fetch_fn: FetchFn<K, T>,
    key: Option<K>,
    state: watch::Sender<FetchState<T>>,
    generation: Arc<AtomicU64>,
    in_flight: Option<JoinHandle<()>>,
}

impl<K, T> Resource<K, T>
where
    K: Clone + PartialEq + Debug + Send + 'static,
    T: Clone + Send + Sync + 'static,
{
    pub fn new<F, Fut>(name: &'static str, fetch_fn: F) -> Self
    where
        F: Fn(K) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, ClientError>> + Send + 'static,
    {
        let (state, _) = watch::channel(FetchState::Idle);
        Self {
            name,
            fetch_fn: Arc::new(move |key| fetch_fn(key).boxed()),
            key: None,
            state,
            generation: Arc::new(AtomicU64::new(0)),
            in_flight: None,
        }
    }

    /// Fetch for `key`, unless it is the key of the previous activation.
    pub fn activate(&mut self, key: K) {
        if self.key.as_ref() == Some(&key) {
            return;
        }
        self.key = Some(key);
        self.start();
    }

    /// Fetch again with the current key, whatever the current state.
    ///
    /// Does nothing before the first activation.
    pub fn refetch(&mut self) {
        if self.key.is_some() {
            self.start();
        }
    }

    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FetchState<T> {
        self.state.borrow().clone()
    }

    /// Borrow the current state without cloning it.
    ///
    /// Holds the channel's read lock, so it must not be kept across an
    /// await or a call that publishes.
    pub(crate) fn borrow_state(&self) -> watch::Ref<'_, FetchState<T>> {
        self.state.borrow()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<FetchState<T>> {
        self.state.subscribe()
    }

    /// Wait until no fetch is in progress and return the state.
    pub async fn settled(&self) -> FetchState<T> {
        let mut receiver = self.state.subscribe();
        match receiver.wait_for(|state| !state.is_loading()).await {
            Ok(state) => state.clone(),
            // the sender lives in self, so the channel cannot close here
            Err(_) => self.state(),
        }
    }

    fn start(&mut self) {
        let Some(key) = self.key.clone() else {
            return;
        };
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(previous) = self.in_flight.take() {
            previous.abort();
        }

        self.state.send_modify(|state| {
            let previous = std::mem::take(state).into_latest();
            *state = FetchState::Loading { previous };
        });
        tracing::debug!(resource = self.name, ?key, generation, "fetching");

        let name = self.name;
        let fetch = (self.fetch_fn)(key.clone());
        let state = self.state.clone();
        let current = self.generation.clone();

        self.in_flight = Some(tokio::spawn(async move {
            let result = fetch.await;
            if let Err(e) = &result {
                tracing::error!(resource = name, ?key, "fetch failed: {e}");
            }

            let applied = state.send_if_modified(|state| {
                // Checked under the channel lock so a newer start cannot
                // slip in between the check and the write.
                if current.load(Ordering::SeqCst) != generation {
                    return false;
                }
                *state = match result {
                    Ok(data) => FetchState::Success(data),
                    Err(e) => FetchState::Error {
                        message: e.to_string(),
                        previous: std::mem::take(state).into_latest(),
                    },
                };
                true
            });
            if !applied {
                tracing::debug!(resource = name, ?key, generation, "discarding superseded result");
            }
        }));
    }
}

impl<K, T> Drop for Resource<K, T> {
    fn drop(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
    }
}
