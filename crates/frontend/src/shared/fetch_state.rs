//! Three-phase fetch lifecycle shared by all dashboard views
//!
//! Every view starts in [`FetchPhase::Loading`], issues one request and ends
//! in either [`FetchPhase::Ready`] or [`FetchPhase::Failed`]. Each request
//! gets a [`RequestTicket`]; only the response for the most recent ticket is
//! applied, so a slow response can never overwrite a newer one.

use super::http_client::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchPhase<T> {
    Loading,
    Ready(T),
    /// Holds the fixed user-facing message, never the underlying error
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone)]
pub struct FetchState<T> {
    phase: FetchPhase<T>,
    latest: u64,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            phase: FetchPhase::Loading,
            latest: 0,
        }
    }
}

impl<T> FetchState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &FetchPhase<T> {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, FetchPhase::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match &self.phase {
            FetchPhase::Ready(data) => Some(data),
            _ => None,
        }
    }

    /// Starts a new request. Tickets handed out earlier become stale.
    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        self.phase = FetchPhase::Loading;
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Applies a finished request. Returns `false` when the ticket is stale
    /// and the result was dropped.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        result: Result<T, ApiError>,
        failure_message: &str,
    ) -> bool {
        if !self.is_current(ticket) {
            log::debug!(
                "dropping stale response #{} (latest is #{})",
                ticket.0,
                self.latest
            );
            return false;
        }

        self.phase = match result {
            Ok(data) => FetchPhase::Ready(data),
            Err(err) => {
                log::error!("{}: {}", failure_message, err);
                FetchPhase::Failed(failure_message.to_string())
            }
        };
        true
    }
}

/// Reactive owner of a [`FetchState`] for one mounted view
pub struct FetchResource<T: Send + Sync + 'static> {
    state: RwSignal<FetchState<T>>,
    failure_message: &'static str,
}

impl<T: Send + Sync + 'static> Clone for FetchResource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for FetchResource<T> {}

impl<T: Clone + Send + Sync + 'static> FetchResource<T> {
    pub fn new(failure_message: &'static str) -> Self {
        Self {
            state: RwSignal::new(FetchState::new()),
            failure_message,
        }
    }

    /// Current phase, tracked
    pub fn phase(&self) -> FetchPhase<T> {
        self.state.with(|s| s.phase().clone())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(FetchState::is_loading)
    }

    /// Number of items of the ready payload, `None` while loading or failed
    pub fn ready_len(&self, len: impl Fn(&T) -> usize) -> Option<usize> {
        self.state.with(|s| s.ready().map(&len))
    }

    pub fn with_ready_untracked<U>(&self, f: impl FnOnce(&T) -> U) -> Option<U> {
        self.state.with_untracked(|s| s.ready().map(f))
    }

    /// Switches to loading and applies `request` once it resolves, unless a
    /// newer request was started in the meantime or the view is gone.
    pub fn load<Fut>(&self, request: Fut)
    where
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        let Some(ticket) = self.state.try_update(FetchState::begin) else {
            return;
        };
        let state = self.state;
        let failure_message = self.failure_message;

        spawn_local(async move {
            let result = request.await;
            state.try_update(|s| s.complete(ticket, result, failure_message));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use any_spawner::Executor;
    use futures::channel::oneshot;

    const FAILED: &str = "Failed to fetch things";

    #[test]
    fn test_starts_in_loading() {
        let state = FetchState::<Vec<u32>>::new();
        assert!(state.is_loading());
        assert_eq!(state.ready(), None);
    }

    #[test]
    fn test_success_moves_to_ready() {
        let mut state = FetchState::new();
        let ticket = state.begin();

        assert!(state.complete(ticket, Ok(vec![1, 2, 3]), FAILED));

        assert_eq!(state.phase(), &FetchPhase::Ready(vec![1, 2, 3]));
    }

    #[test]
    fn test_failure_stores_fixed_message_only() {
        let mut state = FetchState::<Vec<u32>>::new();
        let ticket = state.begin();

        state.complete(ticket, Err(ApiError::Status(404)), FAILED);

        assert_eq!(state.phase(), &FetchPhase::Failed(FAILED.to_string()));
    }

    #[test]
    fn test_refetch_shows_loading_again_and_drops_old_data() {
        let mut state = FetchState::new();
        let first = state.begin();
        state.complete(first, Ok(vec![1]), FAILED);

        state.begin();

        assert!(state.is_loading());
        assert_eq!(state.ready(), None);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = FetchState::new();
        let slow = state.begin();
        let fast = state.begin();

        assert!(state.complete(fast, Ok(vec![2]), FAILED));
        assert!(!state.complete(slow, Ok(vec![1]), FAILED));

        assert_eq!(state.phase(), &FetchPhase::Ready(vec![2]));
    }

    #[test]
    fn test_stale_failure_does_not_replace_ready_data() {
        let mut state = FetchState::new();
        let slow = state.begin();
        let fast = state.begin();
        state.complete(fast, Ok(vec![2]), FAILED);

        state.complete(slow, Err(ApiError::Network("timeout".into())), FAILED);

        assert_eq!(state.ready(), Some(&vec![2]));
    }

    #[test]
    fn test_stale_response_while_newer_is_pending_keeps_loading() {
        let mut state = FetchState::new();
        let slow = state.begin();
        let _pending = state.begin();

        state.complete(slow, Ok(vec![1]), FAILED);

        assert!(state.is_loading());
    }

    type Reply = oneshot::Sender<Result<Vec<u32>, ApiError>>;

    fn pending(resource: &FetchResource<Vec<u32>>) -> Reply {
        let (tx, rx) = oneshot::channel();
        resource.load(async move {
            rx.await
                .unwrap_or_else(|_| Err(ApiError::Network("cancelled".to_string())))
        });
        tx
    }

    fn runtime() -> Owner {
        _ = Executor::init_futures_executor();
        let owner = Owner::new();
        owner.set();
        owner
    }

    #[test]
    fn test_load_resolves_to_ready() {
        let _owner = runtime();
        let resource = FetchResource::new(FAILED);

        let reply = pending(&resource);
        assert!(resource.is_loading());
        assert_eq!(resource.ready_len(Vec::len), None);

        _ = reply.send(Ok(vec![4, 5, 6]));
        Executor::poll_local();

        assert_eq!(resource.phase(), FetchPhase::Ready(vec![4, 5, 6]));
        assert_eq!(resource.ready_len(Vec::len), Some(3));
    }

    #[test]
    fn test_slow_earlier_load_cannot_overwrite_newer_one() {
        let _owner = runtime();
        let resource = FetchResource::new(FAILED);

        let slow = pending(&resource);
        let fast = pending(&resource);

        _ = fast.send(Ok(vec![2]));
        Executor::poll_local();
        _ = slow.send(Ok(vec![1]));
        Executor::poll_local();

        assert_eq!(resource.phase(), FetchPhase::Ready(vec![2]));
    }

    #[test]
    fn test_failed_load_keeps_only_fixed_message() {
        let _owner = runtime();
        let resource = FetchResource::<Vec<u32>>::new(FAILED);

        let reply = pending(&resource);
        _ = reply.send(Err(ApiError::Network("connection refused".to_string())));
        Executor::poll_local();

        assert_eq!(resource.phase(), FetchPhase::Failed(FAILED.to_string()));
        assert_eq!(resource.ready_len(Vec::len), None);
    }
}
