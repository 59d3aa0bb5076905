//! One-shot load of the city snapshot.
//!
//! The loader fetches `/dashboard` once per session. A failure is logged and
//! kept in the loader's own slot; it is never surfaced as a blocking error and
//! has no effect on the prediction workflow.

use common::DashboardSnapshot;
use std::cell::RefCell;
use std::rc::Rc;

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::state::{ChangeNotifier, LoadingGuard, RequestState};
use crate::transport::ApiTransport;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub snapshot: RequestState<DashboardSnapshot>,
    started: bool,
}

impl DashboardState {
    /// Enters `Loading` unless a load was already started.
    pub fn begin(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        self.snapshot = RequestState::Loading;
        true
    }

    pub fn settle(&mut self, outcome: Result<DashboardSnapshot, ClientError>) {
        self.snapshot.settle(outcome);
    }

    pub fn has_started(&self) -> bool {
        self.started
    }

    fn abandon(&mut self) -> bool {
        if self.snapshot.is_loading() {
            self.snapshot = RequestState::Failure(ClientError::Abandoned);
            true
        } else {
            false
        }
    }
}

pub struct DashboardLoader<T> {
    api: Rc<ApiClient<T>>,
    state: Rc<RefCell<DashboardState>>,
    on_change: ChangeNotifier,
}

impl<T: ApiTransport> DashboardLoader<T> {
    pub fn new(api: Rc<ApiClient<T>>, on_change: ChangeNotifier) -> Self {
        Self {
            api,
            state: Rc::new(RefCell::new(DashboardState::default())),
            on_change,
        }
    }

    pub fn snapshot(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    /// Fetches the snapshot. Returns `false` without touching the network if
    /// this loader already ran.
    pub async fn load(&self) -> bool {
        if !self.state.borrow_mut().begin() {
            tracing::debug!("Dashboard snapshot already requested, skipping");
            return false;
        }
        self.notify();

        let _guard = LoadingGuard::new(
            self.state.clone(),
            DashboardState::abandon,
            self.on_change.clone(),
        );

        tracing::trace!("Loading dashboard snapshot");
        let outcome = self.api.dashboard().await;
        match &outcome {
            Ok(snapshot) => tracing::info!(
                zones = snapshot.zones.as_ref().map_or(0, Vec::len),
                "Dashboard snapshot loaded"
            ),
            Err(e) => tracing::warn!("Dashboard snapshot unavailable: {}", e),
        }

        self.state.borrow_mut().settle(outcome);
        self.notify();
        true
    }

    fn notify(&self) {
        (self.on_change)();
    }
}
