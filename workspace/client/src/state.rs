use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ClientError;

/// Called after every state transition so the view can re-render.
pub type ChangeNotifier = Rc<dyn Fn()>;

/// Lifecycle of one network operation.
///
/// `Loading` carries no payload, so a pending request can never be shown
/// alongside a stale result or error.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<T> {
    Idle,
    Loading,
    Success(T),
    Failure(ClientError),
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> RequestState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Success(_) | Self::Failure(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ClientError> {
        match self {
            Self::Failure(err) => Some(err),
            _ => None,
        }
    }

    pub fn settle(&mut self, outcome: Result<T, ClientError>) {
        *self = match outcome {
            Ok(data) => Self::Success(data),
            Err(err) => Self::Failure(err),
        };
    }
}

/// Runs `release` on the shared state when dropped.
///
/// Held across a request's await point so the loading flag is cleared on every
/// exit path, including the future being dropped before it resolves. `release`
/// returns whether it changed anything; only then are observers notified.
pub(crate) struct LoadingGuard<S, F>
where
    F: FnMut(&mut S) -> bool,
{
    state: Rc<RefCell<S>>,
    release: F,
    on_change: ChangeNotifier,
}

impl<S, F> LoadingGuard<S, F>
where
    F: FnMut(&mut S) -> bool,
{
    pub(crate) fn new(state: Rc<RefCell<S>>, release: F, on_change: ChangeNotifier) -> Self {
        Self {
            state,
            release,
            on_change,
        }
    }
}

impl<S, F> Drop for LoadingGuard<S, F>
where
    F: FnMut(&mut S) -> bool,
{
    fn drop(&mut self) {
        let released = match self.state.try_borrow_mut() {
            Ok(mut state) => (self.release)(&mut *state),
            Err(_) => false,
        };
        if released {
            (self.on_change)();
        }
    }
}
