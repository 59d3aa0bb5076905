//! Request orchestration for the segregation dashboard.
//!
//! Two independent flows live here: the one-shot [`DashboardLoader`] and the
//! user-driven [`PredictionController`]. Both talk to the backend through an
//! [`ApiClient`] over any [`ApiTransport`], keep their state in a
//! [`RequestState`] slot, and notify the view after every transition. The
//! [`projection`] module turns that state into display view-models.
//!
//! Nothing in this crate touches the browser, so the whole state machine runs
//! under native tests.

pub mod api;
pub mod dashboard;
pub mod endpoint;
pub mod error;
pub mod prediction;
pub mod projection;
pub mod state;
pub mod transport;

#[cfg(test)]
mod testing;

pub use api::ApiClient;
pub use dashboard::{DashboardLoader, DashboardState};
pub use endpoint::{ExecutionMode, resolve_api_base};
pub use error::{ClientError, TransportError, ValidationError};
pub use prediction::{Dispatch, PredictionController, PredictionForm, PredictionState};
pub use state::{ChangeNotifier, RequestState};
pub use transport::{ApiTransport, HttpReply};
