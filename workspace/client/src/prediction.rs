//! On-demand segregation prediction for one zone.

use common::{PredictionRequest, PredictionResult, ValidationError, ZoneName};
use std::cell::RefCell;
use std::rc::Rc;

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::state::{ChangeNotifier, LoadingGuard, RequestState};
use crate::transport::ApiTransport;

/// Raw form fields, as typed by the operator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PredictionForm {
    pub total_households: String,
    pub covered_households: String,
    pub zone: ZoneName,
}

impl PredictionForm {
    pub fn new(
        total_households: impl Into<String>,
        covered_households: impl Into<String>,
        zone: ZoneName,
    ) -> Self {
        Self {
            total_households: total_households.into(),
            covered_households: covered_households.into(),
            zone,
        }
    }

    /// Checks the fields and builds the request body.
    pub fn validate(&self) -> Result<PredictionRequest, ValidationError> {
        let total = parse_number(&self.total_households)?;
        let covered = parse_number(&self.covered_households)?;

        if total <= 0.0 {
            return Err(ValidationError::NonPositiveTotal);
        }
        if covered < 0.0 {
            return Err(ValidationError::NegativeCovered);
        }
        if covered > total {
            return Err(ValidationError::CoveredExceedsTotal);
        }

        PredictionRequest::new(whole_count(total)?, whole_count(covered)?, self.zone)
    }
}

fn parse_number(raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(ValidationError::InvalidNumbers)
}

fn whole_count(value: f64) -> Result<u64, ValidationError> {
    if value.fract() != 0.0 {
        return Err(ValidationError::NotWholeNumber);
    }
    // 2^64 and above cannot be represented
    if value >= u64::MAX as f64 {
        return Err(ValidationError::InvalidNumbers);
    }
    Ok(value as u64)
}

/// A validated request tagged with the generation it was issued under.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch {
    pub generation: u64,
    pub request: PredictionRequest,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PredictionState {
    pub form: PredictionForm,
    pub outcome: RequestState<PredictionResult>,
    generation: u64,
}

impl PredictionState {
    /// Clears the previous outcome, enters `Loading` under a fresh generation
    /// and validates the form. Invalid input settles immediately.
    pub fn begin(&mut self) -> Result<Dispatch, ValidationError> {
        self.generation += 1;
        self.outcome = RequestState::Loading;

        match self.form.validate() {
            Ok(request) => Ok(Dispatch {
                generation: self.generation,
                request,
            }),
            Err(err) => {
                self.outcome = RequestState::Failure(err.clone().into());
                Err(err)
            }
        }
    }

    /// Stores `outcome` if `generation` is still current. Returns `false` for a
    /// superseded response, which leaves the state untouched.
    pub fn resolve(
        &mut self,
        generation: u64,
        outcome: Result<PredictionResult, ClientError>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        self.outcome.settle(outcome);
        true
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.outcome.is_loading()
    }

    fn abandon(&mut self, generation: u64) -> bool {
        if generation == self.generation && self.outcome.is_loading() {
            self.outcome = RequestState::Failure(ClientError::Abandoned);
            true
        } else {
            false
        }
    }
}

/// Owns the form and the outcome of the latest prediction.
pub struct PredictionController<T> {
    api: Rc<ApiClient<T>>,
    state: Rc<RefCell<PredictionState>>,
    on_change: ChangeNotifier,
}

impl<T: ApiTransport> PredictionController<T> {
    pub fn new(api: Rc<ApiClient<T>>, on_change: ChangeNotifier) -> Self {
        Self {
            api,
            state: Rc::new(RefCell::new(PredictionState::default())),
            on_change,
        }
    }

    pub fn snapshot(&self) -> PredictionState {
        self.state.borrow().clone()
    }

    pub fn set_total(&self, value: impl Into<String>) {
        self.state.borrow_mut().form.total_households = value.into();
        self.notify();
    }

    pub fn set_covered(&self, value: impl Into<String>) {
        self.state.borrow_mut().form.covered_households = value.into();
        self.notify();
    }

    pub fn set_zone(&self, zone: ZoneName) {
        self.state.borrow_mut().form.zone = zone;
        self.notify();
    }

    /// Runs one prediction from the current form.
    ///
    /// Returns `None` when a later submission superseded this one before its
    /// response arrived; the response is then discarded.
    pub async fn submit(&self) -> Option<Result<PredictionResult, ClientError>> {
        let dispatch = self.state.borrow_mut().begin();
        self.notify();

        let Dispatch {
            generation,
            request,
        } = match dispatch {
            Ok(dispatch) => dispatch,
            Err(err) => {
                tracing::warn!("Prediction input rejected: {}", err);
                return Some(Err(err.into()));
            }
        };

        let _guard = LoadingGuard::new(
            self.state.clone(),
            move |state: &mut PredictionState| state.abandon(generation),
            self.on_change.clone(),
        );

        tracing::info!(
            generation,
            zone = %request.zone_name,
            total = request.total_households,
            covered = request.covered_households,
            "Requesting prediction"
        );
        let outcome = self.api.predict(&request).await;

        if !self.state.borrow_mut().resolve(generation, outcome.clone()) {
            tracing::warn!(generation, "Discarding superseded prediction response");
            return None;
        }
        if let Err(e) = &outcome {
            tracing::error!(generation, "Prediction failed: {}", e);
        }
        self.notify();
        Some(outcome)
    }

    fn notify(&self) {
        (self.on_change)();
    }
}
