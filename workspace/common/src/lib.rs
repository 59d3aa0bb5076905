//! Common transport-layer types shared between the bundle server and the
//! dashboard client.
//! These structs mirror the model service's request/response payloads so the
//! client can deserialize API responses without duplicating shapes.

mod zone;

pub use zone::{UnknownZone, ZoneName};

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ===================== Prediction =====================

/// Client-side input validation failures. These never reach the network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter valid numbers for households")]
    InvalidNumbers,

    #[error("Household counts must be whole numbers")]
    NotWholeNumber,

    #[error("Total households must be greater than 0")]
    NonPositiveTotal,

    #[error("Covered households cannot be negative")]
    NegativeCovered,

    #[error("Covered households cannot exceed total households")]
    CoveredExceedsTotal,
}

/// Request body for `POST /predict`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionRequest {
    pub total_households: u64,
    pub covered_households: u64,
    pub zone_name: ZoneName,
}

impl PredictionRequest {
    /// Builds a request, enforcing `0 < total` and `covered <= total`.
    pub fn new(
        total_households: u64,
        covered_households: u64,
        zone_name: ZoneName,
    ) -> Result<Self, ValidationError> {
        if total_households == 0 {
            return Err(ValidationError::NonPositiveTotal);
        }
        if covered_households > total_households {
            return Err(ValidationError::CoveredExceedsTotal);
        }
        Ok(Self {
            total_households,
            covered_households,
            zone_name,
        })
    }
}

/// Model output for one zone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionResult {
    /// Percentage of total households predicted to segregate at source
    pub segregation_rate: f64,
    pub predicted_households: f64,
    pub model_used: String,
}

/// Success body of `POST /predict`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictResponse {
    pub prediction: PredictionResult,
}

// ===================== Dashboard =====================

/// City-wide aggregate computed by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CityTotals {
    #[serde(rename = "Total_Households")]
    pub total_households: f64,
    #[serde(rename = "Covered_Households")]
    pub covered_households: f64,
    #[serde(rename = "HH_Source_Segregation")]
    pub source_segregation: f64,
    #[serde(rename = "Segregation_Rate")]
    pub segregation_rate: f64,
    #[serde(rename = "Coverage_Rate", default)]
    pub coverage_rate: Option<f64>,
}

/// Per-zone row of the dashboard snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZoneStats {
    #[serde(rename = "Zone_Name")]
    pub zone_name: String,
    #[serde(rename = "HH_Source_Segregation")]
    pub source_segregation: f64,
    #[serde(rename = "Total_Households", default)]
    pub total_households: Option<f64>,
    #[serde(rename = "Covered_Households", default)]
    pub covered_households: Option<f64>,
    #[serde(rename = "Coverage_Rate", default)]
    pub coverage_rate: Option<f64>,
    #[serde(rename = "Segregation_Rate", default)]
    pub segregation_rate: Option<f64>,
}

/// Success body of `GET /dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub city_totals: Option<CityTotals>,
    #[serde(default)]
    pub zones: Option<Vec<ZoneStats>>,
    #[serde(default)]
    pub zone_list: Vec<String>,
}

// ===================== Errors & health =====================

/// Error body returned with any non-success status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Bundle server health report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    /// `healthy` when the frontend bundle is present, `degraded` otherwise
    pub status: String,
    pub version: String,
    pub bundle: bool,
    pub upstream: Option<String>,
}
