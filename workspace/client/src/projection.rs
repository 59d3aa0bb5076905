//! View-models derived from controller state.
//!
//! Everything here is a pure function of state; formatting is for display
//! only and never feeds back into the stored numbers.

use common::{CityTotals, DashboardSnapshot, PredictionResult, ZoneStats};

use crate::state::RequestState;

#[derive(Debug, Clone, PartialEq)]
pub struct CityPanel {
    pub total_households: String,
    pub covered_households: String,
    pub segregated_households: String,
    pub segregation_rate: String,
    pub coverage_rate: Option<String>,
    pub zones_reporting: usize,
}

/// One slice of the zone chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneShare {
    pub zone_name: String,
    pub households: f64,
    /// Share of the city-wide segregation count, in percent
    pub share: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ZoneChart {
    /// Load not started yet
    Hidden,
    Loading,
    /// Load settled without usable zone data
    Unavailable,
    Ready(Vec<ZoneShare>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub city: Option<CityPanel>,
    pub zones: ZoneChart,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionView {
    pub rate: String,
    pub households: String,
    pub model: String,
}

pub fn project_dashboard(state: &RequestState<DashboardSnapshot>) -> DashboardView {
    match state {
        RequestState::Idle => DashboardView {
            city: None,
            zones: ZoneChart::Hidden,
        },
        RequestState::Loading => DashboardView {
            city: None,
            zones: ZoneChart::Loading,
        },
        RequestState::Failure(_) => DashboardView {
            city: None,
            zones: ZoneChart::Unavailable,
        },
        RequestState::Success(snapshot) => {
            let zones = match snapshot.zones.as_deref() {
                Some(zones) if !zones.is_empty() => ZoneChart::Ready(zone_shares(zones)),
                _ => ZoneChart::Unavailable,
            };
            DashboardView {
                city: snapshot
                    .city_totals
                    .as_ref()
                    .map(|totals| city_panel(totals, snapshot)),
                zones,
            }
        }
    }
}

fn city_panel(totals: &CityTotals, snapshot: &DashboardSnapshot) -> CityPanel {
    let zones_reporting = if snapshot.zone_list.is_empty() {
        snapshot.zones.as_ref().map_or(0, Vec::len)
    } else {
        snapshot.zone_list.len()
    };

    CityPanel {
        total_households: format_grouped(totals.total_households),
        covered_households: format_grouped(totals.covered_households),
        segregated_households: format_grouped(totals.source_segregation),
        segregation_rate: format_rate(totals.segregation_rate),
        coverage_rate: totals.coverage_rate.map(format_rate),
        zones_reporting,
    }
}

/// Each zone's segregation count as a share of the sum over all zones.
///
/// When the sum is zero every share is zero.
pub fn zone_shares(zones: &[ZoneStats]) -> Vec<ZoneShare> {
    let total: f64 = zones.iter().map(|z| z.source_segregation).sum();

    zones
        .iter()
        .map(|zone| {
            let share = if total > 0.0 {
                zone.source_segregation / total * 100.0
            } else {
                0.0
            };
            ZoneShare {
                zone_name: zone.zone_name.clone(),
                households: zone.source_segregation,
                share,
                label: format!("{} ({:.0}%)", zone.zone_name, share),
            }
        })
        .collect()
}

pub fn project_prediction(result: &PredictionResult) -> PredictionView {
    PredictionView {
        rate: format_rate(result.segregation_rate),
        households: format_grouped(result.predicted_households),
        model: result.model_used.clone(),
    }
}

/// Percentage with at most two decimals, trailing zeros dropped.
pub fn format_rate(rate: f64) -> String {
    let rounded = (rate * 100.0).round() / 100.0;
    format!("{}%", rounded)
}

/// Rounds to a whole number and groups thousands with commas.
pub fn format_grouped(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;

    fn zone(name: &str, segregated: f64) -> ZoneStats {
        ZoneStats {
            zone_name: name.to_string(),
            source_segregation: segregated,
            total_households: None,
            covered_households: None,
            coverage_rate: None,
            segregation_rate: None,
        }
    }

    fn totals() -> CityTotals {
        CityTotals {
            total_households: 1_234_567.0,
            covered_households: 1_000_000.0,
            source_segregation: 750_250.0,
            segregation_rate: 60.77,
            coverage_rate: Some(81.0),
        }
    }

    #[test]
    fn test_zone_shares_are_proportional() {
        let shares = zone_shares(&[zone("A", 30.0), zone("B", 70.0)]);

        assert_eq!(shares[0].share, 30.0);
        assert_eq!(shares[1].share, 70.0);
        assert_eq!(shares.iter().map(|s| s.share).sum::<f64>(), 100.0);
        assert_eq!(shares[0].label, "A (30%)");
        assert_eq!(shares[1].label, "B (70%)");
    }

    #[test]
    fn test_zone_shares_keep_order_and_round_labels() {
        let shares = zone_shares(&[zone("Z", 1.0), zone("Y", 1.0), zone("X", 1.0)]);
        let names: Vec<_> = shares.iter().map(|s| s.zone_name.as_str()).collect();
        assert_eq!(names, vec!["Z", "Y", "X"]);
        assert_eq!(shares[0].label, "Z (33%)");
    }

    #[test]
    fn test_zone_shares_with_zero_total() {
        let shares = zone_shares(&[zone("A", 0.0), zone("B", 0.0)]);
        assert!(shares.iter().all(|s| s.share == 0.0));
    }

    #[test]
    fn test_prediction_view_matches_scenario() {
        let view = project_prediction(&PredictionResult {
            segregation_rate: 62.5,
            predicted_households: 625.0,
            model_used: "rf_v1".to_string(),
        });
        assert_eq!(view.rate, "62.5%");
        assert_eq!(view.households, "625");
        assert_eq!(view.model, "rf_v1");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(999.0), "999");
        assert_eq!(format_grouped(1000.0), "1,000");
        assert_eq!(format_grouped(1_234_567.0), "1,234,567");
        assert_eq!(format_grouped(12_345.6), "12,346");
        assert_eq!(format_grouped(-4500.0), "-4,500");
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(62.5), "62.5%");
        assert_eq!(format_rate(50.0), "50%");
        assert_eq!(format_rate(33.3333), "33.33%");
    }

    #[test]
    fn test_dashboard_failure_renders_unavailable() {
        let view = project_dashboard(&RequestState::Failure(ClientError::Request {
            status: 500,
            message: "db down".to_string(),
        }));
        assert_eq!(
            view,
            DashboardView {
                city: None,
                zones: ZoneChart::Unavailable
            }
        );
    }

    #[test]
    fn test_dashboard_pending_states() {
        assert_eq!(project_dashboard(&RequestState::Idle).zones, ZoneChart::Hidden);
        assert_eq!(project_dashboard(&RequestState::Loading).zones, ZoneChart::Loading);
    }

    #[test]
    fn test_dashboard_success_without_city_totals() {
        let snapshot = DashboardSnapshot {
            city_totals: None,
            zones: Some(vec![zone("A", 10.0)]),
            zone_list: vec![],
        };
        let view = project_dashboard(&RequestState::Success(snapshot));
        assert!(view.city.is_none());
        assert!(matches!(view.zones, ZoneChart::Ready(ref s) if s.len() == 1));
    }

    #[test]
    fn test_dashboard_success_with_empty_zones() {
        for zones in [None, Some(vec![])] {
            let snapshot = DashboardSnapshot {
                city_totals: Some(totals()),
                zones,
                zone_list: vec![],
            };
            let view = project_dashboard(&RequestState::Success(snapshot));
            assert_eq!(view.zones, ZoneChart::Unavailable);

            let city = view.city.unwrap();
            assert_eq!(city.total_households, "1,234,567");
            assert_eq!(city.covered_households, "1,000,000");
            assert_eq!(city.segregated_households, "750,250");
            assert_eq!(city.segregation_rate, "60.77%");
            assert_eq!(city.coverage_rate.as_deref(), Some("81%"));
            assert_eq!(city.zones_reporting, 0);
        }
    }
}
