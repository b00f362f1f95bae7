//! ReportFilter - which reports a listing should include.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::HazardReport;
use crate::domain::foundation::{Timestamp, ValidationError};
use crate::domain::hazard::HazardType;
use crate::domain::location::Coordinates;

/// How far back a listing reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeWindow {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "24h")]
    Last24Hours,
    #[serde(rename = "week")]
    LastWeek,
}

impl TimeWindow {
    /// Start of the window, `None` for no limit. Reports must be strictly
    /// newer than the cutoff.
    pub fn cutoff(&self, now: &Timestamp) -> Option<Timestamp> {
        match self {
            TimeWindow::All => None,
            TimeWindow::Last24Hours => Some(now.minus_hours(24)),
            TimeWindow::LastWeek => Some(now.minus_days(7)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::All => "all",
            TimeWindow::Last24Hours => "24h",
            TimeWindow::LastWeek => "week",
        }
    }
}

impl FromStr for TimeWindow {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(TimeWindow::All),
            "24h" => Ok(TimeWindow::Last24Hours),
            "week" => Ok(TimeWindow::LastWeek),
            other => Err(ValidationError::not_an_option("window", other)),
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Circle around a point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Radius {
    pub center: Coordinates,
    pub km: f64,
}

impl Radius {
    pub fn new(center: Coordinates, km: f64) -> Result<Self, ValidationError> {
        if !km.is_finite() || km <= 0.0 {
            return Err(ValidationError::invalid_format(
                "radius_km",
                "must be a positive number",
            ));
        }
        Ok(Self { center, km })
    }

    pub fn contains(&self, point: &Coordinates) -> bool {
        self.center.distance_km(point) <= self.km
    }
}

/// Listing criteria.
///
/// `types: None` means every type; `Some` of an empty set matches nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportFilter {
    pub types: Option<BTreeSet<HazardType>>,
    pub window: TimeWindow,
    pub radius: Option<Radius>,
}

impl ReportFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_types(mut self, types: impl IntoIterator<Item = HazardType>) -> Self {
        self.types = Some(types.into_iter().collect());
        self
    }

    pub fn with_window(mut self, window: TimeWindow) -> Self {
        self.window = window;
        self
    }

    pub fn within(mut self, radius: Radius) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Whether `report` passes every criterion at time `now`.
    pub fn matches(&self, report: &HazardReport, now: &Timestamp) -> bool {
        if let Some(types) = &self.types {
            if !types.contains(&report.hazard_type) {
                return false;
            }
        }
        if let Some(cutoff) = self.window.cutoff(now) {
            if !report.reported_at.is_after(&cutoff) {
                return false;
            }
        }
        match &self.radius {
            Some(radius) => radius.contains(&report.location),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ReportId;
    use crate::domain::wizard::FieldAnswers;

    fn report(hazard_type: HazardType, lat: f64, lng: f64, age_hours: i64) -> HazardReport {
        HazardReport {
            id: ReportId::generate(),
            hazard_type,
            location: Coordinates::new(lat, lng).unwrap(),
            location_name: "Santa Monica, CA".to_string(),
            photo: None,
            fields: FieldAnswers::new(),
            description: String::new(),
            reported_at: Timestamp::now().minus_hours(age_hours),
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let now = Timestamp::now();
        let old = report(HazardType::OilSpill, 10.0, 10.0, 24 * 30);
        assert!(ReportFilter::all().matches(&old, &now));
    }

    #[test]
    fn type_set_excludes_other_types() {
        let now = Timestamp::now();
        let filter = ReportFilter::all().with_types([HazardType::OilSpill, HazardType::StormWaves]);

        assert!(filter.matches(&report(HazardType::StormWaves, 34.0, -118.5, 1), &now));
        assert!(!filter.matches(&report(HazardType::MarineDebris, 34.0, -118.5, 1), &now));
    }

    #[test]
    fn empty_type_selection_matches_nothing() {
        let now = Timestamp::now();
        let filter = ReportFilter::all().with_types(Vec::<HazardType>::new());

        for hazard_type in HazardType::ALL {
            assert!(!filter.matches(&report(hazard_type, 34.0, -118.5, 1), &now));
        }
    }

    #[test]
    fn window_boundary_is_exclusive() {
        let now = Timestamp::now();
        let filter = ReportFilter::all().with_window(TimeWindow::Last24Hours);
        let mut at_boundary = report(HazardType::Other, 34.0, -118.5, 0);

        at_boundary.reported_at = now.minus_hours(24);
        assert!(!filter.matches(&at_boundary, &now));

        at_boundary.reported_at = now.minus_hours(24).plus_millis(1);
        assert!(filter.matches(&at_boundary, &now));

        let week = ReportFilter::all().with_window(TimeWindow::LastWeek);
        at_boundary.reported_at = now.minus_days(7);
        assert!(!week.matches(&at_boundary, &now));
    }

    #[test]
    fn time_window_cuts_off_old_reports() {
        let now = Timestamp::now();
        let filter = ReportFilter::all().with_window(TimeWindow::Last24Hours);

        assert!(filter.matches(&report(HazardType::Other, 34.0, -118.5, 5), &now));
        assert!(!filter.matches(&report(HazardType::Other, 34.0, -118.5, 30), &now));
        assert!(ReportFilter::all()
            .with_window(TimeWindow::LastWeek)
            .matches(&report(HazardType::Other, 34.0, -118.5, 30), &now));
    }

    #[test]
    fn radius_excludes_distant_reports() {
        let now = Timestamp::now();
        let santa_monica = Coordinates::new(34.0194, -118.4912).unwrap();
        let filter = ReportFilter::all().within(Radius::new(santa_monica, 5.0).unwrap());

        assert!(filter.matches(&report(HazardType::OilSpill, 34.0085, -118.4965, 1), &now));
        // San Diego
        assert!(!filter.matches(&report(HazardType::OilSpill, 32.7157, -117.1611, 1), &now));
    }

    #[test]
    fn window_parses_query_values() {
        assert_eq!("24h".parse::<TimeWindow>().unwrap(), TimeWindow::Last24Hours);
        assert_eq!("week".parse::<TimeWindow>().unwrap(), TimeWindow::LastWeek);
        assert!("month".parse::<TimeWindow>().is_err());
    }

    #[test]
    fn radius_must_be_positive() {
        let center = Coordinates::new(0.0, 0.0).unwrap();
        assert!(Radius::new(center, 0.0).is_err());
        assert!(Radius::new(center, f64::NAN).is_err());
    }
}
