//! Page routes for the report flow and the guard that protects them.
//!
//! Deep links that arrive without the state their page depends on are sent
//! back to the start of the flow instead of rendering an empty page.

use serde::Serialize;
use std::fmt;

use super::{ReportWizard, WizardStep};
use crate::domain::hazard::HazardType;

/// Path of the type selection page; every failed guard lands here.
pub const ENTRY_PATH: &str = "/report";

/// One page of the report flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "page", content = "hazard_type", rename_all = "snake_case")]
pub enum WizardRoute {
    SelectType,
    Details(HazardType),
    Review,
    ThankYou,
}

impl WizardRoute {
    /// Parses the segment after `/report/`. `None` means the bare entry path.
    ///
    /// Returns `None` for segments that match no page.
    pub fn parse(segment: Option<&str>) -> Option<Self> {
        match segment.map(|s| s.trim_matches('/')) {
            None | Some("") => Some(WizardRoute::SelectType),
            Some("review") => Some(WizardRoute::Review),
            Some("thank-you") => Some(WizardRoute::ThankYou),
            Some(slug) => slug.parse().ok().map(WizardRoute::Details),
        }
    }

    pub fn path(&self) -> String {
        match self {
            WizardRoute::SelectType => ENTRY_PATH.to_string(),
            WizardRoute::Details(hazard_type) => format!("{}/{}", ENTRY_PATH, hazard_type.slug()),
            WizardRoute::Review => format!("{}/review", ENTRY_PATH),
            WizardRoute::ThankYou => format!("{}/thank-you", ENTRY_PATH),
        }
    }

    /// The page that shows a session in `step`.
    pub fn for_wizard(wizard: &ReportWizard) -> Self {
        match wizard.step() {
            WizardStep::SelectingType => WizardRoute::SelectType,
            WizardStep::FillingDetails => wizard
                .details()
                .map(|form| WizardRoute::Details(form.hazard_type()))
                .unwrap_or(WizardRoute::SelectType),
            WizardStep::Reviewing | WizardStep::Submitting => WizardRoute::Review,
            WizardStep::Confirmed => WizardRoute::ThankYou,
        }
    }
}

impl fmt::Display for WizardRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Outcome of guarding a page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Render(WizardRoute),
    Redirect(&'static str),
}

/// Decides whether `route` may render for `wizard`.
///
/// - the selection page always renders
/// - a details page needs a session filling that hazard type's form, or
///   reviewing it (back navigation)
/// - the review page needs a draft
/// - the thank-you page needs a confirmed report
pub fn guard(route: Option<WizardRoute>, wizard: Option<&ReportWizard>) -> RouteDecision {
    let Some(route) = route else {
        return RouteDecision::Redirect(ENTRY_PATH);
    };

    let allowed = match (route, wizard) {
        (WizardRoute::SelectType, _) => true,
        (_, None) => false,
        (WizardRoute::Details(hazard_type), Some(wizard)) => {
            matches!(
                wizard.step(),
                WizardStep::FillingDetails | WizardStep::Reviewing
            ) && wizard.details().map(|form| form.hazard_type()) == Some(hazard_type)
        }
        (WizardRoute::Review, Some(wizard)) => wizard.draft().is_some(),
        (WizardRoute::ThankYou, Some(wizard)) => wizard.confirmation().is_some(),
    };

    if allowed {
        RouteDecision::Render(route)
    } else {
        RouteDecision::Redirect(ENTRY_PATH)
    }
}
