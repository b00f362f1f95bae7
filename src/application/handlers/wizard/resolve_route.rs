//! ResolveRouteHandler - Query handler for the page navigation surface.

use std::sync::Arc;

use crate::domain::foundation::WizardId;
use crate::domain::wizard::{guard, RouteDecision, WizardError, WizardRoute};
use crate::ports::WizardRepository;

/// Query for one page request.
#[derive(Debug, Clone, Default)]
pub struct ResolveRouteQuery {
    /// Path segment after `/report/`, `None` for the entry page.
    pub segment: Option<String>,
    pub wizard_id: Option<WizardId>,
}

/// Handler deciding whether a page renders or redirects.
pub struct ResolveRouteHandler {
    repository: Arc<dyn WizardRepository>,
}

impl ResolveRouteHandler {
    pub fn new(repository: Arc<dyn WizardRepository>) -> Self {
        Self { repository }
    }

    /// An unknown or missing session is treated like no session at all.
    pub async fn handle(&self, query: ResolveRouteQuery) -> Result<RouteDecision, WizardError> {
        let route = WizardRoute::parse(query.segment.as_deref());

        let wizard = match &query.wizard_id {
            Some(id) => self.repository.find_by_id(id).await?,
            None => None,
        };

        let decision = guard(route, wizard.as_ref());
        if let RouteDecision::Redirect(to) = &decision {
            tracing::debug!(segment = ?query.segment, to, "Page guard redirected");
        }
        Ok(decision)
    }
}
