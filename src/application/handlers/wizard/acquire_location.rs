//! AcquireLocationHandler - Command handler for the location probe.
//!
//! Runs one position request end to end:
//!
//! 1. Activate the probe and persist the pending state (new ticket)
//! 2. Ask the geolocation provider, bounded by the configured timeout
//! 3. Name the place via the reverse geocoder; lookup failures only affect
//!    the name
//! 4. Reload the session and apply the result if the ticket is still current

use std::sync::Arc;

use super::load_wizard;
use crate::domain::foundation::WizardId;
use crate::domain::location::{
    LocationFailure, ProbeOutcome, ResolvedLocation, FALLBACK_PLACE_NAME,
};
use crate::domain::wizard::{ReportWizard, WizardError};
use crate::ports::{
    GeolocationOptions, GeolocationProvider, PositionRequest, ReportedPosition, ReverseGeocoder,
    WizardRepository,
};

/// Command to (re)acquire the reporter's position.
#[derive(Debug, Clone)]
pub struct AcquireLocationCommand {
    pub wizard_id: WizardId,
    /// Position or failure reported by the device, if it sent one.
    pub reported: Option<ReportedPosition>,
}

/// Result of a location request.
#[derive(Debug, Clone)]
pub struct AcquireLocationResult {
    pub wizard: ReportWizard,
    pub outcome: ProbeOutcome,
}

/// Handler for location acquisition.
pub struct AcquireLocationHandler {
    repository: Arc<dyn WizardRepository>,
    geolocation: Arc<dyn GeolocationProvider>,
    geocoder: Arc<dyn ReverseGeocoder>,
    options: GeolocationOptions,
}

impl AcquireLocationHandler {
    pub fn new(
        repository: Arc<dyn WizardRepository>,
        geolocation: Arc<dyn GeolocationProvider>,
        geocoder: Arc<dyn ReverseGeocoder>,
        options: GeolocationOptions,
    ) -> Self {
        Self {
            repository,
            geolocation,
            geocoder,
            options,
        }
    }

    pub async fn handle(
        &self,
        cmd: AcquireLocationCommand,
    ) -> Result<AcquireLocationResult, WizardError> {
        // 1. Start a new request generation
        let mut wizard = load_wizard(self.repository.as_ref(), &cmd.wizard_id).await?;
        let ticket = wizard.activate_location()?;
        self.repository.save(&wizard).await?;
        tracing::debug!(
            wizard_id = %cmd.wizard_id,
            generation = ticket.generation(),
            "Location probe activated"
        );

        // 2-3. Resolve position and place name
        let mut request = PositionRequest::new(self.options);
        request.reported = cmd.reported;
        let result = self.resolve(&request).await;

        // 4. Apply to the latest stored state
        let mut wizard = load_wizard(self.repository.as_ref(), &cmd.wizard_id).await?;
        let outcome = wizard.complete_location(ticket, result);
        match outcome {
            ProbeOutcome::Applied(status) => {
                self.repository.save(&wizard).await?;
                tracing::info!(wizard_id = %cmd.wizard_id, ?status, "Location probe completed");
            }
            ProbeOutcome::Stale => {
                tracing::debug!(
                    wizard_id = %cmd.wizard_id,
                    generation = ticket.generation(),
                    "Discarded stale location result"
                );
            }
        }

        Ok(AcquireLocationResult { wizard, outcome })
    }

    async fn resolve(
        &self,
        request: &PositionRequest,
    ) -> Result<ResolvedLocation, LocationFailure> {
        let fix = tokio::time::timeout(
            self.options.timeout,
            self.geolocation.current_position(request),
        )
        .await
        .map_err(|_| LocationFailure::Timeout)??;

        let place_name = match self.geocoder.lookup(&fix.coordinates).await {
            Ok(address) => address.place_name(),
            Err(e) => {
                tracing::warn!("Reverse geocoding failed: {}", e);
                FALLBACK_PLACE_NAME.to_string()
            }
        };

        Ok(ResolvedLocation::new(fix.coordinates, place_name))
    }
}
