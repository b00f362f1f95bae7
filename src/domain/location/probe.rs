//! LocationProbe - one in-flight position request at a time.
//!
//! Each activation issues a new ticket. A result can only be applied with the
//! ticket of the most recent activation, so a slow response from an earlier
//! request never overwrites a newer one.

use serde::{Deserialize, Serialize};

use super::{GeoFix, LocationFailure, LocationStatus, ResolvedLocation};
use crate::domain::foundation::{StateMachine, Timestamp};

/// Proof of which activation a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProbeTicket {
    generation: u64,
}

impl ProbeTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What happened to a completed result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The result became the current fix.
    Applied(LocationStatus),
    /// A newer activation superseded this one; the result was dropped.
    Stale,
}

/// Position acquisition state owned by a wizard session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationProbe {
    fix: GeoFix,
    generation: u64,
}

impl LocationProbe {
    /// A probe that has never been activated.
    pub fn new() -> Self {
        Self {
            fix: GeoFix::Pending,
            generation: 0,
        }
    }

    pub fn fix(&self) -> &GeoFix {
        &self.fix
    }

    pub fn status(&self) -> LocationStatus {
        self.fix.status()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts (or restarts) acquisition and returns the ticket for it.
    ///
    /// Any ticket handed out earlier becomes stale.
    pub fn activate(&mut self) -> ProbeTicket {
        self.generation += 1;
        self.fix = GeoFix::Pending;
        ProbeTicket {
            generation: self.generation,
        }
    }

    /// Applies the result of the activation identified by `ticket`.
    pub fn complete(
        &mut self,
        ticket: ProbeTicket,
        result: Result<ResolvedLocation, LocationFailure>,
    ) -> ProbeOutcome {
        if ticket.generation != self.generation {
            return ProbeOutcome::Stale;
        }

        let next = match &result {
            Ok(_) => LocationStatus::Resolved,
            Err(_) => LocationStatus::Failed,
        };
        if !self.status().can_transition_to(&next) {
            // Already completed for this generation.
            return ProbeOutcome::Stale;
        }

        self.fix = match result {
            Ok(location) => GeoFix::Resolved {
                location,
                resolved_at: Timestamp::now(),
            },
            Err(reason) => GeoFix::Failed { reason },
        };
        ProbeOutcome::Applied(next)
    }
}

impl Default for LocationProbe {
    fn default() -> Self {
        Self::new()
    }
}
