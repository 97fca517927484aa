// src/core/session.rs

//! State of the scanner screen: the current scan, its presentation timeline,
//! and the history. The UI reads it; the orchestrator and the clock drive it.

use chrono::{DateTime, SecondsFormat, Utc};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::core::errors::ScanError;
use crate::core::globe::{GlobeEvent, GlobeSequencer};
use crate::core::history::HistoryStore;
use crate::core::models::{AttackLine, Coordinates, IpInfo, ScanHistoryEntry, ScanOutcome, ScanRequest};
use crate::core::simulation::{AttackSimulation, SimulationEvent};
use crate::core::timeline::{Generation, Scheduler};

/// Delay between a successful scan and the start of the attack simulation,
/// long enough for the globe to finish its approach.
pub const SIMULATION_START_DELAY: Duration = Duration::from_millis(12_000);

/// Everything that can be put on the session's timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineEvent {
    Globe(GlobeEvent),
    Simulation(SimulationEvent),
    StartSimulation,
}

impl From<GlobeEvent> for TimelineEvent {
    fn from(event: GlobeEvent) -> Self {
        TimelineEvent::Globe(event)
    }
}

impl From<SimulationEvent> for TimelineEvent {
    fn from(event: SimulationEvent) -> Self {
        TimelineEvent::Simulation(event)
    }
}

/// Issued by [`ScanSession::begin`]; binds a network result to the scan that asked for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTicket {
    pub request: ScanRequest,
    generation: Generation,
}

#[derive(Debug, Default)]
pub struct ScanSession {
    pub loading: bool,
    pub error: Option<String>,
    pub result: Option<IpInfo>,
    pub address: Option<String>,
    pub target: Option<Coordinates>,
    pub attack_lines: Vec<AttackLine>,
    pub show_simulation: bool,
    pub show_results: bool,
    pub history: HistoryStore,
    pub globe: GlobeSequencer,
    pub simulation: AttackSimulation,
    timeline: Scheduler<TimelineEvent>,
}

impl ScanSession {
    pub fn new() -> Self {
        let mut session = Self::default();
        session.globe.reset(Duration::ZERO);
        session
    }

    /// Current timeline time.
    pub fn now(&self) -> Duration {
        self.timeline.now()
    }

    /// Live timers on the timeline.
    #[cfg(test)]
    pub fn pending_timers(&self) -> usize {
        self.timeline.pending()
    }

    /// Starts a scan of `raw`. Returns `None` for blank input or while a lookup
    /// is already in flight.
    ///
    /// Anything still scheduled for the previous scan is cancelled outright.
    pub fn begin(&mut self, raw: &str) -> Option<ScanTicket> {
        if self.loading {
            debug!("Scan submitted while another is loading, ignored.");
            return None;
        }
        let request = ScanRequest::parse(raw)?;

        let generation = self.timeline.begin_generation();
        if self.simulation.is_active() {
            debug!("Tearing down the previous simulation.");
        }
        self.simulation.teardown(&mut self.timeline);
        self.globe.reset(self.timeline.now());
        self.loading = true;
        self.error = None;
        self.target = None;
        self.attack_lines.clear();
        self.show_simulation = false;
        self.show_results = false;

        info!(domain = %request.domain, "Scan started.");
        Some(ScanTicket { request, generation })
    }

    /// Applies the network outcome for `ticket`, stamped with the current time.
    pub fn complete(&mut self, ticket: &ScanTicket, outcome: Result<ScanOutcome, ScanError>) -> bool {
        self.complete_at(ticket, outcome, Utc::now())
    }

    /// Applies the network outcome for `ticket`. Returns `false` when the
    /// ticket belongs to a scan that has since been replaced.
    pub fn complete_at(
        &mut self,
        ticket: &ScanTicket,
        outcome: Result<ScanOutcome, ScanError>,
        timestamp: DateTime<Utc>,
    ) -> bool {
        if ticket.generation != self.timeline.generation() {
            debug!(domain = %ticket.request.domain, "Stale scan result dropped.");
            return false;
        }
        self.loading = false;

        match outcome {
            Ok(outcome) => {
                self.attack_lines = AttackLine::toward(outcome.coordinates);
                self.target = Some(outcome.coordinates);
                self.address = Some(outcome.address.clone());
                self.result = Some(outcome.info.clone());

                self.globe
                    .trigger(outcome.coordinates, self.attack_lines.len(), &mut self.timeline);
                self.timeline
                    .schedule(SIMULATION_START_DELAY, TimelineEvent::StartSimulation);

                self.history.append(ScanHistoryEntry {
                    domain: outcome.domain,
                    address: outcome.address,
                    timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
                    info: outcome.info,
                });
            }
            Err(e) => {
                warn!(domain = %ticket.request.domain, error = %e, "Scan failed.");
                self.error = Some(e.user_message().to_string());
                self.result = None;
                self.address = None;
            }
        }
        true
    }

    /// Moves the timeline to `elapsed`, firing everything that came due on the way.
    pub fn advance(&mut self, elapsed: Duration) {
        while let Some(event) = self.timeline.pop_due(elapsed) {
            match event {
                TimelineEvent::Globe(event) => self.globe.handle(event, &mut self.timeline),
                TimelineEvent::StartSimulation => {
                    self.show_simulation = true;
                    self.simulation.start(&mut self.timeline);
                }
                TimelineEvent::Simulation(event) => {
                    if self.simulation.handle(event, &mut self.timeline).is_some() {
                        self.show_results = true;
                        info!("Presentation finished, result revealed.");
                    }
                }
            }
        }
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::{LookupError, ResolveError};
    use crate::core::globe::GlobePhase;
    use crate::core::simulation::SimulationState;

    fn norwell() -> ScanOutcome {
        ScanOutcome {
            domain: "example.com".into(),
            address: "93.184.216.34".into(),
            info: IpInfo {
                ip: "93.184.216.34".into(),
                city: "Norwell".into(),
                country_name: "United States".into(),
                org: "Edgecast Inc.".into(),
                region: "Massachusetts".into(),
                latitude: "42.1596".into(),
                longitude: "-70.8217".into(),
            },
            coordinates: Coordinates::new(42.1596, -70.8217),
        }
    }

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn blank_input_does_not_start_a_scan() {
        let mut session = ScanSession::new();
        assert!(session.begin("  ").is_none());
        assert!(!session.loading);
    }

    #[test]
    fn submissions_are_ignored_while_loading() {
        let mut session = ScanSession::new();
        assert!(session.begin("example.com").is_some());
        assert!(session.begin("example.org").is_none());
    }

    #[test]
    fn success_records_history_and_target() {
        let mut session = ScanSession::new();
        let ticket = session.begin("example.com").unwrap();

        assert!(session.complete(&ticket, Ok(norwell())));

        assert!(!session.loading);
        assert_eq!(session.target, Some(Coordinates::new(42.1596, -70.8217)));
        assert_eq!(session.attack_lines.len(), 5);
        assert_eq!(session.history.len(), 1);
        let entry = &session.history.entries()[0];
        assert_eq!(entry.domain, "example.com");
        assert_eq!(entry.address, "93.184.216.34");
        assert_eq!(entry.info, norwell().info);
        assert!(DateTime::parse_from_rfc3339(&entry.timestamp).is_ok());
        assert!(entry.timestamp.ends_with('Z'));
    }

    #[test]
    fn failure_shows_generic_error_and_clears_result() {
        let mut session = ScanSession::new();
        let ticket = session.begin("example.com").unwrap();
        session.complete(&ticket, Ok(norwell()));
        session.advance(secs(60));

        let ticket = session.begin("nope.invalid").unwrap();
        let failure = ScanError::from(ResolveError::NotFound { domain: "nope.invalid".into() });
        session.complete(&ticket, Err(failure));

        assert_eq!(session.error.as_deref(), Some(crate::core::errors::GENERIC_FAILURE_MESSAGE));
        assert!(session.result.is_none());
        assert!(session.target.is_none());
        assert_eq!(session.history.len(), 1);
        assert!(!session.loading);
    }

    #[test]
    fn lookup_error_never_reaches_history() {
        let mut session = ScanSession::new();
        let ticket = session.begin("localhost").unwrap();
        let failure = ScanError::from(LookupError::Api { reason: "Reserved IP Address".into() });
        session.complete(&ticket, Err(failure));

        assert!(session.history.is_empty());
        assert!(session.error.is_some());
    }

    #[test]
    fn timeline_plays_globe_then_simulation_then_result() {
        let mut session = ScanSession::new();
        let ticket = session.begin("example.com").unwrap();
        session.complete_at(&ticket, Ok(norwell()), Utc::now());

        session.advance(secs(11));
        assert!(!session.show_simulation);
        assert!(matches!(session.globe.phase(), GlobePhase::Approaching { .. }));

        session.advance(secs(12));
        assert!(session.show_simulation);
        assert!(session.globe.target_visible());
        assert!(matches!(session.simulation.state(), SimulationState::Running { stage: 0, .. }));

        // 12 s of globe plus 15 s of stages.
        session.advance(Duration::from_millis(26_999));
        assert!(!session.show_results);
        session.advance(secs(27));
        assert!(session.show_results);
        assert_eq!(session.simulation.state(), SimulationState::Completed);
        assert_eq!(session.globe.arcs_revealed(), 5);
        assert_eq!(session.pending_timers(), 0);
    }

    #[test]
    fn new_scan_cancels_previous_presentation() {
        let mut session = ScanSession::new();
        let first = session.begin("example.com").unwrap();
        session.complete(&first, Ok(norwell()));
        session.advance(secs(13));
        assert!(session.simulation.is_active());

        let second = session.begin("example.org").unwrap();
        assert_eq!(session.pending_timers(), 0);
        assert!(!session.simulation.is_active());
        assert!(!session.show_simulation);
        assert!(session.globe.target().is_none());

        // Nothing from the first scan fires later on.
        session.advance(secs(120));
        assert!(!session.show_simulation);
        assert!(!session.show_results);
        assert!(session.loading);

        session.complete(&second, Ok(norwell()));
        assert_eq!(session.history.len(), 2);
    }

    #[test]
    fn stale_completion_is_dropped() {
        let mut session = ScanSession::new();
        let first = session.begin("example.com").unwrap();
        session.complete(&first, Err(ScanError::EmptyDomain));
        let _second = session.begin("example.org").unwrap();

        assert!(!session.complete(&first, Ok(norwell())));
        assert!(session.history.is_empty());
        assert!(session.loading);
    }
}
