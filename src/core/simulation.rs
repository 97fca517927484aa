// src/core/simulation.rs

//! The staged, purely cosmetic "attack simulation" that plays after the globe
//! has locked on. Nothing here touches the network: each stage just rotates a
//! few lines of text and fills a progress bar on the timeline clock.

use std::time::Duration;
use tracing::{debug, info};

use crate::core::timeline::{Scheduler, TimerId};

/// One fixed stage of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackStage {
    pub name: &'static str,
    pub duration: Duration,
    pub description: &'static str,
    /// Rotated on a sub-timer every `duration / 3`.
    pub details: &'static [&'static str],
}

impl AttackStage {
    pub fn detail_interval(&self) -> Duration {
        self.duration / 3
    }
}

pub const ATTACK_STAGES: [AttackStage; 4] = [
    AttackStage {
        name: "Network Reconnaissance",
        duration: Duration::from_millis(3000),
        description: "Scanning network topology and open ports...",
        details: &["Port scanning...", "Service detection...", "OS fingerprinting..."],
    },
    AttackStage {
        name: "Vulnerability Assessment",
        duration: Duration::from_millis(4000),
        description: "Analyzing system vulnerabilities...",
        details: &["CVE database check...", "Security patch analysis...", "Configuration audit..."],
    },
    AttackStage {
        name: "Service Enumeration",
        duration: Duration::from_millis(3500),
        description: "Identifying running services...",
        details: &["Web services...", "Database services...", "Authentication services..."],
    },
    AttackStage {
        name: "Security Analysis",
        duration: Duration::from_millis(4500),
        description: "Performing security checks...",
        details: &["Firewall analysis...", "IDS/IPS detection...", "Security posture evaluation..."],
    },
];

/// Timer payloads. The stage index lets a late tick from an earlier stage be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationEvent {
    DetailTick { stage: usize },
    StageElapsed { stage: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimulationState {
    #[default]
    Inactive,
    Running { stage: usize, detail: usize },
    Completed,
}

/// How a stage row should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Pending,
    Active,
    Complete,
}

/// Emitted once, when the last stage finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationCompleted;

#[derive(Debug, Default)]
pub struct AttackSimulation {
    state: SimulationState,
    stage_started: Duration,
    detail_timer: Option<TimerId>,
    stage_timer: Option<TimerId>,
}

impl AttackSimulation {
    #[cfg(test)]
    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.state, SimulationState::Inactive)
    }

    /// Begins stage 0. Does nothing unless the simulation is inactive.
    pub fn start<E: From<SimulationEvent>>(&mut self, scheduler: &mut Scheduler<E>) {
        if self.state != SimulationState::Inactive {
            return;
        }
        info!("Attack simulation started.");
        self.enter_stage(0, scheduler);
    }

    fn enter_stage<E: From<SimulationEvent>>(&mut self, stage: usize, scheduler: &mut Scheduler<E>) {
        self.clear_timers(scheduler);
        let current = &ATTACK_STAGES[stage];
        debug!(stage, name = current.name, "Entering simulation stage.");

        self.state = SimulationState::Running { stage, detail: 0 };
        self.stage_started = scheduler.now();
        self.detail_timer = Some(scheduler.schedule(
            current.detail_interval(),
            SimulationEvent::DetailTick { stage }.into(),
        ));
        self.stage_timer = Some(scheduler.schedule(
            current.duration,
            SimulationEvent::StageElapsed { stage }.into(),
        ));
    }

    fn clear_timers<E>(&mut self, scheduler: &mut Scheduler<E>) {
        if let Some(id) = self.detail_timer.take() {
            scheduler.cancel(id);
        }
        if let Some(id) = self.stage_timer.take() {
            scheduler.cancel(id);
        }
    }

    /// Applies a fired timer. Returns [`SimulationCompleted`] exactly once per run.
    pub fn handle<E: From<SimulationEvent>>(
        &mut self,
        event: SimulationEvent,
        scheduler: &mut Scheduler<E>,
    ) -> Option<SimulationCompleted> {
        let SimulationState::Running { stage, detail } = self.state else {
            return None;
        };

        match event {
            SimulationEvent::DetailTick { stage: fired } if fired == stage => {
                let current = &ATTACK_STAGES[stage];
                let detail = (detail + 1) % current.details.len();
                self.state = SimulationState::Running { stage, detail };
                self.detail_timer = Some(scheduler.schedule(
                    current.detail_interval(),
                    SimulationEvent::DetailTick { stage }.into(),
                ));
                None
            }
            SimulationEvent::StageElapsed { stage: fired } if fired == stage => {
                self.stage_timer = None;
                if stage + 1 < ATTACK_STAGES.len() {
                    self.enter_stage(stage + 1, scheduler);
                    None
                } else {
                    self.clear_timers(scheduler);
                    self.state = SimulationState::Completed;
                    info!("Attack simulation completed.");
                    Some(SimulationCompleted)
                }
            }
            _ => None,
        }
    }

    /// Cancels both timers and goes back to inactive.
    pub fn teardown<E>(&mut self, scheduler: &mut Scheduler<E>) {
        self.clear_timers(scheduler);
        self.state = SimulationState::Inactive;
    }

    pub fn active_stage(&self) -> Option<(usize, &'static AttackStage)> {
        match self.state {
            SimulationState::Running { stage, .. } => Some((stage, &ATTACK_STAGES[stage])),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn detail_index(&self) -> Option<usize> {
        match self.state {
            SimulationState::Running { detail, .. } => Some(detail),
            _ => None,
        }
    }

    pub fn detail_text(&self) -> Option<&'static str> {
        match self.state {
            SimulationState::Running { stage, detail } => Some(ATTACK_STAGES[stage].details[detail]),
            _ => None,
        }
    }

    pub fn stage_status(&self, index: usize) -> StageStatus {
        match self.state {
            SimulationState::Inactive => StageStatus::Pending,
            SimulationState::Completed => StageStatus::Complete,
            SimulationState::Running { stage, .. } if index < stage => StageStatus::Complete,
            SimulationState::Running { stage, .. } if index == stage => StageStatus::Active,
            SimulationState::Running { .. } => StageStatus::Pending,
        }
    }

    /// Fill ratio of the active stage's progress bar at `now`, in `[0, 1]`.
    pub fn progress(&self, now: Duration) -> f64 {
        match self.state {
            SimulationState::Running { stage, .. } => {
                let elapsed = now.saturating_sub(self.stage_started).as_secs_f64();
                (elapsed / ATTACK_STAGES[stage].duration.as_secs_f64()).clamp(0.0, 1.0)
            }
            SimulationState::Completed => 1.0,
            SimulationState::Inactive => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// Drives the simulation until `until`, collecting completions and every state seen.
    fn run_until(
        sim: &mut AttackSimulation,
        scheduler: &mut Scheduler<SimulationEvent>,
        until: Duration,
    ) -> (usize, Vec<SimulationState>) {
        let mut completions = 0;
        let mut seen = Vec::new();
        while let Some(event) = scheduler.pop_due(until) {
            if sim.handle(event, scheduler).is_some() {
                completions += 1;
            }
            seen.push(sim.state());
        }
        (completions, seen)
    }

    #[test]
    fn stages_run_in_order_and_complete_once() {
        let mut scheduler = Scheduler::new();
        let mut sim = AttackSimulation::default();
        sim.start(&mut scheduler);

        let (completions, seen) = run_until(&mut sim, &mut scheduler, ms(60_000));

        let mut stage_order: Vec<usize> = vec![0];
        for state in &seen {
            if let SimulationState::Running { stage, .. } = state {
                if stage_order.last() != Some(stage) {
                    stage_order.push(*stage);
                }
            }
        }
        assert_eq!(stage_order, vec![0, 1, 2, 3]);
        assert_eq!(completions, 1);
        assert_eq!(sim.state(), SimulationState::Completed);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn completion_lands_at_the_sum_of_durations() {
        let mut scheduler = Scheduler::new();
        let mut sim = AttackSimulation::default();
        sim.start(&mut scheduler);

        let (completions, _) = run_until(&mut sim, &mut scheduler, ms(14_999));
        assert_eq!(completions, 0);
        assert_eq!(sim.active_stage().map(|(i, _)| i), Some(3));

        let (completions, _) = run_until(&mut sim, &mut scheduler, ms(15_000));
        assert_eq!(completions, 1);
    }

    #[test]
    fn detail_index_wraps_within_bounds() {
        let mut scheduler = Scheduler::new();
        let mut sim = AttackSimulation::default();
        sim.start(&mut scheduler);

        let (_, seen) = run_until(&mut sim, &mut scheduler, ms(60_000));
        for state in seen {
            if let SimulationState::Running { stage, detail } = state {
                assert!(detail < ATTACK_STAGES[stage].details.len());
            }
        }
    }

    #[test]
    fn detail_rotates_every_third_of_the_stage() {
        let mut scheduler = Scheduler::new();
        let mut sim = AttackSimulation::default();
        sim.start(&mut scheduler);

        assert_eq!(sim.detail_text(), Some("Port scanning..."));
        run_until(&mut sim, &mut scheduler, ms(1000));
        assert_eq!(sim.detail_text(), Some("Service detection..."));
        run_until(&mut sim, &mut scheduler, ms(2000));
        assert_eq!(sim.detail_text(), Some("OS fingerprinting..."));

        // The stage timer wins the tie at 3000 ms, so stage 1 starts fresh.
        run_until(&mut sim, &mut scheduler, ms(3000));
        assert_eq!(sim.active_stage().map(|(i, _)| i), Some(1));
        assert_eq!(sim.detail_index(), Some(0));
    }

    #[test]
    fn start_is_idempotent_while_running() {
        let mut scheduler = Scheduler::new();
        let mut sim = AttackSimulation::default();
        sim.start(&mut scheduler);
        run_until(&mut sim, &mut scheduler, ms(3500));
        sim.start(&mut scheduler);

        assert_eq!(sim.active_stage().map(|(i, _)| i), Some(1));
        assert_eq!(scheduler.pending(), 2);
    }

    #[test]
    fn teardown_cancels_both_timers() {
        let mut scheduler = Scheduler::new();
        let mut sim = AttackSimulation::default();
        sim.start(&mut scheduler);
        sim.teardown(&mut scheduler);

        assert_eq!(scheduler.pending(), 0);
        let (completions, seen) = run_until(&mut sim, &mut scheduler, ms(60_000));
        assert_eq!(completions, 0);
        assert!(seen.is_empty());
    }

    #[test]
    fn progress_and_status_track_the_clock() {
        let mut scheduler = Scheduler::new();
        let mut sim = AttackSimulation::default();
        assert_eq!(sim.progress(ms(0)), 0.0);
        sim.start(&mut scheduler);

        run_until(&mut sim, &mut scheduler, ms(5000));
        // Stage 1 began at 3000 ms and lasts 4000 ms.
        assert!((sim.progress(ms(5000)) - 0.5).abs() < 1e-9);
        assert_eq!(sim.stage_status(0), StageStatus::Complete);
        assert_eq!(sim.stage_status(1), StageStatus::Active);
        assert_eq!(sim.stage_status(2), StageStatus::Pending);
    }
}
