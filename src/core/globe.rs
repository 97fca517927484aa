// src/core/globe.rs

//! Scripted camera for the globe view.
//!
//! The globe idles in a slow auto-rotation. Once a target is known, four
//! fixed camera moves narrow the view from the whole world down to the target,
//! then the target marker, the details panel and the attack arcs are revealed
//! one after another. The camera pose is a pure function of the timeline clock.

use std::time::Duration;
use tracing::{debug, info};

use crate::core::models::Coordinates;
use crate::core::timeline::Scheduler;

/// Degrees added to the idle rotation every [`ROTATION_TICK`].
pub const ROTATION_STEP_DEGREES: f64 = 0.5;
pub const ROTATION_TICK: Duration = Duration::from_millis(50);
/// Peak latitude swing of the idle rotation.
pub const ROTATION_LATITUDE_SWING: f64 = 30.0;
pub const IDLE_ALTITUDE: f64 = 2.5;

/// Delay after the trigger before the target marker appears: the final
/// move's delay plus its transition.
pub const TARGET_REVEAL_DELAY: Duration = Duration::from_millis(9000 + 3000);
/// Delay after the target marker before the details panel opens.
pub const DETAILS_REVEAL_DELAY: Duration = Duration::from_millis(3000);
/// Delay after the target marker before the first arc is drawn.
pub const FIRST_ARC_DELAY: Duration = Duration::from_millis(1000);
pub const ARC_REVEAL_INTERVAL: Duration = Duration::from_millis(1500);

/// Where the camera looks and how far away it is (in globe radii).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub lat: f64,
    pub lng: f64,
    pub altitude: f64,
}

/// One scripted step: fire `delay` after the trigger and glide to `pose` over `transition`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraMove {
    pub delay: Duration,
    pub transition: Duration,
    pub pose: CameraPose,
}

/// The four-step approach onto `target`.
pub fn camera_script(target: Coordinates) -> [CameraMove; 4] {
    let Coordinates { latitude: lat, longitude: lng } = target;
    [
        CameraMove {
            delay: Duration::from_millis(3000),
            transition: Duration::from_millis(2000),
            pose: CameraPose { lat: 0.0, lng: 0.0, altitude: 5.0 },
        },
        CameraMove {
            delay: Duration::from_millis(5000),
            transition: Duration::from_millis(2000),
            pose: CameraPose { lat: 0.0, lng, altitude: 4.0 },
        },
        CameraMove {
            delay: Duration::from_millis(7000),
            transition: Duration::from_millis(2000),
            pose: CameraPose { lat, lng, altitude: 3.0 },
        },
        CameraMove {
            delay: Duration::from_millis(9000),
            transition: Duration::from_millis(3000),
            pose: CameraPose { lat, lng, altitude: 0.8 },
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobeEvent {
    CameraMove { step: usize },
    RevealTarget,
    RevealDetails,
    RevealArc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlobePhase {
    #[default]
    Idle,
    Rotating,
    Approaching { step: usize },
    Locked,
}

#[derive(Debug, Clone, Copy)]
struct ActiveMove {
    from: CameraPose,
    to: CameraPose,
    started: Duration,
    transition: Duration,
}

#[derive(Debug, Default)]
pub struct GlobeSequencer {
    phase: GlobePhase,
    rotation_started: Duration,
    target: Option<Coordinates>,
    active_move: Option<ActiveMove>,
    target_visible: bool,
    details_visible: bool,
    arc_count: usize,
    arcs_revealed: usize,
}

impl GlobeSequencer {
    pub fn phase(&self) -> GlobePhase {
        self.phase
    }

    pub fn target(&self) -> Option<Coordinates> {
        self.target
    }

    pub fn target_visible(&self) -> bool {
        self.target_visible
    }

    pub fn details_visible(&self) -> bool {
        self.details_visible
    }

    pub fn arcs_revealed(&self) -> usize {
        self.arcs_revealed
    }

    /// Drops any target and goes back to the idle rotation, starting at `now`.
    pub fn reset(&mut self, now: Duration) {
        *self = Self {
            phase: GlobePhase::Rotating,
            rotation_started: now,
            ..Self::default()
        };
    }

    /// Schedules the camera script and the reveals toward `target`.
    pub fn trigger<E: From<GlobeEvent>>(
        &mut self,
        target: Coordinates,
        arc_count: usize,
        scheduler: &mut Scheduler<E>,
    ) {
        info!(lat = target.latitude, lng = target.longitude, "Globe sequence triggered.");
        if self.phase == GlobePhase::Idle {
            self.phase = GlobePhase::Rotating;
            self.rotation_started = scheduler.now();
        }
        self.target = Some(target);
        self.arc_count = arc_count;
        self.target_visible = false;
        self.details_visible = false;
        self.arcs_revealed = 0;

        for (step, camera_move) in camera_script(target).iter().enumerate() {
            scheduler.schedule(camera_move.delay, GlobeEvent::CameraMove { step }.into());
        }
        scheduler.schedule(TARGET_REVEAL_DELAY, GlobeEvent::RevealTarget.into());
    }

    pub fn handle<E: From<GlobeEvent>>(&mut self, event: GlobeEvent, scheduler: &mut Scheduler<E>) {
        let Some(target) = self.target else {
            return;
        };
        let now = scheduler.now();

        match event {
            GlobeEvent::CameraMove { step } => {
                let script = camera_script(target);
                let Some(camera_move) = script.get(step) else {
                    return;
                };
                // The first move also ends the idle rotation, from wherever it got to.
                let from = self.camera(now);
                self.active_move = Some(ActiveMove {
                    from,
                    to: camera_move.pose,
                    started: now,
                    transition: camera_move.transition,
                });
                self.phase = GlobePhase::Approaching { step };
                debug!(step, altitude = camera_move.pose.altitude, "Camera move started.");
            }
            GlobeEvent::RevealTarget => {
                self.phase = GlobePhase::Locked;
                self.target_visible = true;
                scheduler.schedule(DETAILS_REVEAL_DELAY, GlobeEvent::RevealDetails.into());
                if self.arc_count > 0 {
                    scheduler.schedule(FIRST_ARC_DELAY, GlobeEvent::RevealArc.into());
                }
                info!("Target marker revealed.");
            }
            GlobeEvent::RevealDetails => {
                self.details_visible = true;
                debug!("Details panel revealed.");
            }
            GlobeEvent::RevealArc => {
                if self.arcs_revealed < self.arc_count {
                    self.arcs_revealed += 1;
                    debug!(revealed = self.arcs_revealed, total = self.arc_count, "Attack arc revealed.");
                }
                if self.arcs_revealed < self.arc_count {
                    scheduler.schedule(ARC_REVEAL_INTERVAL, GlobeEvent::RevealArc.into());
                }
            }
        }
    }

    /// Camera pose at `now`.
    pub fn camera(&self, now: Duration) -> CameraPose {
        match (self.phase, self.active_move) {
            (GlobePhase::Idle, _) => CameraPose { lat: 0.0, lng: 0.0, altitude: IDLE_ALTITUDE },
            (GlobePhase::Rotating, _) | (_, None) => self.rotating_pose(now),
            (_, Some(active)) => {
                let elapsed = now.saturating_sub(active.started).as_secs_f64();
                let t = if active.transition.is_zero() {
                    1.0
                } else {
                    (elapsed / active.transition.as_secs_f64()).clamp(0.0, 1.0)
                };
                interpolate(active.from, active.to, ease_in_out(t))
            }
        }
    }

    fn rotating_pose(&self, now: Duration) -> CameraPose {
        let ticks = now.saturating_sub(self.rotation_started).as_millis() / ROTATION_TICK.as_millis();
        let rotation = ticks as f64 * ROTATION_STEP_DEGREES;
        CameraPose {
            lat: ROTATION_LATITUDE_SWING * rotation.to_radians().sin(),
            lng: normalize_longitude(rotation % 360.0),
            altitude: IDLE_ALTITUDE,
        }
    }
}

fn ease_in_out(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

fn interpolate(from: CameraPose, to: CameraPose, t: f64) -> CameraPose {
    CameraPose {
        lat: from.lat + (to.lat - from.lat) * t,
        lng: normalize_longitude(from.lng + shortest_angular_delta(from.lng, to.lng) * t),
        altitude: from.altitude + (to.altitude - from.altitude) * t,
    }
}

/// Shortest signed delta from `from` to `to`, in degrees, within (-180, 180].
fn shortest_angular_delta(from: f64, to: f64) -> f64 {
    let mut delta = to - from;
    if delta > 180.0 {
        delta -= 360.0;
    } else if delta < -180.0 {
        delta += 360.0;
    }
    delta
}

/// Wraps a longitude into [-180, 180).
pub fn normalize_longitude(lng: f64) -> f64 {
    (lng + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    const NORWELL: Coordinates = Coordinates::new(42.1596, -70.8217);

    fn drive(globe: &mut GlobeSequencer, scheduler: &mut Scheduler<GlobeEvent>, until: Duration) {
        while let Some(event) = scheduler.pop_due(until) {
            globe.handle(event, scheduler);
        }
    }

    fn triggered() -> (GlobeSequencer, Scheduler<GlobeEvent>) {
        let mut scheduler = Scheduler::new();
        let mut globe = GlobeSequencer::default();
        globe.reset(Duration::ZERO);
        globe.trigger(NORWELL, 5, &mut scheduler);
        (globe, scheduler)
    }

    #[test]
    fn idle_rotation_advances_half_a_degree_per_tick() {
        let mut globe = GlobeSequencer::default();
        globe.reset(Duration::ZERO);

        assert_eq!(globe.camera(ms(0)).lng, 0.0);
        assert_eq!(globe.camera(ms(1000)).lng, 10.0);
        assert_eq!(globe.camera(ms(1000)).altitude, IDLE_ALTITUDE);
        // 380 degrees wraps to 20.
        assert!((globe.camera(ms(38_000)).lng - 20.0).abs() < 1e-9);
    }

    #[test]
    fn camera_moves_fire_on_schedule() {
        let (mut globe, mut scheduler) = triggered();

        drive(&mut globe, &mut scheduler, ms(2999));
        assert_eq!(globe.phase(), GlobePhase::Rotating);

        drive(&mut globe, &mut scheduler, ms(3000));
        assert_eq!(globe.phase(), GlobePhase::Approaching { step: 0 });

        drive(&mut globe, &mut scheduler, ms(9000));
        assert_eq!(globe.phase(), GlobePhase::Approaching { step: 3 });
        assert!(!globe.target_visible());
    }

    #[test]
    fn camera_settles_on_each_pose() {
        let (mut globe, mut scheduler) = triggered();

        drive(&mut globe, &mut scheduler, ms(5000));
        let world = globe.camera(ms(5000));
        assert_eq!(world.altitude, 5.0);

        drive(&mut globe, &mut scheduler, ms(12_000));
        let close = globe.camera(ms(12_000));
        assert!((close.lat - 42.1596).abs() < 1e-9);
        assert!((close.lng + 70.8217).abs() < 1e-9);
        assert!((close.altitude - 0.8).abs() < 1e-9);
    }

    #[test]
    fn reveals_follow_the_lock() {
        let (mut globe, mut scheduler) = triggered();

        drive(&mut globe, &mut scheduler, ms(12_000));
        assert_eq!(globe.phase(), GlobePhase::Locked);
        assert!(globe.target_visible());
        assert!(!globe.details_visible());
        assert_eq!(globe.arcs_revealed(), 0);

        drive(&mut globe, &mut scheduler, ms(13_000));
        assert_eq!(globe.arcs_revealed(), 1);

        drive(&mut globe, &mut scheduler, ms(15_000));
        assert!(globe.details_visible());
        assert_eq!(globe.arcs_revealed(), 2);

        // Arcs at 13.0, 14.5, 16.0, 17.5, 19.0 s, and nothing after the fifth.
        drive(&mut globe, &mut scheduler, ms(19_000));
        assert_eq!(globe.arcs_revealed(), 5);
        drive(&mut globe, &mut scheduler, ms(60_000));
        assert_eq!(globe.arcs_revealed(), 5);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn reset_forgets_the_target() {
        let (mut globe, mut scheduler) = triggered();
        drive(&mut globe, &mut scheduler, ms(20_000));

        globe.reset(ms(20_000));
        assert_eq!(globe.target(), None);
        assert_eq!(globe.phase(), GlobePhase::Rotating);
        assert!(!globe.target_visible());
        assert_eq!(globe.arcs_revealed(), 0);
    }

    #[test]
    fn longitude_helpers_wrap() {
        assert_eq!(normalize_longitude(190.0), -170.0);
        assert_eq!(normalize_longitude(-190.0), 170.0);
        assert_eq!(shortest_angular_delta(170.0, -170.0), 20.0);
        assert_eq!(shortest_angular_delta(-170.0, 170.0), -20.0);
    }
}
