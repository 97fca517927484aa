// src/core/timeline.rs

//! Virtual-clock scheduler shared by the presentation sequencers.
//!
//! Time is the elapsed [`Duration`] since the session started, supplied by the
//! caller. The UI loop feeds it wall-clock time; tests feed it whatever they
//! like. Every timer belongs to a generation: starting a new one makes all
//! older timers inert, which is how a fresh scan cancels the previous
//! presentation.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use std::time::Duration;
use tracing::trace;

/// Identifies one scheduled continuation so it can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Token of the scan that owns a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Generation(u64);

#[derive(Debug)]
struct Scheduled<E> {
    due: Duration,
    id: TimerId,
    generation: Generation,
    event: E,
}

// Ordered by due time, then by scheduling order. The event never takes part.
impl<E> PartialEq for Scheduled<E> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.id == other.id
    }
}

impl<E> Eq for Scheduled<E> {}

impl<E> PartialOrd for Scheduled<E> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Scheduled<E> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.due, self.id).cmp(&(other.due, other.id))
    }
}

#[derive(Debug)]
pub struct Scheduler<E> {
    now: Duration,
    next_id: u64,
    generation: Generation,
    queue: BinaryHeap<Reverse<Scheduled<E>>>,
    cancelled: HashSet<TimerId>,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            generation: Generation::default(),
            queue: BinaryHeap::new(),
            cancelled: HashSet::new(),
        }
    }

    /// Current virtual time: the due time of the last event handed out, or the
    /// last `advance_to` target.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Starts a new generation. Every timer scheduled before this call is dropped.
    pub fn begin_generation(&mut self) -> Generation {
        self.generation = Generation(self.generation.0 + 1);
        trace!(generation = self.generation.0, "Timeline generation started.");
        self.generation
    }

    /// Schedules `event` to fire `delay` after the current virtual time.
    pub fn schedule(&mut self, delay: Duration, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.queue.push(Reverse(Scheduled {
            due: self.now + delay,
            id,
            generation: self.generation,
            event,
        }));
        id
    }

    /// Cancels a pending timer. Cancelling one that already fired is a no-op.
    pub fn cancel(&mut self, id: TimerId) {
        if self.queue.iter().any(|Reverse(s)| s.id == id) {
            self.cancelled.insert(id);
        }
    }

    /// Number of live timers.
    #[cfg(test)]
    pub fn pending(&self) -> usize {
        self.queue
            .iter()
            .filter(|Reverse(s)| s.generation == self.generation && !self.cancelled.contains(&s.id))
            .count()
    }

    /// Hands out the next event due at or before `until`, moving the clock to its
    /// due time. Returns `None` once nothing else is due, leaving the clock at `until`.
    ///
    /// Handle each event before asking for the next one: continuations scheduled
    /// while handling it are relative to its due time and may fall inside the window.
    pub fn pop_due(&mut self, until: Duration) -> Option<E> {
        loop {
            let due = match self.queue.peek() {
                Some(Reverse(next)) if next.due <= until => next.due,
                _ => {
                    self.now = self.now.max(until);
                    return None;
                }
            };
            let Reverse(scheduled) = self.queue.pop()?;
            if self.cancelled.remove(&scheduled.id) || scheduled.generation != self.generation {
                continue;
            }
            self.now = self.now.max(due);
            return Some(scheduled.event);
        }
    }
}
