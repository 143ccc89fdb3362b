//! The serial event queue and the two spawn timers that feed it.
//!
//! Timers are measured against the wall-clock time elapsed since the run
//! started, independent of how many ticks have executed.  A stalled frame
//! does not lose firings: the next poll enqueues every period that elapsed,
//! oldest first.

use std::collections::VecDeque;
use std::time::Duration;

use crate::config::GameConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// Window-system style quit (Ctrl+C in raw mode).
    Quit,
    /// The escape key.
    Cancel,
    ObstacleTimerFired,
    DecorationTimerFired,
}

// ── Queue ─────────────────────────────────────────────────────────────────────

/// Events in arrival order.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    pending: VecDeque<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.pending.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take everything queued so far, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        self.pending.drain(..).collect()
    }
}

// ── Timers ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpawnTimer {
    period: Duration,
    next_due: Duration,
}

impl SpawnTimer {
    /// First firing happens one full period after the run starts.
    pub fn new(period: Duration) -> Self {
        SpawnTimer { period, next_due: period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Due time of the next firing, `None` for a zero-period (disabled) timer.
    pub fn next_due(&self) -> Option<Duration> {
        if self.period.is_zero() {
            None
        } else {
            Some(self.next_due)
        }
    }

    /// Consume one firing if it is due at `elapsed`.
    pub fn fire(&mut self, elapsed: Duration) -> bool {
        match self.next_due() {
            Some(due) if due <= elapsed => {
                self.next_due = due + self.period;
                true
            }
            _ => false,
        }
    }
}

/// Owns the obstacle and decoration timers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Spawner {
    obstacle: SpawnTimer,
    decoration: SpawnTimer,
}

impl Spawner {
    pub fn new(config: &GameConfig) -> Self {
        Spawner {
            obstacle: SpawnTimer::new(config.obstacle_period),
            decoration: SpawnTimer::new(config.decoration_period),
        }
    }

    /// Enqueue every firing due by `elapsed`, ordered by due time.  When both
    /// timers are due at the same instant the obstacle goes first.
    /// Returns how many events were enqueued.
    pub fn poll(&mut self, elapsed: Duration, queue: &mut EventQueue) -> usize {
        let mut fired = 0;
        loop {
            let next = [
                (self.obstacle.next_due(), GameEvent::ObstacleTimerFired),
                (self.decoration.next_due(), GameEvent::DecorationTimerFired),
            ]
            .into_iter()
            .filter_map(|(due, event)| due.filter(|d| *d <= elapsed).map(|d| (d, event)))
            .min_by_key(|(due, _)| *due);

            let Some((_, event)) = next else {
                return fired;
            };
            match event {
                GameEvent::ObstacleTimerFired => self.obstacle.fire(elapsed),
                _ => self.decoration.fire(elapsed),
            };
            queue.push(event);
            fired += 1;
        }
    }
}
