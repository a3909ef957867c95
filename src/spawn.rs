/// Enemy spawn cadence.
///
/// At most one spawn ticket is outstanding at a time.  Each ticket carries
/// the id of the session that scheduled it; a ticket that comes due after
/// its session ended, or under a newer session, is dropped and ends the
/// chain.  Starting a session always installs a fresh ticket.

use crate::entities::SessionId;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnTicket {
    pub session: SessionId,
    pub due_at_ms: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnTiming {
    pub base_delay_ms: u32,
    pub delay_step_ms: u32,
    pub floor_ms: u32,
}

impl Default for SpawnTiming {
    fn default() -> Self {
        SpawnTiming {
            base_delay_ms: 1000,
            delay_step_ms: 100,
            floor_ms: 300,
        }
    }
}

impl SpawnTiming {
    /// `max(base - level * step, floor)`.
    pub fn delay_ms(&self, level: u32) -> u32 {
        let ramp = self.delay_step_ms.saturating_mul(level);
        self.base_delay_ms.saturating_sub(ramp).max(self.floor_ms)
    }
}

#[derive(Clone, Debug, Default)]
pub struct SpawnScheduler {
    timing: SpawnTiming,
    pending: Option<SpawnTicket>,
}

impl SpawnScheduler {
    pub fn new(timing: SpawnTiming) -> Self {
        SpawnScheduler { timing, pending: None }
    }

    pub fn timing(&self) -> &SpawnTiming {
        &self.timing
    }

    pub fn pending(&self) -> Option<SpawnTicket> {
        self.pending
    }

    /// Begin a new chain whose first spawn is due immediately.
    pub fn start(&mut self, session: SessionId, now_ms: f64) {
        self.pending = Some(SpawnTicket { session, due_at_ms: now_ms });
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Fire the outstanding ticket if it is due.  Returns true when an enemy
    /// should be spawned now; the follow-up ticket is scheduled from `level`.
    /// Fires at most once per call.  A ticket stamped with another session
    /// ends the chain; leaving Running goes through `cancel`.
    pub fn poll(&mut self, now_ms: f64, current: SessionId, level: u32) -> bool {
        let ticket = match self.pending {
            Some(t) if t.due_at_ms <= now_ms => t,
            _ => return false,
        };
        self.pending = None;

        if ticket.session != current {
            log::debug!("spawn chain for {:?} ended", ticket.session);
            return false;
        }

        self.pending = Some(SpawnTicket {
            session: ticket.session,
            due_at_ms: ticket.due_at_ms + self.timing.delay_ms(level) as f64,
        });
        true
    }
}
