//! Pending-reply queue.
//!
//! Deferred admin replies are timestamps in a queue, drained by the widget's
//! tick, not threads. Each submit schedules one independent entry; nothing is
//! debounced or coalesced.

use std::collections::VecDeque;
use std::time::Instant;

/// A reply waiting to fire.
#[derive(Debug)]
pub struct PendingReply {
    /// Unique reply ID.
    pub id: u64,
    /// When this reply should be appended.
    pub fire_at: Instant,
    /// Reply text, chosen at schedule time.
    pub text: String,
    /// Whether this reply has been cancelled.
    pub cancelled: bool,
}

/// Handle for cancelling a scheduled reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyHandle(u64);

/// Queue of scheduled replies, fired in deadline order.
#[derive(Debug, Default)]
pub struct ReplyQueue {
    pending: VecDeque<PendingReply>,
    next_id: u64,
}

impl ReplyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a reply and return a handle for cancelling it.
    pub fn schedule(&mut self, fire_at: Instant, text: String) -> ReplyHandle {
        self.next_id += 1;
        let id = self.next_id;
        self.pending.push_back(PendingReply {
            id,
            fire_at,
            text,
            cancelled: false,
        });
        ReplyHandle(id)
    }

    /// Cancel a scheduled reply. Returns false if it already fired or was
    /// already cancelled.
    pub fn cancel(&mut self, handle: ReplyHandle) -> bool {
        match self.pending.iter_mut().find(|r| r.id == handle.0) {
            Some(reply) if !reply.cancelled => {
                reply.cancelled = true;
                true
            }
            _ => false,
        }
    }

    /// Cancel everything still queued.
    pub fn cancel_all(&mut self) {
        for reply in &mut self.pending {
            reply.cancelled = true;
        }
    }

    /// Remove and return all replies due at `now`, in fire-time order.
    /// Cancelled entries are dropped silently.
    pub fn take_due(&mut self, now: Instant) -> Vec<PendingReply> {
        let mut due = Vec::new();
        let mut rest = VecDeque::with_capacity(self.pending.len());
        for reply in self.pending.drain(..) {
            if reply.cancelled {
                continue;
            }
            if reply.fire_at <= now {
                due.push(reply);
            } else {
                rest.push_back(reply);
            }
        }
        self.pending = rest;
        due.sort_by(|a, b| a.fire_at.cmp(&b.fire_at).then(a.id.cmp(&b.id)));
        due
    }

    /// Earliest deadline among live entries.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending
            .iter()
            .filter(|r| !r.cancelled)
            .map(|r| r.fire_at)
            .min()
    }

    /// Number of live (not cancelled) entries.
    pub fn pending(&self) -> usize {
        self.pending.iter().filter(|r| !r.cancelled).count()
    }
}
