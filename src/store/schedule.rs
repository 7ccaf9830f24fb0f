//! Timeline of pending mutation schedules.
//!
//! Pure bookkeeping: the caller supplies `now` and gets back the mutations
//! that became due, in global emission order. The store task owns the clock.

use std::collections::VecDeque;

use tokio::time::Instant;

use super::order::DispatchOrder;
use crate::ui::mvi::Step;

struct Running<M> {
    seq: u64,
    steps: VecDeque<Step<M>>,
    ready_at: Instant,
}

impl<M> Running<M> {
    /// Emit steps up to the next delay. Returns true once the schedule is exhausted.
    fn burst(&mut self, out: &mut Vec<M>) -> bool {
        while let Some(step) = self.steps.pop_front() {
            match step {
                Step::Emit(mutation) => out.push(mutation),
                Step::Delay(delay) => {
                    self.ready_at += delay;
                    return false;
                }
            }
        }
        true
    }
}

pub(crate) struct Scheduler<M> {
    order: DispatchOrder,
    next_seq: u64,
    running: Vec<Running<M>>,
    queued: VecDeque<(u64, Vec<Step<M>>)>,
}

impl<M> Scheduler<M> {
    pub(crate) fn new(order: DispatchOrder) -> Self {
        Self {
            order,
            next_seq: 0,
            running: Vec::new(),
            queued: VecDeque::new(),
        }
    }

    /// Register a new schedule and return whatever it (and anything else) emits at `now`.
    pub(crate) fn push(&mut self, steps: Vec<Step<M>>, now: Instant) -> Vec<M> {
        let seq = self.next_seq;
        self.next_seq += 1;

        match self.order {
            DispatchOrder::Serial if !self.running.is_empty() || !self.queued.is_empty() => {
                self.queued.push_back((seq, steps));
            }
            _ => self.running.push(Running {
                seq,
                steps: steps.into(),
                ready_at: now,
            }),
        }
        self.advance(now)
    }

    /// Emit every step due at or before `now`, earliest first, ties by dispatch order.
    pub(crate) fn advance(&mut self, now: Instant) -> Vec<M> {
        let mut out = Vec::new();
        while let Some(index) = self.next_due(now) {
            let finished_at = self.running[index].ready_at;
            if self.running[index].burst(&mut out) {
                self.running.remove(index);
                if let Some((seq, steps)) = self.queued.pop_front() {
                    self.running.push(Running {
                        seq,
                        steps: steps.into(),
                        ready_at: finished_at,
                    });
                }
            }
        }
        out
    }

    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        self.running.iter().map(|r| r.ready_at).min()
    }

    pub(crate) fn is_idle(&self) -> bool {
        self.running.is_empty() && self.queued.is_empty()
    }

    pub(crate) fn pending(&self) -> usize {
        self.running.len() + self.queued.len()
    }

    fn next_due(&self, now: Instant) -> Option<usize> {
        self.running
            .iter()
            .enumerate()
            .filter(|(_, r)| r.ready_at <= now)
            .min_by_key(|(_, r)| (r.ready_at, r.seq))
            .map(|(index, _)| index)
    }
}
