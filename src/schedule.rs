//! The session's single source of deferred work. Boot-message pacing and
//! delayed navigation are queued here as explicit steps; the host arms a
//! real timer for each step and calls back with the handle when it fires.
//!
//! Handles are generation-stamped: tearing a session down bumps the
//! generation, so a timer that outlives its session claims nothing and
//! fires into the void instead of touching freed UI state.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle {
    id: u64,
    generation: u64,
}

/// What to do when a step's timer fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAction {
    /// Emit boot line `index` and queue the next one.
    Boot(usize),
    /// Hand the URL to the navigation collaborator.
    Navigate(String),
}

#[derive(Debug)]
struct Pending {
    id: u64,
    delay_ms: u32,
    action: StepAction,
    armed: bool,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    generation: u64,
    next_id: u64,
    pending: Vec<Pending>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, delay_ms: u32, action: StepAction) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle {
            id: self.next_id,
            generation: self.generation,
        };
        self.pending.push(Pending {
            id: handle.id,
            delay_ms,
            action,
            armed: false,
        });
        handle
    }

    /// Next step the host has not armed a timer for yet. Marks it armed so
    /// repeated polling never double-arms.
    pub fn next_unarmed(&mut self) -> Option<(TimerHandle, u32)> {
        let generation = self.generation;
        self.pending.iter_mut().find(|p| !p.armed).map(|p| {
            p.armed = true;
            (
                TimerHandle {
                    id: p.id,
                    generation,
                },
                p.delay_ms,
            )
        })
    }

    /// Redeem a fired handle for its action. Stale handles (cancelled, or
    /// already claimed) yield None - the caller must treat that as a no-op.
    pub fn claim(&mut self, handle: TimerHandle) -> Option<StepAction> {
        if handle.generation != self.generation {
            return None;
        }
        let idx = self.pending.iter().position(|p| p.id == handle.id)?;
        Some(self.pending.remove(idx).action)
    }

    /// Invalidate every outstanding handle. Session teardown calls this.
    pub fn cancel_all(&mut self) {
        self.generation += 1;
        self.pending.clear();
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_returns_the_action_exactly_once() {
        let mut s = Scheduler::new();
        let h = s.schedule(100, StepAction::Boot(0));
        assert_eq!(s.claim(h), Some(StepAction::Boot(0)));
        assert_eq!(s.claim(h), None);
        assert!(s.is_idle());
    }

    #[test]
    fn cancel_all_invalidates_outstanding_handles() {
        let mut s = Scheduler::new();
        let h = s.schedule(100, StepAction::Navigate("x".into()));
        s.cancel_all();
        assert_eq!(s.claim(h), None);
        assert!(s.is_idle());
    }

    #[test]
    fn handles_from_before_cancel_stay_dead_after_new_work() {
        let mut s = Scheduler::new();
        let old = s.schedule(100, StepAction::Boot(0));
        s.cancel_all();
        let fresh = s.schedule(100, StepAction::Boot(1));
        assert_eq!(s.claim(old), None);
        assert_eq!(s.claim(fresh), Some(StepAction::Boot(1)));
    }

    #[test]
    fn next_unarmed_yields_each_step_once() {
        let mut s = Scheduler::new();
        s.schedule(100, StepAction::Boot(0));
        s.schedule(300, StepAction::Boot(1));
        let (h0, d0) = s.next_unarmed().unwrap();
        let (h1, d1) = s.next_unarmed().unwrap();
        assert_ne!(h0, h1);
        assert_eq!((d0, d1), (100, 300));
        assert!(s.next_unarmed().is_none());
    }
}
