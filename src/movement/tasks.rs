//! Movement domain: entity-owned deferred tasks.
//!
//! Replaces engine-global timer handles with a small per-entity table of
//! one-shot tasks keyed by purpose, counted down in simulated time.

/// Purpose of a pending deferred task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Confirms, one tick after grounding, whether ground contact stuck.
    UngroundedCheck,
    /// Clears the wall-landed flag after its debounce window.
    WallLandedReset,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    kind: TaskKind,
    remaining: f32,
}

/// One-shot scheduled tasks keyed by [`TaskKind`].
///
/// Scheduling a kind that is already pending replaces its delay.
/// Cancelling a kind that is not pending is a no-op.
#[derive(Debug, Default)]
pub struct DeferredTasks {
    entries: Vec<Entry>,
}

impl DeferredTasks {
    pub fn schedule(&mut self, kind: TaskKind, delay: f32) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.kind == kind) {
            entry.remaining = delay;
        } else {
            self.entries.push(Entry {
                kind,
                remaining: delay,
            });
        }
    }

    pub fn cancel(&mut self, kind: TaskKind) {
        self.entries.retain(|e| e.kind != kind);
    }

    pub fn is_scheduled(&self, kind: TaskKind) -> bool {
        self.entries.iter().any(|e| e.kind == kind)
    }

    /// Advance every pending task by `dt` seconds, removing and returning
    /// the kinds that came due. A zero-delay task fires on the next tick.
    pub fn tick(&mut self, dt: f32) -> Vec<TaskKind> {
        let mut fired = Vec::new();
        self.entries.retain_mut(|entry| {
            entry.remaining -= dt;
            if entry.remaining <= 0.0 {
                fired.push(entry.kind);
                false
            } else {
                true
            }
        });
        fired
    }
}
