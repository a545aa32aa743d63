use std::time::{Duration, Instant};

/// A deferred effect tagged with the generation that scheduled it.
#[derive(Debug)]
struct Pending<E> {
    due: Instant,
    seq: u64,
    generation: u64,
    effect: E,
}

/// Fire-and-forget timer queue keyed by a session generation.
///
/// Effects scheduled before the last [`Scheduler::invalidate`] are never
/// returned from [`Scheduler::drain_due`]; they are dropped when they come due.
#[derive(Debug)]
pub struct Scheduler<E> {
    generation: u64,
    next_seq: u64,
    pending: Vec<Pending<E>>,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            generation: 0,
            next_seq: 0,
            pending: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration, effect: E) {
        self.pending.push(Pending {
            due: now + delay,
            seq: self.next_seq,
            generation: self.generation,
            effect,
        });
        self.next_seq += 1;
    }

    /// Start a new generation. Everything scheduled so far becomes stale.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Number of effects from the current generation still waiting to fire.
    pub fn live_count(&self) -> usize {
        self.pending
            .iter()
            .filter(|p| p.generation == self.generation)
            .count()
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.pending
            .iter()
            .filter(|p| p.generation == self.generation)
            .map(|p| p.due)
            .min()
    }

    /// Remove every effect due at `now` and return the live ones in firing order
    /// (due time first, then scheduling order).
    pub fn drain_due(&mut self, now: Instant) -> Vec<E> {
        let (mut due, rest): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.pending)
                .into_iter()
                .partition(|p| p.due <= now);
        self.pending = rest;
        due.sort_by_key(|p| (p.due, p.seq));

        let generation = self.generation;
        due.into_iter()
            .filter_map(|p| {
                if p.generation == generation {
                    Some(p.effect)
                } else {
                    tracing::debug!(
                        stale_generation = p.generation,
                        generation,
                        "dropping stale deferred effect"
                    );
                    None
                }
            })
            .collect()
    }
}
