use std::cell::Cell;

/// Behavior required of a live chart so the slot can retire it.
pub trait ChartInstance {
    /// Release the chart's drawing surface. Must be idempotent.
    fn dispose(&mut self);

    fn is_disposed(&self) -> bool;
}

/// Single owner of the "current chart or none" state.
///
/// The fetch-and-render cycle is the only writer: it disposes the previous
/// chart before installing its replacement, so at most one live chart exists
/// per component at any time.
#[derive(Debug, Default)]
pub struct ChartSlot<C: ChartInstance> {
    current: Option<C>,
}

impl<C: ChartInstance> ChartSlot<C> {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Install a fresh chart, disposing the previous one first.
    pub fn replace(&mut self, chart: C) {
        self.clear();
        self.current = Some(chart);
    }

    /// Dispose the current chart (if any) and empty the slot.
    pub fn clear(&mut self) {
        if let Some(mut old) = self.current.take() {
            old.dispose();
        }
    }

    pub fn current(&self) -> Option<&C> {
        self.current.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut C> {
        self.current.as_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}

impl<C: ChartInstance> Drop for ChartSlot<C> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Monotonic counter separating overlapping fetch cycles.
///
/// Each cycle calls `begin` and carries the returned token into its async
/// tail; before mutating the chart it checks `is_current`. A slower response
/// that resolves after a newer cycle began fails the check and skips its
/// draw step.
#[derive(Debug, Default)]
pub struct RenderGeneration {
    counter: Cell<u64>,
}

impl RenderGeneration {
    pub fn new() -> Self {
        Self { counter: Cell::new(0) }
    }

    /// Start a new cycle, invalidating every token handed out before.
    pub fn begin(&self) -> u64 {
        let next = self.counter.get() + 1;
        self.counter.set(next);
        next
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.counter.get() == token
    }
}
