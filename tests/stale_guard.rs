use std::cell::Cell;
use std::rc::Rc;
use stock_chart_wasm::domain::chart::{ChartInstance, ChartSlot, RenderGeneration};

#[test]
fn newer_cycle_invalidates_older_tokens() {
    let generation = RenderGeneration::new();

    let first = generation.begin();
    assert!(generation.is_current(first));

    let second = generation.begin();
    assert!(!generation.is_current(first));
    assert!(generation.is_current(second));
}

#[test]
fn tokens_are_monotonic() {
    let generation = RenderGeneration::new();
    let mut previous = generation.begin();
    for _ in 0..100 {
        let next = generation.begin();
        assert!(next > previous);
        previous = next;
    }
}

/// Chart stand-in that records whether it was ever drawn to.
struct RecordingChart {
    disposed: bool,
    draws: Rc<Cell<u32>>,
}

impl ChartInstance for RecordingChart {
    fn dispose(&mut self) {
        self.disposed = true;
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}

/// Two overlapping fetch cycles: the first one's response arrives after the
/// second cycle already began, so only the second may draw.
#[test]
fn only_latest_cycle_draws() {
    let generation = RenderGeneration::new();
    let draws = Rc::new(Cell::new(0));
    let mut slot = ChartSlot::new();

    // Cycle 1 starts: fresh chart, token captured, fetch in flight
    slot.replace(RecordingChart { disposed: false, draws: Rc::clone(&draws) });
    let first_token = generation.begin();

    // Cycle 2 starts before cycle 1 resolves
    slot.replace(RecordingChart { disposed: false, draws: Rc::clone(&draws) });
    let second_token = generation.begin();

    // Cycle 1's slow response finally arrives - stale, skips its draw
    if generation.is_current(first_token) {
        if let Some(chart) = slot.current_mut() {
            chart.draws.set(chart.draws.get() + 1);
        }
    }

    // Cycle 2's response draws
    if generation.is_current(second_token) {
        if let Some(chart) = slot.current_mut() {
            chart.draws.set(chart.draws.get() + 1);
        }
    }

    assert_eq!(draws.get(), 1);
}
